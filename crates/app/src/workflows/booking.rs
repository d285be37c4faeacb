//! # Booking Workflow
//!
//! The create-or-reschedule flow. The workflow is constructed from a
//! navigation context (the analog of the booking page's query string),
//! loads the shop/service/employee data it needs, answers availability for
//! whichever date the user picks, and finally submits either a create or a
//! reschedule call depending on how it was entered.
//!
//! All wall-clock inputs (`now`) are parameters; nothing in here reads the
//! system time.

use barberbook_client::{AppointmentApi, AvailabilityApi, ShopApi};
use barberbook_core::availability::bookable_slots;
use barberbook_core::errors::{BookingError, BookingResult};
use barberbook_core::models::appointment::{Appointment, BookingRequest, RescheduleRequest};
use barberbook_core::models::employee::Employee;
use barberbook_core::models::service::Service;
use barberbook_core::models::shop::Shop;
use barberbook_core::models::time_slot::TimeSlot;
use barberbook_core::session::Session;
use barberbook_core::time_format::{combine_date_time, normalize_to_hms};
use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::{info, warn};

/// How far ahead a booking date may be picked.
pub const MAX_DAYS_AHEAD: u64 = 60;

/// Navigation context the booking flow is entered with.
///
/// Edit mode (reschedule instead of create) requires *both* the
/// `edit=true` flag and an appointment id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingContext {
    pub shop_id: i64,
    pub service_id: i64,
    pub appointment_id: Option<i64>,
    pub edit: bool,
}

impl BookingContext {
    pub fn new(shop_id: i64, service_id: i64) -> Self {
        Self {
            shop_id,
            service_id,
            appointment_id: None,
            edit: false,
        }
    }

    pub fn edit(shop_id: i64, service_id: i64, appointment_id: i64) -> Self {
        Self {
            shop_id,
            service_id,
            appointment_id: Some(appointment_id),
            edit: true,
        }
    }

    /// Parse a `key=value&key=value` query string.
    pub fn parse(query: &str) -> BookingResult<Self> {
        let mut shop_id = None;
        let mut service_id = None;
        let mut appointment_id = None;
        let mut edit_flag = false;

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(value)
                .map_err(|_| BookingError::Validation(format!("Unreadable value for {key}")))?;
            match key {
                "shopId" => shop_id = value.parse::<i64>().ok(),
                "serviceId" => service_id = value.parse::<i64>().ok(),
                "appointmentId" => appointment_id = value.parse::<i64>().ok(),
                "edit" => edit_flag = value == "true",
                _ => {}
            }
        }

        let (Some(shop_id), Some(service_id)) = (shop_id, service_id) else {
            return Err(BookingError::Validation(
                "Missing shop or service information. Please start from the shop page."
                    .to_string(),
            ));
        };

        Ok(Self {
            shop_id,
            service_id,
            appointment_id,
            edit: edit_flag && appointment_id.is_some(),
        })
    }
}

pub struct BookingWorkflow<A> {
    api: A,
    context: BookingContext,
    session: Option<Session>,

    shop: Shop,
    service: Service,
    employees: Vec<Employee>,
    existing: Option<Appointment>,

    selected_employee: Option<i64>,
    selected_date: NaiveDate,
    selected_slot: Option<String>,
    slots: Vec<TimeSlot>,

    // Mirrors the submit button's disabled state: set while a submission
    // is in flight, restored on every outcome.
    submitting: bool,
}

impl<A> std::fmt::Debug for BookingWorkflow<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingWorkflow").finish_non_exhaustive()
    }
}

impl<A> BookingWorkflow<A>
where
    A: ShopApi + AvailabilityApi + AppointmentApi + Sync,
{
    /// Load everything the flow needs and present the first slot grid.
    ///
    /// Shop and service are fetched sequentially; in edit mode the existing
    /// appointment is loaded next so its employee/date/time prefill the
    /// form. An employee-listing failure degrades to "any available"
    /// rather than blocking the flow.
    pub async fn start(
        api: A,
        context: BookingContext,
        session: Option<Session>,
        now: NaiveDateTime,
    ) -> BookingResult<Self> {
        let shop = api.get_shop(context.shop_id).await?;
        let service = api.get_service(context.shop_id, context.service_id).await?;

        let mut existing = None;
        let mut selected_employee = None;
        if context.edit {
            let appointment_id = context.appointment_id.ok_or_else(|| {
                BookingError::Validation("No appointment to edit.".to_string())
            })?;
            let token = session.as_ref().map(|s| s.access_token.as_str()).ok_or_else(|| {
                BookingError::Authentication(
                    "Please login to manage your appointment".to_string(),
                )
            })?;
            let appointment = api.get_appointment(token, appointment_id).await?;
            selected_employee = appointment.employee_id;
            existing = Some(appointment);
        }

        let employees = match api.list_employees(context.shop_id).await {
            Ok(employees) => employees,
            Err(err) => {
                warn!("Failed to load employees, falling back to any available: {err}");
                Vec::new()
            }
        };

        let today = now.date();
        let default_date = match &existing {
            Some(appointment) => appointment.appointment_date,
            None => today + Days::new(1),
        };
        let (min, max) = Self::date_bounds(today);
        let selected_date = default_date.clamp(min, max);

        let mut workflow = Self {
            api,
            context,
            session,
            shop,
            service,
            employees,
            existing,
            selected_employee,
            selected_date,
            selected_slot: None,
            slots: Vec::new(),
            submitting: false,
        };

        workflow.load_slots(now).await?;
        workflow.preselect_existing_slot();

        Ok(workflow)
    }

    /// Selectable date range: today through sixty days out.
    pub fn date_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today, today + Days::new(MAX_DAYS_AHEAD))
    }

    /// Pick a new date. Clears the slot selection and re-queries
    /// availability; re-picking the date is also the manual retry path
    /// after a failed slot query.
    pub async fn select_date(&mut self, date: NaiveDate, now: NaiveDateTime) -> BookingResult<()> {
        let (min, max) = Self::date_bounds(now.date());
        if date < min || date > max {
            return Err(BookingError::Validation(format!(
                "Please choose a date between {min} and {max}."
            )));
        }
        self.selected_date = date;
        self.load_slots(now).await
    }

    /// Narrow (or widen) the query to one employee. Clears the slot
    /// selection and re-queries availability.
    pub async fn select_employee(
        &mut self,
        employee_id: Option<i64>,
        now: NaiveDateTime,
    ) -> BookingResult<()> {
        if let Some(id) = employee_id {
            if !self.employees.iter().any(|e| e.id == id) {
                return Err(BookingError::Validation(format!(
                    "No employee {id} at this shop."
                )));
            }
        }
        self.selected_employee = employee_id;
        self.load_slots(now).await
    }

    async fn load_slots(&mut self, now: NaiveDateTime) -> BookingResult<()> {
        self.selected_slot = None;
        self.slots.clear();

        let records = self
            .api
            .day_slots(self.context.shop_id, self.selected_date, self.selected_employee)
            .await?;

        self.slots = bookable_slots(&records, self.selected_date, now.date(), now.time());
        info!(
            date = %self.selected_date,
            bookable = self.slots.len(),
            total = records.len(),
            "Availability loaded"
        );
        Ok(())
    }

    fn preselect_existing_slot(&mut self) {
        let Some(existing) = &self.existing else {
            return;
        };
        let target = existing.appointment_time.format("%H:%M:%S").to_string();
        let offered = self
            .slots
            .iter()
            .find(|slot| normalize_to_hms(&slot.time).as_deref() == Some(target.as_str()))
            .map(|slot| slot.time.clone());
        // Keep the original time even when the feed no longer offers it;
        // submitting the unchanged time is a valid reschedule no-op.
        self.selected_slot = Some(offered.unwrap_or(target));
    }

    /// Pick one of the offered slots.
    pub fn select_slot(&mut self, time: &str) -> BookingResult<()> {
        if !self.slots.iter().any(|slot| slot.time == time) {
            return Err(BookingError::Validation(
                "That time is not available. Please pick one of the offered slots.".to_string(),
            ));
        }
        self.selected_slot = Some(time.to_string());
        Ok(())
    }

    /// Label for the primary action.
    pub fn action_label(&self) -> &'static str {
        if self.context.edit {
            "Reschedule Appointment"
        } else {
            "Book Appointment"
        }
    }

    /// Notice to show instead of an empty slot grid.
    pub fn empty_slots_notice(&self, today: NaiveDate) -> Option<&'static str> {
        if !self.slots.is_empty() {
            return None;
        }
        if self.selected_date == today {
            Some("No available time slots remaining for today. Please select another date.")
        } else {
            Some("No available time slots for this date. Please select another date.")
        }
    }

    /// Submit the booking (or the reschedule, in edit mode).
    ///
    /// Local failures (no authentication, no slot selected) are rejected
    /// before any network call. The in-flight flag is restored on every
    /// outcome so the action stays re-triggerable after a failure.
    pub async fn submit(&mut self) -> BookingResult<Appointment> {
        if self.submitting {
            return Err(BookingError::Validation(
                "A submission is already in progress.".to_string(),
            ));
        }

        let token = match &self.session {
            Some(session) => session.access_token.clone(),
            None => {
                let verb = if self.context.edit { "manage" } else { "book" };
                return Err(BookingError::Authentication(format!(
                    "Please login to {verb} an appointment"
                )));
            }
        };

        let Some(slot) = self.selected_slot.clone() else {
            return Err(BookingError::Validation(
                "Please select a time slot".to_string(),
            ));
        };
        let time = normalize_to_hms(&slot).ok_or_else(|| {
            BookingError::Validation("Please select a time slot".to_string())
        })?;
        let date_time = combine_date_time(self.selected_date, &time);

        self.submitting = true;
        let result = if self.context.edit {
            self.submit_reschedule(&token, date_time).await
        } else {
            self.submit_create(&token, date_time).await
        };
        self.submitting = false;

        if let Err(err) = &result {
            warn!("Submission failed: {err}");
        }
        result
    }

    async fn submit_create(&self, token: &str, date_time: String) -> BookingResult<Appointment> {
        let request = BookingRequest {
            shop_id: self.context.shop_id,
            service_id: self.context.service_id,
            employee_id: self.selected_employee,
            appointment_date_time: date_time,
            notes: self.preferred_employee_note(),
        };
        self.api.book(token, request).await
    }

    async fn submit_reschedule(
        &self,
        token: &str,
        date_time: String,
    ) -> BookingResult<Appointment> {
        let appointment_id = self.context.appointment_id.ok_or_else(|| {
            BookingError::Validation("No appointment to edit.".to_string())
        })?;
        let request = RescheduleRequest {
            new_date_time: date_time,
            employee_id: self.selected_employee,
            notes: None,
        };
        self.api.reschedule(token, appointment_id, request).await
    }

    fn preferred_employee_note(&self) -> String {
        match self.selected_employee {
            Some(id) => {
                let name = self
                    .employees
                    .iter()
                    .find(|e| e.id == id)
                    .map(Employee::display_name)
                    .unwrap_or_default();
                format!("Preferred employee: {name} ({id})")
            }
            None => String::new(),
        }
    }

    // Accessors for the rendering layer.

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_slot(&self) -> Option<&str> {
        self.selected_slot.as_deref()
    }

    pub fn selected_employee(&self) -> Option<i64> {
        self.selected_employee
    }

    pub fn is_edit(&self) -> bool {
        self.context.edit
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
