//! The customer's appointment dashboard.

use barberbook_client::AppointmentApi;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::appointment::{Appointment, AppointmentStatus};
use barberbook_core::session::Session;
use chrono::NaiveDateTime;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    #[default]
    Upcoming,
    Past,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub upcoming: usize,
    pub completed: usize,
}

pub struct DashboardWorkflow<A> {
    api: A,
    session: Session,
    appointments: Vec<Appointment>,
    filter: AppointmentFilter,
}

impl<A: AppointmentApi + Sync> DashboardWorkflow<A> {
    pub fn new(api: A, session: Session) -> Self {
        Self {
            api,
            session,
            appointments: Vec::new(),
            filter: AppointmentFilter::default(),
        }
    }

    pub fn user_name(&self) -> String {
        self.session.user.full_name()
    }

    pub async fn load(&mut self) -> BookingResult<()> {
        let appointments = self
            .api
            .my_appointments(&self.session.access_token)
            .await?;
        info!(count = appointments.len(), "Appointments loaded");
        self.appointments = appointments;
        Ok(())
    }

    pub fn set_filter(&mut self, filter: AppointmentFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> AppointmentFilter {
        self.filter
    }

    /// Appointments visible under the current filter tab.
    pub fn visible(&self, now: NaiveDateTime) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| match self.filter {
                AppointmentFilter::Upcoming => {
                    appointment.status != AppointmentStatus::Cancelled
                        && appointment.is_upcoming(now)
                }
                AppointmentFilter::Past => {
                    appointment.status != AppointmentStatus::Cancelled
                        && !appointment.is_upcoming(now)
                }
                AppointmentFilter::Cancelled => {
                    appointment.status == AppointmentStatus::Cancelled
                }
            })
            .collect()
    }

    pub fn stats(&self, now: NaiveDateTime) -> DashboardStats {
        DashboardStats {
            upcoming: self
                .appointments
                .iter()
                .filter(|a| a.status != AppointmentStatus::Cancelled && a.is_upcoming(now))
                .count(),
            completed: self
                .appointments
                .iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count(),
        }
    }

    /// Cancel one of the loaded appointments and mark it locally so the
    /// list reflects the change without a refetch.
    pub async fn cancel(&mut self, appointment_id: i64) -> BookingResult<()> {
        self.api
            .cancel(&self.session.access_token, appointment_id)
            .await?;

        if let Some(appointment) = self
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
        {
            appointment.status = AppointmentStatus::Cancelled;
        }
        Ok(())
    }

    pub fn appointment(&self, appointment_id: i64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == appointment_id)
    }
}
