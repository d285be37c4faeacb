//! Appointment lifecycle calls. Everything here is bearer-token protected.

use async_trait::async_trait;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::appointment::{Appointment, BookingRequest, RescheduleRequest};
use tracing::{debug, info};

use crate::{ApiClient, endpoints, http};

#[async_trait]
pub trait AppointmentApi {
    /// Create a new appointment.
    async fn book(&self, token: &str, request: BookingRequest) -> BookingResult<Appointment>;

    /// Move an existing appointment to a new date/time.
    async fn reschedule(
        &self,
        token: &str,
        appointment_id: i64,
        request: RescheduleRequest,
    ) -> BookingResult<Appointment>;

    /// Cancel an appointment.
    async fn cancel(&self, token: &str, appointment_id: i64) -> BookingResult<()>;

    /// The caller's appointments.
    async fn my_appointments(&self, token: &str) -> BookingResult<Vec<Appointment>>;

    /// A single appointment by id (used to prefill the reschedule flow).
    async fn get_appointment(&self, token: &str, appointment_id: i64)
    -> BookingResult<Appointment>;
}

#[async_trait]
impl AppointmentApi for ApiClient {
    async fn book(&self, token: &str, request: BookingRequest) -> BookingResult<Appointment> {
        let url = endpoints::appointments(&self.config().appointment_service_url);
        debug!("POST {url}");
        let appointment: Appointment =
            http::send(self.http().post(url).bearer_auth(token).json(&request)).await?;
        info!(appointment_id = appointment.id, "Appointment created");
        Ok(appointment)
    }

    async fn reschedule(
        &self,
        token: &str,
        appointment_id: i64,
        request: RescheduleRequest,
    ) -> BookingResult<Appointment> {
        let url = endpoints::reschedule(&self.config().appointment_service_url, appointment_id);
        debug!("PUT {url}");
        let appointment: Appointment =
            http::send(self.http().put(url).bearer_auth(token).json(&request)).await?;
        info!(appointment_id, "Appointment rescheduled");
        Ok(appointment)
    }

    async fn cancel(&self, token: &str, appointment_id: i64) -> BookingResult<()> {
        let url = endpoints::cancel(&self.config().appointment_service_url, appointment_id);
        debug!("PUT {url}");
        http::send_unit(self.http().put(url).bearer_auth(token)).await?;
        info!(appointment_id, "Appointment cancelled");
        Ok(())
    }

    async fn my_appointments(&self, token: &str) -> BookingResult<Vec<Appointment>> {
        let url = endpoints::my_appointments(&self.config().appointment_service_url);
        debug!("GET {url}");
        http::send(self.http().get(url).bearer_auth(token)).await
    }

    async fn get_appointment(
        &self,
        token: &str,
        appointment_id: i64,
    ) -> BookingResult<Appointment> {
        let url = endpoints::appointment(&self.config().appointment_service_url, appointment_id);
        debug!("GET {url}");
        http::send(self.http().get(url).bearer_auth(token)).await
    }
}
