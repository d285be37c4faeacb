//! Availability feed queries.

use async_trait::async_trait;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::time_slot::SlotRecord;
use chrono::NaiveDate;
use tracing::debug;

use crate::{ApiClient, endpoints, http};

#[async_trait]
pub trait AvailabilityApi {
    /// Raw slot records for a shop on a date, optionally narrowed to one
    /// employee. The feed is unfiltered: past and unavailable slots are
    /// still present (see `barberbook_core::availability`).
    async fn day_slots(
        &self,
        shop_id: i64,
        date: NaiveDate,
        employee_id: Option<i64>,
    ) -> BookingResult<Vec<SlotRecord>>;
}

#[async_trait]
impl AvailabilityApi for ApiClient {
    async fn day_slots(
        &self,
        shop_id: i64,
        date: NaiveDate,
        employee_id: Option<i64>,
    ) -> BookingResult<Vec<SlotRecord>> {
        let url = endpoints::availability(
            &self.config().appointment_service_url,
            shop_id,
            date,
            employee_id,
        );
        debug!("GET {url}");
        http::send(self.http().get(url)).await
    }
}
