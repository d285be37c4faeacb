use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

/// An appointment as returned by the appointment service, enriched with
/// customer, shop, service, and employee display fields resolved from the
/// other services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,

    #[serde(default)]
    pub shop_id: Option<i64>,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub shop_address: Option<String>,
    #[serde(default)]
    pub shop_phone: Option<String>,

    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub service_price: Option<f64>,
    /// Duration in minutes.
    #[serde(default)]
    pub service_duration: Option<i64>,

    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub employee_name: Option<String>,

    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Appointment {
    pub fn start(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }

    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.start() > now
    }
}

/// Payload for creating an appointment. `appointment_date_time` is the
/// `YYYY-MM-DDTHH:MM:SS` value assembled from the chosen date and slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub shop_id: i64,
    pub service_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    pub appointment_date_time: String,
    #[serde(default)]
    pub notes: String,
}

/// Payload for moving an existing appointment to a new date/time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub new_date_time: String,
    pub employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
