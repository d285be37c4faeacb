//! URL construction for every consumed endpoint.
//!
//! Kept as plain functions so the exact paths stay greppable and testable
//! without a network.

use chrono::NaiveDate;

// User service

pub fn login(base: &str) -> String {
    format!("{base}/api/users/auth/login")
}

pub fn register(base: &str) -> String {
    format!("{base}/api/users/register")
}

pub fn profile(base: &str) -> String {
    format!("{base}/api/users/profile")
}

pub fn refresh(base: &str) -> String {
    format!("{base}/api/users/auth/refresh")
}

// Shop service

pub fn shops_page(base: &str, page: u32, size: u32) -> String {
    format!("{base}/api/shops?page={page}&size={size}")
}

pub fn shops(base: &str) -> String {
    format!("{base}/api/shops")
}

pub fn my_shops(base: &str) -> String {
    format!("{base}/api/shops/my-shops")
}

pub fn shop(base: &str, shop_id: i64) -> String {
    format!("{base}/api/shops/{shop_id}")
}

pub fn shop_services(base: &str, shop_id: i64) -> String {
    format!("{base}/api/shops/{shop_id}/services")
}

pub fn shop_service(base: &str, shop_id: i64, service_id: i64) -> String {
    format!("{base}/api/shops/{shop_id}/services/{service_id}")
}

pub fn shop_employees(base: &str, shop_id: i64) -> String {
    format!("{base}/api/shops/{shop_id}/employees")
}

pub fn shop_employee(base: &str, shop_id: i64, employee_id: i64) -> String {
    format!("{base}/api/shops/{shop_id}/employees/{employee_id}")
}

// Appointment service

pub fn availability(base: &str, shop_id: i64, date: NaiveDate, employee_id: Option<i64>) -> String {
    let mut url = format!(
        "{base}/api/availability/shop/{shop_id}/date/{}",
        date.format("%Y-%m-%d")
    );
    if let Some(employee_id) = employee_id {
        url.push_str("?employeeId=");
        url.push_str(&urlencoding::encode(&employee_id.to_string()));
    }
    url
}

pub fn appointments(base: &str) -> String {
    format!("{base}/api/appointments")
}

pub fn appointment(base: &str, appointment_id: i64) -> String {
    format!("{base}/api/appointments/{appointment_id}")
}

pub fn reschedule(base: &str, appointment_id: i64) -> String {
    format!("{base}/api/appointments/{appointment_id}/reschedule")
}

pub fn cancel(base: &str, appointment_id: i64) -> String {
    format!("{base}/api/appointments/{appointment_id}/cancel")
}

pub fn my_appointments(base: &str) -> String {
    format!("{base}/api/appointments/my-appointments")
}
