//! Display formatting shared by the console screens.

use barberbook_core::models::appointment::Appointment;
use barberbook_core::models::shop::Shop;
use barberbook_core::time_format::pretty_time;
use chrono::NaiveDate;

pub fn format_price(price: Option<f64>) -> String {
    format!("${:.2}", price.unwrap_or(0.0))
}

pub fn format_duration(minutes: Option<i64>) -> String {
    format!("{} minutes", minutes.unwrap_or(30))
}

/// Long-form date, e.g. "November 17, 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn format_slot(time: &str) -> String {
    pretty_time(time)
}

/// One listing line for a shop card.
pub fn shop_line(shop: &Shop) -> String {
    let location = [shop.city.as_deref(), shop.state.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    let location = if location.is_empty() {
        "Location not specified".to_string()
    } else {
        location
    };

    let hours = match (shop.opening_time.as_deref(), shop.closing_time.as_deref()) {
        (Some(open), Some(close)) => format!("{open} - {close}"),
        _ => "Hours not available".to_string(),
    };

    format!("#{} {} | {} | {}", shop.id, shop.name, location, hours)
}

/// One listing line for an appointment row.
pub fn appointment_line(appointment: &Appointment) -> String {
    format!(
        "#{} {} at {} | {} ({:?})",
        appointment.id,
        format_date(appointment.appointment_date),
        pretty_time(&appointment.appointment_time.format("%H:%M:%S").to_string()),
        appointment.service_name.as_deref().unwrap_or("Service"),
        appointment.status,
    )
}
