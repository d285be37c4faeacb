use barberbook_core::models::appointment::{
    Appointment, AppointmentStatus, BookingRequest, RescheduleRequest,
};
use barberbook_core::models::shop::{Shop, ShopListing, filter_shops};
use barberbook_core::models::time_slot::{SlotRecord, TimeSlot};
use barberbook_core::models::user::{AuthResponse, User, UserRole};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_string};
use serde_test::{Token, assert_tokens};

#[test]
fn user_role_uses_screaming_snake_case() {
    assert_tokens(
        &UserRole::ShopOwner,
        &[Token::UnitVariant {
            name: "UserRole",
            variant: "SHOP_OWNER",
        }],
    );
    assert_tokens(
        &UserRole::Customer,
        &[Token::UnitVariant {
            name: "UserRole",
            variant: "CUSTOMER",
        }],
    );
}

#[test]
fn role_permissions_mirror_the_platform_rules() {
    assert!(UserRole::ShopOwner.has_management_permissions());
    assert!(!UserRole::Customer.has_management_permissions());

    assert!(UserRole::Customer.can_book_appointments());
    assert!(!UserRole::Staff.can_book_appointments());

    assert!(UserRole::Staff.can_provide_services());
    assert!(UserRole::ShopOwner.can_provide_services());
    assert!(!UserRole::Customer.can_provide_services());
}

#[test]
fn appointment_status_uses_screaming_snake_case() {
    assert_tokens(
        &AppointmentStatus::NoShow,
        &[Token::UnitVariant {
            name: "AppointmentStatus",
            variant: "NO_SHOW",
        }],
    );
}

#[test]
fn user_deserializes_from_service_json() {
    let raw = json!({
        "id": 7,
        "email": "jane@example.com",
        "role": "CUSTOMER",
        "firstName": "Jane",
        "lastName": "Doe",
        "phone": "+3531234567",
        "isActive": true,
        "createdAt": "2025-11-01 09:30:00"
    })
    .to_string();

    let user: User = from_str(&raw).expect("Failed to deserialize user");
    assert_eq!(user.id, 7);
    assert_eq!(user.role, UserRole::Customer);
    assert_eq!(user.full_name(), "Jane Doe");
    assert!(user.created_at.is_some());
}

#[test]
fn auth_response_round_trips() {
    let raw = json!({
        "accessToken": "abc.def.ghi",
        "tokenType": "Bearer",
        "expiresIn": 3600,
        "refreshToken": "refresh-me",
        "user": {
            "id": 7,
            "email": "jane@example.com",
            "role": "CUSTOMER",
            "firstName": "Jane",
            "lastName": "Doe"
        }
    })
    .to_string();

    let response: AuthResponse = from_str(&raw).expect("Failed to deserialize auth response");
    assert_eq!(response.access_token, "abc.def.ghi");
    assert_eq!(response.refresh_token.as_deref(), Some("refresh-me"));

    let round = to_string(&response).expect("Failed to serialize auth response");
    let again: AuthResponse = from_str(&round).expect("Failed to deserialize round trip");
    assert_eq!(again.user.id, response.user.id);
}

#[test]
fn slot_records_accept_bare_strings_and_objects() {
    let raw = r#"["09:00", {"time": "09:30", "available": false, "reason": "booked"}, {"time": "10:00"}]"#;
    let records: Vec<SlotRecord> = from_str(raw).expect("Failed to deserialize slots");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].time(), "09:00");
    assert!(records[0].is_available());
    assert!(!records[1].is_available());
    assert_eq!(records[1].reason(), Some("booked"));
    assert!(records[2].is_available());

    let normalized: Vec<TimeSlot> = records.iter().map(TimeSlot::from).collect();
    assert_eq!(normalized[1].time, "09:30");
    assert!(!normalized[1].available);
}

#[test]
fn shop_listing_accepts_page_objects_and_bare_arrays() {
    let page = json!({
        "content": [{ "id": 1, "name": "Fade Factory" }],
        "totalElements": 1
    })
    .to_string();
    let listing: ShopListing = from_str(&page).expect("Failed to deserialize page listing");
    assert_eq!(listing.into_shops().len(), 1);

    let array = json!([
        { "id": 1, "name": "Fade Factory" },
        { "id": 2, "name": "Clipper City" }
    ])
    .to_string();
    let listing: ShopListing = from_str(&array).expect("Failed to deserialize array listing");
    assert_eq!(listing.into_shops().len(), 2);
}

#[test]
fn shop_search_matches_across_fields() {
    let shops: Vec<Shop> = serde_json::from_value(json!([
        { "id": 1, "name": "Fade Factory", "city": "Dublin" },
        { "id": 2, "name": "Clipper City", "description": "Classic cuts downtown" },
        { "id": 3, "name": "The Chair", "address": "14 Main Street, Galway" }
    ]))
    .unwrap();

    let by_city: Vec<i64> = filter_shops(&shops, "dublin").iter().map(|s| s.id).collect();
    assert_eq!(by_city, vec![1]);

    let by_description: Vec<i64> = filter_shops(&shops, "Downtown").iter().map(|s| s.id).collect();
    assert_eq!(by_description, vec![2]);

    let all: Vec<i64> = filter_shops(&shops, "  ").iter().map(|s| s.id).collect();
    assert_eq!(all, vec![1, 2, 3]);

    assert!(filter_shops(&shops, "nowhere").is_empty());
}

#[test]
fn booking_request_omits_absent_employee() {
    let request = BookingRequest {
        shop_id: 3,
        service_id: 9,
        employee_id: None,
        appointment_date_time: "2025-11-17T14:30:00".to_string(),
        notes: String::new(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("employeeId").is_none());
    assert_eq!(value["appointmentDateTime"], "2025-11-17T14:30:00");

    let with_employee = BookingRequest {
        employee_id: Some(4),
        ..request
    };
    let value = serde_json::to_value(&with_employee).unwrap();
    assert_eq!(value["employeeId"], 4);
}

#[test]
fn reschedule_request_keeps_null_employee() {
    let request = RescheduleRequest {
        new_date_time: "2025-11-18T10:00:00".to_string(),
        employee_id: None,
        notes: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    // The reschedule endpoint expects the key even when no employee is kept.
    assert!(value.get("employeeId").is_some());
    assert!(value["employeeId"].is_null());
    assert_eq!(value["newDateTime"], "2025-11-18T10:00:00");
}

#[test]
fn appointment_upcoming_compares_full_datetime() {
    let raw = json!({
        "id": 11,
        "appointmentDate": "2025-11-17",
        "appointmentTime": "14:00:00",
        "status": "CONFIRMED",
        "shopName": "Fade Factory",
        "serviceName": "Beard Trim"
    })
    .to_string();

    let appointment: Appointment = from_str(&raw).expect("Failed to deserialize appointment");
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);

    let before = NaiveDate::from_ymd_opt(2025, 11, 17)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let after = NaiveDate::from_ymd_opt(2025, 11, 17)
        .unwrap()
        .and_hms_opt(15, 0, 0)
        .unwrap();

    assert!(appointment.is_upcoming(before));
    assert!(!appointment.is_upcoming(after));
}
