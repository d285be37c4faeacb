use barberbook_client::endpoints;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const SHOP: &str = "http://localhost:8082";
const APPT: &str = "http://localhost:8083";
const USER: &str = "http://localhost:8081";

#[test]
fn shop_listing_carries_paging() {
    assert_eq!(
        endpoints::shops_page(SHOP, 0, 100),
        "http://localhost:8082/api/shops?page=0&size=100"
    );
}

#[test]
fn shop_detail_paths() {
    assert_eq!(endpoints::shop(SHOP, 3), "http://localhost:8082/api/shops/3");
    assert_eq!(
        endpoints::shop_service(SHOP, 3, 9),
        "http://localhost:8082/api/shops/3/services/9"
    );
    assert_eq!(
        endpoints::shop_employees(SHOP, 3),
        "http://localhost:8082/api/shops/3/employees"
    );
    assert_eq!(
        endpoints::my_shops(SHOP),
        "http://localhost:8082/api/shops/my-shops"
    );
}

#[test]
fn availability_omits_absent_employee() {
    let date = NaiveDate::from_ymd_opt(2025, 11, 17).unwrap();
    assert_eq!(
        endpoints::availability(APPT, 3, date, None),
        "http://localhost:8083/api/availability/shop/3/date/2025-11-17"
    );
    assert_eq!(
        endpoints::availability(APPT, 3, date, Some(12)),
        "http://localhost:8083/api/availability/shop/3/date/2025-11-17?employeeId=12"
    );
}

#[test]
fn appointment_lifecycle_paths() {
    assert_eq!(
        endpoints::appointments(APPT),
        "http://localhost:8083/api/appointments"
    );
    assert_eq!(
        endpoints::reschedule(APPT, 11),
        "http://localhost:8083/api/appointments/11/reschedule"
    );
    assert_eq!(
        endpoints::cancel(APPT, 11),
        "http://localhost:8083/api/appointments/11/cancel"
    );
    assert_eq!(
        endpoints::my_appointments(APPT),
        "http://localhost:8083/api/appointments/my-appointments"
    );
}

#[test]
fn identity_paths() {
    assert_eq!(
        endpoints::login(USER),
        "http://localhost:8081/api/users/auth/login"
    );
    assert_eq!(
        endpoints::register(USER),
        "http://localhost:8081/api/users/register"
    );
    assert_eq!(
        endpoints::profile(USER),
        "http://localhost:8081/api/users/profile"
    );
    assert_eq!(
        endpoints::refresh(USER),
        "http://localhost:8081/api/users/auth/refresh"
    );
}
