//! Mock API for workflow tests.
//!
//! [`MockApi`] implements all four API traits, so a workflow under test can
//! receive one double regardless of which backend concerns it touches.

use barberbook_core::errors::BookingResult;
use barberbook_core::models::appointment::{Appointment, BookingRequest, RescheduleRequest};
use barberbook_core::models::employee::{Employee, EmployeeRequest};
use barberbook_core::models::service::{Service, ServiceRequest};
use barberbook_core::models::shop::{Shop, ShopRequest};
use barberbook_core::models::time_slot::SlotRecord;
use barberbook_core::models::user::{
    AuthResponse, LoginRequest, ProfileUpdateRequest, RefreshTokenRequest, RegistrationRequest,
    User,
};
use chrono::NaiveDate;

use crate::{AppointmentApi, AvailabilityApi, ShopApi, UserApi};

mockall::mock! {
    pub Api {}

    #[async_trait::async_trait]
    impl UserApi for Api {
        async fn login(&self, request: LoginRequest) -> BookingResult<AuthResponse>;
        async fn register(&self, request: RegistrationRequest) -> BookingResult<User>;
        async fn update_profile(
            &self,
            token: &str,
            request: ProfileUpdateRequest,
        ) -> BookingResult<User>;
        async fn refresh(&self, request: RefreshTokenRequest) -> BookingResult<AuthResponse>;
    }

    #[async_trait::async_trait]
    impl ShopApi for Api {
        async fn list_shops(&self, page: u32, size: u32) -> BookingResult<Vec<Shop>>;
        async fn get_shop(&self, shop_id: i64) -> BookingResult<Shop>;
        async fn list_services(&self, shop_id: i64) -> BookingResult<Vec<Service>>;
        async fn get_service(&self, shop_id: i64, service_id: i64) -> BookingResult<Service>;
        async fn list_employees(&self, shop_id: i64) -> BookingResult<Vec<Employee>>;
        async fn my_shops(&self, token: &str) -> BookingResult<Vec<Shop>>;
        async fn create_shop(&self, token: &str, request: ShopRequest) -> BookingResult<Shop>;
        async fn create_service(
            &self,
            token: &str,
            shop_id: i64,
            request: ServiceRequest,
        ) -> BookingResult<Service>;
        async fn update_service(
            &self,
            token: &str,
            shop_id: i64,
            service_id: i64,
            request: ServiceRequest,
        ) -> BookingResult<Service>;
        async fn delete_service(
            &self,
            token: &str,
            shop_id: i64,
            service_id: i64,
        ) -> BookingResult<()>;
        async fn create_employee(
            &self,
            token: &str,
            shop_id: i64,
            request: EmployeeRequest,
        ) -> BookingResult<Employee>;
        async fn update_employee(
            &self,
            token: &str,
            shop_id: i64,
            employee_id: i64,
            request: EmployeeRequest,
        ) -> BookingResult<Employee>;
        async fn delete_employee(
            &self,
            token: &str,
            shop_id: i64,
            employee_id: i64,
        ) -> BookingResult<()>;
    }

    #[async_trait::async_trait]
    impl AvailabilityApi for Api {
        async fn day_slots(
            &self,
            shop_id: i64,
            date: NaiveDate,
            employee_id: Option<i64>,
        ) -> BookingResult<Vec<SlotRecord>>;
    }

    #[async_trait::async_trait]
    impl AppointmentApi for Api {
        async fn book(&self, token: &str, request: BookingRequest) -> BookingResult<Appointment>;
        async fn reschedule(
            &self,
            token: &str,
            appointment_id: i64,
            request: RescheduleRequest,
        ) -> BookingResult<Appointment>;
        async fn cancel(&self, token: &str, appointment_id: i64) -> BookingResult<()>;
        async fn my_appointments(&self, token: &str) -> BookingResult<Vec<Appointment>>;
        async fn get_appointment(
            &self,
            token: &str,
            appointment_id: i64,
        ) -> BookingResult<Appointment>;
    }
}
