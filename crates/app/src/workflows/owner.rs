//! Shop-owner management: owned shops, service catalog, staff roster.

use barberbook_client::ShopApi;
use barberbook_core::errors::{BookingError, BookingResult};
use barberbook_core::models::employee::{Employee, EmployeeRequest};
use barberbook_core::models::service::{Service, ServiceRequest};
use barberbook_core::models::shop::{Shop, ShopRequest};
use barberbook_core::session::Session;
use barberbook_core::validation::validate_phone;
use tracing::info;

/// Shop creation form as filled in, before validation.
#[derive(Debug, Clone, Default)]
pub struct ShopForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub description: String,
    pub opening_time: String,
    pub closing_time: String,
}

pub struct OwnerWorkflow<A> {
    api: A,
    session: Session,
}

impl<A> std::fmt::Debug for OwnerWorkflow<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerWorkflow")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<A: ShopApi + Sync> OwnerWorkflow<A> {
    /// Owner flows are gated on the SHOP_OWNER role.
    pub fn new(api: A, session: Session) -> BookingResult<Self> {
        if !session.user.role.has_management_permissions() {
            return Err(BookingError::Authorization(
                "Owner tools are limited to shop owner accounts.".to_string(),
            ));
        }
        Ok(Self { api, session })
    }

    fn token(&self) -> &str {
        &self.session.access_token
    }

    pub async fn my_shops(&self) -> BookingResult<Vec<Shop>> {
        self.api.my_shops(self.token()).await
    }

    pub async fn create_shop(&self, form: ShopForm) -> BookingResult<Shop> {
        if form.name.trim().is_empty()
            || form.phone.trim().is_empty()
            || form.address.trim().is_empty()
            || form.city.trim().is_empty()
            || form.state.trim().is_empty()
            || form.zip_code.trim().is_empty()
        {
            return Err(BookingError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        validate_phone(form.phone.trim())
            .map_err(|_| BookingError::Validation("Please enter a valid phone number".to_string()))?;
        if !form.opening_time.is_empty() && form.opening_time >= form.closing_time {
            return Err(BookingError::Validation(
                "Closing time must be after opening time".to_string(),
            ));
        }

        let request = ShopRequest {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            city: form.city.trim().to_string(),
            state: form.state.trim().to_string(),
            zip_code: form.zip_code.trim().to_string(),
            description: some_if_filled(&form.description),
            opening_time: some_if_filled(&form.opening_time),
            closing_time: some_if_filled(&form.closing_time),
        };

        let shop = self.api.create_shop(self.token(), request).await?;
        info!(shop_id = shop.id, "Shop created");
        Ok(shop)
    }

    pub async fn add_service(
        &self,
        shop_id: i64,
        name: &str,
        description: &str,
        price: f64,
        duration: i64,
    ) -> BookingResult<Service> {
        if name.trim().is_empty() || price <= 0.0 || duration <= 0 {
            return Err(BookingError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        let request = ServiceRequest {
            name: name.trim().to_string(),
            description: some_if_filled(description),
            price,
            duration,
        };
        self.api.create_service(self.token(), shop_id, request).await
    }

    pub async fn update_service(
        &self,
        shop_id: i64,
        service_id: i64,
        name: &str,
        description: &str,
        price: f64,
        duration: i64,
    ) -> BookingResult<Service> {
        if name.trim().is_empty() || price <= 0.0 || duration <= 0 {
            return Err(BookingError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        let request = ServiceRequest {
            name: name.trim().to_string(),
            description: some_if_filled(description),
            price,
            duration,
        };
        self.api
            .update_service(self.token(), shop_id, service_id, request)
            .await
    }

    pub async fn remove_service(&self, shop_id: i64, service_id: i64) -> BookingResult<()> {
        self.api.delete_service(self.token(), shop_id, service_id).await
    }

    pub async fn add_employee(
        &self,
        shop_id: i64,
        name: &str,
        role: &str,
        email: &str,
        phone: &str,
    ) -> BookingResult<Employee> {
        let request = employee_request(name, role, email, phone)?;
        self.api.create_employee(self.token(), shop_id, request).await
    }

    pub async fn update_employee(
        &self,
        shop_id: i64,
        employee_id: i64,
        name: &str,
        role: &str,
        email: &str,
        phone: &str,
    ) -> BookingResult<Employee> {
        let request = employee_request(name, role, email, phone)?;
        self.api
            .update_employee(self.token(), shop_id, employee_id, request)
            .await
    }

    pub async fn remove_employee(&self, shop_id: i64, employee_id: i64) -> BookingResult<()> {
        self.api
            .delete_employee(self.token(), shop_id, employee_id)
            .await
    }
}

fn employee_request(
    name: &str,
    role: &str,
    email: &str,
    phone: &str,
) -> BookingResult<EmployeeRequest> {
    if name.trim().is_empty() || role.trim().is_empty() {
        return Err(BookingError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }
    Ok(EmployeeRequest {
        name: name.trim().to_string(),
        role: some_if_filled(role),
        email: some_if_filled(email),
        phone: some_if_filled(phone),
    })
}

fn some_if_filled(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
