//! Shop service reads plus the bearer-protected owner management writes.

use async_trait::async_trait;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::employee::{Employee, EmployeeRequest};
use barberbook_core::models::service::{Service, ServiceRequest};
use barberbook_core::models::shop::{Shop, ShopListing, ShopRequest};
use tracing::{debug, info};

use crate::{ApiClient, endpoints, http};

#[async_trait]
pub trait ShopApi {
    /// Paginated public shop listing.
    async fn list_shops(&self, page: u32, size: u32) -> BookingResult<Vec<Shop>>;

    async fn get_shop(&self, shop_id: i64) -> BookingResult<Shop>;

    async fn list_services(&self, shop_id: i64) -> BookingResult<Vec<Service>>;

    async fn get_service(&self, shop_id: i64, service_id: i64) -> BookingResult<Service>;

    async fn list_employees(&self, shop_id: i64) -> BookingResult<Vec<Employee>>;

    /// Shops owned by the caller. Bearer-token protected.
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

    async fn delete_service(&self, token: &str, shop_id: i64, service_id: i64)
    -> BookingResult<()>;

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

#[async_trait]
impl ShopApi for ApiClient {
    async fn list_shops(&self, page: u32, size: u32) -> BookingResult<Vec<Shop>> {
        let url = endpoints::shops_page(&self.config().shop_service_url, page, size);
        debug!("GET {url}");
        let listing: ShopListing = http::send(self.http().get(url)).await?;
        let shops = listing.into_shops();
        info!(count = shops.len(), "Shops loaded");
        Ok(shops)
    }

    async fn get_shop(&self, shop_id: i64) -> BookingResult<Shop> {
        let url = endpoints::shop(&self.config().shop_service_url, shop_id);
        debug!("GET {url}");
        http::send(self.http().get(url)).await
    }

    async fn list_services(&self, shop_id: i64) -> BookingResult<Vec<Service>> {
        let url = endpoints::shop_services(&self.config().shop_service_url, shop_id);
        debug!("GET {url}");
        http::send(self.http().get(url)).await
    }

    async fn get_service(&self, shop_id: i64, service_id: i64) -> BookingResult<Service> {
        let url = endpoints::shop_service(&self.config().shop_service_url, shop_id, service_id);
        debug!("GET {url}");
        http::send(self.http().get(url)).await
    }

    async fn list_employees(&self, shop_id: i64) -> BookingResult<Vec<Employee>> {
        let url = endpoints::shop_employees(&self.config().shop_service_url, shop_id);
        debug!("GET {url}");
        http::send(self.http().get(url)).await
    }

    async fn my_shops(&self, token: &str) -> BookingResult<Vec<Shop>> {
        let url = endpoints::my_shops(&self.config().shop_service_url);
        debug!("GET {url}");
        http::send(self.http().get(url).bearer_auth(token)).await
    }

    async fn create_shop(&self, token: &str, request: ShopRequest) -> BookingResult<Shop> {
        let url = endpoints::shops(&self.config().shop_service_url);
        debug!("POST {url}");
        http::send(self.http().post(url).bearer_auth(token).json(&request)).await
    }

    async fn create_service(
        &self,
        token: &str,
        shop_id: i64,
        request: ServiceRequest,
    ) -> BookingResult<Service> {
        let url = endpoints::shop_services(&self.config().shop_service_url, shop_id);
        debug!("POST {url}");
        http::send(self.http().post(url).bearer_auth(token).json(&request)).await
    }

    async fn update_service(
        &self,
        token: &str,
        shop_id: i64,
        service_id: i64,
        request: ServiceRequest,
    ) -> BookingResult<Service> {
        let url = endpoints::shop_service(&self.config().shop_service_url, shop_id, service_id);
        debug!("PUT {url}");
        http::send(self.http().put(url).bearer_auth(token).json(&request)).await
    }

    async fn delete_service(
        &self,
        token: &str,
        shop_id: i64,
        service_id: i64,
    ) -> BookingResult<()> {
        let url = endpoints::shop_service(&self.config().shop_service_url, shop_id, service_id);
        debug!("DELETE {url}");
        http::send_unit(self.http().delete(url).bearer_auth(token)).await
    }

    async fn create_employee(
        &self,
        token: &str,
        shop_id: i64,
        request: EmployeeRequest,
    ) -> BookingResult<Employee> {
        let url = endpoints::shop_employees(&self.config().shop_service_url, shop_id);
        debug!("POST {url}");
        http::send(self.http().post(url).bearer_auth(token).json(&request)).await
    }

    async fn update_employee(
        &self,
        token: &str,
        shop_id: i64,
        employee_id: i64,
        request: EmployeeRequest,
    ) -> BookingResult<Employee> {
        let url = endpoints::shop_employee(&self.config().shop_service_url, shop_id, employee_id);
        debug!("PUT {url}");
        http::send(self.http().put(url).bearer_auth(token).json(&request)).await
    }

    async fn delete_employee(
        &self,
        token: &str,
        shop_id: i64,
        employee_id: i64,
    ) -> BookingResult<()> {
        let url = endpoints::shop_employee(&self.config().shop_service_url, shop_id, employee_id);
        debug!("DELETE {url}");
        http::send_unit(self.http().delete(url).bearer_auth(token)).await
    }
}
