//! Public shop listing, search, and detail.

use barberbook_client::ShopApi;
use barberbook_core::errors::BookingResult;
use barberbook_core::models::employee::Employee;
use barberbook_core::models::service::Service;
use barberbook_core::models::shop::{Shop, filter_shops};
use tracing::info;

/// First page requested by the listing screen. The original client loads a
/// single large page and searches it locally.
const LISTING_PAGE: u32 = 0;
const LISTING_SIZE: u32 = 100;

/// Everything the shop detail screen shows. Built from three sequential
/// calls; no call depends on the previous one's payload.
#[derive(Debug, Clone)]
pub struct ShopDetail {
    pub shop: Shop,
    pub services: Vec<Service>,
    pub employees: Vec<Employee>,
}

pub struct ShopsWorkflow<A> {
    api: A,
    shops: Vec<Shop>,
    query: String,
}

impl<A: ShopApi + Sync> ShopsWorkflow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            shops: Vec::new(),
            query: String::new(),
        }
    }

    /// Load the listing. On failure the previously loaded shops are kept
    /// so the screen stays usable for a manual retry.
    pub async fn load(&mut self) -> BookingResult<()> {
        let shops = self.api.list_shops(LISTING_PAGE, LISTING_SIZE).await?;
        info!(count = shops.len(), "Shop listing refreshed");
        self.shops = shops;
        Ok(())
    }

    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Shops matching the current search, in listing order.
    pub fn visible(&self) -> Vec<Shop> {
        filter_shops(&self.shops, &self.query)
    }

    /// Shop, services, employees for a detail view.
    pub async fn detail(&self, shop_id: i64) -> BookingResult<ShopDetail> {
        let shop = self.api.get_shop(shop_id).await?;
        let services = self.api.list_services(shop_id).await?;
        let employees = self.api.list_employees(shop_id).await?;
        Ok(ShopDetail {
            shop,
            services,
            employees,
        })
    }
}
