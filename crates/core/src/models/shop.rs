use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub opening_time: Option<String>,
    #[serde(default)]
    pub closing_time: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Shop {
    /// Case-insensitive substring match across the searchable fields.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(&term))
        };

        self.name.to_lowercase().contains(&term)
            || contains(&self.city)
            || contains(&self.state)
            || contains(&self.address)
            || contains(&self.description)
    }
}

/// Filter a shop collection by a free-text search term.
///
/// An empty (or whitespace-only) term returns every shop; otherwise the
/// result is the ordered subset whose name, city, state, address, or
/// description contains the term, ignoring case.
pub fn filter_shops(shops: &[Shop], term: &str) -> Vec<Shop> {
    let term = term.trim();
    if term.is_empty() {
        return shops.to_vec();
    }
    shops.iter().filter(|s| s.matches(term)).cloned().collect()
}

/// The shop service answers the listing endpoint with either a Spring page
/// object or a bare array depending on the deployment; accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShopListing {
    Page(ShopPage),
    List(Vec<Shop>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPage {
    pub content: Vec<Shop>,
    #[serde(default)]
    pub total_elements: Option<i64>,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub number: Option<i64>,
}

impl ShopListing {
    pub fn into_shops(self) -> Vec<Shop> {
        match self {
            ShopListing::Page(page) => page.content,
            ShopListing::List(shops) => shops,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_time: Option<String>,
}
