use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i32;
}

// Configuration abstracts config options for the bookshop catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub shop_id: String,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub min_quantity: i32,
    pub max_quantity: i32,
}

impl Configuration {
    pub fn new(shop_id: &str) -> Self {
        Configuration {
            shop_id: shop_id.to_string(),
            min_price: Decimal::new(1, 2),
            max_price: Decimal::new(10000, 0),
            min_quantity: 1,
            max_quantity: 100,
        }
    }

    // overrides defaults with whatever fields are present in the json document
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("default")
    }
}
