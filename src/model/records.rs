//! Typed rows. Deserialized from snake_case row objects, serialized camelCase for the API.

use super::catalog;
use super::entity::EntityDef;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A row type backed by one catalog table.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    const ENTITY: &'static EntityDef;
}

macro_rules! record {
    ($ty:ty => $entity:ident) => {
        impl Record for $ty {
            const ENTITY: &'static EntityDef = &catalog::$entity;
        }
    };
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Location {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Material {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct IpProtection {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CabinetSize {
    pub id: i32,
    pub width: i32,
    pub height: i32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Module {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub pitch: f64,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub location_id: Option<i32>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Cabinet {
    pub id: i32,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub module_code: Option<String>,
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub material_id: Option<i32>,
    #[serde(default)]
    pub ip_protection_id: Option<i32>,
    pub width: i32,
    pub height: i32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CabinetCabinetSize {
    pub id: i32,
    pub cabinet_id: i32,
    pub cabinet_size_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Item {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub unit: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ItemPrice {
    pub id: i32,
    pub item_code: String,
    pub price: f64,
    pub currency: String,
    pub active: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ModulePrice {
    pub id: i32,
    pub module_code: String,
    pub price: f64,
    pub currency: String,
    pub active: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CabinetPrice {
    pub id: i32,
    pub cabinet_code: String,
    pub price: f64,
    pub currency: String,
    pub active: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CabinetItem {
    pub id: i32,
    pub cabinet_code: String,
    pub item_code: String,
    pub quantity: i32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ModuleItem {
    pub id: i32,
    pub module_code: String,
    pub item_code: String,
    pub quantity: i32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Placement {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CabinetPlacement {
    pub id: i32,
    pub cabinet_code: String,
    pub placement_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VideoProcessor {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub max_pixels: Option<i32>,
    pub active: bool,
}

record!(Location => LOCATIONS);
record!(Material => MATERIALS);
record!(IpProtection => IP_PROTECTIONS);
record!(CabinetSize => CABINET_SIZES);
record!(Module => MODULES);
record!(Cabinet => CABINETS);
record!(CabinetCabinetSize => CABINET_CABINET_SIZES);
record!(Item => ITEMS);
record!(ItemPrice => ITEM_PRICES);
record!(ModulePrice => MODULE_PRICES);
record!(CabinetPrice => CABINET_PRICES);
record!(CabinetItem => CABINET_ITEMS);
record!(ModuleItem => MODULE_ITEMS);
record!(Placement => PLACEMENTS);
record!(CabinetPlacement => CABINET_PLACEMENTS);
record!(VideoProcessor => VIDEO_PROCESSORS);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_snake_case_row_and_serializes_camel_case() {
        let row = json!({
            "id": 3,
            "item_code": "PSU-200",
            "price": 1450.5,
            "currency": "RUB",
            "active": true,
            "updated_at": "2024-03-01T10:00:00+00:00"
        });
        let price: ItemPrice = serde_json::from_value(row).unwrap();
        assert_eq!(price.item_code, "PSU-200");
        assert!(price.updated_at.is_some());

        let out = serde_json::to_value(&price).unwrap();
        assert_eq!(out["itemCode"], "PSU-200");
        assert!(out.get("item_code").is_none());
    }

    #[test]
    fn nullable_foreign_keys_default_to_none() {
        let row = json!({
            "id": 1, "code": "C1", "name": "Indoor 500", "width": 500, "height": 500, "active": true
        });
        let cabinet: Cabinet = serde_json::from_value(row).unwrap();
        assert_eq!(cabinet.location_id, None);
        assert_eq!(cabinet.module_code, None);
    }
}
