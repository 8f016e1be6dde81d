use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{or_default, required, RecordBase, RecordStatus};
use crate::config::Config;
use crate::error::{ErpStageError, Result};

pub const DEFAULT_ITEM_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Inventory,
    Service,
    #[serde(rename = "Non-Inventory")]
    NonInventory,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::Inventory => write!(f, "Inventory"),
            ItemType::Service => write!(f, "Service"),
            ItemType::NonInventory => write!(f, "Non-Inventory"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "inventory" => Ok(ItemType::Inventory),
            "service" => Ok(ItemType::Service),
            "non-inventory" | "noninventory" => Ok(ItemType::NonInventory),
            _ => Err(format!("Invalid item type: {}", s)),
        }
    }
}

/// An item master record. `status` always follows stock against the reorder point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(flatten)]
    pub base: RecordBase,
    pub item_no: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default)]
    pub uom: String,
    #[serde(default)]
    pub reorder_point: u32,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Item {
    pub fn from_new(base: RecordBase, new: NewItem) -> Self {
        Self {
            base,
            item_no: new.item_no,
            description: new.description,
            item_type: new.item_type,
            category: new.category,
            unit_price: new.unit_price,
            uom: new.uom,
            reorder_point: new.reorder_point,
            stock: new.stock,
            status: RecordStatus::for_stock(new.stock, new.reorder_point),
        }
    }

    pub fn refresh_status(&mut self) {
        self.status = RecordStatus::for_stock(self.stock, self.reorder_point);
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_point
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub item_no: String,
    pub description: String,
    pub item_type: ItemType,
    pub category: String,
    pub unit_price: Decimal,
    pub uom: String,
    pub reorder_point: u32,
    pub stock: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub item_no: String,
    pub description: String,
    pub item_type: Option<ItemType>,
    pub category: Option<String>,
    pub unit_price: Option<Decimal>,
    pub uom: Option<String>,
    pub reorder_point: Option<u32>,
    pub stock: Option<u32>,
}

impl ItemDraft {
    pub fn validate(self, config: &Config) -> Result<NewItem> {
        let item_no = required(self.item_no, "item number")?;
        let description = required(self.description, "item description")?;
        let item_type = self
            .item_type
            .ok_or(ErpStageError::MissingRequiredField("item type"))?;

        let unit_price = self.unit_price.unwrap_or(Decimal::ZERO);
        if unit_price < Decimal::ZERO {
            return Err(ErpStageError::InvalidValue(format!(
                "unit price must not be negative: {}",
                unit_price
            )));
        }

        Ok(NewItem {
            item_no,
            description,
            item_type,
            category: or_default(self.category, DEFAULT_ITEM_CATEGORY),
            unit_price,
            uom: or_default(self.uom, &config.default_uom),
            reorder_point: self.reorder_point.unwrap_or(0),
            stock: self.stock.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::new_id;

    fn draft() -> ItemDraft {
        ItemDraft {
            item_no: "PROD001".to_string(),
            description: "Widget A".to_string(),
            item_type: Some(ItemType::Inventory),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_defaults() {
        let new = draft().validate(&Config::default()).unwrap();
        assert_eq!(new.category, "Uncategorized");
        assert_eq!(new.uom, "PCS");
        assert_eq!(new.unit_price, Decimal::ZERO);
        assert_eq!(new.stock, 0);
        assert_eq!(new.reorder_point, 0);
    }

    #[test]
    fn test_draft_rejects_negative_price() {
        let mut d = draft();
        d.unit_price = Some(Decimal::new(-100, 2));
        assert!(matches!(
            d.validate(&Config::default()),
            Err(ErpStageError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_draft_requires_type() {
        let mut d = draft();
        d.item_type = None;
        assert!(matches!(
            d.validate(&Config::default()),
            Err(ErpStageError::MissingRequiredField("item type"))
        ));
    }

    #[test]
    fn test_status_derived_on_creation() {
        let mut new = draft().validate(&Config::default()).unwrap();
        new.stock = 50;
        new.reorder_point = 10;
        let item = Item::from_new(RecordBase::new(new_id()), new.clone());
        assert_eq!(item.status, RecordStatus::Active);

        new.stock = 10;
        let item = Item::from_new(RecordBase::new(new_id()), new);
        assert_eq!(item.status, RecordStatus::LowStock);
    }

    #[test]
    fn test_zero_stock_zero_reorder_is_low() {
        let item = Item::from_new(
            RecordBase::new(new_id()),
            draft().validate(&Config::default()).unwrap(),
        );
        assert_eq!(item.status, RecordStatus::LowStock);
        assert!(item.is_low_stock());
    }

    #[test]
    fn test_refresh_status() {
        let mut item = Item::from_new(
            RecordBase::new(new_id()),
            draft().validate(&Config::default()).unwrap(),
        );
        item.stock = 5;
        item.reorder_point = 1;
        item.refresh_status();
        assert_eq!(item.status, RecordStatus::Active);
    }

    #[test]
    fn test_item_type_parse() {
        assert_eq!("non-inventory".parse::<ItemType>().unwrap(), ItemType::NonInventory);
        assert_eq!("Non_Inventory".parse::<ItemType>().unwrap(), ItemType::NonInventory);
        let json = serde_json::to_string(&ItemType::NonInventory).unwrap();
        assert_eq!(json, "\"Non-Inventory\"");
    }
}
