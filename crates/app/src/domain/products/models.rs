//! Product Models

use std::str::FromStr;

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Raised when a stored or submitted category is outside the closed set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category")]
pub struct UnknownCategory;

/// Bouquet category (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Roses,
    Peonies,
    Daisies,
    Mixed,
    Wildflowers,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roses => "roses",
            Self::Peonies => "peonies",
            Self::Daisies => "daisies",
            Self::Mixed => "mixed",
            Self::Wildflowers => "wildflowers",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "roses" => Ok(Self::Roses),
            "peonies" => Ok(Self::Peonies),
            "daisies" => Ok(Self::Daisies),
            "mixed" => Ok(Self::Mixed),
            "wildflowers" => Ok(Self::Wildflowers),
            _ => Err(UnknownCategory),
        }
    }
}

/// Combo option tag (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboCategory {
    Accessory,
    Quantity,
}

impl ComboCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accessory => "accessory",
            Self::Quantity => "quantity",
        }
    }
}

impl FromStr for ComboCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "accessory" => Ok(Self::Accessory),
            "quantity" => Ok(Self::Quantity),
            _ => Err(UnknownCategory),
        }
    }
}

/// Combo Option Record
#[derive(Debug, Clone, PartialEq)]
pub struct ComboOptionRecord {
    pub uuid: Uuid,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: ComboCategory,
}

/// Quantity Option Record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityOptionRecord {
    pub stems: u32,
    pub price_modifier: Decimal,
}

/// Product Image Record
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub uuid: Uuid,
    pub image_url: String,
    pub position: i32,
}

/// Product Record with its nested collections.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub category: Category,
    pub eco_friendly: bool,
    pub sustainability_info: Option<String>,
    pub in_stock: bool,
    pub images: Vec<ImageRecord>,
    pub combo_options: Vec<ComboOptionRecord>,
    pub quantity_options: Vec<QuantityOptionRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New combo option submitted with a product create or update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComboOption {
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub category: ComboCategory,
}

/// New quantity tier submitted with a product create or update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewQuantityOption {
    pub stems: u32,
    pub price_modifier: Decimal,
}

/// Product input: mirrors the product minus identity and images. Used for
/// both create and update; an update replaces the nested option
/// collections wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub category: Category,
    pub eco_friendly: bool,
    pub sustainability_info: Option<String>,
    pub in_stock: bool,
    pub combo_options: Vec<NewComboOption>,
    pub quantity_options: Vec<NewQuantityOption>,
}
