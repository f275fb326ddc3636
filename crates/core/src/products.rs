//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product identity as served by the backend.
pub type ProductId = Uuid;

/// Combo option identity.
pub type ComboOptionId = Uuid;

/// Bouquet category. Closed set; anything else is rejected at the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rose bouquets
    Roses,

    /// Peony bouquets
    Peonies,

    /// Daisy bouquets
    Daisies,

    /// Mixed bouquets
    Mixed,

    /// Wildflower bouquets
    Wildflowers,
}

impl Category {
    /// Wire representation of the category.
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

/// Tag distinguishing the kind of combo option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboCategory {
    /// An add-on accessory (vase, ribbon, card).
    Accessory,

    /// A quantity-style combo; unused by the current catalog but accepted.
    Quantity,
}

/// An optional add-on accessory attached to a product at a fixed
/// incremental price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOption {
    /// Combo option identity.
    pub id: ComboOptionId,

    /// Display name.
    pub name: String,

    /// Incremental price; never negative.
    pub price: Decimal,

    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Category tag.
    pub category: ComboCategory,
}

/// A selectable stem-count variant carrying a price modifier relative to
/// the product's base price. The modifier may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityOption {
    /// Number of stems in this tier.
    pub stems: u32,

    /// Delta from the base price; may be negative or positive.
    pub price_modifier: Decimal,
}

/// A paper flower bouquet as served by the backend.
///
/// Immutable once loaded into the catalog for the duration of a cart
/// session; the cart snapshots everything it needs at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identity.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Long-form description.
    pub description: String,

    /// Base price; never negative.
    pub base_price: Decimal,

    /// Ordered image URLs.
    pub images: Vec<String>,

    /// Bouquet category.
    pub category: Category,

    /// Whether the bouquet is made from recycled material.
    pub eco_friendly: bool,

    /// Optional sustainability blurb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_info: Option<String>,

    /// Add-on accessories offered with this product.
    pub combo_options: Vec<ComboOption>,

    /// Stem-count tiers offered with this product; may be empty.
    pub quantity_options: Vec<QuantityOption>,

    /// Whether the product can currently be ordered.
    pub in_stock: bool,
}
