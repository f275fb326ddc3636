//! Product wire models.

use paperbloom_app::domain::products::models::{
    ComboOptionRecord, NewComboOption, NewQuantityOption, ProductInput, ProductRecord,
    QuantityOptionRecord, UnknownCategory,
};
use rust_decimal::Decimal;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Combo Option Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComboOptionResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
}

impl From<ComboOptionRecord> for ComboOptionResponse {
    fn from(record: ComboOptionRecord) -> Self {
        Self {
            id: record.uuid,
            name: record.name,
            price: record.price,
            image: record.image_url,
            category: record.category.as_str().to_string(),
        }
    }
}

/// Quantity Option Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuantityOptionResponse {
    pub stems: u32,
    pub price_modifier: Decimal,
}

impl From<QuantityOptionRecord> for QuantityOptionResponse {
    fn from(record: QuantityOptionRecord) -> Self {
        Self {
            stems: record.stems,
            price_modifier: record.price_modifier,
        }
    }
}

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    /// Image URLs ordered by position.
    pub images: Vec<String>,
    pub category: String,
    pub eco_friendly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_info: Option<String>,
    pub combo_options: Vec<ComboOptionResponse>,
    pub quantity_options: Vec<QuantityOptionResponse>,
    pub in_stock: bool,
}

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.uuid,
            name: record.name,
            description: record.description,
            base_price: record.base_price,
            images: record
                .images
                .into_iter()
                .map(|image| image.image_url)
                .collect(),
            category: record.category.as_str().to_string(),
            eco_friendly: record.eco_friendly,
            sustainability_info: record.sustainability_info,
            combo_options: record.combo_options.into_iter().map(Into::into).collect(),
            quantity_options: record
                .quantity_options
                .into_iter()
                .map(Into::into)
                .collect(),
            in_stock: record.in_stock,
        }
    }
}

/// Combo option submitted on create or update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComboOptionPayload {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
}

/// Quantity tier submitted on create or update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuantityOptionPayload {
    pub stems: u32,
    pub price_modifier: Decimal,
}

/// Product payload shared by create and update. Nested option
/// collections replace whatever is stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPayload {
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub category: String,
    #[serde(default)]
    pub eco_friendly: bool,
    #[serde(default)]
    pub sustainability_info: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub combo_options: Vec<ComboOptionPayload>,
    #[serde(default)]
    pub quantity_options: Vec<QuantityOptionPayload>,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ProductPayload> for ProductInput {
    type Error = StatusError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let category = payload
            .category
            .parse()
            .map_err(|_: UnknownCategory| StatusError::bad_request().brief("Unknown category"))?;

        let combo_options = payload
            .combo_options
            .into_iter()
            .map(|combo| {
                Ok(NewComboOption {
                    category: combo.category.parse().map_err(|_: UnknownCategory| {
                        StatusError::bad_request().brief("Unknown combo category")
                    })?,
                    name: combo.name,
                    price: combo.price,
                    image_url: combo.image,
                })
            })
            .collect::<Result<Vec<_>, StatusError>>()?;

        let quantity_options = payload
            .quantity_options
            .into_iter()
            .map(|tier| NewQuantityOption {
                stems: tier.stems,
                price_modifier: tier.price_modifier,
            })
            .collect();

        Ok(Self {
            name: payload.name,
            description: payload.description,
            base_price: payload.base_price,
            category,
            eco_friendly: payload.eco_friendly,
            sustainability_info: payload.sustainability_info,
            in_stock: payload.in_stock,
            combo_options,
            quantity_options,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use paperbloom_app::domain::products::models::{Category, ComboCategory, ImageRecord};
    use testresult::TestResult;

    use super::*;

    fn make_record(uuid: Uuid) -> ProductRecord {
        ProductRecord {
            uuid,
            name: "Pink Peony Bouquet".to_string(),
            description: "Paper peonies".to_string(),
            base_price: Decimal::from(1299),
            category: Category::Peonies,
            eco_friendly: true,
            sustainability_info: None,
            in_stock: true,
            images: vec![ImageRecord {
                uuid: Uuid::nil(),
                image_url: "/images/a.png".to_string(),
                position: 0,
            }],
            combo_options: vec![ComboOptionRecord {
                uuid: Uuid::nil(),
                name: "Vase".to_string(),
                price: Decimal::from(450),
                image_url: None,
                category: ComboCategory::Accessory,
            }],
            quantity_options: vec![QuantityOptionRecord {
                stems: 5,
                price_modifier: Decimal::ZERO,
            }],
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn response_serializes_to_storefront_shape() -> TestResult {
        let response = ProductResponse::from(make_record(Uuid::nil()));
        let value = serde_json::to_value(&response)?;

        assert_eq!(value["category"], "peonies");
        assert_eq!(value["basePrice"], serde_json::json!(1299.0));
        assert_eq!(value["images"][0], "/images/a.png");
        assert_eq!(value["comboOptions"][0]["name"], "Vase");
        assert_eq!(value["quantityOptions"][0]["priceModifier"], 0.0);
        assert!(value.get("sustainabilityInfo").is_none());

        Ok(())
    }

    #[test]
    fn payload_with_unknown_category_is_rejected() -> TestResult {
        let payload: ProductPayload = serde_json::from_value(serde_json::json!({
            "name": "Bouquet",
            "description": "d",
            "basePrice": 100,
            "category": "plastic",
        }))?;

        assert!(ProductInput::try_from(payload).is_err());

        Ok(())
    }

    #[test]
    fn payload_defaults_apply() -> TestResult {
        let payload: ProductPayload = serde_json::from_value(serde_json::json!({
            "name": "Bouquet",
            "description": "d",
            "basePrice": 100,
            "category": "roses",
        }))?;

        let input = ProductInput::try_from(payload).ok();

        assert_eq!(input.as_ref().map(|input| input.in_stock), Some(true));
        assert_eq!(
            input.map(|input| input.combo_options.len() + input.quantity_options.len()),
            Some(0)
        );

        Ok(())
    }
}
