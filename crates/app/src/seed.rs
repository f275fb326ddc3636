//! First-run seeding: an admin user and a small starter catalog.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use crate::{
    context::AppContext,
    domain::{
        products::{
            ProductsServiceError,
            models::{Category, ComboCategory, NewComboOption, NewQuantityOption, ProductInput},
        },
        users::{AuthServiceError, models::Role},
    },
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to seed admin user")]
    Users(#[from] AuthServiceError),

    #[error("failed to seed products")]
    Products(#[from] ProductsServiceError),
}

/// Seeds the admin account and starter products, each only when its table
/// is empty. Safe to run on every startup.
pub async fn seed(
    ctx: &AppContext,
    admin_username: &str,
    admin_password: &str,
) -> Result<(), SeedError> {
    if ctx.auth.count_users().await? == 0 {
        ctx.auth
            .create_user(admin_username, admin_password, Role::Admin)
            .await?;

        info!(username = admin_username, "seeded admin user");
    }

    if ctx.products.list_products().await?.is_empty() {
        for product in starter_products() {
            ctx.products.create_product(product).await?;
        }

        info!("seeded starter catalog");
    }

    Ok(())
}

fn starter_products() -> Vec<ProductInput> {
    vec![
        ProductInput {
            name: "Pink Peony Bouquet".to_string(),
            description: "Hand-folded paper peonies in soft pink, arranged by the stem."
                .to_string(),
            base_price: Decimal::from(1299),
            category: Category::Peonies,
            eco_friendly: true,
            sustainability_info: Some("Folded from recycled crepe paper.".to_string()),
            in_stock: true,
            combo_options: vec![NewComboOption {
                name: "Vase".to_string(),
                price: Decimal::from(450),
                image_url: None,
                category: ComboCategory::Accessory,
            }],
            quantity_options: vec![
                NewQuantityOption {
                    stems: 5,
                    price_modifier: Decimal::ZERO,
                },
                NewQuantityOption {
                    stems: 10,
                    price_modifier: Decimal::from(800),
                },
            ],
        },
        ProductInput {
            name: "Wildflower Medley".to_string(),
            description: "A mixed bundle of paper wildflowers that never wilts.".to_string(),
            base_price: Decimal::from(899),
            category: Category::Wildflowers,
            eco_friendly: true,
            sustainability_info: None,
            in_stock: true,
            combo_options: vec![],
            quantity_options: vec![],
        },
    ]
}
