//! Paperbloom storefront demo.
//!
//! Walks the shopper flow end to end against a running backend: load the
//! catalog, compose a bouquet, print a receipt, and place a mock order.
//! With admin credentials it also exercises the management calls.

use std::{process, time::Duration};

use clap::Parser;
use paperbloom_core::{cart::Cart, catalog::Catalog, receipt};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    checkout::{OrderForm, place_order},
    client::ApiClient,
};

mod checkout;
mod client;

#[derive(Debug, Parser)]
#[command(name = "paperbloom-storefront", about = "Paperbloom storefront demo", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "PAPERBLOOM_API_URL", default_value = "http://localhost:8680")]
    api_url: String,

    /// Admin username; management calls are skipped when omitted
    #[arg(long, env = "ADMIN_USERNAME")]
    admin_username: Option<String>,

    /// Admin password
    #[arg(long, env = "ADMIN_PASSWORD")]
    admin_password: Option<String>,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let mut api = ApiClient::new(cli.api_url);
    let mut catalog = Catalog::default();

    // The catalog keeps its last good contents when a refresh fails.
    match api.products().await {
        Ok(products) => catalog.replace(products),
        Err(error) => warn!("catalog refresh failed, keeping stale data: {error}"),
    }

    let Some(featured) = catalog.in_stock().next().cloned() else {
        return Err("no products available".to_string());
    };

    info!(product = %featured.name, "composing an order");

    let mut cart = Cart::new();

    let combos: Vec<_> = featured.combo_options.clone();
    let tier = featured.quantity_options.last().copied();

    cart.add_item(&featured, 2, &combos, tier)
        .map_err(|error| format!("failed to add to cart: {error}"))?;

    println!("{}", receipt::render(&cart));

    let confirmation = place_order(
        &mut cart,
        &OrderForm {
            name: "Paperbloom Shopper".to_string(),
            email: "shopper@example.com".to_string(),
            address: "1 Paper Lane".to_string(),
            city: "Bloomville".to_string(),
            postal_code: "12345".to_string(),
        },
        Duration::from_millis(500),
    )
    .await
    .map_err(|error| format!("checkout failed: {error}"))?;

    println!(
        "order {} confirmed: {} item(s), {}",
        confirmation.order_id,
        confirmation.item_count,
        receipt::format_usd(confirmation.total)
    );

    if let (Some(username), Some(password)) = (cli.admin_username, cli.admin_password) {
        run_admin_demo(&mut api, &username, &password).await?;
    }

    Ok(())
}

/// Exercises the admin surface: log in, create a product, rename it,
/// then delete it again.
async fn run_admin_demo(
    api: &mut ApiClient,
    username: &str,
    password: &str,
) -> Result<(), String> {
    use rust_decimal::Decimal;

    let session = api
        .login(username, password)
        .await
        .map_err(|error| format!("login failed: {error}"))?;

    info!(username = session.username().unwrap_or(""), "logged in");

    let mut draft = client::ProductDraft {
        name: "Demo Daisy Bundle".to_string(),
        description: "Created by the storefront demo.".to_string(),
        base_price: Decimal::from(499),
        category: "daisies".to_string(),
        eco_friendly: true,
        sustainability_info: None,
        in_stock: true,
        combo_options: vec![],
        quantity_options: vec![],
    };

    let created = api
        .create_product(&draft)
        .await
        .map_err(|error| format!("create failed: {error}"))?;

    draft.name = "Demo Daisy Bundle (renamed)".to_string();

    api.update_product(created.id, &draft)
        .await
        .map_err(|error| format!("update failed: {error}"))?;

    info!(product = %draft.name, "updated demo product");

    api.delete_product(created.id)
        .await
        .map_err(|error| format!("delete failed: {error}"))?;

    api.logout();

    Ok(())
}
