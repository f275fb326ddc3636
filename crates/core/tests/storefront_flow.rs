//! End-to-end exercises of the storefront model: catalog load, cart
//! composition across merges and edits, and receipt totals.

use rust_decimal::Decimal;
use testresult::TestResult;
use uuid::Uuid;

use paperbloom_core::{
    cart::Cart,
    catalog::Catalog,
    products::{Category, ComboCategory, ComboOption, Product, QuantityOption},
    receipt,
    session::{AdminSession, Role},
};

fn peony() -> Product {
    Product {
        id: Uuid::now_v7(),
        name: "Pink Peony Bouquet".to_string(),
        description: "Lush paper peonies that never fade.".to_string(),
        base_price: Decimal::new(1299, 0),
        images: vec!["/images/peony.jpg".to_string()],
        category: Category::Peonies,
        eco_friendly: true,
        sustainability_info: Some("Handcrafted from 100% recycled paper.".to_string()),
        combo_options: vec![ComboOption {
            id: Uuid::now_v7(),
            name: "Vase".to_string(),
            price: Decimal::new(450, 0),
            image: None,
            category: ComboCategory::Accessory,
        }],
        quantity_options: vec![
            QuantityOption {
                stems: 5,
                price_modifier: Decimal::ZERO,
            },
            QuantityOption {
                stems: 10,
                price_modifier: Decimal::new(800, 0),
            },
        ],
        in_stock: true,
    }
}

fn rose() -> Product {
    Product {
        id: Uuid::now_v7(),
        name: "Red Rose Dozen".to_string(),
        description: String::new(),
        base_price: Decimal::new(999, 0),
        images: Vec::new(),
        category: Category::Roses,
        eco_friendly: false,
        sustainability_info: None,
        combo_options: Vec::new(),
        quantity_options: Vec::new(),
        in_stock: true,
    }
}

#[test]
fn browse_compose_and_check_out() -> TestResult {
    let peony = peony();
    let rose = rose();

    let mut catalog = Catalog::new();

    catalog.replace(vec![peony.clone(), rose.clone()]);

    assert_eq!(catalog.by_category(Category::Peonies).count(), 1);

    let loaded = catalog.get(peony.id).cloned();

    assert_eq!(loaded.as_ref().map(|p| p.name.as_str()), Some(peony.name.as_str()));

    let ten_stems = QuantityOption {
        stems: 10,
        price_modifier: Decimal::new(800, 0),
    };

    let mut cart = Cart::new();

    cart.add_item(&peony, 1, &peony.combo_options, Some(ten_stems))?;

    // (1299 + 800 + 450) * 1
    assert_eq!(cart.total(), Decimal::new(2549, 0));

    cart.add_item(&rose, 2, &[], None)?;
    cart.add_item(&rose, 3, &[], None)?;

    assert_eq!(cart.len(), 2, "merge must not create a second rose line");
    assert_eq!(cart.item_count(), 6);
    assert_eq!(cart.total(), Decimal::new(2549 + 5 * 999, 0));

    cart.update_quantity(rose.id, 1);

    assert_eq!(cart.total(), Decimal::new(2549 + 999, 0));

    let rendered = receipt::render(&cart);

    assert!(rendered.contains("Red Rose Dozen"), "receipt must list lines");

    cart.clear();

    assert_eq!(cart.total(), Decimal::ZERO);
    assert_eq!(cart.item_count(), 0);

    Ok(())
}

#[test]
fn catalog_survives_a_failed_refresh() {
    let peony = peony();
    let peony_id = peony.id;

    let mut catalog = Catalog::new();

    catalog.replace(vec![peony]);

    // A failed fetch never reaches `replace`; previous state must remain.
    assert!(catalog.get(peony_id).is_some());
    assert_eq!(catalog.len(), 1);
}

#[test]
fn session_lifecycle_alongside_the_cart() -> TestResult {
    let mut session = AdminSession::new();
    let mut cart = Cart::new();

    cart.add_item(&rose(), 1, &[], None)?;
    session.apply_login("jwt".to_string(), "admin".to_string(), Role::Admin);

    assert!(session.is_authenticated());

    // Logging out clears the session but never the cart.
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(cart.item_count(), 1);

    Ok(())
}
