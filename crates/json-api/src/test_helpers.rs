//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use paperbloom_app::{
    auth::Claims,
    context::AppContext,
    domain::{
        images::MockImagesService,
        products::{
            MockProductsService,
            models::{
                Category, ComboCategory, ComboOptionRecord, ImageRecord, ProductRecord,
                QuantityOptionRecord,
            },
        },
        users::{MockAuthService, models::Role},
    },
};
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_admin_claims(Claims {
        sub: "admin".to_string(),
        role: Role::Admin,
        iss: "paperbloom".to_string(),
        aud: "paperbloom-storefront".to_string(),
        iat: 0,
        exp: i64::MAX,
    });

    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_record(uuid: Uuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Pink Peony Bouquet".to_string(),
        description: "Hand-folded paper peonies".to_string(),
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

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_images_mock() -> MockImagesService {
    let mut images = MockImagesService::new();

    images.expect_upload_image().never();
    images.expect_delete_image().never();

    images
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_verify_bearer().never();
    auth.expect_create_user().never();
    auth.expect_count_users().never();

    auth
}

fn make_state(
    products: MockProductsService,
    images: MockImagesService,
    auth: MockAuthService,
) -> Arc<State> {
    State::shared(AppContext::new(
        Arc::new(products),
        Arc::new(images),
        Arc::new(auth),
    ))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    make_state(strict_products_mock(), strict_images_mock(), auth)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = make_state(products, strict_images_mock(), strict_auth_mock());

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_admin)
            .push(route),
    )
}

pub(crate) fn images_service(images: MockImagesService, route: Router) -> Service {
    let state = make_state(strict_products_mock(), images, strict_auth_mock());

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_admin)
            .push(route),
    )
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    let state = state_with_auth(auth);

    Service::new(Router::new().hoop(inject(state)).push(route))
}
