//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use sqlx::{Error, FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::products::models::{
    Category, ComboCategory, ComboOptionRecord, ImageRecord, NewComboOption, NewQuantityOption,
    ProductInput, ProductRecord, QuantityOptionRecord,
};

const GET_PRODUCTS_SQL: &str = include_str!("sql/get_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_COMBO_OPTIONS_SQL: &str = include_str!("sql/get_combo_options.sql");
const GET_QUANTITY_OPTIONS_SQL: &str = include_str!("sql/get_quantity_options.sql");
const GET_IMAGES_SQL: &str = include_str!("sql/get_images.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const INSERT_COMBO_OPTION_SQL: &str = include_str!("sql/insert_combo_option.sql");
const INSERT_QUANTITY_OPTION_SQL: &str = include_str!("sql/insert_quantity_option.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_COMBO_OPTIONS_SQL: &str = include_str!("sql/delete_combo_options.sql");
const DELETE_QUANTITY_OPTIONS_SQL: &str = include_str!("sql/delete_quantity_options.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Bare product row without its nested collections.
#[derive(Debug, Clone)]
struct ProductRow {
    uuid: Uuid,
    name: String,
    description: String,
    base_price: Decimal,
    category: Category,
    eco_friendly: bool,
    sustainability_info: Option<String>,
    in_stock: bool,
    created_at: jiff::Timestamp,
    updated_at: jiff::Timestamp,
}

impl<'r> FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category: String = row.try_get("category")?;

        let category = category.parse().map_err(|e| Error::ColumnDecode {
            index: "category".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: row.try_get("uuid")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            base_price: row.try_get("base_price")?,
            category,
            eco_friendly: row.try_get("eco_friendly")?,
            sustainability_info: row.try_get("sustainability_info")?,
            in_stock: row.try_get("in_stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[derive(Debug, Clone)]
struct ComboOptionRow {
    product_uuid: Uuid,
    record: ComboOptionRecord,
}

impl<'r> FromRow<'r, PgRow> for ComboOptionRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category: String = row.try_get("category")?;

        let category: ComboCategory = category.parse().map_err(|e| Error::ColumnDecode {
            index: "category".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            product_uuid: row.try_get("product_uuid")?,
            record: ComboOptionRecord {
                uuid: row.try_get("uuid")?,
                name: row.try_get("name")?,
                price: row.try_get("price")?,
                image_url: row.try_get("image_url")?,
                category,
            },
        })
    }
}

#[derive(Debug, Clone)]
struct QuantityOptionRow {
    product_uuid: Uuid,
    record: QuantityOptionRecord,
}

impl<'r> FromRow<'r, PgRow> for QuantityOptionRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let stems: i32 = row.try_get("stems")?;

        let stems = u32::try_from(stems).map_err(|e| Error::ColumnDecode {
            index: "stems".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            product_uuid: row.try_get("product_uuid")?,
            record: QuantityOptionRecord {
                stems,
                price_modifier: row.try_get("price_modifier")?,
            },
        })
    }
}

#[derive(Debug, Clone)]
struct ImageRow {
    product_uuid: Uuid,
    record: ImageRecord,
}

impl<'r> FromRow<'r, PgRow> for ImageRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: row.try_get("product_uuid")?,
            record: ImageRecord {
                uuid: row.try_get("uuid")?,
                image_url: row.try_get("image_url")?,
                position: row.try_get("position")?,
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(&self, pool: &PgPool) -> Result<Vec<ProductRecord>, Error> {
        let products = query_as::<Postgres, ProductRow>(GET_PRODUCTS_SQL)
            .fetch_all(pool)
            .await?;

        let mut combos = group_by_product(
            query_as::<Postgres, ComboOptionRow>(GET_COMBO_OPTIONS_SQL)
                .bind(None::<Uuid>)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(|row| (row.product_uuid, row.record)),
        );
        let mut tiers = group_by_product(
            query_as::<Postgres, QuantityOptionRow>(GET_QUANTITY_OPTIONS_SQL)
                .bind(None::<Uuid>)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(|row| (row.product_uuid, row.record)),
        );
        let mut images = group_by_product(
            query_as::<Postgres, ImageRow>(GET_IMAGES_SQL)
                .bind(None::<Uuid>)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(|row| (row.product_uuid, row.record)),
        );

        Ok(products
            .into_iter()
            .map(|row| {
                let uuid = row.uuid;

                assemble(
                    row,
                    images.remove(&uuid).unwrap_or_default(),
                    combos.remove(&uuid).unwrap_or_default(),
                    tiers.remove(&uuid).unwrap_or_default(),
                )
            })
            .collect())
    }

    pub(crate) async fn get_product(
        &self,
        pool: &PgPool,
        product: Uuid,
    ) -> Result<Option<ProductRecord>, Error> {
        let Some(row) = query_as::<Postgres, ProductRow>(GET_PRODUCT_SQL)
            .bind(product)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let combos = query_as::<Postgres, ComboOptionRow>(GET_COMBO_OPTIONS_SQL)
            .bind(Some(product))
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(|row| row.record)
            .collect();
        let tiers = query_as::<Postgres, QuantityOptionRow>(GET_QUANTITY_OPTIONS_SQL)
            .bind(Some(product))
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(|row| row.record)
            .collect();
        let images = query_as::<Postgres, ImageRow>(GET_IMAGES_SQL)
            .bind(Some(product))
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(|row| row.record)
            .collect();

        Ok(Some(assemble(row, images, combos, tiers)))
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'static, Postgres>,
        product: Uuid,
        input: &ProductInput,
    ) -> Result<(), Error> {
        query(INSERT_PRODUCT_SQL)
            .bind(product)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.base_price)
            .bind(input.category.as_str())
            .bind(input.eco_friendly)
            .bind(&input.sustainability_info)
            .bind(input.in_stock)
            .execute(&mut **tx)
            .await?;

        insert_options(tx, product, &input.combo_options, &input.quantity_options).await
    }

    /// Returns the number of product rows touched; zero means not found.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'static, Postgres>,
        product: Uuid,
        input: &ProductInput,
    ) -> Result<u64, Error> {
        let updated = query(UPDATE_PRODUCT_SQL)
            .bind(product)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.base_price)
            .bind(input.category.as_str())
            .bind(input.eco_friendly)
            .bind(&input.sustainability_info)
            .bind(input.in_stock)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        if updated == 0 {
            return Ok(0);
        }

        // Nested collections are replaced wholesale on every update.
        query(DELETE_COMBO_OPTIONS_SQL)
            .bind(product)
            .execute(&mut **tx)
            .await?;
        query(DELETE_QUANTITY_OPTIONS_SQL)
            .bind(product)
            .execute(&mut **tx)
            .await?;

        insert_options(tx, product, &input.combo_options, &input.quantity_options).await?;

        Ok(updated)
    }

    pub(crate) async fn delete_product(&self, pool: &PgPool, product: Uuid) -> Result<u64, Error> {
        Ok(query(DELETE_PRODUCT_SQL)
            .bind(product)
            .execute(pool)
            .await?
            .rows_affected())
    }
}

async fn insert_options(
    tx: &mut Transaction<'static, Postgres>,
    product: Uuid,
    combos: &[NewComboOption],
    tiers: &[NewQuantityOption],
) -> Result<(), Error> {
    for combo in combos {
        query(INSERT_COMBO_OPTION_SQL)
            .bind(Uuid::now_v7())
            .bind(product)
            .bind(&combo.name)
            .bind(combo.price)
            .bind(&combo.image_url)
            .bind(combo.category.as_str())
            .execute(&mut **tx)
            .await?;
    }

    for tier in tiers {
        query(INSERT_QUANTITY_OPTION_SQL)
            .bind(Uuid::now_v7())
            .bind(product)
            .bind(i32::try_from(tier.stems).unwrap_or(i32::MAX))
            .bind(tier.price_modifier)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}

fn group_by_product<T>(rows: impl Iterator<Item = (Uuid, T)>) -> FxHashMap<Uuid, Vec<T>> {
    let mut grouped: FxHashMap<Uuid, Vec<T>> = FxHashMap::default();

    for (product_uuid, record) in rows {
        grouped.entry(product_uuid).or_default().push(record);
    }

    grouped
}

fn assemble(
    row: ProductRow,
    images: Vec<ImageRecord>,
    combo_options: Vec<ComboOptionRecord>,
    quantity_options: Vec<QuantityOptionRecord>,
) -> ProductRecord {
    ProductRecord {
        uuid: row.uuid,
        name: row.name,
        description: row.description,
        base_price: row.base_price,
        category: row.category,
        eco_friendly: row.eco_friendly,
        sustainability_info: row.sustainability_info,
        in_stock: row.in_stock,
        images,
        combo_options,
        quantity_options,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
