//! Cart
//!
//! The cart aggregate: an insertion-ordered sequence of line items keyed
//! by product identity, with merge-on-add semantics. Each line captures
//! its per-unit price composition once, at add time; quantity changes
//! recompute the total by multiplication rather than by rescaling a prior
//! total, so rounding error can never compound across edits.

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    pricing::{self, PricingError},
    products::{ComboOption, ComboOptionId, Product, ProductId, QuantityOption},
};

/// Validation errors raised by cart operations.
///
/// Operations on a missing product id are no-ops, never errors; these
/// only cover genuinely invalid arguments.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Quantity below 1 on an add.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// A selected combo does not belong to the product.
    #[error("combo option {0} does not belong to the product")]
    UnknownCombo(ComboOptionId),

    /// The same combo was selected more than once.
    #[error("combo option {0} selected more than once")]
    DuplicateCombo(ComboOptionId),

    /// The product offers quantity tiers but none was selected.
    #[error("a quantity tier must be selected for this product")]
    MissingQuantityTier,

    /// The selected tier is not one of the product's own tiers.
    #[error("selected quantity tier is not offered by the product")]
    UnknownQuantityTier,

    /// The pricing engine rejected the composition.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// One row in the cart: a product with a chosen quantity and options.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    product_id: ProductId,
    product_name: String,
    quantity: u32,
    selected_combos: SmallVec<[ComboOption; 2]>,
    selected_quantity: Option<QuantityOption>,
    unit_price: Decimal,
    total_price: Decimal,
}

impl CartLineItem {
    /// Identity of the product this line refers to.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Name snapshot taken when the line was first added.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Units of this line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Combos chosen when the line was first added.
    #[must_use]
    pub fn selected_combos(&self) -> &[ComboOption] {
        &self.selected_combos
    }

    /// Tier chosen when the line was first added, if any.
    #[must_use]
    pub fn selected_quantity(&self) -> Option<QuantityOption> {
        self.selected_quantity
    }

    /// Per-unit price composed at add time.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Current line total.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// Insertion-ordered cart holding at most one line per product identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product` with the given selections.
    ///
    /// The line total is computed through the pricing engine for exactly
    /// this call's quantity. If a line for the same product already
    /// exists, the quantities and totals accumulate onto it; the existing
    /// line's combos, tier, and per-unit price are left untouched.
    /// Otherwise a new line is appended at the end of the sequence.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`] if `quantity` is zero.
    /// - [`CartError::UnknownCombo`] / [`CartError::DuplicateCombo`] if a
    ///   selected combo is not the product's own, or repeats.
    /// - [`CartError::MissingQuantityTier`] /
    ///   [`CartError::UnknownQuantityTier`] if the tier selection does not
    ///   match what the product offers.
    /// - [`CartError::Pricing`] if the pricing engine rejects the
    ///   composition.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        selected_combos: &[ComboOption],
        selected_quantity: Option<QuantityOption>,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        match selected_quantity {
            Some(tier) if !product.quantity_options.contains(&tier) => {
                return Err(CartError::UnknownQuantityTier);
            }
            None if !product.quantity_options.is_empty() => {
                return Err(CartError::MissingQuantityTier);
            }
            _ => {}
        }

        let mut seen: SmallVec<[ComboOptionId; 2]> = SmallVec::new();

        for combo in selected_combos {
            if !product.combo_options.iter().any(|own| own.id == combo.id) {
                return Err(CartError::UnknownCombo(combo.id));
            }

            if seen.contains(&combo.id) {
                return Err(CartError::DuplicateCombo(combo.id));
            }

            seen.push(combo.id);
        }

        let combo_prices: SmallVec<[Decimal; 2]> =
            selected_combos.iter().map(|combo| combo.price).collect();
        let tier_modifier = selected_quantity.map(|tier| tier.price_modifier);

        let unit_price = pricing::unit_price(product.base_price, tier_modifier, &combo_prices)?;
        let total_price =
            pricing::line_price(product.base_price, quantity, tier_modifier, &combo_prices)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            existing.quantity += quantity;
            existing.total_price += total_price;

            return Ok(());
        }

        self.items.push(CartLineItem {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            selected_combos: selected_combos.iter().cloned().collect(),
            selected_quantity,
            unit_price,
            total_price,
        });

        Ok(())
    }

    /// Deletes the line for `product_id`; no-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Sets the quantity of the line for `product_id` and recomputes its
    /// total from the per-unit price captured when the line was first
    /// added. A quantity of zero removes the line. No-op if the product
    /// id is absent.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);

            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity = quantity;
            item.total_price = item.unit_price * Decimal::from(quantity);
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line totals; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLineItem::total_price).sum()
    }

    /// Sum of all line quantities; zero for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::products::{Category, ComboCategory};

    use super::*;

    fn vase() -> ComboOption {
        ComboOption {
            id: Uuid::now_v7(),
            name: "Vase".to_string(),
            price: Decimal::new(450, 0),
            image: None,
            category: ComboCategory::Accessory,
        }
    }

    fn peony_with(combos: Vec<ComboOption>, tiers: Vec<QuantityOption>) -> Product {
        Product {
            id: Uuid::now_v7(),
            name: "Pink Peony Bouquet".to_string(),
            description: "Lush paper peonies.".to_string(),
            base_price: Decimal::new(1299, 0),
            images: Vec::new(),
            category: Category::Peonies,
            eco_friendly: true,
            sustainability_info: None,
            combo_options: combos,
            quantity_options: tiers,
            in_stock: true,
        }
    }

    fn plain_product(base_price: Decimal) -> Product {
        let mut product = peony_with(Vec::new(), Vec::new());
        product.base_price = base_price;

        product
    }

    #[test]
    fn end_to_end_tier_and_combo_composition() -> TestResult {
        let combo = vase();
        let tier = QuantityOption {
            stems: 10,
            price_modifier: Decimal::new(800, 0),
        };
        let product = peony_with(
            vec![combo.clone()],
            vec![
                QuantityOption {
                    stems: 5,
                    price_modifier: Decimal::ZERO,
                },
                tier,
            ],
        );

        let mut cart = Cart::new();

        cart.add_item(&product, 1, &[combo], Some(tier))?;

        assert_eq!(cart.total(), Decimal::new(2549, 0));
        assert_eq!(cart.item_count(), 1);

        Ok(())
    }

    #[test]
    fn adding_same_product_twice_merges_quantities_and_totals() -> TestResult {
        let product = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        cart.add_item(&product, 2, &[], None)?;
        cart.add_item(&product, 3, &[], None)?;

        assert_eq!(cart.len(), 1);

        let line = cart.items().first();

        assert_eq!(line.map(CartLineItem::quantity), Some(5));
        assert_eq!(
            line.map(CartLineItem::total_price),
            Some(Decimal::new(500, 0))
        );

        Ok(())
    }

    #[test]
    fn merge_preserves_first_add_composition() -> TestResult {
        let combo = vase();
        let product = peony_with(vec![combo.clone()], Vec::new());
        let mut cart = Cart::new();

        cart.add_item(&product, 1, &[combo], None)?;
        cart.add_item(&product, 1, &[], None)?;

        let line = cart.items().first();

        // 1749 from the first add plus 1299 from the second.
        assert_eq!(
            line.map(CartLineItem::total_price),
            Some(Decimal::new(3048, 0))
        );
        assert_eq!(line.map(|item| item.selected_combos().len()), Some(1));
        assert_eq!(
            line.map(CartLineItem::unit_price),
            Some(Decimal::new(1749, 0))
        );

        Ok(())
    }

    #[test]
    fn new_products_append_in_insertion_order() -> TestResult {
        let first = plain_product(Decimal::new(100, 0));
        let second = plain_product(Decimal::new(200, 0));
        let mut cart = Cart::new();

        cart.add_item(&first, 1, &[], None)?;
        cart.add_item(&second, 1, &[], None)?;

        let ids: Vec<ProductId> = cart.items().iter().map(CartLineItem::product_id).collect();

        assert_eq!(ids, vec![first.id, second.id]);

        Ok(())
    }

    #[test]
    fn remove_missing_product_leaves_cart_unchanged() -> TestResult {
        let first = plain_product(Decimal::new(100, 0));
        let second = plain_product(Decimal::new(200, 0));
        let mut cart = Cart::new();

        cart.add_item(&first, 1, &[], None)?;
        cart.add_item(&second, 2, &[], None)?;

        let before = cart.clone();

        cart.remove_item(Uuid::now_v7());

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn remove_deletes_the_matching_line() -> TestResult {
        let product = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        cart.add_item(&product, 1, &[], None)?;
        cart.remove_item(product.id);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn totals_and_counts_sum_over_lines() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(&plain_product(Decimal::new(50, 0)), 2, &[], None)?;
        cart.add_item(&plain_product(Decimal::new(2505, 1)), 1, &[], None)?;
        cart.add_item(&plain_product(Decimal::new(25, 0)), 3, &[], None)?;

        assert_eq!(cart.total(), Decimal::new(42550, 2));
        assert_eq!(cart.item_count(), 6);

        Ok(())
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();

        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn update_quantity_recomputes_from_unit_price() -> TestResult {
        let product = plain_product(Decimal::new(1050, 2));
        let mut cart = Cart::new();

        cart.add_item(&product, 2, &[], None)?;
        cart.update_quantity(product.id, 7);

        let line = cart.items().first();

        assert_eq!(line.map(CartLineItem::quantity), Some(7));
        assert_eq!(
            line.map(CartLineItem::total_price),
            Some(Decimal::new(7350, 2))
        );

        Ok(())
    }

    #[test]
    fn update_quantity_zero_removes_the_line() -> TestResult {
        let product = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        cart.add_item(&product, 3, &[], None)?;
        cart.update_quantity(product.id, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.total() >= Decimal::ZERO, "total must never go negative");

        Ok(())
    }

    #[test]
    fn update_quantity_missing_product_is_a_noop() -> TestResult {
        let product = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        cart.add_item(&product, 1, &[], None)?;

        let before = cart.clone();

        cart.update_quantity(Uuid::now_v7(), 5);

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn clear_resets_totals_and_counts() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(&plain_product(Decimal::new(100, 0)), 4, &[], None)?;
        cart.add_item(&plain_product(Decimal::new(200, 0)), 2, &[], None)?;

        cart.clear();

        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn zero_quantity_add_is_rejected() {
        let product = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        let result = cart.add_item(&product, 0, &[], None);

        assert_eq!(result, Err(CartError::InvalidQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn foreign_combo_is_rejected() {
        let product = plain_product(Decimal::new(100, 0));
        let foreign = vase();
        let mut cart = Cart::new();

        let result = cart.add_item(&product, 1, &[foreign.clone()], None);

        assert_eq!(result, Err(CartError::UnknownCombo(foreign.id)));
    }

    #[test]
    fn duplicate_combo_is_rejected() {
        let combo = vase();
        let product = peony_with(vec![combo.clone()], Vec::new());
        let mut cart = Cart::new();

        let result = cart.add_item(&product, 1, &[combo.clone(), combo.clone()], None);

        assert_eq!(result, Err(CartError::DuplicateCombo(combo.id)));
    }

    #[test]
    fn tier_selection_must_match_the_product() {
        let tier = QuantityOption {
            stems: 10,
            price_modifier: Decimal::new(800, 0),
        };
        let tiered = peony_with(Vec::new(), vec![tier]);
        let untiered = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        assert_eq!(
            cart.add_item(&tiered, 1, &[], None),
            Err(CartError::MissingQuantityTier)
        );

        let foreign_tier = QuantityOption {
            stems: 25,
            price_modifier: Decimal::ZERO,
        };

        assert_eq!(
            cart.add_item(&tiered, 1, &[], Some(foreign_tier)),
            Err(CartError::UnknownQuantityTier)
        );
        assert_eq!(
            cart.add_item(&untiered, 1, &[], Some(tier)),
            Err(CartError::UnknownQuantityTier)
        );
    }

    #[test]
    fn failed_add_never_mutates_the_cart() -> TestResult {
        let product = plain_product(Decimal::new(100, 0));
        let mut cart = Cart::new();

        cart.add_item(&product, 1, &[], None)?;

        let before = cart.clone();
        let foreign = vase();

        let _rejected = cart.add_item(&product, 2, &[foreign], None);

        assert_eq!(cart, before);

        Ok(())
    }
}
