//! Cart and line types.

use std::collections::HashSet;
use std::num::NonZeroU32;

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product reference and how many of it the shopper wants.
///
/// Serialized as `{"productId": 1, "quantity": 2}`. A zero quantity does not
/// deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Referenced catalog product.
    pub product_id: ProductId,
    /// Quantity, always at least 1.
    pub quantity: NonZeroU32,
}

impl CartLine {
    pub fn new(product_id: ProductId, quantity: NonZeroU32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Validate a caller-supplied quantity.
///
/// Zero and negative values are [`CommerceError::InvalidQuantity`]; values
/// too large for a line are [`CommerceError::Overflow`].
pub fn positive_quantity(quantity: i64) -> Result<NonZeroU32, CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    u32::try_from(quantity)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(CommerceError::Overflow)
}

/// The ordered list of cart lines.
///
/// Lines keep the order in which products were first added, and each
/// product appears at most once. Serialized as a bare JSON array; an array
/// that repeats a product id is rejected on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<CartLine>", try_from = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity.get())).sum()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Add `quantity` of a product, appending a new line if needed.
    ///
    /// Returns the line's new quantity. On overflow the cart is unchanged.
    pub fn add(
        &mut self,
        product_id: ProductId,
        quantity: NonZeroU32,
    ) -> Result<NonZeroU32, CommerceError> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line
                .quantity
                .checked_add(quantity.get())
                .ok_or(CommerceError::Overflow)?;
            return Ok(line.quantity);
        }

        self.lines.push(CartLine::new(product_id, quantity));
        Ok(quantity)
    }

    /// Replace the quantity of an existing line, keeping its position.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: NonZeroU32,
    ) -> Result<(), CommerceError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or(CommerceError::LineNotFound(product_id))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove a product's line and return it.
    pub fn remove(&mut self, product_id: ProductId) -> Result<CartLine, CommerceError> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or(CommerceError::LineNotFound(product_id))?;
        Ok(self.lines.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = String;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if !seen.insert(line.product_id) {
                return Err(format!("duplicate cart line for product {}", line.product_id));
            }
        }
        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
