use crate::model::shop::ProductDto;

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product_id: i32,
    pub sku: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

impl CartLine {
    pub fn total_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add `quantity` of a product, merging with an existing line for the same product
    pub fn add(&mut self, product: &ProductDto, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id: product.id,
                sku: product.sku.clone(),
                name: product.name.clone(),
                price_cents: product.price_cents,
                quantity,
            }),
        }
    }

    /// Set the quantity of a line; zero removes it
    pub fn set_quantity(&mut self, product_id: i32, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: i32) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::total_cents).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price_cents: i64) -> ProductDto {
        ProductDto {
            id,
            sku: format!("SKU-{id}"),
            name: format!("Product {id}"),
            description: String::new(),
            price_cents,
            in_stock: true,
            category_id: 1,
        }
    }

    #[test]
    fn adding_same_product_merges_lines() {
        let mut cart = CartState::default();
        cart.add(&product(1, 3400), 1);
        cart.add(&product(1, 3400), 2);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal_cents(), 10200);
    }

    #[test]
    fn adding_zero_is_ignored() {
        let mut cart = CartState::default();
        cart.add(&product(1, 3400), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn setting_quantity_to_zero_removes_line() {
        let mut cart = CartState::default();
        cart.add(&product(1, 3400), 1);
        cart.add(&product(2, 5900), 1);

        cart.set_quantity(1, 0);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].product_id, 2);

        cart.set_quantity(2, 4);
        assert_eq!(cart.subtotal_cents(), 23600);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = CartState::default();
        cart.add(&product(1, 100), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }
}
