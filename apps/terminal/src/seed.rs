//! # Starting Catalog
//!
//! The fixed shelf the store opens with. Reproduced exactly — prices and
//! stock levels are part of the store's published behavior.

use boutique_core::{Inventory, Money, Product, ShoeStyle};

/// Builds the eight-product starting inventory.
///
/// Listing order is selection order, so the order here is load-bearing.
pub fn starting_inventory() -> Inventory {
    let mut inventory = Inventory::new();

    inventory.add(Product::shirt("Men's Shirt", Money::from_amount(80_000), 25, "M"));
    inventory.add(Product::shirt("Women's Shirt", Money::from_amount(75_000), 25, "S"));
    inventory.add(Product::clothing("Men's Jacket", Money::from_amount(55_000), 20, "M"));
    inventory.add(Product::clothing("Women's Dress", Money::from_amount(45_000), 10, "P"));
    inventory.add(Product::pants("Men's Pants", Money::from_amount(120_000), 25, "L"));
    inventory.add(Product::pants("Women's Pants", Money::from_amount(110_000), 25, "M"));
    inventory.add(Product::shoe(
        "Men's Shoes",
        Money::from_amount(200_000),
        25,
        "42",
        ShoeStyle::Casual,
    ));
    inventory.add(Product::shoe(
        "Women's Shoes",
        Money::from_amount(150_000),
        25,
        "38",
        ShoeStyle::Formal,
    ));

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_inventory_has_eight_products_in_order() {
        let inventory = starting_inventory();
        assert_eq!(inventory.len(), 8);

        let names: Vec<&str> = (0..inventory.len())
            .filter_map(|i| inventory.get(i).map(|p| p.name.as_str()))
            .collect();
        assert_eq!(
            names,
            [
                "Men's Shirt",
                "Women's Shirt",
                "Men's Jacket",
                "Women's Dress",
                "Men's Pants",
                "Women's Pants",
                "Men's Shoes",
                "Women's Shoes",
            ]
        );
    }

    #[test]
    fn test_starting_prices_and_stock() {
        let inventory = starting_inventory();

        let shirt = inventory.get(0).unwrap();
        assert_eq!(shirt.price, Money::from_amount(80_000));
        assert_eq!(shirt.stock, 25);

        let dress = inventory.get(3).unwrap();
        assert_eq!(dress.price, Money::from_amount(45_000));
        assert_eq!(dress.stock, 10);

        let jacket = inventory.get(2).unwrap();
        assert_eq!(jacket.stock, 20);
    }

    #[test]
    fn test_shoes_carry_their_styles() {
        let inventory = starting_inventory();

        let mens = inventory.get(6).unwrap();
        assert!(mens.describe().contains("Type: Casual (Shoe)"));

        let womens = inventory.get(7).unwrap();
        assert!(womens.describe().contains("Type: Formal (Shoe)"));
    }
}
