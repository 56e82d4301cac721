//! Inventory Specification Example
//!
//! The classic composite-specification demo: a product is interesting when
//! it has enough stock to sell but the shelf is not overstocked. Two leaf
//! specifications over the same `Product` are combined with `and`/`not`.
//!
//! Run with: cargo run --example inventory

use criteria::specification::*;

#[derive(Debug, Clone)]
struct Product {
    name: String,
    available: u32,
}

impl Product {
    fn new(name: impl Into<String>, available: u32) -> Self {
        Product {
            name: name.into(),
            available,
        }
    }

    fn has_stock(&self, desired: u32) -> bool {
        self.available >= desired
    }
}

/// Leaf specification: the product has at least the desired amount on hand.
#[derive(Clone, Copy, Debug)]
struct InStock(u32);

impl Specification<Product> for InStock {
    fn is_satisfied_by(&self, product: &Product) -> bool {
        product.has_stock(self.0)
    }
}

fn main() {
    let product = Product::new("Sneaker", 5);

    let in_stock = InStock(3);
    let overstocked = InStock(7);
    let sellable = in_stock.and(overstocked.not());

    println!(
        "Checking product '{}' ({} available)",
        product.name, product.available
    );
    if sellable.is_satisfied_by(&product) {
        println!("The product satisfies the complex specification");
    } else {
        println!("The product does not satisfy the complex specification");
    }
}
