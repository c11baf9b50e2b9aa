use serde::{Deserialize, Serialize};

/// Price of a plain pizza.
pub const PIZZA_PRICE: f64 = 10.99;
/// Price of a plain pasta.
pub const PASTA_PRICE: f64 = 8.99;
/// Surcharge applied by the cheese topping.
pub const CHEESE_SURCHARGE: f64 = 1.50;

/// The closed set of base dishes on the menu board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItemKind {
    Pizza,
    Pasta,
}

/// Toppings that can decorate a base dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topping {
    Cheese,
}

impl Topping {
    pub fn label(&self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
        }
    }

    pub fn surcharge(&self) -> f64 {
        match self {
            Topping::Cheese => CHEESE_SURCHARGE,
        }
    }
}

/// A priceable, displayable catalog entry, or a decorated composition thereof.
///
/// The `Topped` variant wraps another item, adding the topping's surcharge to
/// its price and an extra line to its display text. Wrapping an already
/// wrapped item is legal; the interactive flow only ever applies it once.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuItem {
    Pizza,
    Pasta,
    Topped {
        inner: Box<MenuItem>,
        topping: Topping,
    },
}

impl MenuItem {
    /// Catalog factory: produces the fixed dish for `kind`.
    pub fn new(kind: MenuItemKind) -> Self {
        match kind {
            MenuItemKind::Pizza => MenuItem::Pizza,
            MenuItemKind::Pasta => MenuItem::Pasta,
        }
    }

    /// Wraps this item in a cheese topping worth [`CHEESE_SURCHARGE`].
    pub fn with_cheese(self) -> Self {
        MenuItem::Topped {
            inner: Box::new(self),
            topping: Topping::Cheese,
        }
    }

    /// Name of the base dish, ignoring any toppings.
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Pizza => "Pizza",
            MenuItem::Pasta => "Pasta",
            MenuItem::Topped { inner, .. } => inner.label(),
        }
    }

    /// Unit price: the base price plus every topping surcharge.
    pub fn price(&self) -> f64 {
        match self {
            MenuItem::Pizza => PIZZA_PRICE,
            MenuItem::Pasta => PASTA_PRICE,
            MenuItem::Topped { inner, topping } => inner.price() + topping.surcharge(),
        }
    }

    /// Multi-line display text: the base dish line followed by one line per topping.
    pub fn display(&self) -> String {
        match self {
            MenuItem::Pizza => format!("Pizza - ${:.2}", PIZZA_PRICE),
            MenuItem::Pasta => format!("Pasta - ${:.2}", PASTA_PRICE),
            MenuItem::Topped { inner, topping } => format!(
                "{}\n  + {} (${:.2})",
                inner.display(),
                topping.label(),
                topping.surcharge()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_produces_fixed_prices() {
        assert_eq!(MenuItem::new(MenuItemKind::Pizza).price(), PIZZA_PRICE);
        assert_eq!(MenuItem::new(MenuItemKind::Pasta).price(), PASTA_PRICE);
    }

    #[test]
    fn cheese_adds_exactly_its_surcharge() {
        for kind in [MenuItemKind::Pizza, MenuItemKind::Pasta] {
            let plain = MenuItem::new(kind);
            let base = plain.price();
            assert_eq!(plain.with_cheese().price(), base + CHEESE_SURCHARGE);
        }
    }

    #[test]
    fn decoration_composes() {
        let double = MenuItem::new(MenuItemKind::Pizza).with_cheese().with_cheese();
        assert_eq!(double.price(), PIZZA_PRICE + 2.0 * CHEESE_SURCHARGE);
        assert_eq!(double.label(), "Pizza");
    }

    #[test]
    fn display_appends_topping_line() {
        let plain = MenuItem::new(MenuItemKind::Pizza);
        assert_eq!(plain.display(), "Pizza - $10.99");

        let cheesy = plain.with_cheese();
        let display = cheesy.display();
        assert!(display.starts_with("Pizza - $10.99\n"));
        assert!(display.contains("+ Cheese ($1.50)"));
    }
}
