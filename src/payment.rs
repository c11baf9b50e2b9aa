//! Payment strategies selected at checkout time.
//!
//! A [`PaymentStrategy`] is stateless and settles a total by producing a
//! confirmation line; it is not stored after use. [`PaymentMethod`] maps the
//! shell's numeric method codes onto the available strategies.

use tracing::info;

/// Pluggable settlement behavior, polymorphic over a single capability: `pay`.
pub trait PaymentStrategy {
    /// Short method name, e.g. `"cash"`.
    fn name(&self) -> &'static str;

    /// Settles `amount` and returns the confirmation line naming the amount
    /// and method. No validation of the amount, no receipt object.
    fn pay(&self, amount: f64) -> String;
}

pub struct Cash;

impl PaymentStrategy for Cash {
    fn name(&self) -> &'static str {
        "cash"
    }

    fn pay(&self, amount: f64) -> String {
        info!(amount, method = self.name(), "Payment settled");
        format!("Paid ${:.2} in cash.", amount)
    }
}

pub struct CreditCard;

impl PaymentStrategy for CreditCard {
    fn name(&self) -> &'static str {
        "credit card"
    }

    fn pay(&self, amount: f64) -> String {
        info!(amount, method = self.name(), "Payment settled");
        format!("Charged ${:.2} to credit card.", amount)
    }
}

/// The payment methods the shell offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
}

impl PaymentMethod {
    /// Maps a numeric method code: 1 = cash, 2 = credit card. Any other code
    /// falls back to cash; the returned flag tells the caller to print a
    /// warning about the fallback.
    pub fn from_code(code: i64) -> (Self, bool) {
        match code {
            1 => (PaymentMethod::Cash, false),
            2 => (PaymentMethod::CreditCard, false),
            _ => (PaymentMethod::Cash, true),
        }
    }

    /// Selects the strategy for this method.
    pub fn strategy(self) -> Box<dyn PaymentStrategy> {
        match self {
            PaymentMethod::Cash => Box::new(Cash),
            PaymentMethod::CreditCard => Box::new(CreditCard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_one_is_cash() {
        assert_eq!(PaymentMethod::from_code(1), (PaymentMethod::Cash, false));
    }

    #[test]
    fn code_two_is_credit() {
        assert_eq!(
            PaymentMethod::from_code(2),
            (PaymentMethod::CreditCard, false)
        );
    }

    #[test]
    fn unknown_codes_default_to_cash_with_warning() {
        for code in [0, 3, -1, 99] {
            assert_eq!(PaymentMethod::from_code(code), (PaymentMethod::Cash, true));
        }
    }

    #[test]
    fn confirmations_name_amount_and_method() {
        let line = PaymentMethod::Cash.strategy().pay(19.98);
        assert!(line.contains("19.98"));
        assert!(line.contains("cash"));

        let line = PaymentMethod::CreditCard.strategy().pay(8.99);
        assert!(line.contains("8.99"));
        assert!(line.contains("credit card"));
    }
}
