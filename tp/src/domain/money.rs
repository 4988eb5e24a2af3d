//! Money and price types
//!
//! All generated prices are native INR held as integer paise. A second,
//! converted amount is attached only when a display currency is configured.

use serde::{Deserialize, Serialize};

/// Supported currencies (all with two minor digits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

/// An amount in integer minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    pub minor_units: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(minor_units: i64, currency: Currency) -> Self {
        Self { minor_units, currency }
    }

    /// Round a major-unit amount (e.g. rupees) to minor units
    pub fn from_major(amount: f64, currency: Currency) -> Self {
        Self {
            minor_units: (amount * 100.0).round() as i64,
            currency,
        }
    }

    pub fn inr(rupees: f64) -> Self {
        Self::from_major(rupees, Currency::Inr)
    }

    pub fn major(&self) -> f64 {
        self.minor_units as f64 / 100.0
    }

    /// Multiply by a unit count (travelers, nights, vehicles), saturating
    pub fn times(&self, count: u64) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self {
            minor_units: self.minor_units.saturating_mul(count),
            currency: self.currency,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        let whole = group_thousands(abs / 100);
        write!(f, "{}{}{}.{:02}", sign, self.currency.symbol(), whole, abs % 100)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A native-currency amount plus an optional converted display amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Native amount (INR)
    pub amount: Money,

    /// Same amount in the configured display currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted: Option<Money>,
}

impl Price {
    pub fn native(amount: Money) -> Self {
        Self {
            amount,
            converted: None,
        }
    }

    pub fn times(&self, count: u64) -> Self {
        Self {
            amount: self.amount.times(count),
            converted: self.converted.map(|m| m.times(count)),
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.converted {
            Some(converted) => write!(f, "{} (~{})", self.amount, converted),
            None => write!(f, "{}", self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_rounds() {
        let m = Money::inr(1234.567);
        assert_eq!(m.minor_units, 123457);
        assert_eq!(m.currency, Currency::Inr);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::inr(1234567.5).to_string(), "₹1,234,567.50");
        assert_eq!(Money::new(99, Currency::Usd).to_string(), "$0.99");
        assert_eq!(Money::new(100_000, Currency::Eur).to_string(), "€1,000.00");
    }

    #[test]
    fn test_times() {
        let p = Price {
            amount: Money::inr(500.0),
            converted: Some(Money::new(600, Currency::Usd)),
        };
        let total = p.times(3);
        assert_eq!(total.amount.minor_units, 150_000);
        assert_eq!(total.converted.unwrap().minor_units, 1800);
    }

    #[test]
    fn test_times_saturates() {
        let m = Money::inr(5000.0);
        assert_eq!(m.times(u64::from(u32::MAX) * u64::from(u32::MAX)).minor_units, i64::MAX);
        assert_eq!(m.times(u64::MAX).minor_units, i64::MAX);
        assert_eq!(m.times(0).minor_units, 0);
    }

    #[test]
    fn test_money_orders_by_amount() {
        let mut amounts = vec![Money::inr(300.0), Money::inr(100.0), Money::inr(200.0)];
        amounts.sort();
        assert_eq!(amounts[0], Money::inr(100.0));
        assert_eq!(amounts[2], Money::inr(300.0));
    }

    #[test]
    fn test_currency_parse_and_serde() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("gbp".parse::<Currency>().is_err());
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"INR\"");
    }

    #[test]
    fn test_price_serde_skips_missing_conversion() {
        let json = serde_json::to_value(Price::native(Money::inr(10.0))).unwrap();
        assert!(json.get("converted").is_none());
        assert_eq!(json["amount"]["minor_units"], 1000);
    }
}
