//! Price construction shared by the generators

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::CurrencyConfig;
use crate::domain::{Currency, Money, Price};

/// Builds `Price` values, attaching a converted amount when configured
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pricing {
    display: Option<(Currency, f64)>,
}

impl Pricing {
    /// INR only
    pub fn native() -> Self {
        Self { display: None }
    }

    /// Convert to `currency` at `inr_per_unit` rupees per unit
    pub fn with_display(currency: Currency, inr_per_unit: f64) -> Self {
        if currency == Currency::Inr || inr_per_unit <= 0.0 {
            return Self::native();
        }
        Self {
            display: Some((currency, inr_per_unit)),
        }
    }

    pub fn from_config(config: &CurrencyConfig) -> Self {
        match config.display {
            Some(currency) => Self::with_display(currency, config.rate(currency)),
            None => Self::native(),
        }
    }

    /// Price for a whole-rupee amount
    pub fn price(&self, rupees: i64) -> Price {
        let amount = Money::new(rupees * 100, Currency::Inr);
        Price {
            amount,
            converted: self.convert(amount),
        }
    }

    /// Multiply a unit price, converting the product rather than scaling the
    /// rounded conversion
    pub fn total(&self, unit: &Price, count: u64) -> Price {
        let amount = unit.amount.times(count);
        Price {
            amount,
            converted: self.convert(amount),
        }
    }

    fn convert(&self, amount: Money) -> Option<Money> {
        self.display
            .map(|(currency, rate)| Money::from_major(amount.major() / rate, currency))
    }
}

/// Scale `base` by a random factor in `[1 - spread, 1 + spread]`
pub fn jitter(rng: &mut StdRng, base: f64, spread: f64) -> f64 {
    base * rng.random_range((1.0 - spread)..=(1.0 + spread))
}

/// "5h 5m" style duration
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// "HH:MM" wall clock for minutes after midnight, marking later days
pub fn clock(minutes: u32) -> String {
    let days = minutes / (24 * 60);
    let within = minutes % (24 * 60);
    let base = format!("{:02}:{:02}", within / 60, within % 60);
    if days == 0 { base } else { format!("{} (+{})", base, days) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_native_price_has_no_conversion() {
        let price = Pricing::native().price(1500);
        assert_eq!(price.amount.minor_units, 150_000);
        assert_eq!(price.amount.currency, Currency::Inr);
        assert!(price.converted.is_none());
    }

    #[test]
    fn test_converted_price() {
        let pricing = Pricing::with_display(Currency::Usd, 80.0);
        let price = pricing.price(8000);
        assert_eq!(price.converted, Some(Money::new(10_000, Currency::Usd)));

        let total = pricing.total(&price, 3);
        assert_eq!(total.amount.minor_units, 2_400_000);
        assert_eq!(total.converted, Some(Money::new(30_000, Currency::Usd)));
    }

    #[test]
    fn test_inr_display_is_native() {
        assert_eq!(Pricing::with_display(Currency::Inr, 1.0), Pricing::native());
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = jitter(&mut rng, 100.0, 0.1);
            assert!((90.0..=110.0).contains(&v));
        }
    }

    #[test]
    fn test_clock_and_duration() {
        assert_eq!(format_duration(305), "5h 5m");
        assert_eq!(clock(7 * 60 + 10), "07:10");
        assert_eq!(clock(25 * 60 + 30), "01:30 (+1)");
    }
}
