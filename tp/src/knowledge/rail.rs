//! Indian Railways train catalog
//!
//! Train families are route-aware: premium families only run on the
//! corridors listed here, generic expresses run everywhere.

use crate::domain::BudgetTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainSpeed {
    Premium,
    SemiHighSpeed,
    Superfast,
    NonStop,
    Standard,
}

impl TrainSpeed {
    /// Premium-class trains carry a fare surcharge and run faster
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium | Self::SemiHighSpeed | Self::NonStop)
    }

    /// Candidate average speeds in km/h
    pub fn speeds(&self) -> &'static [u32] {
        if self.is_premium() { &[80, 90, 110, 130] } else { &[50, 55, 60, 70] }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainFamily {
    pub name: &'static str,
    pub train_type: &'static str,
    pub speed: TrainSpeed,
    pub pantry: bool,
}

const fn family(name: &'static str, train_type: &'static str, speed: TrainSpeed, pantry: bool) -> TrainFamily {
    TrainFamily {
        name,
        train_type,
        speed,
        pantry,
    }
}

/// Long-distance premium trains, all touching Delhi
pub const DELHI_FAMILIES: &[TrainFamily] = &[
    family("Rajdhani Express", "Superfast Premium", TrainSpeed::Premium, true),
    family("Duronto Express", "Non-Stop Premium", TrainSpeed::NonStop, true),
    family("Sampark Kranti Express", "Superfast", TrainSpeed::Superfast, true),
    family("Garib Rath Express", "Superfast", TrainSpeed::Superfast, false),
];

/// Day trains on short intercity corridors
pub const SHATABDI_FAMILIES: &[TrainFamily] = &[
    family("Shatabdi Express", "Superfast Premium", TrainSpeed::Premium, true),
    family("Vande Bharat Express", "Semi-High Speed", TrainSpeed::SemiHighSpeed, true),
    family("Jan Shatabdi Express", "Superfast", TrainSpeed::Standard, false),
];

pub const GATIMAAN: TrainFamily = family("Gatimaan Express", "Semi-High Speed", TrainSpeed::SemiHighSpeed, true);

pub const TEJAS: TrainFamily = family("Tejas Express", "Superfast Premium", TrainSpeed::Premium, true);

pub const GENERIC_FAMILIES: &[TrainFamily] = &[
    family("Superfast Express", "Superfast", TrainSpeed::Superfast, true),
    family("Express", "Express", TrainSpeed::Standard, false),
    family("Mail Express", "Mail", TrainSpeed::Standard, true),
    family("Intercity Express", "Express", TrainSpeed::Standard, false),
    family("Humsafar Express", "Superfast", TrainSpeed::Superfast, true),
    family("Weekly Express", "Express", TrainSpeed::Standard, false),
];

const SHATABDI_CORRIDORS: &[(&str, &str)] = &[
    ("delhi", "chandigarh"),
    ("delhi", "amritsar"),
    ("delhi", "lucknow"),
    ("delhi", "varanasi"),
    ("delhi", "dehradun"),
    ("delhi", "jaipur"),
    ("delhi", "agra"),
    ("delhi", "bhopal"),
    ("chennai", "bangalore"),
    ("chennai", "mysore"),
    ("chennai", "coimbatore"),
    ("mumbai", "ahmedabad"),
    ("mumbai", "goa"),
    ("kolkata", "patna"),
    ("bangalore", "mysore"),
    ("hyderabad", "visakhapatnam"),
];

const TEJAS_CORRIDORS: &[(&str, &str)] = &[
    ("mumbai", "goa"),
    ("mumbai", "ahmedabad"),
    ("delhi", "lucknow"),
    ("chennai", "madurai"),
];

fn on_corridor(corridors: &[(&str, &str)], a: &str, b: &str) -> bool {
    corridors
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

/// Train families that serve the route between two city keys
pub fn families_for(a: &str, b: &str) -> Vec<TrainFamily> {
    let mut families = Vec::new();
    if a == "delhi" || b == "delhi" {
        families.extend_from_slice(DELHI_FAMILIES);
    }
    if on_corridor(SHATABDI_CORRIDORS, a, b) {
        families.extend_from_slice(SHATABDI_FAMILIES);
    }
    if on_corridor(&[("delhi", "agra")], a, b) {
        families.push(GATIMAAN);
    }
    if on_corridor(TEJAS_CORRIDORS, a, b) {
        families.push(TEJAS);
    }
    families.extend_from_slice(GENERIC_FAMILIES);
    families
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoachClass {
    pub name: &'static str,
    pub code: &'static str,
    pub multiplier: f64,
}

const fn coach(name: &'static str, code: &'static str, multiplier: f64) -> CoachClass {
    CoachClass { name, code, multiplier }
}

const BUDGET_CLASSES: &[CoachClass] = &[coach("Sleeper", "SL", 1.0), coach("AC 3 Tier", "3A", 2.5)];

const MODERATE_CLASSES: &[CoachClass] = &[
    coach("AC 3 Tier", "3A", 2.5),
    coach("AC 2 Tier", "2A", 3.8),
    coach("AC Chair Car", "CC", 2.0),
];

const LUXURY_CLASSES: &[CoachClass] = &[
    coach("AC 2 Tier", "2A", 3.8),
    coach("AC First Class", "1A", 6.0),
    coach("Executive Chair Car", "EC", 4.5),
];

/// Coach classes offered for a budget tier
pub fn classes_for(tier: BudgetTier) -> &'static [CoachClass] {
    match tier {
        BudgetTier::Budget => BUDGET_CLASSES,
        BudgetTier::Moderate => MODERATE_CLASSES,
        BudgetTier::Luxury => LUXURY_CLASSES,
    }
}

pub const RUNS_ON: &[&str] = &["Daily", "Mon/Wed/Fri", "Tue/Thu/Sat", "Daily except Sun"];

/// Fare per km in INR before class and premium multipliers
pub const FARE_PER_KM: f64 = 0.55;
pub const PREMIUM_SURCHARGE: f64 = 1.4;
pub const FARE_FLOOR_INR: i64 = 150;

/// Nilgiri Mountain Railway, the only rail link into Ooty
pub mod nilgiri {
    pub const TRAIN_NAME: &str = "Nilgiri Mountain Railway";
    pub const TRAIN_NUMBER: &str = "56136";
    pub const TRAIN_TYPE: &str = "Heritage / Narrow Gauge";
    pub const DEPARTURE: &str = "07:10";
    pub const ARRIVAL: &str = "12:15";
    pub const DURATION: &str = "5h 5m";
    pub const DISTANCE_KM: u32 = 46;
    pub const CLASS_NAME: &str = "First Class / Second Class";
    pub const CLASS_CODE: &str = "FC";
    pub const FARE_INR: i64 = 250;
    pub const ZONE: &str = "Southern";
    pub const OOTY_STATION: (&str, &str) = ("UAM", "Udagamandalam (Ooty)");
    pub const HILL_STATION: &str = "ooty";
    /// Cities with a practical connection to the railway's plains terminus
    pub const FEEDERS: &[&str] = &["mettupalayam", "coimbatore"];
    pub const NOTE: &str =
        "UNESCO World Heritage rack railway. Scenic journey through tea plantations and 16 tunnels.";
    pub const COIMBATORE_NOTE: &str =
        "Connect from Coimbatore to Mettupalayam (40 km) by passenger train or bus.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_families_always_present() {
        let families = families_for("salem", "erode");
        assert_eq!(families.len(), GENERIC_FAMILIES.len());
    }

    #[test]
    fn test_delhi_agra_gets_gatimaan_and_shatabdi() {
        let families = families_for("agra", "delhi");
        let names: Vec<_> = families.iter().map(|f| f.name).collect();
        assert!(names.contains(&"Gatimaan Express"));
        assert!(names.contains(&"Shatabdi Express"));
        assert!(names.contains(&"Rajdhani Express"));
        assert!(!names.contains(&"Tejas Express"));
    }

    #[test]
    fn test_tejas_corridor() {
        let names: Vec<_> = families_for("goa", "mumbai").iter().map(|f| f.name).collect();
        assert!(names.contains(&"Tejas Express"));
        assert!(names.contains(&"Vande Bharat Express"));
    }

    #[test]
    fn test_classes_by_tier() {
        assert_eq!(classes_for(BudgetTier::Budget)[0].code, "SL");
        assert!(classes_for(BudgetTier::Luxury).iter().any(|c| c.code == "1A"));
        let codes: Vec<&str> = classes_for(BudgetTier::Moderate).iter().map(|c| c.code).collect();
        assert_eq!(codes, ["3A", "2A", "CC"]);
    }

    #[test]
    fn test_classes_outlive_the_call() {
        let tiers = [BudgetTier::Budget, BudgetTier::Moderate, BudgetTier::Luxury];
        let held: Vec<&'static [CoachClass]> = tiers.into_iter().map(classes_for).collect();
        assert_eq!(held.iter().map(|c| c.len()).collect::<Vec<_>>(), [2, 3, 3]);
        assert_eq!(held[2][1].code, "1A");
    }
}
