//! Itinerary types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attraction category, matched against request interests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    History,
    Culture,
    Art,
    Food,
    Nature,
    Adventure,
    Shopping,
    Nightlife,
    Spiritual,
    Beach,
    Landmark,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::History,
        Category::Culture,
        Category::Art,
        Category::Food,
        Category::Nature,
        Category::Adventure,
        Category::Shopping,
        Category::Nightlife,
        Category::Spiritual,
        Category::Beach,
        Category::Landmark,
    ];

    /// Canonical interest tag
    pub fn tag(&self) -> &'static str {
        self.keywords()[0]
    }

    /// Interest keywords that select this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::History => &["history", "historical", "heritage", "monuments", "forts", "palaces"],
            Self::Culture => &["culture", "cultural", "local life", "festivals", "traditions"],
            Self::Art => &["art", "museums", "museum", "galleries", "architecture", "design"],
            Self::Food => &["food", "cuisine", "foodie", "street food", "dining", "markets", "cooking"],
            Self::Nature => &["nature", "parks", "gardens", "wildlife", "hills", "mountains", "scenery"],
            Self::Adventure => &["adventure", "trekking", "hiking", "sports", "outdoors", "boating"],
            Self::Shopping => &["shopping", "shops", "souvenirs", "bazaars"],
            Self::Nightlife => &["nightlife", "bars", "clubs", "music", "shows", "theatre", "theater"],
            Self::Spiritual => &["spiritual", "temples", "religion", "pilgrimage", "churches", "meditation", "yoga"],
            Self::Beach => &["beach", "beaches", "sea", "coast", "swimming"],
            Self::Landmark => &["landmarks", "sightseeing", "photography", "views", "icons"],
        }
    }

    /// True when any interest tag names this category
    pub fn matches_any(&self, interests: &[String]) -> bool {
        interests
            .iter()
            .any(|tag| self.keywords().iter().any(|k| tag == k || tag.contains(k)))
    }

    /// Day theme label when this category dominates a day
    pub fn theme(&self) -> &'static str {
        match self {
            Self::History => "Heritage Trail",
            Self::Culture => "Culture",
            Self::Art => "Art & Museums",
            Self::Food => "Food Discovery",
            Self::Nature => "Nature Escape",
            Self::Adventure => "Adventure",
            Self::Shopping => "Markets & Shopping",
            Self::Nightlife => "City Lights",
            Self::Spiritual => "Spiritual Journey",
            Self::Beach => "Coastal Leisure",
            Self::Landmark => "Iconic Sights",
        }
    }
}

/// Recommended part of the day for an attraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Any,
}

impl TimeOfDay {
    pub const SLOTS: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    /// Display window for a slot
    pub fn window(&self) -> &'static str {
        match self {
            Self::Morning => "09:00 - 12:00",
            Self::Afternoon => "13:00 - 17:00",
            Self::Evening => "18:00 - 21:00",
            Self::Any => "Flexible",
        }
    }

    /// Whether an attraction recommended for `self` can fill `slot`
    pub fn fits(&self, slot: TimeOfDay) -> bool {
        *self == TimeOfDay::Any || *self == slot
    }
}

/// One activity in a day slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub activity: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// None for generic free-time fillers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dining {
    pub lunch: String,
    pub dinner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-indexed
    pub day: u32,
    pub date: NaiveDate,
    pub theme: String,
    pub morning: TimeSlot,
    pub afternoon: TimeSlot,
    pub evening: TimeSlot,
    pub dining: Dining,
}

impl ItineraryDay {
    pub fn slots(&self) -> [&TimeSlot; 3] {
        [&self.morning, &self.afternoon, &self.evening]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matches_interests() {
        let interests = vec!["street food".to_string(), "museums".to_string()];
        assert!(Category::Food.matches_any(&interests));
        assert!(Category::Art.matches_any(&interests));
        assert!(!Category::Beach.matches_any(&interests));
    }

    #[test]
    fn test_time_of_day_fits() {
        assert!(TimeOfDay::Any.fits(TimeOfDay::Evening));
        assert!(TimeOfDay::Morning.fits(TimeOfDay::Morning));
        assert!(!TimeOfDay::Morning.fits(TimeOfDay::Evening));
    }
}
