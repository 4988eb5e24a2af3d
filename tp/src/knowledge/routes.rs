//! Known rail and road distances (km)
//!
//! Pairs are unordered; lookups try both directions. Pairs missing here fall
//! back to great-circle distance with a detour factor.

pub const RAIL_DISTANCES: &[(&str, &str, u32)] = &[
    ("delhi", "mumbai", 1384),
    ("delhi", "kolkata", 1530),
    ("delhi", "chennai", 2175),
    ("delhi", "bangalore", 2150),
    ("delhi", "jaipur", 310),
    ("delhi", "agra", 230),
    ("delhi", "varanasi", 820),
    ("delhi", "lucknow", 555),
    ("delhi", "amritsar", 450),
    ("delhi", "chandigarh", 245),
    ("delhi", "dehradun", 255),
    ("delhi", "bhopal", 700),
    ("delhi", "hyderabad", 1550),
    ("delhi", "ahmedabad", 940),
    ("mumbai", "pune", 192),
    ("mumbai", "goa", 588),
    ("mumbai", "ahmedabad", 524),
    ("mumbai", "bangalore", 984),
    ("mumbai", "chennai", 1330),
    ("mumbai", "hyderabad", 711),
    ("mumbai", "nagpur", 840),
    ("chennai", "bangalore", 346),
    ("chennai", "hyderabad", 627),
    ("chennai", "kochi", 690),
    ("chennai", "coimbatore", 507),
    ("chennai", "madurai", 460),
    ("chennai", "trichy", 330),
    ("chennai", "mysore", 480),
    ("chennai", "salem", 340),
    ("bangalore", "hyderabad", 570),
    ("bangalore", "mysore", 145),
    ("bangalore", "goa", 560),
    ("bangalore", "kochi", 540),
    ("bangalore", "coimbatore", 370),
    ("kolkata", "patna", 530),
    ("kolkata", "varanasi", 680),
    ("kolkata", "bhubaneswar", 440),
    ("kolkata", "guwahati", 1080),
    ("jaipur", "udaipur", 395),
    ("jaipur", "jodhpur", 340),
    ("hyderabad", "visakhapatnam", 625),
    ("coimbatore", "madurai", 210),
    ("coimbatore", "kochi", 190),
    ("coimbatore", "mettupalayam", 40),
    ("coimbatore", "salem", 165),
    ("coimbatore", "erode", 105),
    ("coimbatore", "trichy", 210),
    ("madurai", "trichy", 140),
    ("madurai", "rameswaram", 170),
    ("madurai", "kanyakumari", 240),
];

pub const ROAD_DISTANCES: &[(&str, &str, u32)] = &[
    // Coimbatore hub
    ("coimbatore", "chennai", 505),
    ("coimbatore", "bangalore", 365),
    ("coimbatore", "madurai", 218),
    ("coimbatore", "trichy", 220),
    ("coimbatore", "salem", 165),
    ("coimbatore", "erode", 100),
    ("coimbatore", "tiruppur", 50),
    ("coimbatore", "ooty", 86),
    ("coimbatore", "mettupalayam", 38),
    ("coimbatore", "munnar", 160),
    ("coimbatore", "kochi", 195),
    ("coimbatore", "palakkad", 55),
    ("coimbatore", "mysore", 220),
    ("coimbatore", "pollachi", 40),
    ("coimbatore", "kodaikanal", 175),
    ("coimbatore", "thanjavur", 305),
    ("coimbatore", "dindigul", 168),
    ("coimbatore", "pondicherry", 410),
    ("coimbatore", "thiruvananthapuram", 430),
    ("coimbatore", "hyderabad", 790),
    ("coimbatore", "goa", 870),
    // Tamil Nadu
    ("chennai", "madurai", 462),
    ("chennai", "trichy", 330),
    ("chennai", "salem", 340),
    ("chennai", "pondicherry", 155),
    ("chennai", "thanjavur", 340),
    ("chennai", "kanchipuram", 72),
    ("chennai", "tirupati", 135),
    ("chennai", "vellore", 135),
    ("chennai", "bangalore", 350),
    ("chennai", "mysore", 480),
    ("chennai", "kochi", 690),
    ("madurai", "trichy", 140),
    ("madurai", "thanjavur", 185),
    ("madurai", "kodaikanal", 120),
    ("madurai", "rameswaram", 175),
    ("madurai", "kanyakumari", 245),
    ("trichy", "thanjavur", 55),
    ("mettupalayam", "ooty", 48),
    // South India inter-state
    ("bangalore", "mysore", 145),
    ("bangalore", "hyderabad", 570),
    ("bangalore", "goa", 560),
    ("bangalore", "kochi", 540),
    ("bangalore", "ooty", 280),
    ("bangalore", "pondicherry", 310),
    ("kochi", "munnar", 130),
    ("kochi", "thiruvananthapuram", 205),
    ("kochi", "alleppey", 55),
    ("hyderabad", "chennai", 630),
    // North and West India
    ("delhi", "jaipur", 280),
    ("delhi", "agra", 230),
    ("delhi", "chandigarh", 250),
    ("delhi", "dehradun", 250),
    ("delhi", "haridwar", 230),
    ("delhi", "rishikesh", 240),
    ("delhi", "lucknow", 555),
    ("delhi", "manali", 540),
    ("chandigarh", "manali", 310),
    ("chandigarh", "shimla", 115),
    ("jaipur", "udaipur", 395),
    ("jaipur", "jodhpur", 340),
    ("mumbai", "pune", 150),
    ("mumbai", "goa", 590),
    ("mumbai", "ahmedabad", 530),
    ("mumbai", "nashik", 170),
];

/// Look up an unordered pair in a distance table
pub fn lookup(table: &[(&str, &str, u32)], a: &str, b: &str) -> Option<u32> {
    table
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, km)| *km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_symmetric() {
        assert_eq!(lookup(ROAD_DISTANCES, "coimbatore", "ooty"), Some(86));
        assert_eq!(lookup(ROAD_DISTANCES, "ooty", "coimbatore"), Some(86));
        assert_eq!(lookup(RAIL_DISTANCES, "agra", "delhi"), Some(230));
        assert_eq!(lookup(RAIL_DISTANCES, "ooty", "paris"), None);
    }
}
