//! Built-in city table
//!
//! Coordinates are approximate city centers. Air and rail access drive the
//! flight and rail sentinels.

/// Landmass grouping used for road feasibility and lodging cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    SouthAsia,
    MiddleEast,
    SoutheastAsia,
    EastAsia,
    Europe,
    NorthAmerica,
    Oceania,
}

impl Region {
    /// Lodging price multiplier relative to Indian cities
    pub fn cost_index(&self) -> f64 {
        match self {
            Self::SouthAsia => 1.0,
            Self::SoutheastAsia => 1.3,
            Self::MiddleEast => 1.8,
            Self::EastAsia => 2.1,
            Self::Oceania => 2.2,
            Self::Europe => 2.3,
            Self::NorthAmerica => 2.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirAccess {
    Airport { code: &'static str, name: &'static str },
    NoAirport { nearest: &'static str, distance_km: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailAccess {
    Station {
        code: &'static str,
        name: &'static str,
        zone: &'static str,
    },
    /// No mainline station; guidance for the traveler
    NoMainline { nearest: &'static str, note: &'static str },
    /// Not on the Indian Railways network
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Lower-case lookup key
    pub key: &'static str,
    pub name: &'static str,
    /// State, province, or country for foreign cities
    pub state: &'static str,
    pub region: Region,
    pub lat: f64,
    pub lon: f64,
    pub air: AirAccess,
    pub rail: RailAccess,
}

impl City {
    pub fn has_airport(&self) -> bool {
        matches!(self.air, AirAccess::Airport { .. })
    }
}

const fn airport(code: &'static str, name: &'static str) -> AirAccess {
    AirAccess::Airport { code, name }
}

const fn no_airport(nearest: &'static str, distance_km: u32) -> AirAccess {
    AirAccess::NoAirport { nearest, distance_km }
}

const fn station(code: &'static str, name: &'static str, zone: &'static str) -> RailAccess {
    RailAccess::Station { code, name, zone }
}

const fn no_rail(nearest: &'static str, note: &'static str) -> RailAccess {
    RailAccess::NoMainline { nearest, note }
}

const fn city(
    key: &'static str,
    name: &'static str,
    state: &'static str,
    region: Region,
    lat: f64,
    lon: f64,
    air: AirAccess,
    rail: RailAccess,
) -> City {
    City {
        key,
        name,
        state,
        region,
        lat,
        lon,
        air,
        rail,
    }
}

use Region::*;

pub const CITIES: &[City] = &[
    // North India
    city(
        "delhi",
        "Delhi",
        "Delhi",
        SouthAsia,
        28.61,
        77.21,
        airport("DEL", "Indira Gandhi International"),
        station("NDLS", "New Delhi", "Northern"),
    ),
    city(
        "agra",
        "Agra",
        "Uttar Pradesh",
        SouthAsia,
        27.18,
        78.01,
        airport("AGR", "Agra Airport"),
        station("AGC", "Agra Cantt", "North Central"),
    ),
    city(
        "jaipur",
        "Jaipur",
        "Rajasthan",
        SouthAsia,
        26.91,
        75.79,
        airport("JAI", "Jaipur International"),
        station("JP", "Jaipur Junction", "North Western"),
    ),
    city(
        "udaipur",
        "Udaipur",
        "Rajasthan",
        SouthAsia,
        24.59,
        73.71,
        airport("UDR", "Maharana Pratap Airport"),
        station("UDZ", "Udaipur City", "North Western"),
    ),
    city(
        "jodhpur",
        "Jodhpur",
        "Rajasthan",
        SouthAsia,
        26.24,
        73.02,
        airport("JDH", "Jodhpur Airport"),
        station("JU", "Jodhpur Junction", "North Western"),
    ),
    city(
        "lucknow",
        "Lucknow",
        "Uttar Pradesh",
        SouthAsia,
        26.85,
        80.95,
        airport("LKO", "Chaudhary Charan Singh International"),
        station("LKO", "Lucknow Charbagh", "Northern"),
    ),
    city(
        "varanasi",
        "Varanasi",
        "Uttar Pradesh",
        SouthAsia,
        25.32,
        82.97,
        airport("VNS", "Lal Bahadur Shastri International"),
        station("BSB", "Varanasi Junction", "Northern"),
    ),
    city(
        "amritsar",
        "Amritsar",
        "Punjab",
        SouthAsia,
        31.63,
        74.87,
        airport("ATQ", "Sri Guru Ram Dass Jee International"),
        station("ASR", "Amritsar Junction", "Northern"),
    ),
    city(
        "chandigarh",
        "Chandigarh",
        "Punjab",
        SouthAsia,
        30.73,
        76.78,
        airport("IXC", "Chandigarh International"),
        station("CDG", "Chandigarh Junction", "Northern"),
    ),
    city(
        "dehradun",
        "Dehradun",
        "Uttarakhand",
        SouthAsia,
        30.32,
        78.03,
        airport("DED", "Jolly Grant Airport"),
        station("DDN", "Dehradun", "Northern"),
    ),
    city(
        "haridwar",
        "Haridwar",
        "Uttarakhand",
        SouthAsia,
        29.95,
        78.16,
        no_airport("Jolly Grant Airport, Dehradun (DED)", 35),
        station("HW", "Haridwar Junction", "Northern"),
    ),
    city(
        "rishikesh",
        "Rishikesh",
        "Uttarakhand",
        SouthAsia,
        30.09,
        78.27,
        no_airport("Jolly Grant Airport, Dehradun (DED)", 20),
        station("YNRK", "Yog Nagari Rishikesh", "Northern"),
    ),
    city(
        "shimla",
        "Shimla",
        "Himachal Pradesh",
        SouthAsia,
        31.10,
        77.17,
        airport("SLV", "Shimla Airport"),
        station("SML", "Shimla", "Northern"),
    ),
    city(
        "manali",
        "Manali",
        "Himachal Pradesh",
        SouthAsia,
        32.24,
        77.19,
        no_airport("Kullu-Bhuntar Airport (KUU)", 50),
        no_rail(
            "chandigarh",
            "Manali has no railway station. The nearest major station is Chandigarh (310 km) or \
             Ambala. Take a train to Chandigarh and then a bus.",
        ),
    ),
    city(
        "jammu",
        "Jammu",
        "Jammu & Kashmir",
        SouthAsia,
        32.73,
        74.86,
        airport("IXJ", "Jammu Airport"),
        station("JAT", "Jammu Tawi", "Northern"),
    ),
    city(
        "srinagar",
        "Srinagar",
        "Jammu & Kashmir",
        SouthAsia,
        34.08,
        74.80,
        airport("SXR", "Sheikh ul-Alam International"),
        no_rail(
            "jammu",
            "Srinagar's railway (Banihal) has limited connectivity. Most travelers take a train \
             to Jammu Tawi and then road transport.",
        ),
    ),
    city(
        "leh",
        "Leh",
        "Ladakh",
        SouthAsia,
        34.15,
        77.58,
        airport("IXL", "Kushok Bakula Rimpochee Airport"),
        no_rail(
            "jammu",
            "Leh has no railway station. The nearest station is Jammu Tawi (700 km). Most \
             travelers fly to Leh or take a road trip from Manali/Srinagar.",
        ),
    ),
    city(
        "patna",
        "Patna",
        "Bihar",
        SouthAsia,
        25.59,
        85.14,
        airport("PAT", "Jay Prakash Narayan Airport"),
        station("PNBE", "Patna Junction", "East Central"),
    ),
    // West and Central India
    city(
        "mumbai",
        "Mumbai",
        "Maharashtra",
        SouthAsia,
        19.08,
        72.88,
        airport("BOM", "Chhatrapati Shivaji Maharaj International"),
        station("CSTM", "Mumbai CST", "Central"),
    ),
    city(
        "pune",
        "Pune",
        "Maharashtra",
        SouthAsia,
        18.52,
        73.86,
        airport("PNQ", "Pune Airport"),
        station("PUNE", "Pune Junction", "Central"),
    ),
    city(
        "nashik",
        "Nashik",
        "Maharashtra",
        SouthAsia,
        20.00,
        73.79,
        airport("ISK", "Nashik Airport"),
        station("NK", "Nasik Road", "Central"),
    ),
    city(
        "nagpur",
        "Nagpur",
        "Maharashtra",
        SouthAsia,
        21.15,
        79.09,
        airport("NAG", "Dr. Babasaheb Ambedkar International"),
        station("NGP", "Nagpur Junction", "Central"),
    ),
    city(
        "ahmedabad",
        "Ahmedabad",
        "Gujarat",
        SouthAsia,
        23.02,
        72.57,
        airport("AMD", "Sardar Vallabhbhai Patel International"),
        station("ADI", "Ahmedabad Junction", "Western"),
    ),
    city(
        "goa",
        "Goa",
        "Goa",
        SouthAsia,
        15.30,
        74.12,
        airport("GOI", "Goa International"),
        station("MAO", "Madgaon Junction", "South Western"),
    ),
    city(
        "bhopal",
        "Bhopal",
        "Madhya Pradesh",
        SouthAsia,
        23.26,
        77.41,
        airport("BHO", "Raja Bhoj Airport"),
        station("BPL", "Bhopal Junction", "West Central"),
    ),
    city(
        "indore",
        "Indore",
        "Madhya Pradesh",
        SouthAsia,
        22.72,
        75.86,
        airport("IDR", "Devi Ahilyabai Holkar Airport"),
        station("INDB", "Indore Junction", "Western"),
    ),
    // East and North-East India
    city(
        "kolkata",
        "Kolkata",
        "West Bengal",
        SouthAsia,
        22.57,
        88.36,
        airport("CCU", "Netaji Subhas Chandra Bose International"),
        station("HWH", "Howrah Junction", "Eastern"),
    ),
    city(
        "bhubaneswar",
        "Bhubaneswar",
        "Odisha",
        SouthAsia,
        20.30,
        85.82,
        airport("BBI", "Biju Patnaik International"),
        station("BBS", "Bhubaneswar", "East Coast"),
    ),
    city(
        "ranchi",
        "Ranchi",
        "Jharkhand",
        SouthAsia,
        23.34,
        85.31,
        airport("IXR", "Birsa Munda Airport"),
        station("RNC", "Ranchi Junction", "South Eastern"),
    ),
    city(
        "guwahati",
        "Guwahati",
        "Assam",
        SouthAsia,
        26.14,
        91.74,
        airport("GAU", "Lokpriya Gopinath Bordoloi International"),
        station("GHY", "Guwahati", "NF Railway"),
    ),
    city(
        "darjeeling",
        "Darjeeling",
        "West Bengal",
        SouthAsia,
        27.04,
        88.26,
        no_airport("Bagdogra Airport (IXB)", 70),
        no_rail(
            "new jalpaiguri",
            "Darjeeling has the Darjeeling Himalayan Railway (toy train) from New \
             Jalpaiguri/Siliguri. Take a mainline train to NJP first.",
        ),
    ),
    city(
        "gangtok",
        "Gangtok",
        "Sikkim",
        SouthAsia,
        27.33,
        88.61,
        airport("PYG", "Pakyong Airport"),
        no_rail(
            "new jalpaiguri",
            "Gangtok has no railway station. The nearest station is New Jalpaiguri (125 km). Take \
             a train to NJP and a taxi/shared jeep.",
        ),
    ),
    // South India
    city(
        "chennai",
        "Chennai",
        "Tamil Nadu",
        SouthAsia,
        13.08,
        80.27,
        airport("MAA", "Chennai International"),
        station("MAS", "Chennai Central", "Southern"),
    ),
    city(
        "bangalore",
        "Bengaluru",
        "Karnataka",
        SouthAsia,
        12.97,
        77.59,
        airport("BLR", "Kempegowda International"),
        station("SBC", "KSR Bengaluru", "South Western"),
    ),
    city(
        "mysore",
        "Mysuru",
        "Karnataka",
        SouthAsia,
        12.30,
        76.64,
        airport("MYQ", "Mysore Airport"),
        station("MYS", "Mysuru Junction", "South Western"),
    ),
    city(
        "hyderabad",
        "Hyderabad",
        "Telangana",
        SouthAsia,
        17.39,
        78.49,
        airport("HYD", "Rajiv Gandhi International"),
        station("SC", "Secunderabad Jn", "South Central"),
    ),
    city(
        "visakhapatnam",
        "Visakhapatnam",
        "Andhra Pradesh",
        SouthAsia,
        17.69,
        83.22,
        airport("VTZ", "Visakhapatnam Airport"),
        station("VSKP", "Visakhapatnam", "East Coast"),
    ),
    city(
        "tirupati",
        "Tirupati",
        "Andhra Pradesh",
        SouthAsia,
        13.63,
        79.42,
        airport("TIR", "Tirupati Airport"),
        station("TPTY", "Tirupati", "South Central"),
    ),
    city(
        "kochi",
        "Kochi",
        "Kerala",
        SouthAsia,
        9.93,
        76.27,
        airport("COK", "Cochin International"),
        station("ERS", "Ernakulam Junction", "Southern"),
    ),
    city(
        "thiruvananthapuram",
        "Thiruvananthapuram",
        "Kerala",
        SouthAsia,
        8.52,
        76.94,
        airport("TRV", "Trivandrum International"),
        station("TVC", "Trivandrum Central", "Southern"),
    ),
    city(
        "alleppey",
        "Alappuzha",
        "Kerala",
        SouthAsia,
        9.50,
        76.34,
        no_airport("Cochin International (COK)", 85),
        station("ALLP", "Alappuzha", "Southern"),
    ),
    city(
        "palakkad",
        "Palakkad",
        "Kerala",
        SouthAsia,
        10.79,
        76.65,
        no_airport("Coimbatore International (CJB)", 65),
        station("PGT", "Palakkad Junction", "Southern"),
    ),
    city(
        "munnar",
        "Munnar",
        "Kerala",
        SouthAsia,
        10.09,
        77.06,
        no_airport("Cochin International (COK)", 110),
        no_rail(
            "aluva",
            "Munnar has no railway station. The nearest stations are Aluva/Ernakulam (130 km). \
             Take a train to Kochi/Ernakulam and then a bus/taxi.",
        ),
    ),
    city(
        "wayanad",
        "Wayanad",
        "Kerala",
        SouthAsia,
        11.69,
        76.13,
        no_airport("Calicut International (CCJ)", 90),
        no_rail(
            "kozhikode",
            "Wayanad has no direct rail access. The nearest station is Kozhikode/Calicut (85 km). \
             Take a train to Kozhikode and then a bus/taxi.",
        ),
    ),
    city(
        "coimbatore",
        "Coimbatore",
        "Tamil Nadu",
        SouthAsia,
        11.02,
        76.96,
        airport("CJB", "Coimbatore International"),
        station("CBE", "Coimbatore Junction", "Southern"),
    ),
    city(
        "mettupalayam",
        "Mettupalayam",
        "Tamil Nadu",
        SouthAsia,
        11.30,
        76.94,
        no_airport("Coimbatore International (CJB)", 40),
        station("MTP", "Mettupalayam", "Southern"),
    ),
    city(
        "ooty",
        "Ooty (Udhagamandalam)",
        "Tamil Nadu",
        SouthAsia,
        11.41,
        76.70,
        no_airport("Coimbatore International (CJB)", 88),
        no_rail(
            "mettupalayam",
            "Ooty has no mainline station. The Nilgiri Mountain Railway (UNESCO heritage) runs \
             from Mettupalayam to Ooty (46 km, ~5 hrs). Take a train to Mettupalayam/Coimbatore \
             first.",
        ),
    ),
    city(
        "kodaikanal",
        "Kodaikanal",
        "Tamil Nadu",
        SouthAsia,
        10.24,
        77.49,
        no_airport("Madurai Airport (IXM)", 120),
        no_rail(
            "kodai road",
            "Kodaikanal has no railway station. The nearest station is Kodai Road (80 km away). \
             Take a train to Kodai Road and then a bus/taxi to Kodaikanal.",
        ),
    ),
    city(
        "tiruppur",
        "Tiruppur",
        "Tamil Nadu",
        SouthAsia,
        11.11,
        77.34,
        no_airport("Coimbatore International (CJB)", 50),
        station("TUP", "Tiruppur", "Southern"),
    ),
    city(
        "pollachi",
        "Pollachi",
        "Tamil Nadu",
        SouthAsia,
        10.66,
        77.01,
        no_airport("Coimbatore International (CJB)", 45),
        station("POY", "Pollachi Junction", "Southern"),
    ),
    city(
        "erode",
        "Erode",
        "Tamil Nadu",
        SouthAsia,
        11.34,
        77.72,
        no_airport("Coimbatore International (CJB)", 95),
        station("ED", "Erode Junction", "Southern"),
    ),
    city(
        "salem",
        "Salem",
        "Tamil Nadu",
        SouthAsia,
        11.66,
        78.15,
        airport("SXV", "Salem Airport"),
        station("SA", "Salem Junction", "Southern"),
    ),
    city(
        "trichy",
        "Tiruchirappalli",
        "Tamil Nadu",
        SouthAsia,
        10.79,
        78.70,
        airport("TRZ", "Tiruchirappalli International"),
        station("TPJ", "Tiruchirappalli Jn", "Southern"),
    ),
    city(
        "thanjavur",
        "Thanjavur",
        "Tamil Nadu",
        SouthAsia,
        10.79,
        79.14,
        no_airport("Tiruchirappalli International (TRZ)", 60),
        station("TJ", "Thanjavur Junction", "Southern"),
    ),
    city(
        "madurai",
        "Madurai",
        "Tamil Nadu",
        SouthAsia,
        9.93,
        78.12,
        airport("IXM", "Madurai Airport"),
        station("MDU", "Madurai Junction", "Southern"),
    ),
    city(
        "dindigul",
        "Dindigul",
        "Tamil Nadu",
        SouthAsia,
        10.36,
        77.98,
        no_airport("Madurai Airport (IXM)", 70),
        station("DG", "Dindigul Junction", "Southern"),
    ),
    city(
        "rameswaram",
        "Rameswaram",
        "Tamil Nadu",
        SouthAsia,
        9.29,
        79.31,
        no_airport("Madurai Airport (IXM)", 175),
        station("RMM", "Rameswaram", "Southern"),
    ),
    city(
        "kanyakumari",
        "Kanyakumari",
        "Tamil Nadu",
        SouthAsia,
        8.08,
        77.54,
        no_airport("Trivandrum International (TRV)", 90),
        station("CAPE", "Kanyakumari", "Southern"),
    ),
    city(
        "kanchipuram",
        "Kanchipuram",
        "Tamil Nadu",
        SouthAsia,
        12.83,
        79.70,
        no_airport("Chennai International (MAA)", 65),
        station("CJ", "Kanchipuram", "Southern"),
    ),
    city(
        "vellore",
        "Vellore",
        "Tamil Nadu",
        SouthAsia,
        12.92,
        79.13,
        no_airport("Chennai International (MAA)", 135),
        station("KPD", "Katpadi Junction", "Southern"),
    ),
    city(
        "pondicherry",
        "Puducherry",
        "Puducherry",
        SouthAsia,
        11.94,
        79.81,
        airport("PNY", "Puducherry Airport"),
        station("PDY", "Puducherry", "Southern"),
    ),
    // International
    city(
        "new york",
        "New York",
        "United States",
        NorthAmerica,
        40.71,
        -74.01,
        airport("JFK", "John F. Kennedy International"),
        RailAccess::Outside,
    ),
    city(
        "los angeles",
        "Los Angeles",
        "United States",
        NorthAmerica,
        34.05,
        -118.24,
        airport("LAX", "Los Angeles International"),
        RailAccess::Outside,
    ),
    city(
        "london",
        "London",
        "United Kingdom",
        Europe,
        51.51,
        -0.13,
        airport("LHR", "Heathrow"),
        RailAccess::Outside,
    ),
    city(
        "paris",
        "Paris",
        "France",
        Europe,
        48.86,
        2.35,
        airport("CDG", "Charles de Gaulle"),
        RailAccess::Outside,
    ),
    city(
        "rome",
        "Rome",
        "Italy",
        Europe,
        41.90,
        12.50,
        airport("FCO", "Leonardo da Vinci-Fiumicino"),
        RailAccess::Outside,
    ),
    city(
        "dubai",
        "Dubai",
        "United Arab Emirates",
        MiddleEast,
        25.20,
        55.27,
        airport("DXB", "Dubai International"),
        RailAccess::Outside,
    ),
    city(
        "singapore",
        "Singapore",
        "Singapore",
        SoutheastAsia,
        1.35,
        103.82,
        airport("SIN", "Changi"),
        RailAccess::Outside,
    ),
    city(
        "bangkok",
        "Bangkok",
        "Thailand",
        SoutheastAsia,
        13.76,
        100.50,
        airport("BKK", "Suvarnabhumi"),
        RailAccess::Outside,
    ),
    city(
        "tokyo",
        "Tokyo",
        "Japan",
        EastAsia,
        35.68,
        139.69,
        airport("HND", "Haneda"),
        RailAccess::Outside,
    ),
    city(
        "sydney",
        "Sydney",
        "Australia",
        Oceania,
        -33.87,
        151.21,
        airport("SYD", "Sydney Kingsford Smith"),
        RailAccess::Outside,
    ),
];

/// Alternate spellings and common abbreviations, mapped to a `CITIES` key
pub const ALIASES: &[(&str, &str)] = &[
    ("new delhi", "delhi"),
    ("ncr", "delhi"),
    ("bengaluru", "bangalore"),
    ("mysuru", "mysore"),
    ("vizag", "visakhapatnam"),
    ("cochin", "kochi"),
    ("ernakulam", "kochi"),
    ("trivandrum", "thiruvananthapuram"),
    ("tiruchirappalli", "trichy"),
    ("puducherry", "pondicherry"),
    ("alappuzha", "alleppey"),
    ("udhagamandalam", "ooty"),
    ("ooty", "ooty"),
    ("bombay", "mumbai"),
    ("madras", "chennai"),
    ("calcutta", "kolkata"),
    ("nyc", "new york"),
    ("new york city", "new york"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for c in CITIES {
            assert!(seen.insert(c.key), "duplicate key {}", c.key);
            assert_eq!(c.key, c.key.to_lowercase());
        }
        for (alias, key) in ALIASES {
            assert!(seen.contains(key), "alias {} points at unknown {}", alias, key);
        }
    }

    #[test]
    fn test_rail_notes_read_as_sentences() {
        let notes: Vec<&str> = CITIES
            .iter()
            .filter_map(|c| match c.rail {
                RailAccess::NoMainline { note, .. } => Some(note),
                _ => None,
            })
            .collect();
        assert!(!notes.is_empty());
        for note in notes {
            assert!(!note.contains("  "), "{}", note);
            assert!(note.ends_with('.'), "{}", note);
        }
        let ooty = CITIES.iter().find(|c| c.key == "ooty").unwrap();
        assert!(matches!(
            ooty.rail,
            RailAccess::NoMainline { note, .. } if note.contains("runs from Mettupalayam to Ooty")
        ));
    }
}
