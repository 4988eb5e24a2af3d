//! Attraction and dining knowledge per destination

use crate::domain::{Category, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attraction {
    pub name: &'static str,
    pub category: Category,
    pub time: TimeOfDay,
    pub tip: &'static str,
}

const fn a(name: &'static str, category: Category, time: TimeOfDay, tip: &'static str) -> Attraction {
    Attraction {
        name,
        category,
        time,
        tip,
    }
}

use Category::*;
use TimeOfDay::{Afternoon, Any, Evening, Morning};

const PARIS: &[Attraction] = &[
    a("Eiffel Tower", Landmark, Evening, "Book the summit tickets online; the tower sparkles on the hour after dark"),
    a("Louvre Museum", Art, Morning, "Enter through the Carrousel entrance to skip the pyramid queue"),
    a("Notre-Dame Cathedral", History, Morning, "The square in front is quietest before 9am"),
    a("Champs-Elysees & Arc de Triomphe", Shopping, Afternoon, "Climb the Arc for the best view down the avenue"),
    a("Montmartre & Sacre-Coeur", Culture, Afternoon, "Take the funicular up and walk down through Place du Tertre"),
    a("Seine River Cruise", Landmark, Evening, "Sunset departures give golden light on the bridges"),
    a("Musee d'Orsay", Art, Any, "Head to the fifth floor first for the Impressionists"),
    a("Palace of Versailles", History, Morning, "Closed Mondays; allow a full half-day for the gardens"),
    a("Le Marais Food Walk", Food, Afternoon, "Try falafel on Rue des Rosiers"),
    a("Luxembourg Gardens", Nature, Any, "Grab a green chair by the Medici Fountain"),
];

const LONDON: &[Attraction] = &[
    a("Tower of London", History, Morning, "Join a Yeoman Warder tour, included with entry"),
    a("British Museum", Art, Any, "Free entry; the Rosetta Stone room is busiest at midday"),
    a("Buckingham Palace", Landmark, Morning, "Changing of the Guard starts at 11:00 on scheduled days"),
    a("London Eye", Landmark, Evening, "Pre-book a timed slot to avoid the queue"),
    a("Westminster Abbey", History, Morning, "Closed to tourists on Sundays"),
    a("Camden Market", Shopping, Afternoon, "Street food stalls are at the Lock end"),
    a("Hyde Park", Nature, Afternoon, "Rent a pedal boat on the Serpentine"),
    a("Borough Market", Food, Morning, "Go hungry; most traders close by 5pm"),
    a("West End Show", Nightlife, Evening, "Day-of tickets are cheapest at the Leicester Square booth"),
    a("Thames River Walk", Culture, Evening, "Walk from Westminster to Tower Bridge along the South Bank"),
];

const TOKYO: &[Attraction] = &[
    a("Senso-ji Temple", Spiritual, Morning, "Arrive before 8am to see Nakamise street waking up"),
    a("Shibuya Crossing", Landmark, Evening, "Watch from the Shibuya Sky deck above the station"),
    a("Meiji Shrine", Spiritual, Morning, "Weekend mornings may feature traditional weddings"),
    a("Tsukiji Outer Market", Food, Morning, "Stalls open early; many close by early afternoon"),
    a("Akihabara", Shopping, Afternoon, "Multi-floor arcades sit next to the electronics towers"),
    a("Shinjuku Gyoen", Nature, Afternoon, "Small entry fee; no alcohol allowed inside"),
    a("Tokyo Skytree", Landmark, Evening, "Clear winter evenings can show Mount Fuji"),
    a("Harajuku & Takeshita Street", Culture, Afternoon, "Sundays bring out the street fashion"),
    a("Golden Gai", Nightlife, Evening, "Tiny bars; some charge a seating fee"),
    a("Ueno Park Museums", Art, Any, "The Tokyo National Museum closes on Mondays"),
];

const NEW_YORK: &[Attraction] = &[
    a("Statue of Liberty", Landmark, Morning, "Take the first ferry from Battery Park"),
    a("Central Park", Nature, Afternoon, "Rent a bike at Columbus Circle for the loop"),
    a("Times Square", Nightlife, Evening, "Best after dark when the billboards light up"),
    a("Metropolitan Museum of Art", Art, Any, "Friday and Saturday evenings are quieter"),
    a("Brooklyn Bridge", Landmark, Morning, "Walk from Brooklyn toward Manhattan for the skyline"),
    a("Broadway Show", Nightlife, Evening, "Try the digital lottery for discounted seats"),
    a("Empire State Building", Landmark, Evening, "Late-night tickets have shorter lines"),
    a("High Line", Nature, Afternoon, "Enter at Gansevoort and end at Hudson Yards"),
    a("Chelsea Market", Food, Afternoon, "Lobster rolls and tacos are local favorites"),
    a("9/11 Memorial & Museum", History, Morning, "Reserve timed museum entry in advance"),
];

const DELHI: &[Attraction] = &[
    a("Red Fort", History, Morning, "Closed Mondays; the light and sound show runs in the evening"),
    a("Qutub Minar", History, Morning, "Early morning light is best for photos"),
    a("Humayun's Tomb", History, Afternoon, "Combine with a walk through Nizamuddin"),
    a("Chandni Chowk Food Trail", Food, Morning, "Paranthe Wali Gali opens by 9am"),
    a("India Gate & Kartavya Path", Landmark, Evening, "Lit up after sunset with ice-cream carts nearby"),
    a("Lotus Temple", Spiritual, Afternoon, "Silence is requested inside the prayer hall"),
    a("Akshardham", Spiritual, Evening, "Phones are not allowed inside; use the lockers"),
    a("Dilli Haat", Shopping, Afternoon, "Crafts from every state under one roof"),
    a("National Museum", Art, Any, "Audio guides are worth the small fee"),
];

const MUMBAI: &[Attraction] = &[
    a("Gateway of India", Landmark, Morning, "Ferries to Elephanta leave from here"),
    a("Elephanta Caves", History, Morning, "Last ferry back is mid-afternoon; closed Mondays"),
    a("Marine Drive", Landmark, Evening, "The Queen's Necklace view is best after dusk"),
    a("Chhatrapati Shivaji Maharaj Vastu Sangrahalaya", Art, Any, "Closed Mondays"),
    a("Colaba Causeway", Shopping, Afternoon, "Bargain firmly at street stalls"),
    a("Mohammed Ali Road Food Walk", Food, Evening, "Busiest during Ramadan evenings"),
    a("Siddhivinayak Temple", Spiritual, Morning, "Tuesdays draw very long queues"),
    a("Sanjay Gandhi National Park", Nature, Morning, "Visit the Kanheri Caves inside the park"),
    a("Juhu Beach", Beach, Evening, "Try pav bhaji at the beach stalls"),
];

const JAIPUR: &[Attraction] = &[
    a("Amber Fort", History, Morning, "Arrive at opening to beat the heat and crowds"),
    a("City Palace", History, Afternoon, "The composite ticket covers several sites"),
    a("Hawa Mahal", Landmark, Morning, "View the facade from the cafes across the road"),
    a("Jantar Mantar", History, Afternoon, "Hire a guide to understand the instruments"),
    a("Johari Bazaar", Shopping, Afternoon, "Known for gemstones; buy only certified stones"),
    a("Nahargarh Fort Sunset", Landmark, Evening, "The sunset view over the city is spectacular"),
    a("Chokhi Dhani", Culture, Evening, "Village-style dinner with folk performances"),
    a("Albert Hall Museum", Art, Any, "Beautifully lit at night"),
];

const GOA: &[Attraction] = &[
    a("Baga & Calangute Beaches", Beach, Afternoon, "Water sports operators line the shore"),
    a("Basilica of Bom Jesus", History, Morning, "Dress modestly; shoulders covered"),
    a("Fort Aguada", History, Evening, "Sunset views over the Arabian Sea"),
    a("Fontainhas Latin Quarter", Culture, Morning, "Pastel Portuguese houses, best on foot"),
    a("Anjuna Flea Market", Shopping, Afternoon, "Runs on Wednesdays"),
    a("Dudhsagar Falls", Nature, Morning, "Jeep safaris run from Kulem"),
    a("Palolem Beach", Beach, Any, "Calmer waters in the south of Goa"),
    a("Tito's Lane", Nightlife, Evening, "Gets lively after 10pm"),
    a("Goan Seafood Trail", Food, Evening, "Try xacuti and fish curry rice"),
];

const CHENNAI: &[Attraction] = &[
    a("Kapaleeshwarar Temple", Spiritual, Morning, "Visit during the morning pooja"),
    a("Marina Beach", Beach, Evening, "Evenings bring food stalls and sea breeze"),
    a("Fort St. George", History, Morning, "The museum inside is closed on Fridays"),
    a("Government Museum", Art, Any, "Home to a fine bronze gallery"),
    a("Mahabalipuram Shore Temple", History, Afternoon, "A day trip 60 km south along the coast"),
    a("T. Nagar Shopping", Shopping, Afternoon, "Silk saris at Pondy Bazaar"),
    a("Mylapore Food Walk", Food, Morning, "Filter coffee and idli at the old tiffin rooms"),
    a("DakshinaChitra", Culture, Afternoon, "Living museum of South Indian architecture"),
];

const OOTY: &[Attraction] = &[
    a("Government Botanical Garden", Nature, Morning, "The flower show in May is the highlight"),
    a("Ooty Lake Boating", Adventure, Afternoon, "Pedal boats are cheaper than motor boats"),
    a("Doddabetta Peak", Nature, Morning, "Clear views early before the mist rolls in"),
    a("Tea Factory & Museum", Food, Afternoon, "Tastings are included with entry"),
    a("Rose Garden", Nature, Afternoon, "Thousands of varieties on terraced slopes"),
    a("Pykara Lake & Falls", Nature, Morning, "Carry a jacket; it gets chilly"),
    a("Ooty Market & Charring Cross", Shopping, Evening, "Buy homemade chocolates and eucalyptus oil"),
    a("Nilgiri Mountain Railway Toy Train", Culture, Morning, "Book early; the short Ooty-Coonoor run is scenic"),
];

const KOCHI: &[Attraction] = &[
    a("Fort Kochi Chinese Fishing Nets", Landmark, Evening, "Watch the nets being hauled at sunset"),
    a("Mattancherry Palace", History, Morning, "Closed Fridays; famous for its murals"),
    a("Jew Town & Paradesi Synagogue", History, Afternoon, "Antique shops line the lane"),
    a("Kathakali Performance", Culture, Evening, "Come early to watch the make-up ritual"),
    a("Backwater Day Cruise", Nature, Morning, "Cruises depart from Vembanad side"),
    a("Kerala Folklore Museum", Art, Any, "Three floors of carved wooden architecture"),
    a("Fort Kochi Seafood", Food, Evening, "Pick your fish from the stalls and have it cooked nearby"),
];

const BANGALORE: &[Attraction] = &[
    a("Lalbagh Botanical Garden", Nature, Morning, "Join the early walkers around the glass house"),
    a("Bangalore Palace", History, Afternoon, "Audio guide included with the ticket"),
    a("Cubbon Park", Nature, Morning, "Sunday mornings are car-free"),
    a("Tipu Sultan's Summer Palace", History, Afternoon, "A short walk from the City Market"),
    a("VV Puram Food Street", Food, Evening, "Try the dosa and holige stalls"),
    a("Church Street & Brigade Road", Nightlife, Evening, "Craft breweries cluster around here"),
    a("National Gallery of Modern Art", Art, Any, "Closed Mondays"),
    a("Commercial Street", Shopping, Afternoon, "Good for fabrics and jewelry"),
];

const AGRA: &[Attraction] = &[
    a("Taj Mahal at Sunrise", Landmark, Morning, "Closed Fridays; enter at the east gate at dawn"),
    a("Agra Fort", History, Afternoon, "Look for the Taj view from Musamman Burj"),
    a("Mehtab Bagh", Nature, Evening, "Sunset view of the Taj across the river"),
    a("Itmad-ud-Daulah (Baby Taj)", History, Afternoon, "Quieter and intricately inlaid"),
    a("Fatehpur Sikri", History, Morning, "A 40 km drive; hire a licensed guide"),
    a("Kinari Bazaar", Shopping, Afternoon, "Marble inlay souvenirs and petha sweets"),
];

/// Used for destinations with no specific entry
const GENERIC: &[Attraction] = &[
    a("City Center Walking Tour", Culture, Morning, "Ask at the tourist office about free guided walks"),
    a("Local Food Market Visit", Food, Morning, "Markets are liveliest early in the day"),
    a("Historical District Exploration", History, Afternoon, "Look for heritage plaques on old buildings"),
    a("Museum & Art Gallery Day", Art, Any, "Check for free-entry days"),
    a("Nature Park or Botanical Garden", Nature, Afternoon, "Carry water and sun protection"),
    a("Local Cuisine Cooking Class", Food, Afternoon, "Book a day ahead"),
    a("Sunset Viewpoint Experience", Landmark, Evening, "Arrive 30 minutes before sunset"),
    a("Cultural Heritage Site", History, Morning, "Dress modestly at religious sites"),
];

const DESTINATIONS: &[(&str, &[Attraction])] = &[
    ("paris", PARIS),
    ("london", LONDON),
    ("tokyo", TOKYO),
    ("new york", NEW_YORK),
    ("delhi", DELHI),
    ("mumbai", MUMBAI),
    ("jaipur", JAIPUR),
    ("goa", GOA),
    ("chennai", CHENNAI),
    ("ooty", OOTY),
    ("kochi", KOCHI),
    ("bangalore", BANGALORE),
    ("agra", AGRA),
];

/// Attractions for a canonical city key, or None if unknown
pub fn attractions_for(key: &str) -> Option<&'static [Attraction]> {
    DESTINATIONS.iter().find(|(k, _)| *k == key).map(|(_, list)| *list)
}

pub fn generic_attractions() -> &'static [Attraction] {
    GENERIC
}

const DINING: &[(&str, &[&str])] = &[
    ("paris", &["Left Bank Bistro", "Boulangerie & Cafe", "Michelin-starred Brasserie", "Crêperie in Montparnasse"]),
    ("london", &["Traditional Pub", "Borough Market Stalls", "Brick Lane Curry House", "Soho Small Plates"]),
    ("tokyo", &["Ramen Counter", "Sushi Bar", "Izakaya", "Depachika Food Hall"]),
    ("new york", &["Classic Deli", "Pizza Slice Joint", "Steakhouse", "Food Hall"]),
    ("delhi", &["Old Delhi Mughlai", "Street Chaat Stalls", "North Indian Thali", "Rooftop Cafe in Hauz Khas"]),
    ("mumbai", &["Irani Cafe", "Coastal Seafood", "Vada Pav Stall", "Bandra Bistro"]),
    ("jaipur", &["Rajasthani Thali", "Rooftop Restaurant", "Lassi House", "Heritage Haveli Dining"]),
    ("goa", &["Beach Shack", "Goan Seafood House", "Portuguese Tavern", "Cafe in Assagao"]),
    ("chennai", &["Chettinad Restaurant", "South Indian Tiffin House", "Seafood by the Marina", "Filter Coffee Cafe"]),
    ("ooty", &["Nilgiri Tea House", "Homemade Chocolate Cafe", "Tibetan Momo Stall", "Heritage Club Dining Room"]),
    ("kochi", &["Kerala Sadya", "Fort Kochi Seafood Grill", "Appam & Stew House", "Art Cafe"]),
    ("bangalore", &["Darshini Breakfast", "Craft Brewery", "Karnataka Military Hotel", "Cafe on Church Street"]),
    ("agra", &["Mughlai Restaurant", "Rooftop with Taj View", "Petha & Chaat Stalls"]),
];

/// Generic restaurant styles for destinations without a dining list
pub const RESTAURANT_TYPES: &[&str] = &[
    "Local Street Food",
    "Fine Dining",
    "Traditional Cuisine",
    "Waterfront Restaurant",
    "Rooftop Bar & Grill",
    "Cafe & Bakery",
    "Farm-to-Table Bistro",
    "Night Market Stalls",
];

pub fn dining_for(key: &str) -> Option<&'static [&'static str]> {
    DINING.iter().find(|(k, _)| *k == key).map(|(_, list)| *list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_destinations_have_attractions() {
        assert!(attractions_for("paris").is_some());
        assert!(attractions_for("ooty").is_some());
        assert!(attractions_for("atlantis").is_none());
        assert!(!generic_attractions().is_empty());
    }

    #[test]
    fn test_attraction_names_unique_per_destination() {
        for (key, list) in DESTINATIONS {
            let names: HashSet<_> = list.iter().map(|a| a.name).collect();
            assert_eq!(names.len(), list.len(), "duplicate attraction in {}", key);
        }
    }
}
