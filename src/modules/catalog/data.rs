//! Fixed in-memory hotel catalog.
//!
//! Lookups and search are synchronous, total functions over this list; the
//! only failure mode is "not found".

use once_cell::sync::Lazy;

use super::models::{Hotel, RoomType};

static CATALOG: Lazy<Vec<Hotel>> = Lazy::new(|| {
    vec![
        Hotel {
            id: "1".to_string(),
            name: "Grand Plaza Hotel".to_string(),
            location: "New York City, NY".to_string(),
            rating: 9.2,
            review_count: 2847,
            price_per_night: 299,
            original_price: Some(399),
            deal_text: Some("30% Off".to_string()),
            description: "Experience luxury in the heart of Manhattan at Grand Plaza Hotel. \
                Our elegant rooms offer stunning city views, world-class amenities, and \
                exceptional service. Located just steps from Central Park and Fifth Avenue \
                shopping."
                .to_string(),
            amenities: vec![
                "Free WiFi".to_string(),
                "Swimming Pool".to_string(),
                "Fitness Center".to_string(),
                "Spa".to_string(),
                "Restaurant".to_string(),
                "Room Service".to_string(),
                "Business Center".to_string(),
                "Concierge".to_string(),
            ],
            room_types: vec![RoomType {
                id: "1-1".to_string(),
                name: "Deluxe City View".to_string(),
                description: "Spacious room with panoramic city views".to_string(),
                price_per_night: 299,
                max_guests: 2,
                amenities: vec![
                    "City View".to_string(),
                    "King Bed".to_string(),
                    "Mini Bar".to_string(),
                    "Work Desk".to_string(),
                ],
                image_url:
                    "https://placehold.co/600x400?text=Deluxe+City+View+Room+with+Modern+Amenities"
                        .to_string(),
            }],
            images: vec![
                "https://placehold.co/800x600?text=Grand+Plaza+Hotel+Luxury+Lobby+Interior"
                    .to_string(),
                "https://placehold.co/800x600?text=Elegant+Hotel+Room+with+City+Views".to_string(),
                "https://placehold.co/800x600?text=Rooftop+Pool+with+Manhattan+Skyline".to_string(),
            ],
        },
        Hotel {
            id: "2".to_string(),
            name: "Seaside Resort & Spa".to_string(),
            location: "Miami Beach, FL".to_string(),
            rating: 8.9,
            review_count: 1923,
            price_per_night: 189,
            original_price: None,
            deal_text: Some("Early Bird".to_string()),
            description: "Relax and unwind at our beachfront resort featuring pristine white \
                sand beaches, crystal-clear waters, and world-class spa facilities. Perfect for \
                romantic getaways and family vacations."
                .to_string(),
            amenities: vec![
                "Beach Access".to_string(),
                "Spa".to_string(),
                "Multiple Restaurants".to_string(),
                "Pool Bar".to_string(),
                "Water Sports".to_string(),
                "Kids Club".to_string(),
                "Tennis Court".to_string(),
            ],
            room_types: vec![RoomType {
                id: "2-1".to_string(),
                name: "Ocean View Suite".to_string(),
                description: "Luxurious suite with direct ocean views".to_string(),
                price_per_night: 189,
                max_guests: 4,
                amenities: vec![
                    "Ocean View".to_string(),
                    "Balcony".to_string(),
                    "Separate Living Area".to_string(),
                    "Mini Kitchen".to_string(),
                ],
                image_url:
                    "https://placehold.co/600x400?text=Ocean+View+Suite+with+Private+Balcony"
                        .to_string(),
            }],
            images: vec![
                "https://placehold.co/800x600?text=Beachfront+Resort+with+Palm+Trees+and+Ocean"
                    .to_string(),
                "https://placehold.co/800x600?text=Luxury+Spa+Treatment+Room+with+Ocean+Views"
                    .to_string(),
                "https://placehold.co/800x600?text=Resort+Pool+Area+with+Tropical+Landscaping"
                    .to_string(),
            ],
        },
        Hotel {
            id: "3".to_string(),
            name: "Mountain Lodge Retreat".to_string(),
            location: "Aspen, CO".to_string(),
            rating: 9.0,
            review_count: 1456,
            price_per_night: 349,
            original_price: None,
            deal_text: None,
            description: "Escape to our cozy mountain lodge nestled in the Rocky Mountains. \
                Enjoy skiing in winter, hiking in summer, and year-round breathtaking mountain \
                views."
                .to_string(),
            amenities: vec![
                "Ski-in/Ski-out".to_string(),
                "Fireplace".to_string(),
                "Mountain Views".to_string(),
                "Hot Tub".to_string(),
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Fitness Center".to_string(),
            ],
            room_types: vec![RoomType {
                id: "3-1".to_string(),
                name: "Mountain View Cabin".to_string(),
                description: "Rustic cabin with panoramic mountain views".to_string(),
                price_per_night: 349,
                max_guests: 6,
                amenities: vec![
                    "Mountain View".to_string(),
                    "Fireplace".to_string(),
                    "Full Kitchen".to_string(),
                    "Private Deck".to_string(),
                ],
                image_url: "https://placehold.co/600x400?text=Cozy+Mountain+Cabin+with+Fireplace"
                    .to_string(),
            }],
            images: vec![
                "https://placehold.co/800x600?text=Mountain+Lodge+with+Snow+Capped+Peaks"
                    .to_string(),
                "https://placehold.co/800x600?text=Rustic+Lodge+Interior+with+Stone+Fireplace"
                    .to_string(),
                "https://placehold.co/800x600?text=Ski+Slopes+and+Mountain+Views".to_string(),
            ],
        },
        Hotel {
            id: "4".to_string(),
            name: "Downtown Business Hotel".to_string(),
            location: "Chicago, IL".to_string(),
            rating: 8.5,
            review_count: 3241,
            price_per_night: 159,
            original_price: Some(199),
            deal_text: Some("Business Deal".to_string()),
            description: "Modern business hotel in downtown Chicago, perfect for corporate \
                travelers. Features state-of-the-art meeting facilities and easy access to the \
                financial district."
                .to_string(),
            amenities: vec![
                "Business Center".to_string(),
                "Meeting Rooms".to_string(),
                "Free WiFi".to_string(),
                "Fitness Center".to_string(),
                "Restaurant".to_string(),
                "Airport Shuttle".to_string(),
            ],
            room_types: vec![RoomType {
                id: "4-1".to_string(),
                name: "Executive Room".to_string(),
                description: "Spacious room designed for business travelers".to_string(),
                price_per_night: 159,
                max_guests: 2,
                amenities: vec![
                    "Work Desk".to_string(),
                    "Ergonomic Chair".to_string(),
                    "High-Speed Internet".to_string(),
                    "Coffee Maker".to_string(),
                ],
                image_url: "https://placehold.co/600x400?text=Modern+Executive+Business+Room"
                    .to_string(),
            }],
            images: vec![
                "https://placehold.co/800x600?text=Modern+Downtown+Business+Hotel+Exterior"
                    .to_string(),
                "https://placehold.co/800x600?text=Professional+Meeting+Room+with+City+Views"
                    .to_string(),
                "https://placehold.co/800x600?text=Executive+Lounge+with+Business+Amenities"
                    .to_string(),
            ],
        },
        Hotel {
            id: "5".to_string(),
            name: "Historic Boutique Inn".to_string(),
            location: "Charleston, SC".to_string(),
            rating: 8.7,
            review_count: 987,
            price_per_night: 229,
            original_price: None,
            deal_text: None,
            description: "Step back in time at our charming historic inn located in \
                Charleston's French Quarter. Featuring antique furnishings, southern \
                hospitality, and award-winning cuisine."
                .to_string(),
            amenities: vec![
                "Historic Building".to_string(),
                "Fine Dining".to_string(),
                "Courtyard Garden".to_string(),
                "Concierge".to_string(),
                "Valet Parking".to_string(),
                "Pet Friendly".to_string(),
            ],
            room_types: vec![RoomType {
                id: "5-1".to_string(),
                name: "Heritage Suite".to_string(),
                description: "Elegant suite with period furnishings".to_string(),
                price_per_night: 229,
                max_guests: 2,
                amenities: vec![
                    "Antique Furnishings".to_string(),
                    "High Ceilings".to_string(),
                    "Garden View".to_string(),
                    "Marble Bathroom".to_string(),
                ],
                image_url:
                    "https://placehold.co/600x400?text=Historic+Heritage+Suite+with+Antique+Decor"
                        .to_string(),
            }],
            images: vec![
                "https://placehold.co/800x600?text=Historic+Charleston+Inn+with+Southern+Architecture"
                    .to_string(),
                "https://placehold.co/800x600?text=Elegant+Courtyard+Garden+with+Fountain"
                    .to_string(),
                "https://placehold.co/800x600?text=Fine+Dining+Restaurant+with+Historic+Charm"
                    .to_string(),
            ],
        },
        Hotel {
            id: "6".to_string(),
            name: "Desert Oasis Resort".to_string(),
            location: "Scottsdale, AZ".to_string(),
            rating: 9.1,
            review_count: 2156,
            price_per_night: 279,
            original_price: None,
            deal_text: None,
            description: "Luxury desert resort featuring championship golf courses, \
                world-class spa, and stunning Sonoran Desert views. Perfect for golf \
                enthusiasts and spa lovers."
                .to_string(),
            amenities: vec![
                "Golf Course".to_string(),
                "Spa".to_string(),
                "Multiple Pools".to_string(),
                "Tennis Courts".to_string(),
                "Fine Dining".to_string(),
                "Desert Tours".to_string(),
                "Fitness Center".to_string(),
            ],
            room_types: vec![RoomType {
                id: "6-1".to_string(),
                name: "Desert View Villa".to_string(),
                description: "Private villa with desert and mountain views".to_string(),
                price_per_night: 279,
                max_guests: 4,
                amenities: vec![
                    "Desert View".to_string(),
                    "Private Pool".to_string(),
                    "Outdoor Patio".to_string(),
                    "Full Kitchen".to_string(),
                ],
                image_url:
                    "https://placehold.co/600x400?text=Luxury+Desert+Villa+with+Mountain+Views"
                        .to_string(),
            }],
            images: vec![
                "https://placehold.co/800x600?text=Desert+Resort+with+Cactus+and+Mountain+Backdrop"
                    .to_string(),
                "https://placehold.co/800x600?text=Championship+Golf+Course+in+Desert+Setting"
                    .to_string(),
                "https://placehold.co/800x600?text=Luxury+Spa+with+Desert+Stone+Architecture"
                    .to_string(),
            ],
        },
    ]
});

/// Look up a hotel by its id.
pub fn hotel_by_id(id: &str) -> Option<&'static Hotel> {
    CATALOG.iter().find(|hotel| hotel.id == id)
}

/// Search the catalog with a case-insensitive substring match against name
/// and location. An empty or absent query returns the full catalog.
pub fn search(query: Option<&str>) -> Vec<&'static Hotel> {
    let query = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return CATALOG.iter().collect(),
    };

    CATALOG
        .iter()
        .filter(|hotel| {
            hotel.name.to_lowercase().contains(&query)
                || hotel.location.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id_finds_known_hotel() {
        let hotel = hotel_by_id("1").unwrap();
        assert_eq!(hotel.name, "Grand Plaza Hotel");
        assert_eq!(hotel.price_per_night, 299);
    }

    #[test]
    fn lookup_by_id_yields_none_for_unknown_id() {
        assert!(hotel_by_id("999").is_none());
    }

    #[test]
    fn empty_query_returns_full_catalog() {
        assert_eq!(search(None).len(), 6);
        assert_eq!(search(Some("")).len(), 6);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let hits = search(Some("grand plaza"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn search_matches_location_substring() {
        let hits = search(Some("beach"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, "Miami Beach, FL");
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        assert!(search(Some("antarctica")).is_empty());
    }
}
