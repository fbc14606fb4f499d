use serde::{Deserialize, Serialize};

/// A bookable property in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique identifier for the hotel
    pub id: String,
    /// Display name of the hotel
    pub name: String,
    /// City/region line shown under the name
    pub location: String,
    /// Review score on a 10-point scale
    pub rating: f64,
    /// Number of reviews behind the score
    pub review_count: u32,
    /// Nightly rate in whole currency units
    pub price_per_night: u32,
    /// Pre-discount nightly rate, when a deal applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    /// Short deal badge text, e.g. "30% Off"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_text: Option<String>,
    /// Marketing description for the detail view
    pub description: String,
    /// Amenity labels
    pub amenities: Vec<String>,
    /// Room types offered by the hotel
    pub room_types: Vec<RoomType>,
    /// Gallery image URLs
    pub images: Vec<String>,
}

/// A room category within a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    /// Unique identifier for the room type
    pub id: String,
    /// Display name of the room type
    pub name: String,
    /// Short description
    pub description: String,
    /// Nightly rate in whole currency units
    pub price_per_night: u32,
    /// Maximum occupancy
    pub max_guests: u32,
    /// Amenity labels specific to this room
    pub amenities: Vec<String>,
    /// Representative image URL
    pub image_url: String,
}
