//! Sidebar filter selections.
//!
//! Each facet is an owned set of labels toggled by membership; the price
//! range is a pair of bounds. There is no cross-facet logic and no
//! validation beyond set membership.

use std::collections::BTreeSet;

const DEFAULT_PRICE_RANGE: (u32, u32) = (50, 500);

/// The user's current filter selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub price_range: (u32, u32),
    pub stars: BTreeSet<String>,
    pub property_types: BTreeSet<String>,
    pub amenities: BTreeSet<String>,
    pub review_scores: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self {
            price_range: DEFAULT_PRICE_RANGE,
            stars: BTreeSet::new(),
            property_types: BTreeSet::new(),
            amenities: BTreeSet::new(),
            review_scores: BTreeSet::new(),
        }
    }

    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.price_range = (min, max);
    }

    pub fn toggle_star(&mut self, star: &str) {
        toggle(&mut self.stars, star);
    }

    pub fn toggle_property_type(&mut self, property_type: &str) {
        toggle(&mut self.property_types, property_type);
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        toggle(&mut self.amenities, amenity);
    }

    pub fn toggle_review_score(&mut self, score: &str) {
        toggle(&mut self.review_scores, score);
    }

    /// Reset every facet to its default.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = FilterSelection::new();

        selection.toggle_amenity("Free WiFi");
        assert!(selection.amenities.contains("Free WiFi"));

        selection.toggle_amenity("Free WiFi");
        assert!(selection.amenities.is_empty());
    }

    #[test]
    fn facets_are_independent() {
        let mut selection = FilterSelection::new();

        selection.toggle_star("5");
        selection.toggle_property_type("Resorts");
        selection.toggle_review_score("9+");

        assert!(selection.stars.contains("5"));
        assert!(selection.property_types.contains("Resorts"));
        assert!(selection.review_scores.contains("9+"));
        assert!(selection.amenities.is_empty());
    }

    #[test]
    fn clear_all_restores_defaults() {
        let mut selection = FilterSelection::new();
        selection.set_price_range(100, 300);
        selection.toggle_star("4");
        selection.toggle_amenity("Spa");

        selection.clear_all();

        assert_eq!(selection, FilterSelection::new());
        assert_eq!(selection.price_range, (50, 500));
    }
}
