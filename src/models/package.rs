use serde::{Deserialize, Serialize};

use crate::utils::{drive_thumbnail_url, format_price, split_list};

/// Rating at or above which a package is treated as featured even when the
/// sheet does not flag it explicitly.
pub const FEATURED_RATING_THRESHOLD: f64 = 4.5;

/// A bookable tour package, normalized from a spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub duration: String,
    pub price: f64,
    pub image: String,
    pub tour_type: String,
    pub rating: f64,
    pub availability: String,
    pub featured: bool,
    pub inclusions: String,
    pub exclusions: String,
    pub highlights: String,
    pub travel_dates: String,
    pub hotel_details: String,
    pub flight_details: String,
    pub visa_requirements: String,
    pub itinerary: String,
}

impl Package {
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    pub fn is_available(&self) -> bool {
        !self.availability.eq_ignore_ascii_case("sold out")
    }

    pub fn inclusions_list(&self) -> Vec<String> {
        split_list(&self.inclusions)
    }

    pub fn exclusions_list(&self) -> Vec<String> {
        split_list(&self.exclusions)
    }

    pub fn highlights_list(&self) -> Vec<String> {
        split_list(&self.highlights)
    }

    pub fn travel_dates_list(&self) -> Vec<String> {
        split_list(&self.travel_dates)
    }

    pub fn itinerary_days(&self) -> Vec<String> {
        split_list(&self.itinerary)
    }
}

/// A raw package row as the gateway returns it. Older sheet exports used
/// lowercase or camelCase headers interchangeably, so every multi-word field
/// carries aliases. Conversion to [`Package`] happens exactly once, here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "imageurl", alias = "imageUrl")]
    pub image: String,
    #[serde(default, alias = "tourtype", alias = "tourType", alias = "TourType")]
    pub tour_type: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub inclusions: String,
    #[serde(default)]
    pub exclusions: String,
    #[serde(default)]
    pub highlights: String,
    #[serde(default, alias = "traveldates", alias = "travelDates")]
    pub travel_dates: String,
    #[serde(default, alias = "hoteldetails", alias = "hotelDetails")]
    pub hotel_details: String,
    #[serde(default, alias = "flightdetails", alias = "flightDetails")]
    pub flight_details: String,
    #[serde(default, alias = "visarequirements", alias = "visaRequirements")]
    pub visa_requirements: String,
    #[serde(default)]
    pub itinerary: String,
}

impl PackageRow {
    /// Normalize into a canonical [`Package`], or None for rows that fail the
    /// minimum invariants (non-empty id and name).
    pub fn into_package(self) -> Option<Package> {
        let id = self.id.trim().to_string();
        let name = self.name.trim().to_string();
        if id.is_empty() || name.is_empty() {
            return None;
        }

        let featured = self.featured || self.rating >= FEATURED_RATING_THRESHOLD;

        Some(Package {
            id,
            name,
            destination: self.destination.trim().to_string(),
            duration: self.duration.trim().to_string(),
            price: self.price,
            image: drive_thumbnail_url(&self.image),
            tour_type: self.tour_type.trim().to_string(),
            rating: self.rating,
            availability: self
                .availability
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "Available".to_string()),
            featured,
            inclusions: self.inclusions,
            exclusions: self.exclusions,
            highlights: self.highlights,
            travel_dates: self.travel_dates,
            hotel_details: self.hotel_details,
            flight_details: self.flight_details,
            visa_requirements: self.visa_requirements,
            itinerary: self.itinerary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str) -> PackageRow {
        PackageRow {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_without_id_or_name_are_dropped() {
        assert!(row("", "Boracay Escape").into_package().is_none());
        assert!(row("pkg-1", "").into_package().is_none());
        assert!(row("  ", "  ").into_package().is_none());
        assert!(row("pkg-1", "Boracay Escape").into_package().is_some());
    }

    #[test]
    fn test_featured_derived_from_rating() {
        let mut r = row("pkg-1", "Boracay Escape");
        r.rating = 4.8;
        assert!(r.into_package().unwrap().featured);

        let mut r = row("pkg-2", "Budget Trip");
        r.rating = 4.2;
        assert!(!r.clone().into_package().unwrap().featured);

        // Explicit flag wins regardless of rating
        r.featured = true;
        assert!(r.into_package().unwrap().featured);
    }

    #[test]
    fn test_availability_defaults_to_available() {
        let pkg = row("pkg-1", "Boracay Escape").into_package().unwrap();
        assert_eq!(pkg.availability, "Available");
        assert!(pkg.is_available());

        let mut r = row("pkg-2", "Japan Tour");
        r.availability = Some("Sold Out".to_string());
        assert!(!r.into_package().unwrap().is_available());
    }

    #[test]
    fn test_deserialize_case_variant_fields() {
        let json = r#"{
            "id": "pkg-1",
            "name": "El Nido Island Hopping",
            "destination": "Palawan",
            "price": 12500,
            "tourtype": "Beach",
            "traveldates": "Mar 10-14 | Apr 2-6",
            "rating": 4.9
        }"#;
        let pkg: Package = serde_json::from_str::<PackageRow>(json)
            .unwrap()
            .into_package()
            .unwrap();
        assert_eq!(pkg.tour_type, "Beach");
        assert_eq!(pkg.travel_dates_list(), vec!["Mar 10-14", "Apr 2-6"]);
        assert!(pkg.featured);

        let json = r#"{"id": "pkg-2", "name": "Tokyo Lights", "tourType": "City"}"#;
        let pkg = serde_json::from_str::<PackageRow>(json)
            .unwrap()
            .into_package()
            .unwrap();
        assert_eq!(pkg.tour_type, "City");
    }

    #[test]
    fn test_drive_link_rewritten_at_load() {
        let mut r = row("pkg-1", "Boracay Escape");
        r.image = "https://drive.google.com/file/d/1AbC/view".to_string();
        let pkg = r.into_package().unwrap();
        assert_eq!(
            pkg.image,
            "https://drive.google.com/thumbnail?id=1AbC&sz=w800"
        );
    }

    #[test]
    fn test_price_display() {
        let mut r = row("pkg-1", "Boracay Escape");
        r.price = 8500.0;
        assert_eq!(r.into_package().unwrap().price_display(), "₱8,500");
    }
}
