//! Bundled sample datasets, shown when the gateway is unreachable and the
//! cache is empty. Keeps the first run useful offline.

use crate::models::{GalleryItem, Package, Testimonial};

fn package(
    id: &str,
    name: &str,
    destination: &str,
    duration: &str,
    price: f64,
    image: &str,
    tour_type: &str,
    rating: f64,
    availability: &str,
) -> Package {
    Package {
        id: id.to_string(),
        name: name.to_string(),
        destination: destination.to_string(),
        duration: duration.to_string(),
        price,
        image: image.to_string(),
        tour_type: tour_type.to_string(),
        rating,
        availability: availability.to_string(),
        featured: rating >= crate::models::package::FEATURED_RATING_THRESHOLD,
        inclusions: String::new(),
        exclusions: String::new(),
        highlights: String::new(),
        travel_dates: String::new(),
        hotel_details: String::new(),
        flight_details: String::new(),
        visa_requirements: String::new(),
        itinerary: String::new(),
    }
}

pub fn fallback_packages() -> Vec<Package> {
    vec![
        package(
            "pkg1",
            "Boracay Beach Paradise",
            "Boracay",
            "3 Days / 2 Nights",
            8500.0,
            "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800",
            "Beach",
            4.8,
            "Available",
        ),
        package(
            "pkg2",
            "Palawan El Nido Adventure",
            "Palawan",
            "4 Days / 3 Nights",
            12500.0,
            "https://images.unsplash.com/photo-1583260088009-891b69d48aff?w=800",
            "Adventure",
            4.9,
            "Available",
        ),
        package(
            "pkg3",
            "Japan Cherry Blossom Tour",
            "Tokyo, Japan",
            "7 Days / 6 Nights",
            65000.0,
            "https://images.unsplash.com/photo-1522383225653-ed111181a951?w=800",
            "Cultural",
            5.0,
            "Limited",
        ),
    ]
}

fn testimonial(
    id: &str,
    name: &str,
    location: &str,
    text: &str,
    date: &str,
    package: &str,
) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        rating: 5,
        text: text.to_string(),
        date: date.to_string(),
        package: package.to_string(),
        avatar: String::new(),
    }
}

pub fn fallback_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "test-1",
            "Maria Santos",
            "Manila, Philippines",
            "Our Boracay trip was absolutely amazing! Round-The-World Travel & Tours took care of \
             everything from flights to hotel. The team was very professional and responsive. \
             Highly recommended!",
            "October 2024",
            "Boracay Beach Paradise",
        ),
        testimonial(
            "test-2",
            "John Reyes",
            "Quezon City, Philippines",
            "Best travel agency ever! They customized our Palawan package to fit our budget and \
             preferences. The experience was unforgettable. Will definitely book with them again!",
            "September 2024",
            "Palawan El Nido Adventure",
        ),
        testimonial(
            "test-3",
            "Sarah Lee",
            "Makati, Philippines",
            "Our Japan trip was a dream come true! Everything was perfectly organized. The guides \
             were knowledgeable and friendly. Thank you Round-The-World Travel & Tours!",
            "August 2024",
            "Japan Cherry Blossom Tour",
        ),
    ]
}

fn gallery_item(
    id: &str,
    title: &str,
    destination: &str,
    tour_type: &str,
    year: &str,
    images: &[&str],
    description: &str,
    client_name: &str,
) -> GalleryItem {
    let images: Vec<String> = images.iter().map(|s| s.to_string()).collect();
    GalleryItem {
        id: id.to_string(),
        title: title.to_string(),
        destination: destination.to_string(),
        tour_type: tour_type.to_string(),
        year: year.to_string(),
        thumbnail: images[0].clone(),
        images,
        description: description.to_string(),
        client_name: client_name.to_string(),
    }
}

pub fn fallback_gallery() -> Vec<GalleryItem> {
    vec![
        gallery_item(
            "gal1",
            "The Santos Family - Boracay Paradise",
            "Boracay",
            "Beach",
            "2024",
            &[
                "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800",
                "https://images.unsplash.com/photo-1573843981267-be1999ff37cd?w=800",
                "https://images.unsplash.com/photo-1542259009477-d625272157b7?w=800",
            ],
            "White Beach sunset and crystal clear waters",
            "Santos Family",
        ),
        gallery_item(
            "gal2",
            "The Reyes Group - Palawan Island Hopping",
            "Palawan",
            "Adventure",
            "2024",
            &[
                "https://images.unsplash.com/photo-1583260088009-891b69d48aff?w=800",
                "https://images.unsplash.com/photo-1584302179602-e4c3d3fd629d?w=800",
            ],
            "El Nido lagoons and hidden beaches",
            "Reyes Group",
        ),
        gallery_item(
            "gal3",
            "The Lee Family - Tokyo Adventure",
            "Japan",
            "Cultural",
            "2024",
            &[
                "https://images.unsplash.com/photo-1522383225653-ed111181a951?w=800",
                "https://images.unsplash.com/photo-1503899036084-c55cdd92da26?w=800",
                "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=800",
            ],
            "Cherry blossoms and ancient temples",
            "Lee Family",
        ),
        gallery_item(
            "gal4",
            "The Cruz Family - Bohol Tour",
            "Bohol",
            "Adventure",
            "2023",
            &[
                "https://images.unsplash.com/photo-1580296048461-a561cf1e4e0d?w=800",
                "https://images.unsplash.com/photo-1566054757965-c2b2c1e2d88a?w=800",
            ],
            "The famous Chocolate Hills and amazing wildlife",
            "Cruz Family",
        ),
        gallery_item(
            "gal5",
            "The Garcia Team - Singapore Getaway",
            "Singapore",
            "Cultural",
            "2024",
            &[
                "https://images.unsplash.com/photo-1525625293386-3f8f99389edd?w=800",
                "https://images.unsplash.com/photo-1506012787146-f92b2d7d6d96?w=800",
                "https://images.unsplash.com/photo-1508964942454-1a56651d54ac?w=800",
            ],
            "Marina Bay Sands and Gardens by the Bay",
            "Garcia Team",
        ),
        gallery_item(
            "gal6",
            "The Mendoza Friends - Coron Island",
            "Palawan",
            "Beach",
            "2023",
            &["https://images.unsplash.com/photo-1621277224630-81a35eb42a86?w=800"],
            "Island hopping paradise in Coron",
            "Mendoza Friends",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_sizes() {
        assert_eq!(fallback_packages().len(), 3);
        assert_eq!(fallback_testimonials().len(), 3);
        assert_eq!(fallback_gallery().len(), 6);
    }

    #[test]
    fn test_fallback_data_satisfies_invariants() {
        for pkg in fallback_packages() {
            assert!(!pkg.id.is_empty());
            assert!(!pkg.name.is_empty());
        }
        for item in fallback_gallery() {
            assert!(!item.images.is_empty());
            assert_eq!(item.thumbnail, item.images[0]);
        }
        for t in fallback_testimonials() {
            assert!(!t.name.is_empty());
            assert_eq!(t.rating, 5);
        }
    }

    #[test]
    fn test_fallback_packages_are_all_featured() {
        assert!(fallback_packages().iter().all(|p| p.featured));
    }
}
