//! Pure filtering, sorting, and pagination over the loaded collections.
//!
//! Everything here is synchronous and allocation-light: filters return
//! borrowed views over the in-memory collections and are recomputed in full
//! on every change. No incremental state to invalidate.

use crate::models::{GalleryItem, Package};
use crate::utils::{cmp_ignore_case, contains_ignore_case};

/// Sentinel meaning "do not filter on this field"
pub const ALL: &str = "all";

/// Gallery items shown per page
pub const GALLERY_PAGE_SIZE: usize = 9;

/// Package sort orders, cycled with the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
    Rating,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLowHigh => "Price ↑",
            SortKey::PriceHighLow => "Price ↓",
            SortKey::Rating => "Rating",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortKey::Featured => SortKey::PriceLowHigh,
            SortKey::PriceLowHigh => SortKey::PriceHighLow,
            SortKey::PriceHighLow => SortKey::Rating,
            SortKey::Rating => SortKey::Featured,
        }
    }
}

/// Package filter state. Exact-match fields use the [`ALL`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFilter {
    pub search: String,
    pub destination: String,
    pub tour_type: String,
    pub availability: String,
}

impl Default for PackageFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            destination: ALL.to_string(),
            tour_type: ALL.to_string(),
            availability: ALL.to_string(),
        }
    }
}

impl PackageFilter {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn matches(&self, pkg: &Package) -> bool {
        if !self.search.is_empty()
            && !contains_ignore_case(&pkg.name, &self.search)
            && !contains_ignore_case(&pkg.destination, &self.search)
        {
            return false;
        }
        field_matches(&self.destination, &pkg.destination)
            && field_matches(&self.tour_type, &pkg.tour_type)
            && field_matches(&self.availability, &pkg.availability)
    }
}

/// Gallery filter state, independent of the package filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFilter {
    pub year: String,
    pub destination: String,
    pub tour_type: String,
}

impl Default for GalleryFilter {
    fn default() -> Self {
        Self {
            year: ALL.to_string(),
            destination: ALL.to_string(),
            tour_type: ALL.to_string(),
        }
    }
}

impl GalleryFilter {
    fn matches(&self, item: &GalleryItem) -> bool {
        field_matches(&self.year, &item.year)
            && field_matches(&self.destination, &item.destination)
            && field_matches(&self.tour_type, &item.tour_type)
    }
}

fn field_matches(filter: &str, value: &str) -> bool {
    filter == ALL || filter.eq_ignore_ascii_case(value)
}

/// Filter and sort packages, returning a borrowed view in display order.
pub fn filter_packages<'a>(
    packages: &'a [Package],
    filter: &PackageFilter,
    sort: SortKey,
) -> Vec<&'a Package> {
    let mut result: Vec<&Package> = packages.iter().filter(|p| filter.matches(p)).collect();

    match sort {
        SortKey::Featured => {
            result.sort_by(|a, b| {
                b.featured
                    .cmp(&a.featured)
                    .then(b.rating.total_cmp(&a.rating))
            });
        }
        SortKey::PriceLowHigh => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHighLow => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    result
}

/// Filter gallery items, preserving collection order.
pub fn filter_gallery<'a>(items: &'a [GalleryItem], filter: &GalleryFilter) -> Vec<&'a GalleryItem> {
    items.iter().filter(|i| filter.matches(i)).collect()
}

/// Unique non-empty values, sorted case-insensitively, with the [`ALL`]
/// sentinel first. Drives the cyclable filter option lists.
pub fn filter_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    unique.sort_by(|a, b| cmp_ignore_case(a, b));
    unique.dedup_by(|a, b| a.eq_ignore_ascii_case(b));

    let mut options = Vec::with_capacity(unique.len() + 1);
    options.push(ALL.to_string());
    options.extend(unique);
    options
}

/// Year options, newest first, with the [`ALL`] sentinel first.
pub fn year_options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options = filter_options(values);
    options[1..].reverse();
    options
}

/// Number of unique destinations, for the packages header stats.
pub fn destination_count(packages: &[Package]) -> usize {
    filter_options(packages.iter().map(|p| p.destination.as_str())).len() - 1
}

/// Total pages for a collection of `len` items, 1-based. Zero items means
/// zero pages.
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page)
}

/// The slice of items on a 1-based page. Out-of-range pages yield an empty
/// slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// One token in the windowed page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// Windowed page strip: first page, last page, current ± 1, with a single
/// ellipsis standing in for each gap.
pub fn page_strip(current: usize, total: usize) -> Vec<PageToken> {
    let mut strip = Vec::new();
    for page in 1..=total {
        let in_window = page == 1
            || page == total
            || (page >= current.saturating_sub(1) && page <= current + 1);
        if in_window {
            strip.push(PageToken::Page(page));
        } else if strip.last() != Some(&PageToken::Ellipsis) {
            strip.push(PageToken::Ellipsis);
        }
    }
    strip
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str, name: &str, destination: &str, price: f64, rating: f64) -> Package {
        Package {
            id: id.to_string(),
            name: name.to_string(),
            destination: destination.to_string(),
            duration: "4D3N".to_string(),
            price,
            image: String::new(),
            tour_type: "Beach".to_string(),
            rating,
            availability: "Available".to_string(),
            featured: rating >= 4.5,
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

    fn sample_packages() -> Vec<Package> {
        vec![
            package("pkg-1", "Boracay Beach Escape", "Boracay", 8500.0, 4.8),
            package("pkg-2", "El Nido Island Hopping", "Palawan", 12500.0, 4.9),
            package("pkg-3", "Cherry Blossom Tour", "Japan", 65000.0, 5.0),
            package("pkg-4", "Budget City Break", "Manila", 4500.0, 4.0),
        ]
    }

    fn gallery_item(id: &str, destination: &str, year: &str) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            title: format!("Trip {}", id),
            destination: destination.to_string(),
            tour_type: "Beach".to_string(),
            year: year.to_string(),
            images: vec!["https://a.example/1.jpg".to_string()],
            thumbnail: "https://a.example/1.jpg".to_string(),
            description: String::new(),
            client_name: format!("Client {}", id),
        }
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let packages = sample_packages();
        let result = filter_packages(&packages, &PackageFilter::default(), SortKey::Featured);
        assert_eq!(result.len(), packages.len());
    }

    #[test]
    fn test_search_matches_name_and_destination() {
        let packages = sample_packages();
        let filter = PackageFilter {
            search: "palawan".to_string(),
            ..Default::default()
        };
        let result = filter_packages(&packages, &filter, SortKey::Featured);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "pkg-2");

        let filter = PackageFilter {
            search: "ESCAPE".to_string(),
            ..Default::default()
        };
        let result = filter_packages(&packages, &filter, SortKey::Featured);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "pkg-1");
    }

    #[test]
    fn test_exact_filters_with_all_sentinel() {
        let packages = sample_packages();
        let filter = PackageFilter {
            destination: "Japan".to_string(),
            ..Default::default()
        };
        let result = filter_packages(&packages, &filter, SortKey::Featured);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "pkg-3");

        // "all" on every field is the identity
        let filter = PackageFilter {
            destination: ALL.to_string(),
            tour_type: ALL.to_string(),
            availability: ALL.to_string(),
            search: String::new(),
        };
        assert_eq!(
            filter_packages(&packages, &filter, SortKey::Featured).len(),
            packages.len()
        );
    }

    #[test]
    fn test_price_sorts_are_total_orders() {
        let packages = sample_packages();
        let asc = filter_packages(&packages, &PackageFilter::default(), SortKey::PriceLowHigh);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = filter_packages(&packages, &PackageFilter::default(), SortKey::PriceHighLow);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(asc.len(), desc.len());
    }

    #[test]
    fn test_featured_sort_puts_featured_first() {
        // An unfeatured package with a higher rating than a featured one must
        // still sort after it.
        let mut cheap = package("pkg-a", "Hidden Gem", "Siargao", 6000.0, 4.4);
        cheap.featured = false;
        let mut flagged = package("pkg-b", "Classic Tour", "Cebu", 9000.0, 4.0);
        flagged.featured = true;
        let packages = vec![cheap, flagged];

        let result = filter_packages(&packages, &PackageFilter::default(), SortKey::Featured);
        assert_eq!(result[0].id, "pkg-b");
        assert_eq!(result[1].id, "pkg-a");
    }

    #[test]
    fn test_featured_ties_break_by_rating_desc() {
        let packages = sample_packages();
        let result = filter_packages(&packages, &PackageFilter::default(), SortKey::Featured);
        // pkg-1..3 are all featured; pkg-4 is not
        assert_eq!(result[0].id, "pkg-3");
        assert_eq!(result[1].id, "pkg-2");
        assert_eq!(result[2].id, "pkg-1");
        assert_eq!(result[3].id, "pkg-4");
    }

    #[test]
    fn test_gallery_filter() {
        let items = vec![
            gallery_item("g1", "Boracay", "2024"),
            gallery_item("g2", "Palawan", "2024"),
            gallery_item("g3", "Boracay", "2023"),
        ];
        let filter = GalleryFilter {
            destination: "Boracay".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_gallery(&items, &filter).len(), 2);

        let filter = GalleryFilter {
            destination: "Boracay".to_string(),
            year: "2023".to_string(),
            ..Default::default()
        };
        let result = filter_gallery(&items, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "g3");
    }

    #[test]
    fn test_filter_options_unique_sorted_with_sentinel() {
        let values = ["Palawan", "Boracay", "palawan", "", "  ", "Japan"];
        let options = filter_options(values.into_iter());
        assert_eq!(options, vec!["all", "Boracay", "Japan", "Palawan"]);
    }

    #[test]
    fn test_year_options_newest_first() {
        let values = ["2022", "2024", "2023", "2024"];
        let options = year_options(values.into_iter());
        assert_eq!(options, vec!["all", "2024", "2023", "2022"]);
    }

    #[test]
    fn test_destination_count() {
        assert_eq!(destination_count(&sample_packages()), 4);
        assert_eq!(destination_count(&[]), 0);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 9), 0);
        assert_eq!(page_count(1, 9), 1);
        assert_eq!(page_count(9, 9), 1);
        assert_eq!(page_count(10, 9), 2);
        assert_eq!(page_count(27, 9), 3);
    }

    #[test]
    fn test_page_slices_concatenate_to_whole() {
        let items: Vec<usize> = (0..22).collect();
        let pages = page_count(items.len(), GALLERY_PAGE_SIZE);
        assert_eq!(pages, 3);

        let mut reassembled = Vec::new();
        for page in 1..=pages {
            reassembled.extend_from_slice(page_slice(&items, page, GALLERY_PAGE_SIZE));
        }
        assert_eq!(reassembled, items);

        assert!(page_slice(&items, 4, GALLERY_PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 0, GALLERY_PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_page_strip_small_total_has_no_ellipsis() {
        let strip = page_strip(2, 3);
        assert_eq!(
            strip,
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );
    }

    #[test]
    fn test_page_strip_windows_around_current() {
        let strip = page_strip(5, 10);
        assert_eq!(
            strip,
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(4),
                PageToken::Page(5),
                PageToken::Page(6),
                PageToken::Ellipsis,
                PageToken::Page(10),
            ]
        );

        let strip = page_strip(1, 10);
        assert_eq!(
            strip,
            vec![
                PageToken::Page(1),
                PageToken::Page(2),
                PageToken::Ellipsis,
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn test_sort_key_cycle() {
        let mut key = SortKey::default();
        for _ in 0..4 {
            key = key.next();
        }
        assert_eq!(key, SortKey::Featured);
    }
}
