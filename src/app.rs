//! Application state management for tourcache.
//!
//! This module contains the core `App` struct that manages all application
//! state: the loaded collections, filter and selection state, the session
//! cart, form overlays, and background refresh coordination.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::api::GatewayClient;
use crate::cache::{CacheAges, CacheStore, GALLERY_KEY, PACKAGES_KEY, TESTIMONIALS_KEY};
use crate::catalog::{self, GalleryFilter, PackageFilter, SortKey, GALLERY_PAGE_SIZE};
use crate::config::Config;
use crate::models::{BookingForm, Cart, ContactForm, GalleryItem, Package, Testimonial};
use crate::samples;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// A full refresh produces at most 7 messages, 16 leaves headroom.
const CHANNEL_BUFFER_SIZE: usize = 16;

/// Number of rows to scroll on page up/down
pub const PAGE_SCROLL_SIZE: usize = 10;

/// Editable fields in the booking form, excluding the submit button
pub const BOOKING_FIELD_COUNT: usize = 10;

/// Editable fields in the contact form, excluding the submit button
pub const CONTACT_FIELD_COUNT: usize = 5;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Packages,
    Gallery,
    Testimonials,
    Cart,
}

impl Tab {
    /// Get the display title for this tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Packages => "Packages",
            Tab::Gallery => "Gallery",
            Tab::Testimonials => "Testimonials",
            Tab::Cart => "Cart",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Packages => Tab::Gallery,
            Tab::Gallery => Tab::Testimonials,
            Tab::Testimonials => Tab::Cart,
            Tab::Cart => Tab::Packages,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Tab::Packages => Tab::Cart,
            Tab::Gallery => Tab::Packages,
            Tab::Testimonials => Tab::Gallery,
            Tab::Cart => Tab::Testimonials,
        }
    }
}

/// Packages tab layout: card browser with a detail panel, or a dense table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    ShowingHelp,
    BookingForm,
    ContactForm,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Outcome of a form submission, after the delivery policy has been applied.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

/// Result types from background tasks, sent through an MPSC channel back to
/// the main application. The `Unavailable` variants cover every read failure
/// mode: network error, timeout, bad envelope, gateway rejection, or an empty
/// collection. The app treats them all the same way.
enum RefreshResult {
    Packages(Vec<Package>),
    PackagesUnavailable,
    Gallery(Vec<GalleryItem>),
    GalleryUnavailable,
    Testimonials(Vec<Testimonial>),
    TestimonialsUnavailable,
    ContactOutcome(SubmitOutcome),
    BookingOutcome(SubmitOutcome),
    /// Signal that all refresh tasks have completed
    RefreshComplete,
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub api: GatewayClient,
    pub cache: CacheStore,

    // UI state
    pub state: AppState,
    pub current_tab: Tab,
    pub view_mode: ViewMode,

    // Packages tab state
    pub package_filter: PackageFilter,
    pub sort: SortKey,
    pub package_selection: usize,

    // Gallery tab state
    pub gallery_filter: GalleryFilter,
    pub gallery_page: usize,
    pub gallery_selection: usize,

    // Testimonials tab state
    pub testimonial_index: usize,

    // Cart tab state
    pub cart: Cart,
    pub cart_selection: usize,

    // Form overlay state
    pub booking_form: BookingForm,
    pub booking_focus: usize,
    pub contact_form: ContactForm,
    pub contact_focus: usize,
    pub form_error: Option<String>,
    pub submitting: bool,

    // Loaded collections
    pub packages: Vec<Package>,
    pub gallery: Vec<GalleryItem>,
    pub testimonials: Vec<Testimonial>,

    // Background task channel
    refresh_rx: mpsc::Receiver<RefreshResult>,
    refresh_tx: mpsc::Sender<RefreshResult>,

    // Status message
    pub status_message: Option<String>,

    // Cache ages for status bar
    pub cache_ages: CacheAges,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let cache_dir =
            Config::cache_dir().unwrap_or_else(|_| std::path::PathBuf::from("./cache"));
        let cache = CacheStore::new(cache_dir)?;

        let api = GatewayClient::new(config.gateway_url())?;

        Ok(Self::with_parts(config, api, cache))
    }

    fn with_parts(config: Config, api: GatewayClient, cache: CacheStore) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Self {
            config,
            api,
            cache,

            state: AppState::Normal,
            current_tab: Tab::Packages,
            view_mode: ViewMode::Grid,

            package_filter: PackageFilter::default(),
            sort: SortKey::default(),
            package_selection: 0,

            gallery_filter: GalleryFilter::default(),
            gallery_page: 1,
            gallery_selection: 0,

            testimonial_index: 0,

            cart: Cart::default(),
            cart_selection: 0,

            booking_form: BookingForm::default(),
            booking_focus: 0,
            contact_form: ContactForm::default(),
            contact_focus: 0,
            form_error: None,
            submitting: false,

            packages: Vec::new(),
            gallery: Vec::new(),
            testimonials: Vec::new(),

            refresh_rx: rx,
            refresh_tx: tx,

            status_message: None,
            cache_ages: CacheAges::default(),
        }
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Load all collections from cache for an instant first paint.
    pub fn load_from_cache(&mut self) {
        if let Ok(Some(cached)) = self.cache.get::<Vec<Package>>(PACKAGES_KEY) {
            info!(
                count = cached.data.len(),
                age_minutes = cached.age_minutes(),
                "Loaded packages from cache"
            );
            self.packages = cached.data;
        }
        if let Ok(Some(cached)) = self.cache.get::<Vec<GalleryItem>>(GALLERY_KEY) {
            self.gallery = cached.data;
        }
        if let Ok(Some(cached)) = self.cache.get::<Vec<Testimonial>>(TESTIMONIALS_KEY) {
            self.testimonials = cached.data;
        }
        self.cache_ages = self.cache.ages();
    }

    // =========================================================================
    // Background Data Refresh
    // =========================================================================

    /// Spawn a background task to refresh all three collections
    pub fn refresh_all_background(&mut self) {
        info!("Starting background refresh of all collections");

        let tx = self.refresh_tx.clone();
        let api = self.api.clone();

        tokio::spawn(async move {
            Self::execute_background_refresh(tx, api).await;
        });

        self.status_message = Some("Refreshing data...".to_string());
    }

    /// Helper to send refresh results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<RefreshResult>, result: RefreshResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send refresh result - channel closed");
        }
    }

    /// Execute the background refresh task.
    ///
    /// Runs in a spawned Tokio task, fires all three gateway reads
    /// concurrently, and streams per-collection results back through the MPSC
    /// channel. The collections resolve independently: one failing never
    /// blocks or degrades the others.
    async fn execute_background_refresh(tx: mpsc::Sender<RefreshResult>, api: GatewayClient) {
        let (packages_res, gallery_res, testimonials_res) = tokio::join!(
            api.fetch_packages(),
            api.fetch_gallery(),
            api.fetch_testimonials(),
        );

        match packages_res {
            Ok(data) if !data.is_empty() => {
                info!(count = data.len(), "Packages refreshed");
                Self::send_result(&tx, RefreshResult::Packages(data)).await;
            }
            Ok(_) => {
                warn!("Packages fetch returned no rows");
                Self::send_result(&tx, RefreshResult::PackagesUnavailable).await;
            }
            Err(e) => {
                warn!(error = %e, "Packages fetch failed");
                Self::send_result(&tx, RefreshResult::PackagesUnavailable).await;
            }
        }

        match gallery_res {
            Ok(data) if !data.is_empty() => {
                info!(count = data.len(), "Gallery refreshed");
                Self::send_result(&tx, RefreshResult::Gallery(data)).await;
            }
            Ok(_) => {
                warn!("Gallery fetch returned no rows");
                Self::send_result(&tx, RefreshResult::GalleryUnavailable).await;
            }
            Err(e) => {
                warn!(error = %e, "Gallery fetch failed");
                Self::send_result(&tx, RefreshResult::GalleryUnavailable).await;
            }
        }

        match testimonials_res {
            Ok(data) if !data.is_empty() => {
                info!(count = data.len(), "Testimonials refreshed");
                Self::send_result(&tx, RefreshResult::Testimonials(data)).await;
            }
            Ok(_) => {
                warn!("Testimonials fetch returned no rows");
                Self::send_result(&tx, RefreshResult::TestimonialsUnavailable).await;
            }
            Err(e) => {
                warn!(error = %e, "Testimonials fetch failed");
                Self::send_result(&tx, RefreshResult::TestimonialsUnavailable).await;
            }
        }

        Self::send_result(&tx, RefreshResult::RefreshComplete).await;
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.refresh_rx.try_recv() {
            results.push(result);
        }
        for result in results {
            self.process_refresh_result(result);
        }
    }

    /// Process a single refresh result from the background task.
    ///
    /// Fresh data is written through the cache and replaces in-memory state.
    /// An unavailable collection leaves existing state untouched; only when
    /// there is nothing at all to show does the bundled sample data step in.
    fn process_refresh_result(&mut self, result: RefreshResult) {
        match result {
            RefreshResult::Packages(data) => {
                self.cache.set(PACKAGES_KEY, &data);
                self.packages = data;
                self.clamp_package_selection();
                self.cache_ages = self.cache.ages();
            }
            RefreshResult::PackagesUnavailable => {
                if self.packages.is_empty() {
                    info!("No packages available, showing sample data");
                    self.packages = samples::fallback_packages();
                    self.clamp_package_selection();
                }
            }
            RefreshResult::Gallery(data) => {
                self.cache.set(GALLERY_KEY, &data);
                self.gallery = data;
                self.clamp_gallery_position();
                self.cache_ages = self.cache.ages();
            }
            RefreshResult::GalleryUnavailable => {
                if self.gallery.is_empty() {
                    info!("No gallery items available, showing sample data");
                    self.gallery = samples::fallback_gallery();
                    self.clamp_gallery_position();
                }
            }
            RefreshResult::Testimonials(data) => {
                self.cache.set(TESTIMONIALS_KEY, &data);
                self.testimonials = data;
                self.testimonial_index = self
                    .testimonial_index
                    .min(self.testimonials.len().saturating_sub(1));
                self.cache_ages = self.cache.ages();
            }
            RefreshResult::TestimonialsUnavailable => {
                if self.testimonials.is_empty() {
                    info!("No testimonials available, showing sample data");
                    self.testimonials = samples::fallback_testimonials();
                    self.testimonial_index = 0;
                }
            }
            RefreshResult::ContactOutcome(outcome) => {
                self.submitting = false;
                if outcome.success {
                    self.contact_form = ContactForm::default();
                    self.contact_focus = 0;
                    if self.state == AppState::ContactForm {
                        self.state = AppState::Normal;
                    }
                } else {
                    self.form_error = Some(outcome.message.clone());
                }
                self.status_message = Some(outcome.message);
            }
            RefreshResult::BookingOutcome(outcome) => {
                self.submitting = false;
                if outcome.success {
                    self.cart.clear();
                    self.cart_selection = 0;
                    self.booking_form = BookingForm::default();
                    self.booking_focus = 0;
                    if self.state == AppState::BookingForm {
                        self.state = AppState::Normal;
                    }
                } else {
                    self.form_error = Some(outcome.message.clone());
                }
                self.status_message = Some(outcome.message);
            }
            RefreshResult::RefreshComplete => {
                if self.status_message.as_deref() == Some("Refreshing data...") {
                    self.status_message = None;
                }
            }
        }
    }

    // =========================================================================
    // Packages: Filtering & Selection
    // =========================================================================

    /// The packages visible under the current filter and sort, in display
    /// order.
    pub fn filtered_packages(&self) -> Vec<&Package> {
        catalog::filter_packages(&self.packages, &self.package_filter, self.sort)
    }

    pub fn selected_package(&self) -> Option<&Package> {
        self.filtered_packages().get(self.package_selection).copied()
    }

    fn clamp_package_selection(&mut self) {
        let len = self.filtered_packages().len();
        self.package_selection = self.package_selection.min(len.saturating_sub(1));
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.package_selection = 0;
    }

    pub fn cycle_destination_filter(&mut self) {
        let options = catalog::filter_options(self.packages.iter().map(|p| p.destination.as_str()));
        self.package_filter.destination = cycle_value(&options, &self.package_filter.destination);
        self.package_selection = 0;
    }

    pub fn cycle_tour_type_filter(&mut self) {
        let options = catalog::filter_options(self.packages.iter().map(|p| p.tour_type.as_str()));
        self.package_filter.tour_type = cycle_value(&options, &self.package_filter.tour_type);
        self.package_selection = 0;
    }

    pub fn cycle_availability_filter(&mut self) {
        let options =
            catalog::filter_options(self.packages.iter().map(|p| p.availability.as_str()));
        self.package_filter.availability = cycle_value(&options, &self.package_filter.availability);
        self.package_selection = 0;
    }

    pub fn reset_package_filters(&mut self) {
        self.package_filter = PackageFilter::default();
        self.sort = SortKey::default();
        self.package_selection = 0;
    }

    pub fn set_search(&mut self, query: String) {
        self.package_filter.search = query;
        self.package_selection = 0;
    }

    // =========================================================================
    // Gallery: Filtering & Pagination
    // =========================================================================

    pub fn filtered_gallery(&self) -> Vec<&GalleryItem> {
        catalog::filter_gallery(&self.gallery, &self.gallery_filter)
    }

    pub fn gallery_total_pages(&self) -> usize {
        catalog::page_count(self.filtered_gallery().len(), GALLERY_PAGE_SIZE)
    }

    /// Selected gallery item on the current page
    pub fn selected_gallery_item(&self) -> Option<&GalleryItem> {
        let filtered = self.filtered_gallery();
        let page = catalog::page_slice(&filtered, self.gallery_page, GALLERY_PAGE_SIZE);
        page.get(self.gallery_selection).copied()
    }

    fn clamp_gallery_position(&mut self) {
        let total = self.gallery_total_pages();
        self.gallery_page = self.gallery_page.clamp(1, total.max(1));
        let page_len = catalog::page_slice(
            &self.filtered_gallery(),
            self.gallery_page,
            GALLERY_PAGE_SIZE,
        )
        .len();
        self.gallery_selection = self.gallery_selection.min(page_len.saturating_sub(1));
    }

    pub fn next_gallery_page(&mut self) {
        if self.gallery_page < self.gallery_total_pages() {
            self.gallery_page += 1;
            self.gallery_selection = 0;
        }
    }

    pub fn prev_gallery_page(&mut self) {
        if self.gallery_page > 1 {
            self.gallery_page -= 1;
            self.gallery_selection = 0;
        }
    }

    pub fn cycle_gallery_year_filter(&mut self) {
        let options = catalog::year_options(self.gallery.iter().map(|i| i.year.as_str()));
        self.gallery_filter.year = cycle_value(&options, &self.gallery_filter.year);
        self.reset_gallery_page();
    }

    pub fn cycle_gallery_destination_filter(&mut self) {
        let options =
            catalog::filter_options(self.gallery.iter().map(|i| i.destination.as_str()));
        self.gallery_filter.destination = cycle_value(&options, &self.gallery_filter.destination);
        self.reset_gallery_page();
    }

    pub fn cycle_gallery_tour_type_filter(&mut self) {
        let options = catalog::filter_options(self.gallery.iter().map(|i| i.tour_type.as_str()));
        self.gallery_filter.tour_type = cycle_value(&options, &self.gallery_filter.tour_type);
        self.reset_gallery_page();
    }

    /// Any filter change returns to the first page
    fn reset_gallery_page(&mut self) {
        self.gallery_page = 1;
        self.gallery_selection = 0;
    }

    // =========================================================================
    // Testimonials Carousel
    // =========================================================================

    pub fn next_testimonial(&mut self) {
        if !self.testimonials.is_empty() {
            self.testimonial_index = (self.testimonial_index + 1) % self.testimonials.len();
        }
    }

    pub fn prev_testimonial(&mut self) {
        if !self.testimonials.is_empty() {
            self.testimonial_index = self
                .testimonial_index
                .checked_sub(1)
                .unwrap_or(self.testimonials.len() - 1);
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub fn add_selected_to_cart(&mut self) {
        if let Some(pkg) = self.selected_package().cloned() {
            if !pkg.is_available() {
                self.status_message = Some(format!("{} is sold out", pkg.name));
                return;
            }
            self.cart.add(&pkg);
            self.status_message = Some(format!("Added {} to cart", pkg.name));
        }
    }

    pub fn remove_selected_cart_line(&mut self) {
        if let Some(line) = self.cart.lines().get(self.cart_selection) {
            let id = line.package.id.clone();
            self.cart.remove(&id);
            self.cart_selection = self
                .cart_selection
                .min(self.cart.lines().len().saturating_sub(1));
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.cart_selection = 0;
        self.status_message = Some("Cart cleared".to_string());
    }

    // =========================================================================
    // Forms & Submission
    // =========================================================================

    pub fn open_booking_form(&mut self) {
        if self.cart.is_empty() {
            self.status_message = Some("Cart is empty - add a package first".to_string());
            return;
        }
        self.state = AppState::BookingForm;
        self.booking_focus = 0;
        self.form_error = None;
    }

    pub fn open_contact_form(&mut self) {
        self.state = AppState::ContactForm;
        self.contact_focus = 0;
        self.form_error = None;
    }

    /// Open the contact form pre-filled as an inquiry about the current
    /// package or gallery trip.
    pub fn open_inquiry_for_selection(&mut self) {
        let prefill = match self.current_tab {
            Tab::Packages => self
                .selected_package()
                .map(|p| (p.name.clone(), p.destination.clone())),
            Tab::Gallery => self
                .selected_gallery_item()
                .map(|i| (i.title.clone(), i.destination.clone())),
            _ => None,
        };
        if let Some((name, destination)) = prefill {
            self.contact_form.subject = format!("Inquiry: {}", name);
            self.contact_form.message =
                format!("Hi! I would like to know more about {} ({}).", name, destination);
        }
        self.open_contact_form();
    }

    pub fn close_form(&mut self) {
        self.state = AppState::Normal;
        self.form_error = None;
    }

    pub fn booking_field_mut(&mut self, index: usize) -> Option<&mut String> {
        let form = &mut self.booking_form;
        match index {
            0 => Some(&mut form.full_name),
            1 => Some(&mut form.email),
            2 => Some(&mut form.phone),
            3 => Some(&mut form.travel_date),
            4 => Some(&mut form.adults),
            5 => Some(&mut form.children),
            6 => Some(&mut form.budget_range),
            7 => Some(&mut form.accommodation_type),
            8 => Some(&mut form.special_requests),
            9 => Some(&mut form.contact_method),
            _ => None,
        }
    }

    pub fn contact_field_mut(&mut self, index: usize) -> Option<&mut String> {
        let form = &mut self.contact_form;
        match index {
            0 => Some(&mut form.name),
            1 => Some(&mut form.email),
            2 => Some(&mut form.phone),
            3 => Some(&mut form.subject),
            4 => Some(&mut form.message),
            _ => None,
        }
    }

    /// Validate and submit the booking form in the background.
    pub fn submit_booking(&mut self) {
        if self.submitting {
            return;
        }
        if let Err(msg) = self.validate_booking() {
            self.form_error = Some(msg);
            return;
        }
        self.form_error = None;
        self.submitting = true;
        self.status_message = Some("Submitting booking...".to_string());

        let tx = self.refresh_tx.clone();
        let api = self.api.clone();
        let form = self.booking_form.clone();
        let packages = self.cart.snapshot();

        tokio::spawn(async move {
            let outcome = match api.submit_booking(&form, &packages).await {
                Ok(message) => SubmitOutcome {
                    success: true,
                    message,
                },
                Err(e) if e.is_likely_delivered() => {
                    warn!(error = %e, "Booking submission unconfirmed, assuming delivered");
                    SubmitOutcome {
                        success: true,
                        message: "Booking sent - confirmation may take a moment".to_string(),
                    }
                }
                Err(e) => {
                    error!(error = %e, "Booking submission failed");
                    SubmitOutcome {
                        success: false,
                        message: format!("Booking failed: {}", e),
                    }
                }
            };
            Self::send_result(&tx, RefreshResult::BookingOutcome(outcome)).await;
        });
    }

    /// Validate and submit the contact form in the background.
    pub fn submit_contact(&mut self) {
        if self.submitting {
            return;
        }
        if let Err(msg) = self.validate_contact() {
            self.form_error = Some(msg);
            return;
        }
        self.form_error = None;
        self.submitting = true;
        self.status_message = Some("Sending message...".to_string());

        let tx = self.refresh_tx.clone();
        let api = self.api.clone();
        let form = self.contact_form.clone();

        tokio::spawn(async move {
            let outcome = match api.submit_contact(&form).await {
                Ok(message) => SubmitOutcome {
                    success: true,
                    message,
                },
                Err(e) if e.is_likely_delivered() => {
                    warn!(error = %e, "Contact submission unconfirmed, assuming delivered");
                    SubmitOutcome {
                        success: true,
                        message: "Message sent - we will get back to you soon".to_string(),
                    }
                }
                Err(e) => {
                    error!(error = %e, "Contact submission failed");
                    SubmitOutcome {
                        success: false,
                        message: format!("Message failed: {}", e),
                    }
                }
            };
            Self::send_result(&tx, RefreshResult::ContactOutcome(outcome)).await;
        });
    }

    fn validate_booking(&self) -> std::result::Result<(), String> {
        let form = &self.booking_form;
        if self.cart.is_empty() {
            return Err("Cart is empty".to_string());
        }
        if form.full_name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        if !form.email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        if form.phone.trim().is_empty() {
            return Err("Phone number is required".to_string());
        }
        if form.travel_date.trim().is_empty() {
            return Err("Travel date is required".to_string());
        }
        Ok(())
    }

    fn validate_contact(&self) -> std::result::Result<(), String> {
        let form = &self.contact_form;
        if form.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if !form.email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        if form.message.trim().is_empty() {
            return Err("Message is required".to_string());
        }
        Ok(())
    }

    // =========================================================================
    // Derived Stats
    // =========================================================================

    pub fn destination_count(&self) -> usize {
        catalog::destination_count(&self.packages)
    }
}

/// Advance to the next option after `current`, wrapping around. Unknown
/// values restart at the first option.
fn cycle_value(options: &[String], current: &str) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let pos = options.iter().position(|o| o == current);
    match pos {
        Some(i) => options[(i + 1) % options.len()].clone(),
        None => options[0].clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_GATEWAY_URL;

    fn test_app(name: &str) -> App {
        let dir = std::env::temp_dir().join(format!(
            "tourcache-app-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let cache = CacheStore::new(dir).unwrap();
        let api = GatewayClient::new(DEFAULT_GATEWAY_URL).unwrap();
        App::with_parts(Config::default(), api, cache)
    }

    fn package(id: &str, name: &str) -> Package {
        Package {
            id: id.to_string(),
            name: name.to_string(),
            destination: "Boracay".to_string(),
            duration: "3D2N".to_string(),
            price: 8500.0,
            image: String::new(),
            tour_type: "Beach".to_string(),
            rating: 4.8,
            availability: "Available".to_string(),
            featured: true,
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

    #[test]
    fn test_unavailable_collections_fall_back_to_samples_when_empty() {
        let mut app = test_app("fallback");
        assert!(app.packages.is_empty());

        app.process_refresh_result(RefreshResult::PackagesUnavailable);
        app.process_refresh_result(RefreshResult::GalleryUnavailable);
        app.process_refresh_result(RefreshResult::TestimonialsUnavailable);

        assert_eq!(app.packages.len(), 3);
        assert_eq!(app.gallery.len(), 6);
        assert_eq!(app.testimonials.len(), 3);
    }

    #[test]
    fn test_unavailable_collection_keeps_loaded_data() {
        let mut app = test_app("keep");
        app.packages = vec![package("pkg-1", "Boracay Escape")];

        app.process_refresh_result(RefreshResult::PackagesUnavailable);

        // A failed refresh never downgrades loaded data to samples
        assert_eq!(app.packages.len(), 1);
        assert_eq!(app.packages[0].id, "pkg-1");
    }

    #[test]
    fn test_fresh_data_replaces_state_and_writes_through_cache() {
        let mut app = test_app("fresh");
        app.packages = samples::fallback_packages();
        app.package_selection = 2;

        app.process_refresh_result(RefreshResult::Packages(vec![package(
            "pkg-9",
            "Siargao Surf Week",
        )]));

        assert_eq!(app.packages.len(), 1);
        assert_eq!(app.packages[0].id, "pkg-9");
        // Selection clamped to the shorter list, cache age now known
        assert_eq!(app.package_selection, 0);
        assert!(app.cache_ages.packages.is_some());
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut tab = Tab::Packages;
        for _ in 0..4 {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Packages);
        assert_eq!(Tab::Packages.prev(), Tab::Cart);
    }

    #[test]
    fn test_cycle_value_wraps_and_recovers() {
        let options = vec!["all".to_string(), "Boracay".to_string(), "Palawan".to_string()];
        assert_eq!(cycle_value(&options, "all"), "Boracay");
        assert_eq!(cycle_value(&options, "Palawan"), "all");
        // A filter value that no longer exists in the data restarts at "all"
        assert_eq!(cycle_value(&options, "Atlantis"), "all");
        assert_eq!(cycle_value(&[], "all"), "all");
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggle(), ViewMode::List);
        assert_eq!(ViewMode::List.toggle(), ViewMode::Grid);
    }
}
