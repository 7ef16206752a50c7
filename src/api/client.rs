//! Client for the spreadsheet-backed tour gateway.
//!
//! The gateway is a single Apps Script web app endpoint. Reads are GETs
//! dispatched on an `action` query parameter; writes are POSTs with an
//! `action` field in the JSON body. Every response is a JSON envelope with a
//! `success` flag.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    BookedPackage, BookingForm, ContactForm, GalleryItem, GalleryRow, Package, PackageRow,
    Testimonial, TestimonialRow,
};

use super::GatewayError;

// ============================================================================
// Constants
// ============================================================================

/// Gateway web app endpoint used when no override is configured
pub const DEFAULT_GATEWAY_URL: &str =
    "https://script.google.com/macros/s/AKfycbxRTWT0iVtTjGa0oHRRtR8u9mPXH0C4y2jpMTYv1S0/exec";

/// Timeout for read requests in seconds.
/// Reads race against a cached paint, so they can fail fast.
const READ_TIMEOUT_SECS: u64 = 10;

/// Timeout for write requests in seconds.
/// Form submissions append a sheet row and send emails, which is slower.
const WRITE_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Deserialize)]
struct PackagesEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    packages: Vec<PackageRow>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GalleryEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    gallery: Vec<GalleryRow>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TestimonialsEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    testimonials: Vec<TestimonialRow>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
struct ContactRequest<'a> {
    action: &'static str,
    data: &'a ContactForm,
}

#[derive(Serialize)]
struct BookingRequest<'a> {
    action: &'static str,
    data: &'a BookingForm,
    packages: &'a [BookedPackage],
}

/// Gateway client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch and normalize all tour packages.
    pub async fn fetch_packages(&self) -> Result<Vec<Package>, GatewayError> {
        let envelope: PackagesEnvelope = self.read("getPackages").await?;
        Self::check_envelope(envelope.success, envelope.error)?;

        let packages: Vec<Package> = envelope
            .packages
            .into_iter()
            .filter_map(PackageRow::into_package)
            .collect();
        debug!(count = packages.len(), "Fetched packages");
        Ok(packages)
    }

    /// Fetch and normalize all gallery items.
    pub async fn fetch_gallery(&self) -> Result<Vec<GalleryItem>, GatewayError> {
        let envelope: GalleryEnvelope = self.read("getGallery").await?;
        Self::check_envelope(envelope.success, envelope.error)?;

        let items: Vec<GalleryItem> = envelope
            .gallery
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| row.into_item(i))
            .collect();
        debug!(count = items.len(), "Fetched gallery items");
        Ok(items)
    }

    /// Fetch and normalize all testimonials.
    pub async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, GatewayError> {
        let envelope: TestimonialsEnvelope = self.read("getTestimonials").await?;
        Self::check_envelope(envelope.success, envelope.error)?;

        let testimonials: Vec<Testimonial> = envelope
            .testimonials
            .into_iter()
            .enumerate()
            .filter_map(|(i, row)| row.into_testimonial(i))
            .collect();
        debug!(count = testimonials.len(), "Fetched testimonials");
        Ok(testimonials)
    }

    /// Submit a contact inquiry. Returns the gateway's acknowledgement text.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<String, GatewayError> {
        let request = ContactRequest {
            action: "submitContact",
            data: form,
        };
        self.write(&request).await
    }

    /// Submit a booking with a snapshot of the cart.
    pub async fn submit_booking(
        &self,
        form: &BookingForm,
        packages: &[BookedPackage],
    ) -> Result<String, GatewayError> {
        let request = BookingRequest {
            action: "submitBooking",
            data: form,
            packages,
        };
        self.write(&request).await
    }

    async fn read<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
    ) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("action", action)])
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Bad JSON for {}: {}", action, e)))
    }

    async fn write<B: Serialize>(&self, body: &B) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(&self.base_url)
            .timeout(Duration::from_secs(WRITE_TIMEOUT_SECS))
            .json(body)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let envelope: SubmitEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("Bad submit response: {}", e)))?;

        if envelope.success {
            Ok(envelope
                .message
                .unwrap_or_else(|| "Request received".to_string()))
        } else {
            let error = envelope.error.unwrap_or_else(|| "Unknown error".to_string());
            warn!(error = %error, "Gateway rejected submission");
            Err(GatewayError::Rejected(error))
        }
    }

    /// Check if a response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(GatewayError::from_status(status, &body))
        }
    }

    fn check_envelope(success: bool, error: Option<String>) -> Result<(), GatewayError> {
        if success {
            Ok(())
        } else {
            Err(GatewayError::Rejected(
                error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_envelope_normalizes_rows() {
        let json = r#"{
            "success": true,
            "packages": [
                {"id": "pkg-1", "name": "Boracay Escape", "price": 8500, "rating": 4.8},
                {"id": "", "name": "Headerless junk row"},
                {"id": "pkg-2", "name": "El Nido Island Hopping", "price": 12500, "tourtype": "Beach"}
            ],
            "count": 3
        }"#;
        let envelope: PackagesEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.success);

        let packages: Vec<Package> = envelope
            .packages
            .into_iter()
            .filter_map(PackageRow::into_package)
            .collect();
        assert_eq!(packages.len(), 2);
        assert!(packages[0].featured);
        assert_eq!(packages[1].tour_type, "Beach");
    }

    #[test]
    fn test_failure_envelope_parses_without_collection() {
        let json = r#"{"success": false, "error": "Sheet not found: Packages"}"#;
        let envelope: PackagesEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.packages.is_empty());
        assert!(GatewayClient::check_envelope(envelope.success, envelope.error).is_err());
    }

    #[test]
    fn test_submit_envelope_variants() {
        let ok: SubmitEnvelope =
            serde_json::from_str(r#"{"success": true, "message": "Booking received"}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message.as_deref(), Some("Booking received"));

        let rejected: SubmitEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "Missing email"}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.error.as_deref(), Some("Missing email"));
    }

    #[test]
    fn test_booking_request_body_shape() {
        let form = BookingForm {
            full_name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
            ..Default::default()
        };
        let request = BookingRequest {
            action: "submitBooking",
            data: &form,
            packages: &[],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["action"], "submitBooking");
        assert_eq!(json["data"]["fullName"], "Maria Santos");
        assert!(json["packages"].as_array().unwrap().is_empty());
    }
}
