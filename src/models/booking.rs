use serde::Serialize;

use super::Package;
use crate::utils::format_price;

/// One package in the session cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub package: Package,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.package.price * self.quantity as f64
    }
}

/// Session-scoped cart. Lines keyed by package id; adding an existing
/// package bumps its quantity instead of duplicating the line.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn add(&mut self, package: &Package) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.package.id == package.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                package: package.clone(),
                quantity: 1,
            });
        }
    }

    pub fn remove(&mut self, package_id: &str) {
        self.lines.retain(|l| l.package.id != package_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn total_display(&self) -> String {
        format_price(self.total())
    }

    /// Decoupled snapshot posted with a booking. Carries only the fields the
    /// back office needs for the confirmation sheet.
    pub fn snapshot(&self) -> Vec<BookedPackage> {
        self.lines
            .iter()
            .map(|l| BookedPackage {
                package: PackageSnapshot {
                    name: l.package.name.clone(),
                    price: l.package.price,
                    destination: l.package.destination.clone(),
                    duration: l.package.duration.clone(),
                },
                quantity: l.quantity,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageSnapshot {
    pub name: String,
    pub price: f64,
    pub destination: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookedPackage {
    pub package: PackageSnapshot,
    pub quantity: u32,
}

/// Traveler details posted as a `submitBooking` request. Field names match
/// the gateway's booking sheet columns.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub travel_date: String,
    pub adults: String,
    pub children: String,
    pub budget_range: String,
    pub accommodation_type: String,
    pub special_requests: String,
    pub contact_method: String,
}

/// A general inquiry posted as a `submitContact` request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}
