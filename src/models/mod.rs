//! Data models for the tour catalog.
//!
//! This module contains the canonical record shapes used throughout the
//! application:
//!
//! - `Package`: a bookable tour package
//! - `GalleryItem`: a past-trip photo set
//! - `Testimonial`: a client review
//! - `Cart`, `CartLine`, form DTOs: the booking/inquiry workflow
//!
//! Each canonical type has a companion `*Row` type that mirrors the raw
//! spreadsheet-gateway rows, including the historical case-variant field
//! names. All alias handling happens once, at the row-to-model boundary.

pub mod booking;
pub mod gallery;
pub mod package;
pub mod testimonial;

pub use booking::{BookedPackage, BookingForm, Cart, CartLine, ContactForm, PackageSnapshot};
pub use gallery::{GalleryItem, GalleryRow};
pub use package::{Package, PackageRow};
pub use testimonial::{Testimonial, TestimonialRow};
