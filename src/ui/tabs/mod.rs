pub mod cart;
pub mod gallery;
pub mod packages;
pub mod testimonials;
