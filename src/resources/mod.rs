//! Resources module
//!
//! Typed endpoint bindings built on the list engine.
//!
//! # Overview
//!
//! - [`definitions`] - static endpoint descriptions
//! - [`models`] - record types with their convenience helpers
//! - [`Binder`] - get/page/iterate (and writes where allowed) for one endpoint

pub mod definitions;
pub mod models;

mod binder;

pub use binder::Binder;
pub use definitions::{Operation, ResourceDef};
pub use models::{
    Amount, Capture, Chargeback, Customer, ImageSize, Method, MethodImage, MethodPricing,
    OrderLine, Payment, PaymentStatus, Profile, ProfileReview, ProfileStatus, Shipment,
    ShipmentTracking, Subscription, SubscriptionStatus,
};
