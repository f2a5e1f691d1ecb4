//! Typed resource models
//!
//! Field coverage follows what integrations actually read; anything else in
//! a response is ignored. Each model keeps its `_links` so helpers like
//! [`Payment::checkout_url`] can read them.

use crate::pagination::Links;
use crate::types::{JsonValue, Mode};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared value types
// ============================================================================

/// A monetary amount. `value` keeps Mollie's decimal string, e.g. `"10.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: String,
    pub currency: String,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

// ============================================================================
// Payments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Open,
    Canceled,
    Pending,
    Authorized,
    Expired,
    Failed,
    Paid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    pub amount: Amount,
    pub description: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub metadata: Option<JsonValue>,
    #[serde(default)]
    pub is_cancelable: Option<bool>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount_refunded: Option<Amount>,
    #[serde(default)]
    pub amount_remaining: Option<Amount>,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    /// Method-specific details, passed through untyped
    #[serde(default)]
    pub details: Option<JsonValue>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub sequence_type: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Payment {
    /// Where to send the customer to complete the payment
    pub fn checkout_url(&self) -> Option<&str> {
        self.links.href("checkout")
    }

    /// The merchant dashboard page for this payment
    pub fn dashboard_url(&self) -> Option<&str> {
        self.links.href("dashboard")
    }

    pub fn is_open(&self) -> bool {
        self.status == PaymentStatus::Open
    }

    /// Whether the payment has been paid at some point, even if later refunded
    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }

    pub fn is_canceled(&self) -> bool {
        self.status == PaymentStatus::Canceled
    }

    pub fn is_expired(&self) -> bool {
        self.status == PaymentStatus::Expired
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_authorized(&self) -> bool {
        self.status == PaymentStatus::Authorized
    }

    pub fn has_refunds(&self) -> bool {
        self.links.get("refunds").is_some()
    }

    pub fn has_chargebacks(&self) -> bool {
        self.links.get("chargebacks").is_some()
    }
}

// ============================================================================
// Chargebacks
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    pub resource: String,
    pub id: String,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reversed_at: Option<DateTime<Utc>>,
    pub payment_id: String,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Chargeback {
    pub fn is_reversed(&self) -> bool {
        self.reversed_at.is_some()
    }
}

// ============================================================================
// Customers & subscriptions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Pending,
    Active,
    Canceled,
    Suspended,
    Completed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub created_at: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub amount: Amount,
    /// Total number of charges, `None` for an ongoing subscription
    #[serde(default)]
    pub times: Option<u32>,
    #[serde(default)]
    pub times_remaining: Option<u32>,
    pub interval: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_payment_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub mandate_id: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<JsonValue>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubscriptionStatus::Pending
    }

    pub fn is_canceled(&self) -> bool {
        self.status == SubscriptionStatus::Canceled
    }

    pub fn is_suspended(&self) -> bool {
        self.status == SubscriptionStatus::Suspended
    }

    pub fn is_completed(&self) -> bool {
        self.status == SubscriptionStatus::Completed
    }

    /// Link to the owning customer
    pub fn customer_url(&self) -> Option<&str> {
        self.links.href("customer")
    }
}

// ============================================================================
// Captures
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    pub payment_id: String,
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub settlement_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

// ============================================================================
// Shipments
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentTracking {
    pub carrier: String,
    pub code: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// An order line as it appears inside a shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub resource: String,
    pub id: String,
    pub order_id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Amount>,
    #[serde(default)]
    pub discount_amount: Option<Amount>,
    #[serde(default)]
    pub vat_amount: Option<Amount>,
    #[serde(default)]
    pub total_amount: Option<Amount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub resource: String,
    pub id: String,
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tracking: Option<ShipmentTracking>,
    /// Lines with the quantities shipped in this shipment
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Shipment {
    pub fn tracking_url(&self) -> Option<&str> {
        self.tracking.as_ref().and_then(|t| t.url.as_deref())
    }

    /// Link to the order this shipment belongs to
    pub fn order_url(&self) -> Option<&str> {
        self.links.href("order")
    }
}

// ============================================================================
// Methods
// ============================================================================

/// Image variants offered for a payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Size1x,
    Size2x,
    Svg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodImage {
    pub size1x: String,
    pub size2x: String,
    pub svg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodPricing {
    pub description: String,
    pub fixed: Amount,
    pub variable: String,
    #[serde(default)]
    pub fee_region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub resource: String,
    /// Method name such as `ideal` or `creditcard`
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub minimum_amount: Option<Amount>,
    #[serde(default)]
    pub maximum_amount: Option<Amount>,
    pub image: MethodImage,
    /// Only present when requested with `include=pricing`
    #[serde(default)]
    pub pricing: Vec<MethodPricing>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Method {
    pub fn image_url(&self, size: ImageSize) -> &str {
        match size {
            ImageSize::Size1x => &self.image.size1x,
            ImageSize::Size2x => &self.image.size2x,
            ImageSize::Svg => &self.image.svg,
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Unverified,
    Verified,
    Blocked,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReview {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub name: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub category_code: Option<u32>,
    pub status: ProfileStatus,
    #[serde(default)]
    pub review: Option<ProfileReview>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Profile {
    pub fn is_unverified(&self) -> bool {
        self.status == ProfileStatus::Unverified
    }

    pub fn is_verified(&self) -> bool {
        self.status == ProfileStatus::Verified
    }

    pub fn is_blocked(&self) -> bool {
        self.status == ProfileStatus::Blocked
    }

    pub fn checkout_preview_url(&self) -> Option<&str> {
        self.links.href("checkoutPreviewUrl")
    }
}
