//! Resource identifier validation
//!
//! Mollie ids carry a resource prefix (`tr_` for payments, `cst_` for
//! customers, ...). Checking the prefix before building a URL keeps a
//! mistyped id from turning into a confusing 404.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static ID_BODY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// The kinds of prefixed identifiers the API hands out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Payment,
    Chargeback,
    Customer,
    Subscription,
    Settlement,
    Capture,
    Order,
    Shipment,
    Profile,
    Refund,
    Mandate,
}

impl IdKind {
    /// The id prefix, including the underscore
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Payment => "tr_",
            IdKind::Chargeback => "chb_",
            IdKind::Customer => "cst_",
            IdKind::Subscription => "sub_",
            IdKind::Settlement => "stl_",
            IdKind::Capture => "cpt_",
            IdKind::Order => "ord_",
            IdKind::Shipment => "shp_",
            IdKind::Profile => "pfl_",
            IdKind::Refund => "re_",
            IdKind::Mandate => "mdt_",
        }
    }

    /// Resource name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            IdKind::Payment => "payment",
            IdKind::Chargeback => "chargeback",
            IdKind::Customer => "customer",
            IdKind::Subscription => "subscription",
            IdKind::Settlement => "settlement",
            IdKind::Capture => "capture",
            IdKind::Order => "order",
            IdKind::Shipment => "shipment",
            IdKind::Profile => "profile",
            IdKind::Refund => "refund",
            IdKind::Mandate => "mandate",
        }
    }
}

/// Whether `id` looks like an identifier of the given kind
pub fn check_id(id: &str, kind: IdKind) -> bool {
    // Settlements can also be addressed by keyword
    if kind == IdKind::Settlement && matches!(id, "next" | "open") {
        return true;
    }

    id.strip_prefix(kind.prefix())
        .is_some_and(|body| ID_BODY_REGEX.is_match(body))
}

/// Like [`check_id`], failing with [`Error::InvalidId`]
pub fn validate_id(id: &str, kind: IdKind) -> Result<()> {
    if check_id(id, kind) {
        Ok(())
    } else {
        Err(Error::invalid_id(kind.name(), id))
    }
}
