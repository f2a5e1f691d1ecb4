//! Top-level client
//!
//! [`MollieClient`] owns one [`HttpClient`] and one [`ListEngine`] and hands
//! out [`Binder`]s for each endpoint family. Cloning is cheap.

use crate::config::ClientConfig;
use crate::engine::ListEngine;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::resources::definitions::{
    CUSTOMERS, CUSTOMER_SUBSCRIPTIONS, METHODS, ORDER_SHIPMENTS, PAYMENTS, PAYMENT_CHARGEBACKS,
    PROFILES, SETTLEMENT_CAPTURES,
};
use crate::resources::{
    Binder, Capture, Chargeback, Customer, Method, Payment, Profile, ResourceDef, Shipment,
    Subscription,
};
use std::sync::Arc;
use tracing::info;

/// Entry point for talking to the API
#[derive(Clone)]
pub struct MollieClient {
    http: Arc<HttpClient>,
    engine: ListEngine,
}

impl MollieClient {
    /// Create a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = Arc::new(HttpClient::new(&config)?);
        let engine = ListEngine::new(Arc::clone(&http) as Arc<dyn Transport>)
            .with_values_per_minute(config.values_per_minute);

        info!(
            "Mollie client ready for {} ({} mode)",
            http.base_url(),
            if config.is_test_mode() { "test" } else { "live" }
        );

        Ok(Self { http, engine })
    }

    /// Create a client from `MOLLIE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The underlying HTTP client, for endpoints without a binder
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The list engine shared by all binders
    pub fn engine(&self) -> &ListEngine {
        &self.engine
    }

    // ========================================================================
    // Top-level resources
    // ========================================================================

    pub fn payments(&self) -> Binder<Payment> {
        self.top_level(&PAYMENTS)
    }

    pub fn customers(&self) -> Binder<Customer> {
        self.top_level(&CUSTOMERS)
    }

    pub fn methods(&self) -> Binder<Method> {
        self.top_level(&METHODS)
    }

    pub fn profiles(&self) -> Binder<Profile> {
        self.top_level(&PROFILES)
    }

    // ========================================================================
    // Nested resources
    // ========================================================================

    /// Chargebacks of one payment
    pub fn payment_chargebacks(&self, payment_id: &str) -> Result<Binder<Chargeback>> {
        self.nested(&PAYMENT_CHARGEBACKS, payment_id)
    }

    /// Subscriptions of one customer
    pub fn customer_subscriptions(&self, customer_id: &str) -> Result<Binder<Subscription>> {
        self.nested(&CUSTOMER_SUBSCRIPTIONS, customer_id)
    }

    /// Captures included in a settlement; `next` and `open` address the
    /// upcoming and open settlements
    pub fn settlement_captures(&self, settlement_id: &str) -> Result<Binder<Capture>> {
        self.nested(&SETTLEMENT_CAPTURES, settlement_id)
    }

    /// Shipments of one order
    pub fn order_shipments(&self, order_id: &str) -> Result<Binder<Shipment>> {
        self.nested(&ORDER_SHIPMENTS, order_id)
    }

    fn top_level<T>(&self, def: &'static ResourceDef) -> Binder<T> {
        Binder::top_level(Arc::clone(&self.http), self.engine.clone(), def)
    }

    fn nested<T>(&self, def: &'static ResourceDef, parent_id: &str) -> Result<Binder<T>> {
        Binder::new(Arc::clone(&self.http), self.engine.clone(), def, parent_id)
    }
}

impl std::fmt::Debug for MollieClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MollieClient")
            .field("http", &self.http)
            .field("engine", &self.engine)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn client() -> MollieClient {
        let config = ClientConfig::builder()
            .api_key("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM")
            .values_per_minute(120)
            .build();
        MollieClient::new(config).unwrap()
    }

    #[test]
    fn test_engine_takes_config_pace() {
        assert_eq!(client().engine().values_per_minute(), Some(120));
    }

    #[test]
    fn test_binder_paths() {
        let client = client();
        assert_eq!(client.payments().path(), "payments");
        assert_eq!(
            client
                .customer_subscriptions("cst_FhQJRw4s2n")
                .unwrap()
                .path(),
            "customers/cst_FhQJRw4s2n/subscriptions"
        );
        assert_eq!(
            client.settlement_captures("next").unwrap().path(),
            "settlements/next/captures"
        );
    }

    #[test]
    fn test_nested_binder_validates_parent() {
        let err = client().payment_chargebacks("ord_8wmqcHMN4U").unwrap_err();
        assert!(matches!(err, Error::InvalidId { .. }));
    }

    #[test]
    fn test_rejects_malformed_key() {
        let config = ClientConfig::builder().api_key("sk_live_123").build();
        assert!(matches!(MollieClient::new(config), Err(Error::Config { .. })));
    }

    #[test]
    fn test_debug_hides_key() {
        let debug_str = format!("{:?}", client());
        assert!(debug_str.contains("MollieClient"));
        assert!(!debug_str.contains("dHar4XY7"));
    }
}
