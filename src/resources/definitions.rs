//! Resource definitions
//!
//! Each endpoint family is a path template, the `_embedded` key its list
//! responses use, the id kind of its items and the operations it accepts.

use crate::ids::IdKind;

/// Operations a binder can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Update,
    Cancel,
    Page,
    Iterate,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Cancel => "cancel",
            Operation::Page => "page",
            Operation::Iterate => "iterate",
        }
    }
}

/// Static description of one endpoint family
#[derive(Debug)]
pub struct ResourceDef {
    /// Human-readable name for errors and logs
    pub name: &'static str,
    /// Path relative to the API base; `{parent}` is replaced by the parent id
    pub path: &'static str,
    /// Key under `_embedded` in list responses
    pub collection: &'static str,
    /// Id kind of the items, `None` for unprefixed ids
    pub id_kind: Option<IdKind>,
    /// Id kind of the parent resource for nested endpoints
    pub parent: Option<IdKind>,
    /// Allowed operations
    pub operations: &'static [Operation],
}

impl ResourceDef {
    /// Resolve the path template
    pub fn resolve(&self, parent_id: Option<&str>) -> String {
        match parent_id {
            Some(id) => self.path.replace("{parent}", id),
            None => self.path.to_string(),
        }
    }

    /// Whether `op` is allowed on this resource
    pub fn supports(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }
}

use Operation::{Cancel, Create, Get, Iterate, Page, Update};

pub static PAYMENTS: ResourceDef = ResourceDef {
    name: "payments",
    path: "payments",
    collection: "payments",
    id_kind: Some(IdKind::Payment),
    parent: None,
    operations: &[Get, Create, Update, Cancel, Page, Iterate],
};

pub static PAYMENT_CHARGEBACKS: ResourceDef = ResourceDef {
    name: "payment chargebacks",
    path: "payments/{parent}/chargebacks",
    collection: "chargebacks",
    id_kind: Some(IdKind::Chargeback),
    parent: Some(IdKind::Payment),
    operations: &[Get, Page, Iterate],
};

pub static CUSTOMERS: ResourceDef = ResourceDef {
    name: "customers",
    path: "customers",
    collection: "customers",
    id_kind: Some(IdKind::Customer),
    parent: None,
    operations: &[Get, Create, Update, Cancel, Page, Iterate],
};

pub static CUSTOMER_SUBSCRIPTIONS: ResourceDef = ResourceDef {
    name: "customer subscriptions",
    path: "customers/{parent}/subscriptions",
    collection: "subscriptions",
    id_kind: Some(IdKind::Subscription),
    parent: Some(IdKind::Customer),
    operations: &[Get, Create, Update, Cancel, Page, Iterate],
};

pub static SETTLEMENT_CAPTURES: ResourceDef = ResourceDef {
    name: "settlement captures",
    path: "settlements/{parent}/captures",
    collection: "captures",
    id_kind: Some(IdKind::Capture),
    parent: Some(IdKind::Settlement),
    operations: &[Page, Iterate],
};

pub static ORDER_SHIPMENTS: ResourceDef = ResourceDef {
    name: "order shipments",
    path: "orders/{parent}/shipments",
    collection: "shipments",
    id_kind: Some(IdKind::Shipment),
    parent: Some(IdKind::Order),
    operations: &[Get, Page],
};

pub static METHODS: ResourceDef = ResourceDef {
    name: "methods",
    path: "methods",
    collection: "methods",
    id_kind: None,
    parent: None,
    operations: &[Get, Page],
};

pub static PROFILES: ResourceDef = ResourceDef {
    name: "profiles",
    path: "profiles",
    collection: "profiles",
    id_kind: Some(IdKind::Profile),
    parent: None,
    operations: &[Get, Create, Update, Cancel, Page, Iterate],
};
