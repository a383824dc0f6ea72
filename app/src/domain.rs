//! Domain types shared across the slices.
//!
//! These are the opaque payloads carried by actions: what an order looks
//! like, who a customer is. No reducer derives anything from them beyond
//! direct assignment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random `OrderId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `OrderId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a customer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Creates a new random `CustomerId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `CustomerId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of cleaning a booking asks for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningKind {
    /// Regular maintenance cleaning
    #[default]
    Standard,
    /// Deep cleaning, including appliances and baseboards
    Deep,
    /// Cleanup after construction or renovation work
    PostRenovation,
    /// Window cleaning only
    Windows,
}

impl std::fmt::Display for CleaningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Deep => write!(f, "deep"),
            Self::PostRenovation => write!(f, "post-renovation"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// A placed cleaning order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: OrderId,
    /// The customer who placed the order
    pub customer_id: CustomerId,
    /// Address to clean
    pub address: String,
    /// Requested service date
    pub service_date: DateTime<Utc>,
    /// Kind of cleaning
    pub kind: CleaningKind,
    /// Extra services (e.g. "fridge", "oven", "ironing")
    pub extras: Vec<String>,
    /// Quoted total price
    pub total: f64,
    /// When the order was placed
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Materialize an order from a draft, as a gateway would on acceptance
    #[must_use]
    pub fn from_draft(id: OrderId, draft: OrderDraft, placed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id: draft.customer_id,
            address: draft.address,
            service_date: draft.service_date,
            kind: draft.kind,
            extras: draft.extras,
            total: draft.total,
            placed_at,
        }
    }
}

/// A not-yet-placed order, as assembled from the calculator and the form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// The customer placing the order
    pub customer_id: CustomerId,
    /// Address to clean
    pub address: String,
    /// Requested service date
    pub service_date: DateTime<Utc>,
    /// Kind of cleaning
    pub kind: CleaningKind,
    /// Extra services
    pub extras: Vec<String>,
    /// Quoted total price
    pub total: f64,
}

/// A customer profile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn order_id_display() {
        let id = OrderId::new();
        assert!(!format!("{id}").is_empty());
    }

    #[test]
    fn order_from_draft_keeps_fields() {
        let customer = CustomerId::new();
        let draft = OrderDraft {
            customer_id: customer,
            address: "12 Birch Lane".to_string(),
            service_date: Utc::now(),
            kind: CleaningKind::Deep,
            extras: vec!["oven".to_string()],
            total: 240.0,
        };

        let placed_at = Utc::now();
        let order = Order::from_draft(OrderId::new(), draft.clone(), placed_at);

        assert_eq!(order.customer_id, customer);
        assert_eq!(order.address, draft.address);
        assert_eq!(order.kind, CleaningKind::Deep);
        assert_eq!(order.placed_at, placed_at);
    }

    #[test]
    fn cleaning_kind_display() {
        assert_eq!(CleaningKind::PostRenovation.to_string(), "post-renovation");
        assert_eq!(CleaningKind::default(), CleaningKind::Standard);
    }
}
