use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::order::{OrderStatus, PaymentStatus};

/// Both lifecycle statuses of an order in one view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderStatusSnapshot {
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
}

/// Aggregated order totals for a shop dashboard.
/// The default value is all zeroes and doubles as the fallback when the
/// remote cannot serve the aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderAnalytics {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub pending_orders: u64,
    pub completed_orders: u64,
    pub cancelled_orders: u64,
    pub average_order_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub url: Option<String>,
    pub number: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
}

/// Stock and pricing verdict for a cart before checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutVerification {
    pub unavailable_items: Vec<Value>,
    pub tax: f64,
    pub shipping_charge: f64,
    pub shipping_zone: Option<Value>,
    pub eta: Option<String>,
    pub coupons: Vec<Value>,
}

/// First step of the payment-first flow: is this checkout payable?
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutValidation {
    pub session_id: Option<String>,
    pub validated: bool,
    pub message: Option<String>,
}

/// Second step of the payment-first flow: gateway hand-off details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInitiation {
    pub checkout_id: Option<String>,
    pub transaction_id: Option<String>,
    pub payment_url: Option<String>,
    pub status: Option<String>,
}

/// Outcome of charging an existing order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    pub intent_id: Option<String>,
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}
