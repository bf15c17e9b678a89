use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pii::Redacted;

/// Order status in the delivery lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    AtLocalFacility,
    OutForDelivery,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::AtLocalFacility => "at_local_facility",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Failed => "failed",
        }
    }

    /// Remote labels are free-form strings; anything unrecognized reads as pending.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("processing") => OrderStatus::Processing,
            Some("at_local_facility") => OrderStatus::AtLocalFacility,
            Some("out_for_delivery") => OrderStatus::OutForDelivery,
            Some("completed") => OrderStatus::Completed,
            Some("cancelled") => OrderStatus::Cancelled,
            Some("refunded") => OrderStatus::Refunded,
            Some("failed") => OrderStatus::Failed,
            _ => OrderStatus::Pending,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// Payment status reported by the gateway
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
    Failed,
    Refunded,
    Reversed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Reversed => "reversed",
        }
    }

    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("processing") => PaymentStatus::Processing,
            Some("paid") => PaymentStatus::Paid,
            Some("failed") => PaymentStatus::Failed,
            Some("refunded") => PaymentStatus::Refunded,
            Some("reversed") => PaymentStatus::Reversed,
            _ => PaymentStatus::Pending,
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

/// An order as the storefront consumes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub tracking_number: Option<String>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub customer_id: Option<i64>,
    pub shop_id: Option<i64>,
    pub customer: Option<CustomerInfo>,
    pub amount: f64,
    pub sales_tax: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub paid_total: Option<f64>,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub delivery_time: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub payment: Option<PaymentInfo>,
    pub gps_tracking: Option<GpsTracking>,
}

/// A product line within an order, flattened from the remote pivot rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<Redacted<String>>,
    pub contact: Option<Redacted<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

/// Gateway payment block attached to freshly created orders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInfo {
    pub id: Option<i64>,
    pub gateway: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
}

/// Live courier tracking, present only when the remote enables it for the order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsTracking {
    pub job_id: String,
    pub share_url: Option<String>,
}
