//! Wire types for the remote commerce API.
//!
//! These mirror the remote's JSON field names exactly and exist only to be
//! deserialized; `transform` turns them into the storefront shapes.

use serde::Deserialize;
use serde_json::Value;

use shopbridge_shared::models::order::Address;

/// An order as the remote returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamOrder {
    pub id: i64,
    pub tracking_number: Option<String>,
    pub order_status: Option<String>,
    pub payment_status: Option<String>,
    pub customer_id: Option<i64>,
    pub customer_contact: Option<String>,
    pub customer: Option<UpstreamCustomer>,
    pub shop_id: Option<i64>,
    pub amount: Option<f64>,
    pub sales_tax: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub paid_total: Option<f64>,
    pub total: Option<f64>,
    #[serde(default)]
    pub products: Vec<UpstreamProductLine>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub delivery_time: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub payment: Option<UpstreamPayment>,
    pub tracking_enabled: Option<bool>,
    pub courier_job_id: Option<String>,
    pub courier_share_url: Option<String>,
}

/// Product line with quantities nested under the relation pivot.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamProductLine {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
    pub pivot: Option<UpstreamPivot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamPivot {
    pub order_quantity: Option<u32>,
    pub unit_price: Option<f64>,
    pub subtotal: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCustomer {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPayment {
    pub id: Option<i64>,
    pub gateway: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
}

/// Order creation answers either `{order, payment}` or a bare order body,
/// depending on whether a gateway was involved.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamCreateResponse {
    Wrapped {
        order: UpstreamOrder,
        payment: Option<UpstreamPayment>,
    },
    Bare(UpstreamOrder),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamStatusSnapshot {
    pub order_status: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamInvoice {
    pub invoice_url: Option<String>,
    pub invoice_number: Option<String>,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamTracking {
    pub current_status: Option<String>,
    #[serde(default)]
    pub checkpoints: Vec<UpstreamCheckpoint>,
    pub expected_delivery: Option<String>,
    pub courier_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCheckpoint {
    pub time: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamAnalytics {
    #[serde(default)]
    pub order_count: u64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub pending_count: u64,
    #[serde(default)]
    pub completed_count: u64,
    #[serde(default)]
    pub cancelled_count: u64,
    #[serde(default)]
    pub average_value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCheckoutVerification {
    #[serde(default)]
    pub unavailable_products: Vec<Value>,
    #[serde(default)]
    pub total_tax: f64,
    #[serde(default)]
    pub shipping_charge: f64,
    pub zone: Option<Value>,
    pub estimated_delivery_time: Option<String>,
    #[serde(default)]
    pub applicable_coupons: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCheckoutValidation {
    pub checkout_session: Option<String>,
    #[serde(default)]
    pub validated: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPaymentInitiation {
    pub checkout_id: Option<String>,
    pub transaction_id: Option<String>,
    pub redirect_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPaymentOutcome {
    #[serde(default)]
    pub success: bool,
    pub payment_intent: Option<String>,
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_response_parses_wrapped_shape() {
        let body = json!({
            "order": {"id": 11, "order_status": "pending"},
            "payment": {"gateway": "stripe", "url": "https://pay"}
        });
        let parsed: UpstreamCreateResponse = serde_json::from_value(body).unwrap();
        match parsed {
            UpstreamCreateResponse::Wrapped { order, payment } => {
                assert_eq!(order.id, 11);
                assert_eq!(payment.unwrap().url.as_deref(), Some("https://pay"));
            }
            UpstreamCreateResponse::Bare(_) => panic!("expected wrapped response"),
        }
    }

    #[test]
    fn test_create_response_parses_bare_order() {
        let body = json!({"id": 12, "order_status": "pending", "total": 5.0});
        let parsed: UpstreamCreateResponse = serde_json::from_value(body).unwrap();
        match parsed {
            UpstreamCreateResponse::Bare(order) => assert_eq!(order.id, 12),
            UpstreamCreateResponse::Wrapped { .. } => panic!("expected bare order"),
        }
    }

    #[test]
    fn test_order_parses_with_minimal_fields() {
        let order: UpstreamOrder = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(order.id, 1);
        assert!(order.products.is_empty());
        assert!(order.order_status.is_none());
    }
}
