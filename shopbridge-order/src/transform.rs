//! Field mapping between the storefront shapes and the remote wire format.
//!
//! Everything here is pure: wire structs in, storefront structs out, and
//! payload builders the other way around.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use shopbridge_shared::models::checkout::{
    CheckoutValidation, CheckoutVerification, Invoice, OrderAnalytics, OrderStatusSnapshot,
    PaymentInitiation, PaymentResult,
};
use shopbridge_shared::models::order::{
    CustomerInfo, GpsTracking, Order, OrderItem, OrderStatus, PaymentInfo, PaymentStatus,
};
use shopbridge_shared::models::pagination::Paginated;
use shopbridge_shared::models::tracking::{TrackingEvent, TrackingInfo};
use shopbridge_shared::pii::Redacted;

use crate::requests::{
    CheckoutDraft, CustomerDraft, OrderDraft, OrderItemDraft, OrderPatch, PaymentFirstRequest,
    PaymentPayload,
};
use crate::upstream::{
    UpstreamAnalytics, UpstreamCheckoutValidation, UpstreamCheckoutVerification,
    UpstreamCreateResponse, UpstreamInvoice, UpstreamOrder, UpstreamPayment, UpstreamPaymentInitiation,
    UpstreamPaymentOutcome, UpstreamProductLine, UpstreamStatusSnapshot, UpstreamTracking,
};

// ============================================================================
// Remote -> storefront
// ============================================================================

pub fn order_from_upstream(raw: UpstreamOrder) -> Order {
    let customer = customer_from_upstream(&raw);
    let gps_tracking = gps_from_upstream(&raw);
    let created_at = raw.created_at.as_deref().and_then(parse_timestamp);
    let customer_id = raw
        .customer_id
        .or_else(|| customer.as_ref().and_then(|c| c.id));
    let items: Vec<OrderItem> = raw.products.into_iter().map(item_from_line).collect();

    Order {
        id: raw.id,
        tracking_number: raw.tracking_number,
        order_status: OrderStatus::from_label(raw.order_status.as_deref()),
        payment_status: PaymentStatus::from_label(raw.payment_status.as_deref()),
        customer_id,
        shop_id: raw.shop_id,
        customer,
        amount: raw.amount.unwrap_or(0.0),
        sales_tax: raw.sales_tax,
        delivery_fee: raw.delivery_fee,
        paid_total: raw.paid_total,
        total: raw.total.unwrap_or(0.0),
        items,
        billing_address: raw.billing_address,
        shipping_address: raw.shipping_address,
        delivery_time: raw.delivery_time,
        note: raw.note,
        created_at,
        payment: raw.payment.map(payment_from_upstream),
        gps_tracking,
    }
}

/// Creation responses carry the order either bare or wrapped next to the
/// gateway payment block; the block wins over any embedded payment field.
pub fn order_from_create(response: UpstreamCreateResponse) -> Order {
    match response {
        UpstreamCreateResponse::Wrapped { order, payment } => {
            let mut mapped = order_from_upstream(order);
            if let Some(payment) = payment {
                mapped.payment = Some(payment_from_upstream(payment));
            }
            mapped
        }
        UpstreamCreateResponse::Bare(raw) => order_from_upstream(raw),
    }
}

/// Listing bodies must be arrays; anything else reads as an empty page.
/// Rows that fail to parse are skipped rather than failing the whole page.
pub fn orders_page_from_upstream(body: Value, page: u32, limit: u32) -> Paginated<Order> {
    let rows = match body {
        Value::Array(rows) => rows,
        _ => return Paginated::empty(page, limit),
    };

    let data: Vec<Order> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<UpstreamOrder>(row) {
            Ok(raw) => Some(order_from_upstream(raw)),
            Err(err) => {
                tracing::warn!("Skipping unparseable order row in listing: {}", err);
                None
            }
        })
        .collect();

    let total = data.len() as u64;
    Paginated::new(data, page, limit, total)
}

pub fn status_snapshot_from_upstream(raw: UpstreamStatusSnapshot) -> OrderStatusSnapshot {
    OrderStatusSnapshot {
        order_status: OrderStatus::from_label(raw.order_status.as_deref()),
        payment_status: PaymentStatus::from_label(raw.payment_status.as_deref()),
    }
}

pub fn invoice_from_upstream(raw: UpstreamInvoice) -> Invoice {
    Invoice {
        url: raw.invoice_url,
        number: raw.invoice_number,
        issued_at: raw.generated_at.as_deref().and_then(parse_timestamp),
    }
}

pub fn tracking_from_upstream(raw: UpstreamTracking) -> TrackingInfo {
    TrackingInfo {
        status: raw.current_status,
        events: raw
            .checkpoints
            .into_iter()
            .map(|checkpoint| TrackingEvent {
                occurred_at: checkpoint.time,
                location: checkpoint.location,
                description: checkpoint.note,
            })
            .collect(),
        eta: raw.expected_delivery,
        carrier: raw.courier_name,
    }
}

pub fn analytics_from_upstream(raw: UpstreamAnalytics) -> OrderAnalytics {
    OrderAnalytics {
        total_orders: raw.order_count,
        total_revenue: raw.revenue,
        pending_orders: raw.pending_count,
        completed_orders: raw.completed_count,
        cancelled_orders: raw.cancelled_count,
        average_order_value: raw.average_value,
    }
}

pub fn verification_from_upstream(raw: UpstreamCheckoutVerification) -> CheckoutVerification {
    CheckoutVerification {
        unavailable_items: raw.unavailable_products,
        tax: raw.total_tax,
        shipping_charge: raw.shipping_charge,
        shipping_zone: raw.zone,
        eta: raw.estimated_delivery_time,
        coupons: raw.applicable_coupons,
    }
}

pub fn validation_from_upstream(raw: UpstreamCheckoutValidation) -> CheckoutValidation {
    CheckoutValidation {
        session_id: raw.checkout_session,
        validated: raw.validated,
        message: raw.message,
    }
}

pub fn initiation_from_upstream(raw: UpstreamPaymentInitiation) -> PaymentInitiation {
    PaymentInitiation {
        checkout_id: raw.checkout_id,
        transaction_id: raw.transaction_id,
        payment_url: raw.redirect_url,
        status: raw.status,
    }
}

pub fn payment_outcome_from_upstream(raw: UpstreamPaymentOutcome) -> PaymentResult {
    PaymentResult {
        success: raw.success,
        intent_id: raw.payment_intent,
        transaction_id: raw.transaction_id,
        message: raw.message,
    }
}

pub fn payment_from_upstream(raw: UpstreamPayment) -> PaymentInfo {
    PaymentInfo {
        id: raw.id,
        gateway: raw.gateway,
        url: raw.url,
        status: raw.status,
    }
}

fn item_from_line(line: UpstreamProductLine) -> OrderItem {
    let pivot = line.pivot.unwrap_or_default();
    let quantity = pivot.order_quantity.unwrap_or(0);
    let unit_price = pivot.unit_price.unwrap_or(0.0);
    OrderItem {
        product_id: line.id,
        name: line.name,
        image: line.image,
        quantity,
        unit_price,
        subtotal: pivot.subtotal.unwrap_or(quantity as f64 * unit_price),
    }
}

fn customer_from_upstream(raw: &UpstreamOrder) -> Option<CustomerInfo> {
    if let Some(customer) = &raw.customer {
        let contact = customer
            .contact
            .clone()
            .or_else(|| raw.customer_contact.clone());
        return Some(CustomerInfo {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone().map(Redacted),
            contact: contact.map(Redacted),
        });
    }
    if raw.customer_id.is_some() || raw.customer_contact.is_some() {
        return Some(CustomerInfo {
            id: raw.customer_id,
            name: None,
            email: None,
            contact: raw.customer_contact.clone().map(Redacted),
        });
    }
    None
}

fn gps_from_upstream(raw: &UpstreamOrder) -> Option<GpsTracking> {
    if raw.tracking_enabled != Some(true) {
        return None;
    }
    let job_id = raw.courier_job_id.clone()?;
    Some(GpsTracking {
        job_id,
        share_url: raw.courier_share_url.clone(),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
}

// ============================================================================
// Storefront -> remote
// ============================================================================

pub fn create_order_payload(draft: &OrderDraft) -> Value {
    let products: Vec<Value> = draft.items.iter().map(line_payload).collect();

    let mut body = Map::new();
    body.insert("products".to_string(), Value::Array(products));
    body.insert("amount".to_string(), json!(draft.amount));
    if let Some(total) = draft.total {
        body.insert("total".to_string(), json!(total));
    }
    if let Some(sales_tax) = draft.sales_tax {
        body.insert("sales_tax".to_string(), json!(sales_tax));
    }
    if let Some(delivery_fee) = draft.delivery_fee {
        body.insert("delivery_fee".to_string(), json!(delivery_fee));
    }
    if let Some(paid_total) = draft.paid_total {
        body.insert("paid_total".to_string(), json!(paid_total));
    }
    if let Some(shop_id) = draft.shop_id {
        body.insert("shop_id".to_string(), json!(shop_id));
    }
    if let Some(gateway) = &draft.payment_gateway {
        body.insert("payment_gateway".to_string(), json!(gateway));
    }
    if let Some(address) = &draft.billing_address {
        body.insert("billing_address".to_string(), json!(address));
    }
    if let Some(address) = &draft.shipping_address {
        body.insert("shipping_address".to_string(), json!(address));
    }
    if let Some(delivery_time) = &draft.delivery_time {
        body.insert("delivery_time".to_string(), json!(delivery_time));
    }
    if let Some(note) = &draft.note {
        body.insert("note".to_string(), json!(note));
    }

    // Registered customers go by id; guests get their whole block forwarded
    // so the remote can create them.
    match draft.customer.id {
        Some(id) => {
            body.insert("customer_id".to_string(), json!(id));
        }
        None => {
            body.insert("customer".to_string(), customer_payload(&draft.customer));
        }
    }
    if let Some(contact) = &draft.customer.contact {
        body.insert("customer_contact".to_string(), json!(contact));
    }

    Value::Object(body)
}

pub fn update_order_payload(patch: &OrderPatch) -> Value {
    let mut body = Map::new();
    if let Some(status) = patch.order_status {
        body.insert("order_status".to_string(), json!(status.as_str()));
    }
    if let Some(status) = patch.payment_status {
        body.insert("payment_status".to_string(), json!(status.as_str()));
    }
    if let Some(delivery_time) = &patch.delivery_time {
        body.insert("delivery_time".to_string(), json!(delivery_time));
    }
    if let Some(note) = &patch.note {
        body.insert("note".to_string(), json!(note));
    }
    if let Some(address) = &patch.billing_address {
        body.insert("billing_address".to_string(), json!(address));
    }
    if let Some(address) = &patch.shipping_address {
        body.insert("shipping_address".to_string(), json!(address));
    }
    Value::Object(body)
}

pub fn verify_checkout_payload(draft: &CheckoutDraft) -> Value {
    let products: Vec<Value> = draft.items.iter().map(line_payload).collect();

    let mut body = Map::new();
    body.insert("products".to_string(), Value::Array(products));
    if let Some(customer_id) = draft.customer_id {
        body.insert("customer_id".to_string(), json!(customer_id));
    }
    if let Some(address) = &draft.billing_address {
        body.insert("billing_address".to_string(), json!(address));
    }
    if let Some(address) = &draft.shipping_address {
        body.insert("shipping_address".to_string(), json!(address));
    }
    if let Some(coupon) = &draft.coupon_code {
        body.insert("coupon_code".to_string(), json!(coupon));
    }
    Value::Object(body)
}

pub fn process_payment_payload(payment: &PaymentPayload) -> Value {
    let mut body = Map::new();
    body.insert("gateway".to_string(), json!(payment.gateway));
    if let Some(token) = &payment.token {
        body.insert("token".to_string(), json!(token));
    }
    if let Some(amount) = payment.amount {
        body.insert("amount".to_string(), json!(amount));
    }
    Value::Object(body)
}

pub fn initiate_payment_payload(request: &PaymentFirstRequest) -> Value {
    let mut body = Map::new();
    body.insert("checkout_session".to_string(), json!(request.session_id));
    body.insert("gateway".to_string(), json!(request.gateway));
    body.insert("amount".to_string(), json!(request.amount));
    if let Some(return_url) = &request.return_url {
        body.insert("return_url".to_string(), json!(return_url));
    }
    Value::Object(body)
}

fn line_payload(item: &OrderItemDraft) -> Value {
    json!({
        "product_id": item.product_id,
        "order_quantity": item.quantity,
        "unit_price": item.unit_price,
        "subtotal": item.line_subtotal(),
    })
}

fn customer_payload(customer: &CustomerDraft) -> Value {
    let mut body = Map::new();
    if let Some(name) = &customer.name {
        body.insert("name".to_string(), json!(name));
    }
    if let Some(email) = &customer.email {
        body.insert("email".to_string(), json!(email));
    }
    if let Some(contact) = &customer.contact {
        body.insert("contact".to_string(), json!(contact));
    }
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_order(body: Value) -> UpstreamOrder {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_pivot_rows_flatten_into_items() {
        let raw = upstream_order(json!({
            "id": 5,
            "products": [
                {
                    "id": 31,
                    "name": "Beans",
                    "image": "https://img/31.png",
                    "pivot": {"order_quantity": 2, "unit_price": 3.5, "subtotal": 7.0}
                },
                {"id": 32, "name": "Rice", "pivot": {"order_quantity": 4, "unit_price": 2.0}}
            ]
        }));
        let order = order_from_upstream(raw);

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_id, 31);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].subtotal, 7.0);
        // Missing pivot subtotal is computed from quantity and price
        assert_eq!(order.items[1].subtotal, 8.0);
    }

    #[test]
    fn test_statuses_and_timestamps_parse_leniently() {
        let raw = upstream_order(json!({
            "id": 5,
            "order_status": "definitely-not-a-status",
            "created_at": "not a timestamp"
        }));
        let order = order_from_upstream(raw);
        assert_eq!(order.order_status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert!(order.created_at.is_none());

        let raw = upstream_order(json!({
            "id": 6,
            "order_status": "out_for_delivery",
            "payment_status": "paid",
            "created_at": "2026-03-01T09:30:00Z"
        }));
        let order = order_from_upstream(raw);
        assert_eq!(order.order_status, OrderStatus::OutForDelivery);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert!(order.created_at.is_some());
    }

    #[test]
    fn test_gps_tracking_derived_only_when_enabled() {
        let raw = upstream_order(json!({
            "id": 5,
            "tracking_enabled": true,
            "courier_job_id": "job-88",
            "courier_share_url": "https://track/88"
        }));
        let gps = order_from_upstream(raw).gps_tracking.unwrap();
        assert_eq!(gps.job_id, "job-88");
        assert_eq!(gps.share_url.as_deref(), Some("https://track/88"));

        // Disabled flag wins even when a job id is present
        let raw = upstream_order(json!({
            "id": 5,
            "tracking_enabled": false,
            "courier_job_id": "job-88"
        }));
        assert!(order_from_upstream(raw).gps_tracking.is_none());

        // Enabled without a job id has nothing to point at
        let raw = upstream_order(json!({"id": 5, "tracking_enabled": true}));
        assert!(order_from_upstream(raw).gps_tracking.is_none());
    }

    #[test]
    fn test_customer_assembled_from_flat_fields() {
        let raw = upstream_order(json!({
            "id": 5,
            "customer_id": 301,
            "customer_contact": "+15550000000"
        }));
        let order = order_from_upstream(raw);
        assert_eq!(order.customer_id, Some(301));
        let customer = order.customer.unwrap();
        assert_eq!(customer.id, Some(301));
        assert_eq!(customer.contact, Some(Redacted("+15550000000".to_string())));
    }

    #[test]
    fn test_nested_customer_wins_and_fills_contact() {
        let raw = upstream_order(json!({
            "id": 5,
            "customer_contact": "+15550000000",
            "customer": {"id": 7, "name": "Jane", "email": "jane@example.com"}
        }));
        let order = order_from_upstream(raw);
        assert_eq!(order.customer_id, Some(7));
        let customer = order.customer.unwrap();
        assert_eq!(customer.name.as_deref(), Some("Jane"));
        assert_eq!(customer.email, Some(Redacted("jane@example.com".to_string())));
        assert_eq!(customer.contact, Some(Redacted("+15550000000".to_string())));
    }

    #[test]
    fn test_create_response_attaches_payment_block() {
        let response: UpstreamCreateResponse = serde_json::from_value(json!({
            "order": {"id": 11, "order_status": "pending"},
            "payment": {"gateway": "stripe", "url": "https://pay", "status": "initiated"}
        }))
        .unwrap();
        let order = order_from_create(response);
        assert_eq!(order.id, 11);
        assert_eq!(order.payment.unwrap().url.as_deref(), Some("https://pay"));

        let response: UpstreamCreateResponse =
            serde_json::from_value(json!({"id": 12, "total": 9.0})).unwrap();
        let order = order_from_create(response);
        assert_eq!(order.id, 12);
        assert!(order.payment.is_none());
    }

    #[test]
    fn test_non_array_listing_yields_empty_page() {
        let page = orders_page_from_upstream(json!({"message": "no orders here"}), 2, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 0);

        let page = orders_page_from_upstream(json!(null), 1, 15);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_listing_skips_malformed_rows() {
        let body = json!([
            {"id": 1, "order_status": "completed"},
            {"this-row": "is broken"},
            {"id": 2}
        ]);
        let page = orders_page_from_upstream(body, 1, 15);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 2);
        assert_eq!(page.data[0].id, 1);
        assert_eq!(page.data[1].id, 2);
    }

    #[test]
    fn test_status_snapshot_defaults_to_pending() {
        let snapshot = status_snapshot_from_upstream(
            serde_json::from_value(json!({"order_status": "completed"})).unwrap(),
        );
        assert_eq!(snapshot.order_status, OrderStatus::Completed);
        assert_eq!(snapshot.payment_status, PaymentStatus::Pending);

        let snapshot =
            status_snapshot_from_upstream(serde_json::from_value(json!({})).unwrap());
        assert_eq!(snapshot.order_status, OrderStatus::Pending);
    }

    #[test]
    fn test_invoice_fields_renamed() {
        let invoice = invoice_from_upstream(
            serde_json::from_value(json!({
                "invoice_url": "https://inv/9.pdf",
                "invoice_number": "INV-9",
                "generated_at": "2026-02-01T00:00:00Z"
            }))
            .unwrap(),
        );
        assert_eq!(invoice.url.as_deref(), Some("https://inv/9.pdf"));
        assert_eq!(invoice.number.as_deref(), Some("INV-9"));
        assert!(invoice.issued_at.is_some());
    }

    #[test]
    fn test_tracking_checkpoints_renamed() {
        let tracking = tracking_from_upstream(
            serde_json::from_value(json!({
                "current_status": "in_transit",
                "checkpoints": [
                    {"time": "2026-02-01T08:00:00Z", "location": "Depot", "note": "Sorted"}
                ],
                "expected_delivery": "2026-02-03",
                "courier_name": "FastShip"
            }))
            .unwrap(),
        );
        assert_eq!(tracking.status.as_deref(), Some("in_transit"));
        assert_eq!(tracking.carrier.as_deref(), Some("FastShip"));
        assert_eq!(tracking.eta.as_deref(), Some("2026-02-03"));
        assert_eq!(tracking.events.len(), 1);
        assert_eq!(tracking.events[0].location.as_deref(), Some("Depot"));
        assert_eq!(tracking.events[0].description.as_deref(), Some("Sorted"));
    }

    #[test]
    fn test_analytics_fields_renamed() {
        let analytics = analytics_from_upstream(
            serde_json::from_value(json!({
                "order_count": 40,
                "revenue": 1200.5,
                "pending_count": 4,
                "completed_count": 30,
                "cancelled_count": 6,
                "average_value": 30.0125
            }))
            .unwrap(),
        );
        assert_eq!(analytics.total_orders, 40);
        assert_eq!(analytics.total_revenue, 1200.5);
        assert_eq!(analytics.pending_orders, 4);
        assert_eq!(analytics.completed_orders, 30);
        assert_eq!(analytics.cancelled_orders, 6);
        assert_eq!(analytics.average_order_value, 30.0125);
    }

    #[test]
    fn test_verification_fields_renamed() {
        let verification = verification_from_upstream(
            serde_json::from_value(json!({
                "unavailable_products": [31],
                "total_tax": 2.5,
                "shipping_charge": 4.0,
                "zone": {"name": "Z1"},
                "estimated_delivery_time": "45 min",
                "applicable_coupons": [{"code": "SAVE5"}]
            }))
            .unwrap(),
        );
        assert_eq!(verification.unavailable_items, vec![json!(31)]);
        assert_eq!(verification.tax, 2.5);
        assert_eq!(verification.shipping_charge, 4.0);
        assert_eq!(verification.shipping_zone, Some(json!({"name": "Z1"})));
        assert_eq!(verification.eta.as_deref(), Some("45 min"));
        assert_eq!(verification.coupons, vec![json!({"code": "SAVE5"})]);
    }

    #[test]
    fn test_registered_customer_sends_id_only() {
        let draft = OrderDraft {
            customer: CustomerDraft {
                id: Some(301),
                name: Some("Jane".to_string()),
                email: Some("jane@example.com".to_string()),
                contact: Some("+15550000000".to_string()),
            },
            items: vec![OrderItemDraft {
                product_id: 31,
                quantity: 2,
                unit_price: 3.5,
                subtotal: None,
            }],
            shop_id: Some(4),
            amount: 7.0,
            sales_tax: None,
            delivery_fee: None,
            paid_total: None,
            total: Some(7.0),
            payment_gateway: Some("stripe".to_string()),
            billing_address: None,
            shipping_address: None,
            delivery_time: None,
            note: None,
        };
        let payload = create_order_payload(&draft);

        assert_eq!(payload["customer_id"], json!(301));
        assert_eq!(payload["customer_contact"], json!("+15550000000"));
        assert!(payload.get("customer").is_none());
        assert_eq!(payload["products"][0]["order_quantity"], json!(2));
        assert_eq!(payload["products"][0]["subtotal"], json!(7.0));
        assert_eq!(payload["payment_gateway"], json!("stripe"));
    }

    #[test]
    fn test_guest_checkout_forwards_customer_block() {
        let draft = OrderDraft {
            customer: CustomerDraft {
                id: None,
                name: Some("Guest".to_string()),
                email: Some("guest@example.com".to_string()),
                contact: None,
            },
            items: vec![OrderItemDraft {
                product_id: 31,
                quantity: 1,
                unit_price: 3.5,
                subtotal: None,
            }],
            shop_id: None,
            amount: 3.5,
            sales_tax: None,
            delivery_fee: None,
            paid_total: None,
            total: None,
            payment_gateway: None,
            billing_address: None,
            shipping_address: None,
            delivery_time: None,
            note: None,
        };
        let payload = create_order_payload(&draft);

        assert!(payload.get("customer_id").is_none());
        assert_eq!(payload["customer"]["name"], json!("Guest"));
        assert_eq!(payload["customer"]["email"], json!("guest@example.com"));
    }

    #[test]
    fn test_patch_payload_only_includes_set_fields() {
        let patch = OrderPatch {
            order_status: Some(OrderStatus::Completed),
            note: Some("leave at the door".to_string()),
            ..OrderPatch::default()
        };
        let payload = update_order_payload(&patch);

        assert_eq!(payload["order_status"], json!("completed"));
        assert_eq!(payload["note"], json!("leave at the door"));
        assert!(payload.get("payment_status").is_none());
        assert!(payload.get("delivery_time").is_none());
    }

    #[test]
    fn test_initiate_payment_payload_uses_session_key() {
        let request = PaymentFirstRequest {
            session_id: "sess-42".to_string(),
            gateway: "stripe".to_string(),
            amount: 19.5,
            return_url: Some("https://store/return".to_string()),
        };
        let payload = initiate_payment_payload(&request);

        assert_eq!(payload["checkout_session"], json!("sess-42"));
        assert_eq!(payload["gateway"], json!("stripe"));
        assert_eq!(payload["amount"], json!(19.5));
        assert_eq!(payload["return_url"], json!("https://store/return"));
    }
}
