//! The order facade: one method per storefront operation.
//!
//! Control flow is strictly linear per call: build the request payload,
//! hand it to the HTTP adapter, map the response back. No state is kept
//! between calls; every order is rebuilt from the latest remote answer.

use serde_json::{json, Value};

use shopbridge_client::{ClientError, HttpClient, UpstreamConfig};
use shopbridge_shared::models::checkout::{
    CheckoutValidation, CheckoutVerification, Invoice, OrderAnalytics, OrderStatusSnapshot,
    PaymentInitiation, PaymentResult,
};
use shopbridge_shared::models::order::{Order, OrderStatus, PaymentStatus};
use shopbridge_shared::models::pagination::Paginated;
use shopbridge_shared::models::tracking::TrackingInfo;

use crate::requests::{
    CheckoutDraft, ListOptions, OrderDraft, OrderListQuery, OrderPatch, PaymentFirstRequest,
    PaymentPayload,
};
use crate::transform;
use crate::upstream::{
    UpstreamAnalytics, UpstreamCheckoutValidation, UpstreamCheckoutVerification,
    UpstreamCreateResponse, UpstreamInvoice, UpstreamOrder, UpstreamPaymentInitiation,
    UpstreamPaymentOutcome, UpstreamStatusSnapshot, UpstreamTracking,
};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Upstream(#[from] ClientError),
}

/// Facade over the remote commerce API's order endpoints.
pub struct OrderService {
    http: HttpClient,
}

impl OrderService {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Wrap an already-built adapter, e.g. to share it across facades.
    pub fn from_client(http: HttpClient) -> Self {
        Self { http }
    }

    // ========================================================================
    // Order lifecycle
    // ========================================================================

    /// POST /ecommerce/orders
    /// Submit a new order. When the remote answers `{order, payment}` the
    /// gateway payment block ends up on the returned order.
    pub async fn create(
        &self,
        draft: &OrderDraft,
        token: Option<&str>,
    ) -> Result<Order, ServiceError> {
        draft.validate().map_err(ServiceError::Validation)?;
        let payload = transform::create_order_payload(draft);
        let response: UpstreamCreateResponse =
            self.http.post("/ecommerce/orders", &payload, token).await?;
        Ok(transform::order_from_create(response))
    }

    /// GET /ecommerce/orders
    /// List orders with the given filters. A body that is not an array reads
    /// as an empty page rather than an error.
    pub async fn get_orders(
        &self,
        query: &OrderListQuery,
        token: Option<&str>,
    ) -> Result<Paginated<Order>, ServiceError> {
        let body: Value = self
            .http
            .get("/ecommerce/orders", &query.to_query(), token)
            .await?;
        Ok(transform::orders_page_from_upstream(
            body,
            query.effective_page(),
            query.effective_limit(),
        ))
    }

    /// GET /ecommerce/orders/{id}, falling back to the tracking endpoint
    /// Storefronts pass whatever identifier they have; when the by-id lookup
    /// fails for any reason the same value is retried as a tracking number.
    pub async fn get_order_by_id_or_tracking_number(
        &self,
        identifier: &str,
        token: Option<&str>,
    ) -> Result<Order, ServiceError> {
        if identifier.trim().is_empty() {
            return Err(ServiceError::Validation("order identifier is empty".to_string()));
        }

        let by_id = format!("/ecommerce/orders/{}", identifier);
        match self.http.get::<UpstreamOrder>(&by_id, &[], token).await {
            Ok(raw) => Ok(transform::order_from_upstream(raw)),
            Err(err) => {
                tracing::debug!(
                    "Order lookup by id failed for {}: {}; retrying as tracking number",
                    identifier,
                    err
                );
                let by_tracking = format!("/ecommerce/orders/tracking/{}", identifier);
                let raw: UpstreamOrder = self.http.get(&by_tracking, &[], token).await?;
                Ok(transform::order_from_upstream(raw))
            }
        }
    }

    /// PUT /orders/{id}
    /// Apply a partial update; only the fields set on the patch are sent.
    pub async fn update(
        &self,
        id: i64,
        patch: &OrderPatch,
        token: Option<&str>,
    ) -> Result<Order, ServiceError> {
        let payload = transform::update_order_payload(patch);
        let raw: UpstreamOrder = self
            .http
            .put(&format!("/orders/{}", id), &payload, token)
            .await?;
        Ok(transform::order_from_upstream(raw))
    }

    /// POST /orders/{id}/cancel
    pub async fn cancel(&self, id: i64, token: Option<&str>) -> Result<Order, ServiceError> {
        let raw: UpstreamOrder = self
            .http
            .post(&format!("/orders/{}/cancel", id), &json!({}), token)
            .await?;
        Ok(transform::order_from_upstream(raw))
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// GET /orders/{id}/status
    /// Missing statuses in the response default to pending.
    pub async fn get_order_status(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<OrderStatusSnapshot, ServiceError> {
        let raw: UpstreamStatusSnapshot = self
            .http
            .get(&format!("/orders/{}/status", id), &[], token)
            .await?;
        Ok(transform::status_snapshot_from_upstream(raw))
    }

    /// PUT /orders/{id}/status
    pub async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
        token: Option<&str>,
    ) -> Result<Order, ServiceError> {
        let payload = json!({ "order_status": status.as_str() });
        let raw: UpstreamOrder = self
            .http
            .put(&format!("/orders/{}/status", id), &payload, token)
            .await?;
        Ok(transform::order_from_upstream(raw))
    }

    /// PUT /orders/{id}/payment-status
    pub async fn update_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
        token: Option<&str>,
    ) -> Result<Order, ServiceError> {
        let payload = json!({ "payment_status": status.as_str() });
        let raw: UpstreamOrder = self
            .http
            .put(&format!("/orders/{}/payment-status", id), &payload, token)
            .await?;
        Ok(transform::order_from_upstream(raw))
    }

    // ========================================================================
    // Listings and lookups
    // ========================================================================

    /// GET /orders?customer_id=...
    pub async fn get_orders_by_customer(
        &self,
        customer_id: i64,
        options: &ListOptions,
        token: Option<&str>,
    ) -> Result<Paginated<Order>, ServiceError> {
        let query = OrderListQuery {
            customer_id: Some(customer_id),
            limit: options.limit,
            page: options.page,
            ..OrderListQuery::default()
        };
        let body: Value = self.http.get("/orders", &query.to_query(), token).await?;
        Ok(transform::orders_page_from_upstream(
            body,
            query.effective_page(),
            query.effective_limit(),
        ))
    }

    /// GET /orders?shop_id=...
    pub async fn get_orders_by_shop(
        &self,
        shop_id: i64,
        options: &ListOptions,
        token: Option<&str>,
    ) -> Result<Paginated<Order>, ServiceError> {
        let query = OrderListQuery {
            shop_id: Some(shop_id),
            limit: options.limit,
            page: options.page,
            ..OrderListQuery::default()
        };
        let body: Value = self.http.get("/orders", &query.to_query(), token).await?;
        Ok(transform::orders_page_from_upstream(
            body,
            query.effective_page(),
            query.effective_limit(),
        ))
    }

    /// GET /orders/{id}/invoice
    pub async fn get_order_invoice(
        &self,
        id: i64,
        token: Option<&str>,
    ) -> Result<Invoice, ServiceError> {
        let raw: UpstreamInvoice = self
            .http
            .get(&format!("/orders/{}/invoice", id), &[], token)
            .await?;
        Ok(transform::invoice_from_upstream(raw))
    }

    /// GET /orders/tracking/{tracking_number}
    pub async fn get_order_tracking(
        &self,
        tracking_number: &str,
        token: Option<&str>,
    ) -> Result<TrackingInfo, ServiceError> {
        if tracking_number.trim().is_empty() {
            return Err(ServiceError::Validation("tracking number is empty".to_string()));
        }
        let raw: UpstreamTracking = self
            .http
            .get(&format!("/orders/tracking/{}", tracking_number), &[], token)
            .await?;
        Ok(transform::tracking_from_upstream(raw))
    }

    /// GET /orders/analytics
    /// The sole non-raising path: any failure is logged and reads as the
    /// all-zero aggregation so dashboards render an empty state.
    pub async fn get_order_analytics(
        &self,
        shop_id: Option<i64>,
        token: Option<&str>,
    ) -> OrderAnalytics {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(shop_id) = shop_id {
            query.push(("shop_id", shop_id.to_string()));
        }
        match self
            .http
            .get::<UpstreamAnalytics>("/orders/analytics", &query, token)
            .await
        {
            Ok(raw) => transform::analytics_from_upstream(raw),
            Err(err) => {
                tracing::warn!("Analytics fetch failed: {}; returning zeroed totals", err);
                OrderAnalytics::default()
            }
        }
    }

    // ========================================================================
    // Payments and checkout
    // ========================================================================

    /// POST /orders/{id}/payment
    /// Charge an existing order through the configured gateway.
    pub async fn process_payment(
        &self,
        id: i64,
        payment: &PaymentPayload,
        token: Option<&str>,
    ) -> Result<PaymentResult, ServiceError> {
        payment.validate().map_err(ServiceError::Validation)?;
        let payload = transform::process_payment_payload(payment);
        let raw: UpstreamPaymentOutcome = self
            .http
            .post(&format!("/orders/{}/payment", id), &payload, token)
            .await?;
        Ok(transform::payment_outcome_from_upstream(raw))
    }

    /// POST /ecommerce/orders/verify-checkout
    /// Check stock, taxes and shipping for a cart before it becomes an order.
    pub async fn verify_checkout(
        &self,
        draft: &CheckoutDraft,
        token: Option<&str>,
    ) -> Result<CheckoutVerification, ServiceError> {
        draft.validate().map_err(ServiceError::Validation)?;
        let payload = transform::verify_checkout_payload(draft);
        let raw: UpstreamCheckoutVerification = self
            .http
            .post("/ecommerce/orders/verify-checkout", &payload, token)
            .await?;
        Ok(transform::verification_from_upstream(raw))
    }

    /// POST /ecommerce/checkout/validate
    /// Step one of the payment-first flow: is this checkout payable?
    pub async fn validate_checkout_for_payment(
        &self,
        draft: &CheckoutDraft,
        token: Option<&str>,
    ) -> Result<CheckoutValidation, ServiceError> {
        draft.validate().map_err(ServiceError::Validation)?;
        let payload = transform::verify_checkout_payload(draft);
        let raw: UpstreamCheckoutValidation = self
            .http
            .post("/ecommerce/checkout/validate", &payload, token)
            .await?;
        Ok(transform::validation_from_upstream(raw))
    }

    /// POST /ecommerce/payments/initiate-payment-first
    /// Step two: open a gateway transaction for the validated session.
    pub async fn initiate_payment_first(
        &self,
        request: &PaymentFirstRequest,
        token: Option<&str>,
    ) -> Result<PaymentInitiation, ServiceError> {
        request.validate().map_err(ServiceError::Validation)?;
        let payload = transform::initiate_payment_payload(request);
        let raw: UpstreamPaymentInitiation = self
            .http
            .post("/ecommerce/payments/initiate-payment-first", &payload, token)
            .await?;
        Ok(transform::initiation_from_upstream(raw))
    }

    /// GET /ecommerce/checkout/session/{id}
    /// The session body is remote-defined and returned untouched.
    pub async fn get_checkout_session(
        &self,
        session_id: &str,
        token: Option<&str>,
    ) -> Result<Value, ServiceError> {
        if session_id.trim().is_empty() {
            return Err(ServiceError::Validation("checkout session id is empty".to_string()));
        }
        let body: Value = self
            .http
            .get(&format!("/ecommerce/checkout/session/{}", session_id), &[], token)
            .await?;
        Ok(body)
    }

    /// POST /ecommerce/payments/verify-for-order
    /// Step three: confirm the gateway outcome and settle the order. Safe to
    /// repeat for the same checkout; the remote treats it idempotently.
    pub async fn verify_payment_for_order(
        &self,
        checkout_id: &str,
        token: Option<&str>,
    ) -> Result<Value, ServiceError> {
        if checkout_id.trim().is_empty() {
            return Err(ServiceError::Validation("checkout id is empty".to_string()));
        }
        let payload = json!({ "checkout_id": checkout_id });
        let body: Value = self
            .http
            .post("/ecommerce/payments/verify-for-order", &payload, token)
            .await?;
        Ok(body)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// GET /health on the remote; any failure reads as unhealthy.
    pub async fn upstream_healthy(&self) -> bool {
        self.http.health_check().await
    }
}
