//! Request payloads accepted by the facade, validated before any network call.

use shopbridge_shared::models::order::{Address, OrderStatus, PaymentStatus};
use shopbridge_shared::models::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// New-order submission from the storefront.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer: CustomerDraft,
    pub items: Vec<OrderItemDraft>,
    pub shop_id: Option<i64>,
    pub amount: f64,
    pub sales_tax: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub paid_total: Option<f64>,
    pub total: Option<f64>,
    pub payment_gateway: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub delivery_time: Option<String>,
    pub note: Option<String>,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("order needs at least one item".to_string());
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(format!(
                "item {} has zero quantity",
                item.product_id
            ));
        }
        Ok(())
    }
}

/// Customer block of a draft. A missing id means guest checkout and the
/// whole block is forwarded so the remote can create the customer.
#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderItemDraft {
    pub product_id: i64,
    pub quantity: u32,
    pub unit_price: f64,
    /// Line total; computed as quantity x unit_price when left out.
    pub subtotal: Option<f64>,
}

impl OrderItemDraft {
    pub fn line_subtotal(&self) -> f64 {
        self.subtotal
            .unwrap_or(self.quantity as f64 * self.unit_price)
    }
}

/// Partial update for an existing order; only set fields are sent.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub order_status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_time: Option<String>,
    pub note: Option<String>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
}

/// Filters for the order listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub customer_id: Option<i64>,
    pub tracking_number: Option<String>,
    pub search: Option<String>,
    pub shop_id: Option<i64>,
}

impl OrderListQuery {
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Query-string pairs for the remote listing endpoints.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.effective_limit().to_string()),
            ("page", self.effective_page().to_string()),
        ];
        if let Some(customer_id) = self.customer_id {
            pairs.push(("customer_id", customer_id.to_string()));
        }
        if let Some(tracking_number) = &self.tracking_number {
            pairs.push(("tracking_number", tracking_number.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(shop_id) = self.shop_id {
            pairs.push(("shop_id", shop_id.to_string()));
        }
        pairs
    }
}

/// Pagination window for the by-customer and by-shop listings.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

/// Charge an existing order through a gateway.
#[derive(Debug, Clone)]
pub struct PaymentPayload {
    pub gateway: String,
    pub token: Option<String>,
    /// Override amount; the remote falls back to the order total.
    pub amount: Option<f64>,
}

impl PaymentPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.gateway.trim().is_empty() {
            return Err("payment gateway is empty".to_string());
        }
        if let Some(amount) = self.amount {
            if amount <= 0.0 {
                return Err("payment amount must be positive".to_string());
            }
        }
        Ok(())
    }
}

/// Cart submitted for stock and pricing verification.
#[derive(Debug, Clone)]
pub struct CheckoutDraft {
    pub customer_id: Option<i64>,
    pub items: Vec<OrderItemDraft>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub coupon_code: Option<String>,
}

impl CheckoutDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("checkout needs at least one item".to_string());
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(format!(
                "item {} has zero quantity",
                item.product_id
            ));
        }
        Ok(())
    }
}

/// Kick off the payment-first flow for a validated checkout session.
#[derive(Debug, Clone)]
pub struct PaymentFirstRequest {
    pub session_id: String,
    pub gateway: String,
    pub amount: f64,
    pub return_url: Option<String>,
}

impl PaymentFirstRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.session_id.trim().is_empty() {
            return Err("checkout session id is empty".to_string());
        }
        if self.gateway.trim().is_empty() {
            return Err("payment gateway is empty".to_string());
        }
        if self.amount <= 0.0 {
            return Err("payment amount must be positive".to_string());
        }
        Ok(())
    }
}
