pub mod requests;
pub mod service;
pub mod transform;
pub mod upstream;

pub use requests::{
    CheckoutDraft, CustomerDraft, ListOptions, OrderDraft, OrderItemDraft, OrderListQuery,
    OrderPatch, PaymentFirstRequest, PaymentPayload,
};
pub use service::{OrderService, ServiceError};
