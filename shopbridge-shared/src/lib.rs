pub mod models;
pub mod pii;

pub use models::checkout::{
    CheckoutValidation, CheckoutVerification, Invoice, OrderAnalytics, OrderStatusSnapshot,
    PaymentInitiation, PaymentResult,
};
pub use models::order::{
    Address, CustomerInfo, GpsTracking, Order, OrderItem, OrderStatus, PaymentInfo, PaymentStatus,
};
pub use models::pagination::Paginated;
pub use models::tracking::{TrackingEvent, TrackingInfo};
