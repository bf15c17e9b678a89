pub mod checkout;
pub mod order;
pub mod pagination;
pub mod tracking;
