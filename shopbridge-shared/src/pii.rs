use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for sensitive contact data that masks its value in Debug output.
#[derive(Clone, Deserialize, PartialEq)]
pub struct Redacted<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Redacted<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // API responses need the real value; the masking only targets log
        // macros like tracing::info!("{:?}", order).
        self.0.serialize(serializer)
    }
}

impl<T> Redacted<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
