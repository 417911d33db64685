//! Postal address sub-object attached to user profiles.

use serde::{Deserialize, Serialize};

/// Optional postal address. Every field is optional; an address with all
/// fields `None` is treated as absent at the API boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Address {
    /// `true` when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.line1.is_none() && self.city.is_none() && self.state.is_none() && self.zip.is_none()
    }
}
