//! Tri-state session model.

use crate::types::User;

/// Authentication state as observed by the UI.
///
/// `Loading` is a first-class state, not a boolean: while a persisted token
/// is being resolved the caller must treat the session as neither
/// authenticated nor anonymous, otherwise an already-signed-in user sees a
/// login prompt flash on startup.
#[derive(Debug, Clone)]
pub enum SessionState {
    Loading,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
