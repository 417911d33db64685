//! Pet species enumeration.

use serde::{Deserialize, Serialize};

/// Kind of animal a pet record describes.
///
/// Wire format: lowercase string (`"dog"`, `"cat"`, ...). Unknown values are
/// rejected at the API boundary; records created without a species default to
/// [`Species::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Hamster,
    Bird,
    Fish,
    Turtle,
    Other,
}

impl Default for Species {
    fn default() -> Self {
        Self::Other
    }
}

impl Species {
    /// Parse from the stored/wire string. Returns `None` for unknown values.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "dog" => Some(Self::Dog),
            "cat" => Some(Self::Cat),
            "rabbit" => Some(Self::Rabbit),
            "hamster" => Some(Self::Hamster),
            "bird" => Some(Self::Bird),
            "fish" => Some(Self::Fish),
            "turtle" => Some(Self::Turtle),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Stored/wire string for this species.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Rabbit => "rabbit",
            Self::Hamster => "hamster",
            Self::Bird => "bird",
            Self::Fish => "fish",
            Self::Turtle => "turtle",
            Self::Other => "other",
        }
    }
}
