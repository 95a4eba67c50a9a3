use serde::Serialize;

/// What an attendance event records. Serialized with the Russian literals
/// the flat table stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Arrived,
    Departed,
}

impl Action {
    /// Convert enum → table string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Arrived => "Прибыл",
            Action::Departed => "Убыл",
        }
    }

    /// Convert table string → enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Прибыл" => Some(Action::Arrived),
            "Убыл" => Some(Action::Departed),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Action::Arrived => "🟢",
            Action::Departed => "🔴",
        }
    }
}
