//! Barbershop services offered in the form

use serde::{Deserialize, Serialize};

/// Service the client wants to book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Service {
    /// Haircut
    #[default]
    #[serde(rename = "tuns")]
    Tuns,
    /// Beard trim
    #[serde(rename = "aranjat barba")]
    AranjatBarba,
    /// Haircut + beard
    #[serde(rename = "pachet complet")]
    PachetComplet,
}

impl Service {
    /// All services, in selector order
    pub const ALL: [Self; 3] = [Self::Tuns, Self::AranjatBarba, Self::PachetComplet];

    /// Wire value sent to the backend
    pub fn value(self) -> &'static str {
        match self {
            Self::Tuns => "tuns",
            Self::AranjatBarba => "aranjat barba",
            Self::PachetComplet => "pachet complet",
        }
    }

    /// Label shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Tuns => "Tuns",
            Self::AranjatBarba => "Aranjat barbă",
            Self::PachetComplet => "Pachet complet",
        }
    }

    /// Looks a service up by its wire value.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    fn index(self) -> usize {
        match self {
            Self::Tuns => 0,
            Self::AranjatBarba => 1,
            Self::PachetComplet => 2,
        }
    }

    /// Next option in the selector (wraps around)
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option in the selector (wraps around)
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
