//! Defines the currencies shown on the wallet card.

use serde::Deserialize;
use serde::Serialize;

/// A currency with a balance slot on the wallet card.
///
/// Variants are declared in display order; iterating with
/// [`strum::IntoEnumIterator`] yields BTC, USD, DTX.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    BTC, // Bitcoin
    USD, // United States Dollar
    DTX, // DTX token
}

impl Currency {
    /// Returns the currency code (e.g., "BTC").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BTC => "Bitcoin",
            Self::USD => "United States Dollar",
            Self::DTX => "DTX Token",
        }
    }

    /// The row label shown in front of the balance slot.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BTC => "BTC Balance:",
            Self::USD => "USD Balance:",
            Self::DTX => "DTX Balance:",
        }
    }

    /// DOM id of the balance slot, for external code that updates it in place.
    pub fn slot_id(&self) -> &'static str {
        match self {
            Self::BTC => "btc-balance",
            Self::USD => "usd-balance",
            Self::DTX => "dtx-balance",
        }
    }
}
