//! Shared components. `pico` holds the layout wrappers; `balance_display` is the wallet card.
pub mod balance_display;
pub mod pico;
