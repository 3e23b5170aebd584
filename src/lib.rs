// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod balance;
pub mod balance_view;
pub mod components;
pub mod currency;

pub use balance::Balance;
pub use balance::ParseBalanceError;
pub use balance_view::BalanceView;
pub use components::balance_display::BalanceDisplay;
pub use currency::Currency;

use components::pico::Container;

/// Root component. Live balances are not wired in yet, so the card shows its defaults.
#[component]
pub fn App() -> Element {
    rsx! {
        Container {
            BalanceDisplay {}
        }
    }
}
