//! The wallet card: BTC, USD and DTX balances with their conversion note.

use crate::balance_view::BalanceView;
use dioxus::prelude::*;

pub const HEADING: &str = "Wallet Balances";

pub const DISCLAIMER: &str =
    "Conversion logic for USD and DTX balances uses the latest BTC exchange rates.";

/// Renders one labelled row per currency, titled with the currency's full
/// name. Each value sits in a `span` whose id is the currency's slot id, so an
/// outside data layer can target it.
///
/// With no `view` every slot shows `0.00`.
#[component]
pub fn BalanceDisplay(#[props(default)] view: BalanceView) -> Element {
    dioxus_logger::tracing::debug!("rendering balances: {:?}", view);

    rsx! {
        div {
            class: "wallet-card",
            h2 { "{HEADING}" }
            for (currency, balance) in view.rows() {
                p {
                    key: "{currency.slot_id()}",
                    title: currency.name(),
                    "{currency.label()} "
                    span { id: currency.slot_id(), "{balance}" }
                }
            }
            small { "* {DISCLAIMER}" }
        }
    }
}
