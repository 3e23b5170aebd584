//! The balances shown on the wallet card, and lenient ingestion of them.

use crate::balance::Balance;
use crate::currency::Currency;
use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

/// One snapshot of the three wallet balances.
///
/// The default view shows `0.00` in every slot. Deserializing applies the
/// same per-field defaulting as [`BalanceView::from_json`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct BalanceView {
    pub btc: Balance,
    pub usd: Balance,
    pub dtx: Balance,
}

impl BalanceView {
    pub fn new(btc: Balance, usd: Balance, dtx: Balance) -> Self {
        Self { btc, usd, dtx }
    }

    pub fn balance(&self, currency: Currency) -> Balance {
        match currency {
            Currency::BTC => self.btc,
            Currency::USD => self.usd,
            Currency::DTX => self.dtx,
        }
    }

    /// Yields `(currency, balance)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (Currency, Balance)> + '_ {
        Currency::iter().map(move |c| (c, self.balance(c)))
    }

    /// Builds a view from a JSON object such as `{"btc": "0.52", "usd": 31000.5}`.
    ///
    /// This never fails. Any key that is missing, null, negative, out of range
    /// or has more than two decimals shows as `0.00`, and a document that is
    /// not an object yields the default view. Rejected input is logged at
    /// warn level.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => Self::from(value),
            Err(e) => {
                dioxus_logger::tracing::warn!("invalid balance json: {}", e);
                Self::default()
            }
        }
    }
}

impl From<serde_json::Value> for BalanceView {
    fn from(value: serde_json::Value) -> Self {
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                dioxus_logger::tracing::warn!("balance json is not an object: {}", other);
                return Self::default();
            }
        };

        let field = |currency: Currency| -> Balance {
            let key = currency.code().to_ascii_lowercase();
            match map.get(&key) {
                None | Some(serde_json::Value::Null) => Balance::ZERO,
                Some(value) => Balance::from_json_value(value).unwrap_or_else(|e| {
                    dioxus_logger::tracing::warn!(
                        "ignoring {} balance {}: {}",
                        currency.code(),
                        value,
                        e
                    );
                    Balance::ZERO
                }),
            }
        };

        Self {
            btc: field(Currency::BTC),
            usd: field(Currency::USD),
            dtx: field(Currency::DTX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_rows_in_display_order() {
        let view = BalanceView::new(
            Balance::from_minor(1),
            Balance::from_minor(2),
            Balance::from_minor(3),
        );
        let rows: Vec<(Currency, u64)> = view
            .rows()
            .map(|(c, b)| (c, b.as_minor_units()))
            .collect();
        assert_eq!(
            rows,
            vec![(Currency::BTC, 1), (Currency::USD, 2), (Currency::DTX, 3)]
        );
    }

    #[test]
    fn test_from_json_accepts_strings_and_numbers() {
        let view = BalanceView::from_json(r#"{"btc": "0.52", "usd": 31000.5, "dtx": 7}"#);
        assert_eq!(
            view,
            BalanceView::new(
                Balance::from_minor(52),
                Balance::from_minor(3_100_050),
                Balance::from_minor(700),
            )
        );
    }

    #[test]
    fn test_from_json_defaults_bad_fields_only() {
        let view = BalanceView::from_json(r#"{"btc": "1.234", "usd": -4, "dtx": "2.50"}"#);
        assert_eq!(view.btc, Balance::ZERO);
        assert_eq!(view.usd, Balance::ZERO);
        assert_eq!(view.dtx, Balance::from_minor(250));
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case("[1, 2, 3]")]
    #[case("null")]
    #[case("{}")]
    #[case(r#"{"btc": null, "eth": "5"}"#)]
    fn test_from_json_falls_back_to_default(#[case] input: &str) {
        assert_eq!(BalanceView::from_json(input), BalanceView::default());
    }

    #[rstest]
    #[case(r#"{"btc": 184467440737095517}"#)]
    #[case(r#"{"btc": 184467440737095517.5}"#)]
    #[case(r#"{"btc": "184467440737095517"}"#)]
    #[case(r#"{"btc": 0.129}"#)]
    #[case(r#"{"btc": "0.129"}"#)]
    fn test_from_json_rejects_out_of_range_and_over_precise(#[case] input: &str) {
        assert_eq!(BalanceView::from_json(input).btc, Balance::ZERO);
    }

    #[test]
    fn test_largest_whole_balance_is_kept() {
        let view = BalanceView::from_json(r#"{"usd": 184467440737095516}"#);
        assert_eq!(view.usd.as_minor_units(), 18_446_744_073_709_551_600);
    }

    #[test]
    fn test_serde_uses_display_strings() {
        let view = BalanceView::new(Balance::ZERO, Balance::from_minor(1999), Balance::ZERO);
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"btc": "0.00", "usd": "19.99", "dtx": "0.00"})
        );
        assert_eq!(serde_json::from_value::<BalanceView>(json).unwrap(), view);
    }

    #[rstest]
    #[case(r#"{"btc": null, "usd": "1.234", "dtx": "3"}"#)]
    #[case(r#"{"dtx": 3, "usd": -1}"#)]
    #[case(r#"{"btc": "oops", "dtx": "3.00"}"#)]
    fn test_deserialize_matches_from_json(#[case] input: &str) {
        let derived: BalanceView = serde_json::from_str(input).unwrap();
        assert_eq!(derived, BalanceView::from_json(input));
        assert_eq!(derived.dtx, Balance::from_minor(300));
        assert_eq!(derived.btc, Balance::ZERO);
    }
}
