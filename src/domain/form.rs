//! Raw form fields and their query-string representation.
//!
//! The query string is the only persisted state: a calculation is fully
//! described by `?stock=..&rsu=..&eso=..&strikePrice=..&currency=..`.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// The fixed set of input fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Stock,
    Rsu,
    Eso,
    StrikePrice,
    Currency,
}

impl FieldId {
    /// All fields in display and serialization order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Stock,
        FieldId::Rsu,
        FieldId::Eso,
        FieldId::StrikePrice,
        FieldId::Currency,
    ];

    /// Query parameter name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            FieldId::Stock => "stock",
            FieldId::Rsu => "rsu",
            FieldId::Eso => "eso",
            FieldId::StrikePrice => "strikePrice",
            FieldId::Currency => "currency",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::Stock => "Stock symbol or price ($)",
            FieldId::Rsu => "RSUs (per month)",
            FieldId::Eso => "ESOs (per month)",
            FieldId::StrikePrice => "Strike price ($)",
            FieldId::Currency => "Currency (symbol)",
        }
    }

    /// Look up a field by its query parameter name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// Raw string values for every field. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub stock: String,
    pub rsu: String,
    pub eso: String,
    pub strike_price: String,
    pub currency: String,
}

impl FormFields {
    /// Parse a URL query string. A leading `?` is tolerated, unknown keys are
    /// ignored, and the first occurrence of a repeated key wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut fields = Self::default();
        let mut seen = [false; FieldId::ALL.len()];

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(id) = FieldId::from_key(&key) else {
                continue;
            };
            let slot = id as usize;
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            fields.set(id, value.into_owned());
        }

        fields
    }

    /// Serialize every field, in fixed order, as a URL query string.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for id in FieldId::ALL {
            serializer.append_pair(id.key(), self.get(id));
        }
        serializer.finish()
    }

    #[must_use]
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::Stock => &self.stock,
            FieldId::Rsu => &self.rsu,
            FieldId::Eso => &self.eso,
            FieldId::StrikePrice => &self.strike_price,
            FieldId::Currency => &self.currency,
        }
    }

    pub fn set(&mut self, id: FieldId, value: String) {
        match id {
            FieldId::Stock => self.stock = value,
            FieldId::Rsu => self.rsu = value,
            FieldId::Eso => self.eso = value,
            FieldId::StrikePrice => self.strike_price = value,
            FieldId::Currency => self.currency = value,
        }
    }

    /// Replace fields with any values present in `overrides`.
    #[must_use]
    pub fn merged(mut self, overrides: impl IntoIterator<Item = (FieldId, Option<String>)>) -> Self {
        for (id, value) in overrides {
            if let Some(value) = value {
                self.set(id, value);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let fields =
            FormFields::from_query("?stock=AAPL&rsu=10&eso=5&strikePrice=120.5&currency=eur");

        assert_eq!(fields.stock, "AAPL");
        assert_eq!(fields.rsu, "10");
        assert_eq!(fields.eso, "5");
        assert_eq!(fields.strike_price, "120.5");
        assert_eq!(fields.currency, "eur");
    }

    #[test]
    fn missing_and_unknown_keys() {
        let fields = FormFields::from_query("rsu=3&foo=bar");

        assert_eq!(fields.rsu, "3");
        assert_eq!(fields.stock, "");
        assert_eq!(fields.strike_price, "");
    }

    #[test]
    fn first_repeated_key_wins() {
        let fields = FormFields::from_query("rsu=1&rsu=2");
        assert_eq!(fields.rsu, "1");
    }

    #[test]
    fn decodes_percent_and_plus() {
        let fields = FormFields::from_query("stock=BRK%2EB&currency=+usd");
        assert_eq!(fields.stock, "BRK.B");
        assert_eq!(fields.currency, " usd");
    }

    #[test]
    fn query_keeps_empty_fields_in_order() {
        let fields = FormFields {
            stock: "GOOG".into(),
            rsu: "4".into(),
            ..FormFields::default()
        };

        assert_eq!(
            fields.to_query(),
            "stock=GOOG&rsu=4&eso=&strikePrice=&currency="
        );
    }

    #[test]
    fn query_round_trip() {
        let fields = FormFields {
            stock: "BRK.B".into(),
            rsu: "1.5".into(),
            eso: "2".into(),
            strike_price: "30".into(),
            currency: "gbp".into(),
        };

        assert_eq!(FormFields::from_query(&fields.to_query()), fields);
    }

    #[test]
    fn overrides_replace_only_present_values() {
        let base = FormFields::from_query("stock=AAPL&rsu=1");
        let merged = base.merged([
            (FieldId::Rsu, Some("9".to_string())),
            (FieldId::Stock, None),
        ]);

        assert_eq!(merged.stock, "AAPL");
        assert_eq!(merged.rsu, "9");
    }

    #[test]
    fn field_keys_round_trip() {
        for id in FieldId::ALL {
            assert_eq!(FieldId::from_key(id.key()), Some(id));
        }
        assert_eq!(FieldId::from_key("strike_price"), None);
    }
}
