//! Filter predicate builder for the product catalog.
//!
//! Translates a request's recognized query parameters into a parameterized
//! SQL predicate set. Every recognized key maps to exactly one typed
//! predicate constructor in [`RECOGNIZED_KEYS`]; values are always bound
//! parameters and never concatenated into SQL text. Unrecognized keys are
//! ignored, and keys with empty values contribute nothing.
//!
//! Malformed numeric values are rejected up front rather than passed to the
//! store, so a bad `min_Price=abc` fails the request before any query runs.
//! Results are always ordered by price ascending.

use std::collections::HashMap;

use sqlx::{Postgres, QueryBuilder};
use thiserror::Error;

/// Column list shared by every catalog query.
pub const PRODUCT_COLUMNS: &str = "id, brand, model, ram, processor, front_camera, back_camera, \
     price, battery_capacity, mobile_weight, screen_size, launched_year";

/// [`PRODUCT_COLUMNS`] with a `p.` table alias, for joined queries.
/// Must stay column-for-column in sync with [`PRODUCT_COLUMNS`].
pub const PRODUCT_COLUMNS_ALIASED: &str =
    "p.id, p.brand, p.model, p.ram, p.processor, p.front_camera, p.back_camera, \
     p.price, p.battery_capacity, p.mobile_weight, p.screen_size, p.launched_year";

/// Errors produced while interpreting filter parameters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A recognized numeric key carried a value that does not parse.
    #[error("invalid numeric value for {key}: {value}")]
    InvalidNumber {
        /// The offending query parameter name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// How a predicate compares its column against the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `column = value`
    Equals,
    /// `column LIKE '%value%'` (wildcards are part of the bound value).
    /// `%` and `_` inside the user's value are NOT escaped and keep their
    /// LIKE meaning; the value is still bound, never spliced into SQL.
    Contains,
    /// `column >= value`
    AtLeast,
    /// `column <= value`
    AtMost,
}

impl Comparison {
    /// SQL operator fragment, with surrounding spaces.
    const fn sql(self) -> &'static str {
        match self {
            Self::Equals => " = ",
            Self::Contains => " LIKE ",
            Self::AtLeast => " >= ",
            Self::AtMost => " <= ",
        }
    }
}

/// How a raw query-parameter string is parsed before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Bound as text, verbatim.
    Text,
    /// Parsed as a signed integer.
    Integer,
    /// Parsed as a finite float.
    Float,
}

/// One entry of the fixed filter-key table.
#[derive(Debug, Clone, Copy)]
pub struct RecognizedKey {
    /// Query parameter name as the client sends it.
    pub key: &'static str,
    /// Product table column the predicate applies to.
    pub column: &'static str,
    /// Predicate shape.
    pub comparison: Comparison,
    /// Value parse rule.
    pub value: ValueKind,
}

/// The exhaustive table of recognized filter keys.
///
/// Table order is also predicate order, so the generated SQL is
/// deterministic for a given parameter set.
pub const RECOGNIZED_KEYS: &[RecognizedKey] = &[
    RecognizedKey {
        key: "Brand",
        column: "brand",
        comparison: Comparison::Equals,
        value: ValueKind::Text,
    },
    RecognizedKey {
        key: "Model",
        column: "model",
        comparison: Comparison::Contains,
        value: ValueKind::Text,
    },
    RecognizedKey {
        key: "RAM",
        column: "ram",
        comparison: Comparison::Equals,
        value: ValueKind::Float,
    },
    RecognizedKey {
        key: "Processor",
        column: "processor",
        comparison: Comparison::Equals,
        value: ValueKind::Text,
    },
    RecognizedKey {
        key: "Front_Camera",
        column: "front_camera",
        comparison: Comparison::Equals,
        value: ValueKind::Text,
    },
    RecognizedKey {
        key: "Back_Camera",
        column: "back_camera",
        comparison: Comparison::Equals,
        value: ValueKind::Text,
    },
    RecognizedKey {
        key: "Launched_Year",
        column: "launched_year",
        comparison: Comparison::Equals,
        value: ValueKind::Integer,
    },
    RecognizedKey {
        key: "min_Price",
        column: "price",
        comparison: Comparison::AtLeast,
        value: ValueKind::Integer,
    },
    RecognizedKey {
        key: "max_Price",
        column: "price",
        comparison: Comparison::AtMost,
        value: ValueKind::Integer,
    },
    RecognizedKey {
        key: "min_Battery_Capacity",
        column: "battery_capacity",
        comparison: Comparison::AtLeast,
        value: ValueKind::Integer,
    },
    RecognizedKey {
        key: "max_Battery_Capacity",
        column: "battery_capacity",
        comparison: Comparison::AtMost,
        value: ValueKind::Integer,
    },
    RecognizedKey {
        key: "min_Mobile_Weight",
        column: "mobile_weight",
        comparison: Comparison::AtLeast,
        value: ValueKind::Float,
    },
    RecognizedKey {
        key: "max_Mobile_Weight",
        column: "mobile_weight",
        comparison: Comparison::AtMost,
        value: ValueKind::Float,
    },
    RecognizedKey {
        key: "min_Screen_Size",
        column: "screen_size",
        comparison: Comparison::AtLeast,
        value: ValueKind::Float,
    },
    RecognizedKey {
        key: "max_Screen_Size",
        column: "screen_size",
        comparison: Comparison::AtMost,
        value: ValueKind::Float,
    },
];

/// A parsed value ready to be bound.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// A single SQL comparison condition contributed by one recognized key.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Product table column.
    pub column: &'static str,
    /// Comparison operator.
    pub comparison: Comparison,
    /// Bound value.
    pub value: BindValue,
}

/// The conjunction of predicates derived from one request.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    predicates: Vec<Predicate>,
}

impl FilterQuery {
    /// Interpret a request's query parameters against [`RECOGNIZED_KEYS`].
    ///
    /// Absent and empty-string values are omitted; unrecognized keys are
    /// ignored. Zero surviving predicates yields an unconditional scan.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidNumber`] if a recognized numeric key
    /// carries a value that does not parse to a finite number.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FilterError> {
        let mut predicates = Vec::new();

        for spec in RECOGNIZED_KEYS {
            let Some(raw) = params.get(spec.key) else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }

            let value = parse_value(spec, raw)?;
            predicates.push(Predicate {
                column: spec.column,
                comparison: spec.comparison,
                value,
            });
        }

        Ok(Self { predicates })
    }

    /// The predicates in table order.
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// True if no recognized key contributed a predicate.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Assemble the full catalog query with bound parameters.
    ///
    /// The result always ends with `ORDER BY price ASC`.
    #[must_use]
    pub fn to_query_builder(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM product"));

        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push(predicate.column);
            builder.push(predicate.comparison.sql());
            match &predicate.value {
                BindValue::Text(s) => builder.push_bind(s.clone()),
                BindValue::Integer(n) => builder.push_bind(*n),
                BindValue::Float(f) => builder.push_bind(*f),
            };
        }

        builder.push(" ORDER BY price ASC");
        builder
    }
}

/// Parse one raw parameter value per its table entry.
fn parse_value(spec: &RecognizedKey, raw: &str) -> Result<BindValue, FilterError> {
    let invalid = || FilterError::InvalidNumber {
        key: spec.key.to_string(),
        value: raw.to_string(),
    };

    match spec.value {
        ValueKind::Text => {
            let text = if spec.comparison == Comparison::Contains {
                // Substring match: wildcards travel inside the bound value
                format!("%{raw}%")
            } else {
                raw.to_string()
            };
            Ok(BindValue::Text(text))
        }
        ValueKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(BindValue::Integer)
            .map_err(|_| invalid()),
        ValueKind::Float => {
            let parsed = raw.trim().parse::<f64>().map_err(|_| invalid())?;
            // "NaN" and "inf" parse successfully but are never valid filters
            if !parsed.is_finite() {
                return Err(invalid());
            }
            Ok(BindValue::Float(parsed))
        }
    }
}
