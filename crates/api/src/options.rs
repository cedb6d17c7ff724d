//! Filter options descriptor.
//!
//! A process-wide, read-only map loaded once at startup from a static JSON
//! file. Each filterable attribute maps to either an enumerated list of
//! legal values (categorical filters) or a `{min, max}` range descriptor
//! (range filters). It only drives which filter controls a client may
//! present; the filter endpoint does not validate values against it.
//!
//! If the file is missing or malformed the process keeps serving and only
//! `/api/mobile/options` degrades to a permanent error.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the descriptor.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The descriptor file could not be read.
    #[error("failed to read filter options file: {0}")]
    Io(String),
    /// The descriptor file is not valid JSON of the expected shape.
    #[error("failed to parse filter options: {0}")]
    Parse(String),
    /// The descriptor parsed but contains no attributes.
    #[error("filter options file is empty")]
    Empty,
}

/// One legal value in a categorical filter's choice list.
///
/// Choice lists mix text (brands, camera specs) and numbers (RAM,
/// launch years); both serialize back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Text(String),
    Number(f64),
}

/// One attribute's filter descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOption {
    /// Enumerated legal values for a categorical filter.
    Choices(Vec<Choice>),
    /// Numeric bounds for a range filter.
    Range {
        min: f64,
        max: f64,
    },
}

/// The full descriptor: attribute name to filter shape.
///
/// `BTreeMap` keeps `/api/mobile/options` output stable across restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterOptions(BTreeMap<String, FilterOption>);

impl FilterOptions {
    /// Load the descriptor from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` if the file cannot be read, does not parse,
    /// or contains no attributes.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let data = std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;
        Self::from_json(&data)
    }

    /// Parse the descriptor from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Parse` on malformed input and
    /// `OptionsError::Empty` if no attributes are present.
    pub fn from_json(data: &str) -> Result<Self, OptionsError> {
        let options: Self =
            serde_json::from_str(data).map_err(|e| OptionsError::Parse(e.to_string()))?;

        if options.0.is_empty() {
            return Err(OptionsError::Empty);
        }

        Ok(options)
    }

    /// Number of filterable attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no attributes are described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up one attribute's descriptor.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&FilterOption> {
        self.0.get(attribute)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
        "Brand": ["Apple", "Samsung", "OnePlus"],
        "RAM": [4, 6, 8, 12],
        "Price": {"min": 5000, "max": 150000},
        "Screen_Size": {"min": 4.7, "max": 7.6}
    }
    "#;

    #[test]
    fn test_parse_mixed_descriptor() {
        let options = FilterOptions::from_json(SAMPLE).unwrap();
        assert_eq!(options.len(), 4);

        assert_eq!(
            options.get("Brand"),
            Some(&FilterOption::Choices(vec![
                Choice::Text("Apple".to_string()),
                Choice::Text("Samsung".to_string()),
                Choice::Text("OnePlus".to_string()),
            ]))
        );
        assert_eq!(
            options.get("RAM"),
            Some(&FilterOption::Choices(vec![
                Choice::Number(4.0),
                Choice::Number(6.0),
                Choice::Number(8.0),
                Choice::Number(12.0),
            ]))
        );
        assert_eq!(
            options.get("Price"),
            Some(&FilterOption::Range {
                min: 5000.0,
                max: 150_000.0
            })
        );
    }

    #[test]
    fn test_parse_empty_object_is_not_loaded() {
        assert!(matches!(
            FilterOptions::from_json("{}"),
            Err(OptionsError::Empty)
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            FilterOptions::from_json("not json"),
            Err(OptionsError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_unexpected_shape() {
        // A bare number is neither a choices list nor a range
        assert!(matches!(
            FilterOptions::from_json(r#"{"Brand": 42}"#),
            Err(OptionsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FilterOptions::load(Path::new("/nonexistent/filter_options.json")).unwrap_err();
        assert!(matches!(err, OptionsError::Io(_)));
    }

    #[test]
    fn test_serialize_keeps_shapes() {
        let options = FilterOptions::from_json(SAMPLE).unwrap();
        let json = serde_json::to_value(&options).unwrap();

        assert!(json.get("Brand").unwrap().is_array());
        assert_eq!(json["Price"]["min"], 5000.0);
        assert_eq!(json["Price"]["max"], 150_000.0);
    }
}
