//! Baseline financials that projections start from
//!
//! The calculator never owns its data directly: it asks a [`BaselineSource`]
//! for the record of a symbol. [`BaselineTable`] is the in-memory source used
//! by default, filled either with the built-in sample figures or from a JSON
//! file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, ScenarioError};

/// Current reference figures for one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineFinancials {
    /// Uppercase ticker symbol
    pub symbol: String,
    /// Revenue in millions of currency units
    pub revenue: f64,
    /// Earnings per share
    pub eps: f64,
    /// Price-to-earnings multiple
    #[serde(alias = "pe")]
    pub pe_ratio: f64,
}

impl BaselineFinancials {
    pub fn new(symbol: impl Into<String>, revenue: f64, eps: f64, pe_ratio: f64) -> Self {
        Self {
            symbol: symbol.into(),
            revenue,
            eps,
            pe_ratio,
        }
    }
}

/// Source of baseline financials keyed by uppercase symbol
#[cfg_attr(test, mockall::automock)]
pub trait BaselineSource: Send + Sync {
    /// Record for `symbol` (already uppercased by the caller), if known
    fn lookup(&self, symbol: &str) -> Option<BaselineFinancials>;

    /// All known symbols, sorted
    fn symbols(&self) -> Vec<String>;
}

/// Immutable in-memory baseline table
#[derive(Debug, Clone, Default)]
pub struct BaselineTable {
    records: BTreeMap<String, BaselineFinancials>,
}

impl BaselineTable {
    /// Placeholder figures for TSLA, MSFT and AAPL
    pub fn sample() -> Self {
        let records = [
            BaselineFinancials::new("TSLA", 80_000.0, 4.0, 60.0),
            BaselineFinancials::new("MSFT", 143_000.0, 9.5, 28.0),
            BaselineFinancials::new("AAPL", 365_000.0, 6.1, 30.0),
        ];
        Self {
            records: records
                .into_iter()
                .map(|r| (r.symbol.clone(), r))
                .collect(),
        }
    }

    /// Build a table from records, one per symbol
    ///
    /// Symbols are trimmed and uppercased. Duplicate or empty symbols and
    /// non-finite figures are rejected.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = BaselineFinancials>,
    {
        let mut table = BTreeMap::new();

        for mut record in records {
            record.symbol = record.symbol.trim().to_uppercase();

            if record.symbol.is_empty() {
                return Err(ScenarioError::InvalidBaseline(
                    "record with empty symbol".to_string(),
                ));
            }

            let figures = [record.revenue, record.eps, record.pe_ratio];
            if figures.iter().any(|v| !v.is_finite()) {
                return Err(ScenarioError::InvalidBaseline(format!(
                    "non-finite figure for {}",
                    record.symbol
                )));
            }

            if table.contains_key(&record.symbol) {
                return Err(ScenarioError::InvalidBaseline(format!(
                    "duplicate symbol {}",
                    record.symbol
                )));
            }

            table.insert(record.symbol.clone(), record);
        }

        Ok(Self { records: table })
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<BaselineFinancials> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a JSON array of records from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            symbols = table.len(),
            "Loaded baseline table"
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl BaselineSource for BaselineTable {
    fn lookup(&self, symbol: &str) -> Option<BaselineFinancials> {
        self.records.get(symbol).cloned()
    }

    fn symbols(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_table() {
        let table = BaselineTable::sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.symbols(), vec!["AAPL", "MSFT", "TSLA"]);

        let tsla = table.lookup("TSLA").unwrap();
        assert_eq!(tsla, BaselineFinancials::new("TSLA", 80_000.0, 4.0, 60.0));
        assert!(table.lookup("tsla").is_none());
        assert!(table.lookup("NVDA").is_none());
    }

    #[test]
    fn test_from_records_normalizes_symbols() {
        let table =
            BaselineTable::from_records([BaselineFinancials::new(" nvda ", 60_000.0, 2.5, 45.0)])
                .unwrap();
        assert_eq!(table.symbols(), vec!["NVDA"]);
        assert_eq!(table.lookup("NVDA").unwrap().symbol, "NVDA");
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let err = BaselineTable::from_records([
            BaselineFinancials::new("TSLA", 1.0, 1.0, 1.0),
            BaselineFinancials::new("tsla", 2.0, 2.0, 2.0),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate symbol TSLA"));
    }

    #[test]
    fn test_from_records_rejects_bad_values() {
        assert!(BaselineTable::from_records([BaselineFinancials::new("", 1.0, 1.0, 1.0)]).is_err());
        assert!(
            BaselineTable::from_records([BaselineFinancials::new("X", f64::NAN, 1.0, 1.0)])
                .is_err()
        );
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"symbol": "AMZN", "revenue": 575000, "eps": 2.9, "pe_ratio": 42},
            {"symbol": "nflx", "revenue": 33700, "eps": 12.0, "pe": 35}
        ]"#;
        let table = BaselineTable::from_json_str(json).unwrap();

        assert_eq!(table.symbols(), vec!["AMZN", "NFLX"]);
        assert!((table.lookup("NFLX").unwrap().pe_ratio - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = BaselineTable::from_json_str(r#"{"TSLA": {}}"#).unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = BaselineTable::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }
}
