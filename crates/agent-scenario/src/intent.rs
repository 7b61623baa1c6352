//! Extraction of what-if scenario requests from free text
//!
//! A request looks like `"What if Tesla's revenue grows 15% next year?"`:
//! an optional lead-in (`what if` / `simulate`), a company token, then a
//! percentage with only non-digit text in between. Company tokens are either
//! known company names (case-insensitive) or ticker-like runs of 1-5
//! uppercase letters. Candidates are tried left to right and the first one
//! followed by a percentage wins.

use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::error::{Result, ScenarioError};

/// Company names recognized without configuration
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Tesla", "TSLA"),
    ("Microsoft", "MSFT"),
    ("Apple", "AAPL"),
];

/// Uppercase words that look like tickers but never are
pub const STOP_WORDS: &[&str] = &[
    "I", "A", "Q", "AI", "EPS", "PE", "CEO", "CFO", "USD", "US", "YOY", "GDP", "IPO", "ETF", "FY",
    "EBIT",
];

const LEAD_IN_PATTERN: &str = r"(?i)\b(?:what\s+if|simulate)\b";
const PERCENT_PATTERN: &str = r"^[^\d]*?(?P<pct>[-+]?\d{1,3}(?:\.\d+)?)\s*%";

/// Parameters recognized in a scenario request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioIntent {
    pub symbol: String,
    pub growth_percent: f64,
}

/// Pattern matcher turning free text into a [`ScenarioIntent`]
#[derive(Debug, Clone)]
pub struct IntentExtractor {
    lead_in: Regex,
    company: Regex,
    percent: Regex,
    aliases: HashMap<String, String>,
    stop_words: HashSet<String>,
}

impl IntentExtractor {
    /// Extractor with the default company names and stop words
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> IntentExtractorBuilder {
        IntentExtractorBuilder::default()
    }

    /// Extract the first scenario request in `query`
    ///
    /// Returns `None` when the text does not ask for a scenario.
    pub fn extract(&self, query: &str) -> Option<ScenarioIntent> {
        let start = self.lead_in.find(query).map_or(0, |m| m.end());
        let region = &query[start..];

        for caps in self.company.captures_iter(region) {
            let Some(token) = caps.get(0) else { continue };

            let symbol = if let Some(name) = caps.name("name") {
                match self.aliases.get(&name.as_str().to_lowercase()) {
                    Some(ticker) => ticker.clone(),
                    None => continue,
                }
            } else {
                let ticker = token.as_str();
                if self.stop_words.contains(ticker) {
                    continue;
                }
                ticker.to_string()
            };

            let Some(pct) = self
                .percent
                .captures(&region[token.end()..])
                .and_then(|c| c.name("pct"))
            else {
                continue;
            };

            let Ok(growth_percent) = pct.as_str().parse::<f64>() else {
                continue;
            };

            tracing::debug!(%symbol, growth_percent, "Extracted scenario intent");
            return Some(ScenarioIntent {
                symbol,
                growth_percent,
            });
        }

        tracing::debug!("No scenario intent in query");
        None
    }

    /// Ticker a company name maps to, if it is known
    pub fn resolve_alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// Builder for [`IntentExtractor`]
#[derive(Debug, Clone)]
pub struct IntentExtractorBuilder {
    aliases: Vec<(String, String)>,
    stop_words: Vec<String>,
}

impl Default for IntentExtractorBuilder {
    fn default() -> Self {
        Self {
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(name, ticker)| ((*name).to_string(), (*ticker).to_string()))
                .collect(),
            stop_words: STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl IntentExtractorBuilder {
    /// Map a company name to a ticker
    pub fn alias(mut self, name: impl Into<String>, ticker: impl Into<String>) -> Self {
        self.aliases.push((name.into(), ticker.into()));
        self
    }

    /// Treat an uppercase word as never being a ticker
    pub fn stop_word(mut self, word: impl Into<String>) -> Self {
        self.stop_words.push(word.into());
        self
    }

    pub fn build(self) -> Result<IntentExtractor> {
        let mut aliases = HashMap::new();
        for (name, ticker) in self.aliases {
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                return Err(ScenarioError::ConfigError(
                    "company alias with empty name".to_string(),
                ));
            }
            aliases.insert(name, ticker.trim().to_uppercase());
        }

        // Longest names first so that "apple inc" beats "apple"
        let mut names: Vec<&String> = aliases.keys().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");

        let company_pattern = if alternation.is_empty() {
            r"\b(?P<ticker>[A-Z]{1,5})\b".to_string()
        } else {
            format!(r"\b(?:(?P<name>(?i:{alternation}))|(?P<ticker>[A-Z]{{1,5}}))\b")
        };

        Ok(IntentExtractor {
            lead_in: compile(LEAD_IN_PATTERN)?,
            company: compile(&company_pattern)?,
            percent: compile(PERCENT_PATTERN)?,
            aliases,
            stop_words: self.stop_words.into_iter().collect(),
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ScenarioError::ConfigError(format!("invalid intent pattern: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> IntentExtractor {
        IntentExtractor::new().unwrap()
    }

    fn intent(symbol: &str, growth_percent: f64) -> Option<ScenarioIntent> {
        Some(ScenarioIntent {
            symbol: symbol.to_string(),
            growth_percent,
        })
    }

    #[test]
    fn test_company_name_question() {
        assert_eq!(
            extractor().extract("What if Tesla's revenue grows 15% next year?"),
            intent("TSLA", 15.0)
        );
    }

    #[test]
    fn test_no_match() {
        let ex = extractor();
        assert_eq!(ex.extract("Tell me a joke"), None);
        assert_eq!(ex.extract("What if Tesla does well?"), None);
        assert_eq!(ex.extract(""), None);
    }

    #[test]
    fn test_ticker_forms() {
        let ex = extractor();
        assert_eq!(ex.extract("simulate MSFT at 8 %"), intent("MSFT", 8.0));
        assert_eq!(ex.extract("AAPL +12.5%"), intent("AAPL", 12.5));
        assert_eq!(
            ex.extract("Simulate NVDA revenue dropping by -20% please"),
            intent("NVDA", -20.0)
        );
    }

    #[test]
    fn test_case_rules() {
        let ex = extractor();
        assert_eq!(ex.extract("WHAT IF MICROSOFT grows 3%"), intent("MSFT", 3.0));
        assert_eq!(ex.extract("what if apple grows 4%"), intent("AAPL", 4.0));
        // lowercase tickers are not ticker tokens
        assert_eq!(ex.extract("what if tsla grows 4%"), None);
    }

    #[test]
    fn test_leftmost_company_wins() {
        let ex = extractor();
        assert_eq!(
            ex.extract("What if MSFT and Apple both grow 10%?"),
            intent("MSFT", 10.0)
        );
        assert_eq!(
            ex.extract("What if Apple and MSFT both grow 10%?"),
            intent("AAPL", 10.0)
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extractor().extract("What if TSLA grows 10% and AAPL grows 20%?"),
            intent("TSLA", 10.0)
        );
    }

    #[test]
    fn test_digits_between_company_and_percent() {
        let ex = extractor();
        // the first number after the company must be the percentage
        assert_eq!(ex.extract("What if TSLA in 2025 grows 10%"), None);
        // a later candidate can still match
        assert_eq!(
            ex.extract("What if TSLA in 2025 and then AAPL grows 10%"),
            intent("AAPL", 10.0)
        );
    }

    #[test]
    fn test_percentage_bounds() {
        let ex = extractor();
        assert_eq!(ex.extract("What if TSLA grows 1000%"), None);
        assert_eq!(ex.extract("What if TSLA grows 150%"), intent("TSLA", 150.0));
    }

    #[test]
    fn test_stop_words_skipped() {
        let ex = extractor();
        assert_eq!(
            ex.extract("What if I think AAPL grows 5%"),
            intent("AAPL", 5.0)
        );
        assert_eq!(
            ex.extract("simulate EPS growth for MSFT of 7%"),
            intent("MSFT", 7.0)
        );
    }

    #[test]
    fn test_lead_in_is_not_a_ticker() {
        assert_eq!(
            extractor().extract("SIMULATE TSLA 9%"),
            intent("TSLA", 9.0)
        );
    }

    #[test]
    fn test_custom_alias() {
        let ex = IntentExtractor::builder()
            .alias("Nvidia", "nvda")
            .alias("Apple Inc", "AAPL")
            .build()
            .unwrap();

        assert_eq!(ex.resolve_alias("NVIDIA"), Some("NVDA"));
        assert_eq!(
            ex.extract("what if nvidia grows 30%?"),
            intent("NVDA", 30.0)
        );
        assert_eq!(
            ex.extract("what if Apple Inc grows 2%?"),
            intent("AAPL", 2.0)
        );
    }

    #[test]
    fn test_common_acronyms_are_not_tickers() {
        let ex = extractor();
        assert_eq!(
            ex.extract("What if AI demand makes NVDA grow 20%?"),
            intent("NVDA", 20.0)
        );
        assert_eq!(
            ex.extract("What if GDP slows and TSLA grows 5%"),
            intent("TSLA", 5.0)
        );
        assert_eq!(
            ex.extract("What if Q revenue at AAPL rises 4% this FY"),
            intent("AAPL", 4.0)
        );
    }

    #[test]
    fn test_custom_stop_word() {
        let query = "What if ESG rules bite and TSLA grows 5%";
        assert_eq!(extractor().extract(query), intent("ESG", 5.0));

        let ex = IntentExtractor::builder().stop_word("ESG").build().unwrap();
        assert_eq!(ex.extract(query), intent("TSLA", 5.0));
    }

    #[test]
    fn test_empty_alias_rejected() {
        assert!(IntentExtractor::builder().alias("  ", "X").build().is_err());
    }
}
