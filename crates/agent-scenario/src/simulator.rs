//! Intent extraction and projection composed behind one entry point

use std::sync::Arc;

use crate::baseline::BaselineSource;
use crate::calculator::{ScenarioCalculator, ScenarioResult};
use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::intent::{IntentExtractor, ScenarioIntent};

/// Scenario simulator: free text in, projection out
#[derive(Clone)]
pub struct ScenarioSimulator {
    extractor: IntentExtractor,
    calculator: ScenarioCalculator,
}

impl ScenarioSimulator {
    /// Simulator over `source` with the default intent grammar
    pub fn new(source: Arc<dyn BaselineSource>) -> Result<Self> {
        Ok(Self::from_parts(
            IntentExtractor::new()?,
            ScenarioCalculator::new(source),
        ))
    }

    pub fn from_parts(extractor: IntentExtractor, calculator: ScenarioCalculator) -> Self {
        Self {
            extractor,
            calculator,
        }
    }

    /// Simulator whose baseline table and company aliases come from `config`
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        let table = config.load_baseline()?;
        let extractor = config
            .aliases
            .iter()
            .fold(IntentExtractor::builder(), |b, (name, ticker)| {
                b.alias(name, ticker)
            })
            .build()?;

        Ok(Self::from_parts(
            extractor,
            ScenarioCalculator::new(Arc::new(table)),
        ))
    }

    /// Project `symbol` forward by `growth_percent`
    pub fn simulate(&self, symbol: &str, growth_percent: f64) -> Result<ScenarioResult> {
        self.calculator.simulate(symbol, growth_percent)
    }

    /// Recognize a scenario request in free text
    pub fn extract_intent(&self, text: &str) -> Option<ScenarioIntent> {
        self.extractor.extract(text)
    }

    /// Extract and simulate; `None` when the text is not a scenario request
    pub fn run(&self, text: &str) -> Option<Result<ScenarioResult>> {
        self.extract_intent(text)
            .map(|intent| self.simulate(&intent.symbol, intent.growth_percent))
    }

    /// Symbols with baseline data
    pub fn symbols(&self) -> Vec<String> {
        self.calculator.symbols()
    }
}
