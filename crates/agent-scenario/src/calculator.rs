//! Projection of revenue, EPS and P/E from a flat growth percentage
//!
//! Market price is held constant, so the projected P/E scales inversely with
//! the projected EPS:
//!
//! ```text
//! projected_revenue = revenue * (1 + g/100)
//! projected_eps     = eps     * (1 + g/100)
//! projected_pe      = round(pe_ratio * (eps / projected_eps), 2)
//! ```

use serde::Serialize;
use std::sync::Arc;

use crate::baseline::{BaselineFinancials, BaselineSource, BaselineTable};
use crate::error::{Result, ScenarioError};
use crate::formatter::format_thousands;

/// One line of the current-vs-projected comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub metric: String,
    pub current: String,
    pub projected: String,
}

impl MetricRow {
    fn new(metric: &str, current: String, projected: String) -> Self {
        Self {
            metric: metric.to_string(),
            current,
            projected,
        }
    }
}

/// Outcome of a successful simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub symbol: String,
    pub growth_percent: f64,
    pub baseline: BaselineFinancials,
    pub projected_revenue: f64,
    pub projected_eps: f64,
    pub projected_pe: f64,
}

impl ScenarioResult {
    /// Markdown summary of the projection
    pub fn summary(&self) -> String {
        format!(
            "**Scenario Simulation for {symbol}**:\n\n\
             - Revenue growth: {growth}%\n\
             - Projected Revenue: ${revenue}M\n\
             - Projected EPS: ${eps:.2}\n\
             - Projected P/E ratio (price assumed stable): {pe}\n\n\
             _Note: This is a simplified pro-forma estimate based on linear growth assumptions._",
            symbol = self.symbol,
            growth = self.growth_percent,
            revenue = format_thousands(self.projected_revenue),
            eps = self.projected_eps,
            pe = self.projected_pe,
        )
    }

    /// Revenue, EPS and P/E rows, in that order
    pub fn rows(&self) -> Vec<MetricRow> {
        vec![
            MetricRow::new(
                "Revenue (M$)",
                format!("${}", format_thousands(self.baseline.revenue)),
                format!("${}", format_thousands(self.projected_revenue)),
            ),
            MetricRow::new(
                "EPS",
                format!("${:.2}", self.baseline.eps),
                format!("${:.2}", self.projected_eps),
            ),
            MetricRow::new(
                "P/E",
                self.baseline.pe_ratio.to_string(),
                self.projected_pe.to_string(),
            ),
        ]
    }
}

/// Pure projection calculator over a baseline source
#[derive(Clone)]
pub struct ScenarioCalculator {
    source: Arc<dyn BaselineSource>,
}

impl Default for ScenarioCalculator {
    fn default() -> Self {
        Self::new(Arc::new(BaselineTable::sample()))
    }
}

impl ScenarioCalculator {
    pub fn new(source: Arc<dyn BaselineSource>) -> Self {
        Self { source }
    }

    /// Symbols this calculator can project
    pub fn symbols(&self) -> Vec<String> {
        self.source.symbols()
    }

    /// Project `symbol` forward by `growth_percent`
    ///
    /// `growth_percent` may be negative. An unknown symbol yields
    /// [`ScenarioError::SymbolNotFound`] and a zero projected EPS yields
    /// [`ScenarioError::DivisionUndefined`]. Growth large enough to push any
    /// projected figure past `f64::MAX` yields
    /// [`ScenarioError::ProjectionOutOfRange`].
    pub fn simulate(&self, symbol: &str, growth_percent: f64) -> Result<ScenarioResult> {
        if !growth_percent.is_finite() {
            return Err(ScenarioError::InvalidGrowth(growth_percent));
        }

        let symbol = symbol.trim().to_uppercase();
        let baseline = self.source.lookup(&symbol).ok_or_else(|| {
            tracing::warn!(%symbol, "No baseline financials for symbol");
            ScenarioError::SymbolNotFound {
                symbol: symbol.clone(),
            }
        })?;

        let factor = 1.0 + growth_percent / 100.0;
        let projected_revenue = baseline.revenue * factor;
        let projected_eps = baseline.eps * factor;

        if projected_eps == 0.0 {
            tracing::warn!(%symbol, growth_percent, "Projected EPS is zero, P/E undefined");
            return Err(ScenarioError::DivisionUndefined {
                symbol,
                growth_percent,
            });
        }

        let projected_pe = round2(baseline.pe_ratio * (baseline.eps / projected_eps));

        if !(projected_revenue.is_finite() && projected_eps.is_finite() && projected_pe.is_finite())
        {
            tracing::warn!(%symbol, growth_percent, "Projection overflowed");
            return Err(ScenarioError::ProjectionOutOfRange {
                symbol,
                growth_percent,
            });
        }

        tracing::info!(
            %symbol,
            growth_percent,
            projected_revenue,
            projected_eps,
            projected_pe,
            "Simulated scenario"
        );

        Ok(ScenarioResult {
            symbol,
            growth_percent,
            baseline,
            projected_revenue,
            projected_eps,
            projected_pe,
        })
    }
}

/// Round to two decimals, half-to-even on the exact binary value
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
