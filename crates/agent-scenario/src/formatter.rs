//! Response formatting for scenario results

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

use crate::calculator::{MetricRow, ScenarioResult};
use crate::error::ScenarioError;

/// Output format requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Markdown summary followed by a markdown table
    #[default]
    Markdown,
    /// Box-drawn terminal table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl ResponseFormat {
    /// Formatter implementing this format
    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            Self::Markdown => Box::new(MarkdownFormatter),
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ScenarioError::ConfigError(format!(
                "Unknown response format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Markdown => "markdown",
            Self::Table => "table",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

pub trait Formatter: Send + Sync {
    fn format(&self) -> ResponseFormat;
    fn format_result(&self, result: &ScenarioResult) -> String;
    fn format_error(&self, error: &ScenarioError) -> String;
    fn format_no_intent(&self, symbols: &[String]) -> String;
}

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Markdown
    }

    fn format_result(&self, result: &ScenarioResult) -> String {
        format!("{}\n\n{}", result.summary(), markdown_table(&result.rows()))
    }

    fn format_error(&self, error: &ScenarioError) -> String {
        format!("**Scenario Simulation**: {error}")
    }

    fn format_no_intent(&self, symbols: &[String]) -> String {
        format!(
            "No scenario request recognized. Ask something like \
             _\"What if Tesla's revenue grows 15% next year?\"_\n\n\
             Supported symbols: {}",
            symbols.join(", ")
        )
    }
}

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Table
    }

    fn format_result(&self, result: &ScenarioResult) -> String {
        format!(
            "Scenario simulation for {} at {}% revenue growth (price assumed stable)\n{}",
            result.symbol,
            result.growth_percent,
            terminal_table(&result.rows())
        )
    }

    fn format_error(&self, error: &ScenarioError) -> String {
        format!("❌ Error: {error}")
    }

    fn format_no_intent(&self, symbols: &[String]) -> String {
        format!(
            "No scenario request recognized. Supported symbols: {}",
            symbols.join(", ")
        )
    }
}

pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }
}

impl Formatter for JsonFormatter {
    fn format(&self) -> ResponseFormat {
        ResponseFormat::Json
    }

    fn format_result(&self, result: &ScenarioResult) -> String {
        Self::pretty(&json!({
            "summary": result.summary(),
            "table": result.rows(),
            "result": result,
        }))
    }

    fn format_error(&self, error: &ScenarioError) -> String {
        Self::pretty(&json!({ "error": error.to_string(), "table": null }))
    }

    fn format_no_intent(&self, symbols: &[String]) -> String {
        Self::pretty(&json!({ "status": "no_action", "supported_symbols": symbols }))
    }
}

/// Render metric rows as a markdown table
pub fn markdown_table(rows: &[MetricRow]) -> String {
    let mut output = String::from("| Metric | Current | Projected |\n|---|---:|---:|\n");
    for row in rows {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            row.metric, row.current, row.projected
        ));
    }
    output
}

/// Render metric rows as a box-drawn terminal table
pub fn terminal_table(rows: &[MetricRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Current", "Projected"]);
    for row in rows {
        table.add_row(vec![&row.metric, &row.current, &row.projected]);
    }
    table.to_string()
}

/// Format with thousands separators and no decimals, e.g. `92,000`
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if grouped == "0" {
        return grouped;
    }
    format!("{sign}{grouped}")
}
