//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sdglens_domain::{AlignmentBand, PredictionResult, SDGS};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a classification result.
    pub fn format_result(&self, result: &PredictionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_result_json(result),
            OutputFormat::Table => Ok(self.format_result_table(result)),
        }
    }

    fn format_result_json(&self, result: &PredictionResult) -> Result<String> {
        let json: Vec<serde_json::Value> = result
            .iter()
            .map(|c| {
                serde_json::json!({
                    "sdg_number": c.sdg_id.number(),
                    "sdg_name": c.sdg_name(),
                    "confidence": c.confidence,
                    "matched_keywords": c.matched_keywords,
                    "explanation": c.explanation,
                    "source": c.source_tier.as_str(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_result_table(&self, result: &PredictionResult) -> String {
        if result.is_no_match() {
            return self.colorize(&result.top().explanation, "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["SDG", "Name", "Confidence", "Keywords", "Source"]);

        for candidate in result {
            let confidence = format!("{:.1}%", candidate.confidence * 100.0);
            let confidence = match AlignmentBand::from_confidence(candidate.confidence) {
                AlignmentBand::Strong => self.colorize(&confidence, "green"),
                AlignmentBand::Moderate => self.colorize(&confidence, "yellow"),
                AlignmentBand::Weak => confidence,
            };
            builder.push_record([
                candidate.sdg_id.to_string(),
                candidate.sdg_name().to_string(),
                confidence,
                candidate.matched_keywords.join(", "),
                candidate.source_tier.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let explanations: Vec<String> = result
            .iter()
            .map(|c| format!("  SDG {}: {}", c.sdg_id, c.explanation))
            .collect();

        format!("{}\n{}", table, explanations.join("\n"))
    }

    /// Format the goal catalog.
    pub fn format_sdgs(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = SDGS
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "sdg_number": s.id.number(),
                            "sdg_name": s.name,
                            "keywords": s.keywords,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["SDG", "Name", "Keywords"]);
                for sdg in SDGS.iter() {
                    builder.push_record([
                        sdg.id.to_string(),
                        sdg.name.to_string(),
                        sdg.keywords.join(", "),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
