//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use roomfit_domain::{FitReport, Furniture, Measurement, Room};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const RULE_WIDTH: usize = 70;

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

    /// Format a furniture list under `title`; `empty` is shown when there is nothing to list.
    pub fn format_furniture(&self, title: &str, items: &[Furniture], empty: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_furniture_json(items),
            _ if items.is_empty() => Ok(self.colorize(empty, "yellow")),
            OutputFormat::Table => Ok(self.format_furniture_table(title, items)),
            OutputFormat::Plain => Ok(self.format_furniture_plain(title, items)),
        }
    }

    /// Format a furniture list as JSON.
    fn format_furniture_json(&self, items: &[Furniture]) -> Result<String> {
        let json_items: Vec<serde_json::Value> = items
            .iter()
            .enumerate()
            .map(|(index, f)| {
                serde_json::json!({
                    "index": index,
                    "name": f.name(),
                    "length": measurement_json(&f.length),
                    "width": measurement_json(&f.width),
                    "height": measurement_json(&f.height),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_items)?)
    }

    /// Format a furniture list as a table.
    fn format_furniture_table(&self, title: &str, items: &[Furniture]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Name", "Length", "Width", "Height"]);

        for (index, f) in items.iter().enumerate() {
            builder.push_record([
                index.to_string(),
                f.name().to_string(),
                f.length.to_string(),
                f.width.to_string(),
                f.height.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(title, "cyan"), table)
    }

    /// Format a furniture list as fixed-width rows under a ruled header.
    fn format_furniture_plain(&self, title: &str, items: &[Furniture]) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let mut lines = vec![
            title.to_string(),
            rule.clone(),
            format!(
                "{:<20} | {:<12} | {:<12} | {:<12}",
                "Name", "Length", "Width", "Height"
            ),
            rule,
        ];
        lines.extend(items.iter().map(Furniture::display_row));
        lines.join("\n")
    }

    /// Format the result of a room fit evaluation.
    pub fn format_fit_report(&self, room: &Room, report: &FitReport) -> Result<String> {
        if let OutputFormat::Json = self.format {
            let json = serde_json::json!({
                "room": {
                    "length": measurement_json(&room.length),
                    "width": measurement_json(&room.width),
                    "height": room.height.as_ref().map(measurement_json),
                },
                "floor_area_sq_ft": report.floor_area_sq_ft,
                "results": report
                    .results
                    .iter()
                    .map(|r| serde_json::json!({ "name": r.name, "fits": r.fits }))
                    .collect::<Vec<_>>(),
            });
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        let mut lines = vec![format!(
            "Room floor area: ~{} sq ft",
            report.floor_area_sq_ft
        )];

        if report.results.is_empty() {
            lines.push(self.colorize("No furniture to fit.", "yellow"));
            return Ok(lines.join("\n"));
        }

        lines.push(String::new());
        lines.push("Furniture that fits in room (by length & width):".to_string());
        for result in &report.results {
            let verdict = if result.fits {
                self.colorize("FITS", "green")
            } else {
                self.colorize("TOO BIG", "red")
            };
            lines.push(format!("{} → {}", result.name, verdict));
        }

        Ok(lines.join("\n"))
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

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
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
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn measurement_json(m: &Measurement) -> serde_json::Value {
    serde_json::json!({ "feet": m.feet(), "inches": m.inches() })
}
