//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::life::Grid;
use crate::runner::RunReport;
use anyhow::Result;
use std::path::Path;

/// Format run reports and grids for display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a run report for console output
    pub fn format_report(report: &RunReport, show_evolution: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "=== Run: {}x{} grid, {} generation(s) ===\n",
            report.width, report.height, report.generations
        ));
        output.push_str(&format!(
            "Living Cells: {} → {}\n",
            report.initial().living_count(),
            report.final_grid().living_count()
        ));

        if let Some(period) = report.analysis.period {
            output.push_str(&format!(
                "Type: {} (period {})\n",
                report.analysis.classification(),
                period
            ));
        } else {
            output.push_str(&format!("Type: {}\n", report.analysis.classification()));
        }

        output.push('\n');

        if show_evolution && report.evolution.len() > 2 {
            output.push_str("Evolution:\n");
            for (i, grid) in report.evolution.iter().enumerate() {
                output.push_str(&format!("Generation {}:\n", i));
                output.push_str(&Self::format_grid_compact(grid));
                output.push('\n');
            }
        } else {
            output.push_str("Initial State:\n");
            output.push_str(&Self::format_grid_compact(report.initial()));
            output.push('\n');
            output.push_str(&format!(
                "Final State (after {} generations):\n",
                report.generations
            ));
            output.push_str(&Self::format_grid_compact(report.final_grid()));
        }

        output
    }

    /// Format the per-generation history as a table
    pub fn format_history_table(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str("Generation History:\n");
        output.push_str("Gen    | Pop    | Births | Deaths\n");
        output.push_str("-------|--------|--------|-------\n");

        for record in &report.history {
            output.push_str(&format!(
                "{:6} | {:6} | {:6} | {}\n",
                record.generation, record.population, record.births, record.deaths
            ));
        }

        output
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for y in 0..grid.height {
            for x in 0..grid.width {
                output.push(if grid.is_alive(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for y in 0..grid.height {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width {
                output.push_str(if grid.is_alive(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Save a run report based on output format
    pub fn save_report<P: AsRef<Path>>(
        report: &RunReport,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                let filepath = output_dir.join("report.txt");
                let mut content = Self::format_report(report, true);
                content.push('\n');
                content.push_str(&Self::format_history_table(report));
                std::fs::write(filepath, content)?;
            }
            OutputFormat::Json => {
                let filepath = output_dir.join("report.json");
                let json = serde_json::to_string_pretty(report)?;
                std::fs::write(filepath, json)?;
            }
            OutputFormat::Visual => {
                let filepath = output_dir.join("report_visual.txt");
                let content = Self::create_visual_evolution(report);
                std::fs::write(filepath, content)?;
            }
        }

        Ok(())
    }

    /// Create a visual representation of the evolution
    fn create_visual_evolution(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Visual Evolution - {}x{} grid\n",
            report.width, report.height
        ));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        for (i, grid) in report.evolution.iter().enumerate() {
            output.push_str(&format!(
                "\nGeneration {} (Living: {}):\n",
                i,
                grid.living_count()
            ));
            output.push_str(&Self::format_grid_with_coords(grid));
        }

        output.push_str("\nClassification: ");
        output.push_str(report.analysis.classification());
        output.push('\n');

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}
