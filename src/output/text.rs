//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored section-by-section report display
//! - Node compatibility status
//! - Conflict listings with declarers and recommended versions
//! - Update listings with change type indication
//! - Installation suggestions

use crate::analyzer::VersionChangeKind;
use crate::domain::{AnalysisReport, ConflictRecord, Suggestion, UpdateAdvisory};
use crate::output::{OutputFormatter, Verbosity};
use crate::version::parse_version;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn ok_marker(&self) -> String {
        if self.color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        }
    }

    fn fail_marker(&self) -> String {
        if self.color {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn change_label(&self, advisory: &UpdateAdvisory) -> String {
        let kind = match (
            parse_version(&advisory.current_version),
            parse_version(&advisory.available_version),
        ) {
            (Some(current), Some(available)) => VersionChangeKind::between(&current, &available),
            _ => return "?".to_string(),
        };

        if self.color {
            match kind {
                VersionChangeKind::Major => kind.label().red().bold().to_string(),
                VersionChangeKind::Minor => kind.label().yellow().to_string(),
                VersionChangeKind::Patch => kind.label().green().to_string(),
            }
        } else {
            kind.label().to_string()
        }
    }

    fn write_node_compat(
        &self,
        report: &AnalysisReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let compat = &report.node_compat;
        let current = compat.current_version.as_deref().unwrap_or("not detected");

        if compat.compatible {
            writeln!(
                writer,
                "{} Node {} satisfies '{}'",
                self.ok_marker(),
                current,
                compat.required_range
            )?;
        } else {
            writeln!(
                writer,
                "{} Node {} does not satisfy '{}'",
                self.fail_marker(),
                current,
                compat.required_range
            )?;
            if let Some(recommendation) = &compat.recommendation {
                writeln!(writer, "  {}", recommendation)?;
            }
        }
        Ok(())
    }

    fn write_conflict(
        &self,
        conflict: &ConflictRecord,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} {} (required: {})",
            self.fail_marker(),
            conflict.package,
            conflict.required_range
        )?;
        for declarer in &conflict.conflicting {
            writeln!(writer, "    {}", declarer)?;
        }
        if let Some(version) = &conflict.recommended_version {
            writeln!(writer, "    recommended version: {}", version)?;
        }
        Ok(())
    }

    fn write_update(
        &self,
        advisory: &UpdateAdvisory,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let date_display = advisory
            .released_at
            .map(|d| format!(" ({})", d.format("%Y/%m/%d")))
            .unwrap_or_default();

        writeln!(
            writer,
            "  {} {} → {} [{}]{}",
            advisory.package,
            advisory.current_version,
            advisory.available_version,
            self.change_label(advisory),
            date_display
        )?;

        if self.verbosity == Verbosity::Verbose {
            for note in &advisory.notes {
                writeln!(writer, "      {}", note)?;
            }
        }
        Ok(())
    }

    fn write_suggestion(
        &self,
        suggestion: &Suggestion,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "  - {}", suggestion)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AnalysisReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            // Only conflicts and incompatibilities in quiet mode
            if !report.node_compat.compatible {
                self.write_node_compat(report, writer)?;
            }
            for conflict in &report.conflicts {
                self.write_conflict(conflict, writer)?;
            }
            return Ok(());
        }

        writeln!(
            writer,
            "{}",
            self.heading(&format!("{} v{}", report.project, report.version))
        )?;
        writeln!(writer)?;

        writeln!(writer, "{}", self.heading("Node compatibility"))?;
        self.write_node_compat(report, writer)?;
        writeln!(writer)?;

        writeln!(writer, "{}", self.heading("Dependency conflicts"))?;
        if report.conflicts.is_empty() {
            writeln!(writer, "{} no conflicts found", self.ok_marker())?;
        } else {
            for conflict in &report.conflicts {
                self.write_conflict(conflict, writer)?;
            }
        }
        writeln!(writer)?;

        if !report.updates.is_empty() {
            writeln!(writer, "{}", self.heading("Available updates"))?;
            for advisory in &report.updates {
                self.write_update(advisory, writer)?;
            }
            writeln!(writer)?;
        }

        if !report.suggestions.is_empty() {
            writeln!(writer, "{}", self.heading("Suggestions"))?;
            for suggestion in &report.suggestions {
                self.write_suggestion(suggestion, writer)?;
            }
            writeln!(writer)?;
        }

        if !report.errors.is_empty() {
            writeln!(writer, "{}", self.heading("Errors"))?;
            for error in &report.errors {
                writeln!(writer, "  {} {}", self.fail_marker(), error)?;
            }
        }

        Ok(())
    }
}
