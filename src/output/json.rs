//! JSON output formatter for machine processing

use crate::domain::AnalysisReport;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter producing pretty-printed output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}
