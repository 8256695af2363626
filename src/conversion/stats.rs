//! Statistics and run reporting for conversion operations

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::RowWarning;

/// Counters and timings for one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Physical lines read from the input, header and skipped lines included
    pub lines_read: usize,
    /// Data rows successfully mapped and written
    pub rows_converted: usize,
    /// Data lines skipped by row-level recovery
    pub rows_skipped: usize,
    /// Bytes written to the output, preamble and header included
    pub bytes_written: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            lines_read: 0,
            rows_converted: 0,
            rows_skipped: 0,
            bytes_written: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create statistics for a finished run
    pub fn for_run(
        lines_read: usize,
        rows_converted: usize,
        rows_skipped: usize,
        bytes_written: u64,
        processing_time: Duration,
    ) -> Self {
        Self {
            lines_read,
            rows_converted,
            rows_skipped,
            bytes_written,
            processing_time_ms: processing_time.as_millis() as u64,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Human-readable multi-line summary
    pub fn summary(&self) -> String {
        format!(
            "Lines read: {}\nRows converted: {}\nRows skipped: {}\nBytes written: {}\nProcessing time: {}ms",
            self.lines_read,
            self.rows_converted,
            self.rows_skipped,
            self.bytes_written,
            self.processing_time_ms
        )
    }
}

/// Full outcome of a conversion run: counters plus the recovered row failures
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub statistics: ConversionStatistics,
    pub warnings: Vec<RowWarning>,
}

impl ConversionReport {
    pub fn new(statistics: ConversionStatistics, warnings: Vec<RowWarning>) -> Self {
        Self {
            statistics,
            warnings,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
