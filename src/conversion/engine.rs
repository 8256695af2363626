//! Core conversion engine: line loop, header handling, per-row recovery

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::conversion::config::ConversionConfig;
use crate::conversion::stats::{ConversionReport, ConversionStatistics};
use crate::error::{ConvertError, ConvertResult, RowError, RowWarning};
use crate::formatter::encode_record;
use crate::mapping::{map_contact_row, GOOGLE_CONTACTS_COLUMNS};
use crate::parser::{split_record, RecordSource};

/// Main conversion engine
pub struct ContactConverter {
    config: ConversionConfig,
}

impl ContactConverter {
    /// Create a new converter
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Run the conversion from a line reader into a writer.
    ///
    /// Writes the encoding preamble and the fixed contact header, then one
    /// encoded line per accepted data row. Row-level failures are collected
    /// as warnings and the corresponding lines skipped; in strict mode a
    /// malformed data row aborts the run instead. Output row order follows
    /// input row order.
    pub fn convert<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> ConvertResult<ConversionReport> {
        let start_time = Instant::now();
        let mut bytes_written: u64 = 0;

        writer.write_all(self.config.output_encoding.preamble())?;
        bytes_written += self.config.output_encoding.preamble().len() as u64;

        let header = encode_record(&GOOGLE_CONTACTS_COLUMNS);
        writer.write_all(header.as_bytes())?;
        bytes_written += header.len() as u64;

        let mut warnings: Vec<RowWarning> = Vec::new();
        let mut line_number: usize = 0;
        let mut rows_converted: usize = 0;
        let mut header_seen = false;

        for line in reader.lines() {
            let mut line = line?;
            line_number += 1;

            // A BOM on the input is tolerated; strip it before parsing
            if line_number == 1 {
                if let Some(stripped) = line.strip_prefix('\u{feff}') {
                    line = stripped.to_string();
                }
            }

            // Empty lines are skipped before the header check, so a blank
            // first line shifts the header to the next non-empty line
            if line.is_empty() {
                warnings.push(RowWarning::new(line_number, None, RowError::Empty));
                continue;
            }

            if !header_seen {
                header_seen = true;
                continue;
            }

            let fields = split_record(&line);
            let row = match map_contact_row(&fields, &self.config.label) {
                Ok(row) => row,
                Err(error) => {
                    let warning = RowWarning::new(line_number, Some(line), error);
                    if self.config.strict {
                        return Err(ConvertError::Strict(warning));
                    }
                    warnings.push(warning);
                    continue;
                }
            };

            let encoded = encode_record(row.fields());
            writer.write_all(encoded.as_bytes())?;
            bytes_written += encoded.len() as u64;
            rows_converted += 1;
        }

        writer.flush()?;

        let rows_skipped = warnings.len();
        let statistics = ConversionStatistics::for_run(
            line_number,
            rows_converted,
            rows_skipped,
            bytes_written,
            start_time.elapsed(),
        );
        Ok(ConversionReport::new(statistics, warnings))
    }

    /// Open a record source and run the conversion from it
    pub fn convert_source<W: Write>(
        &self,
        source: &RecordSource,
        writer: &mut W,
    ) -> ConvertResult<ConversionReport> {
        let reader = source.open().map_err(|e| match source {
            RecordSource::File(path) => ConvertError::io(e.to_string(), Some(path.clone())),
            RecordSource::Stdin => ConvertError::io(e.to_string(), None),
        })?;
        self.convert(reader, writer)
    }
}

/// Convert CSV records from a reader into a writer with the given configuration
pub fn convert_records<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &ConversionConfig,
) -> ConvertResult<ConversionReport> {
    let converter = ContactConverter::new(config.clone());
    converter.convert(reader, writer)
}
