//! Form export to Google Contacts CSV converter
//!
//! A Rust CLI tool for converting a fixed-schema form-collection CSV export
//! into the 23-column Google Contacts import format.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod mapping;
pub mod parser;

// Re-export commonly used types
pub use conversion::{ContactConverter, ConversionConfig, ConversionReport, OutputEncoding};
pub use error::{ConvertError, ConvertResult, RowError, RowWarning};
pub use mapping::{map_contact_row, ContactRow, GOOGLE_CONTACTS_COLUMNS};
pub use parser::RecordSource;

/// Convert CSV text with the given label and default configuration.
///
/// Returns the produced CSV (BOM prefix included) together with the run
/// report.
pub fn convert_str(input: &str, label: &str) -> ConvertResult<(String, ConversionReport)> {
    let config = ConversionConfig::with_label(label);
    convert_str_with_config(input, &config)
}

/// Convert CSV text with a custom configuration
pub fn convert_str_with_config(
    input: &str,
    config: &ConversionConfig,
) -> ConvertResult<(String, ConversionReport)> {
    let mut output = Vec::new();
    let report = conversion::convert_records(input.as_bytes(), &mut output, config)?;
    let text = String::from_utf8(output).map_err(|e| {
        ConvertError::configuration(format!("produced output is not valid UTF-8: {}", e))
    })?;
    Ok((text, report))
}
