//! Configuration options for the contact conversion

/// Encoding of the produced CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// UTF-8 with a byte-order-mark prefix, the form contact importers expect
    #[default]
    Utf8Bom,
    /// Plain UTF-8 without a preamble
    Utf8,
}

impl OutputEncoding {
    /// Bytes written to the output before any content
    pub fn preamble(&self) -> &'static [u8] {
        match self {
            OutputEncoding::Utf8Bom => &[0xEF, 0xBB, 0xBF],
            OutputEncoding::Utf8 => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputEncoding::Utf8Bom => "UTF-8 with BOM",
            OutputEncoding::Utf8 => "UTF-8",
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone, Default)]
pub struct ConversionConfig {
    /// Contact group label copied into every output row's Labels field
    pub label: String,
    /// Output file encoding
    pub output_encoding: OutputEncoding,
    /// Abort on the first malformed data row instead of skipping it
    pub strict: bool,
}

impl ConversionConfig {
    /// Create a configuration with the given label and defaults elsewhere
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}
