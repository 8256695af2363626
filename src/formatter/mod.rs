//! CSV field encoding with minimal conditional quoting
//!
//! Fields are quoted only when they contain a comma, a double quote, or a
//! newline. Unquoted output for plain fields is kept deliberately: importers
//! of the produced file expect the byte-exact minimal form.

/// Determine if a field must be wrapped in quotes
pub fn needs_quoting(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n')
}

/// Wrap a field in double quotes, doubling every internal quote
pub fn quote_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len() + 2);
    escaped.push('"');
    for c in field.chars() {
        if c == '"' {
            escaped.push_str("\"\"");
        } else {
            escaped.push(c);
        }
    }
    escaped.push('"');
    escaped
}

/// Encode a single field into its CSV-safe textual form
pub fn encode_field(field: &str) -> String {
    if needs_quoting(field) {
        quote_field(field)
    } else {
        field.to_string()
    }
}

/// Serialize a full record: encoded fields joined by commas, `\n` terminated
pub fn encode_record<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&encode_field(field.as_ref()));
    }
    line.push('\n');
    line
}
