//! Integration tests for tokenizer/encoder compatibility properties

use pretty_assertions::assert_eq;

use contactconv::conversion::{convert_records, ConversionConfig};
use contactconv::formatter::{encode_field, encode_record};
use contactconv::parser::split_record;

#[test]
fn test_tokenizer_reference_cases() {
    assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    assert_eq!(split_record("\"a,b\",c"), vec!["a,b", "c"]);
    assert_eq!(split_record("\"a\"\"b\",c"), vec!["a\"b", "c"]);
}

#[test]
fn test_single_field_round_trip() {
    let cases = [
        "plain",
        "",
        "with space",
        "comma, inside",
        "quote \" inside",
        "both \", here",
        "double \"\" quotes",
        "ПМ-35 ПОНОМАРЕВ",
    ];
    for field in cases {
        let encoded = encode_field(field);
        assert_eq!(
            split_record(&encoded),
            vec![field.to_string()],
            "field: {:?}",
            field
        );
    }
}

#[test]
fn test_record_round_trip_with_special_fields() {
    let fields = ["a", "b,c", "d\"e", ""];
    let line = encode_record(&fields);
    let reparsed = split_record(line.trim_end_matches('\n'));
    assert_eq!(reparsed, fields);
}

#[test]
fn test_quoted_input_fields_flow_through_conversion() {
    // Field 3 holds a comma inside quotes; it must survive as one field and
    // come out re-quoted in the output
    let input = "header\nt,r,\"Ivan, Jr\",ГР-1 Petrov,a@x,b@x,+7\n";
    let mut output = Vec::new();
    let report = convert_records(
        input.as_bytes(),
        &mut output,
        &ConversionConfig::with_label(""),
    )
    .unwrap();

    assert_eq!(report.statistics.rows_converted, 1);
    let text = String::from_utf8(output[3..].to_vec()).unwrap();
    let data_line = text.lines().nth(1).unwrap();
    assert!(data_line.starts_with("\"Ivan, Jr\",,ГР-1 Petrov"));
    assert_eq!(split_record(data_line).len(), 23);
}

#[test]
fn test_unquoted_plain_fields_stay_unquoted() {
    let input = "header\nt,r,Ivan,ГР-1 Petrov,a@x,b@x,+79990000000\n";
    let mut output = Vec::new();
    convert_records(
        input.as_bytes(),
        &mut output,
        &ConversionConfig::with_label("2024"),
    )
    .unwrap();

    let text = String::from_utf8(output[3..].to_vec()).unwrap();
    // Minimal quoting: nothing in this row needs quotes
    assert!(!text.lines().nth(1).unwrap().contains('"'));
}

#[test]
fn test_output_lines_always_reparse_to_23_fields() {
    let input = "header\n\
        t,r,\"Smith, John\",\"GR-1 O\"\"Neil\",a@x,b@x,+7\n\
        t,r,Plain,NoGroup,a@x,b@x,+7\n";
    let mut output = Vec::new();
    convert_records(
        input.as_bytes(),
        &mut output,
        &ConversionConfig::with_label("a,b"),
    )
    .unwrap();

    let text = String::from_utf8(output[3..].to_vec()).unwrap();
    for line in text.lines() {
        assert_eq!(split_record(line).len(), 23, "line: {}", line);
    }
}
