//! Integration tests for the file conversion workflow

use std::fs;
use std::io::BufWriter;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use contactconv::conversion::{ContactConverter, ConversionConfig, OutputEncoding};
use contactconv::error::ConvertError;
use contactconv::parser::{split_record, RecordSource};

const SAMPLE_EXPORT: &str = "\
Отметка времени,Должность,Имя,Группа и Фамилия,Почта ЛК,Созданная почта,Телефон
2024-01-01,Студент,Иван,ПМ-35 ПОНОМАРЕВ,ivan@lk.ru,ivan@new.ru,+79990000001
2024-01-01,Студент,Anna,ГР-1 Petrova,anna@lk.ru,anna@new.ru,+79990000002
";

fn convert_file(input: &str, config: ConversionConfig) -> Vec<u8> {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("export.csv");
    let output_path = dir.path().join("contacts.csv");
    fs::write(&input_path, input).unwrap();

    let converter = ContactConverter::new(config);
    let source = RecordSource::from_file(input_path);
    let mut writer = BufWriter::new(fs::File::create(&output_path).unwrap());
    converter.convert_source(&source, &mut writer).unwrap();
    drop(writer);

    fs::read(&output_path).unwrap()
}

#[test]
fn test_output_file_starts_with_utf8_bom() {
    let bytes = convert_file(SAMPLE_EXPORT, ConversionConfig::with_label("2024"));
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
}

#[test]
fn test_no_bom_flag_omits_preamble() {
    let config = ConversionConfig {
        output_encoding: OutputEncoding::Utf8,
        ..ConversionConfig::with_label("2024")
    };
    let bytes = convert_file(SAMPLE_EXPORT, config);
    assert!(bytes.starts_with(b"First Name,"));
}

#[test]
fn test_header_line_lists_all_23_columns() {
    let bytes = convert_file(SAMPLE_EXPORT, ConversionConfig::with_label("2024"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let header = text.lines().next().unwrap();

    assert!(header.starts_with("First Name,Middle Name,Last Name,"));
    assert!(header.ends_with("Phone 1 - Label,Phone 1 - Value"));
    assert_eq!(split_record(header).len(), 23);
}

#[test]
fn test_converted_rows_follow_input_order() {
    let bytes = convert_file(SAMPLE_EXPORT, ConversionConfig::with_label("выпуск 2024"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "Иван,,ПМ-35 ПОНОМАРЕВ,,,,,,,,,,,,,,выпуск 2024,,ivan@new.ru,,ivan@lk.ru,,+79990000001"
    );
    assert_eq!(
        lines[2],
        "Anna,,ГР-1 Petrova,,,,,,,,,,,,,,выпуск 2024,,anna@new.ru,,anna@lk.ru,,+79990000002"
    );
}

#[test]
fn test_provisioned_email_lands_in_email_1() {
    let bytes = convert_file(SAMPLE_EXPORT, ConversionConfig::with_label(""));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let fields = split_record(text.lines().nth(1).unwrap());

    // The deliberate swap: created mailbox first, personal login second
    assert_eq!(fields[18], "ivan@new.ru");
    assert_eq!(fields[20], "ivan@lk.ru");
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = tempdir().unwrap();
    let source = RecordSource::from_file(dir.path().join("absent.csv"));
    let converter = ContactConverter::new(ConversionConfig::with_label(""));
    let mut output = Vec::new();

    let result = converter.convert_source(&source, &mut output);
    assert_matches!(result, Err(ConvertError::Io { path: Some(_), .. }));
    // Nothing is written on a failed open
    assert!(output.is_empty());
}

#[test]
fn test_input_with_bom_converts_cleanly() {
    let input = format!("\u{feff}{}", SAMPLE_EXPORT);
    let bytes = convert_file(&input, ConversionConfig::with_label(""));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text.lines().count(), 3);
}
