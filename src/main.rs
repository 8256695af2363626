use clap::Parser;
use std::fs::{self, File};
use std::io::BufWriter;

use contactconv::cli::{self, Args, CliConfig, CliUtils};
use contactconv::conversion::ContactConverter;
use contactconv::error::{ConvertError, ConvertResult};
use contactconv::parser::RecordSource;

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        cli::handle_error(&error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> ConvertResult<()> {
    // Resolve the label before touching any file, as the reference tool did
    let label = match &args.label {
        Some(label) => label.clone(),
        None => cli::prompt_label()
            .map_err(|e| ConvertError::Other(anyhow::anyhow!("failed to read label: {}", e)))?,
    };

    let config = CliConfig::new(args, label);
    let source = config.input_source();
    let output_path = config.output_path();
    let quiet = config.is_quiet();

    if !quiet {
        println!("Reading from {}", source.description());
        println!(
            "Writing to {} ({})",
            output_path.display(),
            config.conversion_config.output_encoding.as_str()
        );
        let label = &config.conversion_config.label;
        println!(
            "Using group label: '{}'",
            if label.is_empty() { "[empty]" } else { label }
        );
    }

    // Input is opened before the output file is created, so a missing input
    // never truncates an existing output
    let reader = source.open().map_err(|e| match &source {
        RecordSource::File(path) => ConvertError::io(e.to_string(), Some(path.clone())),
        RecordSource::Stdin => ConvertError::io(e.to_string(), None),
    })?;

    let output_file = File::create(&output_path)
        .map_err(|e| ConvertError::io(e.to_string(), Some(output_path.clone())))?;
    let mut writer = BufWriter::new(output_file);

    let converter = ContactConverter::new(config.conversion_config.clone());
    let report = converter.convert(reader, &mut writer)?;

    for warning in &report.warnings {
        CliUtils::show_warning(&warning.to_string(), quiet);
    }

    CliUtils::show_success(
        &format!(
            "Processed {} data rows into {}",
            report.statistics.rows_converted,
            output_path.display()
        ),
        quiet,
    );

    if config.want_stats() && !quiet {
        println!("\nConversion statistics:");
        println!("{}", report.statistics.summary());
    }

    if let Some(report_path) = &config.args.report {
        let json = report
            .to_json()
            .map_err(|e| ConvertError::Other(anyhow::anyhow!("failed to render report: {}", e)))?;
        fs::write(report_path, json)
            .map_err(|e| ConvertError::io(e.to_string(), Some(report_path.clone())))?;
        CliUtils::show_success(&format!("Report written to {}", report_path.display()), quiet);
    }

    Ok(())
}
