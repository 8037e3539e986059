//! Command implementations

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::args::{DetectArgs, ExportArgs, FormatArg, ImportArgs, ToolsArgs};
use crate::convert::{hvif, iom, ConvertOptions};
use crate::probe::{format, ToolInspector};

/// Execute the import command
pub fn import(args: ImportArgs, options: &ConvertOptions) -> Result<()> {
    info!("Starting import");
    info!("Input: {}", args.input);

    let input = read_input(&args.input)?;

    let source_format = match args.format {
        Some(FormatArg::Hvif) => format::IconFormat::Hvif,
        Some(FormatArg::Iom) => format::IconFormat::Iom,
        None => detect_import_format(&args.input, &input)?,
    };
    info!("Source format: {}", source_format);

    let svg = match source_format {
        format::IconFormat::Hvif => hvif::import(&input[..], options)?,
        format::IconFormat::Iom => iom::import(&input[..], options)?,
        format::IconFormat::Svg => {
            anyhow::bail!("Input is already SVG, nothing to import")
        }
    };

    write_output(args.output.as_deref(), &svg)?;
    info!("Import completed successfully");
    Ok(())
}

/// Execute the export command
pub fn export(args: ExportArgs, options: &ConvertOptions) -> Result<()> {
    info!("Starting export");
    info!("Input: {}", args.input);
    info!("Target format: {:?}", args.format);

    let svg = read_input(&args.input)?;

    let mut converted = Vec::new();
    match args.format {
        FormatArg::Hvif => hvif::export(&svg, &mut converted, options)?,
        FormatArg::Iom => iom::export(&svg, &mut converted, options)?,
    }

    write_output(args.output.as_deref(), &converted)?;
    info!("Export completed successfully");
    Ok(())
}

/// Execute the detect command
pub fn detect(args: DetectArgs) -> Result<()> {
    let path = Path::new(&args.input);
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input);
    }

    match format::detect_file(path).context("Failed to read input file")? {
        Some(detected) => {
            println!("{detected}");
            Ok(())
        }
        None => anyhow::bail!("Unrecognized icon format: {}", args.input),
    }
}

/// Execute the tools command
pub fn tools(args: ToolsArgs, inspector: &ToolInspector) -> Result<()> {
    let report = inspector.report();

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize tool report to JSON")?;
        println!("{json}");
    } else {
        println!("Converter Tools");
        println!("===============");
        for status in &report {
            match &status.path {
                Some(path) => println!("  {:<10} {}", status.name, path.display()),
                None => println!("  {:<10} not found", status.name),
            }
        }
    }

    if report.iter().all(|s| s.found()) {
        Ok(())
    } else {
        anyhow::bail!("One or more converter tools are missing")
    }
}

/// Pick the importer format from the input bytes, then the file extension
fn detect_import_format(input_name: &str, bytes: &[u8]) -> Result<format::IconFormat> {
    if let Some(detected) = format::detect(bytes) {
        return Ok(detected);
    }
    if input_name != "-" {
        if let Some(detected) = format::detect_by_extension(Path::new(input_name)) {
            return Ok(detected);
        }
    }
    anyhow::bail!("Could not detect icon format; pass --format hvif or --format iom")
}

/// Read a file argument, "-" meaning stdin
fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        Ok(bytes)
    } else {
        std::fs::read(input).with_context(|| format!("Failed to read input file: {input}"))
    }
}

/// Write result bytes to a file argument, "-" or absent meaning stdout
fn write_output(output: Option<&str>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) if path != "-" => {
            let mut file =
                File::create(path).with_context(|| format!("Failed to create output file: {path}"))?;
            file.write_all(bytes)
                .with_context(|| format!("Failed to write output file: {path}"))?;
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(bytes).context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
