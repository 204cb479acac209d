use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use locus_model::operation;
use locus_model::registry::{self, CheckReport, ShapeEntry};
use locus_shape::{FieldSchema, ShapeKind, ShapeSchema, ValidationConfig};

use crate::cli::*;
use crate::config::{CliConfig, OutputFormat};

/// Runs one subcommand. `Ok(false)` means a checked document had violations.
pub fn run_command(cli: Cli, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let format = cli.format.unwrap_or(config.output.format);
    match cli.command {
        Command::Shapes(args) => cmd_shapes(args, format, out).map(|_| true),
        Command::Describe(args) => cmd_describe(args, format, out).map(|_| true),
        Command::Operations(_) => cmd_operations(format, out).map(|_| true),
        Command::Check(args) => cmd_check(args, &config.validation, format, out),
    }
}

fn kind_label(kind: ShapeKind) -> colored::ColoredString {
    match kind {
        ShapeKind::Request => kind.as_str().cyan(),
        ShapeKind::Result => kind.as_str().green(),
        ShapeKind::Structure => kind.as_str().dimmed(),
    }
}

fn cmd_shapes(args: ShapesArgs, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let entries: Vec<&ShapeEntry> = match args.kind {
        Some(kind) => registry::by_kind(kind.into()).collect(),
        None => registry::entries().iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let schemas: Vec<&ShapeSchema> = entries.iter().map(|entry| entry.schema()).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&schemas)?)?;
        }
        OutputFormat::Text => {
            for entry in &entries {
                writeln!(
                    out,
                    "{:<40} {:<10} {} fields",
                    entry.name.bold(),
                    kind_label(entry.kind),
                    entry.schema().fields.len()
                )?;
            }
            writeln!(out, "\n{} shapes", entries.len())?;
        }
    }
    Ok(())
}

fn field_line(field: &FieldSchema) -> String {
    let required = if field.required {
        "required".yellow().to_string()
    } else {
        "optional".dimmed().to_string()
    };
    let constraints = field.describe_constraints();
    let mut line = format!("  {:<28} {:<28} {}", field.wire_name.bold(), field.type_name, required);
    if !constraints.is_empty() {
        line.push_str(&format!("  {}", constraints.dimmed()));
    }
    line
}

fn cmd_describe(args: DescribeArgs, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let entry = registry::lookup(&args.shape)?;
    let schema = entry.schema();

    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(schema)?)?;
        return Ok(());
    }

    writeln!(out, "{} ({})", schema.name.bold(), kind_label(schema.kind))?;
    if schema.fields.is_empty() {
        writeln!(out, "  (no fields)")?;
    }
    for field in schema.fields {
        writeln!(out, "{}", field_line(field))?;
    }

    let used_by: Vec<String> = operation::ALL
        .iter()
        .filter_map(|op| {
            if op.input == schema.name {
                Some(format!("{} (input)", op.name))
            } else if op.output == schema.name {
                Some(format!("{} (output)", op.name))
            } else {
                None
            }
        })
        .collect();
    if !used_by.is_empty() {
        writeln!(out, "Used by: {}", used_by.join(", "))?;
    }
    Ok(())
}

fn cmd_operations(format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(operation::ALL)?)?;
        }
        OutputFormat::Text => {
            for op in operation::ALL {
                writeln!(out, "{:<30} {} → {}", op.name.bold(), op.input, op.output)?;
            }
        }
    }
    Ok(())
}

fn cmd_check(
    args: CheckArgs,
    validation: &ValidationConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let entry = registry::lookup(&args.shape)?;
    let json = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut config = validation.clone();
    if args.shallow {
        config.recurse = false;
    }
    let report = entry.check(&json, &config)?;

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => write_report(&report, out)?,
    }
    Ok(report.is_valid())
}

fn write_report(report: &CheckReport, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{} {}", report.shape.bold(), report.rendering)?;
    if report.is_valid() {
        writeln!(out, "{} no violations", "✓".green().bold())?;
        return Ok(());
    }
    for violation in &report.violations {
        writeln!(out, "  {} {}", "✗".red(), violation)?;
    }
    writeln!(out, "{} violation(s)", report.violations.len().to_string().red().bold())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> (bool, String) {
        colored::control::set_override(false);
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let ok = run_command(cli, &CliConfig::default(), &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn shapes_filters_by_kind() {
        let (_, text) = run(&["locus", "shapes", "--kind", "request"]);
        assert!(text.contains("CalculateRouteRequest"));
        assert!(!text.contains("CalculateRouteResult"));
        assert!(text.trim_end().ends_with("53 shapes"));

        let (_, all) = run(&["locus", "shapes"]);
        assert!(all.contains("CalculateRouteResult"));
        assert!(all.trim_end().ends_with("158 shapes"));
    }

    #[test]
    fn describe_lists_constraints_and_operations() {
        let (_, text) = run(&["locus", "describe", "CalculateRouteRequest"]);
        assert!(text.starts_with("CalculateRouteRequest (request)"));
        assert!(text.contains(r"Length: 1 - 100; Pattern: ^[-._\w]+$"));
        assert!(text.contains("WaypointPositions"));
        assert!(text.contains("Used by: CalculateRoute (input)"));
    }

    #[test]
    fn describe_unknown_shape_fails() {
        let cli = Cli::try_parse_from(["locus", "describe", "Nope"]).unwrap();
        let err = run_command(cli, &CliConfig::default(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "unknown shape: Nope");
    }

    #[test]
    fn operations_as_json() {
        let (_, text) = run(&["locus", "operations", "--format", "json"]);
        let ops: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(ops.as_array().map(Vec::len), Some(53));
        assert_eq!(ops[0]["name"], "AssociateTrackerConsumer");
    }

    #[test]
    fn check_valid_and_invalid_documents() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        std::fs::write(
            &good,
            r#"{"CalculatorName": "c", "DeparturePosition": [1, 2], "DestinationPosition": [3, 4]}"#,
        )
        .unwrap();
        let good_path = good.to_str().unwrap();
        let (ok, text) = run(&["locus", "check", "CalculateRouteRequest", good_path]);
        assert!(ok);
        assert!(text.contains("no violations"));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"Legs": [{"Distance": -1}]}"#).unwrap();
        let bad_path = bad.to_str().unwrap();
        let (ok, text) = run(&["locus", "check", "CalculateRouteResult", bad_path]);
        assert!(!ok);
        assert!(text.contains("Legs[0].Distance: value -1 outside [0, ]"));
        assert!(text.contains("Summary: required member is absent"));

        let (ok, text) = run(&["locus", "check", "CalculateRouteResult", bad_path, "--shallow"]);
        assert!(!ok);
        assert!(!text.contains("Legs[0]"));
    }

    #[test]
    fn check_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");
        std::fs::write(&path, r#"{"Tags": {"a": "1"}}"#).unwrap();
        let (ok, text) = run(&[
            "locus", "check", "ListTagsForResourceResult", path.to_str().unwrap(), "--format", "json",
        ]);
        assert!(ok);
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["rendering"], "{Tags: {a=1}}");
        assert_eq!(report["violations"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn check_missing_file_reports_path() {
        let cli = Cli::try_parse_from(["locus", "check", "Leg", "/nonexistent/leg.json"]).unwrap();
        let err = run_command(cli, &CliConfig::default(), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("reading /nonexistent/leg.json"));
    }
}
