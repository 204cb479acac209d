use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use locus_shape::ShapeKind;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "locus",
    about = "Inspect Amazon Location Service shapes and check documents against them",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML settings file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Overrides the configured output format.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered shapes
    Shapes(ShapesArgs),
    /// Show the fields and constraints of one shape
    Describe(DescribeArgs),
    /// List operations with their input and output shapes
    Operations(OperationsArgs),
    /// Parse a JSON document as a shape and validate it
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ShapesArgs {
    #[arg(long)]
    pub kind: Option<KindArg>,
}

#[derive(Args)]
pub struct DescribeArgs {
    pub shape: String,
}

#[derive(Args)]
pub struct OperationsArgs {}

#[derive(Args)]
pub struct CheckArgs {
    pub shape: String,
    pub file: PathBuf,
    /// Check only the top-level fields.
    #[arg(long)]
    pub shallow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Request,
    Result,
    Structure,
}

impl From<KindArg> for ShapeKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Request => ShapeKind::Request,
            KindArg::Result => ShapeKind::Result,
            KindArg::Structure => ShapeKind::Structure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_shapes() {
        let cli = Cli::try_parse_from(["locus", "shapes"]).unwrap();
        if let Command::Shapes(args) = cli.command {
            assert!(args.kind.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_shapes_kind() {
        let cli = Cli::try_parse_from(["locus", "shapes", "--kind", "request"]).unwrap();
        if let Command::Shapes(args) = cli.command {
            assert_eq!(args.kind, Some(KindArg::Request));
            assert_eq!(ShapeKind::from(KindArg::Request), ShapeKind::Request);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_describe() {
        let cli = Cli::try_parse_from(["locus", "describe", "Leg"]).unwrap();
        if let Command::Describe(args) = cli.command {
            assert_eq!(args.shape, "Leg");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_operations_json() {
        let cli = Cli::try_parse_from(["locus", "operations", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Operations(_)));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from([
            "locus", "check", "CalculateRouteRequest", "route.json", "--shallow", "--config", "locus.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("locus.toml")));
        if let Command::Check(args) = cli.command {
            assert_eq!(args.shape, "CalculateRouteRequest");
            assert_eq!(args.file, PathBuf::from("route.json"));
            assert!(args.shallow);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn check_requires_file() {
        assert!(Cli::try_parse_from(["locus", "check", "Leg"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["locus", "operations", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
