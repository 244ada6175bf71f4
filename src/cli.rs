use clap::Parser;
use std::path::PathBuf;

use issue_notifier::application::dto::OutputFormat;

/// Replay a recorded analysis through the issue notification step
#[derive(Parser, Debug)]
#[command(name = "issue-notifier")]
#[command(version)]
#[command(
    about = "Replay a recorded analysis through the issue notification step",
    long_about = None
)]
pub struct Args {
    /// Path to the analysis fixture (JSON)
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Report format: json or markdown (defaults to json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report file path (if not specified, the report goes to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to issue-notifier.config.yml next to the fixture)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["issue-notifier", "fixture.json"]).unwrap();
        assert_eq!(args.fixture, PathBuf::from("fixture.json"));
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "issue-notifier",
            "fixture.json",
            "-f",
            "md",
            "-o",
            "report.md",
            "-c",
            "custom.yml",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert!(args.quiet);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["issue-notifier", "fixture.json", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_fixture_required() {
        assert!(Args::try_parse_from(["issue-notifier"]).is_err());
    }
}
