//! Command-line interface definitions.

use clap::Parser;

/// Collect the Youm7 breaking-news articles into a single report.
///
/// # Examples
///
/// ```sh
/// # Write the report into the current directory
/// youm7_digest
///
/// # Report plus JSON companion, with a custom source file
/// youm7_digest -o ./reports -j ./json -c ./source.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the report
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Optional output directory for the JSON companion
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Optional path to a YAML file overriding the source settings
    #[arg(short, long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["youm7_digest"]);

        assert_eq!(cli.output_dir, ".");
        assert!(cli.json_output_dir.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "youm7_digest",
            "--output-dir",
            "./reports",
            "--json-output-dir",
            "./json",
            "--config",
            "./source.yaml",
        ]);

        assert_eq!(cli.output_dir, "./reports");
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
        assert_eq!(cli.config.as_deref(), Some("./source.yaml"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["youm7_digest", "-o", "/tmp/reports", "-j", "/tmp/json"]);

        assert_eq!(cli.output_dir, "/tmp/reports");
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }
}
