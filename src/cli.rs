use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textviz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore text documents visually")]
#[command(
    long_about = "TextViz reads a text, CSV, XLSX, or JSON file, normalizes its textual \
                       content, and reports word statistics with terminal visualizations."
)]
#[command(before_help = "📊 TextViz - Text Data Visualizer")]
#[command(after_help = "EXAMPLES:\n  \
    textviz notes.txt\n  \
    textviz survey.csv --top-n 10\n  \
    textviz report.xlsx --chart-width 60 --no-crowd\n  \
    textviz records.json --output-format json\n\n\
    For more information, visit: https://github.com/user/textviz")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Document to analyze (.txt, .csv, .xlsx, or .json)
    #[arg(required_unless_present = "generate_config")]
    pub file: Option<PathBuf>,

    /// Number of top-ranked words to report
    #[arg(short = 'n', long, help = "How many ranked words to show (default: 20)")]
    pub top_n: Option<usize>,

    /// Maximum file size in MB
    #[arg(long, help = "Maximum file size to process (in MB)")]
    pub max_size: Option<u64>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Width of the frequency bar chart in columns
    #[arg(long, help = "Bar length for the most frequent word")]
    pub chart_width: Option<usize>,

    /// Width of the word crowd in columns
    #[arg(long, help = "Wrap column for the word-prominence crowd")]
    pub crowd_width: Option<usize>,

    /// Skip the frequency bar chart
    #[arg(long)]
    pub no_chart: bool,

    /// Skip the word-prominence crowd
    #[arg(long)]
    pub no_crowd: bool,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        let max_file_size = self.max_size.map(|size| size * 1024 * 1024); // Convert MB to bytes

        CliOverrides::new()
            .with_top_n(self.top_n)
            .with_max_file_size(max_file_size)
            .with_chart_width(self.chart_width)
            .with_crowd_width(self.crowd_width)
            .with_no_chart(self.no_chart)
            .with_no_crowd(self.no_crowd)
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
