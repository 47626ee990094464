pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod render;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{AnalysisConfig, CliOverrides, Config, LimitsConfig, RenderConfig};
pub use error::{Result, TextVizError, UserFriendlyError};

// Core functionality re-exports
pub use analyzer::{analyze, normalize, Statistics, WordCount, DEFAULT_TOP_N};
pub use extractor::{DocumentFormat, RawText, UploadedDocument};
pub use render::{render_bar_chart, render_word_crowd};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Everything derived from one analyzed document. This is the output
/// boundary: the counts and ranked table feed the bar chart, and the
/// normalized text feeds prominence rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub file_name: String,
    pub format: DocumentFormat,
    pub analyzed_at: DateTime<Utc>,
    pub file_size: u64,
    pub character_count: usize,
    pub word_count: usize,
    pub unique_word_count: usize,
    pub top_words: Vec<WordCount>,
    pub normalized_text: String,
}

/// Processes one document start to finish: extract, check for emptiness,
/// analyze. Pure apart from reading the already-loaded bytes; invoked once
/// per document with no ambient state.
pub fn process(document: &UploadedDocument) -> Result<Statistics> {
    let raw_text = document.extract()?;

    if raw_text.is_empty() {
        return Err(TextVizError::EmptyDocument);
    }

    Ok(analyze(&raw_text))
}

/// Main library interface for TextViz functionality
pub struct TextViz {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl TextViz {
    /// Create a new TextViz instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let show_progress = !quiet && output_mode == OutputMode::Human;
        let progress_manager = ProgressManager::new(show_progress);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create TextViz instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Analyze a document file and produce a report
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport> {
        let document = self.read_document(path)?;
        let format = document.format()?;

        let spinner = self.progress_manager.create_spinner("Analyzing document");
        self.progress_manager.suspend(|| {
            self.output_formatter.info(&format!(
                "Extracting text from {} document",
                format.display_name()
            ));
        });
        let result = process(&document);
        spinner.finish_and_clear();

        let statistics = result?;
        self.output_formatter.debug(&format!(
            "{} tokens, {} distinct",
            statistics.word_count, statistics.unique_word_count
        ));

        if statistics.is_empty() {
            self.output_formatter
                .warning("No words remained after normalization");
        }

        Ok(self.create_report(&document, statistics))
    }

    /// Render the configured visualizations for a report
    pub fn print_visualizations(&self, report: &AnalysisReport) {
        if self.config.render.show_chart {
            let chart = render_bar_chart(&report.top_words, self.config.render.chart_width);
            self.output_formatter
                .print_visualization("Most Frequent Words", &chart);
        }

        if self.config.render.show_crowd {
            let crowd = render_word_crowd(&report.top_words, self.config.render.crowd_width);
            self.output_formatter.print_visualization("Word Crowd", &crowd);
        }
    }

    /// Read a document into memory, enforcing the size limit up front.
    /// One bounded read-to-completion; the file is read fully or the
    /// operation fails outright.
    fn read_document(&self, path: &Path) -> Result<UploadedDocument> {
        let metadata = std::fs::metadata(path)?;
        let max_size = self.config.limits.max_file_size;

        if metadata.len() > max_size {
            return Err(TextVizError::FileTooLarge {
                size: metadata.len(),
                max_size,
            });
        }

        let progress = self
            .progress_manager
            .create_bytes_progress(metadata.len(), "Reading document");
        let file = std::fs::File::open(path)?;
        let mut content = Vec::with_capacity(metadata.len() as usize);
        progress.wrap_read(file).read_to_end(&mut content)?;
        progress.finish_and_clear();

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(UploadedDocument::new(name, content))
    }

    fn create_report(&self, document: &UploadedDocument, statistics: Statistics) -> AnalysisReport {
        let top_words = statistics.top(self.config.analysis.top_n).to_vec();

        AnalysisReport {
            file_name: document.name.clone(),
            // format() cannot fail here: extraction already succeeded
            format: document.format().unwrap_or(DocumentFormat::PlainText),
            analyzed_at: Utc::now(),
            file_size: document.size(),
            character_count: statistics.character_count,
            word_count: statistics.word_count,
            unique_word_count: statistics.unique_word_count,
            top_words,
            normalized_text: statistics.normalized_text,
        }
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(TextVizError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &TextVizError) {
        self.progress_manager.clear();
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
