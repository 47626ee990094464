use crate::error::{Result, TextVizError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub render: RenderConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// How many ranked words to report and chart.
    pub top_n: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    pub chart_width: usize,
    pub crowd_width: usize,
    pub show_chart: bool,
    pub show_crowd: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub max_file_size: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: crate::analyzer::DEFAULT_TOP_N,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chart_width: 40,
            crowd_width: 72,
            show_chart: true,
            show_crowd: true,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TextVizError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| TextVizError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| TextVizError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["textviz.toml", ".textviz.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(top_n) = cli_args.top_n {
            self.analysis.top_n = top_n;
        }

        if let Some(max_size) = cli_args.max_file_size {
            self.limits.max_file_size = max_size;
        }

        if let Some(chart_width) = cli_args.chart_width {
            self.render.chart_width = chart_width;
        }

        if let Some(crowd_width) = cli_args.crowd_width {
            self.render.crowd_width = crowd_width;
        }

        if cli_args.no_chart {
            self.render.show_chart = false;
        }

        if cli_args.no_crowd {
            self.render.show_crowd = false;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| TextVizError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| TextVizError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis.top_n == 0 {
            return Err(TextVizError::Config {
                message: "top_n must be greater than 0".to_string(),
            });
        }

        if self.limits.max_file_size == 0 {
            return Err(TextVizError::Config {
                message: "Maximum file size must be greater than 0".to_string(),
            });
        }

        if self.render.chart_width == 0 {
            return Err(TextVizError::Config {
                message: "Chart width must be greater than 0".to_string(),
            });
        }

        if self.render.crowd_width == 0 {
            return Err(TextVizError::Config {
                message: "Crowd width must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let defaults = Self::default();
        format!(
            "# TextViz configuration file\n\
             # Place this next to where you run textviz (textviz.toml or .textviz.toml),\n\
             # or pass it explicitly with --config <path>.\n\
             \n\
             [analysis]\n\
             # How many ranked words to report and chart\n\
             top_n = {top_n}\n\
             \n\
             [render]\n\
             # Bar length (in columns) for the most frequent word\n\
             chart_width = {chart_width}\n\
             # Wrap column for the word-prominence crowd\n\
             crowd_width = {crowd_width}\n\
             # Toggle the two visualizations\n\
             show_chart = {show_chart}\n\
             show_crowd = {show_crowd}\n\
             \n\
             [limits]\n\
             # Maximum file size in bytes\n\
             max_file_size = {max_file_size}\n",
            top_n = defaults.analysis.top_n,
            chart_width = defaults.render.chart_width,
            crowd_width = defaults.render.crowd_width,
            show_chart = defaults.render.show_chart,
            show_crowd = defaults.render.show_crowd,
            max_file_size = defaults.limits.max_file_size,
        )
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub top_n: Option<usize>,
    pub max_file_size: Option<u64>,
    pub chart_width: Option<usize>,
    pub crowd_width: Option<usize>,
    pub no_chart: bool,
    pub no_crowd: bool,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, top_n: Option<usize>) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_max_file_size(mut self, max_size: Option<u64>) -> Self {
        self.max_file_size = max_size;
        self
    }

    pub fn with_chart_width(mut self, width: Option<usize>) -> Self {
        self.chart_width = width;
        self
    }

    pub fn with_crowd_width(mut self, width: Option<usize>) -> Self {
        self.crowd_width = width;
        self
    }

    pub fn with_no_chart(mut self, no_chart: bool) -> Self {
        self.no_chart = no_chart;
        self
    }

    pub fn with_no_crowd(mut self, no_crowd: bool) -> Self {
        self.no_crowd = no_crowd;
        self
    }
}
