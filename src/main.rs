use clap::Parser;
use std::process;
use textviz::{
    Cli, OutputFormat, OutputFormatter, OutputMode, TextViz, TextVizError, UserFriendlyError,
};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create TextViz instance
    let textviz = match TextViz::from_cli(&cli) {
        Ok(textviz) => textviz,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // clap guarantees a file unless --generate-config was given
    let Some(file) = cli.file.as_deref() else {
        print_startup_error(&TextVizError::Config {
            message: "No input file provided".to_string(),
        });
        return 1;
    };

    // Execute main analysis workflow
    match textviz.analyze_file(file) {
        Ok(report) => {
            textviz.output_formatter().print_analysis_report(&report);
            textviz.print_visualizations(&report);
            // JSON mode keeps stdout to the report alone
            if !matches!(cli.output_format, OutputFormat::Json) {
                textviz.output_formatter().success("Analysis complete");
            }
            0
        }
        Err(e) => {
            textviz.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                TextVizError::UnsupportedFormat { .. } => 2,
                TextVizError::Decode { .. } => 3,
                TextVizError::Parse { .. } => 4,
                TextVizError::EmptyDocument => 5,
                TextVizError::FileTooLarge { .. } => 6,
                TextVizError::Io(_) => 7,
                TextVizError::Config { .. } => 8,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "textviz.toml".to_string());

    match TextViz::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  textviz <file> --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &TextVizError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
