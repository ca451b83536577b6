//! Tinytalk - Text Summarization and Translation
//!
//! This is the main entry point for the Tinytalk application: a single
//! orchestration boundary that reads input, runs the summarization pipeline
//! against external model endpoints, and renders the results.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tinytalk::cli::{Args, Commands};
use tinytalk::config::Config;
use tinytalk::document::Document;
use tinytalk::error::TinytalkError;
use tinytalk::metrics::text_metrics;
use tinytalk::pipeline::{Pipeline, SummaryRequest};
use tinytalk::report;
use tinytalk::summarize::SummarizerFactory;
use tinytalk::translate::TranslatorFactory;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    info!("Starting Tinytalk - Text Summarization and Translation");

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Execute command
    match args.command {
        Commands::Summarize {
            text,
            input,
            min_length,
            max_length,
            target_lang,
            output_dir,
        } => {
            let document = match acquire_input(text, input) {
                Ok(document) => document,
                Err(e) => {
                    report_failure(&e);
                    return Err(e.into());
                }
            };

            // Acquire the summarization model once; a failed probe leaves
            // the pipeline permanently degraded for this process.
            let summarizer = SummarizerFactory::initialize(config.summarizer.clone()).await;
            let translator = TranslatorFactory::create(config.translate.clone());
            let pipeline = Pipeline::new(summarizer, translator);

            let request = SummaryRequest {
                min_length,
                max_length,
                target_language: target_lang,
            };

            let spinner = start_spinner("Analyzing and summarizing...");
            let result = pipeline.run(&document.text, &request).await;
            spinner.finish_and_clear();

            match result {
                Ok(outcome) => {
                    report::print_outcome(&outcome);

                    let output_dir = match output_dir {
                        Some(dir) => {
                            tokio::fs::create_dir_all(&dir).await?;
                            dir
                        }
                        None => PathBuf::from("."),
                    };

                    let summary_path = report::write_summary(
                        &outcome,
                        &output_dir,
                        &config.output.summary_filename,
                    )
                    .await?;
                    let report_path = report::write_report(
                        &outcome,
                        &output_dir,
                        &config.output.report_filename,
                        &config.output.summary_filename,
                    )
                    .await?;

                    println!();
                    println!("Summary saved to {}", summary_path.display());
                    println!("Report saved to {}", report_path.display());
                }
                Err(e) => {
                    report_failure(&e);
                    return Err(e.into());
                }
            }
        }
        Commands::Extract { input, output } => {
            info!("Extracting text from: {}", input.display());
            let document = Document::from_file(&input)?;

            match output {
                Some(output_path) => {
                    tokio::fs::write(&output_path, &document.text).await?;
                    println!("Extracted text saved to {}", output_path.display());
                }
                None => println!("{}", document.text),
            }
        }
        Commands::Metrics { text, input } => {
            let document = match acquire_input(text, input) {
                Ok(document) => document,
                Err(e) => {
                    report_failure(&e);
                    return Err(e.into());
                }
            };

            if document.text.trim().is_empty() {
                let e = TinytalkError::EmptyInput;
                report_failure(&e);
                return Err(e.into());
            }

            let metrics = text_metrics(&document.text);
            println!();
            println!("{}", report::render_metrics_panel("Text Metrics", &metrics));
        }
    }

    info!("Tinytalk completed successfully");
    Ok(())
}

/// Resolve manual text or an uploaded document into a single input.
fn acquire_input(
    text: Option<String>,
    input: Option<PathBuf>,
) -> std::result::Result<Document, TinytalkError> {
    match (text, input) {
        (Some(text), _) => Ok(Document::from_text(text)),
        (None, Some(path)) => Document::from_file(&path),
        (None, None) => Err(TinytalkError::Config(
            "Provide input with --text or --input".to_string(),
        )),
    }
}

/// Convert a pipeline failure into a user-facing message with a
/// remediation hint.
fn report_failure(error: &TinytalkError) {
    eprintln!("Error: {}", error);

    let hint = match error {
        TinytalkError::ModelUnavailable(_) => {
            Some("The model failed to load. Please make sure you have a stable internet connection and try again.")
        }
        TinytalkError::EmptyInput => Some("Please enter or upload some text first."),
        TinytalkError::Summarization(_) | TinytalkError::Translation(_) | TinytalkError::Http(_) => {
            Some("Please try again with a different text or check your connection and try again.")
        }
        TinytalkError::UnsupportedFormat(_) => {
            Some("Supported file types are .txt, .pdf, and .docx.")
        }
        _ => None,
    };

    if let Some(hint) = hint {
        eprintln!("{}", hint);
    }
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("spinner template is valid"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let app_dir = std::env::current_dir()?.join(".tinytalk");
    let log_dir = app_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "tinytalk.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
