use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Target languages offered for the translated summary.
pub const TARGET_LANGUAGES: [&str; 5] = ["en", "ta", "hi", "fr", "es"];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a text or document, translate the summary, and report metrics
    Summarize {
        /// Text to summarize, passed directly on the command line
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Input document (.txt, .pdf, .docx)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Minimum summary length in tokens
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(10..=100))]
        min_length: u32,

        /// Maximum summary length in tokens
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(30..=300))]
        max_length: u32,

        /// Target language for the translated summary
        #[arg(long, default_value = "en", value_parser = TARGET_LANGUAGES)]
        target_lang: String,

        /// Output directory for summary.txt and the HTML report
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Extract plain text from a document
    Extract {
        /// Input document (.txt, .pdf, .docx)
        #[arg(short, long)]
        input: PathBuf,

        /// Output text file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute readability metrics for a text or document
    Metrics {
        /// Text to analyze, passed directly on the command line
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Input document (.txt, .pdf, .docx)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_defaults() {
        let args = Args::parse_from(["tinytalk", "summarize", "--text", "hello"]);
        match args.command {
            Commands::Summarize { min_length, max_length, target_lang, .. } => {
                assert_eq!(min_length, 30);
                assert_eq!(max_length, 60);
                assert_eq!(target_lang, "en");
            }
            _ => panic!("expected summarize command"),
        }
    }

    #[test]
    fn test_min_length_out_of_range_rejected() {
        let result = Args::try_parse_from([
            "tinytalk", "summarize", "--text", "hello", "--min-length", "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_target_language_rejected() {
        let result = Args::try_parse_from([
            "tinytalk", "summarize", "--text", "hello", "--target-lang", "de",
        ]);
        assert!(result.is_err());
    }
}
