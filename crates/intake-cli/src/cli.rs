//! CLI argument definitions for the intake harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Discovery questionnaire harness - inspect, validate, and deliver submissions",
    long_about = "Operator harness for the discovery questionnaire engine.\n\n\
                  Lists the embedded questionnaire variants, validates answer files\n\
                  against them, previews the formatted submission document, and\n\
                  delivers submissions through the configured email relay."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the embedded questionnaire variants.
    Variants,

    /// Show a variant's sections and questions.
    Show(ShowArgs),

    /// Validate an answers file against a variant.
    Check(CheckArgs),

    /// Print the submission document an answers file would produce.
    Preview(PreviewArgs),

    /// Validate, format, and deliver an answers file through the relay.
    Send(SendArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Variant id (e.g. "gdpr", "iso-27001").
    #[arg(value_name = "VARIANT")]
    pub variant: String,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Variant id the answers belong to.
    #[arg(value_name = "VARIANT")]
    pub variant: String,

    /// JSON file mapping question ids to answers.
    #[arg(long = "answers", value_name = "FILE")]
    pub answers: PathBuf,

    /// Emit the validation report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Variant id the answers belong to.
    #[arg(value_name = "VARIANT")]
    pub variant: String,

    /// JSON file mapping question ids to answers.
    #[arg(long = "answers", value_name = "FILE")]
    pub answers: PathBuf,

    /// Source page recorded in the document header.
    #[arg(long = "source-page", value_name = "PATH")]
    pub source_page: Option<String>,
}

#[derive(Parser)]
pub struct SendArgs {
    /// Variant id the answers belong to.
    #[arg(value_name = "VARIANT")]
    pub variant: String,

    /// JSON file mapping question ids to answers.
    #[arg(long = "answers", value_name = "FILE")]
    pub answers: PathBuf,

    /// Relay endpoint URL the document is POSTed to.
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: String,

    /// Access key forwarded to the relay, when it wants one.
    #[arg(long = "access-key", value_name = "KEY")]
    pub access_key: Option<String>,

    /// Source page recorded in the document header.
    #[arg(long = "source-page", value_name = "PATH")]
    pub source_page: Option<String>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
