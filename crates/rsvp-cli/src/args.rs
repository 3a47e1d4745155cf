use std::path::PathBuf;

use clap::Parser;

/// Interactive RSVP questionnaire for the wedding weekend
///
/// Walks a guest through the travel, accommodation, celebration, and
/// contact questions one step at a time, then delivers the completed
/// answers to the configured webhook. Without a webhook URL the run is a
/// dry run: answers are collected and shown, nothing leaves the machine.
#[derive(Parser)]
#[command(version, about, name = "rsvp")]
pub struct Args {
    /// Webhook endpoint that receives the completed answers as JSON.
    /// Omit for a dry run.
    #[arg(long, global = true)]
    pub webhook_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Start at the first question instead of the welcome screen
    #[arg(long)]
    pub skip_welcome: bool,

    /// Submit a completed answers JSON file instead of running
    /// interactively. The file uses the same camelCase field names as the
    /// webhook payload.
    #[arg(long, value_name = "FILE")]
    pub answers_file: Option<PathBuf>,
}
