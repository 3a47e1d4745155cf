//! RSVP CLI Application
//!
//! Interactive terminal front-end for the RSVP wizard engine: renders the
//! step screens, feeds answers into the navigation controller, and hands
//! the completed record to the webhook gateway.

mod app;
mod args;
mod renderer;
mod screens;

use std::sync::Arc;

use anyhow::Result;
use args::Args;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use rsvp_core::{NullGateway, SubmissionGateway, WebhookGateway};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        webhook_url,
        no_color,
        skip_welcome,
        answers_file,
    } = Args::parse();

    let gateway: Arc<dyn SubmissionGateway> = match webhook_url {
        Some(url) => {
            info!("delivering to webhook at {url}");
            Arc::new(WebhookGateway::new(url))
        }
        None => {
            info!("no webhook configured, dry run");
            Arc::new(NullGateway)
        }
    };

    let renderer = TerminalRenderer::new(!no_color);

    match answers_file {
        Some(path) => app::submit_answers_file(&path, gateway, &renderer).await,
        None => app::App::new(gateway, renderer, skip_welcome).run().await,
    }
}
