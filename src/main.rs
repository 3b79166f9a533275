mod cmd;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;

use crate::cmd::points::{self, PointsCommandArgs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::jira::JiraClient;

#[derive(Parser)]
#[command(
    name = "story",
    author,
    version,
    about = "Sum story points across the issues matched by a JIRA search URL"
)]
struct Cli {
    /// Search URL carrying a jql= parameter
    /// (e.g., https://issues.example.com/issues/?jql=project%20%3D%20ABC).
    jira_url: String,
    /// Bearer token for the tracker API.
    #[arg(short, long)]
    token: String,
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let issue_tracker = Arc::new(JiraClient::new(cli.token));
    let context = AppContext::new(issue_tracker);

    let report = points::run(
        &context,
        PointsCommandArgs {
            search_url: cli.jira_url,
        },
    )
    .await?;

    println!("Total Story Points: {}", report.total);
    if !report.missing.is_empty() {
        println!("\nIssues without story points:");
        for link in &report.missing {
            println!("{link}");
        }
    }

    Ok(())
}
