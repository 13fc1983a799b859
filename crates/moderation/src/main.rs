//! # moderate-prs
//!
//! CI entry point for pull request label moderation.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moderation::{moderate, GitHubHost, ModerationConfig};

#[derive(Parser)]
#[command(name = "moderate-prs")]
#[command(about = "Close pull requests carrying the spam label", long_about = None)]
struct Cli {
    /// Pull request number to check
    #[arg(short, long, env = "PR_NUMBER")]
    number: u64,
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moderation=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = ModerationConfig::from_env().unwrap_or_else(|e| {
        eprintln!("configuration error: {}", e);
        std::process::exit(2);
    });
    let host = GitHubHost::new(config).unwrap_or_else(|e| {
        eprintln!("client error: {}", e);
        std::process::exit(2);
    });

    match moderate(&host, cli.number).await {
        Ok(outcome) => println!("pull request #{}: {}", cli.number, outcome),
        Err(e) => {
            tracing::error!(number = cli.number, error = %e, "moderation failed");
            std::process::exit(1);
        }
    }
}
