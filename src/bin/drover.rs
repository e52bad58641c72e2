//! Drover CLI binary.
//!
//! One subcommand per account action, mirroring the per-action scripts the
//! queue replaces. Remote operations go through the dry-run ledger client;
//! a real client implementation plugs in behind the same trait.

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use drover::actions::{
    AccountAction, CommentAction, FollowAction, PostAction, ProfileAction, VoteAction,
};
use drover::config::SwarmConfig;
use drover::content::{ContentSource, HttpContentSource};
use drover::ledger::{DryRunLedger, LedgerClient};
use drover::logging::init_logging;
use drover::queue::WorkQueue;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Drive a directory of account files through one ledger action each"
)]
struct Cli {
    /// Directory of account credential files
    #[arg(short, long, default_value = "accounts")]
    accounts_dir: PathBuf,

    /// Worker pool size
    #[arg(short, long)]
    workers: Option<usize>,

    /// Skip the external content API; content-producing actions fall back
    /// to built-in templates and profile updates carry no images
    #[arg(long)]
    offline: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Publish one post per account
    Post {
        /// Post title (the permlink is derived from it)
        #[arg(long)]
        title: Option<String>,

        /// Prompt for externally generated bodies
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Comment on the target author's latest post
    Comment {
        #[arg(short, long)]
        target: String,
    },
    /// Upvote the target author's latest post, then comment on it
    Vote {
        #[arg(short, long)]
        target: String,

        /// Vote weight percentage
        #[arg(long, default_value_t = 20)]
        weight: i32,
    },
    /// Follow the target account from every account
    Follow {
        #[arg(short, long)]
        target: String,
    },
    /// Fill in missing profile and cover images
    Profile,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SwarmConfig::for_dir(&cli.accounts_dir);
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging)?;

    let ledger: Arc<dyn LedgerClient> = Arc::new(DryRunLedger);
    let content: Option<Arc<dyn ContentSource>> = if cli.offline {
        None
    } else {
        Some(Arc::new(
            HttpContentSource::new(&config.content).context("building content client")?,
        ))
    };

    let action: Arc<dyn AccountAction> = match &cli.command {
        Command::Post { title, prompt } => {
            let mut action = PostAction::new(Arc::clone(&ledger), content, &config.content)?;
            if let Some(title) = title {
                action = action.with_title(title);
            }
            if let Some(prompt) = prompt {
                action = action.with_prompt(prompt);
            }
            Arc::new(action)
        }
        Command::Comment { target } => Arc::new(CommentAction::new(Arc::clone(&ledger), target)?),
        Command::Vote { target, weight } => {
            Arc::new(VoteAction::new(Arc::clone(&ledger), target)?.with_weight(*weight))
        }
        Command::Follow { target } => Arc::new(FollowAction::new(Arc::clone(&ledger), target)),
        Command::Profile => Arc::new(ProfileAction::new(Arc::clone(&ledger), content)),
    };

    info!(
        action = action.name(),
        dir = %config.accounts_dir.display(),
        "drover starting"
    );

    let queue = WorkQueue::new(config)?;
    let summary = queue.run(action).await?;
    println!("{}", summary);
    Ok(())
}
