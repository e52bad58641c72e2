//! Account work queue.
//!
//! Drives every credential file in a directory through one action attempt.
//! Each pass snapshots the directory once into an in-memory work list,
//! shuffles it, and lets a bounded worker pool drain it; passes repeat until
//! a fresh listing comes back empty. A file is claimed by exactly one worker
//! per pass, and removal after the attempt is the only consumed-marker, so
//! processing is at-most-once.

use crate::account::AccountFile;
use crate::actions::AccountAction;
use crate::config::SwarmConfig;
use crate::error::{ActionError, QueueError};
use crate::ledger::{classify_ledger_error, ErrorClass};
use parking_lot::{Mutex, RwLock};
use rand::seq::SliceRandom;
use std::fmt;
use std::io;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Outcome of one account-file attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action completed against the remote ledger.
    Succeeded,
    /// The credential file carried no recognizable posting key.
    NoKey,
    /// The ledger reported a cooldown or exhausted resource credits;
    /// skipped without retry for this run.
    TransientSkip,
    /// Any other failure. The file is still consumed.
    Failed,
}

/// Aggregate counts for one queue run.
///
/// The filesystem post-state cannot distinguish a failed attempt from a
/// successful one (the file is gone either way), so the summary is the only
/// record of what actually happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub no_key: usize,
    pub transient_skips: usize,
    pub failed: usize,
    pub passes: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        self.attempted += 1;
        match outcome {
            Outcome::Succeeded => self.succeeded += 1,
            Outcome::NoKey => self.no_key += 1,
            Outcome::TransientSkip => self.transient_skips += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    fn merge(&mut self, other: RunSummary) {
        self.attempted += other.attempted;
        self.succeeded += other.succeeded;
        self.no_key += other.no_key;
        self.transient_skips += other.transient_skips;
        self.failed += other.failed;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempted: {} succeeded, {} without key, {} transient skips, {} failed ({} passes)",
            self.attempted, self.succeeded, self.no_key, self.transient_skips, self.failed, self.passes
        )
    }
}

/// Work queue over one account directory
pub struct WorkQueue {
    config: SwarmConfig,
}

impl WorkQueue {
    pub fn new(config: SwarmConfig) -> Result<Self, QueueError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// List candidate files in the account directory, in shuffled order.
    ///
    /// Shuffling is the sampling-without-replacement step: workers pop from
    /// the shuffled list, so each file lands with exactly one worker.
    fn snapshot(&self) -> Result<Vec<AccountFile>, QueueError> {
        let dir = &self.config.accounts_dir;
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| QueueError::ListDir {
                path: dir.clone(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk error")),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(file) = AccountFile::from_path(entry.path()) {
                files.push(file);
            }
        }

        files.shuffle(&mut rand::thread_rng());
        Ok(files)
    }

    /// Run `action` over every account file until the directory is empty.
    pub async fn run(&self, action: Arc<dyn AccountAction>) -> Result<RunSummary, QueueError> {
        let mut summary = RunSummary::default();

        loop {
            let snapshot = self.snapshot()?;
            if snapshot.is_empty() {
                break;
            }

            summary.passes += 1;
            info!(
                pass = summary.passes,
                files = snapshot.len(),
                action = action.name(),
                workers = self.config.workers,
                "starting pass"
            );

            let work = Arc::new(Mutex::new(snapshot));
            let stats = Arc::new(RwLock::new(RunSummary::default()));

            let mut handles = Vec::with_capacity(self.config.workers);
            for worker_id in 0..self.config.workers {
                let work = Arc::clone(&work);
                let stats = Arc::clone(&stats);
                let action = Arc::clone(&action);
                handles.push(tokio::spawn(async move {
                    worker_loop(worker_id, work, action, stats).await;
                }));
            }

            for handle in handles {
                handle
                    .await
                    .map_err(|e| QueueError::WorkerPanic(e.to_string()))?;
            }

            summary.merge(*stats.read());

            // Fixed inter-pass delay for rate limiting, as in the scripts.
            sleep(self.config.pass_delay()).await;
        }

        info!(%summary, "queue run complete");
        Ok(summary)
    }
}

async fn worker_loop(
    worker_id: usize,
    work: Arc<Mutex<Vec<AccountFile>>>,
    action: Arc<dyn AccountAction>,
    stats: Arc<RwLock<RunSummary>>,
) {
    debug!(worker_id, "worker started");
    loop {
        let file = { work.lock().pop() };
        let Some(file) = file else {
            break;
        };
        if let Some(outcome) = process_file(&file, action.as_ref()).await {
            stats.write().record(outcome);
        }
    }
    debug!(worker_id, "worker finished pass");
}

/// Process one credential file through the per-file state machine:
/// key extraction, one action attempt, removal.
///
/// Returns `None` only when the file vanished before it was read, which a
/// worker from an overlapping removal may legitimately cause.
async fn process_file(file: &AccountFile, action: &dyn AccountAction) -> Option<Outcome> {
    let key = match file.read_key() {
        Ok(Some(key)) => key,
        Ok(None) => {
            warn!(account = file.name(), "no posting key found, removing file");
            remove_quietly(file);
            return Some(Outcome::NoKey);
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(account = file.name(), "file already gone, skipping");
            return None;
        }
        Err(e) => {
            error!(account = file.name(), error = %e, "failed to read credential file");
            remove_quietly(file);
            return Some(Outcome::Failed);
        }
    };

    let outcome = match action.run(file.name(), &key).await {
        Ok(()) => {
            info!(account = file.name(), action = action.name(), "action succeeded");
            Outcome::Succeeded
        }
        Err(ActionError::Ledger(e))
            if classify_ledger_error(&e) == ErrorClass::TransientCooldown =>
        {
            info!(
                account = file.name(),
                message = e.message(),
                "transient cooldown, skipping without retry"
            );
            Outcome::TransientSkip
        }
        Err(e) => {
            error!(account = file.name(), action = action.name(), error = %e, "action failed");
            Outcome::Failed
        }
    };

    // The file is consumed whatever the classification was.
    remove_quietly(file);
    Some(outcome)
}

fn remove_quietly(file: &AccountFile) {
    match file.remove() {
        Ok(true) => debug!(account = file.name(), "credential file removed"),
        Ok(false) => debug!(account = file.name(), "credential file was already removed"),
        Err(e) => warn!(account = file.name(), error = %e, "could not remove credential file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record_and_merge() {
        let mut a = RunSummary::default();
        a.record(Outcome::Succeeded);
        a.record(Outcome::NoKey);

        let mut b = RunSummary::default();
        b.record(Outcome::TransientSkip);
        b.record(Outcome::Failed);
        b.record(Outcome::Succeeded);

        a.merge(b);
        assert_eq!(a.attempted, 5);
        assert_eq!(a.succeeded, 2);
        assert_eq!(a.no_key, 1);
        assert_eq!(a.transient_skips, 1);
        assert_eq!(a.failed, 1);
    }

    #[test]
    fn test_summary_display_counts() {
        let mut summary = RunSummary::default();
        summary.record(Outcome::Succeeded);
        summary.passes = 1;
        let rendered = summary.to_string();
        assert!(rendered.contains("1 attempted"));
        assert!(rendered.contains("1 succeeded"));
    }
}
