//! Integration tests for the account work queue.
//!
//! The remote ledger is replaced by a recording action stub so the tests
//! exercise the full per-file state machine: snapshot, key extraction,
//! action attempt, classification, removal.

use async_trait::async_trait;
use drover::account::PostingKey;
use drover::actions::AccountAction;
use drover::config::SwarmConfig;
use drover::error::{ActionError, LedgerError};
use drover::queue::WorkQueue;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use tempfile::TempDir;

#[derive(Clone, Copy)]
enum Behavior {
    Succeed,
    TransientCooldown,
    PermanentFailure,
}

struct RecordingAction {
    behavior: Behavior,
    invocations: Mutex<Vec<String>>,
}

impl RecordingAction {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            invocations: Mutex::new(Vec::new()),
        })
    }

    fn invoked_accounts(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountAction for RecordingAction {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn run(&self, account: &str, _key: &PostingKey) -> Result<(), ActionError> {
        self.invocations.lock().unwrap().push(account.to_string());
        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::TransientCooldown => Err(ActionError::Ledger(LedgerError::Rejected(
                "Account: alice does not have enough RC mana to transact.".to_string(),
            ))),
            Behavior::PermanentFailure => Err(ActionError::Ledger(LedgerError::Transport(
                "connection reset by peer".to_string(),
            ))),
        }
    }
}

fn valid_key_content() -> String {
    format!(r#"{{"private": {{"posting": "5J{}"}}}}"#, "K".repeat(49))
}

fn write_account(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(format!("{}.txt", name)), content).unwrap();
}

fn remaining_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

fn test_config(dir: &Path) -> SwarmConfig {
    let mut config = SwarmConfig::for_dir(dir);
    config.pass_delay_secs = 0;
    config
}

#[tokio::test]
async fn test_run_consumes_all_files_and_invokes_each_account_once() {
    let temp = TempDir::new().unwrap();
    for i in 0..5 {
        write_account(temp.path(), &format!("account-{}", i), &valid_key_content());
    }

    let action = RecordingAction::new(Behavior::Succeed);
    let queue = WorkQueue::new(test_config(temp.path())).unwrap();
    let summary = queue.run(action.clone()).await.unwrap();

    assert_eq!(remaining_files(temp.path()), 0);
    assert_eq!(summary.attempted, 5);
    assert_eq!(summary.succeeded, 5);
    assert_eq!(summary.failed, 0);

    let invoked = action.invoked_accounts();
    assert_eq!(invoked.len(), 5);
    let distinct: HashSet<_> = invoked.iter().collect();
    assert_eq!(distinct.len(), 5, "each account invoked exactly once");
}

#[tokio::test]
async fn test_rc_mana_error_classified_as_transient_skip() {
    let temp = TempDir::new().unwrap();
    write_account(temp.path(), "alice", &valid_key_content());

    let action = RecordingAction::new(Behavior::TransientCooldown);
    let queue = WorkQueue::new(test_config(temp.path())).unwrap();
    let summary = queue.run(action).await.unwrap();

    // The file is still consumed, and the run reports a skip, not a failure.
    assert_eq!(remaining_files(temp.path()), 0);
    assert_eq!(summary.transient_skips, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.succeeded, 0);
}

#[tokio::test]
async fn test_mixed_directory_skips_keyless_file() {
    let temp = TempDir::new().unwrap();
    write_account(temp.path(), "a", &valid_key_content());
    write_account(temp.path(), "b", &valid_key_content());
    write_account(temp.path(), "c", "no key material in this file");

    let action = RecordingAction::new(Behavior::Succeed);
    let queue = WorkQueue::new(test_config(temp.path())).unwrap();
    let summary = queue.run(action.clone()).await.unwrap();

    assert_eq!(remaining_files(temp.path()), 0, "all three files removed");
    assert_eq!(action.invoked_accounts().len(), 2, "only keyed accounts acted on");
    assert_eq!(summary.no_key, 1);
    assert_eq!(summary.succeeded, 2);
}

#[tokio::test]
async fn test_permanent_failure_still_consumes_file_and_is_counted() {
    let temp = TempDir::new().unwrap();
    write_account(temp.path(), "alice", &valid_key_content());

    let action = RecordingAction::new(Behavior::PermanentFailure);
    let queue = WorkQueue::new(test_config(temp.path())).unwrap();
    let summary = queue.run(action).await.unwrap();

    assert_eq!(remaining_files(temp.path()), 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.transient_skips, 0);
}

#[tokio::test]
async fn test_empty_directory_is_a_no_op() {
    let temp = TempDir::new().unwrap();

    let action = RecordingAction::new(Behavior::Succeed);
    let queue = WorkQueue::new(test_config(temp.path())).unwrap();
    let summary = queue.run(action.clone()).await.unwrap();

    assert_eq!(summary.attempted, 0);
    assert_eq!(summary.passes, 0);
    assert!(action.invoked_accounts().is_empty());
}

#[tokio::test]
async fn test_worker_pool_claims_each_file_exactly_once() {
    let temp = TempDir::new().unwrap();
    for i in 0..12 {
        write_account(temp.path(), &format!("worker-test-{}", i), &valid_key_content());
    }

    let mut config = test_config(temp.path());
    config.workers = 4;

    let action = RecordingAction::new(Behavior::Succeed);
    let queue = WorkQueue::new(config).unwrap();
    let summary = queue.run(action.clone()).await.unwrap();

    assert_eq!(summary.attempted, 12);
    let invoked = action.invoked_accounts();
    let distinct: HashSet<_> = invoked.iter().collect();
    assert_eq!(invoked.len(), distinct.len(), "no file processed twice");
    assert_eq!(distinct.len(), 12);
}

#[tokio::test]
async fn test_non_txt_files_are_left_alone() {
    let temp = TempDir::new().unwrap();
    write_account(temp.path(), "alice", &valid_key_content());
    std::fs::write(temp.path().join("README.md"), "not an account").unwrap();

    let action = RecordingAction::new(Behavior::Succeed);
    let queue = WorkQueue::new(test_config(temp.path())).unwrap();
    let summary = queue.run(action).await.unwrap();

    assert_eq!(summary.attempted, 1);
    assert_eq!(remaining_files(temp.path()), 1, "README.md survives the run");
}
