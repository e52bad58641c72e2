//! Remote ledger client boundary.
//!
//! The blockchain network and its client library are external collaborators;
//! this module owns only the trait the queue's actions call through and the
//! one reviewable place where remote error text is classified. Rejected
//! operations surface as message strings, and the node software phrases
//! resource-credit exhaustion and posting cooldowns in a handful of known
//! ways, so classification is substring matching by design.

use crate::account::PostingKey;
use crate::error::LedgerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reference to one published post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub author: String,
    pub permlink: String,
}

impl PostRef {
    pub fn new(author: &str, permlink: &str) -> Self {
        Self {
            author: author.to_string(),
            permlink: permlink.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("https://hive.blog/@{}/{}", self.author, self.permlink)
    }
}

/// Draft of a top-level post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub permlink: String,
    pub body: String,
    pub tags: Vec<String>,
    pub app: String,
}

/// Opaque acknowledgment returned by the remote node
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    pub tx_id: Option<String>,
}

/// Capability for submitting operations on behalf of one account.
///
/// Implementations own node selection, signing, and transport retries; the
/// queue only sees success or a [`LedgerError`] whose message feeds
/// [`classify_ledger_error`].
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn submit_post(
        &self,
        author: &str,
        key: &PostingKey,
        draft: &PostDraft,
    ) -> Result<Receipt, LedgerError>;

    async fn submit_comment(
        &self,
        author: &str,
        key: &PostingKey,
        parent: &PostRef,
        body: &str,
    ) -> Result<Receipt, LedgerError>;

    /// Vote with a percentage weight (e.g. 20 for a 20% upvote).
    async fn submit_vote(
        &self,
        voter: &str,
        key: &PostingKey,
        target: &PostRef,
        weight: i32,
    ) -> Result<Receipt, LedgerError>;

    async fn submit_follow(
        &self,
        follower: &str,
        key: &PostingKey,
        target: &str,
    ) -> Result<Receipt, LedgerError>;

    async fn update_profile(
        &self,
        account: &str,
        key: &PostingKey,
        posting_metadata: &serde_json::Value,
    ) -> Result<Receipt, LedgerError>;

    /// Most recent top-level post by `author`, if one exists.
    async fn latest_post(&self, author: &str) -> Result<Option<PostRef>, LedgerError>;

    /// Current posting metadata for `account` (empty object when unset).
    async fn profile_metadata(&self, account: &str) -> Result<serde_json::Value, LedgerError>;
}

/// Classification of a remote error into the outcome taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rate limit, posting cooldown, or exhausted resource credits.
    /// Skipped without retry for this run.
    TransientCooldown,
    /// The operation had already taken effect (duplicate follow or vote).
    /// Treated as success.
    AlreadyApplied,
    /// Anything else. Logged and counted as a failure.
    Permanent,
}

const TRANSIENT_MARKERS: &[&str] = &[
    "rc mana",
    "resource credit",
    "please wait to transact",
    "you may only",
    "can only",
    "cooldown",
];

const ALREADY_APPLIED_MARKERS: &[&str] = &[
    "already following",
    "duplicate",
    "already voted",
    "your current vote",
];

/// Map a remote error to an [`ErrorClass`] by its message text.
pub fn classify_ledger_error(error: &LedgerError) -> ErrorClass {
    let message = error.message().to_lowercase();
    if TRANSIENT_MARKERS.iter().any(|m| message.contains(m)) {
        ErrorClass::TransientCooldown
    } else if ALREADY_APPLIED_MARKERS.iter().any(|m| message.contains(m)) {
        ErrorClass::AlreadyApplied
    } else {
        ErrorClass::Permanent
    }
}

/// Client that logs every operation instead of broadcasting it.
///
/// Stands in for the real client library during rehearsal runs and in the
/// binary's default wiring.
#[derive(Debug, Default)]
pub struct DryRunLedger;

#[async_trait]
impl LedgerClient for DryRunLedger {
    async fn submit_post(
        &self,
        author: &str,
        _key: &PostingKey,
        draft: &PostDraft,
    ) -> Result<Receipt, LedgerError> {
        info!(
            author,
            title = %draft.title,
            permlink = %draft.permlink,
            body_chars = draft.body.chars().count(),
            "dry-run: post"
        );
        Ok(Receipt::default())
    }

    async fn submit_comment(
        &self,
        author: &str,
        _key: &PostingKey,
        parent: &PostRef,
        body: &str,
    ) -> Result<Receipt, LedgerError> {
        info!(author, parent = %parent.url(), body, "dry-run: comment");
        Ok(Receipt::default())
    }

    async fn submit_vote(
        &self,
        voter: &str,
        _key: &PostingKey,
        target: &PostRef,
        weight: i32,
    ) -> Result<Receipt, LedgerError> {
        info!(voter, target = %target.url(), weight, "dry-run: vote");
        Ok(Receipt::default())
    }

    async fn submit_follow(
        &self,
        follower: &str,
        _key: &PostingKey,
        target: &str,
    ) -> Result<Receipt, LedgerError> {
        info!(follower, target, "dry-run: follow");
        Ok(Receipt::default())
    }

    async fn update_profile(
        &self,
        account: &str,
        _key: &PostingKey,
        posting_metadata: &serde_json::Value,
    ) -> Result<Receipt, LedgerError> {
        info!(account, metadata = %posting_metadata, "dry-run: profile update");
        Ok(Receipt::default())
    }

    async fn latest_post(&self, author: &str) -> Result<Option<PostRef>, LedgerError> {
        Ok(Some(PostRef::new(author, "dry-run-latest")))
    }

    async fn profile_metadata(&self, _account: &str) -> Result<serde_json::Value, LedgerError> {
        Ok(serde_json::json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_mana_is_transient() {
        let err = LedgerError::Rejected(
            "Account: alice does not have enough RC mana to transact.".to_string(),
        );
        assert_eq!(classify_ledger_error(&err), ErrorClass::TransientCooldown);
    }

    #[test]
    fn test_comment_cooldown_is_transient() {
        let err = LedgerError::Rejected("You may only comment once every 3 seconds.".to_string());
        assert_eq!(classify_ledger_error(&err), ErrorClass::TransientCooldown);
    }

    #[test]
    fn test_duplicate_follow_is_already_applied() {
        let err = LedgerError::Rejected("alice is already following bob".to_string());
        assert_eq!(classify_ledger_error(&err), ErrorClass::AlreadyApplied);
    }

    #[test]
    fn test_unknown_message_is_permanent() {
        let err = LedgerError::Transport("connection refused".to_string());
        assert_eq!(classify_ledger_error(&err), ErrorClass::Permanent);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let err = LedgerError::Rejected("NOT ENOUGH RC MANA".to_string());
        assert_eq!(classify_ledger_error(&err), ErrorClass::TransientCooldown);
    }
}
