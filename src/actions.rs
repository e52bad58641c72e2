//! Per-account actions the queue can drive.
//!
//! Each action performs one remote operation (or a short fixed sequence) for
//! a single account: publish a post, leave a comment, vote, follow a target,
//! or fill in profile metadata. Actions are built once and shared by all
//! workers.

use crate::account::PostingKey;
use crate::config::ContentConfig;
use crate::content::{optional_content, require_content, ContentSource};
use crate::error::{ActionError, LedgerError, TemplateError};
use crate::ledger::{
    classify_ledger_error, ErrorClass, LedgerClient, PostDraft, PostRef, Receipt,
};
use crate::template::{banks, Generator};
use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use serde_json::json;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, info};

/// Default prompt for externally generated post bodies.
pub const DEFAULT_POST_PROMPT: &str = "Write a long-form blog post of at least 550 words with a \
natural human tone. The style must be conversational and readable as if a real person is talking \
to their community. Avoid emojis, avoid bullet points, avoid advertising language, avoid \
self-referential statements about being an AI. Focus on three themes: current football news, the \
state of global financial markets, and community-driven blogging platforms. End with a personal \
reflection and an open question to readers.";

const DEFAULT_POST_TITLE: &str = "Daily Hive Update";
const DEFAULT_VOTE_WEIGHT: i32 = 20;
const MAX_COMMENT_CHARS: usize = 100;

/// One action applied to one account
#[async_trait]
pub trait AccountAction: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, account: &str, key: &PostingKey) -> Result<(), ActionError>;
}

/// Build a permlink slug from a title: lowercased, non-alphanumeric runs
/// collapsed to `-`, with a timestamp suffix for uniqueness.
pub fn permlink_for(title: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = title.to_lowercase();
    let slug = re.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    format!("{}-{}", slug, Utc::now().format("%Y%m%d%H%M%S"))
}

fn truncate_chars(text: String, max: usize) -> String {
    if text.chars().count() <= max {
        text
    } else {
        text.chars().take(max).collect()
    }
}

/// Treat operations the ledger reports as already applied as successes.
fn absorb_already_applied(result: Result<Receipt, LedgerError>) -> Result<(), ActionError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if classify_ledger_error(&e) == ErrorClass::AlreadyApplied => {
            debug!(message = e.message(), "operation already applied, treating as success");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Publish one top-level post per account.
///
/// The body comes from the content source when one is configured (a blocking
/// path, retried with a fixed delay) and otherwise from the built-in
/// question-post template set.
pub struct PostAction {
    ledger: Arc<dyn LedgerClient>,
    content: Option<Arc<dyn ContentSource>>,
    fallback: Generator,
    prompt: String,
    title: String,
    retry_delay: Duration,
    max_attempts: Option<u32>,
}

impl PostAction {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        content: Option<Arc<dyn ContentSource>>,
        content_config: &ContentConfig,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            ledger,
            content,
            fallback: Generator::new(banks::question_post_set())?,
            prompt: DEFAULT_POST_PROMPT.to_string(),
            title: DEFAULT_POST_TITLE.to_string(),
            retry_delay: Duration::from_secs(content_config.retry_delay_secs),
            max_attempts: content_config.max_attempts,
        })
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }
}

#[async_trait]
impl AccountAction for PostAction {
    fn name(&self) -> &'static str {
        "post"
    }

    async fn run(&self, account: &str, key: &PostingKey) -> Result<(), ActionError> {
        let body = match &self.content {
            Some(source) => {
                require_content(
                    source.as_ref(),
                    &self.prompt,
                    self.retry_delay,
                    self.max_attempts,
                )
                .await?
            }
            None => self.fallback.generate(&mut rand::thread_rng()),
        };

        let draft = PostDraft {
            title: self.title.clone(),
            permlink: permlink_for(&self.title),
            body,
            tags: vec!["hive".to_string()],
            app: "drover/0.3".to_string(),
        };

        let receipt = self.ledger.submit_post(account, key, &draft).await?;
        info!(account, permlink = %draft.permlink, tx = ?receipt.tx_id, "post published");
        Ok(())
    }
}

/// Leave one templated supportive comment under the target author's latest post
pub struct CommentAction {
    ledger: Arc<dyn LedgerClient>,
    generator: Generator,
    target_author: String,
}

impl CommentAction {
    pub fn new(ledger: Arc<dyn LedgerClient>, target_author: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            ledger,
            generator: Generator::new(banks::supportive_comment_set())?,
            target_author: target_author.to_string(),
        })
    }

    async fn latest_target_post(&self) -> Result<PostRef, ActionError> {
        self.ledger
            .latest_post(&self.target_author)
            .await?
            .ok_or_else(|| ActionError::NoTargetPost(self.target_author.clone()))
    }

    async fn comment_on(
        &self,
        account: &str,
        key: &PostingKey,
        parent: &PostRef,
    ) -> Result<(), ActionError> {
        let text = truncate_chars(
            self.generator.generate(&mut rand::thread_rng()),
            MAX_COMMENT_CHARS,
        );
        absorb_already_applied(self.ledger.submit_comment(account, key, parent, &text).await)?;
        info!(account, parent = %parent.url(), "comment submitted");
        Ok(())
    }
}

#[async_trait]
impl AccountAction for CommentAction {
    fn name(&self) -> &'static str {
        "comment"
    }

    async fn run(&self, account: &str, key: &PostingKey) -> Result<(), ActionError> {
        let parent = self.latest_target_post().await?;
        self.comment_on(account, key, &parent).await
    }
}

/// Upvote the target author's latest post, then leave a comment on it
pub struct VoteAction {
    comment: CommentAction,
    weight: i32,
}

impl VoteAction {
    pub fn new(ledger: Arc<dyn LedgerClient>, target_author: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            comment: CommentAction::new(ledger, target_author)?,
            weight: DEFAULT_VOTE_WEIGHT,
        })
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }
}

#[async_trait]
impl AccountAction for VoteAction {
    fn name(&self) -> &'static str {
        "vote"
    }

    async fn run(&self, account: &str, key: &PostingKey) -> Result<(), ActionError> {
        let parent = self.comment.latest_target_post().await?;

        absorb_already_applied(
            self.comment
                .ledger
                .submit_vote(account, key, &parent, self.weight)
                .await,
        )?;
        info!(account, target = %parent.url(), weight = self.weight, "vote submitted");

        self.comment.comment_on(account, key, &parent).await
    }
}

/// Follow one target account
pub struct FollowAction {
    ledger: Arc<dyn LedgerClient>,
    target_account: String,
}

impl FollowAction {
    pub fn new(ledger: Arc<dyn LedgerClient>, target_account: &str) -> Self {
        Self {
            ledger,
            target_account: target_account.to_string(),
        }
    }
}

#[async_trait]
impl AccountAction for FollowAction {
    fn name(&self) -> &'static str {
        "follow"
    }

    async fn run(&self, account: &str, key: &PostingKey) -> Result<(), ActionError> {
        absorb_already_applied(
            self.ledger
                .submit_follow(account, key, &self.target_account)
                .await,
        )?;
        info!(account, target = %self.target_account, "follow submitted");
        Ok(())
    }
}

/// Fill in profile and cover images on accounts that lack them.
///
/// Image URLs are best-effort content; a profile already carrying both
/// images is skipped without an update.
pub struct ProfileAction {
    ledger: Arc<dyn LedgerClient>,
    content: Option<Arc<dyn ContentSource>>,
    image_prompt: String,
}

impl ProfileAction {
    pub fn new(ledger: Arc<dyn LedgerClient>, content: Option<Arc<dyn ContentSource>>) -> Self {
        Self {
            ledger,
            content,
            image_prompt: "a scenic landscape photograph".to_string(),
        }
    }

    pub fn with_image_prompt(mut self, prompt: &str) -> Self {
        self.image_prompt = prompt.to_string();
        self
    }
}

fn has_image(profile: &serde_json::Value, field: &str) -> bool {
    profile
        .get(field)
        .and_then(|v| v.as_str())
        .map(|s| !s.is_empty())
        .unwrap_or(false)
}

#[async_trait]
impl AccountAction for ProfileAction {
    fn name(&self) -> &'static str {
        "profile-update"
    }

    async fn run(&self, account: &str, key: &PostingKey) -> Result<(), ActionError> {
        let metadata = self.ledger.profile_metadata(account).await?;
        let profile = metadata.get("profile").cloned().unwrap_or_else(|| json!({}));

        if has_image(&profile, "profile_image") && has_image(&profile, "cover_image") {
            info!(account, "profile and cover already set, skipping update");
            return Ok(());
        }

        let mut fields = serde_json::Map::new();
        if let Some(source) = &self.content {
            if let Some(url) = optional_content(source.as_ref(), &self.image_prompt).await {
                fields.insert("profile_image".to_string(), json!(url));
            }
            if let Some(url) = optional_content(source.as_ref(), &self.image_prompt).await {
                fields.insert("cover_image".to_string(), json!(url));
            }
        }
        fields.insert("version".to_string(), json!(2));

        let posting_metadata = json!({ "profile": fields });
        let receipt = self
            .ledger
            .update_profile(account, key, &posting_metadata)
            .await?;
        info!(account, tx = ?receipt.tx_id, "profile updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::extract_posting_key;
    use crate::error::LedgerError;
    use std::sync::Mutex;

    fn test_key() -> PostingKey {
        extract_posting_key(&format!(r#""posting": "5J{}""#, "K".repeat(49))).unwrap()
    }

    #[test]
    fn test_permlink_slug() {
        let permlink = permlink_for("Daily Hive Update!");
        assert!(permlink.starts_with("daily-hive-update-"));
        let suffix = &permlink["daily-hive-update-".len()..];
        assert_eq!(suffix.len(), 14);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_permlink_trims_edge_separators() {
        let permlink = permlink_for("  ...Hello...  ");
        assert!(permlink.starts_with("hello-"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(150);
        assert_eq!(truncate_chars(text, 100).chars().count(), 100);
        assert_eq!(truncate_chars("short".to_string(), 100), "short");
    }

    /// Ledger stub recording follow calls and failing with a fixed message.
    struct FollowStub {
        error: Option<String>,
        follows: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LedgerClient for FollowStub {
        async fn submit_post(
            &self,
            _: &str,
            _: &PostingKey,
            _: &PostDraft,
        ) -> Result<Receipt, LedgerError> {
            unimplemented!()
        }

        async fn submit_comment(
            &self,
            _: &str,
            _: &PostingKey,
            _: &PostRef,
            _: &str,
        ) -> Result<Receipt, LedgerError> {
            unimplemented!()
        }

        async fn submit_vote(
            &self,
            _: &str,
            _: &PostingKey,
            _: &PostRef,
            _: i32,
        ) -> Result<Receipt, LedgerError> {
            unimplemented!()
        }

        async fn submit_follow(
            &self,
            follower: &str,
            _: &PostingKey,
            _: &str,
        ) -> Result<Receipt, LedgerError> {
            self.follows.lock().unwrap().push(follower.to_string());
            match &self.error {
                Some(msg) => Err(LedgerError::Rejected(msg.clone())),
                None => Ok(Receipt::default()),
            }
        }

        async fn update_profile(
            &self,
            _: &str,
            _: &PostingKey,
            _: &serde_json::Value,
        ) -> Result<Receipt, LedgerError> {
            unimplemented!()
        }

        async fn latest_post(&self, _: &str) -> Result<Option<PostRef>, LedgerError> {
            unimplemented!()
        }

        async fn profile_metadata(&self, _: &str) -> Result<serde_json::Value, LedgerError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_follow_treats_duplicate_as_success() {
        let stub = Arc::new(FollowStub {
            error: Some("alice is already following bob".to_string()),
            follows: Mutex::new(Vec::new()),
        });
        let action = FollowAction::new(stub.clone(), "bob");
        action.run("alice", &test_key()).await.unwrap();
        assert_eq!(stub.follows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_follow_propagates_other_errors() {
        let stub = Arc::new(FollowStub {
            error: Some("missing posting authority".to_string()),
            follows: Mutex::new(Vec::new()),
        });
        let action = FollowAction::new(stub, "bob");
        assert!(action.run("alice", &test_key()).await.is_err());
    }
}
