use std::cell::Cell;
use std::rc::Rc;

use validator::Validate;

use crate::{
    api::{client::BlogApi, source::CommentsSource},
    error::AppError,
    feed::FeedPaginator,
    models::comment::CommentDraft,
    notify::Notifier,
};

/// Visible submission status next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// What one submit call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted by the API; the comment entered the moderation queue.
    Accepted,
    /// Local validation failed; no request was issued.
    Invalid,
    /// A previous submission is still outstanding; dropped.
    Busy,
    /// The request failed; the draft must be kept for a manual retry.
    Failed,
}

/// Validates and submits one comment, reporting the outcome through the
/// notifier and refreshing the comment feed on success.
///
/// States: Idle -> Validating -> Submitting -> Sent | Failed. The Sending
/// guard drops re-entrant submits outright; there is no retry and no
/// queueing, every failure is terminal until the user resubmits.
pub struct CommentSubmitter {
    api: Rc<dyn BlogApi>,
    slug: String,
    notifier: Rc<Notifier>,
    status: Cell<SubmitStatus>,
}

impl CommentSubmitter {
    pub fn new(api: Rc<dyn BlogApi>, slug: impl Into<String>, notifier: Rc<Notifier>) -> Self {
        Self {
            api,
            slug: slug.into(),
            notifier,
            status: Cell::new(SubmitStatus::Idle),
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status.get()
    }

    pub async fn submit(
        &self,
        draft: &CommentDraft,
        comments: &FeedPaginator<CommentsSource>,
    ) -> SubmitOutcome {
        if self.status.get() == SubmitStatus::Sending {
            return SubmitOutcome::Busy;
        }

        if let Err(err) = self.validate(draft) {
            self.notifier.error(err.to_string());
            return SubmitOutcome::Invalid;
        }

        self.status.set(SubmitStatus::Sending);
        match self.api.create_comment(&self.slug, draft).await {
            Ok(_) => {
                self.status.set(SubmitStatus::Sent);
                self.notifier.success("Comment submitted for moderation.");
                // The new comment usually is not visible yet (moderation
                // queue), but the list still restarts from page one.
                comments.load_initial().await;
                SubmitOutcome::Accepted
            }
            Err(err) => {
                self.status.set(SubmitStatus::Failed);
                tracing::error!("comment submission failed: {}", err);
                self.notifier.error(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    fn validate(&self, draft: &CommentDraft) -> Result<(), AppError> {
        draft.validate()?;
        Ok(())
    }
}
