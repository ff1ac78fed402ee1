use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    api::{client::BlogApi, source::CommentsSource},
    config::Config,
    controllers::comments::{CommentSubmitter, SubmitOutcome, SubmitStatus},
    feed::{FeedPaginator, LoadOutcome},
    notify::Notifier,
    render,
    utils::html::MarkupRenderer,
};

const MISSING_SLUG: &str = r#"<p class="muted">No post was requested.</p>"#;
const LOAD_FAILED: &str = r#"<p class="muted">Failed to load the post.</p>"#;
const COMMENTS_FAILED: &str = r#"<p class="muted">Comments could not be loaded.</p>"#;

/// Raw values of the comment form fields, exactly as typed.
///
/// Kept verbatim across a failed submission so nothing has to be retyped;
/// cleared only when the API accepts the comment.
#[derive(Debug, Default)]
pub struct CommentForm {
    pub author: String,
    pub email: String,
    pub content: String,
}

impl CommentForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The comment surface only exists when the page knows which post it is
/// on; without a slug it is disabled wholesale.
struct CommentSurface {
    paginator: FeedPaginator<CommentsSource>,
    submitter: CommentSubmitter,
    load_failed: Cell<bool>,
}

/// Controller for the detail page: one post plus its comment feed and
/// comment form.
pub struct PostPage {
    api: Rc<dyn BlogApi>,
    notifier: Rc<Notifier>,
    markup: Box<dyn MarkupRenderer>,
    slug: Option<String>,
    surface: Option<CommentSurface>,
    form: RefCell<CommentForm>,
    article: RefCell<String>,
    title: RefCell<String>,
}

impl PostPage {
    /// `slug` is the page-scoped identifier resolved by the host page. An
    /// absent slug is an immediate error state: the article shows the
    /// placeholder and the whole comment surface stays disabled.
    pub fn new(
        api: Rc<dyn BlogApi>,
        notifier: Rc<Notifier>,
        markup: Box<dyn MarkupRenderer>,
        config: &Config,
        slug: Option<String>,
    ) -> Self {
        let surface = slug.as_ref().map(|slug| CommentSurface {
            paginator: FeedPaginator::new(
                CommentsSource::new(api.clone(), slug.clone()),
                config.comments_page_size,
                notifier.clone(),
            ),
            submitter: CommentSubmitter::new(api.clone(), slug.clone(), notifier.clone()),
            load_failed: Cell::new(false),
        });
        let article = if slug.is_some() { String::new() } else { MISSING_SLUG.to_string() };

        Self {
            api,
            notifier,
            markup,
            slug,
            surface,
            form: RefCell::new(CommentForm::default()),
            article: RefCell::new(article),
            title: RefCell::new("My Blog".to_string()),
        }
    }

    /// Page-load handler: fetches the post, renders the article, then
    /// starts the nested comment feed.
    pub async fn load(&self) {
        let Some(slug) = self.slug.clone() else {
            return;
        };

        match self.api.get_post(&slug).await {
            Ok(post) => {
                *self.article.borrow_mut() = render::render_article(&post, &slug, &*self.markup);
                *self.title.borrow_mut() = render::document_title(&post, &slug);
            }
            Err(err) => {
                tracing::error!("failed to load post {}: {}", slug, err);
                self.notifier.error(err.to_string());
                *self.article.borrow_mut() = LOAD_FAILED.to_string();
                return;
            }
        }

        if let Some(surface) = &self.surface {
            let outcome = surface.paginator.load_initial().await;
            surface
                .load_failed
                .set(matches!(outcome, LoadOutcome::Failed) && surface.paginator.is_empty());
        }
    }

    /// "More comments" click handler.
    pub async fn load_more_comments(&self) -> LoadOutcome {
        match &self.surface {
            Some(surface) => surface.paginator.load_more().await,
            None => LoadOutcome::Exhausted,
        }
    }

    /// Form-submission handler. Reads the current form fields, and clears
    /// them only when the API accepted the comment.
    pub async fn submit_comment(&self) -> SubmitOutcome {
        let Some(surface) = &self.surface else {
            self.notifier.error("Missing post slug.");
            return SubmitOutcome::Invalid;
        };

        let draft = {
            let form = self.form.borrow();
            crate::models::comment::CommentDraft::new(&form.author, &form.email, &form.content)
        };

        let outcome = surface.submitter.submit(&draft, &surface.paginator).await;
        if outcome == SubmitOutcome::Accepted {
            self.form.borrow_mut().reset();
            surface.load_failed.set(false);
        }
        outcome
    }

    pub fn set_form(&self, author: &str, email: &str, content: &str) {
        let mut form = self.form.borrow_mut();
        form.author = author.to_string();
        form.email = email.to_string();
        form.content = content.to_string();
    }

    pub fn form(&self) -> std::cell::Ref<'_, CommentForm> {
        self.form.borrow()
    }

    pub fn article_view(&self) -> String {
        self.article.borrow().clone()
    }

    pub fn document_title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn comments_view(&self) -> String {
        match &self.surface {
            Some(surface) if surface.load_failed.get() => COMMENTS_FAILED.to_string(),
            Some(surface) => render::render_comment_list(&surface.paginator.items()),
            None => String::new(),
        }
    }

    /// Whether the comment form is usable at all (it is not when the page
    /// has no slug).
    pub fn comments_enabled(&self) -> bool {
        self.surface.is_some()
    }

    /// Drives the "more comments" affordance.
    pub fn can_load_more_comments(&self) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|s| s.paginator.has_more())
    }

    pub fn submit_status(&self) -> SubmitStatus {
        match &self.surface {
            Some(surface) => surface.submitter.status(),
            None => SubmitStatus::Idle,
        }
    }

    pub fn comment_count(&self) -> usize {
        self.surface.as_ref().map_or(0, |s| s.paginator.len())
    }
}
