use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    api::{client::BlogApi, source::PostsSource},
    config::Config,
    feed::{FeedPaginator, LoadOutcome},
    models::post::FilterCriteria,
    notify::Notifier,
    render,
};

/// Shown until the first page has arrived. Must stay different from
/// [`render::NO_RESULTS`] so "nothing loaded yet" and "filters reject
/// everything" never look the same.
const LOADING: &str = r#"<p class="muted">Loading posts…</p>"#;

/// Controller for the index page: the post feed with local filtering.
///
/// One method per UI event (page load, load-more click, filter apply,
/// filter clear); each updates the held view, so the page can be driven
/// and asserted on without a UI tree. Filter changes re-render the
/// existing accumulation only — they never refetch.
pub struct FeedPage {
    paginator: FeedPaginator<PostsSource>,
    criteria: RefCell<FilterCriteria>,
    loaded_once: Cell<bool>,
    view: RefCell<String>,
}

impl FeedPage {
    pub fn new(api: Rc<dyn BlogApi>, notifier: Rc<Notifier>, config: &Config) -> Self {
        Self {
            paginator: FeedPaginator::new(
                PostsSource::new(api),
                config.posts_page_size,
                notifier,
            ),
            criteria: RefCell::new(FilterCriteria::default()),
            loaded_once: Cell::new(false),
            view: RefCell::new(LOADING.to_string()),
        }
    }

    /// Page-load handler.
    pub async fn init(&self) -> LoadOutcome {
        let outcome = self.paginator.load_initial().await;
        if let LoadOutcome::Loaded(_) = outcome {
            self.loaded_once.set(true);
            self.render_now();
        }
        outcome
    }

    /// "Load more" click handler.
    pub async fn load_more(&self) -> LoadOutcome {
        let outcome = self.paginator.load_more().await;
        if let LoadOutcome::Loaded(_) = outcome {
            self.render_now();
        }
        outcome
    }

    /// Filter-apply click handler. Local only.
    pub fn apply_filters(&self, query: &str, tags: &str) {
        *self.criteria.borrow_mut() = FilterCriteria::parse(query, tags);
        self.render_now();
    }

    /// Filter-clear click handler.
    pub fn clear_filters(&self) {
        *self.criteria.borrow_mut() = FilterCriteria::default();
        self.render_now();
    }

    fn render_now(&self) {
        if !self.loaded_once.get() {
            return;
        }
        let view = render::render_feed(&self.paginator.items(), &self.criteria.borrow());
        *self.view.borrow_mut() = view;
    }

    pub fn view(&self) -> String {
        self.view.borrow().clone()
    }

    /// Drives the "load more" affordance.
    pub fn can_load_more(&self) -> bool {
        self.paginator.has_more()
    }

    pub fn post_count(&self) -> usize {
        self.paginator.len()
    }
}
