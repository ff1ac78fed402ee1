use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use crate::{api::source::PageSource, notify::Notifier};

/// Lifecycle of one paginator.
///
/// `Loading` doubles as the single-flight guard: a call that arrives while
/// another is outstanding is dropped as a no-op instead of queued, so at
/// most one request is ever in flight per paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Exhausted,
}

/// What a load call did, for the caller that has to refresh the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many items arrived and were applied.
    Loaded(usize),
    /// Another load is in flight; nothing happened.
    Busy,
    /// No cursor to continue from; nothing happened.
    Exhausted,
    /// The fetch failed; the error was reported and no state changed.
    Failed,
}

/// Cursor-based incremental loader for one list resource.
///
/// Owns the accumulation (append-only, server order across pages, no
/// dedup) and the opaque continuation cursor. The cursor is threaded
/// verbatim from the last response into the next request; nothing here
/// parses it. Interior mutability keeps the methods `&self` so overlapping
/// calls on a shared paginator stay expressible in the single-threaded
/// event model.
pub struct FeedPaginator<S: PageSource> {
    source: S,
    page_size: u32,
    notifier: Rc<Notifier>,
    items: RefCell<Vec<S::Item>>,
    cursor: RefCell<Option<String>>,
    phase: Cell<LoadPhase>,
}

impl<S: PageSource> FeedPaginator<S> {
    pub fn new(source: S, page_size: u32, notifier: Rc<Notifier>) -> Self {
        Self {
            source,
            page_size,
            notifier,
            items: RefCell::new(Vec::new()),
            cursor: RefCell::new(None),
            phase: Cell::new(LoadPhase::Idle),
        }
    }

    /// Loads the first page, replacing whatever was accumulated before.
    ///
    /// The request carries no cursor. On success the accumulation is
    /// replaced wholesale and the new cursor stored; on failure the error
    /// is reported via the notifier and prior state is left untouched, so
    /// the call is idempotent and retryable.
    pub async fn load_initial(&self) -> LoadOutcome {
        let previous = self.phase.get();
        if previous == LoadPhase::Loading {
            return LoadOutcome::Busy;
        }
        self.phase.set(LoadPhase::Loading);

        match self.source.fetch(self.page_size, None).await {
            Ok(page) => {
                let count = page.items.len();
                *self.items.borrow_mut() = page.items;
                self.finish(page.next_cursor);
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                self.phase.set(previous);
                tracing::error!("initial load failed: {}", err);
                self.notifier.error(err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Loads the next page and appends it, preserving server order.
    ///
    /// No-op while a load is in flight or once the cursor is gone. On
    /// failure nothing is mutated and the stored cursor survives, so the
    /// same page can be retried.
    pub async fn load_more(&self) -> LoadOutcome {
        match self.phase.get() {
            LoadPhase::Loading => return LoadOutcome::Busy,
            LoadPhase::Exhausted => return LoadOutcome::Exhausted,
            LoadPhase::Idle => {}
        }
        let Some(cursor) = self.cursor.borrow().clone() else {
            return LoadOutcome::Exhausted;
        };
        self.phase.set(LoadPhase::Loading);

        match self.source.fetch(self.page_size, Some(&cursor)).await {
            Ok(page) => {
                let count = page.items.len();
                self.items.borrow_mut().extend(page.items);
                self.finish(page.next_cursor);
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                self.phase.set(LoadPhase::Idle);
                tracing::error!("load more failed: {}", err);
                self.notifier.error(err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    fn finish(&self, next_cursor: Option<String>) {
        self.phase.set(match next_cursor {
            Some(_) => LoadPhase::Idle,
            None => LoadPhase::Exhausted,
        });
        *self.cursor.borrow_mut() = next_cursor;
    }

    /// Whether the "load more" affordance should be offered.
    pub fn has_more(&self) -> bool {
        self.cursor.borrow().is_some()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase.get()
    }

    pub fn items(&self) -> Ref<'_, Vec<S::Item>> {
        self.items.borrow()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}
