//! Session-side state: the query under edit and the viewport.
//!
//! The engine returns an unbounded match list; everything about windowing
//! it to visible rows and locating the highlight span inside a displayed
//! word lives on this side of the boundary. Every edit triggers a full
//! re-query against the published index; there is no incremental result
//! cache that could drift.

use std::ops::Range;

use crate::dictionary::WordId;
use crate::index::SearchIndex;
use crate::query::MatchList;

/// Scroll position over a match list.
///
/// The offset is clamped against the current match count by the caller via
/// [`window`]; the state itself only guarantees it never goes negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    offset: usize,
}

impl ViewportState {
    /// Current scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll one line toward the start of the list.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll one line toward the end of the list.
    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    /// Jump back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// The interactive session's mutable state: the query string plus the
/// viewport over its matches.
#[derive(Debug, Default)]
pub struct SessionState {
    query: String,
    viewport: ViewportState,
}

impl SessionState {
    /// Fresh session with an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// The query as currently typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The viewport over the current matches.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Mutable access for scroll keystrokes.
    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    /// Append a typed character. Editing resets the scroll position.
    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.viewport.reset();
    }

    /// Remove the last typed character, if any.
    pub fn backspace(&mut self) -> bool {
        let removed = self.query.pop().is_some();
        if removed {
            self.viewport.reset();
        }
        removed
    }

    /// Replace the whole query (line-based frontends).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.viewport.reset();
    }

    /// Resolve the current query against a published index.
    ///
    /// An empty query issues no search and yields an empty list.
    pub fn matches(&self, index: &SearchIndex) -> MatchList {
        if self.query.is_empty() {
            return MatchList::new();
        }
        index.search(&self.query)
    }
}

/// Window a match list to `rows` visible entries at the viewport offset.
///
/// The offset is clamped so the window never reads past the end; a viewport
/// scrolled beyond the list shows its tail.
pub fn window<'a>(matches: &'a [WordId], viewport: &ViewportState, rows: usize) -> &'a [WordId] {
    let start = viewport.offset().min(matches.len().saturating_sub(rows));
    let end = (start + rows).min(matches.len());
    &matches[start..end]
}

/// Byte range of the first occurrence of `query` inside `word`, for the
/// renderer's bold span. The engine itself only answers containment.
pub fn highlight_span(word: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    word.find(query).map(|start| start..start + query.len())
}
