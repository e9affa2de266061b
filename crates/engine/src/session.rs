//! Browse session and history state machine.
//!
//! A [`BrowseSession`] is one user's view of the listing: the committed
//! filter state, the keystroke-level draft search text with its transient
//! suggestions, and a [`History`] of visited query strings. It models the
//! browser contract explicitly so the push/restore discipline is testable:
//!
//! - every committed mutation pushes the re-encoded state as a new entry,
//!   even when the resulting query string equals the current one;
//! - back and forward restore state from an existing entry and push nothing;
//! - the initial load decodes the given query but pushes nothing either,
//!   the load URL simply becomes the first entry.
//!
//! Exactly one writer mutates a session; there is no interior mutability
//! and no locking here.

use std::sync::Arc;

use vaidya_model::{ConsultationMode, SortKey};

use crate::directory::Directory;
use crate::filter::{self, FilterState};
use crate::query;
use crate::suggest;

/// An ordered list of visited query strings with a cursor.
///
/// Mirrors browser session history: pushing while the cursor sits behind
/// the newest entry drops every forward entry first. Adjacent duplicate
/// entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Creates a history whose only entry is the initial query.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Appends an entry after the cursor, dropping forward entries.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Moves the cursor back one entry, if there is one.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Moves the cursor forward one entry, if there is one.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cursor position, zero-based from the oldest entry.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

/// One user's session over a loaded directory.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    directory: Arc<Directory>,
    state: FilterState,
    draft: String,
    suggestions: Vec<String>,
    history: History,
}

impl BrowseSession {
    /// Opens a session from the query string of the load URL.
    ///
    /// The query is decoded into the committed state and seeds the history
    /// as its first entry. Nothing is pushed.
    pub fn new(directory: Arc<Directory>, initial_query: &str) -> Self {
        let state = query::decode(initial_query);
        let draft = state.search_term.clone();
        Self {
            directory,
            state,
            draft,
            suggestions: Vec::new(),
            history: History::new(initial_query),
        }
    }

    /// Updates the draft search text and recomputes suggestions.
    ///
    /// Nothing is committed and nothing is pushed; the listing still shows
    /// the previously committed state.
    pub fn type_search(&mut self, text: &str) {
        self.draft = text.to_string();
        self.suggestions = suggest::suggest(self.directory.doctors(), text)
            .into_iter()
            .map(|d| d.name.clone())
            .collect();
    }

    /// Commits the draft as the search term (Enter in the search box).
    pub fn submit_search(&mut self) {
        self.state.search_term = self.draft.clone();
        self.suggestions.clear();
        self.push_current();
    }

    /// Commits a suggestion's exact name as the search term.
    pub fn choose_suggestion(&mut self, name: &str) {
        self.draft = name.to_string();
        self.state.search_term = name.to_string();
        self.suggestions.clear();
        self.push_current();
    }

    /// Selects a consultation mode (radio: selecting, never clearing).
    pub fn set_consultation_mode(&mut self, mode: ConsultationMode) {
        self.state.consultation_mode = Some(mode);
        self.push_current();
    }

    /// Toggles a specialty checkbox.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        self.state.toggle_specialty(specialty);
        self.push_current();
    }

    /// Selects a sort key (radio: selecting, never clearing).
    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.sort_by = Some(sort);
        self.push_current();
    }

    /// Navigates back one history entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        let entry = match self.history.back() {
            Some(entry) => entry.to_string(),
            None => return false,
        };
        self.restore(&entry);
        true
    }

    /// Navigates forward one history entry. Returns false at the newest.
    pub fn forward(&mut self) -> bool {
        let entry = match self.history.forward() {
            Some(entry) => entry.to_string(),
            None => return false,
        };
        self.restore(&entry);
        true
    }

    /// The listing for the committed state, recomputed from scratch.
    pub fn results(&self) -> Vec<&vaidya_model::Doctor> {
        filter::apply(self.directory.doctors(), &self.state)
    }

    /// The committed filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The in-progress draft search text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current suggestion names, at most [`suggest::MAX_SUGGESTIONS`].
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The visited-query history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The query string a browser address bar would show right now.
    pub fn current_query(&self) -> &str {
        self.history.current()
    }

    fn push_current(&mut self) {
        self.history.push(query::encode(&self.state));
    }

    fn restore(&mut self, entry: &str) {
        self.state = query::decode(entry);
        self.draft = self.state.search_term.clone();
        self.suggestions.clear();
    }
}
