//! # Modal State Module
//!
//! Visibility and title of the modal shell that wraps the record form. Pure
//! presentation state: it never holds records or drafts.

/// Modal visibility and title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    /// Whether the modal is visible
    pub is_open: bool,

    /// Title shown in the modal header
    pub title: String,
}

impl ModalState {
    /// Create new modal state, hidden
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, title: impl Into<String>) {
        self.is_open = true;
        self.title = title.into();
    }

    /// Hide the modal; the shell calls this from its `on_close`
    pub fn close(&mut self) {
        self.is_open = false;
    }
}
