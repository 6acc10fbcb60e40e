//! Suggestion filtering and keyboard selection
//!
//! Mirrors how a user drives an autocomplete widget: type a query, walk the
//! filtered suggestion list with arrow keys, confirm with Enter. Filtering
//! and cursor movement are pure functions over list snapshots; the cursor
//! itself is caller-held state.

mod matcher;
mod picker;

pub use matcher::{advance_cursor, confirm, filter, retreat_cursor};
pub use picker::SuggestionPicker;
