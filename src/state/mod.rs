//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Document edits live in `content::EditorSession`; this module only holds the
//! presentation state around it (active tab, loading/saving flags, notices).

pub mod editor;
