//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor modal composes one component per tab; each tab reads and writes
//! the shared `EditorSession` signal owned by the modal.

pub mod content_editor_modal;
pub mod fault_boundary;
pub mod mcq_tab;
pub mod notes_tab;
pub mod pdf_tab;
pub mod rich_text_field;
pub mod video_tab;
