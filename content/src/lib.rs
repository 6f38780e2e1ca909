//! Chapter content model, storage seam, and editing logic for the content admin UI.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly and the rules stay testable without a browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `key` derives the storage address for a chapter, `record` is the persisted
//! bundle, `store` loads/saves it against remote + local backends, `session`
//! holds the in-memory edit state, `import` parses spreadsheet pastes, and
//! `barrier` converts render faults into a fallback state.

pub mod barrier;
pub mod import;
pub mod key;
pub mod record;
pub mod session;
pub mod settings;
pub mod store;

pub use barrier::{BarrierState, Fault, FaultBarrier};
pub use import::{ImportError, ImportReport, SkipReason, SkippedRow, parse_tsv};
pub use key::{ChapterRef, derive_key};
pub use record::{ContentRecord, McqItem, OPTION_COUNT, VideoEntry};
pub use session::{EditError, EditorSession, LinkField, McqEdit, NotesTier};
pub use settings::EditorSettings;
pub use store::{
    ContentRepository, LoadSource, LoadedContent, LocalStore, MemoryLocalStore, MemoryRemoteStore, RemoteStore,
    SaveOutcome, StoreError,
};
