//! Route-level page components.

pub mod chapter;
