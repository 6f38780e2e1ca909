//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the remote document store over HTTP; everything else in
//! the client talks to it through the `content::RemoteStore` trait.

pub mod api;
