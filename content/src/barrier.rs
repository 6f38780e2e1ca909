//! Render fault barrier.
//!
//! Wraps a fallible render step: the first fault is captured, logged, and
//! then served as the fallback for every later render until `reset` is
//! called. Faults never propagate past the barrier and nothing is retried
//! automatically.

#[cfg(test)]
#[path = "barrier_test.rs"]
mod barrier_test;

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Message shown when a fault carries no text.
pub const UNKNOWN_FAULT_MESSAGE: &str = "Unknown Error";

/// A captured render failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    message: String,
    detail: Option<String>,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_default();
        Self::new(message).with_detail("panic during render")
    }

    /// Text for the fallback view.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.message.trim().is_empty() { UNKNOWN_FAULT_MESSAGE } else { &self.message }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({detail})", self.message()),
            None => f.write_str(self.message()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BarrierState {
    #[default]
    Normal,
    Faulted(Fault),
}

type ResetHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Default)]
pub struct FaultBarrier {
    state: BarrierState,
    on_reset: Option<ResetHook>,
}

impl fmt::Debug for FaultBarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultBarrier")
            .field("state", &self.state)
            .field("on_reset", &self.on_reset.is_some())
            .finish()
    }
}

impl FaultBarrier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook run on every reset out of the faulted state, so the owner can
    /// discard whatever triggered the fault.
    #[must_use]
    pub fn with_reset_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_reset = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn state(&self) -> &BarrierState {
        &self.state
    }

    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        match &self.state {
            BarrierState::Normal => None,
            BarrierState::Faulted(fault) => Some(fault),
        }
    }

    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.fault().is_some()
    }

    /// Run `render` unless already faulted; an `Err` faults the barrier.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Fault`] when `render` fails or when the barrier
    /// is already faulted (in which case `render` is not called).
    pub fn render<T, E, F>(&mut self, render: F) -> Result<T, Fault>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        if let Some(fault) = self.fault() {
            return Err(fault.clone());
        }
        render().map_err(|e| self.capture(Fault::new(e.to_string())))
    }

    /// Like [`Self::render`], but a panic inside `render` is also captured
    /// on targets that unwind.
    ///
    /// # Errors
    ///
    /// Same as [`Self::render`].
    pub fn render_guarded<T, E, F>(&mut self, render: F) -> Result<T, Fault>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        if let Some(fault) = self.fault() {
            return Err(fault.clone());
        }
        match catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(self.capture(Fault::new(e.to_string()))),
            Err(payload) => Err(self.capture(Fault::from_panic(payload.as_ref()))),
        }
    }

    /// Record a fault raised outside a `render` call.
    pub fn capture(&mut self, fault: Fault) -> Fault {
        match fault.detail() {
            Some(detail) => log::error!("render fault: {} ({detail})", fault.message()),
            None => log::error!("render fault: {}", fault.message()),
        }
        self.state = BarrierState::Faulted(fault.clone());
        fault
    }

    /// Leave the faulted state and run the reset hook once.
    /// Returns `false` (and skips the hook) when there was nothing to reset.
    pub fn reset(&mut self) -> bool {
        if !self.is_faulted() {
            return false;
        }
        self.state = BarrierState::Normal;
        if let Some(hook) = &self.on_reset {
            hook();
        }
        true
    }
}
