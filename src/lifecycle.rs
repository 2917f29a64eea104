//! When to run init relative to document parsing.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::cell::Cell;

/// `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentPhase {
    Loading,
    Interactive,
    Complete,
}

impl DocumentPhase {
    /// Unknown states count as ready: the DOM is never less available than
    /// while `"loading"`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    pub fn defers_init(self) -> bool {
        self == Self::Loading
    }
}

/// Run `init` now, or hand it to `defer` while the document is still loading.
///
/// `defer` is expected to schedule the callback on `DOMContentLoaded`.
pub fn run_when_ready<I, D>(phase: DocumentPhase, init: I, defer: D)
where
    I: FnOnce() + 'static,
    D: FnOnce(Box<dyn FnOnce()>),
{
    if phase.defers_init() {
        defer(Box::new(init));
    } else {
        init();
    }
}

/// Mark `started` and report whether this call was the first to do so.
pub fn claim_first_run(started: &Cell<bool>) -> bool {
    !started.replace(true)
}
