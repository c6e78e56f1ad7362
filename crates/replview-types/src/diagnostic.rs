//! Runtime diagnostics and the per-thread handler stack.
//!
//! User code signals non-exceptional conditions (deprecations, notices,
//! warnings) through [`raise`]. Only the innermost installed handler is
//! consulted. If it declines, or if no handler is installed, the
//! diagnostic escalates into a [`Fault`].
//!
//! Handlers are installed with [`install`], which returns a
//! [`HandlerScope`]. Dropping the scope restores the stack to exactly the
//! depth it had before, including on early return through `?` or a panic.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::Fault;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Deprecated,
    UserDeprecated,
    Notice,
    UserNotice,
    Warning,
    UserWarning,
    Error,
    UserError,
}

impl DiagnosticKind {
    pub fn is_deprecation(&self) -> bool {
        matches!(self, DiagnosticKind::Deprecated | DiagnosticKind::UserDeprecated)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::Deprecated | DiagnosticKind::UserDeprecated => "Deprecated",
            DiagnosticKind::Notice | DiagnosticKind::UserNotice => "Notice",
            DiagnosticKind::Warning | DiagnosticKind::UserWarning => "Warning",
            DiagnosticKind::Error | DiagnosticKind::UserError => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn deprecated(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UserDeprecated, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UserWarning, message)
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UserNotice, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

/// What a handler did with a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Consumed; execution continues
    Handled,
    /// Declined; the diagnostic escalates to a fault
    Pass,
}

pub trait DiagnosticHandler {
    fn handle(&self, diagnostic: &Diagnostic) -> Disposition;
}

impl<F> DiagnosticHandler for F
where
    F: Fn(&Diagnostic) -> Disposition,
{
    fn handle(&self, diagnostic: &Diagnostic) -> Disposition {
        self(diagnostic)
    }
}

thread_local! {
    static HANDLERS: RefCell<Vec<Rc<dyn DiagnosticHandler>>> = RefCell::new(Vec::new());
}

/// Restores the handler stack to its previous depth when dropped.
#[must_use = "the handler is uninstalled as soon as the scope is dropped"]
pub struct HandlerScope {
    depth: usize,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for HandlerScope {
    fn drop(&mut self) {
        HANDLERS.with(|handlers| handlers.borrow_mut().truncate(self.depth));
        tracing::trace!(depth = self.depth, "restored diagnostic handler stack");
    }
}

/// Install `handler` as the innermost diagnostic handler for this thread.
pub fn install(handler: impl DiagnosticHandler + 'static) -> HandlerScope {
    let depth = HANDLERS.with(|handlers| {
        let mut handlers = handlers.borrow_mut();
        let depth = handlers.len();
        handlers.push(Rc::new(handler));
        depth
    });
    tracing::trace!(depth, "installed diagnostic handler");
    HandlerScope {
        depth,
        _not_send: PhantomData,
    }
}

/// Number of handlers currently installed on this thread.
pub fn handler_depth() -> usize {
    HANDLERS.with(|handlers| handlers.borrow().len())
}

/// Signal a diagnostic from user code.
pub fn raise(diagnostic: Diagnostic) -> Result<(), Fault> {
    // Release the borrow before calling out; the handler may raise again.
    let innermost = HANDLERS.with(|handlers| handlers.borrow().last().cloned());

    match innermost.map(|handler| handler.handle(&diagnostic)) {
        Some(Disposition::Handled) => Ok(()),
        Some(Disposition::Pass) | None => Err(Fault::Diagnostic(diagnostic)),
    }
}
