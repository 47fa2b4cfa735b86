//! Cooperative cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raised when a [`CancellationToken`] was observed as cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// A cloneable flag shared between the caller and a long-running operation.
///
/// The quantizer and the temperature cache poll it at fixed points and bail
/// out with [`Cancelled`] once it is set.
///
/// ```
/// use material_color::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Returns `Err(Cancelled)` when a token is present and set.
#[inline]
pub(crate) fn check(token: Option<&CancellationToken>) -> Result<(), Cancelled> {
    match token {
        Some(token) if token.is_cancelled() => Err(Cancelled),
        _ => Ok(()),
    }
}
