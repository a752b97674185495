//! Async resource lifecycle — the shared building block of every slice.
//!
//! A resource is a piece of server-sourced data tracked through a fetch
//! lifecycle: `Idle → Loading → {Succeeded, Failed} → Loading → …`, with
//! `reset` returning to `Idle` from anywhere. There is no terminal state.
//!
//! - `ResourceState<T>` — the immutable snapshot the view layer reads.
//! - `AsyncResource<T>` — owns a `ResourceState<T>` and is the only thing
//!   allowed to change it (see [`slice`]).

pub mod slice;

use serde::{Deserialize, Serialize};

use crate::shared::ErrorMessage;

pub use slice::{AsyncResource, ResourceAction, Transition};

// ─── AsyncStatus ─────────────────────────────────────────────────────────────

/// Lifecycle tag of a resource. A finite state, not a progress scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsyncStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl AsyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for AsyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Tag of one in-flight request for a resource.
///
/// Handed out by `AsyncResource::start` in strictly increasing order. A
/// completion carrying anything but the current tag is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

// ─── ResourceState ───────────────────────────────────────────────────────────

/// Snapshot of one resource: `{status, data, error}`.
///
/// `data` survives a later `Loading` (refresh) and a later `Failed`, so a
/// re-fetch never blanks the screen. `error` is only ever set while `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState<T> {
    pub status: AsyncStatus,
    pub data: Option<T>,
    pub error: Option<ErrorMessage>,
}

impl<T> ResourceState<T> {
    /// The initial `Idle` / no data / no error triple.
    pub fn new() -> Self {
        Self {
            status: AsyncStatus::Idle,
            data: None,
            error: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == AsyncStatus::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == AsyncStatus::Loading
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == AsyncStatus::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.status == AsyncStatus::Failed
    }

    /// Data from the most recent success, possibly stale during a refresh.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    /// Whether `data` is from an earlier cycle than the current status.
    pub fn is_stale(&self) -> bool {
        self.data.is_some() && self.status != AsyncStatus::Succeeded
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}
