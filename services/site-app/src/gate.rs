//! Session-gated loading sequence
//!
//! The first visit to a page in a browser session (or a hard reload of it)
//! plays the full intro animation; later in-app navigation back to the page
//! only waits [`MINIMAL_REVEAL_DELAY`] to avoid a flash. The visited flag is
//! written once, when the full intro finishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::session::SessionStore;

/// Delay before revealing a page whose intro was already seen
pub const MINIMAL_REVEAL_DELAY: Duration = Duration::from_millis(50);

/// Value stored under a gate's key once its intro has played
pub const VISITED: &str = "true";

/// Per-page gate settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Session storage key
    pub key: &'static str,
    /// Length of the full intro animation
    pub full_duration: Duration,
}

pub const MAIN_SITE_GATE: GateConfig = GateConfig {
    key: "hasVisitedMainSite",
    full_duration: Duration::from_millis(3500),
};

pub const HACKATHON_GATE: GateConfig = GateConfig {
    key: "hasVisitedHackathon",
    full_duration: Duration::from_millis(2500),
};

/// How the current document was loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Navigate,
    Reload,
}

impl LoadKind {
    /// Map a navigation-timing entry type (`"navigate"`, `"reload"`,
    /// `"back_forward"`, `"prerender"`)
    pub fn from_navigation_type(kind: &str) -> Self {
        if kind == "reload" {
            LoadKind::Reload
        } else {
            LoadKind::Navigate
        }
    }
}

/// The document's reload, as seen by gate mounts.
///
/// The navigation-timing entry describes the document load and keeps saying
/// `"reload"` for the life of the tab. Only the first gate mount that sees
/// it gets [`LoadKind::Reload`]; every later mount in the same document is
/// in-app navigation.
#[derive(Debug, Default)]
pub struct ReloadSignal {
    consumed: AtomicBool,
}

impl ReloadSignal {
    pub const fn new() -> Self {
        Self {
            consumed: AtomicBool::new(false),
        }
    }

    /// Load kind to hand to [`LoadingGate::mount`] for what the browser
    /// reported
    pub fn take(&self, reported: LoadKind) -> LoadKind {
        if reported == LoadKind::Reload && !self.consumed.swap(true, Ordering::SeqCst) {
            LoadKind::Reload
        } else {
            LoadKind::Navigate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Idle,
    Showing,
    Revealed,
}

/// A pending timer that can be cancelled
pub trait TimerHandle {
    fn cancel(self: Box<Self>);
}

/// Gate state for one mounted page
pub struct LoadingGate {
    config: GateConfig,
    phase: GatePhase,
    full_intro: bool,
    timer: Option<Box<dyn TimerHandle + Send>>,
    unmounted: bool,
}

impl std::fmt::Debug for LoadingGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingGate")
            .field("key", &self.config.key)
            .field("phase", &self.phase)
            .field("full_intro", &self.full_intro)
            .field("armed", &self.timer.is_some())
            .field("unmounted", &self.unmounted)
            .finish()
    }
}

impl LoadingGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            phase: GatePhase::Idle,
            full_intro: false,
            timer: None,
            unmounted: false,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Whether the current showing cycle plays the full intro
    pub fn is_full_intro(&self) -> bool {
        self.full_intro
    }

    /// Enter `Showing` and return how long to wait before [`Self::elapse`].
    ///
    /// Reads the visited flag exactly once. A reload replays the full intro
    /// even when the flag is already set.
    pub fn mount(&mut self, store: &dyn SessionStore, load: LoadKind) -> Duration {
        let visited = store.get(self.config.key).as_deref() == Some(VISITED);
        self.full_intro = !visited || load == LoadKind::Reload;
        self.phase = GatePhase::Showing;

        let delay = if self.full_intro {
            self.config.full_duration
        } else {
            MINIMAL_REVEAL_DELAY
        };
        tracing::debug!(
            "Gate '{}' mounted: visited={}, load={:?}, showing for {:?}",
            self.config.key,
            visited,
            load,
            delay
        );
        delay
    }

    /// Keep the handle of the timer scheduled for [`Self::elapse`] so that
    /// unmounting can cancel it.
    pub fn arm(&mut self, handle: Box<dyn TimerHandle + Send>) {
        if self.unmounted || self.phase != GatePhase::Showing {
            handle.cancel();
            return;
        }
        if let Some(previous) = self.timer.replace(handle) {
            previous.cancel();
        }
    }

    /// Timer callback. Reveals the page and, after a full intro, marks it
    /// visited. Returns false when there was nothing to do (already
    /// revealed, or unmounted).
    pub fn elapse(&mut self, store: &dyn SessionStore) -> bool {
        if self.unmounted || self.phase != GatePhase::Showing {
            return false;
        }
        self.timer = None;
        self.phase = GatePhase::Revealed;
        if self.full_intro {
            store.set(self.config.key, VISITED);
        }
        tracing::debug!("Gate '{}' revealed", self.config.key);
        true
    }

    /// Cancel any pending timer; later [`Self::elapse`] calls are ignored
    pub fn unmount(&mut self) {
        self.unmounted = true;
        if let Some(timer) = self.timer.take() {
            tracing::debug!("Gate '{}' unmounted before reveal", self.config.key);
            timer.cancel();
        }
    }
}
