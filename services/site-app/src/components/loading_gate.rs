//! Loading screen shown before a gated page is revealed

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::gate::{GateConfig, GatePhase, LoadKind, LoadingGate, ReloadSignal, TimerHandle};
use crate::session::default_store;

static DOCUMENT_RELOAD: ReloadSignal = ReloadSignal::new();

impl TimerHandle for TimeoutHandle {
    fn cancel(self: Box<Self>) {
        self.clear();
    }
}

fn with_gate<R>(gate: &Mutex<LoadingGate>, f: impl FnOnce(&mut LoadingGate) -> R) -> R {
    let mut guard = gate.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Shows [`LoadingScreen`] until the page's [`LoadingGate`] reveals it
#[component]
pub fn SessionGate(
    config: GateConfig,
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
    children: ChildrenFn,
) -> impl IntoView {
    let phase = RwSignal::new(GatePhase::Idle);
    let gate = Arc::new(Mutex::new(LoadingGate::new(config)));

    // Effects only run in the browser, after the first render
    Effect::new({
        let gate = Arc::clone(&gate);
        move |_| {
            let store = default_store();
            let load = DOCUMENT_RELOAD.take(detect_load_kind());
            let delay = with_gate(&gate, |g| g.mount(&store, load));
            phase.set(GatePhase::Showing);

            let on_elapse = {
                let gate = Arc::clone(&gate);
                move || {
                    if with_gate(&gate, |g| g.elapse(&store)) {
                        phase.try_set(GatePhase::Revealed);
                    }
                }
            };

            match set_timeout_with_handle(on_elapse, delay) {
                Ok(handle) => with_gate(&gate, |g| g.arm(Box::new(handle))),
                Err(e) => {
                    tracing::warn!("Could not schedule reveal for '{}': {:?}", config.key, e);
                    phase.set(GatePhase::Revealed);
                }
            }
        }
    });

    on_cleanup(move || with_gate(&gate, LoadingGate::unmount));

    let full_duration = config.full_duration;
    move || {
        if phase.get() == GatePhase::Revealed {
            children().into_any()
        } else {
            view! {
                <LoadingScreen
                    title=title.clone()
                    tagline=tagline.clone()
                    duration_ms=u64::try_from(full_duration.as_millis()).unwrap_or(u64::MAX)
                />
            }
            .into_any()
        }
    }
}

/// Full-screen intro animation: spinning gear, title and a progress bar
/// that fills over `duration_ms`.
#[component]
pub fn LoadingScreen(
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
    duration_ms: u64,
) -> impl IntoView {
    let bar_style = format!(
        "height: 100%; background: linear-gradient(90deg, #22d3ee, #a855f7); \
         animation: loader-fill {}ms ease-in-out forwards;",
        duration_ms
    );

    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-slate-950 text-slate-100">
            <style>
                "@keyframes loader-fill { from { width: 0%; } to { width: 100%; } }
                 @keyframes loader-spin { to { transform: rotate(360deg); } }
                 @keyframes loader-pulse { 50% { opacity: 0.4; } }"
            </style>
            <div
                aria-hidden="true"
                style="font-size: 4rem; animation: loader-spin 2s linear infinite;"
            >
                "⚙"
            </div>
            <h1 class="mt-6 text-4xl font-extrabold tracking-widest text-cyan-400">{title}</h1>
            <p class="mt-2 text-slate-400" style="animation: loader-pulse 1.6s ease-in-out infinite;">
                {tagline}
            </p>
            <div class="mt-8 w-64 h-1 rounded bg-slate-800 overflow-hidden">
                <div style=bar_style></div>
            </div>
        </div>
    }
}

/// Read the navigation-timing entry to tell a hard reload from navigation.
///
/// The entry only speaks for the URL the document was loaded at, so a
/// mount on any other URL is navigation whatever the entry says.
#[cfg(feature = "csr")]
fn detect_load_kind() -> LoadKind {
    let Some(window) = web_sys::window() else {
        return LoadKind::Navigate;
    };
    let Some(entry) = window
        .performance()
        .map(|p| p.get_entries_by_type("navigation").get(0))
    else {
        return LoadKind::Navigate;
    };

    let read = |field: &str| {
        js_sys::Reflect::get(&entry, &wasm_bindgen::JsValue::from_str(field))
            .ok()
            .and_then(|v| v.as_string())
    };
    let loaded_url = read("name");
    let current_url = window.location().href().ok();
    if loaded_url.is_none() || loaded_url != current_url {
        return LoadKind::Navigate;
    }

    match read("type") {
        Some(kind) => LoadKind::from_navigation_type(&kind),
        None => LoadKind::Navigate,
    }
}

#[cfg(not(feature = "csr"))]
fn detect_load_kind() -> LoadKind {
    LoadKind::Navigate
}
