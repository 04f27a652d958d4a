//! BDD step definitions for the loading gate feature

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cucumber::{given, then, when};

use robotics_site_app::gate::{
    GateConfig, GatePhase, LoadKind, LoadingGate, TimerHandle, HACKATHON_GATE, MAIN_SITE_GATE,
    VISITED,
};
use robotics_site_app::session::SessionStore;

use crate::world::SiteWorld;

/// Timer that only records whether it was cancelled
struct RecordingTimer(Arc<AtomicBool>);

impl TimerHandle for RecordingTimer {
    fn cancel(self: Box<Self>) {
        self.0.store(true, Ordering::SeqCst);
    }
}

fn parse_page(s: &str) -> GateConfig {
    match s {
        "home" => MAIN_SITE_GATE,
        "hackathon" => HACKATHON_GATE,
        other => panic!("Unknown page: {}", other),
    }
}

fn parse_load(s: &str) -> LoadKind {
    match s {
        "in-app navigation" => LoadKind::Navigate,
        "a hard reload" => LoadKind::Reload,
        other => panic!("Unknown load kind: {}", other),
    }
}

fn mount(world: &mut SiteWorld, page: &str, load: &str) {
    let mut gate = LoadingGate::new(parse_page(page));
    let load = world.reloads.take(parse_load(load));
    let delay = gate.mount(&world.store, load);

    let cancelled = Arc::new(AtomicBool::new(false));
    gate.arm(Box::new(RecordingTimer(Arc::clone(&cancelled))));

    world.gate = Some(gate);
    world.scheduled_delay = Some(delay);
    world.timer_cancelled = Some(cancelled);
}

#[given("a fresh browser session")]
fn fresh_session(world: &mut SiteWorld) {
    world.store.inner.clear();
    world.store.writes.set(0);
}

#[given(expr = "the {word} page was already visited this session")]
fn already_visited(world: &mut SiteWorld, page: String) {
    mount(world, &page, "in-app navigation");
    let gate = world.gate.as_mut().expect("gate not set");
    assert!(gate.elapse(&world.store));
    world.store.writes.set(0);
}

#[given(expr = "the {word} page mounted after {}")]
#[when(expr = "the {word} page mounts after {}")]
fn page_mounts(world: &mut SiteWorld, page: String, load: String) {
    mount(world, &page, &load);
}

#[when(expr = "the {word} page is navigated back to while the document still reports a reload")]
fn navigated_back_after_reload(world: &mut SiteWorld, page: String) {
    mount(world, &page, "a hard reload");
}

#[when("the timer elapses")]
fn timer_elapses(world: &mut SiteWorld) {
    let gate = world.gate.as_mut().expect("gate not set");
    gate.elapse(&world.store);
}

#[when("the page unmounts")]
fn page_unmounts(world: &mut SiteWorld) {
    world.gate().unmount();
}

#[when("the browser session ends")]
fn session_ends(world: &mut SiteWorld) {
    world.store.inner.clear();
}

#[then(expr = "the intro is shown for {int} milliseconds")]
fn shown_for(world: &mut SiteWorld, millis: u64) {
    assert_eq!(world.scheduled_delay, Some(Duration::from_millis(millis)));
    assert_eq!(world.gate().phase(), GatePhase::Showing);
}

#[then("the page is revealed")]
fn revealed(world: &mut SiteWorld) {
    assert_eq!(world.gate().phase(), GatePhase::Revealed);
}

#[then("the page is still showing the intro")]
fn still_showing(world: &mut SiteWorld) {
    assert_eq!(world.gate().phase(), GatePhase::Showing);
}

#[then(expr = "the {string} flag is set")]
fn flag_set(world: &mut SiteWorld, key: String) {
    assert_eq!(world.store.get(&key).as_deref(), Some(VISITED));
}

#[then(expr = "the {string} flag is not set")]
fn flag_not_set(world: &mut SiteWorld, key: String) {
    assert_eq!(world.store.get(&key), None);
}

#[then(expr = "session storage was written {int} time(s)")]
fn writes(world: &mut SiteWorld, count: usize) {
    assert_eq!(world.store.writes.get(), count);
}

#[then("the pending timer was cancelled")]
fn timer_cancelled(world: &mut SiteWorld) {
    let cancelled = world.timer_cancelled.as_ref().expect("no timer armed");
    assert!(cancelled.load(Ordering::SeqCst));
}
