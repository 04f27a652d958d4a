//! BDD test world for the site frontend

use std::cell::{Cell, RefCell};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cucumber::World;
use robotics_site_app::form::{SubmissionForm, SubmitRejected};
use robotics_site_app::gate::{LoadingGate, ReloadSignal};
use robotics_site_app::session::{MemorySessionStore, SessionStore};
use robotics_site_app::submission::SubmissionRecord;
use robotics_site_app::transport::{Delivery, SubmissionTransport, SubmitOutcome};

/// Transport that records every POST and answers with a fixed delivery
#[derive(Debug)]
pub struct ScriptedTransport {
    pub reply: Delivery,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new(reply: Delivery) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl SubmissionTransport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &str) -> Delivery {
        self.calls
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        self.reply.clone()
    }
}

/// Session store that counts writes
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemorySessionStore,
    pub writes: Cell<usize>,
}

impl SessionStore for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value);
    }
}

#[derive(Debug, Default, World)]
pub struct SiteWorld {
    // Submission pipeline
    pub form: Option<RefCell<SubmissionForm>>,
    pub transport: Option<ScriptedTransport>,
    pub record_before_submit: Option<SubmissionRecord>,
    pub submit_result: Option<Result<SubmitOutcome, SubmitRejected>>,

    // Loading gate
    pub store: CountingStore,
    pub reloads: ReloadSignal,
    pub gate: Option<LoadingGate>,
    pub scheduled_delay: Option<Duration>,
    pub timer_cancelled: Option<Arc<AtomicBool>>,
}

impl SiteWorld {
    pub fn form(&self) -> &RefCell<SubmissionForm> {
        self.form.as_ref().expect("form not set")
    }

    pub fn transport(&self) -> &ScriptedTransport {
        self.transport.as_ref().expect("transport not set")
    }

    pub fn gate(&mut self) -> &mut LoadingGate {
        self.gate.as_mut().expect("gate not set")
    }
}
