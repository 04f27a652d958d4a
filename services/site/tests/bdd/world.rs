//! BDD test world for the site host

use std::net::SocketAddr;

use cucumber::World;
use robotics_site::config::Config;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A response captured by a request step
#[derive(Debug)]
pub struct CapturedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Default, World)]
pub struct HostWorld {
    pub site_dir: Option<tempfile::TempDir>,
    pub config: Config,

    pub addr: Option<SocketAddr>,
    pub cancel: Option<CancellationToken>,
    pub server: Option<JoinHandle<robotics_site::Result<()>>>,

    pub response: Option<CapturedResponse>,
    pub run_result: Option<robotics_site::Result<()>>,
}

impl HostWorld {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr.expect("host not started"))
    }

    pub fn response(&self) -> &CapturedResponse {
        self.response.as_ref().expect("no request made")
    }
}

impl Drop for HostWorld {
    fn drop(&mut self) {
        if let Some(cancel) = &self.cancel {
            cancel.cancel();
        }
    }
}
