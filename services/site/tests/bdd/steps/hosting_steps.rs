//! BDD step definitions for the hosting feature

use cucumber::{given, then, when};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use robotics_site::config::SiteConfig;
use robotics_site::{build_router, serve, SiteError};

use crate::world::{CapturedResponse, HostWorld};

#[given("a built site bundle")]
fn built_bundle(world: &mut HostWorld) {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("index.html"),
        "<!DOCTYPE html><html><head><title>Robotics Club</title></head><body></body></html>",
    )
    .expect("write index");
    std::fs::create_dir(dir.path().join("pkg")).expect("create pkg");
    std::fs::write(
        dir.path().join("pkg/robotics_site_app.js"),
        "export function mount() {}",
    )
    .expect("write bundle");
    std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").expect("write css");

    world.config.site = SiteConfig {
        root: dir.path().to_path_buf(),
        ..SiteConfig::default()
    };
    world.site_dir = Some(dir);
}

#[given("a site root that does not exist")]
fn missing_root(world: &mut HostWorld) {
    world.config.site = SiteConfig {
        root: "/nonexistent/robotics-site".into(),
        ..SiteConfig::default()
    };
}

#[given("the host is running")]
async fn host_running(world: &mut HostWorld) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    world.addr = Some(listener.local_addr().expect("local addr"));

    let cancel = CancellationToken::new();
    let router = build_router(&world.config.site);
    world.server = Some(tokio::spawn(serve(listener, router, cancel.clone())));
    world.cancel = Some(cancel);
}

#[when(expr = "I request {string}")]
async fn request(world: &mut HostWorld, path: String) {
    let response = reqwest::get(format!("{}{}", world.base_url(), path))
        .await
        .expect("request failed");
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.expect("body");
    world.response = Some(CapturedResponse {
        status,
        content_type,
        body,
    });
}

#[when("the host is started")]
async fn host_started(world: &mut HostWorld) {
    world.run_result = Some(robotics_site::run(world.config.clone()).await);
}

#[when("the host is shut down")]
async fn host_shut_down(world: &mut HostWorld) {
    world.cancel.as_ref().expect("host not started").cancel();
    let server = world.server.take().expect("host not started");
    world.run_result = Some(server.await.expect("server task panicked"));
}

#[then(expr = "the response status is {int}")]
fn response_status(world: &mut HostWorld, status: u16) {
    assert_eq!(world.response().status, status);
}

#[then(expr = "the response body is {string}")]
fn response_body_is(world: &mut HostWorld, body: String) {
    assert_eq!(world.response().body, body);
}

#[then("the response is the index page")]
fn response_is_index(world: &mut HostWorld) {
    let response = world.response();
    assert_eq!(response.status, 200);
    assert!(
        response.body.contains("<title>Robotics Club</title>"),
        "body: {}",
        response.body
    );
}

#[then(expr = "the content type contains {string}")]
fn content_type_contains(world: &mut HostWorld, fragment: String) {
    let content_type = world.response().content_type.as_deref().unwrap_or_default();
    assert!(content_type.contains(&fragment), "got {}", content_type);
}

#[then("the host exits cleanly")]
fn exits_cleanly(world: &mut HostWorld) {
    match &world.run_result {
        Some(Ok(())) => {}
        other => panic!("expected a clean exit, got {:?}", other),
    }
}

#[then("the host refuses to start with a configuration error")]
fn refuses_to_start(world: &mut HostWorld) {
    match &world.run_result {
        Some(Err(SiteError::Config(message))) => {
            assert!(message.contains("does not exist"), "message: {}", message)
        }
        other => panic!("expected a configuration error, got {:?}", other),
    }
}
