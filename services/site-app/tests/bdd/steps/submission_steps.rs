//! BDD step definitions for the submission pipeline feature

use std::cell::RefCell;
use std::time::Duration;

use cucumber::{given, then, when};

use robotics_site_app::form::{
    reset_delay, submit_form, FormStatus, SubmissionForm, SubmitRejected, FAILURE_MESSAGE,
    SUCCESS_MESSAGE,
};
use robotics_site_app::submission::{validate, Field, FieldRule, FormVariant};
use robotics_site_app::transport::{Delivery, SubmitOutcome, SUBMISSION_ENDPOINT};

use crate::world::{ScriptedTransport, SiteWorld};

fn parse_variant(s: &str) -> FormVariant {
    match s {
        "registration" => FormVariant::Registration,
        "project submission" => FormVariant::ProjectSubmission,
        other => panic!("Unknown form: {}", other),
    }
}

fn parse_field(key: &str) -> Field {
    FormVariant::ProjectSubmission
        .fields()
        .iter()
        .copied()
        .find(|f| f.key() == key)
        .unwrap_or_else(|| panic!("Unknown field: {}", key))
}

fn valid_value(field: Field) -> &'static str {
    match field.rule() {
        FieldRule::Email => "captain@robotics.edu",
        FieldRule::WhatsApp => "+91 9876543210",
        FieldRule::VideoLink => "https://www.youtube.com/watch?v=demo",
        FieldRule::Text => "Gearheads",
    }
}

#[given(expr = "an empty {string} form")]
fn empty_form(world: &mut SiteWorld, variant: String) {
    world.form = Some(RefCell::new(SubmissionForm::new(parse_variant(&variant))));
}

#[given(expr = "a filled-in {string} form")]
fn filled_form(world: &mut SiteWorld, variant: String) {
    let variant = parse_variant(&variant);
    let mut form = SubmissionForm::new(variant);
    for field in variant.fields() {
        form.update_field(*field, valid_value(*field));
    }
    world.form = Some(RefCell::new(form));
}

#[given("the endpoint accepts requests with an opaque response")]
fn transport_opaque(world: &mut SiteWorld) {
    world.transport = Some(ScriptedTransport::new(Delivery::DeliveredOpaque));
}

#[given("the network is unreachable")]
fn transport_fails(world: &mut SiteWorld) {
    world.transport = Some(ScriptedTransport::new(Delivery::TransportFailed(
        "dns error: failed to lookup address".to_string(),
    )));
}

#[given("a submission is already in flight")]
fn submission_in_flight(world: &mut SiteWorld) {
    world
        .form()
        .borrow_mut()
        .begin_submit()
        .expect("form should be valid");
}

#[when(expr = "the {string} field is set to {string}")]
fn set_field(world: &mut SiteWorld, key: String, value: String) {
    world.form().borrow_mut().update_field(parse_field(&key), value);
}

#[when("the form is submitted")]
async fn submit(world: &mut SiteWorld) {
    let snapshot = world.form().borrow().record().clone();
    world.record_before_submit = Some(snapshot);
    let form = world.form.as_ref().expect("form not set");
    let transport = world.transport.as_ref().expect("transport not set");
    world.submit_result = Some(submit_form(form, transport).await);
}

#[when("the success reset delay elapses")]
fn reset_delay_elapses(world: &mut SiteWorld) {
    world.form().borrow_mut().reset_after_success();
}

#[then(expr = "a reset is scheduled {int} seconds later")]
fn reset_scheduled(world: &mut SiteWorld, seconds: u64) {
    let outcome = match &world.submit_result {
        Some(Ok(outcome)) => *outcome,
        other => panic!("expected a finished submission, got {:?}", other),
    };
    assert_eq!(reset_delay(outcome), Some(Duration::from_secs(seconds)));
}

#[then("no reset is scheduled")]
fn no_reset_scheduled(world: &mut SiteWorld) {
    match &world.submit_result {
        Some(Ok(outcome)) => assert_eq!(reset_delay(*outcome), None),
        other => panic!("expected a finished submission, got {:?}", other),
    }
}

#[then("the submission is rejected as invalid")]
fn rejected_invalid(world: &mut SiteWorld) {
    match &world.submit_result {
        Some(Err(SubmitRejected::Invalid(_))) => {}
        other => panic!("expected an invalid rejection, got {:?}", other),
    }
}

#[then("the submission is rejected as already in flight")]
fn rejected_in_flight(world: &mut SiteWorld) {
    assert_eq!(
        world.submit_result,
        Some(Err(SubmitRejected::AlreadySubmitting))
    );
}

#[then(expr = "only the {string} field has an error")]
fn only_field_has_error(world: &mut SiteWorld, key: String) {
    let field = parse_field(&key);
    let form = world.form().borrow();
    let failing: Vec<Field> = form.errors().keys().copied().collect();
    assert_eq!(failing, vec![field], "errors: {:?}", form.errors());
}

#[then(expr = "the {string} field has no error")]
fn field_has_no_error(world: &mut SiteWorld, key: String) {
    let form = world.form().borrow();
    assert!(
        form.error(parse_field(&key)).is_none(),
        "errors: {:?}",
        form.errors()
    );
}

#[then(expr = "the {string} error reads {string}")]
fn error_reads(world: &mut SiteWorld, key: String, message: String) {
    let form = world.form().borrow();
    assert_eq!(form.error(parse_field(&key)), Some(message.as_str()));
}

#[then(expr = "validating the form twice gives the same {int} error(s)")]
fn validate_twice(world: &mut SiteWorld, count: usize) {
    let form = world.form().borrow();
    let first = validate(form.record());
    let second = validate(form.record());
    assert_eq!(first, second);
    assert_eq!(first.len(), count);
}

#[then("no network call was made")]
fn no_network_call(world: &mut SiteWorld) {
    assert!(world.transport().calls.borrow().is_empty());
}

#[then("exactly one request was posted to the submission endpoint")]
fn one_network_call(world: &mut SiteWorld) {
    let calls = world.transport().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, SUBMISSION_ENDPOINT);
}

#[then(expr = "the posted body has {int} fields including {string}")]
fn posted_body(world: &mut SiteWorld, count: usize, key: String) {
    let calls = world.transport().calls.borrow();
    let json: serde_json::Value = serde_json::from_str(&calls[0].1).expect("body is JSON");
    let object = json.as_object().expect("body is an object");
    assert_eq!(object.len(), count);
    assert!(object.contains_key(&key), "body: {}", calls[0].1);
}

#[then("the success banner is shown")]
fn success_banner(world: &mut SiteWorld) {
    assert_eq!(world.submit_result, Some(Ok(SubmitOutcome::Succeeded)));
    assert_eq!(world.form().borrow().banner(), Some(SUCCESS_MESSAGE));
}

#[then("the failure banner is shown")]
fn failure_banner(world: &mut SiteWorld) {
    assert_eq!(world.submit_result, Some(Ok(SubmitOutcome::Failed)));
    assert_eq!(world.form().borrow().banner(), Some(FAILURE_MESSAGE));
}

#[then("no banner is shown")]
fn no_banner(world: &mut SiteWorld) {
    assert_eq!(world.form().borrow().banner(), None);
}

#[then("the form is no longer submitting")]
fn not_submitting(world: &mut SiteWorld) {
    assert!(!world.form().borrow().is_submitting());
}

#[then("the entered values are unchanged")]
fn values_unchanged(world: &mut SiteWorld) {
    let before = world
        .record_before_submit
        .as_ref()
        .expect("no snapshot taken");
    assert_eq!(world.form().borrow().record(), before);
}

#[then("the entered values are still present")]
fn values_present(world: &mut SiteWorld) {
    assert!(!world.form().borrow().record().is_blank());
}

#[then("every field is empty")]
fn every_field_empty(world: &mut SiteWorld) {
    let form = world.form().borrow();
    assert!(form.record().is_blank());
    assert_eq!(form.status(), FormStatus::Idle);
}
