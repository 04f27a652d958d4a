//! Registration / project submission form component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::status_banner::StatusBanner;
use crate::form::{reset_delay, submit_form, FormHandle, SubmissionForm};
use crate::submission::{Field, FormVariant};
use crate::transport::default_transport;

impl FormHandle for RwSignal<SubmissionForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SubmissionForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// A form for one [`FormVariant`]. Validation runs on submit; the submit
/// button stays disabled while a submission is in flight.
#[component]
pub fn SubmissionFormView(variant: FormVariant, #[prop(into)] heading: String) -> impl IntoView {
    let form = RwSignal::new(SubmissionForm::new(variant));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let transport = default_transport();
            match submit_form(&form, &transport).await {
                Ok(outcome) => {
                    if let Some(delay) = reset_delay(outcome) {
                        set_timeout(
                            move || {
                                form.try_update(SubmissionForm::reset_after_success);
                            },
                            delay,
                        );
                    }
                }
                Err(rejected) => tracing::debug!("Submit rejected: {}", rejected),
            }
        });
    };

    let submitting = move || form.with(SubmissionForm::is_submitting);

    view! {
        <form
            class="max-w-2xl mx-auto space-y-5 rounded-2xl border border-slate-800 bg-slate-900/60 p-8"
            novalidate=true
            on:submit=on_submit
        >
            <h2 class="text-2xl font-bold text-slate-100">{heading}</h2>
            {variant
                .fields()
                .iter()
                .map(|field| view! { <FieldInput form=form field=*field /> })
                .collect_view()}
            <button
                type="submit"
                class="w-full rounded-lg bg-cyan-500 py-3 font-semibold text-slate-950 disabled:opacity-50"
                disabled=submitting
            >
                {move || if submitting() { "Submitting..." } else { "Submit" }}
            </button>
            {move || {
                form.with(|f| {
                    f.banner().map(|message| view! { <StatusBanner status=f.status() message=message /> })
                })
            }}
        </form>
    }
}

#[component]
fn FieldInput(form: RwSignal<SubmissionForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.record().get(field).to_string());
    let error = move || form.with(|f| f.error(field).map(str::to_string));
    let input_class = move || {
        if error().is_some() {
            "w-full rounded-lg border border-red-500 bg-slate-950 px-3 py-2 text-slate-100"
        } else {
            "w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-slate-100"
        }
    };

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="4"
                placeholder=field.placeholder()
                class=input_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                type=field.input_type()
                placeholder=field.placeholder()
                class=input_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <div class="space-y-1">
            <label for=field.key() class="block text-sm font-medium text-slate-300">
                {field.label()}
            </label>
            {control}
            {move || error().map(|message| view! { <p class="text-sm text-red-400">{message}</p> })}
        </div>
    }
}
