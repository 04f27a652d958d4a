//! Hackathon problem statements

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::reveal::Reveal;
use crate::content::PROBLEM_STATEMENTS;
use crate::motion::{stagger, Variant};

#[component]
pub fn ProblemStatementsPage() -> impl IntoView {
    view! {
        <Title text="Problem Statements" />
        <section class="max-w-5xl mx-auto px-4 pt-28 pb-16">
            <h1 class="text-4xl font-extrabold text-slate-100">"Problem Statements"</h1>
            <p class="mt-3 text-slate-400">
                "Pick one track. Your registration video should explain how your team will tackle it."
            </p>
            <div class="mt-10 space-y-6">
                {PROBLEM_STATEMENTS
                    .iter()
                    .enumerate()
                    .map(|(i, problem)| {
                        view! {
                            <Reveal
                                variant=stagger(Variant::slide_in_left(), i, 90)
                                class="rounded-xl border border-slate-800 bg-slate-900/60 p-6"
                            >
                                <div class="flex items-center gap-3">
                                    <span class="rounded bg-cyan-500/20 px-2 py-1 font-mono text-xs text-cyan-300">
                                        {problem.code}
                                    </span>
                                    <span class="text-sm uppercase tracking-wide text-slate-400">{problem.track}</span>
                                </div>
                                <h2 class="mt-3 text-xl font-semibold text-slate-100">{problem.title}</h2>
                                <p class="mt-2 text-slate-400">{problem.description}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-12 text-center">
                <A href="/hackathon/register" attr:class="rounded-lg bg-cyan-500 px-6 py-3 font-semibold text-slate-950">
                    "Register your team"
                </A>
            </div>
        </section>
    }
}
