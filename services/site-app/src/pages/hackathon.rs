//! Hackathon event landing page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::loading_gate::SessionGate;
use crate::components::reveal::Reveal;
use crate::content::{HACKATHON_NAME, PRIZES, TIMELINE};
use crate::gate::HACKATHON_GATE;
use crate::motion::{stagger, Variant};

#[component]
pub fn HackathonPage() -> impl IntoView {
    view! {
        <Title text=HACKATHON_NAME />
        <SessionGate config=HACKATHON_GATE title=HACKATHON_NAME tagline="Initializing systems...">
            <section class="min-h-[70vh] flex flex-col items-center justify-center text-center px-4">
                <Reveal variant=Variant::scale_in()>
                    <h1 class="text-6xl md:text-8xl font-extrabold tracking-tight text-cyan-400">
                        {HACKATHON_NAME}
                    </h1>
                </Reveal>
                <Reveal variant=Variant::fade_in_up().with_delay(250)>
                    <p class="mt-6 max-w-2xl text-lg text-slate-400">
                        "Two rounds. Thirty-six hours of building. Robots that solve real problems."
                    </p>
                    <div class="mt-8 flex flex-wrap justify-center gap-4">
                        <A href="/hackathon/register" attr:class="rounded-lg bg-cyan-500 px-6 py-3 font-semibold text-slate-950">
                            "Register your team"
                        </A>
                        <A href="/hackathon/problem-statements" attr:class="rounded-lg border border-slate-600 px-6 py-3 text-slate-200">
                            "View problem statements"
                        </A>
                    </div>
                </Reveal>
            </section>
            <Timeline />
            <Prizes />
        </SessionGate>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <section class="max-w-4xl mx-auto px-4 py-16">
            <h2 class="text-3xl font-bold text-slate-100 mb-8">"Timeline"</h2>
            <ol class="space-y-6 border-l border-slate-700 pl-6">
                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(i, milestone)| {
                        let variant = if i % 2 == 0 {
                            Variant::slide_in_left()
                        } else {
                            Variant::slide_in_right()
                        };
                        view! {
                            <li>
                                <Reveal variant=stagger(variant, i, 150)>
                                    <p class="text-sm uppercase tracking-wide text-cyan-400">{milestone.date}</p>
                                    <h3 class="text-xl font-semibold text-slate-100">{milestone.title}</h3>
                                    <p class="text-slate-400">{milestone.detail}</p>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn Prizes() -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-4 py-16">
            <h2 class="text-3xl font-bold text-slate-100 mb-8">"Prizes"</h2>
            <div class="grid gap-6 md:grid-cols-3">
                {PRIZES
                    .iter()
                    .enumerate()
                    .map(|(i, prize)| {
                        view! {
                            <Reveal
                                variant=stagger(Variant::scale_in(), i, 100)
                                class="rounded-xl border border-slate-800 bg-slate-900/60 p-6 text-center"
                            >
                                <h3 class="text-xl font-bold text-cyan-400">{prize.place}</h3>
                                <p class="mt-2 text-slate-400">{prize.reward}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
