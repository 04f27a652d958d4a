//! Club home page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::loading_gate::SessionGate;
use crate::components::reveal::Reveal;
use crate::content::{ACTIVITIES, CLUB_NAME, HACKATHON_NAME};
use crate::gate::MAIN_SITE_GATE;
use crate::motion::{stagger, Variant};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=CLUB_NAME />
        <SessionGate config=MAIN_SITE_GATE title=CLUB_NAME tagline="Build. Break. Repeat.">
            <Hero />
            <Activities />
            <HackathonCallout />
        </SessionGate>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-[80vh] flex flex-col items-center justify-center text-center px-4">
            <Reveal variant=Variant::fade_in_up()>
                <h1 class="text-5xl md:text-7xl font-extrabold text-slate-100">{CLUB_NAME}</h1>
            </Reveal>
            <Reveal variant=Variant::fade_in().with_delay(300)>
                <p class="mt-6 max-w-2xl text-lg text-slate-400">
                    "A student community designing, building and competing with robots. "
                    "Everyone is welcome, from first-time tinkerers to seasoned builders."
                </p>
            </Reveal>
        </section>
    }
}

#[component]
fn Activities() -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 py-20">
            <h2 class="text-3xl font-bold text-slate-100 mb-10">"What we do"</h2>
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                {ACTIVITIES
                    .iter()
                    .enumerate()
                    .map(|(i, activity)| {
                        view! {
                            <Reveal
                                variant=stagger(Variant::fade_in_up(), i, 120)
                                class="rounded-xl border border-slate-800 bg-slate-900/60 p-6"
                            >
                                <h3 class="text-xl font-semibold text-cyan-400">{activity.title}</h3>
                                <p class="mt-2 text-slate-400">{activity.summary}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HackathonCallout() -> impl IntoView {
    view! {
        <section class="max-w-4xl mx-auto px-4 py-20 text-center">
            <Reveal variant=Variant::scale_in()>
                <h2 class="text-3xl font-bold text-slate-100">{HACKATHON_NAME}" is coming"</h2>
                <p class="mt-4 text-slate-400">
                    "Our annual robotics hackathon: real problem statements, expert judges and prizes."
                </p>
                <A href="/hackathon" attr:class="inline-block mt-8 rounded-lg bg-cyan-500 px-6 py-3 font-semibold text-slate-950">
                    "Explore the hackathon"
                </A>
            </Reveal>
        </section>
    }
}
