//! Hackathon sponsors, grouped by tier

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;
use crate::content::{sponsors_in, SponsorTier};
use crate::motion::{stagger, Variant};

#[component]
pub fn SponsorsPage() -> impl IntoView {
    view! {
        <Title text="Sponsors" />
        <section class="max-w-5xl mx-auto px-4 pt-28 pb-16">
            <h1 class="text-4xl font-extrabold text-slate-100">"Our Sponsors"</h1>
            <p class="mt-3 text-slate-400">"The organizations that make the hackathon possible."</p>
            {SponsorTier::ALL
                .iter()
                .map(|tier| view! { <TierSection tier=*tier /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn TierSection(tier: SponsorTier) -> impl IntoView {
    let card_class = match tier {
        SponsorTier::Title => "rounded-2xl border border-cyan-400 bg-slate-900 p-10 text-3xl font-bold text-cyan-300",
        SponsorTier::Gold => "rounded-xl border border-amber-400/60 bg-slate-900 p-8 text-2xl font-semibold text-amber-300",
        SponsorTier::Silver | SponsorTier::Community => {
            "rounded-lg border border-slate-700 bg-slate-900 p-6 text-lg text-slate-200"
        }
    };

    view! {
        <div class="mt-12">
            <h2 class="text-xl uppercase tracking-widest text-slate-400">{tier.label()}</h2>
            <div class="mt-4 grid gap-4 sm:grid-cols-2">
                {sponsors_in(tier)
                    .enumerate()
                    .map(|(i, sponsor)| {
                        view! {
                            <Reveal variant=stagger(Variant::fade_in(), i, 80)>
                                <a href=sponsor.url target="_blank" rel="noopener" class=card_class>
                                    {sponsor.name}
                                </a>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
