use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <h1 class="text-6xl font-extrabold text-cyan-400">"404"</h1>
            <p class="mt-4 text-slate-400">"This page wandered off the track."</p>
            <A href="/" attr:class="mt-8 text-cyan-400 hover:underline">"Back to home"</A>
        </section>
    }
}
