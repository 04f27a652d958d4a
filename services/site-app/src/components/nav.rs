//! Site navigation and footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{CLUB_NAME, CONTACT_EMAIL, HACKATHON_NAME};

const NAV_LINKS: [(&str, &str); 7] = [
    ("/", "Home"),
    ("/hackathon", HACKATHON_NAME),
    ("/hackathon/problem-statements", "Problem Statements"),
    ("/hackathon/judges", "Judges"),
    ("/hackathon/sponsors", "Sponsors"),
    ("/hackathon/register", "Register"),
    ("/contact", "Contact"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-slate-950/80 backdrop-blur border-b border-slate-800">
            <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <A href="/" attr:class="text-lg font-bold text-cyan-400">{CLUB_NAME}</A>
                <button
                    class="md:hidden p-2 text-slate-200"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <ul class=move || {
                    if menu_open.get() {
                        "flex flex-col absolute top-16 inset-x-0 bg-slate-950 p-4 gap-3 md:static md:flex-row md:p-0"
                    } else {
                        "hidden md:flex md:flex-row gap-6"
                    }
                }>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li on:click=move |_| set_menu_open.set(false)>
                                    <A href=*href attr:class="text-slate-300 hover:text-cyan-400 transition-colors">
                                        {*label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 py-8 text-center text-sm text-slate-400">
            <p>{CLUB_NAME}" · "{HACKATHON_NAME}</p>
            <p>
                <a href=format!("mailto:{}", CONTACT_EMAIL) class="hover:text-cyan-400">{CONTACT_EMAIL}</a>
            </p>
        </footer>
    }
}
