//! Main App component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::nav::{SiteFooter, SiteNav};
use crate::content::{CLUB_NAME, HACKATHON_NAME};
use crate::pages::contact::ContactPage;
use crate::pages::hackathon::HackathonPage;
use crate::pages::home::HomePage;
use crate::pages::judges::JudgesPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::problem_statements::ProblemStatementsPage;
use crate::pages::register::{ProjectSubmitPage, RegisterPage};
use crate::pages::sponsors::SponsorsPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|text: String| format!("{text} | {CLUB_NAME}") />
        <Meta
            name="description"
            content=format!("{CLUB_NAME} and the {HACKATHON_NAME} robotics hackathon")
        />
        <Router>
            <SiteNav />
            <main class="min-h-screen bg-slate-950 text-slate-100">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/hackathon") view=HackathonPage />
                    <Route path=path!("/hackathon/judges") view=JudgesPage />
                    <Route path=path!("/hackathon/sponsors") view=SponsorsPage />
                    <Route path=path!("/hackathon/problem-statements") view=ProblemStatementsPage />
                    <Route path=path!("/hackathon/register") view=RegisterPage />
                    <Route path=path!("/hackathon/submit") view=ProjectSubmitPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}
