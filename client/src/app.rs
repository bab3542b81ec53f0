//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::{API_BASE_META, ApiConfig};
use crate::pages::{
    activities::ActivitiesPage, home::HomePage, leaderboard::LeaderboardPage, teams::TeamsPage, users::UsersPage,
    workouts::WorkoutsPage,
};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
///
/// The resolved API base URL is embedded as a `<meta>` tag so the hydrated
/// client fetches from the same backend the server was configured with.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api.base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and mounts the navbar above the routed view.
/// Each route mounts a fresh page, so every visit refetches its collection.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_browser);
    provide_context(api);

    view! {
        <Stylesheet href=BOOTSTRAP_CSS/>
        <Stylesheet id="leptos" href="/pkg/octofit.css"/>
        <Title text="OctoFit Tracker"/>

        <Router>
            <div class="App">
                <Navbar/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("teams") view=TeamsPage/>
                    <Route path=StaticSegment("activities") view=ActivitiesPage/>
                    <Route path=StaticSegment("leaderboard") view=LeaderboardPage/>
                    <Route path=StaticSegment("workouts") view=WorkoutsPage/>
                </Routes>
            </div>
        </Router>
    }
}
