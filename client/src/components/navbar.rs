//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

/// Route links shown in the navbar, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/users", "Users"),
    ("/teams", "Teams"),
    ("/activities", "Activities"),
    ("/leaderboard", "Leaderboard"),
    ("/workouts", "Workouts"),
];

/// Brand link plus one link per view. The router marks the current link with
/// `aria-current="page"`, which the stylesheet highlights.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <A href="/" attr:class="navbar-brand">
                    <img src="/octofitapp-small.png" alt="OctoFit Logo"/>
                    "🏋️ OctoFit Tracker"
                </A>
                <ul class="navbar-nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-item">
                                    <A href=href attr:class="nav-link">{label}</A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
