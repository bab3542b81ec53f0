//! Landing page with a welcome banner and shortcuts to each view.

use leptos::prelude::*;
use leptos_router::components::A;

struct Shortcut {
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    color: &'static str,
}

const SHORTCUTS: [Shortcut; 5] = [
    Shortcut {
        href: "/users",
        icon: "👥",
        title: "Users",
        blurb: "View all registered OctoFit users and their profiles.",
        color: "primary",
    },
    Shortcut {
        href: "/leaderboard",
        icon: "🏆",
        title: "Leaderboard",
        blurb: "Check the rankings and see who's leading the competition!",
        color: "success",
    },
    Shortcut {
        href: "/workouts",
        icon: "💪",
        title: "Workouts",
        blurb: "Discover personalized workout suggestions for your goals.",
        color: "warning",
    },
    Shortcut {
        href: "/teams",
        icon: "🎯",
        title: "Teams",
        blurb: "Join a team and compete together for the top spot!",
        color: "info",
    },
    Shortcut {
        href: "/activities",
        icon: "🏃",
        title: "Activities",
        blurb: "Track and log your daily fitness activities and progress.",
        color: "danger",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mt-5">
            <div class="jumbotron text-center">
                <h1 class="display-4">"Welcome to OctoFit Tracker! 🏋️"</h1>
                <p class="lead">
                    "Track your fitness journey, compete with your team, and achieve your goals!"
                </p>
                <hr class="my-4"/>
                <div class="row mt-5 g-4">
                    {SHORTCUTS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="col-md-4">
                                    <A href=s.href attr:class="text-decoration-none">
                                        <div class=format!("card border-{} h-100 card-hover", s.color)>
                                            <div class="card-body text-center">
                                                <h2 class="mb-3">{s.icon}</h2>
                                                <h5 class="card-title">{s.title}</h5>
                                                <p class="card-text">{s.blurb}</p>
                                                <div class=format!("btn btn-{}", s.color)>
                                                    {format!("View {}", s.title)}
                                                </div>
                                            </div>
                                        </div>
                                    </A>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="alert alert-info mt-5" role="alert">
                    <h5 class="alert-heading">"🚀 Getting Started"</h5>
                    <p class="mb-0">
                        "Navigate through the menu to explore users, teams, activities, the leaderboard and workouts."
                    </p>
                </div>
            </div>
        </div>
    }
}
