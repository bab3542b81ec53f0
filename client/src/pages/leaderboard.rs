//! Leaderboard page: ranked table with tiered rank badges.

use leptos::prelude::*;

use crate::components::collection_frame::CollectionFrame;
use crate::net::api::Collection;
use crate::net::types::LeaderboardEntry;
use crate::util::badges::RankTier;
use crate::util::fetch::use_collection;
use crate::util::format::{display_date, display_name, handle};

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let entries = use_collection::<LeaderboardEntry>(Collection::Leaderboard);

    view! {
        <CollectionFrame
            status=Signal::derive(move || entries.get().status())
            title="🏆 OctoFit Leaderboard"
            noun="leaderboard"
            count_prefix="Competition Rankings - "
            count_suffix=" participants"
            accent="warning"
        >
            <div class="table-responsive">
                <table class="table table-striped table-hover">
                    <thead class="table-dark">
                        <tr>
                            <th scope="col" class="text-center">"Rank"</th>
                            <th scope="col">"User"</th>
                            <th scope="col">"Team"</th>
                            <th scope="col" class="text-center">"Total Points"</th>
                            <th scope="col" class="text-center">"Total Calories"</th>
                            <th scope="col">"Last Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || entries.get().items().iter().cloned().map(leaderboard_row).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </CollectionFrame>
    }
}

fn leaderboard_row(entry: LeaderboardEntry) -> impl IntoView {
    let tier = RankTier::for_rank(entry.rank);
    let name = display_name(entry.user.as_ref().map(|u| u.name.as_str()));
    let username = handle(entry.user.as_ref().map_or("", |u| u.username.as_str()));
    let (team_class, team_name) = match entry.team {
        Some(team) => ("badge bg-primary", team.name),
        None => ("badge bg-secondary", "No Team".to_owned()),
    };
    let updated = display_date(entry.updated_at.as_deref());

    view! {
        <tr>
            <td class="text-center">
                <h4 class="mb-0">
                    <span class=format!("badge {}", tier.badge_class())>
                        {format!("{} #{}", tier.icon(), entry.rank)}
                    </span>
                </h4>
            </td>
            <td>
                <div>
                    <strong>{name}</strong>
                    <br/>
                    <span class="badge bg-info">{username}</span>
                </div>
            </td>
            <td>
                <span class=team_class>{team_name}</span>
            </td>
            <td class="text-center">
                <h5 class="mb-0 text-success">
                    <strong>{entry.total_points}</strong>
                    " pts"
                </h5>
            </td>
            <td class="text-center">
                <h5 class="mb-0 text-danger">
                    <strong>{entry.total_calories}</strong>
                    " cal"
                </h5>
            </td>
            <td>{updated}</td>
        </tr>
    }
}
