//! Teams page: one card per team.

use leptos::prelude::*;

use crate::components::collection_frame::CollectionFrame;
use crate::net::api::Collection;
use crate::net::types::Team;
use crate::util::fetch::use_collection;
use crate::util::format::display_date;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let teams = use_collection::<Team>(Collection::Teams);

    view! {
        <CollectionFrame
            status=Signal::derive(move || teams.get().status())
            title="🏆 OctoFit Teams"
            noun="teams"
            count_prefix="Total Teams: "
        >
            <div class="row">
                {move || teams.get().items().iter().cloned().map(team_card).collect::<Vec<_>>()}
            </div>
        </CollectionFrame>
    }
}

fn team_card(team: Team) -> impl IntoView {
    let created = display_date(team.created_at.as_deref());
    view! {
        <div class="col-md-6 mb-4">
            <div class="card h-100">
                <div class="card-header bg-primary text-white">
                    <h5 class="mb-0">"🎯 " {team.name}</h5>
                </div>
                <div class="card-body">
                    <p class="card-text">{team.description}</p>
                    <hr/>
                    <div class="d-flex justify-content-between align-items-center">
                        <small class="text-muted">
                            <strong>"Created:"</strong>
                            " "
                            {created}
                        </small>
                        <span class="badge bg-info">{format!("Team ID: {}", team.id)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
