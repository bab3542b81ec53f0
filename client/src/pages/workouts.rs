//! Workouts page: card grid of suggested workouts.

use leptos::prelude::*;

use crate::components::collection_frame::CollectionFrame;
use crate::net::api::Collection;
use crate::net::types::Workout;
use crate::util::badges::difficulty_color;
use crate::util::fetch::use_collection;

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    let workouts = use_collection::<Workout>(Collection::Workouts);

    view! {
        <CollectionFrame
            status=Signal::derive(move || workouts.get().status())
            title="💪 OctoFit Workouts"
            noun="workouts"
            count_prefix="Personalized workout suggestions - "
            count_suffix=" available"
            accent="success"
        >
            <div class="row">
                {move || workouts.get().items().iter().cloned().map(workout_card).collect::<Vec<_>>()}
            </div>
        </CollectionFrame>
    }
}

fn workout_card(workout: Workout) -> impl IntoView {
    let difficulty_class = format!("badge bg-{} me-2", difficulty_color(&workout.difficulty));
    view! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="card h-100">
                <div class="card-header bg-dark text-white">
                    <h5 class="mb-0">"💪 " {workout.name}</h5>
                </div>
                <div class="card-body">
                    <p class="card-text">{workout.description}</p>
                    <hr/>
                    <div class="mb-3">
                        <span class=difficulty_class>{workout.difficulty}</span>
                        <span class="badge bg-info">{workout.category}</span>
                    </div>
                    <div>
                        <strong>"⏱️ Duration:"</strong>
                        <p class="mb-0 text-primary">
                            <strong>{workout.duration}</strong>
                            " minutes"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
