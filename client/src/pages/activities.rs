//! Activities page: table of logged activities.

use leptos::prelude::*;

use crate::components::collection_frame::CollectionFrame;
use crate::net::api::Collection;
use crate::net::types::Activity;
use crate::util::fetch::use_collection;
use crate::util::format::display_date;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = use_collection::<Activity>(Collection::Activities);

    view! {
        <CollectionFrame
            status=Signal::derive(move || activities.get().status())
            title="🏃 OctoFit Activities"
            noun="activities"
            count_prefix="Total Activities: "
        >
            <div class="table-responsive">
                <table class="table table-striped table-hover">
                    <thead class="table-dark">
                        <tr>
                            <th scope="col">"#"</th>
                            <th scope="col">"User"</th>
                            <th scope="col">"Activity Type"</th>
                            <th scope="col">"Duration"</th>
                            <th scope="col">"Calories"</th>
                            <th scope="col">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || activities.get().items().iter().cloned().map(activity_row).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </CollectionFrame>
    }
}

fn activity_row(activity: Activity) -> impl IntoView {
    let date = display_date(activity.date.as_deref());
    view! {
        <tr>
            <th scope="row">{activity.id}</th>
            <td>
                <span class="badge bg-secondary">{format!("User {}", activity.user_id)}</span>
            </td>
            <td>
                <span class="badge bg-info">{activity.activity_type}</span>
            </td>
            <td>
                <strong>{activity.duration}</strong>
                " min"
            </td>
            <td>
                <strong>{activity.calories_burned}</strong>
                " kcal"
            </td>
            <td>{date}</td>
        </tr>
    }
}
