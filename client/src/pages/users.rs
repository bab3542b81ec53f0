//! Users page: table of users with an edit modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/users/` for the table, then `/teams/` for the modal's team select
//! once the users have arrived. A teams failure only leaves the select empty.
//! Saving sends a `PATCH` and, on success, closes the modal and reloads the
//! whole users list.

use leptos::prelude::*;

use crate::components::collection_frame::CollectionFrame;
use crate::components::user_edit_modal::UserEditModal;
use crate::net::api::{Collection, update_user};
use crate::net::types::{Team, User};
use crate::state::collection::CollectionState;
use crate::state::user_edit::{SubmitOutcome, UserEditState};
use crate::util::browser::alert;
use crate::util::fetch::{api_config, load_in_order, reload, spawn_task};
use crate::util::format::{display_date, handle, team_label};

#[component]
pub fn UsersPage() -> impl IntoView {
    let config = api_config();
    let users = RwSignal::new(CollectionState::<User>::default());
    let teams = RwSignal::new(CollectionState::<Team>::default());
    let edit = RwSignal::new(UserEditState::default());

    spawn_task(load_in_order(config.clone(), (users, Collection::Users), (teams, Collection::Teams)));

    let on_edit = Callback::new(move |user: User| edit.update(|s| s.open(&user)));
    let on_cancel = Callback::new(move |()| {
        edit.update(|s| {
            s.cancel();
        });
    });

    let on_submit = Callback::new(move |()| {
        // The teams request must settle before a write goes out.
        if teams.get_untracked().is_loading() {
            return;
        }
        let Some((user_id, patch)) = edit.try_update(UserEditState::begin_submit).flatten() else {
            return;
        };
        let config = config.clone();
        spawn_task(async move {
            let result = update_user(&config, user_id, &patch).await;
            match edit.try_update(|s| s.finish_submit(&result)).flatten() {
                Some(SubmitOutcome::Refetch) => {
                    reload(users, config, Collection::Users).await;
                }
                Some(SubmitOutcome::Alert(message)) => {
                    #[cfg(feature = "hydrate")]
                    {
                        log::error!("error updating user {user_id}: {message}");
                    }
                    alert(&message);
                }
                None => {}
            }
        });
    });

    view! {
        <CollectionFrame
            status=Signal::derive(move || users.get().status())
            title="👥 OctoFit Users"
            noun="users"
            count_prefix="Total Users: "
        >
            <div class="table-responsive">
                <table class="table table-striped table-hover">
                    <thead class="table-dark">
                        <tr>
                            <th scope="col">"#"</th>
                            <th scope="col">"Username"</th>
                            <th scope="col">"Full Name"</th>
                            <th scope="col">"Email"</th>
                            <th scope="col">"Team"</th>
                            <th scope="col">"Joined"</th>
                            <th scope="col">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .items()
                                .iter()
                                .cloned()
                                .map(|user| view! { <UserRow user=user on_edit=on_edit/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </CollectionFrame>
        <Show when=move || edit.get().is_open()>
            <UserEditModal edit=edit teams=teams on_submit=on_submit on_cancel=on_cancel/>
        </Show>
    }
}

#[component]
fn UserRow(user: User, on_edit: Callback<User>) -> impl IntoView {
    let team_class = if user.team_id.is_some() { "badge bg-primary" } else { "badge bg-secondary" };
    let joined = display_date(user.created_at.as_deref());
    let selected = user.clone();

    view! {
        <tr>
            <th scope="row">{user.id}</th>
            <td>
                <span class="badge bg-info">{handle(&user.username)}</span>
            </td>
            <td class="fw-bold">{user.name}</td>
            <td>{user.email}</td>
            <td>
                <span class=team_class>{team_label(user.team_id)}</span>
            </td>
            <td>{joined}</td>
            <td>
                <button class="btn btn-sm btn-warning" on:click=move |_| on_edit.run(selected.clone())>
                    "✏️ Edit"
                </button>
            </td>
        </tr>
    }
}
