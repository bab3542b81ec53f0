//! Modal form for editing a user's details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the Users page. The modal only edits the draft inside
//! `UserEditState`; submitting and refetching are the page's job, reached
//! through `on_submit` and `on_cancel`.

use leptos::prelude::*;

use crate::net::types::Team;
use crate::state::collection::CollectionState;
use crate::state::user_edit::{DraftField, UserEditState};

#[component]
pub fn UserEditModal(
    edit: RwSignal<UserEditState>,
    /// Options for the team select; empty if teams failed to load.
    teams: RwSignal<CollectionState<Team>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submitting = move || edit.get().is_submitting();
    let can_save = move || !submitting() && !teams.get().is_loading();

    view! {
        <div class="modal show d-block dialog-backdrop" tabindex="-1" on:click=move |_| on_cancel.run(())>
            <div
                class="modal-dialog modal-dialog-centered"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_cancel.run(());
                    }
                }
            >
                <div class="modal-content">
                    <div class="modal-header bg-warning">
                        <h5 class="modal-title">"✏️ Edit User Details"</h5>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            prop:disabled=submitting
                            on:click=move |_| on_cancel.run(())
                        ></button>
                    </div>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit.run(());
                    }>
                        <div class="modal-body">
                            <DraftInput edit=edit field=DraftField::Username label="Username" input_type="text"/>
                            <DraftInput edit=edit field=DraftField::Name label="Full Name" input_type="text"/>
                            <DraftInput edit=edit field=DraftField::Email label="Email Address" input_type="email"/>
                            <div class="mb-3">
                                <label for="team_id" class="form-label">"Team"</label>
                                <select
                                    class="form-select"
                                    id="team_id"
                                    name="team_id"
                                    prop:value=move || edit.get().draft.team_id
                                    prop:disabled=submitting
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit.update(|s| s.set_field(DraftField::TeamId, value));
                                    }
                                >
                                    <option value="">"No Team"</option>
                                    {move || {
                                        let selected = edit.get().draft.team_id;
                                        teams
                                            .get()
                                            .items()
                                            .iter()
                                            .map(|team| {
                                                let value = team.id.to_string();
                                                let is_selected = value == selected;
                                                view! {
                                                    <option value=value selected=is_selected>{team.name.clone()}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                prop:disabled=submitting
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-warning" prop:disabled=move || !can_save()>
                                {move || if submitting() { "Saving..." } else { "💾 Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

/// One labelled text input bound to a draft field.
#[component]
fn DraftInput(
    edit: RwSignal<UserEditState>,
    field: DraftField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let id = match field {
        DraftField::Username => "username",
        DraftField::Name => "name",
        DraftField::Email => "email",
        DraftField::TeamId => "team_id",
    };
    let value = move || {
        let draft = edit.get().draft;
        match field {
            DraftField::Username => draft.username,
            DraftField::Name => draft.name,
            DraftField::Email => draft.email,
            DraftField::TeamId => draft.team_id,
        }
    };

    view! {
        <div class="mb-3">
            <label for=id class="form-label">{label}</label>
            <input
                type=input_type
                class="form-control"
                id=id
                name=id
                required=true
                prop:value=value
                prop:disabled=move || edit.get().is_submitting()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit.update(|s| s.set_field(field, value));
                }
            />
        </div>
    }
}
