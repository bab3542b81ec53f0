use super::*;

fn tony() -> User {
    User {
        id: 4,
        username: "ironman".to_owned(),
        name: "Tony Stark".to_owned(),
        email: "tony@example.com".to_owned(),
        team_id: Some(2),
        created_at: Some("2025-01-01T00:00:00Z".to_owned()),
    }
}

fn editing_tony() -> UserEditState {
    let mut state = UserEditState::default();
    state.open(&tony());
    state
}

// =============================================================
// Draft
// =============================================================

#[test]
fn draft_copies_editable_fields() {
    let draft = UserDraft::from_user(&tony());
    assert_eq!(draft.username, "ironman");
    assert_eq!(draft.name, "Tony Stark");
    assert_eq!(draft.email, "tony@example.com");
    assert_eq!(draft.team_id, "2");
}

#[test]
fn draft_of_teamless_user_has_empty_team() {
    let user = User { team_id: None, ..tony() };
    assert_eq!(UserDraft::from_user(&user).team_id, "");
}

#[test]
fn empty_team_is_sent_as_null() {
    let draft = UserDraft { team_id: String::new(), ..UserDraft::from_user(&tony()) };
    let patch = draft.to_patch();
    assert_eq!(patch.team_id, None);
    assert_eq!(serde_json::to_value(&patch).unwrap()["team_id"], serde_json::Value::Null);
}

#[test]
fn numeric_team_is_sent_as_integer() {
    let draft = UserDraft { team_id: "7".to_owned(), ..UserDraft::from_user(&tony()) };
    let patch = draft.to_patch();
    assert_eq!(patch.team_id, Some(7));
    assert_eq!(serde_json::to_value(&patch).unwrap()["team_id"], serde_json::json!(7));
}

#[test]
fn parse_team_id_handles_whitespace_and_garbage() {
    assert_eq!(parse_team_id(" 12 "), Some(12));
    assert_eq!(parse_team_id("   "), None);
    assert_eq!(parse_team_id("abc"), None);
}

// =============================================================
// State machine
// =============================================================

#[test]
fn default_is_idle_and_closed() {
    let state = UserEditState::default();
    assert_eq!(state.phase, EditPhase::Idle);
    assert!(!state.is_open());
}

#[test]
fn open_enters_editing_with_prefilled_draft() {
    let state = editing_tony();
    assert_eq!(state.phase, EditPhase::Editing);
    assert_eq!(state.user_id, Some(4));
    assert_eq!(state.draft, UserDraft::from_user(&tony()));
}

#[test]
fn set_field_updates_draft_while_editing() {
    let mut state = editing_tony();
    state.set_field(DraftField::Name, "Anthony Stark".to_owned());
    state.set_field(DraftField::TeamId, String::new());
    assert_eq!(state.draft.name, "Anthony Stark");
    assert_eq!(state.draft.team_id, "");
}

#[test]
fn set_field_is_ignored_while_idle() {
    let mut state = UserEditState::default();
    state.set_field(DraftField::Email, "x@example.com".to_owned());
    assert_eq!(state.draft.email, "");
}

#[test]
fn cancel_discards_draft_without_request() {
    let mut state = editing_tony();
    state.set_field(DraftField::Name, "Changed".to_owned());
    assert!(state.cancel());
    assert_eq!(state, UserEditState::default());
}

#[test]
fn begin_submit_yields_patch_and_locks_inputs() {
    let mut state = editing_tony();
    state.set_field(DraftField::TeamId, String::new());
    let (id, patch) = state.begin_submit().unwrap();
    assert_eq!(id, 4);
    assert_eq!(patch.team_id, None);
    assert!(state.is_submitting());

    state.set_field(DraftField::Name, "Ignored".to_owned());
    assert_eq!(state.draft.name, "Tony Stark");
    assert!(!state.cancel());
    assert!(state.is_open());
}

#[test]
fn begin_submit_requires_editing() {
    let mut state = UserEditState::default();
    assert!(state.begin_submit().is_none());

    let mut submitting = editing_tony();
    assert!(submitting.begin_submit().is_some());
    assert!(submitting.begin_submit().is_none());
}

#[test]
fn successful_submit_closes_and_clears() {
    let mut state = editing_tony();
    state.begin_submit();
    assert_eq!(state.finish_submit(&Ok(())), Some(SubmitOutcome::Refetch));
    assert_eq!(state, UserEditState::default());
}

#[test]
fn failed_submit_keeps_modal_open_with_draft() {
    let mut state = editing_tony();
    state.set_field(DraftField::Email, "stark@example.com".to_owned());
    state.begin_submit();
    let outcome = state.finish_submit(&Err(ApiError::rejected(Some("Email taken".to_owned()))));

    assert_eq!(outcome, Some(SubmitOutcome::Alert("Error: Email taken".to_owned())));
    assert_eq!(state.phase, EditPhase::Editing);
    assert_eq!(state.user_id, Some(4));
    assert_eq!(state.draft.email, "stark@example.com");
}

#[test]
fn open_is_ignored_while_submitting() {
    let mut state = editing_tony();
    state.begin_submit();
    let other = User { id: 9, ..tony() };
    state.open(&other);
    assert_eq!(state.user_id, Some(4));
}

#[test]
fn rejected_without_detail_uses_generic_message() {
    assert_eq!(ApiError::rejected(None).to_string(), "Failed to update user");
    assert_eq!(ApiError::rejected(Some("Email taken".to_owned())).to_string(), "Email taken");
}

#[test]
fn failed_submit_without_detail_alerts_generic_message() {
    let mut state = editing_tony();
    state.begin_submit();
    let outcome = state.finish_submit(&Err(ApiError::rejected(None)));
    assert_eq!(outcome, Some(SubmitOutcome::Alert("Error: Failed to update user".to_owned())));
}

#[test]
fn settling_without_pending_submit_does_nothing() {
    let mut state = editing_tony();
    assert_eq!(state.finish_submit(&Ok(())), None);
    assert_eq!(state, editing_tony());
}
