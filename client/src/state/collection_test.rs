use super::*;
use crate::net::types::{Team, Workout, decode_collection};

fn team(id: i64, name: &str) -> Team {
    Team { id, name: name.to_owned(), description: String::new(), created_at: None }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_state_is_loading_with_no_rows() {
    let state = CollectionState::<Team>::default();
    assert!(state.is_loading());
    assert_eq!(state.error(), None);
    assert!(state.items().is_empty());
    assert_eq!(state.status(), LoadStatus::Loading);
}

#[test]
fn finish_ok_loads_every_record() {
    let mut state = CollectionState::default();
    state.finish(Ok(vec![team(1, "Blue"), team(2, "Red"), team(3, "Gold")]));
    assert_eq!(state.count(), 3);
    assert_eq!(state.status(), LoadStatus::Loaded(3));
    assert_eq!(state.items()[2].name, "Gold");
}

#[test]
fn finish_status_error_shows_message_and_no_rows() {
    let mut state = CollectionState::<Team>::default();
    state.finish(Err(ApiError::Status(500)));
    assert_eq!(state.error(), Some("HTTP error! status: 500"));
    assert_eq!(state.count(), 0);
    assert_eq!(state.status(), LoadStatus::Failed("HTTP error! status: 500".to_owned()));
}

#[test]
fn finish_network_error_passes_message_through() {
    let mut state = CollectionState::<Team>::default();
    state.finish(Err(ApiError::Network("Failed to fetch".to_owned())));
    assert_eq!(state.error(), Some("Failed to fetch"));
}

#[test]
fn begin_load_hides_previous_rows() {
    let mut state = CollectionState::default();
    state.finish(Ok(vec![team(1, "Blue")]));
    state.begin_load();
    assert!(state.is_loading());
    assert!(state.items().is_empty());
}

#[test]
fn reload_replaces_rather_than_merges() {
    let mut state = CollectionState::default();
    state.finish(Ok(vec![team(1, "Blue"), team(2, "Red")]));
    state.begin_load();
    state.finish(Ok(vec![team(2, "Crimson")]));
    assert_eq!(state.items(), &[team(2, "Crimson")]);
}

// =============================================================
// Shape normalization end to end
// =============================================================

#[test]
fn paginated_and_flat_bodies_render_the_same_count() {
    let flat = r#"[
        {"id": 1, "name": "Core Blast", "description": "Abs", "difficulty": "Beginner", "category": "Core", "duration": 15},
        {"id": 2, "name": "Leg Day", "description": "Squats", "difficulty": "Advanced", "category": "Strength", "duration": 45}
    ]"#;
    let paged = format!(r#"{{"count": 2, "results": {flat}}}"#);

    let mut a = CollectionState::<Workout>::default();
    a.finish(decode_collection(flat));
    let mut b = CollectionState::<Workout>::default();
    b.finish(decode_collection(&paged));

    assert_eq!(a.status(), LoadStatus::Loaded(2));
    assert_eq!(a, b);
}

#[test]
fn malformed_body_lands_in_error_panel() {
    let mut state = CollectionState::<Workout>::default();
    state.finish(decode_collection(r#"{"detail": "Not found."}"#));
    assert!(state.error().is_some_and(|m| m.starts_with("unexpected response")));
    assert_eq!(state.count(), 0);
}

#[test]
fn only_a_finished_load_counts_as_loaded() {
    let mut state = CollectionState::<Team>::default();
    assert!(!state.is_loaded());
    state.finish(Ok(Vec::new()));
    assert!(state.is_loaded());
    state.begin_load();
    assert!(!state.is_loaded());
    state.finish(Err(ApiError::Status(500)));
    assert!(!state.is_loaded());
}
