use super::*;

#[test]
fn collection_urls_follow_backend_routes() {
    let cfg = ApiConfig::default();
    assert_eq!(collection_url(&cfg, Collection::Users), "http://localhost:8000/api/users/");
    assert_eq!(collection_url(&cfg, Collection::Teams), "http://localhost:8000/api/teams/");
    assert_eq!(collection_url(&cfg, Collection::Activities), "http://localhost:8000/api/activities/");
    assert_eq!(collection_url(&cfg, Collection::Leaderboard), "http://localhost:8000/api/leaderboard/");
    assert_eq!(collection_url(&cfg, Collection::Workouts), "http://localhost:8000/api/workouts/");
}

#[test]
fn collection_url_uses_codespace_host() {
    let cfg = ApiConfig::resolve(None, Some("octo"));
    assert_eq!(collection_url(&cfg, Collection::Leaderboard), "https://octo-8000.app.github.dev/api/leaderboard/");
}

#[test]
fn user_url_formats_id_with_trailing_slash() {
    assert_eq!(user_url(&ApiConfig::default(), 12), "http://localhost:8000/api/users/12/");
}

#[test]
fn unavailable_reads_as_network_error() {
    assert_eq!(unavailable().to_string(), "not available on server");
}

#[test]
fn status_error_message_matches_panel_text() {
    assert_eq!(ApiError::Status(404).to_string(), "HTTP error! status: 404");
}
