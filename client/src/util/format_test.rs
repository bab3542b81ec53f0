use super::*;

#[test]
fn display_date_trims_timestamp_to_date() {
    assert_eq!(display_date(Some("2025-03-04T10:22:01.123456Z")), "2025-03-04");
    assert_eq!(display_date(Some("2025-03-04 10:22:01")), "2025-03-04");
}

#[test]
fn display_date_keeps_plain_dates() {
    assert_eq!(display_date(Some("2025-12-31")), "2025-12-31");
}

#[test]
fn display_date_handles_missing_values() {
    assert_eq!(display_date(None), "N/A");
    assert_eq!(display_date(Some("")), "N/A");
}

#[test]
fn display_date_passes_unknown_formats_through() {
    assert_eq!(display_date(Some("yesterday")), "yesterday");
}

#[test]
fn handle_prefixes_username() {
    assert_eq!(handle("cap"), "@cap");
    assert_eq!(handle(""), "@N/A");
}

#[test]
fn team_label_names_team_or_none() {
    assert_eq!(team_label(Some(3)), "Team 3");
    assert_eq!(team_label(None), "No Team");
}

#[test]
fn display_name_falls_back_to_unknown() {
    assert_eq!(display_name(Some("Natasha")), "Natasha");
    assert_eq!(display_name(Some(" ")), "Unknown User");
    assert_eq!(display_name(None), "Unknown User");
}
