use super::*;
use time::macros::datetime;

// =============================================================================
// initials
// =============================================================================

#[test]
fn initials_takes_first_letter_of_first_two_words() {
    assert_eq!(initials("rahul kumar singh"), "RK");
    assert_eq!(initials("Priya S."), "PS");
}

#[test]
fn initials_single_word_and_empty() {
    assert_eq!(initials("meera"), "M");
    assert_eq!(initials("   "), "");
}

// =============================================================================
// timestamps
// =============================================================================

#[test]
fn parse_timestamp_accepts_rfc3339_and_local_datetime() {
    assert_eq!(parse_timestamp("2025-03-01T10:00:00Z"), Some(datetime!(2025-03-01 10:00:00 UTC)));
    assert_eq!(parse_timestamp("2025-03-01T10:00:00"), Some(datetime!(2025-03-01 10:00:00 UTC)));
    assert!(parse_timestamp("2025-03-01T10:00:00.250").is_some());
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert_eq!(parse_timestamp("yesterday"), None);
}

#[test]
fn relative_time_minutes() {
    let now = datetime!(2025-03-01 10:45:00 UTC);
    assert_eq!(relative_time("2025-03-01T10:00:00", now), "45 mins ago");
    assert_eq!(relative_time("2025-03-01T10:45:00Z", now), "0 mins ago");
}

#[test]
fn relative_time_hours_and_days() {
    let now = datetime!(2025-03-02 09:00:00 UTC);
    assert_eq!(relative_time("2025-03-01T22:00:00", now), "11 hours ago");
    assert_eq!(relative_time("2025-02-27T09:00:00", now), "3 days ago");
}

#[test]
fn relative_time_older_than_a_week_is_a_date() {
    let now = datetime!(2025-03-20 09:00:00 UTC);
    assert_eq!(relative_time("2025-03-01T10:00:00", now), "2025-03-01");
}

#[test]
fn relative_time_future_clamps_to_zero() {
    let now = datetime!(2025-03-01 10:00:00 UTC);
    assert_eq!(relative_time("2025-03-01T10:30:00", now), "0 mins ago");
}

#[test]
fn relative_time_passes_through_unparseable() {
    let now = datetime!(2025-03-01 10:00:00 UTC);
    assert_eq!(relative_time("n/a", now), "n/a");
}

// =============================================================================
// labels and card state
// =============================================================================

#[test]
fn reply_count_label_pluralizes() {
    assert_eq!(reply_count_label(0), "0 Replies");
    assert_eq!(reply_count_label(1), "1 Reply");
    assert_eq!(reply_count_label(12), "12 Replies");
}

#[test]
fn mock_upvotes_is_stable_and_bounded() {
    let a = mock_upvotes("q-123");
    assert_eq!(a, mock_upvotes("q-123"));
    assert!(a < 50);
    assert!(mock_upvotes("") < 50);
}

#[test]
fn hot_badge_only_on_first_two_cards() {
    assert!(is_hot(0));
    assert!(is_hot(1));
    assert!(!is_hot(2));
}

#[test]
fn toggle_upvote_adds_then_removes() {
    let (up, count) = toggle_upvote(false, 24);
    assert_eq!((up, count), (true, 25));
    assert_eq!(toggle_upvote(up, count), (false, 24));
    assert_eq!(toggle_upvote(true, 0), (false, 0));
}
