//! Display helpers shared by the browser UI and the CLI.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Up to two uppercase initials, one per word: `"rahul kumar singh"` → `"RK"`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Parse a server timestamp. Offset-less values are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .or_else(|| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok().map(PrimitiveDateTime::assume_utc))
}

/// `"N mins ago"` under an hour, `"N hours ago"` under a day, `"N days ago"`
/// under a week, else the calendar date. Unparseable input is returned as-is.
#[must_use]
pub fn relative_time(raw: &str, now: OffsetDateTime) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let elapsed = (now - at).max(time::Duration::ZERO);
    let mins = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();
    if mins < 60 {
        format!("{mins} mins ago")
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        let date = at.date();
        format!("{}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
    }
}

/// `"1 Reply"`, `"3 Replies"`.
#[must_use]
pub fn reply_count_label(count: usize) -> String {
    if count == 1 { "1 Reply".to_owned() } else { format!("{count} Replies") }
}

/// Placeholder vote count for a card. Votes are not stored server-side;
/// this is stable per question id so cards don't jump between renders.
#[must_use]
pub fn mock_upvotes(question_id: &str) -> u32 {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;
    let hash = question_id
        .bytes()
        .fold(FNV_OFFSET, |acc, b| (acc ^ u32::from(b)).wrapping_mul(FNV_PRIME));
    hash % 50
}

/// The first two cards of a feed get the "Hot" badge.
#[must_use]
pub fn is_hot(index: usize) -> bool {
    index < 2
}

/// Toggle a local upvote; returns the new `(upvoted, count)`.
#[must_use]
pub fn toggle_upvote(upvoted: bool, count: u32) -> (bool, u32) {
    if upvoted { (false, count.saturating_sub(1)) } else { (true, count.saturating_add(1)) }
}
