use super::*;
use crate::config::ClientConfig;
use crate::session::MemoryStorage;

fn page(name: &str) -> Page {
    Page {
        id: format!("p-{name}"),
        name: name.to_owned(),
        description: format!("{name} doubts"),
        question_count: 2,
        created_at: "2025-01-01T00:00:00".to_owned(),
    }
}

fn question(id: &str, page_name: &str, created_at: &str) -> Question {
    Question {
        id: id.to_owned(),
        title: format!("title {id}"),
        description: "body".to_owned(),
        user_id: "u1".to_owned(),
        user_name: "Aditya M.".to_owned(),
        page_id: format!("p-{page_name}"),
        page_name: page_name.to_owned(),
        reply_count: 0,
        created_at: created_at.to_owned(),
        updated_at: created_at.to_owned(),
    }
}

// =============================================================================
// HomeFeed
// =============================================================================

#[test]
fn assemble_orders_newest_first() {
    let feed = HomeFeed::assemble(
        vec![page("CSE"), page("ECE")],
        vec![
            question("old", "CSE", "2025-03-01T09:00:00"),
            question("new", "ECE", "2025-03-02T09:00:00"),
            question("mid", "CSE", "2025-03-01T18:00:00"),
        ],
    );
    let ids: Vec<_> = feed.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["new", "mid", "old"]);
}

#[test]
fn assemble_compares_instants_across_offsets() {
    let feed = HomeFeed::assemble(
        vec![page("CSE")],
        vec![question("ist", "CSE", "2025-03-01T10:00:00+05:30"), question("utc", "CSE", "2025-03-01T05:00:00Z")],
    );
    let ids: Vec<_> = feed.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["utc", "ist"]);
}

#[test]
fn assemble_falls_back_to_text_order_for_unparseable_dates() {
    let feed = HomeFeed::assemble(
        vec![page("CSE")],
        vec![question("a", "CSE", "yesterday"), question("b", "CSE", "today")],
    );
    let ids: Vec<_> = feed.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn filtered_all_returns_everything() {
    let feed = HomeFeed::assemble(
        vec![page("CSE"), page("Math")],
        vec![question("a", "CSE", "2025-03-01T09:00:00"), question("b", "Math", "2025-03-01T10:00:00")],
    );
    assert_eq!(feed.filtered(ALL_COMMUNITIES).len(), 2);
}

#[test]
fn filtered_by_community_name() {
    let feed = HomeFeed::assemble(
        vec![page("CSE"), page("Math")],
        vec![question("a", "CSE", "2025-03-01T09:00:00"), question("b", "Math", "2025-03-01T10:00:00")],
    );
    let math = feed.filtered("Math");
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].id, "b");
    assert!(feed.filtered("Physics").is_empty());
}

#[test]
fn subtitle_names_selection() {
    assert_eq!(HomeFeed::subtitle("All"), "Explore questions from all communities");
    assert_eq!(HomeFeed::subtitle("ECE"), "Questions from ECE community");
}

// =============================================================================
// CommunityFeed
// =============================================================================

#[test]
fn stats_line_uses_server_count() {
    let feed = CommunityFeed { page: page("CSE"), questions: Vec::new() };
    assert_eq!(feed.stats_line(), "2 questions • Active community");
}

#[tokio::test]
async fn post_question_signed_out_is_rejected_before_any_request() {
    // Port 9 (discard) is never listened on; a request would surface as Transport.
    let api = ApiClient::new(&ClientConfig::with_base_url("http://127.0.0.1:9/api")).unwrap();
    let session = SessionStore::restore(api, MemoryStorage::new());
    let bus = RefreshBus::new();
    let mut listener = bus.subscribe();
    let mut feed = CommunityFeed { page: page("CSE"), questions: Vec::new() };

    let err = feed
        .post_question(&session, &bus, &QuestionDraft::new("Title", "Body"))
        .await
        .unwrap_err();

    assert!(matches!(err, ForumError::LoginRequired));
    assert!(err.needs_login());
    assert!(!listener.try_changed());
}

// =============================================================================
// QuestionDraft
// =============================================================================

#[test]
fn draft_validate_trims() {
    let draft = QuestionDraft::new("  Fourier  ", "\tcontinuous vs discrete\n");
    assert_eq!(draft.validate().unwrap(), ("Fourier", "continuous vs discrete"));
}

#[test]
fn draft_validate_requires_both_fields() {
    for draft in [QuestionDraft::new("", "body"), QuestionDraft::new("title", "   "), QuestionDraft::default()] {
        let err = draft.validate().unwrap_err();
        assert_eq!(err.message(), "Please fill in all fields");
    }
}
