mod support;

use peerpoint::ApiError;
use support::{MockBackend, MockState, question};

// =============================================================================
// listing
// =============================================================================

#[tokio::test]
async fn questions_by_page_returns_server_array_verbatim() {
    let mut state = MockState::seeded();
    state.questions = vec![
        question("q7", "u1", "Rahul K.", "p2", "ECE", "Fourier transform?", "2025-03-02T08:00:00"),
        question("q8", "u2", "Priya S.", "p2", "ECE", "Op-amp gain", "2025-03-01T08:00:00"),
    ];
    let backend = MockBackend::spawn(state).await;

    let listed = backend.api().questions().by_page("ECE").await.unwrap();

    let ids: Vec<_> = listed.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["q7", "q8"]);
    assert_eq!(listed[0].title, "Fourier transform?");
    assert_eq!(listed[1].user_name, "Priya S.");

    let requests = backend.requests();
    assert_eq!(requests[0].path, "/api/questions/page/name/ECE");
    assert_eq!(requests[0].query.as_deref(), Some("page=0&size=20"));
}

#[tokio::test]
async fn explicit_paging_is_forwarded() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    backend.api().questions().by_page_paged("CSE", 2, 5).await.unwrap();
    assert_eq!(backend.requests()[0].query.as_deref(), Some("page=2&size=5"));
}

#[tokio::test]
async fn page_names_are_percent_encoded() {
    let backend = MockBackend::spawn(MockState::seeded()).await;

    let page = backend.api().pages().by_name("AI/ML").await.unwrap();
    assert_eq!(page.id, "p3");
    backend.api().questions().by_page("Data Structures").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].path, "/api/pages/name/AI%2FML");
    assert_eq!(requests[1].path, "/api/questions/page/name/Data%20Structures");
}

#[tokio::test]
async fn pages_list_and_lookup_by_id() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    let api = backend.api();

    let pages = api.pages().list().await.unwrap();
    let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["CSE", "ECE", "AI/ML"]);
    assert_eq!(pages[0].question_count, 1);

    assert_eq!(api.pages().by_id("p2").await.unwrap().name, "ECE");
}

// =============================================================================
// errors
// =============================================================================

#[tokio::test]
async fn server_message_is_surfaced_on_failure() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    backend.override_response("POST", "/api/questions", 400, r#"{"message":"Title too long"}"#);

    let err = backend.api().questions().create("t", "d", "p1").await.unwrap_err();

    assert_eq!(err.message(), "Title too long");
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn fallback_message_when_body_has_none() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    backend.override_response("GET", "/api/questions/q1", 500, "<html>oops</html>");
    backend.override_response("GET", "/api/pages", 503, r#"{"error":"down"}"#);

    let err = backend.api().questions().get("q1").await.unwrap_err();
    assert_eq!(err.message(), "Question not found");
    assert_eq!(err.status(), Some(500));

    let err = backend.api().pages().list().await.unwrap_err();
    assert_eq!(err.message(), "Failed to fetch pages");

    // 404 with an empty body.
    let err = backend.api().pages().by_name("Nope").await.unwrap_err();
    assert_eq!(err.message(), "Page not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn mismatched_success_body_is_a_decode_error() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    backend.override_response("GET", "/api/pages", 200, r#"{"not":"an array"}"#);

    let err = backend.api().pages().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = peerpoint::ApiClient::new(&peerpoint::ClientConfig::with_base_url("http://127.0.0.1:9/api")).unwrap();
    let err = api.pages().list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}

// =============================================================================
// authorization header
// =============================================================================

#[tokio::test]
async fn bearer_header_only_when_token_present() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    let api = backend.api();

    // Anonymous create goes out without a header and the server rejects it.
    let err = api.questions().create("t", "d", "p1").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), "Unauthorized");

    api.token_slot().set(Some("token-u1".to_owned()));
    api.questions().create("t", "d", "p1").await.unwrap();
    // Reads never carry it.
    api.questions().get("q1").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer token-u1"));
    assert_eq!(requests[2].authorization, None);
}

#[tokio::test]
async fn reply_crud_round_trip() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    let api = backend.api();
    api.token_slot().set(Some("token-u2".to_owned()));

    let created = api.replies().create("q1", "Use in-order successor").await.unwrap();
    assert_eq!(created.question_id, "q1");
    assert_eq!(created.user_id, "u2");

    let updated = api.replies().update(&created.id, "Use in-order predecessor").await.unwrap();
    assert_eq!(updated.content, "Use in-order predecessor");

    api.replies().delete(&created.id).await.unwrap();
    let remaining = api.replies().by_question("q1").await.unwrap();
    assert!(remaining.iter().all(|r| r.id != created.id));

    let requests = backend.requests();
    assert_eq!(requests[0].path, "/api/replies/question/q1");
    assert!(requests[0].body.contains(r#""content":"Use in-order successor""#));
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[2].method, "DELETE");
}

#[tokio::test]
async fn question_update_sends_page_id_in_camel_case() {
    let backend = MockBackend::spawn(MockState::seeded()).await;
    let api = backend.api();
    api.token_slot().set(Some("token-u1".to_owned()));

    let updated = api.questions().update("q1", "BST delete", "all three cases", "p1").await.unwrap();
    assert_eq!(updated.title, "BST delete");

    let body: serde_json::Value = serde_json::from_str(&backend.requests()[0].body).unwrap();
    assert_eq!(body["pageId"], "p1");
    assert_eq!(body["title"], "BST delete");
}
