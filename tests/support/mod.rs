//! In-process mock of the forum backend for integration tests.
//!
//! One fallback handler dispatches on method + path segments so the routing
//! table reads like the REST contract. Every request is recorded; overrides
//! force a status/body for a given method + path.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use peerpoint::config::ClientConfig;
use peerpoint::{ApiClient, MemoryStorage, SessionStore};

pub const PASSWORD: &str = "correct horse";

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct Override {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub requests: Vec<Recorded>,
    pub overrides: Vec<Override>,
    pub pages: Vec<Value>,
    pub questions: Vec<Value>,
    pub replies: Vec<Value>,
    pub users: Vec<Value>,
    next_id: u32,
}

impl MockState {
    /// Three communities, one question with two replies, two users.
    pub fn seeded() -> Self {
        let mut state = Self::default();
        for (id, name) in [("p1", "CSE"), ("p2", "ECE"), ("p3", "AI/ML")] {
            state.pages.push(json!({
                "id": id,
                "name": name,
                "description": format!("{name} doubts"),
                "questionCount": 0,
                "createdAt": "2025-01-01T00:00:00"
            }));
        }
        state.users.push(user("u1", "Rahul K.", "rahul@example.edu"));
        state.users.push(user("u2", "Priya S.", "priya@example.edu"));
        state.questions.push(question("q1", "u1", "Rahul K.", "p1", "CSE", "BST deletion cases?", "2025-03-01T10:00:00"));
        state.replies.push(reply("r1", "q1", "u2", "Priya S.", "Leaf, one child, two children."));
        state.replies.push(reply("r2", "q1", "u1", "Rahul K.", "Thanks!"));
        state.recount();
        state
    }

    fn next(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id + 100)
    }

    fn recount(&mut self) {
        for q in &mut self.questions {
            let qid = q["id"].clone();
            let count = self.replies.iter().filter(|r| r["questionId"] == qid).count();
            q["replyCount"] = json!(count);
        }
        for p in &mut self.pages {
            let pid = p["id"].clone();
            let count = self.questions.iter().filter(|q| q["pageId"] == pid).count();
            p["questionCount"] = json!(count);
        }
    }
}

pub fn user(id: &str, name: &str, email: &str) -> Value {
    json!({ "id": id, "name": name, "email": email, "role": "STUDENT" })
}

pub fn question(id: &str, user_id: &str, user_name: &str, page_id: &str, page_name: &str, title: &str, at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} (details)"),
        "userId": user_id,
        "userName": user_name,
        "pageId": page_id,
        "pageName": page_name,
        "replyCount": 0,
        "createdAt": at,
        "updatedAt": at
    })
}

pub fn reply(id: &str, question_id: &str, user_id: &str, user_name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "questionId": question_id,
        "userId": user_id,
        "userName": user_name,
        "createdAt": "2025-03-01T11:00:00",
        "updatedAt": "2025-03-01T11:00:00"
    })
}

pub fn token_for(user_id: &str) -> String {
    format!("token-{user_id}")
}

// =============================================================================
// SERVER
// =============================================================================

type Shared = Arc<Mutex<MockState>>;

pub struct MockBackend {
    pub base_url: String,
    pub state: Shared,
}

impl MockBackend {
    pub async fn spawn(state: MockState) -> Self {
        let shared: Shared = Arc::new(Mutex::new(state));
        let app = Router::new().fallback(handle).with_state(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { base_url: format!("http://{addr}/api"), state: shared }
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(&self.base_url)).unwrap()
    }

    pub fn session(&self, storage: MemoryStorage) -> SessionStore<MemoryStorage> {
        SessionStore::restore(self.api(), storage)
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn override_response(&self, method: &'static str, path: &str, status: u16, body: &str) {
        self.lock().overrides.push(Override { method, path: path.to_owned(), status, body: body.to_owned() });
    }
}

async fn handle(State(state): State<Shared>, method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    state.requests.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    if let Some(o) = state
        .overrides
        .iter()
        .find(|o| o.method == method.as_str() && o.path == uri.path())
        .cloned()
    {
        let status = StatusCode::from_u16(o.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, [("content-type", "application/json")], o.body).into_response();
    }

    let Some(rest) = uri.path().strip_prefix("/api/") else {
        return not_found();
    };
    let segments: Vec<String> = rest
        .split('/')
        .map(|s| urlencoding::decode(s).map(|c| c.into_owned()).unwrap_or_default())
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let caller = authorization
        .as_deref()
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|t| t.strip_prefix("token-"))
        .map(str::to_owned);

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["auth", "login"]) => login(&state, &body),
        ("POST", ["auth", "register"]) => register(&mut state, &body),
        ("GET", ["pages"]) => ok(Value::Array(state.pages.clone())),
        ("GET", ["pages", "name", name]) => find(&state.pages, "name", name),
        ("GET", ["pages", id]) => find(&state.pages, "id", id),
        ("GET", ["questions", "page", "name", name]) => ok(Value::Array(
            state.questions.iter().filter(|q| q["pageName"] == *name).cloned().collect(),
        )),
        ("GET", ["questions", id]) => find(&state.questions, "id", id),
        ("POST", ["questions"]) => with_caller(caller, |uid| create_question(&mut state, &uid, &body)),
        ("PUT", ["questions", id]) => with_caller(caller, |_| update_question(&mut state, id, &body)),
        ("DELETE", ["questions", id]) => with_caller(caller, |_| {
            state.questions.retain(|q| q["id"] != *id);
            state.replies.retain(|r| r["questionId"] != *id);
            state.recount();
            StatusCode::NO_CONTENT.into_response()
        }),
        ("GET", ["replies", "question", qid]) => ok(Value::Array(
            state.replies.iter().filter(|r| r["questionId"] == *qid).cloned().collect(),
        )),
        ("POST", ["replies", "question", qid]) => with_caller(caller, |uid| create_reply(&mut state, &uid, qid, &body)),
        ("PUT", ["replies", id]) => with_caller(caller, |_| {
            let Some(r) = state.replies.iter_mut().find(|r| r["id"] == *id) else {
                return not_found();
            };
            r["content"] = body["content"].clone();
            ok(r.clone())
        }),
        ("DELETE", ["replies", id]) => with_caller(caller, |_| {
            state.replies.retain(|r| r["id"] != *id);
            state.recount();
            StatusCode::OK.into_response()
        }),
        _ => not_found(),
    }
}

fn ok(value: Value) -> Response {
    (StatusCode::OK, axum::Json(value)).into_response()
}

fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

fn with_caller(caller: Option<String>, f: impl FnOnce(String) -> Response) -> Response {
    match caller {
        Some(uid) => f(uid),
        None => (StatusCode::UNAUTHORIZED, axum::Json(json!({ "message": "Unauthorized" }))).into_response(),
    }
}

fn find(items: &[Value], field: &str, value: &str) -> Response {
    items
        .iter()
        .find(|item| item[field] == value)
        .map_or_else(not_found, |item| ok(item.clone()))
}

fn auth_response(user: &Value) -> Response {
    let id = user["id"].as_str().unwrap_or_default();
    ok(json!({
        "token": token_for(id),
        "type": "Bearer",
        "id": id,
        "name": user["name"],
        "email": user["email"],
        "role": user["role"]
    }))
}

fn login(state: &MockState, body: &Value) -> Response {
    let user = state.users.iter().find(|u| u["email"] == body["email"]);
    match user {
        Some(user) if body["password"] == PASSWORD => auth_response(user),
        _ => (StatusCode::UNAUTHORIZED, axum::Json(json!({ "message": "Invalid email or password" }))).into_response(),
    }
}

fn register(state: &mut MockState, body: &Value) -> Response {
    if state.users.iter().any(|u| u["email"] == body["email"]) {
        return (StatusCode::BAD_REQUEST, axum::Json(json!({ "message": "Email already registered" }))).into_response();
    }
    let id = state.next("u");
    let new_user = user(&id, body["name"].as_str().unwrap_or_default(), body["email"].as_str().unwrap_or_default());
    state.users.push(new_user.clone());
    auth_response(&new_user)
}

fn user_name(state: &MockState, uid: &str) -> String {
    state
        .users
        .iter()
        .find(|u| u["id"] == uid)
        .and_then(|u| u["name"].as_str())
        .unwrap_or("unknown")
        .to_owned()
}

fn create_question(state: &mut MockState, uid: &str, body: &Value) -> Response {
    let Some(page) = state.pages.iter().find(|p| p["id"] == body["pageId"]).cloned() else {
        return (StatusCode::BAD_REQUEST, axum::Json(json!({ "message": "Unknown page" }))).into_response();
    };
    let id = state.next("q");
    let name = user_name(state, uid);
    let created = question(
        &id,
        uid,
        &name,
        page["id"].as_str().unwrap_or_default(),
        page["name"].as_str().unwrap_or_default(),
        body["title"].as_str().unwrap_or_default(),
        "2025-03-05T12:00:00",
    );
    let mut created = created;
    created["description"] = body["description"].clone();
    state.questions.push(created.clone());
    state.recount();
    ok(created)
}

fn update_question(state: &mut MockState, id: &str, body: &Value) -> Response {
    let Some(q) = state.questions.iter_mut().find(|q| q["id"] == id) else {
        return not_found();
    };
    q["title"] = body["title"].clone();
    q["description"] = body["description"].clone();
    q["pageId"] = body["pageId"].clone();
    ok(q.clone())
}

fn create_reply(state: &mut MockState, uid: &str, qid: &str, body: &Value) -> Response {
    if !state.questions.iter().any(|q| q["id"] == qid) {
        return not_found();
    }
    let id = state.next("r");
    let name = user_name(state, uid);
    let created = reply(&id, qid, uid, &name, body["content"].as_str().unwrap_or_default());
    state.replies.push(created.clone());
    state.recount();
    ok(created)
}
