//! # HTTP surface
//!
//! | Method | Path | Gated | Handler |
//! |--------|------|-------|---------|
//! | GET | `/` | no | [`auth::root`]: redirect to `/login` |
//! | GET / POST | `/login` | no | [`auth::login_form`] / [`auth::login`] |
//! | GET / POST | `/register` | no | [`auth::register_form`] / [`auth::register`] |
//! | GET | `/logout` | no | [`auth::logout`] |
//! | GET | `/dashboard` | yes | [`notes::dashboard`] |
//! | GET / POST | `/add-note` | yes | [`notes::add_note_form`] / [`notes::add_note`] |
//! | GET / POST | `/update/{id}` | yes | [`notes::update_form`] / [`notes::update_note`] |
//! | POST | `/delete/{id}` | yes | [`notes::delete_note`] |
//!
//! [`router`] builds the routes; [`app`] adds the session layer over a
//! [`ClockedStore`] so the whole stack can be driven in tests with in-memory
//! backends.

pub mod auth;
pub mod notes;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_sessions::{cookie::SameSite, SessionManagerLayer, SessionStore};

use crate::auth::{require_login, ClockedStore};
use crate::state::AppState;

/// Session cookie attributes.
#[derive(Clone, Debug)]
pub struct SessionCookie {
    pub name: String,
    /// Only send the cookie over HTTPS.
    pub secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self {
            name: "id".to_string(),
            secure: false,
        }
    }
}

/// All routes, with the login gate applied to the protected ones.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(notes::dashboard))
        .route("/add-note", get(notes::add_note_form).post(notes::add_note))
        .route(
            "/update/{id}",
            get(notes::update_form).post(notes::update_note),
        )
        .route("/delete/{id}", post(notes::delete_note))
        .route_layer(middleware::from_fn(require_login));

    Router::new()
        .route("/", get(auth::root))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/logout", get(auth::logout))
        .merge(protected)
        .with_state(state)
}

/// [`router`] wrapped in a session layer backed by `store`.
pub fn app<S>(state: AppState, store: S, cookie: &SessionCookie) -> Router
where
    S: SessionStore + Clone,
{
    let store = ClockedStore::new(store, state.clock.clone());

    let session_layer = SessionManagerLayer::new(store)
        .with_name(cookie.name.clone())
        .with_secure(cookie.secure)
        .with_http_only(true)
        .with_same_site(SameSite::Lax);

    router(state).layer(session_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{test_hasher, ManualClock};
    use axum::{
        body::Body,
        http::{
            header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
            Request, StatusCode,
        },
        response::Response,
    };
    use std::sync::Arc;
    use store::{MemoryStore, NoteStore, UserStore};
    use time::Duration;
    use tower::ServiceExt;

    struct TestApp {
        app: Router,
        clock: Arc<ManualClock>,
        store: MemoryStore,
        sessions: tower_sessions::MemoryStore,
    }

    impl TestApp {
        fn new() -> Self {
            Self::with_ownership_checks(true)
        }

        fn with_ownership_checks(enforce: bool) -> Self {
            Self::build(
                enforce,
                tower_sessions::MemoryStore::default(),
                Arc::new(ManualClock::new()),
            )
        }

        /// Fresh user and note stores over `other`'s session backend and clock.
        fn sharing_sessions_with(other: &TestApp) -> Self {
            Self::build(true, other.sessions.clone(), other.clock.clone())
        }

        fn build(
            enforce: bool,
            sessions: tower_sessions::MemoryStore,
            clock: Arc<ManualClock>,
        ) -> Self {
            let store = MemoryStore::new();
            let state = AppState::new(
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                test_hasher(),
            )
            .with_clock(clock.clone())
            .with_ownership_checks(enforce);

            let app = app(state, sessions.clone(), &SessionCookie::default());

            Self {
                app,
                clock,
                store,
                sessions,
            }
        }

        async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
            let mut request = Request::builder().method("GET").uri(uri);
            if let Some(cookie) = cookie {
                request = request.header(COOKIE, cookie);
            }
            self.app
                .clone()
                .oneshot(request.body(Body::empty()).unwrap())
                .await
                .unwrap()
        }

        async fn post(&self, uri: &str, cookie: Option<&str>, form: &str) -> Response {
            let mut request = Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
            if let Some(cookie) = cookie {
                request = request.header(COOKIE, cookie);
            }
            self.app
                .clone()
                .oneshot(request.body(Body::from(form.to_string())).unwrap())
                .await
                .unwrap()
        }

        async fn register(&self, username: &str, email: &str, password: &str) -> Response {
            let form = format!(
                "username={}&email={}&password={}",
                username,
                email.replace('@', "%40"),
                password
            );
            self.post("/register", None, &form).await
        }

        async fn login(&self, email: &str, password: &str) -> Response {
            let form = format!("email={}&password={}", email.replace('@', "%40"), password);
            self.post("/login", None, &form).await
        }

        /// Register and log in, returning the `Cookie` header value.
        async fn signed_in(&self, username: &str, email: &str) -> String {
            self.register(username, email, "pw123").await;
            let response = self.login(email, "pw123").await;
            assert_redirect(&response, "/dashboard");
            session_cookie(&response)
        }

        async fn notes_of(&self, email: &str) -> Vec<store::Note> {
            let user = self.store.find_by_email(email).await.unwrap().unwrap();
            self.store.find_by_owner(user.id).await.unwrap()
        }
    }

    fn assert_redirect(response: &Response, to: &str) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), to);
    }

    fn session_cookie(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .expect("no session cookie set")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_public_pages() {
        let t = TestApp::new();

        assert_redirect(&t.get("/", None).await, "/login");

        let login = t.get("/login", None).await;
        assert_eq!(login.status(), StatusCode::OK);
        assert!(body_text(login).await.contains("action=\"/login\""));

        let register = t.get("/register", None).await;
        assert_eq!(register.status(), StatusCode::OK);
        assert!(body_text(register).await.contains("action=\"/register\""));
    }

    #[tokio::test]
    async fn test_gated_routes_redirect_without_session() {
        let t = TestApp::new();
        let id = uuid::Uuid::new_v4();

        assert_redirect(&t.get("/dashboard", None).await, "/login");
        assert_redirect(&t.get("/add-note", None).await, "/login");
        assert_redirect(&t.post("/add-note", None, "title=t&content=c").await, "/login");
        assert_redirect(&t.get(&format!("/update/{id}"), None).await, "/login");
        assert_redirect(
            &t.post(&format!("/update/{id}"), None, "title=t&content=c").await,
            "/login",
        );
        assert_redirect(&t.post(&format!("/delete/{id}"), None, "").await, "/login");
    }

    #[tokio::test]
    async fn test_gate_rejects_unknown_cookie() {
        let t = TestApp::new();
        assert_redirect(&t.get("/dashboard", Some("id=forged")).await, "/login");
    }

    #[tokio::test]
    async fn test_register_then_duplicate_any_case() {
        let t = TestApp::new();

        assert_redirect(&t.register("alice", "alice@x.com", "pw123").await, "/login");

        let second = t.register("alice2", "ALICE@x.com", "pw456").await;
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(
            body_text(second).await,
            "Registration failed. Email may already exist."
        );
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let t = TestApp::new();

        let response = t.post("/register", None, "username=alice&email=a%40x.com").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.starts_with("Registration failed."));
        assert!(t.store.find_by_email("a@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_failures_are_distinct() {
        let t = TestApp::new();
        t.register("alice", "alice@x.com", "pw123").await;

        let missing = t.post("/login", None, "email=alice%40x.com").await;
        assert_eq!(missing.status(), StatusCode::OK);
        assert_eq!(
            body_text(missing).await,
            "❌ Please enter both email and password"
        );

        let unknown = t.login("bob@x.com", "pw123").await;
        assert_eq!(unknown.status(), StatusCode::OK);
        assert!(unknown.headers().get(SET_COOKIE).is_none());
        assert_eq!(body_text(unknown).await, "❌ No user found");

        let wrong = t.login("alice@x.com", "nope").await;
        assert_eq!(wrong.status(), StatusCode::OK);
        assert!(wrong.headers().get(SET_COOKIE).is_none());
        assert_eq!(body_text(wrong).await, "❌ Invalid password");
    }

    #[tokio::test]
    async fn test_login_sets_http_only_cookie() {
        let t = TestApp::new();
        t.register("alice", "alice@x.com", "pw123").await;

        let response = t.login("alice@x.com", "pw123").await;
        assert_redirect(&response, "/dashboard");

        let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("id="));
        assert!(set_cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_each_login_gets_a_fresh_token() {
        let t = TestApp::new();
        t.register("alice", "alice@x.com", "pw123").await;

        let first = session_cookie(&t.login("alice@x.com", "pw123").await);
        let second = session_cookie(&t.login("alice@x.com", "pw123").await);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_dashboard_shows_only_own_notes() {
        let t = TestApp::new();
        let alice = t.signed_in("alice", "alice@x.com").await;
        let bob = t.signed_in("bob", "bob@x.com").await;

        t.post("/add-note", Some(&alice), "title=alice-note&content=a").await;
        t.post("/add-note", Some(&bob), "title=bob-note&content=b").await;

        let response = t.get("/dashboard", Some(&alice)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Welcome, alice"));
        assert!(html.contains("alice@x.com"));
        assert!(html.contains("alice-note"));
        assert!(!html.contains("bob-note"));
    }

    #[tokio::test]
    async fn test_dashboard_drops_session_of_missing_user() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;

        // Same sessions, but no record of alice
        let other = TestApp::sharing_sessions_with(&t);
        assert_redirect(&other.get("/dashboard", Some(&cookie)).await, "/login");

        // The session was destroyed, not just bypassed
        assert_redirect(&t.get("/dashboard", Some(&cookie)).await, "/login");
    }

    #[tokio::test]
    async fn test_add_note_requires_fields() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;

        let response = t.post("/add-note", Some(&cookie), "title=only-title").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "❌ Please enter both title and content"
        );
        assert!(t.notes_of("alice@x.com").await.is_empty());

        let blank = t.post("/add-note", Some(&cookie), "title=%20&content=%20").await;
        assert_redirect(&blank, "/dashboard");
        assert_eq!(t.notes_of("alice@x.com").await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_then_dashboard_shows_new_content() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;

        t.post("/add-note", Some(&cookie), "title=t1&content=c1").await;
        let note = t.notes_of("alice@x.com").await.remove(0);

        let form = t.get(&format!("/update/{}", note.id), Some(&cookie)).await;
        assert_eq!(form.status(), StatusCode::OK);
        assert!(body_text(form).await.contains("c1"));

        let response = t
            .post(
                &format!("/update/{}", note.id),
                Some(&cookie),
                "title=t2&content=c2",
            )
            .await;
        assert_redirect(&response, "/dashboard");

        let html = body_text(t.get("/dashboard", Some(&cookie)).await).await;
        assert!(html.contains("t2"));
        assert!(html.contains("c2"));
        assert!(!html.contains("t1"));
    }

    #[tokio::test]
    async fn test_update_unknown_note() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;
        let id = uuid::Uuid::new_v4();

        let form = t.get(&format!("/update/{id}"), Some(&cookie)).await;
        assert_eq!(body_text(form).await, "❌ Note not found");

        let malformed = t.get("/update/not-a-uuid", Some(&cookie)).await;
        assert_eq!(body_text(malformed).await, "❌ Note not found");

        let post = t
            .post(&format!("/update/{id}"), Some(&cookie), "title=t&content=c")
            .await;
        assert_eq!(body_text(post).await, "❌ Note not found");
    }

    #[tokio::test]
    async fn test_delete_unknown_note_is_silent() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;

        let response = t
            .post(&format!("/delete/{}", uuid::Uuid::new_v4()), Some(&cookie), "")
            .await;
        assert_redirect(&response, "/dashboard");

        let malformed = t.post("/delete/not-a-uuid", Some(&cookie), "").await;
        assert_redirect(&malformed, "/dashboard");
    }

    #[tokio::test]
    async fn test_logout_invalidates_cookie() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;

        assert_eq!(
            t.get("/dashboard", Some(&cookie)).await.status(),
            StatusCode::OK
        );

        assert_redirect(&t.get("/logout", Some(&cookie)).await, "/login");

        assert_redirect(&t.get("/dashboard", Some(&cookie)).await, "/login");
        assert_redirect(
            &t.post("/add-note", Some(&cookie), "title=t&content=c").await,
            "/login",
        );

        // Logging out again is harmless
        assert_redirect(&t.get("/logout", Some(&cookie)).await, "/login");
        assert_redirect(&t.get("/logout", None).await, "/login");
    }

    #[tokio::test]
    async fn test_session_expires_after_one_hour() {
        let t = TestApp::new();
        let cookie = t.signed_in("alice", "alice@x.com").await;

        t.clock.advance(Duration::minutes(59));
        assert_eq!(
            t.get("/dashboard", Some(&cookie)).await.status(),
            StatusCode::OK
        );

        t.clock.advance(Duration::minutes(1));
        assert_redirect(&t.get("/dashboard", Some(&cookie)).await, "/login");

        // Expired is terminal
        t.clock.advance(Duration::hours(5));
        assert_redirect(&t.get("/dashboard", Some(&cookie)).await, "/login");
    }

    #[tokio::test]
    async fn test_other_users_notes_are_hidden() {
        let t = TestApp::new();
        let alice = t.signed_in("alice", "alice@x.com").await;
        let mallory = t.signed_in("mallory", "mallory@x.com").await;

        t.post("/add-note", Some(&alice), "title=secret&content=s").await;
        let note = t.notes_of("alice@x.com").await.remove(0);

        let form = t.get(&format!("/update/{}", note.id), Some(&mallory)).await;
        assert_eq!(body_text(form).await, "❌ Note not found");

        let update = t
            .post(
                &format!("/update/{}", note.id),
                Some(&mallory),
                "title=pwned&content=p",
            )
            .await;
        assert_eq!(body_text(update).await, "❌ Note not found");

        let delete = t
            .post(&format!("/delete/{}", note.id), Some(&mallory), "")
            .await;
        assert_redirect(&delete, "/dashboard");

        let notes = t.notes_of("alice@x.com").await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "secret");
    }

    #[tokio::test]
    async fn test_ownership_checks_can_be_disabled() {
        let t = TestApp::with_ownership_checks(false);
        let alice = t.signed_in("alice", "alice@x.com").await;
        let bob = t.signed_in("bob", "bob@x.com").await;

        t.post("/add-note", Some(&alice), "title=shared&content=s").await;
        let note = t.notes_of("alice@x.com").await.remove(0);

        let update = t
            .post(
                &format!("/update/{}", note.id),
                Some(&bob),
                "title=edited&content=e",
            )
            .await;
        assert_redirect(&update, "/dashboard");
        assert_eq!(t.notes_of("alice@x.com").await[0].title, "edited");

        t.post(&format!("/delete/{}", note.id), Some(&bob), "").await;
        assert!(t.notes_of("alice@x.com").await.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end() {
        let t = TestApp::new();

        assert_redirect(&t.register("alice", "alice@x.com", "pw123").await, "/login");

        let login = t.login("Alice@X.com", "pw123").await;
        assert_redirect(&login, "/dashboard");
        let cookie = session_cookie(&login);

        assert_redirect(
            &t.post("/add-note", Some(&cookie), "title=t1&content=c1").await,
            "/dashboard",
        );

        let html = body_text(t.get("/dashboard", Some(&cookie)).await).await;
        assert!(html.contains("t1"));
        let notes = t.notes_of("alice@x.com").await;
        assert_eq!(notes.len(), 1);

        assert_redirect(
            &t.post(&format!("/delete/{}", notes[0].id), Some(&cookie), "").await,
            "/dashboard",
        );

        let html = body_text(t.get("/dashboard", Some(&cookie)).await).await;
        assert!(!html.contains("t1"));
        assert!(html.contains("No notes yet."));
        assert!(t.notes_of("alice@x.com").await.is_empty());
    }
}
