use egui_kittest::Harness;
use insider_ui::InsiderApp;
use insider_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    pub mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub async fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let (mock_server, state) = setup_test_state().await;
        let harness = Harness::new_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, InsiderApp> {
    #[allow(unused)]
    pub async fn new_app() -> Self {
        let (mock_server, state) = setup_test_state().await;
        let app = InsiderApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

async fn setup_test_state() -> (MockServer, State) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    let state = State::test(mock_server.uri());
    (mock_server, state)
}

/// One application record as the list endpoint returns it.
#[allow(unused)]
pub fn application_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "application_id": id,
        "client_name": name,
        "client_email": format!("{}@example.com", name.to_lowercase()),
        "phone_number": "+61 400 000 001",
        "application_status": status,
        "preferred_locations": ["Sydney", "Melbourne"],
        "preferred_colleges": ["UNSW"],
        "planned_courses": ["IT"],
        "completed_course": "Diploma of IT",
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-02T10:00:00Z",
        "agent_id": "agent-123456789",
        "counselor_id": null,
        "counselor_name": null
    })
}

/// Mounts the applications list endpoint with the given records.
#[allow(unused)]
pub async fn mount_applications(mock_server: &MockServer, applications: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "applications": applications,
        })))
        .mount(mock_server)
        .await;
}

/// One user record as the users endpoints return it.
#[allow(unused)]
pub fn user_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": id,
        "full_name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "role": "agent",
        "status": status,
        "created_at": "2026-07-15T09:30:00Z"
    })
}

/// Mounts the users list endpoint with a single page of users.
#[allow(unused)]
pub async fn mount_users_page(mock_server: &MockServer, users: Vec<serde_json::Value>) {
    let total = users.len();
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": users,
            "page": 1,
            "per_page": 10,
            "total": total,
            "total_pages": 1,
        })))
        .mount(mock_server)
        .await;
}
