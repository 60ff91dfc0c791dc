use egui_kittest::Harness;
use gymdesk_ui::GymdeskApp;
use gymdesk_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, GymdeskApp>,
}

impl<'a> TestCtx<'a> {
    /// Full app harness against a mock API serving one session user and the
    /// given account payloads.
    pub async fn new_app(accounts: serde_json::Value) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 99,
                "username": "admin"
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/accounts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "accounts": accounts })),
            )
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = GymdeskApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, GymdeskApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, GymdeskApp> {
        &self.harness
    }

    /// Steps the UI until `predicate` holds or the timeout elapses.
    ///
    /// Remote responses land on background threads, so the harness has to
    /// keep pumping frames while they arrive.
    pub async fn step_until(
        &mut self,
        mut predicate: impl FnMut(&Harness<'a, GymdeskApp>) -> bool,
    ) -> bool {
        for _ in 0..100 {
            self.harness.step();
            if predicate(&self.harness) {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        false
    }
}
