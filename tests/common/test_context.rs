use jira_board::web::{AppState, router};
use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const BOARD_ID: &str = "10";

/// A running board server pointed at a mock Jira.
pub struct TestContext {
    pub jira: MockServer,
    pub url: String,
    pub client: reqwest::Client,
}

impl TestContext {
    pub async fn start() -> Self {
        let jira = MockServer::start().await;
        let state = AppState::new(reqwest::Client::new(), "http");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, router(state))
                .await
                .expect("Test server failed");
        });

        Self {
            jira,
            url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// `host:boardId` reference to the mock Jira's board.
    pub fn reference(&self) -> String {
        format!("{}:{BOARD_ID}", self.jira.address())
    }

    pub fn board_path(&self, suffix: &str) -> String {
        format!("/rest/agile/latest/board/{BOARD_ID}{suffix}")
    }

    pub async fn get_board(&self, api_key: Option<&str>) -> reqwest::Response {
        let mut request = self
            .client
            .get(format!("{}/jira/{}", self.url, self.reference()));
        if let Some(api_key) = api_key {
            request = request.query(&[("apiKey", api_key)]);
        }
        request.send().await.expect("Failed to send http request")
    }

    pub async fn mock_board(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(self.board_path("/")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.jira)
            .await;
    }

    pub async fn mock_configuration(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(self.board_path("/configuration")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.jira)
            .await;
    }

    pub async fn mock_issues(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(self.board_path("/issue")))
            .and(query_param("fields", "summary,status,priority"))
            .and(query_param("maxResults", "500"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.jira)
            .await;
    }
}
