use listings::configuration::{
    AuthSettings, CorsSettings, DatabaseSettings, ListingSettings, RouteAccess, Settings,
};
use listings::db::{InMemoryStore, ListingStore};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Issues a token for `email` and returns the `token=...` cookie pair.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .client
            .post(self.url("/jwt"))
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert!(response.status().is_success());

        session_cookie(&response).expect("No token cookie in response")
    }

    pub async fn create_listing(&self, cookie: &str, body: serde_json::Value) -> String {
        let response = self
            .client
            .post(self.url("/listings"))
            .header("Cookie", cookie)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(200, response.status().as_u16());

        let body: serde_json::Value = response.json().await.unwrap();
        body["id"].as_str().unwrap().to_string()
    }
}

/// The `name=value` part of the first `Set-Cookie` header.
pub fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(|pair| pair.trim().to_string())
}

pub fn test_settings() -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        production: false,
        database: DatabaseSettings {
            username: String::new(),
            password: String::new(),
            host: "localhost".to_string(),
            srv: false,
            database_name: "productQueriesDB".to_string(),
            listings_collection: "productQuery".to_string(),
            subcategories_collection: "artCraftSubcategory".to_string(),
            app_name: "tests".to_string(),
        },
        auth: AuthSettings {
            secret: "integration-test-secret".to_string(),
            token_ttl_days: 365,
            cookie_name: "token".to_string(),
        },
        cors: CorsSettings::default(),
        listings: ListingSettings::default(),
        access: RouteAccess::default(),
    }
}

pub async fn spawn_app_with_settings(settings: Settings) -> TestApp {
    spawn_app_with_store(settings, Arc::new(InMemoryStore::new())).await
}

pub async fn spawn_app_with_store(settings: Settings, store: Arc<InMemoryStore>) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let shared: Arc<dyn ListingStore> = store.clone();
    let server = listings::startup::run(listener, shared, settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        store,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_settings(test_settings()).await
}
