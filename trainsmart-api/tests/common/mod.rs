use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenIssuer;
use tokio::sync::RwLock;
use trainsmart_api::domain::user::models::User;
use trainsmart_api::domain::user::models::UserId;
use trainsmart_api::domain::user::ports::AuthServicePort;
use trainsmart_api::domain::user::ports::UserRepository;
use trainsmart_api::domain::user::ports::UserServicePort;
use trainsmart_api::domain::user::service::AuthService;
use trainsmart_api::domain::user::service::UserService;
use trainsmart_api::inbound::http::router::create_router;
use trainsmart_api::user::errors::UserError;
use uuid::Uuid;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

/// In-memory repository standing in for Postgres. Enforces the same
/// email uniqueness the database constraint would.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::DuplicateEmail(user.email.as_str().to_string()));
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.id != user.id && u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::DuplicateEmail(user.email.as_str().to_string()));
        }

        match users.get_mut(&user.id.0) {
            Some(existing) => {
                // Profile columns only; the stored hash is untouched
                existing.name = user.name;
                existing.surname = user.surname;
                existing.email = user.email;
                existing.weight = user.weight;
                existing.gender = user.gender;
                Ok(existing.clone())
            }
            None => Err(UserError::NotFound(user.id.to_string())),
        }
    }

    async fn update_password_hash(&self, id: &UserId, password_hash: &str) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        match users.get_mut(&id.0) {
            Some(existing) => {
                existing.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(UserError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        match users.remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());

        let auth_service: Arc<dyn AuthServicePort> =
            Arc::new(AuthService::new(Arc::clone(&repository)));
        let user_service: Arc<dyn UserServicePort> =
            Arc::new(UserService::new(Arc::clone(&repository)));
        let token_issuer = Arc::new(TokenIssuer::new(TEST_JWT_SECRET));

        let router = create_router(auth_service, user_service, token_issuer);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            token_issuer: TokenIssuer::new(TEST_JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
