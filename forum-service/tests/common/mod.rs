#![allow(dead_code)]

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::FixedClock;
use auth::PasswordHasher;
use auth::SigningSecret;
use auth::TokenService;
use auth::TokenSubject;
use chrono::FixedOffset;
use chrono::Utc;
use forum_service::domain::auth::service::AuthService;
use forum_service::domain::topic::errors::TopicError;
use forum_service::domain::topic::models::NewTopic;
use forum_service::domain::topic::models::Page;
use forum_service::domain::topic::models::PageRequest;
use forum_service::domain::topic::models::Topic;
use forum_service::domain::topic::models::TopicId;
use forum_service::domain::topic::ports::TopicRepository;
use forum_service::domain::topic::service::TopicService;
use forum_service::domain::user::errors::UserError;
use forum_service::domain::user::models::Login;
use forum_service::domain::user::models::User;
use forum_service::domain::user::models::UserId;
use forum_service::domain::user::ports::UserRepository;
use forum_service::domain::user::service::CredentialService;
use forum_service::inbound::http::router::create_router;

pub const SECRET: &str = "test-signing-secret";

/// Seeded identity: login "ana", secret "s3cr3t", id 7.
pub const LOGIN: &str = "ana";
pub const PASSWORD: &str = "s3cr3t";
pub const USER_ID: i64 = 7;

/// Users keyed by login
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users
            .lock()
            .unwrap()
            .insert(user.login.as_str().to_string(), user);
    }

    pub fn clear(&self) {
        self.users.lock().unwrap().clear();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(login.as_str()).cloned())
    }
}

#[derive(Default)]
struct TopicTable {
    next_id: i64,
    rows: BTreeMap<i64, Topic>,
}

#[derive(Default)]
pub struct InMemoryTopicRepository {
    table: Mutex<TopicTable>,
}

impl InMemoryTopicRepository {
    /// Flag a topic as answered so it drops out of listings.
    pub fn mark_answered(&self, id: i64) {
        if let Some(topic) = self.table.lock().unwrap().rows.get_mut(&id) {
            topic.unanswered = false;
        }
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicRepository {
    async fn create(&self, topic: NewTopic) -> Result<Topic, TopicError> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;

        let topic = Topic {
            id: TopicId(table.next_id),
            title: topic.title,
            message: topic.message,
            author: topic.author,
            course: topic.course,
            unanswered: true,
            created_at: topic.created_at,
        };
        table.rows.insert(topic.id.0, topic.clone());

        Ok(topic)
    }

    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicError> {
        Ok(self.table.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_unanswered(&self, request: PageRequest) -> Result<Page<Topic>, TopicError> {
        let table = self.table.lock().unwrap();

        let mut unanswered: Vec<Topic> = table
            .rows
            .values()
            .filter(|topic| topic.unanswered)
            .cloned()
            .collect();
        unanswered.sort_by_key(|topic| (topic.created_at, topic.id));

        let total = unanswered.len() as u64;
        let content = unanswered
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size() as usize)
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn update(&self, topic: Topic) -> Result<Topic, TopicError> {
        let mut table = self.table.lock().unwrap();

        match table.rows.get_mut(&topic.id.0) {
            Some(row) => {
                *row = topic.clone();
                Ok(topic)
            }
            None => Err(TopicError::NotFound(topic.id)),
        }
    }

    async fn delete(&self, id: TopicId) -> Result<(), TopicError> {
        self.table
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(TopicError::NotFound(id))
    }
}

/// Token service frozen at `instant`, seen from the −05:00 offset.
pub fn token_service_at(secret: &str, instant: chrono::DateTime<Utc>) -> TokenService {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();

    TokenService::new(&SigningSecret::new(secret).unwrap())
        .unwrap()
        .with_clock(FixedClock::new(instant.with_timezone(&offset)))
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    pub topics: Arc<InMemoryTopicRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let hash = PasswordHasher::new()
            .hash(PASSWORD)
            .expect("Failed to hash seeded secret");
        users.insert(User::new(
            UserId(USER_ID),
            Login::new(LOGIN).unwrap(),
            hash,
        ));

        let topics = Arc::new(InMemoryTopicRepository::default());

        // Frozen at start-up so expiry does not depend on the host timezone
        let token_service = Arc::new(token_service_at(SECRET, Utc::now()));

        let credential_service = Arc::new(
            CredentialService::new(Arc::clone(&users)).expect("Failed to build credential service"),
        );
        let auth_service = Arc::new(AuthService::new(credential_service, token_service));
        let topic_service = Arc::new(TopicService::new(Arc::clone(&topics)));

        let application = create_router(auth_service, topic_service);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            users,
            topics,
        }
    }

    /// Log in and return the response
    pub async fn login(&self, login: &str, secret: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/login", self.address))
            .json(&serde_json::json!({ "login": login, "secret": secret }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in as the seeded user and return the token
    pub async fn login_token(&self) -> String {
        let body: serde_json::Value = self
            .login(LOGIN, PASSWORD)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    /// Issue a token for the seeded user with another secret or clock
    pub fn token_signed_with(&self, secret: &str, instant: chrono::DateTime<Utc>) -> String {
        token_service_at(secret, instant)
            .issue(&TokenSubject {
                id: USER_ID,
                login: LOGIN,
            })
            .expect("Failed to issue token")
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .post(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Create a topic and return its id
    pub async fn create_topic(&self, token: &str, title: &str) -> i64 {
        let body: serde_json::Value = self
            .post_authenticated("/topics", token)
            .json(&serde_json::json!({
                "title": title,
                "message": "How does borrowing work?",
                "author": "ana",
                "course": "Rust",
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");

        body["id"].as_i64().expect("Created topic has no id")
    }
}
