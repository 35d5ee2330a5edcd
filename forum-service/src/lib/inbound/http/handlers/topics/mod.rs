use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::topic::models::Author;
use crate::domain::topic::models::Course;
use crate::domain::topic::models::CreateTopicCommand;
use crate::domain::topic::models::Message;
use crate::domain::topic::models::Page;
use crate::domain::topic::models::Title;
use crate::domain::topic::models::Topic;
use crate::domain::topic::models::UpdateTopicCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::Violations;

pub mod create_topic;
pub mod delete_topic;
pub mod get_topic;
pub mod list_topics;
pub mod update_topic;

pub use create_topic::create_topic;
pub use delete_topic::delete_topic;
pub use get_topic::get_topic;
pub use list_topics::list_topics;
pub use update_topic::update_topic;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub course: String,
}

impl CreateTopicRequest {
    pub fn try_into_command(self) -> Result<CreateTopicCommand, ApiError> {
        let mut violations = Violations::new();

        let title = violations.check("title", Title::new(self.title));
        let message = violations.check("message", Message::new(self.message));
        let author = violations.check("author", Author::new(self.author));
        let course = violations.check("course", Course::new(self.course));
        violations.into_result()?;

        match (title, message, author, course) {
            (Some(title), Some(message), Some(author), Some(course)) => Ok(CreateTopicCommand {
                title,
                message,
                author,
                course,
            }),
            _ => Err(ApiError::BadRequest("Incomplete topic".to_string())),
        }
    }
}

/// Partial update. `id` must repeat the path id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

impl UpdateTopicRequest {
    pub fn try_into_command(self) -> Result<UpdateTopicCommand, ApiError> {
        let mut violations = Violations::new();

        let command = UpdateTopicCommand {
            title: self
                .title
                .and_then(|v| violations.check("title", Title::new(v))),
            message: self
                .message
                .and_then(|v| violations.check("message", Message::new(v))),
            author: self
                .author
                .and_then(|v| violations.check("author", Author::new(v))),
            course: self
                .course
                .and_then(|v| violations.check("course", Course::new(v))),
        };
        violations.into_result()?;

        Ok(command)
    }
}

/// Topic as returned after a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TopicData {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub author: String,
    pub course: String,
}

impl From<&Topic> for TopicData {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.0,
            title: topic.title.to_string(),
            message: topic.message.to_string(),
            author: topic.author.to_string(),
            course: topic.course.to_string(),
        }
    }
}

/// Topic as returned by reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TopicDetailData {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub author: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Topic> for TopicDetailData {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.0,
            title: topic.title.to_string(),
            message: topic.message.to_string(),
            author: topic.author.to_string(),
            course: topic.course.to_string(),
            created_at: topic.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TopicPageData {
    pub content: Vec<TopicDetailData>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Topic>> for TopicPageData {
    fn from(page: Page<Topic>) -> Self {
        let total_pages = page.total_pages();
        let request = page.request;
        let page = page.map(|ref topic| TopicDetailData::from(topic));

        Self {
            content: page.content,
            page: request.page(),
            size: request.size(),
            total_elements: page.total_elements,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeleteTopicResponseData {
    pub message: String,
}
