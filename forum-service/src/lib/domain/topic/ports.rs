use async_trait::async_trait;

use super::models::CreateTopicCommand;
use super::models::NewTopic;
use super::models::Page;
use super::models::PageRequest;
use super::models::Topic;
use super::models::TopicId;
use super::models::UpdateTopicCommand;
use crate::domain::topic::errors::TopicError;

/// Port for topic domain service operations.
#[async_trait]
pub trait TopicServicePort: Send + Sync + 'static {
    /// Register a new topic.
    ///
    /// # Arguments
    /// * `command` - Validated topic fields
    ///
    /// # Returns
    /// Created topic, unanswered, with its assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_topic(&self, command: CreateTopicCommand) -> Result<Topic, TopicError>;

    /// List unanswered topics, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_unanswered(&self, request: PageRequest) -> Result<Page<Topic>, TopicError>;

    /// Retrieve topic by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_topic(&self, id: TopicId) -> Result<Topic, TopicError>;

    /// Apply a partial update to a topic.
    ///
    /// # Arguments
    /// * `id` - Topic to update
    /// * `command` - Fields to change; absent fields are kept
    ///
    /// # Returns
    /// Updated topic
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_topic(
        &self,
        id: TopicId,
        command: UpdateTopicCommand,
    ) -> Result<Topic, TopicError>;

    /// Remove topic permanently.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_topic(&self, id: TopicId) -> Result<(), TopicError>;
}

/// Repository port for topic persistence operations.
#[async_trait]
pub trait TopicRepository: Send + Sync + 'static {
    /// Persist a new topic.
    ///
    /// # Returns
    /// Created topic with database-assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, topic: NewTopic) -> Result<Topic, TopicError>;

    /// Retrieve topic by unique identifier.
    ///
    /// # Returns
    /// Topic entity if found, None otherwise
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicError>;

    /// Page through unanswered topics ordered by creation time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_unanswered(&self, request: PageRequest) -> Result<Page<Topic>, TopicError>;

    /// Overwrite the stored fields of an existing topic.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, topic: Topic) -> Result<Topic, TopicError>;

    /// Remove topic permanently.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TopicId) -> Result<(), TopicError>;
}
