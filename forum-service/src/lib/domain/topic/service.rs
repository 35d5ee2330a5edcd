use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::TopicError;
use super::models::CreateTopicCommand;
use super::models::NewTopic;
use super::models::Page;
use super::models::PageRequest;
use super::models::Topic;
use super::models::TopicId;
use super::models::UpdateTopicCommand;
use super::ports::TopicRepository;
use super::ports::TopicServicePort;

/// Concrete implementation of TopicServicePort.
///
/// Generic over repository for testability.
pub struct TopicService<TR>
where
    TR: TopicRepository,
{
    topic_repository: Arc<TR>,
}

impl<TR> TopicService<TR>
where
    TR: TopicRepository,
{
    pub fn new(topic_repository: Arc<TR>) -> Self {
        Self { topic_repository }
    }
}

#[async_trait]
impl<TR> TopicServicePort for TopicService<TR>
where
    TR: TopicRepository,
{
    async fn create_topic(&self, command: CreateTopicCommand) -> Result<Topic, TopicError> {
        let topic = self
            .topic_repository
            .create(NewTopic {
                title: command.title,
                message: command.message,
                author: command.author,
                course: command.course,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(topic_id = %topic.id, "Topic created");

        Ok(topic)
    }

    async fn list_unanswered(&self, request: PageRequest) -> Result<Page<Topic>, TopicError> {
        self.topic_repository.find_unanswered(request).await
    }

    async fn get_topic(&self, id: TopicId) -> Result<Topic, TopicError> {
        self.topic_repository
            .find_by_id(id)
            .await?
            .ok_or(TopicError::NotFound(id))
    }

    async fn update_topic(
        &self,
        id: TopicId,
        command: UpdateTopicCommand,
    ) -> Result<Topic, TopicError> {
        let mut topic = self.get_topic(id).await?;
        topic.apply(command);

        let topic = self.topic_repository.update(topic).await?;

        tracing::info!(topic_id = %id, "Topic updated");

        Ok(topic)
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), TopicError> {
        self.topic_repository.delete(id).await?;

        tracing::info!(topic_id = %id, "Topic deleted");

        Ok(())
    }
}
