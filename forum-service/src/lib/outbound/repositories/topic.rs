use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::topic::errors::TopicError;
use crate::domain::topic::errors::TopicTextError;
use crate::domain::topic::models::Author;
use crate::domain::topic::models::Course;
use crate::domain::topic::models::Message;
use crate::domain::topic::models::NewTopic;
use crate::domain::topic::models::Page;
use crate::domain::topic::models::PageRequest;
use crate::domain::topic::models::Title;
use crate::domain::topic::models::Topic;
use crate::domain::topic::models::TopicId;
use crate::domain::topic::ports::TopicRepository;

pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_topic(row: &PgRow) -> Result<Topic, TopicError> {
        let db_err = |e: sqlx::Error| TopicError::DatabaseError(e.to_string());
        let text_err = |field: &str| {
            let field = field.to_string();
            move |e: TopicTextError| TopicError::DatabaseError(format!("Stored {} is invalid: {}", field, e))
        };

        Ok(Topic {
            id: TopicId(row.try_get("id").map_err(db_err)?),
            title: Title::new(row.try_get::<String, _>("title").map_err(db_err)?)
                .map_err(text_err("title"))?,
            message: Message::new(row.try_get::<String, _>("message").map_err(db_err)?)
                .map_err(text_err("message"))?,
            author: Author::new(row.try_get::<String, _>("author").map_err(db_err)?)
                .map_err(text_err("author"))?,
            course: Course::new(row.try_get::<String, _>("course").map_err(db_err)?)
                .map_err(text_err("course"))?,
            unanswered: row.try_get("unanswered").map_err(db_err)?,
            created_at: row.try_get("created_at").map_err(db_err)?,
        })
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn create(&self, topic: NewTopic) -> Result<Topic, TopicError> {
        let row = sqlx::query(
            r#"
            INSERT INTO topics (title, message, author, course, unanswered, created_at)
            VALUES ($1, $2, $3, $4, TRUE, $5)
            RETURNING id, title, message, author, course, unanswered, created_at
            "#,
        )
        .bind(topic.title.as_str())
        .bind(topic.message.as_str())
        .bind(topic.author.as_str())
        .bind(topic.course.as_str())
        .bind(topic.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        Self::row_to_topic(&row)
    }

    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, message, author, course, unanswered, created_at
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_topic).transpose()
    }

    async fn find_unanswered(&self, request: PageRequest) -> Result<Page<Topic>, TopicError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM topics WHERE unanswered")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        let rows = sqlx::query(
            r#"
            SELECT id, title, message, author, course, unanswered, created_at
            FROM topics
            WHERE unanswered
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(request.size()))
        .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        let content = rows
            .iter()
            .map(Self::row_to_topic)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(
            content,
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn update(&self, topic: Topic) -> Result<Topic, TopicError> {
        let result = sqlx::query(
            r#"
            UPDATE topics
            SET title = $2, message = $3, author = $4, course = $5
            WHERE id = $1
            "#,
        )
        .bind(topic.id.0)
        .bind(topic.title.as_str())
        .bind(topic.message.as_str())
        .bind(topic.author.as_str())
        .bind(topic.course.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TopicError::NotFound(topic.id));
        }

        Ok(topic)
    }

    async fn delete(&self, id: TopicId) -> Result<(), TopicError> {
        let result = sqlx::query(
            r#"
            DELETE FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TopicError::NotFound(id));
        }

        Ok(())
    }
}
