use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::topic::errors::TopicTextError;

/// Topic aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub title: Title,
    pub message: Message,
    pub author: Author,
    pub course: Course,
    /// True until the topic gets its first answer
    pub unanswered: bool,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    /// Apply the fields present in `command`, leaving the others untouched.
    pub fn apply(&mut self, command: UpdateTopicCommand) {
        if let Some(title) = command.title {
            self.title = title;
        }
        if let Some(message) = command.message {
            self.message = message;
        }
        if let Some(author) = command.author {
            self.author = author;
        }
        if let Some(course) = command.course {
            self.course = course;
        }
    }
}

/// Topic unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicId(pub i64);

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! topic_text {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// # Errors
            /// * `Blank` - Value is empty or whitespace only
            pub fn new(value: impl Into<String>) -> Result<Self, TopicTextError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(TopicTextError::Blank);
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

topic_text!(
    /// Topic title
    Title
);
topic_text!(
    /// Topic body
    Message
);
topic_text!(
    /// Name the topic is posted under
    Author
);
topic_text!(
    /// Course the topic belongs to
    Course
);

/// Command to create a new topic with validated fields
#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    pub title: Title,
    pub message: Message,
    pub author: Author,
    pub course: Course,
}

/// Command to update an existing topic.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateTopicCommand {
    pub title: Option<Title>,
    pub message: Option<Message>,
    pub author: Option<Author>,
    pub course: Option<Course>,
}

/// Topic ready to be persisted; the repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: Title,
    pub message: Message,
    pub author: Author,
    pub course: Course,
    pub created_at: DateTime<Utc>,
}

/// Zero-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 10;
    pub const MAX_SIZE: u32 = 100;

    /// Build a page request, clamping `size` to `1..=MAX_SIZE`.
    pub fn new(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size
                .unwrap_or(Self::DEFAULT_SIZE)
                .clamp(1, Self::MAX_SIZE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.request.size()))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}
