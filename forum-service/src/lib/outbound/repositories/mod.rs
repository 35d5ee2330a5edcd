pub mod topic;
pub mod user;

pub use topic::PostgresTopicRepository;
pub use user::PostgresUserRepository;
