pub mod auth;
pub mod topic;
pub mod user;
