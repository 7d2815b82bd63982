pub mod api;
pub mod config;
pub mod logging;

pub use api::client::{get_polls, register_user, ApiClient};
pub use api::error::ApiError;
pub use api::models::{Poll, PollOption, PollQuery, RegisterRequest, RegistrationResult};
