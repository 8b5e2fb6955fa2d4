pub mod create_user_request;
pub mod update_user_request;
pub mod search_users_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
pub use search_users_request::SearchUsersRequest;
