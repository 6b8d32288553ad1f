pub mod login_request;
pub mod users;
