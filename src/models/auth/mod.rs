pub mod entities;
pub mod login;

pub use entities::Caller;
pub use login::{LoginRequest, LoginResponse};
