pub mod dates;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
