pub mod archive;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod slug;
pub mod validate;

pub use archive::{build_bundle, bundle_entry_name};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::path_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use slug::slugify;
