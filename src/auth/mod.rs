pub mod settings;
pub mod token;

pub use settings::resolve_auth_settings;
pub use token::{acquire_token, DEFAULT_AUTHORITY};
