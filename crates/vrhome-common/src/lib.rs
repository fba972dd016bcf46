pub mod action;
pub mod errors;
pub mod types;

pub use action::Action;
pub use errors::{ConfigError, PlatformError, ResourceError, VrHomeError};
pub use types::{Color, Eye, Rect, ViewId, ViewRole};

pub type Result<T> = std::result::Result<T, VrHomeError>;
