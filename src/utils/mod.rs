pub mod environment;
pub mod paths;
pub mod timestamps;

pub use environment::{TEMP_PATH_ENV, resolve_temp_path};
pub use paths::{absolute_path, format_path_with_tilde};
pub use timestamps::format_timestamp;
