//! Browser-facing services.
//!
//! # Services
//!
//! - [`upload`] - multipart upload to the report endpoint
//! - [`clipboard`] - clipboard write with a legacy fallback
//! - [`files`] - conversion of browser file lists into selected files

pub mod upload;
pub mod clipboard;
pub mod files;

pub use upload::*;
pub use clipboard::*;
pub use files::*;
