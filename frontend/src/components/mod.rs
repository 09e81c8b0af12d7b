//! UI Components for the PDFSurge application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection with drag & drop and submit
//! - [`FileList`] - Selected files with remove / clear controls
//! - [`ReportSection`] - Report text with copy / new report actions
//! - [`StatusBanner`] - Error, success and info messages
//!
//! All feature components receive the [`WidgetHandle`] created by the
//! application root.

mod handle;
mod hero;
mod upload;
mod file_list;
mod report;
mod status;
mod footer;

pub use handle::*;
pub use hero::*;
pub use upload::*;
pub use file_list::*;
pub use report::*;
pub use status::*;
pub use footer::*;
