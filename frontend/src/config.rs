//! Application configuration.
//!
//! Centralized constants for the PDFSurge frontend. The widget talks to the
//! server that serves it, so every value is fixed at compile time.

/// Application name, shown in the page title and hero.
pub const APP_NAME: &str = "PDFSurge";

/// Upload endpoint, relative to the page origin.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field name, repeated once per file.
pub const UPLOAD_FIELD: &str = "files";

/// MIME type accepted as PDF.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File extension accepted as PDF (compared case-insensitively).
pub const PDF_EXTENSION: &str = ".pdf";

/// Lifetime of success and info messages, in milliseconds.
///
/// Error messages have no lifetime and stay until replaced.
pub const STATUS_MESSAGE_TIMEOUT_MS: u32 = 3000;

/// Placeholder shown in the report area while no report is loaded.
pub const REPORT_PLACEHOLDER: &str = "The report will appear here after the files are processed...";

// =============================================================================
// User-facing messages
// =============================================================================

/// Shown when a selection contains no PDF file.
pub const MSG_SELECT_PDF: &str = "Please select PDF files";

/// Shown after a single file was removed.
pub const MSG_FILE_REMOVED: &str = "File removed";

/// Shown after the whole collection was cleared.
pub const MSG_ALL_REMOVED: &str = "All files removed";

/// Shown after the report was copied.
pub const MSG_REPORT_COPIED: &str = "Report copied to clipboard";

/// Fallback when the server fails without an `error` field.
pub const MSG_PROCESSING_FAILED: &str = "An error occurred while processing the files";

