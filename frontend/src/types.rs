//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - selected files and their identity
//! - **Status Types** - transient banner messages
//! - **API Types** - upload endpoint response bodies

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::{PDF_EXTENSION, PDF_MIME_TYPE};

// =============================================================================
// File Types
// =============================================================================

/// A file picked or dropped by the user.
///
/// `handle` is the opaque browser blob (`web_sys::File` in the app, `()` in
/// tests); the widget only ever reads the metadata next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H> {
    /// Original file name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type, possibly empty
    pub mime_type: String,
    /// Raw handle sent with the upload
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            handle,
        }
    }

    /// Deduplication identity.
    pub fn key(&self) -> FileKey {
        FileKey {
            name: self.name.clone(),
            size: self.size,
        }
    }

    /// Declared as PDF, or named like one.
    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE || self.name.to_lowercase().ends_with(PDF_EXTENSION)
    }

    /// Size for display, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format_megabytes(self.size)
    }
}

/// Identity of a file inside the collection: name and size, no content hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub name: String,
    pub size: u64,
}

/// Format a byte count as megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

// =============================================================================
// Status Types
// =============================================================================

/// Kind of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    /// Validation, server or transport failure
    Error,
    /// Completed user action (copy)
    Success,
    /// Neutral feedback (files added or removed)
    Info,
}

impl StatusKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Error => "error",
            StatusKind::Success => "success",
            StatusKind::Info => "info",
        }
    }

    /// Where the banner is rendered.
    pub fn placement(&self) -> StatusPlacement {
        match self {
            StatusKind::Success => StatusPlacement::ReportSection,
            StatusKind::Error | StatusKind::Info => StatusPlacement::UploadZone,
        }
    }

    /// Whether the message removes itself after the configured delay.
    pub fn expires(&self) -> bool {
        !matches!(self, StatusKind::Error)
    }
}

/// Slot a status banner is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusPlacement {
    /// Right below the drop zone
    UploadZone,
    /// At the end of the report section
    ReportSection,
}

/// Identifier of a displayed status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusId(pub u64);

/// A displayed status message.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub id: StatusId,
    pub kind: StatusKind,
    pub text: String,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Successful body of `POST /upload`.
///
/// Only `report` matters; the counters are informational. Every field
/// decodes on its own, so a malformed counter never hides the report.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReportResponse {
    /// Generated report text
    #[serde(default, deserialize_with = "lenient")]
    pub report: Option<String>,
    /// Number of files the server received
    #[serde(default, deserialize_with = "lenient")]
    pub files_processed: Option<u64>,
    /// Number of files whose text could be extracted
    #[serde(default, deserialize_with = "lenient")]
    pub texts_combined: Option<u64>,
    /// Length of the combined extracted text
    #[serde(default, deserialize_with = "lenient")]
    pub total_characters: Option<u64>,
}

/// Failure body of `POST /upload`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

/// Decode a field, or `None` when it has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
