//! PDFSurge - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF files and reading back the
//! report the server generates from them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the WidgetHandle)                         │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection                                          │
//! │  │   ├── StatusBanner (errors, info)                        │
//! │  │   └── FileList                                           │
//! │  └── ReportSection                                          │
//! │      └── StatusBanner (success)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, StatusMessage, responses)
//! - [`collection`] - Deduplicated file collection
//! - [`status`] - Status message board
//! - [`request`] - Single in-flight upload tracking
//! - [`widget`] - DOM-free widget controller
//! - [`components`] - UI components
//! - [`services`] - Browser communication (upload, clipboard, files)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod collection;
pub mod status;
pub mod request;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileKey, SelectedFile,
    // Status
    StatusId, StatusKind, StatusMessage, StatusPlacement,
    // API
    ErrorResponse, ReportResponse,
};

// Errors
pub use error::{AppResult, UploadError};

// Core
pub use collection::{AddOutcome, FileCollection};
pub use widget::{FileRow, UploadWidget};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The one widget instance; every control reaches it through props
    let handle = WidgetHandle::new();

    view! {
        <div class="container">
            <Hero/>
            <UploadSection handle=handle/>
            <ReportSection handle=handle/>
        </div>

        <Footer/>
    }
}
