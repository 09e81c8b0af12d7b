//! PDF upload component with drag & drop support.
//!
//! Handles file selection, the selected-file list and the submit button.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::{FileList, StatusBanner, WidgetHandle};
use crate::types::StatusPlacement;

#[component]
pub fn UploadSection(handle: WidgetHandle) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle.handle_files(&files);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        match ev.data_transfer().and_then(|dt| dt.files()) {
            Some(files) => handle.handle_files(&files),
            None => log::warn!("Drop event carried no files"),
        }
    };

    let file_input = handle.file_input;

    view! {
        <div class="upload-container">
            <div
                class="upload-section"
                class:dragover=move || drag_over.get()
                id="uploadArea"
                on:click=move |_| handle.open_file_picker()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">"Drop PDF files here"</div>
                <div class="upload-hint">"or click to select"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                accept=".pdf,application/pdf"
                multiple=true
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <StatusBanner handle=handle placement=StatusPlacement::UploadZone/>

            <FileList handle=handle/>

            <button
                class="btn btn-primary"
                id="processBtn"
                disabled=move || !handle.with(|w| w.submit_enabled())
                on:click=move |_| handle.submit()
            >
                "Generate report"
            </button>

            <Show
                when=move || handle.with(|w| w.is_loading())
                fallback=|| view! { }
            >
                <div class="loading" id="loading">
                    <div class="spinner"></div>
                    "⏳ Processing files..."
                </div>
            </Show>
        </div>
    }
}
