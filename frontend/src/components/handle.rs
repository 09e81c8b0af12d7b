//! Signal-backed handle to the upload widget.
//!
//! One [`WidgetHandle`] is created by the application root and passed to
//! every component as a prop. It wraps the [`UploadWidget`] state in a
//! signal and runs the browser side effects each operation needs.

use gloo_timers::future::TimeoutFuture;
use leptos::html::{Input, Textarea};
use leptos::*;
use web_sys::{File, FileList, HtmlTextAreaElement};

use crate::config::{STATUS_MESSAGE_TIMEOUT_MS, UPLOAD_ENDPOINT};
use crate::services::{copy_to_clipboard, selected_files, upload_files};
use crate::widget::UploadWidget;

#[derive(Clone, Copy)]
pub struct WidgetHandle {
    state: RwSignal<UploadWidget<File>>,
    pub(crate) file_input: NodeRef<Input>,
    pub(crate) report_area: NodeRef<Textarea>,
}

impl WidgetHandle {
    pub fn new() -> Self {
        let handle = Self {
            state: create_rw_signal(UploadWidget::new()),
            file_input: create_node_ref::<Input>(),
            report_area: create_node_ref::<Textarea>(),
        };
        handle.expire_status_messages();
        handle
    }

    /// Read the widget state, tracking it.
    pub fn with<U>(&self, f: impl FnOnce(&UploadWidget<File>) -> U) -> U {
        self.state.with(f)
    }

    /// Feed a picked or dropped file list into the collection.
    pub fn handle_files(&self, list: &FileList) {
        let batch = selected_files(list);
        self.state.update(|w| {
            w.handle_files(batch);
        });
    }

    pub fn remove_file(&self, index: usize) {
        self.state.update(|w| {
            w.remove_file(index);
        });
    }

    pub fn clear_all(&self) {
        self.state.update(|w| w.clear_all());
        self.reset_file_input();
    }

    /// Upload the collection unless it is empty or an upload is pending.
    pub fn submit(&self) {
        let state = self.state;
        let Some((ticket, files)) = state.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = upload_files(&files, UPLOAD_ENDPOINT).await;
            _ = state.try_update(|w| w.finish_submit(ticket, outcome));
        });
    }

    pub fn copy_report(&self) {
        let state = self.state;
        let text = state.with_untracked(|w| w.report_text().to_string());
        let source: Option<HtmlTextAreaElement> = self.report_area.get_untracked().map(|el| {
            let area: &HtmlTextAreaElement = &el;
            area.clone()
        });

        spawn_local(async move {
            copy_to_clipboard(&text, source.as_ref()).await;
            _ = state.try_update(|w| w.note_copied());
        });
    }

    pub fn reset_form(&self) {
        self.state.update(|w| w.reset_form());
        self.reset_file_input();
    }

    /// Open the native file picker.
    pub fn open_file_picker(&self) {
        match self.file_input.get_untracked() {
            Some(input) => input.click(),
            None => log::warn!("File input is not mounted"),
        }
    }

    fn reset_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    /// Dismiss success and info messages after the configured delay.
    ///
    /// The timer is keyed by message id, so a message replaced in the
    /// meantime is left alone by the old timer.
    fn expire_status_messages(&self) {
        let state = self.state;
        let expiring = create_memo(move |_| {
            state.with(|w| w.status().filter(|m| m.kind.expires()).map(|m| m.id))
        });

        create_effect(move |_| {
            if let Some(id) = expiring.get() {
                spawn_local(async move {
                    TimeoutFuture::new(STATUS_MESSAGE_TIMEOUT_MS).await;
                    _ = state.try_update(|w| w.dismiss_status(id));
                });
            }
        });
    }
}

impl Default for WidgetHandle {
    fn default() -> Self {
        Self::new()
    }
}
