//! The upload widget controller.
//!
//! [`UploadWidget`] owns the whole widget state and implements every user
//! operation without touching the DOM. Components read it through the
//! query methods and [`crate::components::WidgetHandle`] performs the browser
//! side effects (network, timers, clipboard, file input reset).
//!
//! ```text
//!  pick / drop ──► handle_files ──► FileCollection ──► file_rows
//!  remove / clear ──────────────────────┘
//!  submit ──► begin_submit ──► (upload) ──► finish_submit ──► report | status
//!  new report ──► reset_form (invalidates the in-flight request)
//! ```

use crate::collection::{filter_pdfs, AddOutcome, FileCollection};
use crate::config::{
    MSG_ALL_REMOVED, MSG_FILE_REMOVED, MSG_REPORT_COPIED, MSG_SELECT_PDF, REPORT_PLACEHOLDER,
};
use crate::error::AppResult;
use crate::request::{RequestTicket, RequestTracker};
use crate::status::StatusBoard;
use crate::types::{SelectedFile, StatusId, StatusKind, StatusMessage, StatusPlacement};

/// One rendered row of the file list.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    /// Current position, bound to the row's remove control
    pub index: usize,
    pub name: String,
    pub size_label: String,
}

/// State of the report area.
#[derive(Clone, Debug, Default, PartialEq)]
struct ReportState {
    /// Loaded report, `None` while the placeholder is shown
    text: Option<String>,
    /// Copy and new-report controls are shown
    controls_visible: bool,
    /// The section was revealed once; reset does not hide it again
    section_visible: bool,
}

#[derive(Clone, Debug)]
pub struct UploadWidget<H> {
    files: FileCollection<H>,
    status: StatusBoard,
    requests: RequestTracker,
    report: ReportState,
}

impl<H> Default for UploadWidget<H> {
    fn default() -> Self {
        Self {
            files: FileCollection::new(),
            status: StatusBoard::new(),
            requests: RequestTracker::new(),
            report: ReportState::default(),
        }
    }
}

impl<H> UploadWidget<H> {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // File selection
    // =========================================================================

    /// Add a picked or dropped batch.
    ///
    /// Returns `None` when the batch holds no PDF; the collection is then
    /// left untouched and an error is shown.
    pub fn handle_files(&mut self, candidates: Vec<SelectedFile<H>>) -> Option<AddOutcome> {
        let total = candidates.len();
        let pdfs = filter_pdfs(candidates);

        if pdfs.is_empty() {
            log::warn!("Rejected selection of {} file(s): no PDF", total);
            self.show_error(MSG_SELECT_PDF);
            return None;
        }

        let outcome = self.files.add_batch(pdfs);
        log::info!(
            "📄 Added {} file(s), skipped {} duplicate(s), {} selected",
            outcome.added,
            outcome.duplicates,
            self.files.len()
        );
        self.show_info(outcome.summary());
        Some(outcome)
    }

    /// Remove the file at `index`. Out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<SelectedFile<H>> {
        let removed = self.files.remove(index);
        match &removed {
            Some(file) => {
                log::info!("🗑️ Removed {}", file.name);
                self.show_info(MSG_FILE_REMOVED);
            }
            None => log::warn!("Ignored removal of index {} ({} files)", index, self.files.len()),
        }
        removed
    }

    /// Empty the collection.
    pub fn clear_all(&mut self) {
        self.files.clear();
        log::info!("🗑️ Cleared all files");
        self.show_info(MSG_ALL_REMOVED);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Settle an upload started by [`UploadWidget::begin_submit`].
    ///
    /// Returns `false` when the widget was reset in the meantime; the
    /// outcome is then discarded.
    pub fn finish_submit(&mut self, ticket: RequestTicket, outcome: AppResult<String>) -> bool {
        if !self.requests.settle(ticket) {
            log::info!("Discarded response of a request made before the last reset");
            return false;
        }

        match outcome {
            Ok(report) => {
                log::info!("✅ Report received ({} characters)", report.chars().count());
                self.show_report(report);
            }
            Err(err) => {
                log::error!("❌ Upload failed: {}", err);
                self.show_error(err.to_string());
            }
        }
        true
    }

    // =========================================================================
    // Report
    // =========================================================================

    /// Display a report and reveal its controls.
    pub fn show_report(&mut self, text: impl Into<String>) {
        self.report.text = Some(text.into());
        self.report.controls_visible = true;
        self.report.section_visible = true;
    }

    /// Record a finished copy to the clipboard.
    pub fn note_copied(&mut self) {
        self.show_success(MSG_REPORT_COPIED);
    }

    /// Return to a blank form.
    ///
    /// The report section stays visible; only its text and controls reset.
    /// A pending upload is invalidated and its response ignored.
    pub fn reset_form(&mut self) {
        self.files.clear();
        self.requests.invalidate();
        self.report.text = None;
        self.report.controls_visible = false;
        self.status.purge();
        log::info!("🔄 Form reset");
    }

    // =========================================================================
    // Status messages
    // =========================================================================

    pub fn show_error(&mut self, text: impl Into<String>) -> StatusId {
        self.status.show(StatusKind::Error, text)
    }

    pub fn show_success(&mut self, text: impl Into<String>) -> StatusId {
        self.status.show(StatusKind::Success, text)
    }

    pub fn show_info(&mut self, text: impl Into<String>) -> StatusId {
        self.status.show(StatusKind::Info, text)
    }

    /// Expire message `id` if it is still displayed.
    pub fn dismiss_status(&mut self, id: StatusId) -> bool {
        self.status.dismiss(id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn files(&self) -> &FileCollection<H> {
        &self.files
    }

    /// Rows for the file list, empty when there is nothing to show.
    pub fn file_rows(&self) -> Vec<FileRow> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| FileRow {
                index,
                name: file.name.clone(),
                size_label: file.size_label(),
            })
            .collect()
    }

    /// Submit is enabled iff there are files and no request is outstanding.
    pub fn submit_enabled(&self) -> bool {
        !self.files.is_empty() && !self.requests.is_busy()
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    pub fn status_at(&self, placement: StatusPlacement) -> Option<&StatusMessage> {
        self.status.at(placement)
    }

    /// Text currently in the report area, empty while the placeholder shows.
    pub fn report_text(&self) -> &str {
        self.report.text.as_deref().unwrap_or_default()
    }

    pub fn report_placeholder(&self) -> &'static str {
        if self.report.text.is_some() {
            ""
        } else {
            REPORT_PLACEHOLDER
        }
    }

    pub fn report_controls_visible(&self) -> bool {
        self.report.controls_visible
    }

    pub fn report_section_visible(&self) -> bool {
        self.report.section_visible
    }
}

impl<H: Clone> UploadWidget<H> {
    /// Start an upload of the whole collection.
    ///
    /// Returns `None` when there is nothing to send or a request is already
    /// outstanding. Otherwise the widget enters the loading state and the
    /// caller receives the ticket to settle with plus a snapshot of files.
    pub fn begin_submit(&mut self) -> Option<(RequestTicket, Vec<SelectedFile<H>>)> {
        if self.files.is_empty() {
            return None;
        }
        let Some(ticket) = self.requests.begin() else {
            log::warn!("Submit ignored: an upload is already in flight");
            return None;
        };
        log::info!("📤 Uploading {} file(s)", self.files.len());
        Some((ticket, self.files.handles()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;

    fn pdf(name: &str, size: u64) -> SelectedFile<()> {
        SelectedFile::new(name, size, "application/pdf", ())
    }

    fn widget_with(files: &[(&str, u64)]) -> UploadWidget<()> {
        let mut widget = UploadWidget::new();
        widget.handle_files(files.iter().map(|(n, s)| pdf(n, *s)).collect());
        widget
    }

    fn status_text(widget: &UploadWidget<()>) -> &str {
        widget.status().map(|m| m.text.as_str()).unwrap_or_default()
    }

    #[test]
    fn test_non_pdf_batch_on_empty_collection() {
        let mut widget = UploadWidget::new();
        let outcome = widget.handle_files(vec![SelectedFile::new("a.txt", 1, "text/plain", ())]);

        assert!(outcome.is_none());
        assert!(widget.files().is_empty());
        assert!(!widget.submit_enabled());
        let status = widget.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, MSG_SELECT_PDF);
    }

    #[test]
    fn test_non_pdf_batch_keeps_existing_files() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        widget.handle_files(vec![SelectedFile::new("b.png", 1, "image/png", ())]);

        assert_eq!(widget.files().len(), 1);
        assert!(widget.submit_enabled());
    }

    #[test]
    fn test_readding_same_file_reports_duplicate() {
        let mut widget = widget_with(&[("a.pdf", 100)]);
        widget.handle_files(vec![pdf("a.pdf", 100)]);

        assert_eq!(widget.files().len(), 1);
        let status = widget.status().unwrap();
        assert_eq!(status.kind, StatusKind::Info);
        assert_eq!(status.text, "Added: 0. Skipped duplicates: 1");
    }

    #[test]
    fn test_mixed_batch_ignores_non_pdfs() {
        let mut widget = UploadWidget::new();
        let outcome = widget
            .handle_files(vec![pdf("a.pdf", 1), SelectedFile::new("b.doc", 2, "", ())])
            .unwrap();

        assert_eq!(outcome.added, 1);
        assert_eq!(status_text(&widget), "Added: 1");
    }

    #[test]
    fn test_file_rows() {
        let widget = widget_with(&[("a.pdf", 1024 * 1024), ("b.pdf", 0)]);
        let rows = widget.file_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].size_label, "1.00 MB");
        assert_eq!(rows[1].name, "b.pdf");
        assert!(UploadWidget::<()>::new().file_rows().is_empty());
    }

    #[test]
    fn test_remove_file() {
        let mut widget = widget_with(&[("a.pdf", 1), ("b.pdf", 2), ("c.pdf", 3)]);
        let removed = widget.remove_file(0).unwrap();

        assert_eq!(removed.name, "a.pdf");
        let names: Vec<String> = widget.file_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b.pdf", "c.pdf"]);
        assert_eq!(status_text(&widget), MSG_FILE_REMOVED);
        assert!(widget.submit_enabled());
    }

    #[test]
    fn test_remove_last_file_disables_submit() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        widget.remove_file(0);
        assert!(!widget.submit_enabled());
    }

    #[test]
    fn test_remove_out_of_range_changes_nothing() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let before = widget.status().map(|m| m.id);

        assert!(widget.remove_file(3).is_none());
        assert_eq!(widget.files().len(), 1);
        assert_eq!(widget.status().map(|m| m.id), before);
    }

    #[test]
    fn test_clear_all() {
        let mut widget = widget_with(&[("a.pdf", 1), ("b.pdf", 2)]);
        widget.clear_all();

        assert!(widget.files().is_empty());
        assert!(!widget.submit_enabled());
        assert_eq!(status_text(&widget), MSG_ALL_REMOVED);
    }

    #[test]
    fn test_submit_on_empty_collection_is_noop() {
        let mut widget: UploadWidget<()> = UploadWidget::new();
        assert!(widget.begin_submit().is_none());
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_submit_success_shows_report() {
        let mut widget = widget_with(&[("a.pdf", 1), ("b.pdf", 2), ("c.pdf", 3)]);
        let (ticket, files) = widget.begin_submit().unwrap();

        assert_eq!(files.len(), 3);
        assert!(widget.is_loading());
        assert!(!widget.submit_enabled());

        assert!(widget.finish_submit(ticket, Ok("X=1".to_string())));
        assert_eq!(widget.report_text(), "X=1");
        assert_eq!(widget.report_placeholder(), "");
        assert!(widget.report_controls_visible());
        assert!(widget.report_section_visible());
        assert!(!widget.is_loading());
        assert!(widget.submit_enabled());
    }

    #[test]
    fn test_submit_server_error() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let (ticket, _) = widget.begin_submit().unwrap();

        widget.finish_submit(ticket, Err(UploadError::Server("bad file".to_string())));

        let status = widget.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "bad file");
        assert!(!widget.is_loading());
        assert!(widget.submit_enabled());
        assert!(!widget.report_controls_visible());
    }

    #[test]
    fn test_submit_transport_error() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let (ticket, _) = widget.begin_submit().unwrap();

        widget.finish_submit(ticket, Err(UploadError::Transport("Failed to fetch".to_string())));
        assert_eq!(status_text(&widget), "Connection error: Failed to fetch");
        assert!(widget.submit_enabled());
    }

    #[test]
    fn test_second_submit_while_in_flight() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let _pending = widget.begin_submit().unwrap();

        assert!(widget.begin_submit().is_none());
    }

    #[test]
    fn test_response_after_reset_is_discarded() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let (ticket, _) = widget.begin_submit().unwrap();
        widget.reset_form();

        assert!(!widget.is_loading());
        assert!(!widget.finish_submit(ticket, Ok("late".to_string())));
        assert_eq!(widget.report_text(), "");
        assert!(!widget.report_controls_visible());
    }

    #[test]
    fn test_submit_blocked_until_stale_request_settles() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let (stale, _) = widget.begin_submit().unwrap();
        widget.reset_form();
        widget.handle_files(vec![pdf("b.pdf", 2)]);

        assert!(!widget.submit_enabled());
        assert!(widget.begin_submit().is_none());

        widget.finish_submit(stale, Ok("late".to_string()));
        assert!(widget.submit_enabled());
        let (fresh, _) = widget.begin_submit().unwrap();
        assert!(widget.finish_submit(fresh, Ok("fresh".to_string())));
        assert_eq!(widget.report_text(), "fresh");
    }

    #[test]
    fn test_reset_after_report() {
        let mut widget = widget_with(&[("a.pdf", 1)]);
        let (ticket, _) = widget.begin_submit().unwrap();
        widget.finish_submit(ticket, Ok("X=1".to_string()));
        widget.note_copied();

        widget.reset_form();

        assert!(widget.files().is_empty());
        assert!(!widget.submit_enabled());
        assert_eq!(widget.report_text(), "");
        assert_eq!(widget.report_placeholder(), REPORT_PLACEHOLDER);
        assert!(!widget.report_controls_visible());
        assert!(widget.report_section_visible());
        assert!(widget.status().is_none());
    }

    #[test]
    fn test_copy_message_lands_in_report_section() {
        let mut widget: UploadWidget<()> = UploadWidget::new();
        widget.show_report("X=1");
        widget.note_copied();

        assert!(widget.status_at(StatusPlacement::UploadZone).is_none());
        let status = widget.status_at(StatusPlacement::ReportSection).unwrap();
        assert_eq!(status.text, MSG_REPORT_COPIED);
    }

    #[test]
    fn test_submit_enabled_tracks_every_mutation() {
        let mut widget = UploadWidget::new();
        assert!(!widget.submit_enabled());
        widget.handle_files(vec![pdf("a.pdf", 1)]);
        assert!(widget.submit_enabled());
        widget.handle_files(vec![pdf("b.pdf", 1)]);
        widget.remove_file(0);
        assert!(widget.submit_enabled());
        widget.clear_all();
        assert!(!widget.submit_enabled());
    }
}
