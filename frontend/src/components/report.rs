//! Report display with copy and new-report actions.

use leptos::*;

use crate::components::{StatusBanner, WidgetHandle};
use crate::types::StatusPlacement;

fn display(visible: bool) -> &'static str {
    if visible {
        "inline-block"
    } else {
        "none"
    }
}

#[component]
pub fn ReportSection(handle: WidgetHandle) -> impl IntoView {
    let report_area = handle.report_area;
    let controls = move || display(handle.with(|w| w.report_controls_visible()));

    view! {
        <div
            class="report-section"
            class:hidden=move || !handle.with(|w| w.report_section_visible())
            id="reportSection"
        >
            <div class="report-header">
                <div class="report-title">"📋 Report"</div>
                <div class="report-actions">
                    <button
                        class="btn btn-secondary"
                        id="copyBtn"
                        style:display=controls
                        on:click=move |_| handle.copy_report()
                    >
                        "Copy"
                    </button>
                    <button
                        class="btn btn-secondary"
                        id="newReportBtn"
                        style:display=controls
                        on:click=move |_| handle.reset_form()
                    >
                        "New report"
                    </button>
                </div>
            </div>

            <textarea
                id="reportText"
                readonly=true
                node_ref=report_area
                placeholder=move || handle.with(|w| w.report_placeholder())
                prop:value=move || handle.with(|w| w.report_text().to_string())
            ></textarea>

            <StatusBanner handle=handle placement=StatusPlacement::ReportSection/>
        </div>
    }
}
