//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME} " - PDF Report"</h1>
            <p class="subtitle">
                "Select one or more PDF documents. "
                "Their text is combined and analysed into a single report."
            </p>
        </div>
    }
}
