//! Status banner for error, success and info messages.

use leptos::*;

use crate::components::WidgetHandle;
use crate::types::StatusPlacement;

/// Renders the live status message if it belongs in `placement`.
#[component]
pub fn StatusBanner(handle: WidgetHandle, placement: StatusPlacement) -> impl IntoView {
    move || {
        handle
            .with(|w| w.status_at(placement).cloned())
            .map(|message| {
                view! {
                    <div class=message.kind.css_class()>{message.text}</div>
                }
            })
    }
}
