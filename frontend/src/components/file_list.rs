//! List of selected files with remove and clear controls.

use leptos::*;

use crate::components::WidgetHandle;

#[component]
pub fn FileList(handle: WidgetHandle) -> impl IntoView {
    view! {
        <div class="file-list" id="fileList">
            <Show
                when=move || handle.with(|w| !w.files().is_empty())
                fallback=|| view! { }
            >
                <div class="files-header">
                    <h4>"Selected files (" {move || handle.with(|w| w.files().len())} ")"</h4>
                    <button class="btn-clear-all" on:click=move |_| handle.clear_all()>
                        "Clear all"
                    </button>
                </div>

                // Keyed by position too, so rows after a removal rebind their index
                <For
                    each=move || handle.with(|w| w.file_rows())
                    key=|row| (row.index, row.name.clone(), row.size_label.clone())
                    children=move |row| {
                        let index = row.index;
                        view! {
                            <div class="file-item">
                                <div class="file-info">
                                    <span class="file-icon">"📄"</span>
                                    <span class="file-name">{row.name}</span>
                                    <span class="file-size">{row.size_label}</span>
                                </div>
                                <button
                                    class="file-remove"
                                    on:click=move |_| handle.remove_file(index)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
