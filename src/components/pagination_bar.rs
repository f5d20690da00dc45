//! Previous / "Pagina X di Y" / next controls for `.messages-pagination`.

use leptos::prelude::*;

use crate::state::messages::MessagesState;

#[component]
pub fn PaginationBar(state: RwSignal<MessagesState>) -> impl IntoView {
    let controls = Memo::new(move |_| state.with(|s| s.pagination.clone()));
    move || {
        controls.get().map(|controls| {
            let previous = controls.previous.map(|href| {
                view! {
                    <a href=href class="pagination-link">
                        <i class="fas fa-chevron-left"></i>
                        " Precedente"
                    </a>
                }
            });
            let next = controls.next.map(|href| {
                view! {
                    <a href=href class="pagination-link">
                        "Successiva "
                        <i class="fas fa-chevron-right"></i>
                    </a>
                }
            });
            view! {
                {previous}
                <span class="pagination-info">{controls.label}</span>
                {next}
            }
        })
    }
}
