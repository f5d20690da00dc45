//! Page boot, island mounting, and the functions exported to page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTML is rendered by the server. At boot the client mounts three Leptos
//! islands into the existing containers (`#toast-container`,
//! `#messages-list`, `.messages-pagination`), installs the global DOM glue,
//! and arms auto-refresh on the messages view. The list and pagination
//! islands replace the server markup only once a fetched page arrives.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::controller::MessageListController;
use crate::components::toast_stack::SignalNotifier;
use crate::net::api::HttpMessagesApi;
use crate::state::messages::MessagesState;
use crate::state::toasts::{Notifier, ToastKind, ToastState};
use crate::util::location::BrowserLocation;
use crate::util::timers::OneShotTimer;

pub const EXPORT_PENDING_TOAST: &str = "Export functionality coming soon!";

/// Reactive state shared by the page islands.
#[derive(Clone, Copy, Debug)]
pub struct PageState {
    pub messages: RwSignal<MessagesState>,
    pub toasts: RwSignal<ToastState>,
}

impl PageState {
    pub fn new() -> Self {
        Self { messages: RwSignal::new(MessagesState::default()), toasts: RwSignal::new(ToastState::default()) }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

pub type PageController<T> =
    MessageListController<HttpMessagesApi, RwSignal<MessagesState>, SignalNotifier<T>, BrowserLocation>;

/// Wire the controller to the page state and the configured API origin.
pub fn build_controller<T: OneShotTimer>(state: PageState, config: &ClientConfig, timer: T) -> PageController<T> {
    MessageListController::new(
        HttpMessagesApi::new(&config.api_base),
        state.messages,
        SignalNotifier::new(state.toasts, timer, config.toast_ms),
        BrowserLocation,
    )
}

/// Placeholder for the table export action.
pub fn export_table<N: Notifier>(notifier: &N) {
    notifier.notify(EXPORT_PENDING_TOAST, ToastKind::Info);
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::{PageController, PageState, build_controller, export_table};
    use crate::components::message_list::MessagesList;
    use crate::components::pagination_bar::PaginationBar;
    use crate::components::toast_stack::ToastStack;
    use crate::config::ClientConfig;
    use crate::controller::MaintainToggle;
    use crate::state::toasts::{Notifier, ToastKind};
    use crate::util::auto_refresh::{AutoRefresh, DEFAULT_REFRESH_INTERVAL_MS};
    use crate::util::location::BrowserLocation;
    use crate::util::query::Filters;
    use crate::util::timers::BrowserTimers;
    use crate::util::{date_input, filters, form_loading, shortcuts};

    struct Page {
        controller: PageController<BrowserTimers>,
        refresh: AutoRefresh<BrowserTimers, BrowserLocation>,
    }

    thread_local! {
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    fn controller() -> Option<PageController<BrowserTimers>> {
        PAGE.with(|page| page.borrow().as_ref().map(|p| p.controller.clone()))
    }

    /// Module entry point: runs once when the WASM bundle loads.
    #[wasm_bindgen(start)]
    pub fn boot() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        let config = ClientConfig::from_page();
        log::debug!("booting message admin client: {config:?}");

        let owner = Owner::new();
        owner.with(|| {
            let state = PageState::new();
            let controller = build_controller(state, &config, BrowserTimers);

            let toggle_controller = controller.clone();
            let on_toggle = Callback::new(move |toggle: MaintainToggle| {
                let controller = toggle_controller.clone();
                leptos::task::spawn_local(async move {
                    controller.toggle_maintain(toggle).await;
                });
            });

            mount_islands(state, on_toggle);

            date_input::format_page_inputs();
            form_loading::install(config.loading_reset_ms);
            shortcuts::install();

            let mut refresh = AutoRefresh::new(BrowserTimers, BrowserLocation, &config.messages_path);
            if config.auto_refresh && refresh.on_messages_view() {
                refresh.start(config.refresh_interval_ms);
            }

            PAGE.with(|page| *page.borrow_mut() = Some(Page { controller, refresh }));
        });
        // The islands and their effects live for the whole page.
        std::mem::forget(owner);
    }

    fn mount_islands(state: PageState, on_toggle: Callback<MaintainToggle>) {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let as_html = |el: web_sys::Element| el.dyn_into::<web_sys::HtmlElement>().ok();

        let toasts = state.toasts;
        if let Some(container) = doc.get_element_by_id("toast-container").and_then(as_html) {
            leptos::mount::mount_to(container, move || view! { <ToastStack toasts=toasts/> }).forget();
        }

        let messages = state.messages;
        if let Some(container) = doc.get_element_by_id("messages-list").and_then(as_html) {
            mount_on_first_render(
                container,
                move || messages.with(|s| s.is_rendered()),
                move || view! { <MessagesList state=messages on_toggle=on_toggle/> },
            );
        }

        if let Some(container) = doc.query_selector(".messages-pagination").ok().flatten().and_then(as_html) {
            mount_on_first_render(
                container,
                move || messages.with(|s| s.pagination.is_some()),
                move || view! { <PaginationBar state=messages/> },
            );
        }
    }

    /// Keep the server markup until `ready` first holds, then swap in the island.
    fn mount_on_first_render<R, F, V>(container: web_sys::HtmlElement, ready: R, island: F)
    where
        R: Fn() -> bool + 'static,
        F: FnOnce() -> V + 'static,
        V: IntoView + 'static,
    {
        let pending = RefCell::new(Some((container, island)));
        Effect::new(move || {
            if !ready() {
                return;
            }
            if let Some((container, island)) = pending.borrow_mut().take() {
                container.set_inner_html("");
                leptos::mount::mount_to(container, island).forget();
            }
        });
    }

    fn filters_from_js(value: &JsValue) -> Filters {
        let Some(object) = value.dyn_ref::<js_sys::Object>() else {
            return Filters::new();
        };
        js_sys::Object::entries(object)
            .iter()
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                let key = pair.get(0).as_string()?;
                let raw = pair.get(1);
                let value = raw
                    .as_string()
                    .or_else(|| raw.as_f64().map(|n| n.to_string()))
                    .or_else(|| raw.as_bool().map(|b| b.to_string()))?;
                Some((key, value))
            })
            .collect()
    }

    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(message: &str, kind: Option<String>) {
        if let Some(controller) = controller() {
            controller.notifier().notify(message, kind.as_deref().map_or(ToastKind::Info, ToastKind::parse));
        }
    }

    #[wasm_bindgen(js_name = loadMessages)]
    pub fn load_messages(channel_id: Option<String>, page: Option<u32>, filters: JsValue) {
        let Some(controller) = controller() else {
            return;
        };
        let filters = filters_from_js(&filters);
        leptos::task::spawn_local(async move {
            controller.load_page(channel_id.as_deref(), page.unwrap_or(1), &filters).await;
        });
    }

    #[wasm_bindgen(js_name = startAutoRefresh)]
    pub fn start_auto_refresh(interval_ms: Option<u32>) {
        PAGE.with(|page| {
            if let Some(page) = page.borrow_mut().as_mut() {
                page.refresh.start(interval_ms.unwrap_or(DEFAULT_REFRESH_INTERVAL_MS));
            }
        });
    }

    #[wasm_bindgen(js_name = stopAutoRefresh)]
    pub fn stop_auto_refresh() {
        PAGE.with(|page| {
            if let Some(page) = page.borrow_mut().as_mut() {
                page.refresh.stop();
            }
        });
    }

    #[wasm_bindgen(js_name = clearFilters)]
    pub fn clear_filters() {
        if !filters::clear_page_form() {
            log::debug!("clearFilters: no filter form on this page");
        }
    }

    #[wasm_bindgen(js_name = exportTable)]
    pub fn export_table_placeholder() {
        if let Some(controller) = controller() {
            export_table(controller.notifier());
        }
    }

    #[wasm_bindgen(js_name = formatDateForInput)]
    pub fn format_date_for_input(source: &str) -> String {
        date_input::to_input_format(source)
    }
}
