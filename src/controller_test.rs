use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::types::{MessagePage, ToggleMaintainRequest};
use crate::state::messages::MessagesState;

// =============================================================
// Fakes
// =============================================================

struct FakeApi {
    page: Result<MessagePage, ApiError>,
    toggle: Result<(), ApiError>,
    queries: RefCell<Vec<String>>,
    toggles: RefCell<Vec<(String, ToggleMaintainRequest)>>,
}

impl FakeApi {
    fn new(page: Result<MessagePage, ApiError>, toggle: Result<(), ApiError>) -> Self {
        Self { page, toggle, queries: RefCell::default(), toggles: RefCell::default() }
    }
}

#[async_trait::async_trait(?Send)]
impl<'a> MessagesApi for &'a FakeApi {
    async fn fetch_messages(&self, query: &str) -> Result<MessagePage, ApiError> {
        self.queries.borrow_mut().push(query.to_owned());
        self.page.clone()
    }

    async fn toggle_maintain(&self, token: &str, request: &ToggleMaintainRequest) -> Result<(), ApiError> {
        self.toggles.borrow_mut().push((token.to_owned(), request.clone()));
        self.toggle.clone()
    }
}

#[derive(Default)]
struct FakeView {
    state: RefCell<MessagesState>,
    row_renders: RefCell<usize>,
}

impl MessagesView for &FakeView {
    fn show_rows(&self, rows: Vec<MessageRow>) {
        *self.row_renders.borrow_mut() += 1;
        self.state.borrow_mut().replace_rows(rows);
    }

    fn show_pagination(&self, pagination: PaginationView) {
        self.state.borrow_mut().pagination = Some(pagination);
    }

    fn set_maintain(&self, generation: u64, index: usize, checked: bool) {
        self.state.borrow_mut().set_maintain(generation, index, checked);
    }
}

#[derive(Default)]
struct FakeNotifier {
    toasts: RefCell<Vec<(String, ToastKind)>>,
}

impl Notifier for &FakeNotifier {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.toasts.borrow_mut().push((message.to_owned(), kind));
    }
}

struct FakeEnv {
    search: String,
}

impl PageEnvironment for &FakeEnv {
    fn pathname(&self) -> String {
        "/messages".to_owned()
    }

    fn search(&self) -> String {
        self.search.clone()
    }

    fn reload(&self) {}
}

fn message(text: &str, to_maintain: bool) -> Message {
    Message {
        id: None,
        user_name: "alice".to_owned(),
        timestamp: "05/03/2024 14:30:00".to_owned(),
        channel_id: "c-1".to_owned(),
        channel_name: "general".to_owned(),
        user_id: "u-1".to_owned(),
        message: text.to_owned(),
        to_maintain,
    }
}

fn success_page() -> Result<MessagePage, ApiError> {
    Ok(MessagePage {
        messages: vec![message("first", false), message("second", true)],
        pagination: Some(Pagination { page: 1, total_pages: 3 }),
    })
}

fn env() -> FakeEnv {
    FakeEnv { search: String::new() }
}

// =============================================================
// load_page
// =============================================================

#[test]
fn load_page_success_renders_rows_in_order_with_pagination() {
    let api = FakeApi::new(success_page(), Ok(()));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);

    block_on(controller.load_page(None, 1, &Filters::new()));

    let state = view.state.borrow();
    let texts: Vec<&str> = state.rows.iter().map(|r| r.binding.message.as_str()).collect();
    assert_eq!(texts, ["first", "second"]);
    assert!(!state.rows[0].to_maintain);
    assert!(state.rows[1].to_maintain);

    let pagination = state.pagination.as_ref().expect("pagination");
    assert_eq!(pagination.previous, None);
    assert!(pagination.next.is_some());
    assert_eq!(pagination.label, "Pagina 1 di 3");
    assert!(notifier.toasts.borrow().is_empty());
}

#[test]
fn load_page_sends_page_filters_and_channel() {
    let api = FakeApi::new(success_page(), Ok(()));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);
    let filters: Filters = [("to_maintain".to_owned(), "all".to_owned())].into_iter().collect();

    block_on(controller.load_page(Some("c-7"), 2, &filters));

    assert_eq!(*api.queries.borrow(), ["page=2&to_maintain=all&channel_id=c-7"]);
}

#[test]
fn load_page_rejection_toasts_and_keeps_prior_rows() {
    let api = FakeApi::new(Err(ApiError::Rejected(None)), Ok(()));
    let view = FakeView::default();
    view.state.borrow_mut().replace_rows(vec![MessageRow::from_message(&message("old", false), 1)]);
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);

    block_on(controller.load_page(None, 1, &Filters::new()));

    assert_eq!(*view.row_renders.borrow(), 0);
    assert_eq!(view.state.borrow().rows.len(), 1);
    assert_eq!(view.state.borrow().rows[0].binding.message, "old");
    assert_eq!(*notifier.toasts.borrow(), [(LOAD_REJECTED_TOAST.to_owned(), ToastKind::Error)]);
}

#[test]
fn load_page_transport_failure_toasts_connection_error() {
    let api = FakeApi::new(Err(ApiError::Transport("offline".to_owned())), Ok(()));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);

    block_on(controller.load_page(None, 1, &Filters::new()));

    assert!(!view.state.borrow().is_rendered());
    assert_eq!(*notifier.toasts.borrow(), [(LOAD_CONNECTION_TOAST.to_owned(), ToastKind::Error)]);
}

#[test]
fn load_page_single_page_leaves_pagination_untouched() {
    let api = FakeApi::new(
        Ok(MessagePage { messages: vec![message("only", false)], pagination: Some(Pagination { page: 1, total_pages: 1 }) }),
        Ok(()),
    );
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);

    block_on(controller.load_page(None, 1, &Filters::new()));

    assert_eq!(view.state.borrow().rows.len(), 1);
    assert!(view.state.borrow().pagination.is_none());
}

#[test]
fn load_page_without_pagination_renders_rows_and_toasts() {
    let api = FakeApi::new(Ok(MessagePage { messages: vec![message("only", false)], pagination: None }), Ok(()));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);

    block_on(controller.load_page(None, 1, &Filters::new()));

    assert_eq!(view.state.borrow().rows.len(), 1);
    assert!(view.state.borrow().pagination.is_none());
    assert_eq!(*notifier.toasts.borrow(), [(LOAD_CONNECTION_TOAST.to_owned(), ToastKind::Error)]);
}

#[test]
fn render_pagination_preserves_current_filters() {
    let api = FakeApi::new(success_page(), Ok(()));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = FakeEnv { search: "?page=2&user_filter=bob".to_owned() };
    let controller = MessageListController::new(&api, &view, &notifier, &env);

    controller.render_pagination(Pagination { page: 2, total_pages: 3 });

    let state = view.state.borrow();
    let pagination = state.pagination.as_ref().expect("pagination");
    assert_eq!(pagination.previous.as_deref(), Some("?page=1&user_filter=bob"));
    assert_eq!(pagination.next.as_deref(), Some("?page=3&user_filter=bob"));
}

// =============================================================
// toggle_maintain
// =============================================================

/// Render one row and return the toggle a click on it would emit.
fn rendered(view: &FakeView, checked: bool) -> MaintainToggle {
    let rows = vec![MessageRow::from_message(&message("keep me", false), 1)];
    let binding = rows[0].binding.clone();
    view.state.borrow_mut().replace_rows(rows);
    MaintainToggle { generation: view.state.borrow().generation, index: 0, binding, checked }
}

#[test]
fn toggle_failure_reverts_checkbox_and_toasts_server_error() {
    let api = FakeApi::new(success_page(), Err(ApiError::Rejected(Some("db locked".to_owned()))));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);
    let toggle = rendered(&view, true);

    // User ticks the box; the row shows checked before the request resolves.
    view.state.borrow_mut().set_maintain(toggle.generation, 0, true);
    block_on(controller.toggle_maintain(toggle));

    assert!(!view.state.borrow().rows[0].to_maintain);
    assert_eq!(
        *notifier.toasts.borrow(),
        [("Errore nell'aggiornamento: db locked".to_owned(), ToastKind::Error)]
    );
}

#[test]
fn toggle_transport_failure_reverts_unchecked_box() {
    let api = FakeApi::new(success_page(), Err(ApiError::Transport("offline".to_owned())));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);
    let toggle = rendered(&view, false);
    view.state.borrow_mut().set_maintain(toggle.generation, 0, true);

    // Unticking fails, so the box goes back to checked.
    view.state.borrow_mut().set_maintain(toggle.generation, 0, false);
    block_on(controller.toggle_maintain(toggle));

    assert!(view.state.borrow().rows[0].to_maintain);
    assert_eq!(*notifier.toasts.borrow(), [(TOGGLE_CONNECTION_TOAST.to_owned(), ToastKind::Error)]);
}

#[test]
fn toggle_success_keeps_state_and_sends_body_identity() {
    let api = FakeApi::new(success_page(), Ok(()));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);
    let toggle = rendered(&view, true);
    view.state.borrow_mut().set_maintain(toggle.generation, 0, true);

    block_on(controller.toggle_maintain(toggle));

    assert!(view.state.borrow().rows[0].to_maintain);
    assert_eq!(*notifier.toasts.borrow(), [(TOGGLE_OK_TOAST.to_owned(), ToastKind::Success)]);

    let toggles = api.toggles.borrow();
    let (token, request) = &toggles[0];
    assert!(!token.is_empty() && token.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(request.message, "keep me");
    assert_eq!(request.channel_id, "c-1");
    assert!(request.to_maintain);
}

#[test]
fn toggle_failure_after_reload_leaves_new_rows_alone() {
    let api = FakeApi::new(success_page(), Err(ApiError::Transport("offline".to_owned())));
    let view = FakeView::default();
    let notifier = FakeNotifier::default();
    let env = env();
    let controller = MessageListController::new(&api, &view, &notifier, &env);
    let toggle = rendered(&view, true);
    view.state.borrow_mut().set_maintain(toggle.generation, 0, true);

    // A reload lands while the toggle request is still in flight.
    (&view).show_rows(vec![MessageRow::from_message(&message("other", true), 2)]);
    block_on(controller.toggle_maintain(toggle));

    let state = view.state.borrow();
    assert_eq!(state.rows[0].binding.message, "other");
    assert!(state.rows[0].to_maintain);
    assert_eq!(*notifier.toasts.borrow(), [(TOGGLE_CONNECTION_TOAST.to_owned(), ToastKind::Error)]);
}

#[test]
fn toggle_rejection_without_detail_uses_plain_text() {
    assert_eq!(toggle_failure_text(&ApiError::Rejected(None)), TOGGLE_REJECTED_TOAST);
    assert_eq!(toggle_failure_text(&ApiError::Decode("eof".to_owned())), TOGGLE_CONNECTION_TOAST);
}
