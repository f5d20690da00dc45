use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct ManualTimer {
    pending: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualTimer {
    fn fire(&self) {
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, callback) in pending {
            callback();
        }
    }
}

impl OneShotTimer for &ManualTimer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay_ms, callback));
    }
}

#[test]
fn notify_shows_toast_until_timer_fires() {
    let toasts = RwSignal::new(ToastState::default());
    let timer = ManualTimer::default();
    let notifier = SignalNotifier::new(toasts, &timer, 3_000);

    notifier.notify("Connection error", ToastKind::Error);

    toasts.with_untracked(|t| {
        assert_eq!(t.items.len(), 1);
        assert_eq!(t.items[0].message, "Connection error");
        assert_eq!(t.items[0].kind, ToastKind::Error);
    });
    assert_eq!(timer.pending.borrow()[0].0, 3_000);

    timer.fire();
    toasts.with_untracked(|t| assert!(t.items.is_empty()));
}

#[test]
fn each_toast_is_dismissed_independently() {
    let toasts = RwSignal::new(ToastState::default());
    let timer = ManualTimer::default();
    let notifier = SignalNotifier::new(toasts, &timer, 3_000);

    notifier.notify("one", ToastKind::Info);
    let first = timer.pending.borrow_mut().remove(0);
    notifier.notify("two", ToastKind::Success);

    (first.1)();
    toasts.with_untracked(|t| {
        assert_eq!(t.items.len(), 1);
        assert_eq!(t.items[0].message, "two");
    });
}
