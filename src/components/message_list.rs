//! Message rows with their maintain checkboxes.
//!
//! The list re-renders only when a new page replaces the rows (tracked by
//! `generation`); each checkbox tracks its own row so a toggle or a revert
//! updates a single input.

use leptos::prelude::*;

use crate::controller::MaintainToggle;
use crate::state::messages::{MessageRow, MessagesState};

/// Renders into `#messages-list`.
#[component]
pub fn MessagesList(state: RwSignal<MessagesState>, on_toggle: Callback<MaintainToggle>) -> impl IntoView {
    let generation = Memo::new(move |_| state.with(|s| s.generation));
    move || {
        generation.track();
        state
            .with_untracked(|s| s.rows.clone())
            .into_iter()
            .enumerate()
            .map(|(index, row)| view! { <MessageItem index=index row=row state=state on_toggle=on_toggle/> })
            .collect_view()
    }
}

#[component]
fn MessageItem(
    index: usize,
    row: MessageRow,
    state: RwSignal<MessagesState>,
    on_toggle: Callback<MaintainToggle>,
) -> impl IntoView {
    let MessageRow { key, user_name, channel_name, binding, .. } = row;
    let generation = state.with_untracked(|s| s.generation);
    let checked = move || state.with(|s| s.rows.get(index).is_some_and(|r| r.to_maintain));

    let toggle_binding = binding.clone();
    let on_change = move |ev| {
        let now_checked = event_target_checked(&ev);
        state.update(|s| {
            s.set_maintain(generation, index, now_checked);
        });
        on_toggle.run(MaintainToggle { generation, index, binding: toggle_binding.clone(), checked: now_checked });
    };

    view! {
        <div class="message-item" data-message-id=key>
            <div class="message-header">
                <span class="message-author">{user_name}</span>
                <span class="message-timestamp">{binding.timestamp.clone()}</span>
                <div class="message-actions">
                    <label class="maintain-toggle">
                        <input
                            type="checkbox"
                            class="maintain-checkbox"
                            data-timestamp=binding.timestamp.clone()
                            data-channel-id=binding.channel_id.clone()
                            data-user-id=binding.user_id.clone()
                            data-message=binding.message.clone()
                            prop:checked=checked
                            on:change=on_change
                        />
                        <span class="toggle-label">"Mantieni"</span>
                    </label>
                </div>
            </div>
            <div class="message-content">{binding.message.clone()}</div>
            <div class="message-meta">
                <span class="channel-badge">{channel_name}</span>
                <span class="user-id">"ID: " {binding.user_id.clone()}</span>
            </div>
        </div>
    }
}
