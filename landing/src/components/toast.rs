use std::time::Duration;

use leptos::prelude::*;
use samwise_common::modal::{Notice, NoticeKind};

const TOAST_TTL: Duration = Duration::from_secs(4);

/// Transient notifications, newest last.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    items: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn push(self, notice: Notice) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        self.items.update(|items| items.push((id, notice)));
        set_timeout(move || self.dismiss(id), TOAST_TTL);
    }

    pub fn dismiss(self, id: u64) {
        self.items.try_update(|items| items.retain(|(i, _)| *i != id));
    }
}

pub fn provide_toasts() -> ToastQueue {
    let queue = ToastQueue {
        items: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(queue);
    queue
}

#[component]
pub fn Toasts() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            {move || {
                queue
                    .items
                    .get()
                    .into_iter()
                    .map(|(id, notice)| {
                        let class = match notice.kind {
                            NoticeKind::Success => "toast toast-success",
                            NoticeKind::Error => "toast toast-error",
                        };
                        view! {
                            <div class=class>
                                <span>{notice.message}</span>
                                <button class="toast-close" aria-label="Dismiss" on:click=move |_| queue.dismiss(id)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
