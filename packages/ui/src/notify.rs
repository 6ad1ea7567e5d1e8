//! Transient notices: one visible notice at a time, replaced by the next
//! push and auto-dismissed after a configurable delay.

use dioxus::prelude::*;

use crate::time::sleep_ms;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice-success",
            Self::Warning => "notice notice-warning",
            Self::Error => "notice notice-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Get the current notice slot.
pub fn use_notices() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

/// Show a notice, replacing whatever is currently visible.
pub fn push_notice(notices: &mut Signal<Option<Notice>>, level: NoticeLevel, message: impl Into<String>) {
    notices.set(Some(Notice {
        level,
        message: message.into(),
    }));
}

/// Provider managing the notice slot and its auto-dismiss timer.
#[component]
pub fn NoticeProvider(dismiss_after_ms: u64, children: Element) -> Element {
    let mut notices = use_context_provider(|| Signal::new(Option::<Notice>::None));

    // Auto-dismiss: clear the slot after the delay unless a newer notice
    // replaced this one in the meantime.
    use_effect(move || {
        let current = notices();
        if current.is_none() || dismiss_after_ms == 0 {
            return;
        }
        spawn(async move {
            sleep_ms(dismiss_after_ms).await;
            let unchanged = *notices.peek() == current;
            if unchanged {
                notices.set(None);
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Renders the current notice, if any. Place once near the app root.
#[component]
pub fn NoticeBanner() -> Element {
    let notices = use_notices();

    rsx! {
        if let Some(notice) = notices() {
            div {
                class: notice.level.class(),
                "{notice.message}"
            }
        }
    }
}
