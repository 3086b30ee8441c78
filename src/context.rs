//! Application Context
//!
//! Shared UI state provided via Leptos Context API: import-modal
//! visibility and the transient notification banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notification stays visible, in milliseconds
const NOTICE_DURATION_MS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the import-recipe modal is shown - read
    pub import_open: ReadSignal<bool>,
    set_import_open: WriteSignal<bool>,
    /// Current transient notification, if any - read
    pub notice: ReadSignal<Option<String>>,
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        import_open: (ReadSignal<bool>, WriteSignal<bool>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            import_open: import_open.0,
            set_import_open: import_open.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show the import-recipe modal
    pub fn open_import(&self) {
        self.set_import_open.set(true);
    }

    /// Hide the import-recipe modal
    pub fn close_import(&self) {
        self.set_import_open.set(false);
    }

    /// Show a notification that dismisses itself after a few seconds
    pub fn notify(&self, message: String) {
        self.set_notice.set(Some(message));
        let clear = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            clear.set(None);
        });
    }
}
