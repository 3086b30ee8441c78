//! Toast Component
//!
//! Transient notification banner driven by the app context;
//! dismisses itself after a few seconds.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|message| view! {
            <div class="toast">{message}</div>
        })}
    }
}
