//! Header Component
//!
//! Brand, Lists/Recipes navigation and the import-recipe trigger.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::View;

#[component]
fn NavButton(
    target: View,
    label: &'static str,
    current_view: ReadSignal<View>,
    set_view: WriteSignal<View>,
) -> impl IntoView {
    let is_active = move || current_view.get() == target;
    view! {
        <button
            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
            on:click=move |_| set_view.set(target)
        >
            {label}
        </button>
    }
}

/// Sticky top bar with the view switch; a second nav row shows on mobile
#[component]
pub fn Header(current_view: ReadSignal<View>, set_view: WriteSignal<View>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="app-header">
            <div class="header-inner">
                <h1 class="brand">"Grocery Genius"</h1>
                <nav class="main-nav">
                    <NavButton target=View::Lists label="Lists" current_view=current_view set_view=set_view/>
                    <NavButton target=View::Recipes label="Recipes" current_view=current_view set_view=set_view/>
                </nav>
                <button class="import-btn" on:click=move |_| ctx.open_import()>
                    "Import Recipe"
                </button>
            </div>
            <nav class="mobile-nav">
                <NavButton target=View::Lists label="Lists" current_view=current_view set_view=set_view/>
                <NavButton target=View::Recipes label="Recipes" current_view=current_view set_view=set_view/>
            </nav>
        </header>
    }
}
