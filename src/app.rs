//! Grocery Genius App
//!
//! Root component: view switch, local-storage mirroring, the derived
//! ownership index, and the import-modal / notification surfaces.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    Header, ImportRecipeModal, PantryList, RecipeCard, RecipeGenius, ShoppingList, Toast,
};
use crate::context::AppContext;
use crate::lists;
use crate::models::View;
use crate::storage;
use crate::store::{use_app_store, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);

    let (view_mode, set_view_mode) = signal(View::Lists);
    let import_open = signal(false);
    let notice = signal(None::<String>);
    let ctx = AppContext::new(import_open, notice);
    provide_context(ctx);

    // Mirror each collection to local storage on every change
    Effect::new(move |_| {
        let items = store.pantry_items().get();
        storage::save(storage::PANTRY_ITEMS_KEY, &items);
    });
    Effect::new(move |_| {
        let items = store.shopping_list_items().get();
        storage::save(storage::SHOPPING_LIST_ITEMS_KEY, &items);
    });
    Effect::new(move |_| {
        let recipes = store.saved_recipes().get();
        storage::save(storage::SAVED_RECIPES_KEY, &recipes);
    });

    // Ownership index: case-folded union of pantry and shopping-list names
    let owned_names: Memo<HashSet<String>> = Memo::new(move |_| {
        let pantry = store.pantry_items().get();
        let shopping = store.shopping_list_items().get();
        lists::owned_names(&pantry, &shopping)
    });

    view! {
        <Header current_view=view_mode set_view=set_view_mode/>

        <main class="app-main">
            {move || match view_mode.get() {
                View::Lists => view! {
                    <div class="lists-grid">
                        <PantryList/>
                        <ShoppingList/>
                        <RecipeGenius/>
                    </div>
                }.into_any(),
                View::Recipes => view! { <RecipesView/> }.into_any(),
            }}
        </main>

        <Show when=move || ctx.import_open.get()>
            <ImportRecipeModal owned_names=owned_names/>
        </Show>

        <Toast/>
    }
}

/// Saved-recipe grid with an empty-state hint
#[component]
fn RecipesView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="recipes-view">
            <h2>"My Saved Recipes"</h2>
            {move || {
                let recipes = store.saved_recipes().get();
                if recipes.is_empty() {
                    view! {
                        <div class="recipes-empty">
                            <h3>"No recipes saved yet!"</h3>
                            <p>"Go to the 'Lists' view to generate a recipe with the Recipe Genius."</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="recipes-grid">
                            {recipes.into_iter().map(|recipe| view! {
                                <RecipeCard recipe=recipe/>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
