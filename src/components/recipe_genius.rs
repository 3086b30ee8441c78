//! Recipe Genius Component
//!
//! Picks pantry ingredients, strictness and preference filters, asks the
//! Gemini client for a recipe and offers the result for explicit save.
//! The generate control is disabled while a request is outstanding.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::gemini;
use crate::markdown;
use crate::models::{PantryItem, FILTER_GROUPS};
use crate::store::{store_save_recipe, use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeGenius() -> impl IntoView {
    let store = use_app_store();

    let (selected, set_selected) = signal(HashSet::<String>::new());
    let (strict_mode, set_strict_mode) = signal(false);
    let filters = RwSignal::new(
        FILTER_GROUPS
            .iter()
            .map(|(key, _)| (key.to_string(), String::new()))
            .collect::<Vec<_>>(),
    );
    let (is_loading, set_is_loading) = signal(false);
    let (generated, set_generated) = signal(None::<crate::models::Recipe>);
    let (error, set_error) = signal(None::<String>);

    let handle_generate = move |_| {
        let chosen: Vec<PantryItem> = store
            .pantry_items()
            .get_untracked()
            .into_iter()
            .filter(|item| selected.get_untracked().contains(&item.id))
            .collect();
        if chosen.is_empty() {
            set_error.set(Some("Please select at least one ingredient.".to_string()));
            return;
        }
        set_is_loading.set(true);
        set_generated.set(None);
        set_error.set(None);
        let strict = strict_mode.get_untracked();
        let chosen_filters = filters.get_untracked();
        spawn_local(async move {
            match gemini::generate_recipe(&chosen, strict, &chosen_filters).await {
                Ok(recipe) => set_generated.set(Some(recipe)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <section class="list-panel">
            <h2>"Recipe Genius"</h2>

            <div class="genius-body">
                <div>
                    <h3>"Ingredients to use:"</h3>
                    <div class="ingredient-picker">
                        {move || {
                            let items = store.pantry_items().get();
                            if items.is_empty() {
                                return view! { <p class="hint">"Add items to your pantry first."</p> }.into_any();
                            }
                            items.into_iter().map(|item| {
                                let check_id = item.id.clone();
                                let toggle_id = item.id.clone();
                                let checked = move || selected.get().contains(&check_id);
                                view! {
                                    <label class="picker-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| set_selected.update(|set| {
                                                if !set.remove(&toggle_id) {
                                                    set.insert(toggle_id.clone());
                                                }
                                            })
                                        />
                                        <span>{item.name.clone()}</span>
                                    </label>
                                }
                            }).collect_view().into_any()
                        }}
                    </div>
                </div>

                <label class="picker-row">
                    <input
                        type="checkbox"
                        prop:checked=move || strict_mode.get()
                        on:change=move |_| set_strict_mode.update(|strict| *strict = !*strict)
                    />
                    <span>"Use only selected ingredients"</span>
                </label>

                <div>
                    <h3>"Filters:"</h3>
                    <div class="filters-grid">
                        {FILTER_GROUPS.iter().map(|(key, options)| {
                            let key = *key;
                            view! {
                                <select on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    filters.update(|all| {
                                        if let Some(entry) = all.iter_mut().find(|(k, _)| k.as_str() == key) {
                                            entry.1 = value;
                                        }
                                    });
                                }>
                                    <option value="">{key}</option>
                                    {options.iter().map(|option| view! {
                                        <option value=*option>{*option}</option>
                                    }).collect_view()}
                                </select>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <button
                    class="primary-btn"
                    disabled=move || is_loading.get() || selected.get().is_empty()
                    on:click=handle_generate
                >
                    {move || if is_loading.get() { "Generating..." } else { "Generate Recipe" }}
                </button>

                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

                {move || generated.get().map(|recipe| {
                    let instructions_html = markdown::to_html(&recipe.instructions);
                    let to_save = recipe.clone();
                    view! {
                        <div class="generated-recipe">
                            <div class="generated-head">
                                <div>
                                    <h3 class="recipe-title">{recipe.name.clone()}</h3>
                                    <p class="description">{recipe.description.clone()}</p>
                                </div>
                                <button
                                    class="secondary-btn"
                                    on:click=move |_| {
                                        store_save_recipe(&store, to_save.clone());
                                        set_generated.set(None);
                                    }
                                >
                                    "Save"
                                </button>
                            </div>
                            <h4>"Ingredients:"</h4>
                            <ul class="ingredient-lines">
                                {recipe.ingredients.iter().map(|ingredient| view! {
                                    <li>{format!("{} {}", ingredient.amount, ingredient.name)}</li>
                                }).collect_view()}
                            </ul>
                            <h4>"Instructions:"</h4>
                            <div class="instructions" inner_html=instructions_html></div>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
