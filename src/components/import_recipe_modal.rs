//! Import Recipe Modal
//!
//! Parses pasted recipe text through the Gemini client, shows the
//! categorized ingredients for review (pre-selected iff not already
//! owned) and appends the chosen ones to the shopping list. The modal
//! is unmounted on close, so its state resets fully between uses.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Modal;
use crate::context::AppContext;
use crate::gemini::{self, ParsedIngredient};
use crate::models::{new_item_id, ShoppingListItem};
use crate::store::{store_add_shopping_items, use_app_store};

#[component]
pub fn ImportRecipeModal(owned_names: Memo<HashSet<String>>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (recipe_text, set_recipe_text) = signal(String::new());
    let (servings, set_servings) = signal(4u32);
    let (is_loading, set_is_loading) = signal(false);
    let (parsed, set_parsed) = signal(Vec::<ParsedIngredient>::new());
    let (selected, set_selected) = signal(HashSet::<String>::new());
    let (error, set_error) = signal(None::<String>);

    let handle_parse = move |_| {
        let text = recipe_text.get_untracked();
        if text.trim().is_empty() {
            set_error.set(Some("Please paste a recipe.".to_string()));
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        set_parsed.set(Vec::new());
        let servings_count = servings.get_untracked();
        spawn_local(async move {
            match gemini::parse_recipe_for_shopping_list(&text, servings_count).await {
                Ok(ingredients) => {
                    let owned = owned_names.get_untracked();
                    let initially_selected: HashSet<String> = ingredients
                        .iter()
                        .filter(|ingredient| !owned.contains(&ingredient.name.to_lowercase()))
                        .map(|ingredient| ingredient.name.clone())
                        .collect();
                    set_selected.set(initially_selected);
                    set_parsed.set(ingredients);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    let handle_add = move |_| {
        let chosen = selected.get_untracked();
        let items: Vec<ShoppingListItem> = parsed
            .get_untracked()
            .into_iter()
            .filter(|ingredient| chosen.contains(&ingredient.name))
            .map(|ingredient| ShoppingListItem {
                id: new_item_id(),
                name: ingredient.name,
                category: ingredient.category,
            })
            .collect();
        store_add_shopping_items(&store, items);
        ctx.close_import();
    };

    view! {
        <Modal title="Import Recipe to Shopping List" on_close=Callback::new(move |_| ctx.close_import())>
            <div class="import-form">
                <label class="field-label" for="recipe-text">"Paste Recipe Text"</label>
                <textarea
                    id="recipe-text"
                    rows="8"
                    placeholder="Paste your recipe here..."
                    prop:value=move || recipe_text.get()
                    on:input=move |ev| set_recipe_text.set(event_target_value(&ev))
                ></textarea>

                <label class="field-label" for="servings">"Number of Servings"</label>
                <input
                    id="servings"
                    type="number"
                    min="1"
                    class="servings-input"
                    prop:value=move || servings.get().to_string()
                    on:input=move |ev| {
                        if let Ok(count) = event_target_value(&ev).parse::<u32>() {
                            set_servings.set(count);
                        }
                    }
                />

                <button
                    class="primary-btn"
                    disabled=move || is_loading.get()
                    on:click=handle_parse
                >
                    {move || if is_loading.get() { "Generating..." } else { "Generate Shopping List" }}
                </button>

                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

                <Show when=move || !parsed.get().is_empty()>
                    <div class="review-items">
                        <h3>"Review Items"</h3>
                        <div class="review-list">
                            {move || parsed.get().into_iter().map(|ingredient| {
                                let check_name = ingredient.name.clone();
                                let toggle_name = ingredient.name.clone();
                                let is_owned = owned_names.get().contains(&ingredient.name.to_lowercase());
                                let checked = move || selected.get().contains(&check_name);
                                view! {
                                    <div class="review-row">
                                        <label class="picker-row">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| set_selected.update(|set| {
                                                    if !set.remove(&toggle_name) {
                                                        set.insert(toggle_name.clone());
                                                    }
                                                })
                                            />
                                            <span class="item-name">{ingredient.name.clone()}</span>
                                            <span class="item-amount">{ingredient.amount.clone()}</span>
                                        </label>
                                        {is_owned.then(|| view! {
                                            <span class="owned-badge">"Owned"</span>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                        <button class="secondary-btn" on:click=handle_add>
                            {move || format!("Add {} selected items to Shopping List", selected.get().len())}
                        </button>
                    </div>
                </Show>
            </div>
        </Modal>
    }
}
