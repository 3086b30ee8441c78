//! Recipe Card Component
//!
//! Saved-recipe card with expandable details, missing-ingredient import
//! and inline-confirmed deletion.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::markdown;
use crate::models::Recipe;
use crate::store::{store_add_missing_ingredients, store_remove_recipe, use_app_store};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (expanded, set_expanded) = signal(false);
    let instructions_html = markdown::to_html(&recipe.instructions);
    let ingredients = recipe.ingredients.clone();
    let for_add_missing = recipe.clone();
    let delete_id = recipe.id.clone();

    let on_add_missing = move |_| {
        let added = store_add_missing_ingredients(&store, &for_add_missing);
        ctx.notify(format!("{added} missing ingredients added to your shopping list!"));
    };

    view! {
        <div class="recipe-card">
            <div class="recipe-card-body">
                <h3>{recipe.name.clone()}</h3>
                <p class="description">{recipe.description.clone()}</p>
            </div>

            <Show when=move || expanded.get()>
                <div class="recipe-card-details">
                    <h4>"Ingredients:"</h4>
                    <ul class="ingredient-lines">
                        {ingredients.iter().map(|ingredient| view! {
                            <li>{format!("{} {}", ingredient.amount, ingredient.name)}</li>
                        }).collect_view()}
                    </ul>
                    <h4>"Instructions:"</h4>
                    <div class="instructions" inner_html=instructions_html.clone()></div>
                </div>
            </Show>

            <div class="recipe-card-footer">
                <div class="recipe-card-actions">
                    <button class="link-btn" on:click=on_add_missing>"Add Missing"</button>
                    <DeleteConfirmButton
                        label="Delete"
                        button_class="link-btn danger"
                        on_confirm=Callback::new(move |_| store_remove_recipe(&store, &delete_id))
                    />
                </div>
                <button class="expand-btn" on:click=move |_| set_expanded.update(|open| *open = !*open)>
                    {move || if expanded.get() { "Collapse" } else { "Expand" }}
                </button>
            </div>
        </div>
    }
}
