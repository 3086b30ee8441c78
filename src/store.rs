//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations
//! run synchronously; derived views (ownership index, sorted projections)
//! observe a change before the next user action is processed.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::lists;
use crate::models::{new_item_id, PantryItem, Recipe, ShoppingListItem, Unit};
use crate::storage;

/// Global application state: the three persisted collections
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub pantry_items: Vec<PantryItem>,
    pub shopping_list_items: Vec<ShoppingListItem>,
    pub saved_recipes: Vec<Recipe>,
}

impl AppState {
    /// Initial state read back from local storage
    pub fn load() -> Self {
        Self {
            pantry_items: storage::load_or(storage::PANTRY_ITEMS_KEY, Vec::new()),
            shopping_list_items: storage::load_or(storage::SHOPPING_LIST_ITEMS_KEY, Vec::new()),
            saved_recipes: storage::load_or(storage::SAVED_RECIPES_KEY, Vec::new()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a pantry item
pub fn store_add_pantry_item(store: &AppStore, item: PantryItem) {
    let binding = store.pantry_items();
    let mut items = binding.write();
    lists::append(&mut *items, item);
}

/// Merge an edit into the pantry item matching `id`
pub fn store_update_pantry_item(store: &AppStore, id: &str, edit: impl FnOnce(&mut PantryItem)) {
    let binding = store.pantry_items();
    let mut items = binding.write();
    lists::update(&mut *items, id, edit);
}

/// Remove a pantry item by id
pub fn store_remove_pantry_item(store: &AppStore, id: &str) {
    let binding = store.pantry_items();
    let mut items = binding.write();
    lists::remove(&mut *items, id);
}

/// Replace the pantry order (manual drag rearrangement)
pub fn store_reorder_pantry(store: &AppStore, order: &[String]) {
    let binding = store.pantry_items();
    let mut items = binding.write();
    lists::reorder(&mut *items, order);
}

/// Append a shopping-list item
pub fn store_add_shopping_item(store: &AppStore, item: ShoppingListItem) {
    let binding = store.shopping_list_items();
    let mut items = binding.write();
    lists::append(&mut *items, item);
}

/// Append several shopping-list items in one write
pub fn store_add_shopping_items(store: &AppStore, new_items: Vec<ShoppingListItem>) {
    if new_items.is_empty() {
        return;
    }
    let binding = store.shopping_list_items();
    let mut items = binding.write();
    for item in new_items {
        lists::append(&mut *items, item);
    }
}

/// Remove a shopping-list item by id
pub fn store_remove_shopping_item(store: &AppStore, id: &str) {
    let binding = store.shopping_list_items();
    let mut items = binding.write();
    lists::remove(&mut *items, id);
}

/// Replace the shopping-list order (manual drag rearrangement)
pub fn store_reorder_shopping(store: &AppStore, order: &[String]) {
    let binding = store.shopping_list_items();
    let mut items = binding.write();
    lists::reorder(&mut *items, order);
}

/// Save a generated recipe
pub fn store_save_recipe(store: &AppStore, recipe: Recipe) {
    store.saved_recipes().write().push(recipe);
}

/// Delete a saved recipe by id
pub fn store_remove_recipe(store: &AppStore, id: &str) {
    store.saved_recipes().write().retain(|recipe| recipe.id != id);
}

// ========================
// Cross-List Operations
// ========================

/// Move a pantry item onto the shopping list. The destination entry gets a
/// fresh id and carries name + category only; quantity and unit are dropped.
/// Insert-then-remove: both steps complete before the next action runs.
pub fn store_move_to_shopping_list(store: &AppStore, id: &str) {
    let source = {
        let items = store.pantry_items().read_untracked();
        items.iter().find(|item| item.id == id).cloned()
    };
    let Some(item) = source else { return };
    {
        let binding = store.shopping_list_items();
        let mut shopping = binding.write();
        lists::append(
            &mut *shopping,
            ShoppingListItem {
                id: new_item_id(),
                name: item.name,
                category: item.category,
            },
        );
    }
    let binding = store.pantry_items();
    let mut pantry = binding.write();
    lists::remove(&mut *pantry, id);
}

/// Move a shopping-list item into the pantry. The new pantry entry always
/// starts at quantity 1 in pieces; it is never merged with an existing
/// pantry entry of the same name.
pub fn store_mark_as_purchased(store: &AppStore, id: &str) {
    let source = {
        let items = store.shopping_list_items().read_untracked();
        items.iter().find(|item| item.id == id).cloned()
    };
    let Some(item) = source else { return };
    {
        let binding = store.pantry_items();
        let mut pantry = binding.write();
        lists::append(
            &mut *pantry,
            PantryItem {
                id: new_item_id(),
                name: item.name,
                category: item.category,
                quantity: 1.0,
                unit: Unit::Pcs,
            },
        );
    }
    let binding = store.shopping_list_items();
    let mut shopping = binding.write();
    lists::remove(&mut *shopping, id);
}

/// Append every recipe ingredient not in the ownership index to the
/// shopping list, with an inferred category. Returns the count added.
/// Repeat invocations append again; nothing checks for entries added
/// by an earlier call.
pub fn store_add_missing_ingredients(store: &AppStore, recipe: &Recipe) -> usize {
    let owned = {
        let pantry = store.pantry_items().read_untracked();
        let shopping = store.shopping_list_items().read_untracked();
        lists::owned_names(&pantry, &shopping)
    };
    let missing: Vec<ShoppingListItem> = lists::missing_ingredients(recipe, &owned)
        .into_iter()
        .map(|(name, category)| ShoppingListItem {
            id: new_item_id(),
            name: name.to_string(),
            category: category.to_string(),
        })
        .collect();
    let count = missing.len();
    store_add_shopping_items(store, missing);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeIngredient;

    fn test_store() -> AppStore {
        Store::new(AppState::default())
    }

    fn seeded_pantry_item(id: &str, name: &str) -> PantryItem {
        PantryItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity: 2.0,
            unit: Unit::G,
        }
    }

    #[test]
    fn test_move_to_shopping_list_is_insert_then_remove() {
        let store = test_store();
        store_add_pantry_item(&store, seeded_pantry_item("p1", "Milk"));
        store_add_pantry_item(&store, seeded_pantry_item("p2", "Butter"));

        store_move_to_shopping_list(&store, "p1");

        let pantry = store.pantry_items().get_untracked();
        let shopping = store.shopping_list_items().get_untracked();
        assert!(pantry.iter().all(|item| item.id != "p1"));
        assert_eq!(shopping.len(), 1);
        assert_eq!(shopping[0].name, "Milk");
        assert_eq!(shopping[0].category, "Dairy");
        assert_ne!(shopping[0].id, "p1");
        // total count across both collections is unchanged
        assert_eq!(pantry.len() + shopping.len(), 2);
    }

    #[test]
    fn test_move_with_unknown_id_changes_nothing() {
        let store = test_store();
        store_add_pantry_item(&store, seeded_pantry_item("p1", "Milk"));

        store_move_to_shopping_list(&store, "nope");

        assert_eq!(store.pantry_items().get_untracked().len(), 1);
        assert!(store.shopping_list_items().get_untracked().is_empty());
    }

    #[test]
    fn test_mark_as_purchased_resets_quantity_and_unit() {
        let store = test_store();
        // a same-name pantry entry already exists; no merge may happen
        store_add_pantry_item(&store, seeded_pantry_item("p1", "Milk"));
        store_add_shopping_item(
            &store,
            ShoppingListItem {
                id: "s1".to_string(),
                name: "Milk".to_string(),
                category: "Dairy".to_string(),
            },
        );

        store_mark_as_purchased(&store, "s1");

        let pantry = store.pantry_items().get_untracked();
        assert!(store.shopping_list_items().get_untracked().is_empty());
        assert_eq!(pantry.len(), 2);
        let purchased = pantry.iter().find(|item| item.id != "p1").unwrap();
        assert_eq!(purchased.quantity, 1.0);
        assert_eq!(purchased.unit, Unit::Pcs);
        assert_ne!(purchased.id, "s1");
    }

    #[test]
    fn test_add_missing_ingredients_counts_and_repeats() {
        let store = test_store();
        store_add_pantry_item(&store, seeded_pantry_item("p1", "Milk"));
        let recipe = Recipe {
            id: "r1".to_string(),
            name: "Pancakes".to_string(),
            description: String::new(),
            ingredients: vec![
                RecipeIngredient { name: "Milk".to_string(), amount: "1 cup".to_string() },
                RecipeIngredient { name: "Flour".to_string(), amount: "2 cups".to_string() },
            ],
            instructions: String::new(),
        };

        let added = store_add_missing_ingredients(&store, &recipe);
        assert_eq!(added, 1);
        let shopping = store.shopping_list_items().get_untracked();
        assert_eq!(shopping.len(), 1);
        assert_eq!(shopping[0].name, "Flour");
        assert_eq!(shopping[0].category, "Pantry");

        // Flour is now on the shopping list, so it counts as owned
        let added_again = store_add_missing_ingredients(&store, &recipe);
        assert_eq!(added_again, 0);
    }

    #[test]
    fn test_reorder_helper_round_trip() {
        let store = test_store();
        store_add_pantry_item(&store, seeded_pantry_item("a", "Milk"));
        store_add_pantry_item(&store, seeded_pantry_item("b", "Eggs"));
        store_reorder_pantry(&store, &["b".to_string(), "a".to_string()]);

        let order: Vec<String> = store
            .pantry_items()
            .get_untracked()
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(order, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_recipe_save_and_delete() {
        let store = test_store();
        let recipe = Recipe {
            id: "r1".to_string(),
            name: "Toast".to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
        };
        store_save_recipe(&store, recipe);
        assert_eq!(store.saved_recipes().get_untracked().len(), 1);
        store_remove_recipe(&store, "r1");
        assert!(store.saved_recipes().get_untracked().is_empty());
    }
}
