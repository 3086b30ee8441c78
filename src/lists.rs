//! List Operations
//!
//! Pure collection operations shared by the pantry and the shopping list:
//! CRUD by id, ordering, sort projections, the derived ownership index and
//! category inference for imported ingredients.

use std::collections::{HashMap, HashSet};

use crate::models::{PantryItem, Recipe, ShoppingListItem, SortOption};

/// Common shape of entries in the pantry and shopping list
pub trait ListEntry {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
}

impl ListEntry for PantryItem {
    fn id(&self) -> &str { &self.id }
    fn name(&self) -> &str { &self.name }
    fn category(&self) -> &str { &self.category }
}

impl ListEntry for ShoppingListItem {
    fn id(&self) -> &str { &self.id }
    fn name(&self) -> &str { &self.name }
    fn category(&self) -> &str { &self.category }
}

/// Append an item at the end of the sequence.
/// Ids must be unique within a collection; the caller supplies a fresh one.
pub fn append<T: ListEntry>(items: &mut Vec<T>, item: T) {
    debug_assert!(items.iter().all(|existing| existing.id() != item.id()));
    items.push(item);
}

/// Apply `edit` to the item matching `id`. No-op if the id is absent.
/// The id itself is never changed.
pub fn update<T: ListEntry>(items: &mut [T], id: &str, edit: impl FnOnce(&mut T)) {
    if let Some(item) = items.iter_mut().find(|item| item.id() == id) {
        edit(item);
    }
}

/// Remove the item matching `id`. No-op if the id is absent.
pub fn remove<T: ListEntry>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

/// Replace the stored order with `order`.
///
/// Applies only when `order` contains exactly the current id set;
/// any other ordering is a no-op. Returns whether the reorder applied.
pub fn reorder<T: ListEntry>(items: &mut [T], order: &[String]) -> bool {
    if order.len() != items.len() {
        return false;
    }
    let index_of: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(index, id)| (id.as_str(), index))
        .collect();
    if index_of.len() != items.len() {
        return false;
    }
    if !items.iter().all(|item| index_of.contains_key(item.id())) {
        return false;
    }
    items.sort_by_key(|item| index_of[item.id()]);
    true
}

/// Compute the id order after dragging `dragged_id` onto slot `target_index`.
/// Returns None when the dragged id is not part of `ids`.
pub fn order_after_drag(ids: &[String], dragged_id: &str, target_index: usize) -> Option<Vec<String>> {
    let from = ids.iter().position(|id| id == dragged_id)?;
    let mut order = ids.to_vec();
    let moved = order.remove(from);
    let index = target_index.min(order.len());
    order.insert(index, moved);
    Some(order)
}

/// Sorted view of a collection. A projection only: the stored order is
/// untouched, and `Default` returns it as-is.
pub fn sorted<T: ListEntry + Clone>(items: &[T], sort: SortOption) -> Vec<T> {
    let mut view = items.to_vec();
    match sort {
        SortOption::Default => {}
        SortOption::Name => {
            view.sort_by(|a, b| fold(a.name()).cmp(&fold(b.name())));
        }
        SortOption::Category => {
            view.sort_by(|a, b| {
                fold(a.category())
                    .cmp(&fold(b.category()))
                    .then_with(|| fold(a.name()).cmp(&fold(b.name())))
            });
        }
    }
    view
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Case-folded union of pantry and shopping-list names.
/// Pure function of the current contents, recomputed on every read.
pub fn owned_names(pantry: &[PantryItem], shopping: &[ShoppingListItem]) -> HashSet<String> {
    pantry
        .iter()
        .map(|item| fold(&item.name))
        .chain(shopping.iter().map(|item| fold(&item.name)))
        .collect()
}

const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese"];
const MEAT_KEYWORDS: &[&str] = &["chicken", "beef"];
const PRODUCE_KEYWORDS: &[&str] = &["lettuce", "apple"];

/// Guess a category from keyword substrings of the ingredient name.
/// A coarse fixed rule set; anything unmatched lands in "Pantry".
pub fn infer_category(name: &str) -> &'static str {
    let matches = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));
    if matches(DAIRY_KEYWORDS) {
        "Dairy"
    } else if matches(MEAT_KEYWORDS) {
        "Meat"
    } else if matches(PRODUCE_KEYWORDS) {
        "Produce"
    } else {
        "Pantry"
    }
}

/// Recipe ingredients not present in the ownership index, paired with an
/// inferred category. Does NOT check the shopping list for duplicates from
/// earlier invocations; every call reports the full missing set again.
pub fn missing_ingredients<'a>(
    recipe: &'a Recipe,
    owned: &HashSet<String>,
) -> Vec<(&'a str, &'static str)> {
    recipe
        .ingredients
        .iter()
        .filter(|ingredient| !owned.contains(&fold(&ingredient.name)))
        .map(|ingredient| (ingredient.name.as_str(), infer_category(&ingredient.name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipeIngredient, Unit};

    fn pantry_item(id: &str, name: &str, category: &str) -> PantryItem {
        PantryItem {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            quantity: 1.0,
            unit: Unit::Pcs,
        }
    }

    fn shopping_item(id: &str, name: &str) -> ShoppingListItem {
        ShoppingListItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "Pantry".to_string(),
        }
    }

    fn ids<T: ListEntry>(items: &[T]) -> Vec<&str> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_append_update_remove_replay() {
        let mut items = Vec::new();
        append(&mut items, pantry_item("a", "Milk", "Dairy"));
        append(&mut items, pantry_item("b", "Eggs", "Dairy"));
        update(&mut items, "a", |item| item.quantity = 3.0);
        remove(&mut items, "b");
        append(&mut items, pantry_item("c", "Flour", "Bakery"));

        assert_eq!(ids(&items), vec!["a", "c"]);
        assert_eq!(items[0].quantity, 3.0);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut items = vec![pantry_item("a", "Milk", "Dairy")];
        update(&mut items, "nope", |item| item.quantity = 99.0);
        assert_eq!(items[0].quantity, 1.0);
    }

    #[test]
    fn test_remove_missing_id_leaves_others_intact() {
        let mut items = vec![pantry_item("a", "Milk", "Dairy"), pantry_item("b", "Eggs", "Dairy")];
        remove(&mut items, "nope");
        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_reorder_applies_full_permutation() {
        let mut items = vec![
            shopping_item("a", "Milk"),
            shopping_item("b", "Eggs"),
            shopping_item("c", "Flour"),
        ];
        let order = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        assert!(reorder(&mut items, &order));
        assert_eq!(ids(&items), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_rejects_wrong_id_set() {
        let mut items = vec![shopping_item("a", "Milk"), shopping_item("b", "Eggs")];

        // missing an id
        assert!(!reorder(&mut items, &["a".to_string()]));
        // unknown id
        assert!(!reorder(&mut items, &["a".to_string(), "x".to_string()]));
        // duplicated id
        assert!(!reorder(&mut items, &["a".to_string(), "a".to_string()]));

        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_order_after_drag_moves_to_slot() {
        let ids: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            order_after_drag(&ids, "d", 0).unwrap(),
            vec!["d", "a", "b", "c"]
        );
        assert_eq!(
            order_after_drag(&ids, "a", 2).unwrap(),
            vec!["b", "c", "a", "d"]
        );
        assert!(order_after_drag(&ids, "zzz", 0).is_none());
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive_and_stable() {
        let items = vec![
            shopping_item("1", "banana"),
            shopping_item("2", "Apple"),
            shopping_item("3", "apple"),
        ];
        let view = sorted(&items, SortOption::Name);
        // "Apple" and "apple" compare equal case-folded; insertion order kept
        assert_eq!(ids(&view), vec!["2", "3", "1"]);
        // projection does not touch the source
        assert_eq!(ids(&items), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_by_category_breaks_ties_by_name() {
        let mut items = vec![
            pantry_item("1", "Yogurt", "Dairy"),
            pantry_item("2", "Bread", "Bakery"),
            pantry_item("3", "Cheese", "Dairy"),
        ];
        let view = sorted(&items, SortOption::Category);
        assert_eq!(ids(&view), vec!["2", "3", "1"]);
        // Default returns stored order untouched
        let default_view = sorted(&items, SortOption::Default);
        assert_eq!(ids(&default_view), vec!["1", "2", "3"]);
        // and reorder still works on the untouched source afterwards
        assert!(reorder(&mut items, &["3".to_string(), "1".to_string(), "2".to_string()]));
    }

    #[test]
    fn test_owned_names_is_folded_union() {
        let mut pantry = Vec::new();
        let mut shopping = Vec::new();
        assert!(owned_names(&pantry, &shopping).is_empty());

        append(&mut pantry, pantry_item("p1", "Milk", "Dairy"));
        let owned = owned_names(&pantry, &shopping);
        assert_eq!(owned, HashSet::from(["milk".to_string()]));

        append(&mut shopping, shopping_item("s1", "Eggs"));
        let owned = owned_names(&pantry, &shopping);
        assert_eq!(owned, HashSet::from(["milk".to_string(), "eggs".to_string()]));

        // tracks interleaved mutations of either collection
        remove(&mut pantry, "p1");
        let owned = owned_names(&pantry, &shopping);
        assert_eq!(owned, HashSet::from(["eggs".to_string()]));
    }

    #[test]
    fn test_infer_category_keyword_table() {
        assert_eq!(infer_category("milk"), "Dairy");
        assert_eq!(infer_category("cream cheese"), "Dairy");
        assert_eq!(infer_category("chicken breast"), "Meat");
        assert_eq!(infer_category("ground beef"), "Meat");
        assert_eq!(infer_category("romaine lettuce"), "Produce");
        assert_eq!(infer_category("apple"), "Produce");
        assert_eq!(infer_category("flour"), "Pantry");
        // substring matching is deliberately coarse
        assert_eq!(infer_category("cheesecake"), "Dairy");
    }

    fn recipe_with(ingredients: &[(&str, &str)]) -> Recipe {
        Recipe {
            id: "r1".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            ingredients: ingredients
                .iter()
                .map(|(name, amount)| RecipeIngredient {
                    name: name.to_string(),
                    amount: amount.to_string(),
                })
                .collect(),
            instructions: String::new(),
        }
    }

    #[test]
    fn test_missing_ingredients_skips_owned() {
        let recipe = recipe_with(&[("Milk", "1 cup"), ("flour", "2 cups")]);
        let pantry = vec![pantry_item("p1", "Milk", "Dairy")];
        let owned = owned_names(&pantry, &[]);

        let missing = missing_ingredients(&recipe, &owned);
        assert_eq!(missing, vec![("flour", "Pantry")]);
    }

    #[test]
    fn test_missing_ingredients_repeats_across_invocations() {
        // No dedup against entries added by a previous call: invoking twice
        // with the same ownership index reports the same set both times.
        let recipe = recipe_with(&[("flour", "2 cups")]);
        let owned = HashSet::new();

        let first = missing_ingredients(&recipe, &owned);
        let second = missing_ingredients(&recipe, &owned);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
