//! Application Models
//!
//! Data structures for the three persisted collections and the
//! fixed option sets used by forms and the recipe assistant.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Lists,
    Recipes,
}

/// View-level sort projection for a list; never mutates stored order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    Default,
    Name,
    Category,
}

/// Pantry quantity unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "pcs")]
    Pcs,
    #[serde(rename = "g")]
    G,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::G => "g",
        }
    }
}

/// Item owned in the pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: Unit,
}

/// Item still to buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    /// Free-text quantity, e.g. "2 cups" or "100g"
    pub amount: String,
}

/// Saved or freshly generated recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    /// Markdown format (bold, italic, bullet lists)
    pub instructions: String,
}

/// Generate a fresh client-side item identifier
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Fixed grocery categories; the recipe parser may also return free text
pub const CATEGORIES: &[&str] = &[
    "Produce",
    "Dairy",
    "Meat",
    "Bakery",
    "Pantry",
    "Frozen",
    "Beverages",
    "Other",
];

/// Recipe preference filters: (prompt key, options)
pub const FILTER_GROUPS: &[(&str, &[&str])] = &[
    ("cookingTime", &["< 15 min", "< 30 min", "< 1 hour", "> 1 hour"]),
    ("cookingMethod", &["Stove-top", "Oven", "Microwave", "Grill", "No-cook"]),
    ("diet", &["None", "Vegetarian", "Vegan", "Gluten-Free", "Keto"]),
    ("calorieGoal", &["< 300", "300-500", "500-700", "> 700"]),
    ("proteinGoal", &["< 10g", "10-20g", "20-40g", "> 40g"]),
];
