//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod header;
mod import_recipe_modal;
mod modal;
mod pantry_list;
mod recipe_card;
mod recipe_genius;
mod shopping_list;
mod toast;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use import_recipe_modal::ImportRecipeModal;
pub use modal::Modal;
pub use pantry_list::PantryList;
pub use recipe_card::RecipeCard;
pub use recipe_genius::RecipeGenius;
pub use shopping_list::ShoppingList;
pub use toast::Toast;
