//! LocalStorage Persistence
//!
//! Key-to-JSON mirror for the three collections. A value that fails to
//! parse falls back to the caller-supplied default; there is no migration.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const PANTRY_ITEMS_KEY: &str = "pantryItems";
pub const SHOPPING_LIST_ITEMS_KEY: &str = "shoppingListItems";
pub const SAVED_RECIPES_KEY: &str = "savedRecipes";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Read and decode the value stored under `key`, falling back to `default`
/// when the key is absent or the stored JSON does not parse.
pub fn load_or<T: DeserializeOwned>(key: &str, default: T) -> T {
    let Some(storage) = local_storage() else {
        return default;
    };
    match storage.get_item(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[Storage] Discarding unparseable value for {key}: {err}").into(),
                );
                default
            }
        },
        _ => default,
    }
}

/// Serialize `value` and write it under `key`.
pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                web_sys::console::error_1(&format!("[Storage] Failed to write {key}").into());
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[Storage] Failed to serialize {key}: {err}").into());
        }
    }
}
