//! Gemini Client
//!
//! Request/response boundary to the Google Generative Language API.
//! Both operations request JSON output constrained by an explicit response
//! schema, and both decode the payload all-or-nothing: a response that does
//! not match the expected shape is a hard failure and nothing is merged.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{new_item_id, PantryItem, Recipe, RecipeIngredient, CATEGORIES};

const GEMINI_MODEL: &str = "gemini-2.5-pro";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Compile-time API credential. Missing key is fatal at startup:
/// `main` checks this before mounting anything.
pub fn api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY")
}

/// Failure at the recipe-service boundary, normalized to one
/// user-readable message per kind. Never retried automatically.
#[derive(Debug, Error)]
pub enum GeniusError {
    #[error("Could not reach the recipe service. Please try again.")]
    Request(String),
    #[error("The recipe service rejected the request. Please try again.")]
    Status(u16),
    #[error("The recipe service returned an unexpected answer. Please try again.")]
    Schema(String),
}

/// One ingredient from the recipe parser
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParsedIngredient {
    pub name: String,
    pub amount: String,
    pub category: String,
}

/// Recipe payload as generated by the service, before a local id is assigned
#[derive(Debug, Clone, Deserialize)]
struct GeneratedRecipe {
    name: String,
    description: String,
    ingredients: Vec<RecipeIngredient>,
    instructions: String,
}

impl GeneratedRecipe {
    fn into_recipe(self, id: String) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

// ========================
// Prompts & response schemas
// ========================

fn build_recipe_prompt(items: &[PantryItem], strict_mode: bool, filters: &[(String, String)]) -> String {
    let ingredients_list = items
        .iter()
        .map(|item| format!("{} ({}{})", item.name, item.quantity, item.unit.label()))
        .collect::<Vec<_>>()
        .join(", ");
    let strictness = if strict_mode {
        "You MUST only use the provided ingredients. You can assume common staples like oil, salt, pepper are available."
    } else {
        "You can suggest 1-2 additional common ingredients if it significantly improves the recipe."
    };
    let filter_string = filters
        .iter()
        .filter(|(_, value)| !value.is_empty() && value != "None")
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a creative chef. Generate a single recipe based on the following criteria.\n\
         Ingredients available: {ingredients_list}.\n\
         Ingredient usage rule: {strictness}.\n\
         Recipe preferences: {filter_string}.\n\n\
         Provide the response in the exact JSON format specified. The instructions should be a single string in Markdown format."
    )
}

fn build_parse_prompt(recipe_text: &str, servings: u32) -> String {
    let categories = CATEGORIES.join(", ");
    format!(
        "Analyze the following recipe text. Adjust the ingredient quantities for {servings} servings.\n\
         For each ingredient, provide a normalized name (e.g., \"all-purpose flour\" becomes \"flour\"), \
         the adjusted quantity as a string (e.g., \"2 cups\"), and assign it a category from this list: {categories}.\n\
         Return the result as a JSON array.\n\n\
         Recipe Text:\n---\n{recipe_text}\n---"
    )
}

fn recipe_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "The creative name of the recipe." },
            "description": { "type": "STRING", "description": "A short, enticing description of the dish." },
            "ingredients": {
                "type": "ARRAY",
                "description": "A list of all ingredients required for the recipe.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "The name of the ingredient." },
                        "amount": { "type": "STRING", "description": "The quantity and unit, e.g., \"2 cups\" or \"100g\"." }
                    },
                    "required": ["name", "amount"]
                }
            },
            "instructions": { "type": "STRING", "description": "Step-by-step cooking instructions in Markdown format." }
        },
        "required": ["name", "description", "ingredients", "instructions"]
    })
}

fn ingredients_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "The normalized name of the ingredient." },
                "amount": { "type": "STRING", "description": "The adjusted quantity for the specified servings." },
                "category": { "type": "STRING", "description": "The grocery category for the ingredient." }
            },
            "required": ["name", "amount", "category"]
        }
    })
}

fn request_body(prompt: &str, schema: Value) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

// ========================
// Response decoding
// ========================

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

fn first_candidate_text(envelope: &GenerateContentResponse) -> Result<String, GeniusError> {
    let candidate = envelope
        .candidates
        .first()
        .ok_or_else(|| GeniusError::Schema("response contained no candidates".to_string()))?;
    if candidate.content.parts.is_empty() {
        return Err(GeniusError::Schema("candidate contained no parts".to_string()));
    }
    Ok(candidate
        .content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect())
}

fn decode_recipe(payload: &str) -> Result<GeneratedRecipe, GeniusError> {
    serde_json::from_str(payload).map_err(|err| GeniusError::Schema(err.to_string()))
}

fn decode_ingredients(payload: &str) -> Result<Vec<ParsedIngredient>, GeniusError> {
    serde_json::from_str(payload).map_err(|err| GeniusError::Schema(err.to_string()))
}

// ========================
// Transport
// ========================

fn request_err(value: JsValue) -> GeniusError {
    GeniusError::Request(format!("{value:?}"))
}

async fn generate_content(prompt: String, schema: Value) -> Result<String, GeniusError> {
    let key = api_key().ok_or_else(|| GeniusError::Request("no API key".to_string()))?;
    let body = request_body(&prompt, schema).to_string();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{API_BASE}/models/{GEMINI_MODEL}:generateContent");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(request_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(request_err)?;
    request
        .headers()
        .set("x-goog-api-key", key)
        .map_err(request_err)?;

    let window = web_sys::window().ok_or_else(|| GeniusError::Request("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_err)?
        .dyn_into()
        .map_err(request_err)?;

    if !response.ok() {
        return Err(GeniusError::Status(response.status()));
    }

    let payload = JsFuture::from(response.json().map_err(request_err)?)
        .await
        .map_err(request_err)?;
    let envelope: GenerateContentResponse = serde_wasm_bindgen::from_value(payload)
        .map_err(|err| GeniusError::Schema(err.to_string()))?;
    first_candidate_text(&envelope)
}

// ========================
// Operations
// ========================

/// Generate a recipe from the selected pantry items. The result carries a
/// freshly assigned local id; generation is non-deterministic, so identical
/// inputs may yield different recipes and results are never cached.
pub async fn generate_recipe(
    items: &[PantryItem],
    strict_mode: bool,
    filters: &[(String, String)],
) -> Result<Recipe, GeniusError> {
    let prompt = build_recipe_prompt(items, strict_mode, filters);
    let text = generate_content(prompt, recipe_response_schema()).await.map_err(log_err)?;
    let generated = decode_recipe(&text).map_err(log_err)?;
    Ok(generated.into_recipe(new_item_id()))
}

/// Parse free recipe text into categorized ingredients scaled to `servings`.
pub async fn parse_recipe_for_shopping_list(
    recipe_text: &str,
    servings: u32,
) -> Result<Vec<ParsedIngredient>, GeniusError> {
    let prompt = build_parse_prompt(recipe_text, servings);
    let text = generate_content(prompt, ingredients_response_schema()).await.map_err(log_err)?;
    decode_ingredients(&text).map_err(log_err)
}

fn log_err(err: GeniusError) -> GeniusError {
    web_sys::console::error_1(&format!("[Gemini] {err:?}").into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn pantry_item(name: &str, quantity: f64, unit: Unit) -> PantryItem {
        PantryItem {
            id: "p1".to_string(),
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity,
            unit,
        }
    }

    #[test]
    fn test_recipe_prompt_embeds_items_with_quantity_and_unit() {
        let items = vec![
            pantry_item("Milk", 2.0, Unit::Pcs),
            pantry_item("Flour", 500.0, Unit::G),
        ];
        let prompt = build_recipe_prompt(&items, false, &[]);
        assert!(prompt.contains("Ingredients available: Milk (2pcs), Flour (500g)."));
    }

    #[test]
    fn test_recipe_prompt_strictness_wording() {
        let items = vec![pantry_item("Milk", 1.0, Unit::Pcs)];
        let strict = build_recipe_prompt(&items, true, &[]);
        assert!(strict.contains("MUST only use the provided ingredients"));

        let lenient = build_recipe_prompt(&items, false, &[]);
        assert!(lenient.contains("1-2 additional common ingredients"));
    }

    #[test]
    fn test_recipe_prompt_omits_empty_and_none_filters() {
        let items = vec![pantry_item("Milk", 1.0, Unit::Pcs)];
        let filters = vec![
            ("cookingTime".to_string(), "< 30 min".to_string()),
            ("cookingMethod".to_string(), String::new()),
            ("diet".to_string(), "None".to_string()),
        ];
        let prompt = build_recipe_prompt(&items, false, &filters);
        assert!(prompt.contains("Recipe preferences: cookingTime: < 30 min."));
        assert!(!prompt.contains("cookingMethod"));
        assert!(!prompt.contains("diet: None"));
    }

    #[test]
    fn test_parse_prompt_carries_servings_and_categories() {
        let prompt = build_parse_prompt("Pancakes: flour, milk, eggs", 6);
        assert!(prompt.contains("for 6 servings"));
        assert!(prompt.contains("Produce, Dairy, Meat, Bakery, Pantry, Frozen, Beverages, Other"));
        assert!(prompt.contains("Pancakes: flour, milk, eggs"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("hello", ingredients_response_schema());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn test_decode_recipe_accepts_conforming_payload() {
        let payload = r#"{
            "name": "Pancakes",
            "description": "Fluffy.",
            "ingredients": [{"name": "flour", "amount": "2 cups"}],
            "instructions": "- Mix\n- Fry"
        }"#;
        let generated = decode_recipe(payload).unwrap();
        assert_eq!(generated.name, "Pancakes");
        assert_eq!(generated.ingredients.len(), 1);

        let recipe = generated.into_recipe("r9".to_string());
        assert_eq!(recipe.id, "r9");
        assert_eq!(recipe.ingredients[0].amount, "2 cups");
    }

    #[test]
    fn test_decode_recipe_rejects_missing_field() {
        // no instructions
        let payload = r#"{
            "name": "Pancakes",
            "description": "Fluffy.",
            "ingredients": []
        }"#;
        assert!(matches!(decode_recipe(payload), Err(GeniusError::Schema(_))));
    }

    #[test]
    fn test_decode_ingredients_is_all_or_nothing() {
        let good = r#"[
            {"name": "flour", "amount": "2 cups", "category": "Bakery"},
            {"name": "milk", "amount": "1 cup", "category": "Dairy"}
        ]"#;
        let parsed = decode_ingredients(good).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].category, "Dairy");

        // one element missing `category` fails the whole payload
        let bad = r#"[
            {"name": "flour", "amount": "2 cups", "category": "Bakery"},
            {"name": "milk", "amount": "1 cup"}
        ]"#;
        assert!(matches!(decode_ingredients(bad), Err(GeniusError::Schema(_))));
    }

    #[test]
    fn test_candidate_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]}}
            ]
        }"#;
        let envelope: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_candidate_text(&envelope).unwrap(), "{\"a\":1}");

        let empty: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(first_candidate_text(&empty), Err(GeniusError::Schema(_))));
    }
}
