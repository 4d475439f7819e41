pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod seed;
pub mod update;

use crate::models::Recipe;
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/seed-from-json", post(seed::seed_from_json))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

/// Wire shape of a recipe, shared by every handler that returns one.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub time: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        RecipeResponse {
            id: r.id,
            name: r.name,
            image_url: r.image_url,
            time: r.time,
            description: r.description,
            ingredients: r.ingredients,
            directions: r.directions,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        seed::seed_from_json,
    ),
    components(schemas(
        RecipeResponse,
        create::CreateRecipeRequest,
        update::UpdateRecipeRequest,
        seed::SeedResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_response_uses_camel_case_keys() {
        let response = RecipeResponse::from(Recipe {
            id: Uuid::nil(),
            name: "Shakshuka".to_string(),
            image_url: "https://example.com/shakshuka.jpg".to_string(),
            time: "30 minutes".to_string(),
            description: "Eggs poached in spiced tomato sauce".to_string(),
            ingredients: "eggs, tomatoes, peppers, cumin".to_string(),
            directions: "Simmer the sauce, crack in the eggs, cover".to_string(),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/shakshuka.jpg");
        assert_eq!(json["name"], "Shakshuka");
        assert!(json.get("image_url").is_none());
    }
}
