use super::RecipeResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    pub image_url: String,
    pub time: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Recipe created successfully", body = RecipeResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    tracing::info!(name = %request.name, "adding a new recipe");

    let mut conn = pool.get()?;

    let new_recipe = NewRecipe {
        id: None,
        name: &request.name,
        image_url: &request.image_url,
        time: &request.time,
        description: &request.description,
        ingredients: &request.ingredients,
        directions: &request.directions,
    };

    let recipe: Recipe = diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(&mut conn)?;

    tracing::info!(recipe_id = %recipe.id, "recipe added successfully");

    Ok(Json(recipe.into()))
}
