use super::RecipeResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    tracing::info!("fetching all recipes");

    let mut conn = pool.get()?;

    // No ordering guarantee; callers get whatever the store returns.
    let results: Vec<Recipe> = recipes::table
        .select(Recipe::as_select())
        .load(&mut conn)?;

    Ok(Json(results.into_iter().map(RecipeResponse::from).collect()))
}
