use super::RecipeResponse;
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::{Recipe, RecipeChangeset};
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub name: String,
    pub image_url: String,
    pub time: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    tracing::info!(recipe_id = %id, "updating recipe");

    let mut conn = pool.get()?;

    let changes = RecipeChangeset {
        name: &request.name,
        image_url: &request.image_url,
        time: &request.time,
        description: &request.description,
        ingredients: &request.ingredients,
        directions: &request.directions,
    };

    // All six fields are overwritten together; last write wins on
    // concurrent updates to the same id.
    let updated: Recipe = diesel::update(recipes::table.find(id))
        .set(&changes)
        .returning(Recipe::as_returning())
        .get_result(&mut conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("Recipe not found"))?;

    tracing::info!(recipe_id = %id, "recipe updated successfully");

    Ok(Json(updated.into()))
}
