use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted successfully"),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(recipe_id = %id, "deleting recipe");

    let mut conn = pool.get()?;

    let deleted = diesel::delete(recipes::table.find(id)).execute(&mut conn)?;

    if deleted == 0 {
        return Err(ApiError::not_found("Recipe not found"));
    }

    tracing::info!(recipe_id = %id, "recipe deleted successfully");

    Ok(StatusCode::OK)
}
