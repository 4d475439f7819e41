use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::ApiError;
use crate::models::NewRecipe;
use crate::schema::recipes;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Bundled seed document, resolved against the process working directory.
pub const SEED_FILE_PATH: &str = "data/recipes.json";

/// One entry in the seed document. Ids are optional; when present they are
/// inserted as-is with no conflict check against existing rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecipe {
    pub id: Option<Uuid>,
    pub name: String,
    pub image_url: String,
    pub time: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

fn parse_seed_document(raw: &str) -> Result<Vec<SeedRecipe>, ApiError> {
    let records: Vec<SeedRecipe> = serde_json::from_str(raw)
        .map_err(|e| ApiError::Internal(format!("Failed to parse seed file: {e}")))?;

    if records.is_empty() {
        return Err(ApiError::bad_request("No recipes found in the JSON file"));
    }

    Ok(records)
}

#[utoipa::path(
    post,
    path = "/api/recipes/seed-from-json",
    tag = "recipes",
    responses(
        (status = 200, description = "Database seeded successfully", body = SeedResponse),
        (status = 400, description = "Seed file contains no recipes", body = ErrorResponse),
        (status = 404, description = "Seed file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn seed_from_json(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<SeedResponse>, ApiError> {
    tracing::info!(path = SEED_FILE_PATH, "seeding database from JSON file");

    let path = Path::new(SEED_FILE_PATH);
    if !path.exists() {
        return Err(ApiError::not_found(format!(
            "JSON file not found at {SEED_FILE_PATH}"
        )));
    }

    let raw = std::fs::read_to_string(path)?;
    let records = parse_seed_document(&raw)?;

    let mut conn = pool.get()?;

    // All rows go in or none do.
    let count = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
        let rows: Vec<NewRecipe> = records
            .iter()
            .map(|r| NewRecipe {
                id: r.id,
                name: &r.name,
                image_url: &r.image_url,
                time: &r.time,
                description: &r.description,
                ingredients: &r.ingredients,
                directions: &r.directions,
            })
            .collect();

        diesel::insert_into(recipes::table)
            .values(&rows)
            .execute(conn)
    })?;

    tracing::info!(count, "database seeded successfully");

    Ok(Json(SeedResponse {
        message: "Database seeded successfully".to_string(),
        count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_document_without_ids() {
        let raw = r#"[
            {
                "name": "Pancakes",
                "imageUrl": "https://example.com/pancakes.jpg",
                "time": "20 minutes",
                "description": "Fluffy breakfast pancakes",
                "ingredients": "flour, milk, eggs, baking powder",
                "directions": "Whisk, ladle onto a hot griddle, flip once"
            }
        ]"#;

        let records = parse_seed_document(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Pancakes");
        assert_eq!(records[0].image_url, "https://example.com/pancakes.jpg");
        assert!(records[0].id.is_none());
    }

    #[test]
    fn test_parse_seed_document_with_supplied_id() {
        let raw = r#"[
            {
                "id": "7b1f8a3e-4f2a-4a77-9c6f-2d6a1f0b5c4d",
                "name": "Minestrone",
                "imageUrl": "https://example.com/minestrone.jpg",
                "time": "1 hour",
                "description": "Vegetable soup with pasta",
                "ingredients": "beans, tomatoes, pasta, celery",
                "directions": "Simmer everything until tender"
            }
        ]"#;

        let records = parse_seed_document(raw).unwrap();
        assert_eq!(
            records[0].id,
            Some("7b1f8a3e-4f2a-4a77-9c6f-2d6a1f0b5c4d".parse().unwrap())
        );
    }

    #[test]
    fn test_parse_seed_document_rejects_empty_array() {
        let err = parse_seed_document("[]").unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_seed_document_malformed_json_is_internal() {
        let err = parse_seed_document("{not json").unwrap_err();
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_seed_document_missing_field_is_internal() {
        // "directions" absent
        let raw = r#"[{"name": "x", "imageUrl": "y", "time": "z", "description": "d", "ingredients": "i"}]"#;
        let err = parse_seed_document(raw).unwrap_err();
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bundled_seed_file_parses() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let raw = std::fs::read_to_string(manifest_dir.join(SEED_FILE_PATH))
            .expect("bundled seed file should exist");
        let records = parse_seed_document(&raw).unwrap();
        assert!(!records.is_empty());
    }
}
