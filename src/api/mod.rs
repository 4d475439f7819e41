pub mod recipes;

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_covers_all_routes() {
        let spec = openapi();
        let paths: Vec<&str> = spec.paths.paths.keys().map(|p| p.as_str()).collect();

        assert!(paths.contains(&"/api/recipes"));
        assert!(paths.contains(&"/api/recipes/{id}"));
        assert!(paths.contains(&"/api/recipes/seed-from-json"));
    }

    #[test]
    fn test_openapi_serializes() {
        let json = openapi().to_pretty_json().unwrap();
        assert!(json.contains("ErrorResponse"));
    }
}
