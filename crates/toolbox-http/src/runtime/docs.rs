//! OpenAPI specification and Swagger UI endpoints

use axum::response::{Html, Json};
use utoipa::OpenApi;

use crate::runtime::{
    api_types::{CategorySummary, RunToolRequest, RunToolResponse, ToolDetail, ToolSummary},
    error::ErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::runtime::handlers::health::health_check,
        crate::runtime::handlers::tools::list_tools,
        crate::runtime::handlers::tools::get_tool,
        crate::runtime::handlers::tools::run_tool,
        crate::runtime::handlers::tools::list_categories
    ),
    components(
        schemas(
            ToolSummary,
            ToolDetail,
            CategorySummary,
            RunToolRequest,
            RunToolResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "tools", description = "Catalog listing and tool execution"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Toolbox Online API",
        description = "Run the Toolbox utilities over HTTP"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// GET /docs - Swagger UI for interactive API documentation
pub async fn swagger_ui() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Toolbox Online API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        SwaggerUIBundle({
            url: '/api-docs/openapi.json',
            dom_id: '#swagger-ui',
            presets: [SwaggerUIBundle.presets.apis]
        });
    </script>
</body>
</html>
"#,
    )
}

/// GET /api-docs/openapi.json - OpenAPI specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_json_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/tools",
            "/api/tools/{slug}",
            "/api/tools/{slug}/run",
            "/api/categories",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert_eq!(doc.info.title, "Toolbox Online API");
    }
}
