//! JSON API handlers for the tool catalog

use axum::{
    Extension,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Json,
};
use toolbox_core::{Category, ToolCall, ToolSlug};

use crate::runtime::{
    HttpToolRuntime,
    api_types::{
        CategorySummary, RunToolRequest, RunToolResponse, ToolDetail, ToolListQuery, ToolSummary,
    },
    error::{ErrorResponse, RequestIdExtension, RuntimeError, RuntimeErrorKind, RuntimeResult},
};

/// GET /api/tools - List tools, optionally filtered by search query and category
#[utoipa::path(
    get,
    path = "/api/tools",
    tag = "tools",
    params(ToolListQuery),
    responses(
        (status = 200, description = "Matching tools in catalog order", body = [ToolSummary]),
        (status = 400, description = "Unknown category", body = ErrorResponse)
    )
)]
pub async fn list_tools(
    State(runtime): State<HttpToolRuntime>,
    Extension(RequestIdExtension(request_id)): Extension<RequestIdExtension>,
    Query(query): Query<ToolListQuery>,
) -> RuntimeResult<Json<Vec<ToolSummary>>> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(label) => Some(Category::from_label(label).ok_or_else(|| {
            RuntimeError::new(
                RuntimeErrorKind::InvalidInput {
                    field: "category".to_string(),
                    reason: format!("unknown category '{}'", label),
                },
                request_id.clone(),
            )
        })?),
    };

    let tools = runtime
        .tool_registry
        .search(query.q.as_deref().unwrap_or_default())
        .into_iter()
        .filter(|d| category.is_none_or(|c| d.category == c))
        .map(ToolSummary::from)
        .collect();

    Ok(Json(tools))
}

/// GET /api/tools/{slug} - Full descriptor of one tool
#[utoipa::path(
    get,
    path = "/api/tools/{slug}",
    tag = "tools",
    params(("slug" = String, Path, description = "Tool slug")),
    responses(
        (status = 200, description = "Tool descriptor", body = ToolDetail),
        (status = 404, description = "Tool not found", body = ErrorResponse)
    )
)]
pub async fn get_tool(
    State(runtime): State<HttpToolRuntime>,
    Path(slug): Path<String>,
    Extension(RequestIdExtension(request_id)): Extension<RequestIdExtension>,
) -> RuntimeResult<Json<ToolDetail>> {
    let registry = &runtime.tool_registry;
    match (registry.get_tool_by_slug(&slug), registry.get_tool(&slug)) {
        (Some(descriptor), Some(tool)) => Ok(Json(ToolDetail::new(descriptor, tool.as_ref()))),
        _ => Err(RuntimeError::tool_not_found(slug, request_id)),
    }
}

/// POST /api/tools/{slug}/run - Run a tool
#[utoipa::path(
    post,
    path = "/api/tools/{slug}/run",
    tag = "tools",
    params(("slug" = String, Path, description = "Tool slug")),
    request_body = RunToolRequest,
    responses(
        (status = 200, description = "Tool output", body = RunToolResponse),
        (status = 400, description = "Invalid input or malformed body", body = ErrorResponse),
        (status = 404, description = "Tool or looked-up resource not found", body = ErrorResponse),
        (status = 502, description = "Upstream service failed", body = ErrorResponse),
        (status = 504, description = "Upstream service timed out", body = ErrorResponse)
    )
)]
pub async fn run_tool(
    State(runtime): State<HttpToolRuntime>,
    Path(slug): Path<String>,
    Extension(RequestIdExtension(request_id)): Extension<RequestIdExtension>,
    payload: Result<Json<RunToolRequest>, JsonRejection>,
) -> RuntimeResult<Json<RunToolResponse>> {
    let tool_slug = ToolSlug::parse(&slug)
        .ok()
        .filter(|s| runtime.tool_registry.get_tool_by_slug(s.as_str()).is_some())
        .ok_or_else(|| RuntimeError::tool_not_found(slug.as_str(), request_id.clone()))?;

    let Json(request) =
        payload.map_err(|rejection| RuntimeError::from_json_rejection(rejection, request_id.clone()))?;

    let call = ToolCall::from_slug(tool_slug.clone(), request.into_tool_input());
    let result = runtime.execute(call, &request_id).await?;

    match result.into_result() {
        Ok(output) => Ok(Json(RunToolResponse::new(tool_slug.as_str(), output))),
        Err(reason) => Err(RuntimeError::from_failure(&tool_slug, reason, request_id)),
    }
}

/// GET /api/categories - Categories in label order with their tool slugs
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "tools",
    responses(
        (status = 200, description = "Categories", body = [CategorySummary])
    )
)]
pub async fn list_categories(
    State(runtime): State<HttpToolRuntime>,
) -> Json<Vec<CategorySummary>> {
    let categories = runtime
        .tool_registry
        .tools_by_category()
        .into_iter()
        .map(|(category, tools)| CategorySummary {
            name: category.label().to_string(),
            tool_count: tools.len(),
            tools: tools.iter().map(|d| d.slug.to_string()).collect(),
        })
        .collect();

    Json(categories)
}
