//! HTML page handlers

use std::collections::BTreeMap;

use axum::{
    Extension,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use toolbox_core::{Category, ToolCall, ToolDescriptor};

use crate::runtime::{HttpToolRuntime, error::RequestIdExtension, render};

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub q: Option<String>,
}

fn group<'a>(tools: Vec<&'a ToolDescriptor>) -> BTreeMap<Category, Vec<&'a ToolDescriptor>> {
    let mut groups: BTreeMap<Category, Vec<&ToolDescriptor>> = BTreeMap::new();
    for descriptor in tools {
        groups.entry(descriptor.category).or_default().push(descriptor);
    }
    groups
}

/// GET / - Catalog grouped by category, optionally filtered by `?q=`
pub async fn home_page(
    State(runtime): State<HttpToolRuntime>,
    Query(query): Query<HomeQuery>,
) -> Html<String> {
    let registry = &runtime.tool_registry;
    let needle = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let groups = match needle {
        Some(q) => group(registry.search(q)),
        None => registry.tools_by_category(),
    };

    Html(render::home_page(&groups, needle))
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolPageQuery {
    pub input: Option<String>,
}

/// GET /tools/{slug} - Tool page; `?input=` runs the tool and shows the result
pub async fn tool_page(
    State(runtime): State<HttpToolRuntime>,
    Path(slug): Path<String>,
    Extension(RequestIdExtension(request_id)): Extension<RequestIdExtension>,
    Query(query): Query<ToolPageQuery>,
) -> Response {
    let registry = &runtime.tool_registry;
    let (Some(descriptor), Some(tool)) = (registry.get_tool_by_slug(&slug), registry.get_tool(&slug))
    else {
        return (StatusCode::NOT_FOUND, Html(render::not_found_page(&slug))).into_response();
    };

    let Some(input) = query.input else {
        return Html(render::tool_page(descriptor, tool.as_ref(), None)).into_response();
    };

    let call = ToolCall::from_slug(descriptor.slug.clone(), input.as_str());
    match runtime.execute(call, &request_id).await {
        Ok(result) => Html(render::tool_page(
            descriptor,
            tool.as_ref(),
            Some((input.as_str(), &result)),
        ))
        .into_response(),
        Err(err) => err.into_response(),
    }
}
