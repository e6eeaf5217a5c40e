//! HTTP router configuration

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::runtime::{
    HttpRuntimeConfig, HttpToolRuntime,
    error::request_id_middleware,
    handlers::{
        get_tool, health::mark_started, health_check, home_page, list_categories, list_tools,
        run_tool, tool_page,
    },
};

impl HttpToolRuntime {
    /// Create the Axum router with default configuration
    pub fn router(self) -> Router {
        self.router_with_config(&HttpRuntimeConfig::default())
    }

    /// Create the Axum router with all endpoints and middleware
    pub fn router_with_config(self, config: &HttpRuntimeConfig) -> Router {
        mark_started();

        let pages = Router::new()
            .route("/", get(home_page))
            .route("/tools/{slug}", get(tool_page));

        let api = Router::new()
            .route("/api/tools", get(list_tools))
            .route("/api/tools/{slug}", get(get_tool))
            .route("/api/tools/{slug}/run", post(run_tool))
            .route("/api/categories", get(list_categories))
            .route("/health", get(health_check));

        let mut router = Router::new().merge(pages).merge(api).with_state(self);

        #[cfg(feature = "openapi")]
        if config.enable_openapi {
            router = router.merge(create_openapi_router());
        }

        router = router
            .layer(DefaultBodyLimit::max(config.max_body_size))
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http());

        if config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }
}

#[cfg(feature = "openapi")]
fn create_openapi_router() -> Router {
    use crate::runtime::docs::{openapi_spec, swagger_ui};

    Router::new()
        .route("/docs", get(swagger_ui))
        .route("/api-docs/openapi.json", get(openapi_spec))
}
