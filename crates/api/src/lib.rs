//! HTTP API server for the kitchen work-order service.
//!
//! Provides REST endpoints over the work-order use cases, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::{
    CreateWorkOrderUseCase, DeleteWorkOrderUseCase, GetWorkOrderUseCase, ListWorkOrderUseCase,
    NotificationPort, UpdateWorkOrderUseCase, WorkOrderPort,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::work_orders::AppState;

/// Builds the shared application state over the given port adapters.
pub fn create_state<P, N>(work_orders: P, notifier: N) -> Arc<AppState<P, N>>
where
    P: WorkOrderPort + Clone,
    N: NotificationPort,
{
    Arc::new(AppState {
        create_work_order: CreateWorkOrderUseCase::new(work_orders.clone()),
        get_work_order: GetWorkOrderUseCase::new(work_orders.clone()),
        list_work_orders: ListWorkOrderUseCase::new(work_orders.clone()),
        update_work_order: UpdateWorkOrderUseCase::new(work_orders.clone(), notifier),
        delete_work_order: DeleteWorkOrderUseCase::new(work_orders),
    })
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<P, N>(state: Arc<AppState<P, N>>, metrics_handle: PrometheusHandle) -> Router
where
    P: WorkOrderPort + 'static,
    N: NotificationPort + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/work-orders", post(routes::work_orders::create::<P, N>))
        .route("/work-orders", get(routes::work_orders::list::<P, N>))
        .route("/work-orders/{id}", get(routes::work_orders::get_by_id::<P, N>))
        .route("/work-orders/{id}", delete(routes::work_orders::delete_by_id::<P, N>))
        .route(
            "/work-orders/{id}/status",
            put(routes::work_orders::update_status::<P, N>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
