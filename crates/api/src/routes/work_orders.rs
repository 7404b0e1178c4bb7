//! Work-order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use domain::{
    CreateWorkOrderCommand, CreateWorkOrderItemCommand, CreateWorkOrderUseCase,
    DeleteWorkOrderCommand, DeleteWorkOrderUseCase, GetWorkOrderCommand, GetWorkOrderUseCase,
    ListWorkOrderCommand, ListWorkOrderUseCase, NotificationPort, UpdateWorkOrderCommand,
    UpdateWorkOrderUseCase, WorkOrderOutput, WorkOrderPort,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<P, N> {
    pub create_work_order: CreateWorkOrderUseCase<P>,
    pub get_work_order: GetWorkOrderUseCase<P>,
    pub list_work_orders: ListWorkOrderUseCase<P>,
    pub update_work_order: UpdateWorkOrderUseCase<P, N>,
    pub delete_work_order: DeleteWorkOrderUseCase<P>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateWorkOrderRequest {
    pub id: String,
    pub order_number: String,
    pub items: Vec<WorkOrderItemRequest>,
}

#[derive(Deserialize)]
pub struct WorkOrderItemRequest {
    pub name: String,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct UpdateWorkOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct ListWorkOrdersQuery {
    pub status: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct WorkOrderResponse {
    pub id: String,
    pub order_number: String,
    pub items: Vec<WorkOrderItemResponse>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct WorkOrderItemResponse {
    pub name: String,
    pub quantity: u32,
}

impl From<WorkOrderOutput> for WorkOrderResponse {
    fn from(output: WorkOrderOutput) -> Self {
        Self {
            id: output.id,
            order_number: output.order_number,
            items: output
                .items
                .into_iter()
                .map(|item| WorkOrderItemResponse {
                    name: item.name,
                    quantity: item.quantity,
                })
                .collect(),
            status: output.status.to_string(),
            created_at: output.created_at,
            updated_at: output.updated_at,
        }
    }
}

// -- Handlers --

/// POST /work-orders — open a work order for an accepted order.
#[tracing::instrument(skip(state, request))]
pub async fn create<P, N>(
    State(state): State<Arc<AppState<P, N>>>,
    Json(request): Json<CreateWorkOrderRequest>,
) -> Result<StatusCode, ApiError>
where
    P: WorkOrderPort + 'static,
    N: NotificationPort + 'static,
{
    let command = CreateWorkOrderCommand {
        id: request.id,
        order_number: request.order_number,
        items: request
            .items
            .into_iter()
            .map(|item| CreateWorkOrderItemCommand {
                name: item.name,
                quantity: item.quantity,
            })
            .collect(),
    };

    state.create_work_order.execute(command).await?;
    Ok(StatusCode::CREATED)
}

/// GET /work-orders/{id} — load a work order by id.
#[tracing::instrument(skip(state))]
pub async fn get_by_id<P, N>(
    State(state): State<Arc<AppState<P, N>>>,
    Path(id): Path<String>,
) -> Result<Json<WorkOrderResponse>, ApiError>
where
    P: WorkOrderPort + 'static,
    N: NotificationPort + 'static,
{
    let output = state
        .get_work_order
        .execute(GetWorkOrderCommand { id })
        .await?;
    Ok(Json(WorkOrderResponse::from(output)))
}

/// GET /work-orders?status=S — list work orders in a status.
#[tracing::instrument(skip(state, query))]
pub async fn list<P, N>(
    State(state): State<Arc<AppState<P, N>>>,
    Query(query): Query<ListWorkOrdersQuery>,
) -> Result<Json<Vec<WorkOrderResponse>>, ApiError>
where
    P: WorkOrderPort + 'static,
    N: NotificationPort + 'static,
{
    let outputs = state
        .list_work_orders
        .execute(ListWorkOrderCommand {
            status: query.status,
        })
        .await?;
    Ok(Json(outputs.into_iter().map(WorkOrderResponse::from).collect()))
}

/// PUT /work-orders/{id}/status — move a work order to a new status.
#[tracing::instrument(skip(state, request))]
pub async fn update_status<P, N>(
    State(state): State<Arc<AppState<P, N>>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateWorkOrderStatusRequest>,
) -> Result<StatusCode, ApiError>
where
    P: WorkOrderPort + 'static,
    N: NotificationPort + 'static,
{
    state
        .update_work_order
        .execute(UpdateWorkOrderCommand {
            id,
            status: request.status,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /work-orders/{id} — remove a work order.
#[tracing::instrument(skip(state))]
pub async fn delete_by_id<P, N>(
    State(state): State<Arc<AppState<P, N>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    P: WorkOrderPort + 'static,
    N: NotificationPort + 'static,
{
    state
        .delete_work_order
        .execute(DeleteWorkOrderCommand { id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
