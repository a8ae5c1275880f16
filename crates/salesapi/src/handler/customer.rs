use crate::{
    abstract_trait::customer::service::{DynCustomerCommandService, DynCustomerQueryService},
    domain::{
        requests::{
            pagination::FindAllQuery,
            customer::{CreateCustomerRequest, UpdateCustomerRequest},
        },
        response::{pagination::PagedResponse, customer::CustomerResponse},
    },
    middleware::{
        extract::{SimplePath, SimpleQuery},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customer",
    params(FindAllQuery),
    responses(
        (status = 200, description = "One page of customers", body = PagedResponse<CustomerResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerQueryService>,
    SimpleQuery(params): SimpleQuery<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerQueryService>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_customer(&body).await?;
    let location = format!("/api/customers/{}", response.customer_id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 204, description = "Customer updated"),
        (status = 400, description = "ID mismatch or validation error", body = ErrorResponse),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_customer(id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, description = "Customer has existing sales", body = ErrorResponse),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .layer(Extension(app_state.di_container.customer_query.clone()))
        .layer(Extension(app_state.di_container.customer_command.clone()))
}
