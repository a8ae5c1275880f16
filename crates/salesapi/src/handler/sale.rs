use crate::{
    abstract_trait::sale::service::{DynSaleCommandService, DynSaleQueryService},
    domain::{
        requests::{
            pagination::FindAllQuery,
            sale::{CreateSaleRequest, UpdateSaleRequest},
        },
        response::{pagination::PagedResponse, sale::SaleResponse},
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
    path = "/api/sales",
    tag = "Sale",
    params(FindAllQuery),
    responses(
        (status = 200, description = "One page of sales with total revenue", body = PagedResponse<SaleResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sales(
    Extension(service): Extension<DynSaleQueryService>,
    SimpleQuery(params): SimpleQuery<FindAllQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sale",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale details", body = SaleResponse),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn get_sale(
    Extension(service): Extension<DynSaleQueryService>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sale",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale created", body = SaleResponse),
        (status = 400, description = "Validation error or unknown customer/product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_sale(
    Extension(service): Extension<DynSaleCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_sale(&body).await?;
    let location = format!("/api/sales/{}", response.sale_id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    tag = "Sale",
    params(("id" = i32, Path, description = "Sale ID")),
    request_body = UpdateSaleRequest,
    responses(
        (status = 204, description = "Sale updated"),
        (status = 400, description = "ID mismatch or validation error", body = ErrorResponse),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn update_sale(
    Extension(service): Extension<DynSaleCommandService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_sale(id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sale",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 204, description = "Sale deleted"),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn delete_sale(
    Extension(service): Extension<DynSaleCommandService>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_sale(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn sale_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/sales", get(get_sales).post(create_sale))
        .route(
            "/api/sales/{id}",
            get(get_sale).put(update_sale).delete(delete_sale),
        )
        .layer(Extension(app_state.di_container.sale_query.clone()))
        .layer(Extension(app_state.di_container.sale_command.clone()))
}
