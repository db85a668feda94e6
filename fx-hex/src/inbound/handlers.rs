//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use fx_types::{
    AppError, ConversionLedger, ConvertRequest, CurrencyListResponse, RateClient, TrendRequest,
    TrendResponse,
};

use crate::FxServices;

/// Application state shared across handlers.
pub struct AppState<C: RateClient, L: ConversionLedger> {
    pub services: FxServices<C, L>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::InvalidRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(AppError::InvalidRequest(rejection.body_text()))
    }
}

/// `Json` extractor that fails with an `ApiError` body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor that fails with an `ApiError` body.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::InvalidAmount(_)
            | AppError::InvalidDateRange { .. }
            | AppError::InvalidCurrency(_)
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RangeUnavailable(_) => StatusCode::NOT_FOUND,
            AppError::RateUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List selectable currencies (live or fallback).
#[tracing::instrument(skip(state))]
pub async fn list_currencies<C: RateClient + 'static, L: ConversionLedger>(
    State(state): State<Arc<AppState<C, L>>>,
) -> impl IntoResponse {
    let listing = state.services.catalog.list().await;
    Json(CurrencyListResponse::from(listing))
}

/// Convert an amount and record it.
#[tracing::instrument(skip_all, fields(base = %req.base, target = %req.target, amount = %req.amount))]
pub async fn convert<C: RateClient + 'static, L: ConversionLedger>(
    State(state): State<Arc<AppState<C, L>>>,
    ApiJson(req): ApiJson<ConvertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (base, target) = req.pair().map_err(AppError::from)?;
    let record = state
        .services
        .conversions
        .convert(&base, &target, req.amount)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List the retained conversions, newest first.
#[tracing::instrument(skip(state))]
pub async fn list_conversions<C: RateClient + 'static, L: ConversionLedger>(
    State(state): State<Arc<AppState<C, L>>>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.services.conversions.recent().await?;
    Ok(Json(records))
}

/// Fetch a rate trend for charting.
#[tracing::instrument(skip_all, fields(base = %req.base, target = %req.target, start = %req.start, end = %req.end))]
pub async fn trend<C: RateClient + 'static, L: ConversionLedger>(
    State(state): State<Arc<AppState<C, L>>>,
    ApiQuery(req): ApiQuery<TrendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (base, target) = req.pair().map_err(AppError::from)?;
    let trend = state
        .services
        .trends
        .fetch_trend(&base, &target, req.start, req.end)
        .await?;
    Ok(Json(TrendResponse::from(trend)))
}
