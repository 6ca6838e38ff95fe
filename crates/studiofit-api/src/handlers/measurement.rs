//! Body measurement handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use studiofit_auth::access::RouteId;
use studiofit_core::error::AppError;
use studiofit_database::MeasurementStore;
use studiofit_entity::measurement::{CreateMeasurement, UpdateMeasurement};

use crate::dto::request::{CreateMeasurementRequest, UpdateMeasurementRequest};
use crate::dto::response::{ApiResponse, MeasurementResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// POST /api/measurements
///
/// Ownership gate against the target trainee: only the supervising
/// instructor records measurements.
pub async fn create_measurement(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Json(req): Json<CreateMeasurementRequest>,
) -> ApiResult<Json<ApiResponse<MeasurementResponse>>> {
    state
        .access
        .authorize(
            RouteId::MeasurementCreate,
            identity.get(),
            Some(req.trainee_id),
        )
        .await?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let measurement = state
        .stores
        .measurements
        .create(CreateMeasurement {
            trainee_id: req.trainee_id,
            recorded_on: req.recorded_on,
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
            chest_cm: req.chest_cm,
            waist_cm: req.waist_cm,
            hip_cm: req.hip_cm,
        })
        .await?;

    Ok(Json(ApiResponse::ok(measurement.into())))
}

/// GET /api/measurements/trainee/{trainee_id}
///
/// Newest first.
pub async fn list_for_trainee(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(trainee_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<MeasurementResponse>>>> {
    state
        .access
        .authorize(
            RouteId::MeasurementListForTrainee,
            identity.get(),
            Some(trainee_id),
        )
        .await?;

    let measurements = state
        .stores
        .measurements
        .list_for_trainee(trainee_id, true)
        .await?;

    Ok(Json(ApiResponse::ok(
        measurements.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/measurements/history/{trainee_id}
///
/// Oldest first, for evolution tracking.
pub async fn history_for_trainee(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(trainee_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<MeasurementResponse>>>> {
    state
        .access
        .authorize(
            RouteId::MeasurementHistory,
            identity.get(),
            Some(trainee_id),
        )
        .await?;

    let measurements = state
        .stores
        .measurements
        .list_for_trainee(trainee_id, false)
        .await?;

    Ok(Json(ApiResponse::ok(
        measurements.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/measurements/{id}
pub async fn get_measurement(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MeasurementResponse>>> {
    state
        .access
        .authorize(RouteId::MeasurementDetail, identity.get(), Some(id))
        .await?;

    let measurement = state
        .stores
        .measurements
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Measurement not found"))?;

    Ok(Json(ApiResponse::ok(measurement.into())))
}

/// PUT /api/measurements/{id}
pub async fn update_measurement(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMeasurementRequest>,
) -> ApiResult<Json<ApiResponse<MeasurementResponse>>> {
    state
        .access
        .authorize(RouteId::MeasurementUpdate, identity.get(), Some(id))
        .await?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let measurement = state
        .stores
        .measurements
        .update(
            id,
            UpdateMeasurement {
                recorded_on: req.recorded_on,
                weight_kg: req.weight_kg,
                height_cm: req.height_cm,
                chest_cm: req.chest_cm,
                waist_cm: req.waist_cm,
                hip_cm: req.hip_cm,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("Measurement not found"))?;

    Ok(Json(ApiResponse::ok(measurement.into())))
}

/// DELETE /api/measurements/{id}
pub async fn delete_measurement(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .access
        .authorize(RouteId::MeasurementDelete, identity.get(), Some(id))
        .await?;

    if !state.stores.measurements.delete(id).await? {
        return Err(AppError::not_found("Measurement not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
