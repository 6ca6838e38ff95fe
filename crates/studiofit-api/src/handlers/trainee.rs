//! Trainee record handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use studiofit_auth::access::RouteId;
use studiofit_core::error::AppError;
use studiofit_database::TraineeStore;
use studiofit_entity::principal::Role;

use crate::dto::response::{ApiResponse, TraineeResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// GET /api/trainees
///
/// Staff see the whole roster; an instructor sees only the trainees they
/// supervise.
pub async fn list_trainees(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<TraineeResponse>>>> {
    state
        .access
        .authorize(RouteId::TraineeList, identity.get(), None)
        .await?;
    let who = identity.require()?;

    let trainees = match who.role {
        Role::Instructor => {
            state
                .stores
                .trainees
                .list_by_instructor_email(&who.identifier)
                .await?
        }
        _ => state.stores.trainees.list_all().await?,
    };

    Ok(Json(ApiResponse::ok(
        trainees.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/trainees/{id}
pub async fn get_trainee(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<TraineeResponse>>> {
    state
        .access
        .authorize(RouteId::TraineeDetail, identity.get(), Some(id))
        .await?;

    let trainee = state
        .stores
        .trainees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Trainee not found"))?;

    Ok(Json(ApiResponse::ok(trainee.into())))
}
