//! Workout plan handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use studiofit_auth::access::RouteId;
use studiofit_core::error::AppError;
use studiofit_database::{InstructorStore, WorkoutStore};
use studiofit_entity::principal::Role;
use studiofit_entity::workout::{CreateWorkout, UpdateWorkout};

use crate::dto::request::{CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::dto::response::{ApiResponse, WorkoutResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentIdentity;
use crate::state::AppState;

/// POST /api/workouts
///
/// The ownership gate runs against the assigned trainee: an instructor can
/// only create plans for trainees they supervise.
pub async fn create_workout(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<Json<ApiResponse<WorkoutResponse>>> {
    state
        .access
        .authorize(RouteId::WorkoutCreate, identity.get(), Some(req.trainee_id))
        .await?;
    let who = identity.require()?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let instructor = state
        .stores
        .instructors
        .find_by_email(&who.identifier)
        .await?
        .ok_or_else(|| AppError::not_found("Instructor record not found"))?;

    let workout = state
        .stores
        .workouts
        .create(CreateWorkout {
            name: req.name,
            notes: req.notes,
            trainee_id: req.trainee_id,
            instructor_id: instructor.id,
        })
        .await?;

    Ok(Json(ApiResponse::ok(workout.into())))
}

/// GET /api/workouts
///
/// An instructor sees the plans they created; a trainee sees the plans
/// assigned to them.
pub async fn list_workouts(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> ApiResult<Json<ApiResponse<Vec<WorkoutResponse>>>> {
    state
        .access
        .authorize(RouteId::WorkoutList, identity.get(), None)
        .await?;
    let who = identity.require()?;

    let workouts = match who.role {
        Role::Instructor => {
            state
                .stores
                .workouts
                .list_by_instructor_email(&who.identifier)
                .await?
        }
        _ => {
            state
                .stores
                .workouts
                .list_by_trainee_email(&who.identifier)
                .await?
        }
    };

    Ok(Json(ApiResponse::ok(
        workouts.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/workouts/{id}
pub async fn get_workout(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<WorkoutResponse>>> {
    state
        .access
        .authorize(RouteId::WorkoutDetail, identity.get(), Some(id))
        .await?;

    let workout = state
        .stores
        .workouts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Workout not found"))?;

    Ok(Json(ApiResponse::ok(workout.into())))
}

/// PUT /api/workouts/{id}
pub async fn update_workout(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> ApiResult<Json<ApiResponse<WorkoutResponse>>> {
    state
        .access
        .authorize(RouteId::WorkoutUpdate, identity.get(), Some(id))
        .await?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let workout = state
        .stores
        .workouts
        .update(
            id,
            UpdateWorkout {
                name: req.name,
                notes: req.notes,
            },
        )
        .await?
        .ok_or_else(|| AppError::not_found("Workout not found"))?;

    Ok(Json(ApiResponse::ok(workout.into())))
}

/// DELETE /api/workouts/{id}
pub async fn delete_workout(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .access
        .authorize(RouteId::WorkoutDelete, identity.get(), Some(id))
        .await?;

    if !state.stores.workouts.delete(id).await? {
        return Err(AppError::not_found("Workout not found").into());
    }

    Ok(StatusCode::NO_CONTENT)
}
