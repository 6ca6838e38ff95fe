//! In-memory record store.
//!
//! Backs local development without a database and the end-to-end tests,
//! the same niche the embedded database filled in earlier deployments of
//! this backend. All five store traits are implemented over one shared
//! set of maps so the ownership chains stay consistent.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use studiofit_core::error::AppError;
use studiofit_core::result::AppResult;
use studiofit_entity::instructor::{CreateInstructor, Instructor};
use studiofit_entity::measurement::{CreateMeasurement, Measurement, UpdateMeasurement};
use studiofit_entity::principal::{CreatePrincipal, Principal};
use studiofit_entity::trainee::{CreateTrainee, Trainee};
use studiofit_entity::workout::{CreateWorkout, UpdateWorkout, Workout};

use super::{InstructorStore, MeasurementStore, PrincipalStore, TraineeStore, WorkoutStore};

#[derive(Debug, Default)]
struct Inner {
    principals: HashMap<Uuid, Principal>,
    instructors: HashMap<Uuid, Instructor>,
    trainees: HashMap<Uuid, Trainee>,
    workouts: HashMap<Uuid, Workout>,
    measurements: HashMap<Uuid, Measurement>,
}

/// In-process record store over `RwLock`-guarded maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    /// Resolve a trainee's supervising instructor record.
    fn instructor_of(&self, trainee: &Trainee) -> Option<&Instructor> {
        self.instructors.get(&trainee.instructor_id)
    }

    /// Account email of the instructor supervising the given trainee id.
    fn supervisor_email(&self, trainee_id: Uuid) -> Option<&str> {
        self.trainees
            .get(&trainee_id)
            .and_then(|t| self.instructor_of(t))
            .map(|i| i.email.as_str())
    }
}

#[async_trait]
impl PrincipalStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Principal>> {
        let inner = self.inner.read().await;
        Ok(inner
            .principals
            .values()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        let inner = self.inner.read().await;
        Ok(inner.principals.len() as u64)
    }

    async fn create(&self, data: CreatePrincipal) -> AppResult<Principal> {
        let mut inner = self.inner.write().await;
        if inner
            .principals
            .values()
            .any(|p| p.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict(format!(
                "Principal with email '{}' already exists",
                data.email
            )));
        }
        let now = Utc::now();
        let principal = Principal {
            id: Uuid::new_v4(),
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        inner.principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        match inner.principals.get_mut(&id) {
            Some(principal) => {
                principal.password_hash = password_hash.to_string();
                principal.updated_at = Utc::now();
                Ok(())
            }
            None => Err(AppError::not_found("Principal not found")),
        }
    }
}

#[async_trait]
impl InstructorStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Instructor>> {
        let inner = self.inner.read().await;
        Ok(inner.instructors.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Instructor>> {
        let inner = self.inner.read().await;
        Ok(inner
            .instructors
            .values()
            .find(|i| i.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, data: CreateInstructor) -> AppResult<Instructor> {
        let mut inner = self.inner.write().await;
        let instructor = Instructor {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            registration: data.registration,
            active: true,
            created_at: Utc::now(),
        };
        inner.instructors.insert(instructor.id, instructor.clone());
        Ok(instructor)
    }
}

#[async_trait]
impl TraineeStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Trainee>> {
        let inner = self.inner.read().await;
        Ok(inner.trainees.get(&id).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Trainee>> {
        let inner = self.inner.read().await;
        let mut trainees: Vec<Trainee> = inner.trainees.values().cloned().collect();
        trainees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(trainees)
    }

    async fn list_by_instructor_email(&self, email: &str) -> AppResult<Vec<Trainee>> {
        let inner = self.inner.read().await;
        let mut trainees: Vec<Trainee> = inner
            .trainees
            .values()
            .filter(|t| {
                inner
                    .instructor_of(t)
                    .is_some_and(|i| i.email.eq_ignore_ascii_case(email))
            })
            .cloned()
            .collect();
        trainees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(trainees)
    }

    async fn exists_supervised_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner
            .supervisor_email(id)
            .is_some_and(|e| e.eq_ignore_ascii_case(instructor_email)))
    }

    async fn exists_with_account(&self, id: Uuid, email: &str) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner
            .trainees
            .get(&id)
            .is_some_and(|t| t.email.eq_ignore_ascii_case(email)))
    }

    async fn create(&self, data: CreateTrainee) -> AppResult<Trainee> {
        let mut inner = self.inner.write().await;
        if !inner.instructors.contains_key(&data.instructor_id) {
            return Err(AppError::not_found("Supervising instructor not found"));
        }
        let now = Utc::now();
        let trainee = Trainee {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            active: true,
            instructor_id: data.instructor_id,
            created_at: now,
            updated_at: now,
        };
        inner.trainees.insert(trainee.id, trainee.clone());
        Ok(trainee)
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Workout>> {
        let inner = self.inner.read().await;
        Ok(inner.workouts.get(&id).cloned())
    }

    async fn list_by_instructor_email(&self, email: &str) -> AppResult<Vec<Workout>> {
        let inner = self.inner.read().await;
        let mut workouts: Vec<Workout> = inner
            .workouts
            .values()
            .filter(|w| {
                inner
                    .instructors
                    .get(&w.instructor_id)
                    .is_some_and(|i| i.email.eq_ignore_ascii_case(email))
            })
            .cloned()
            .collect();
        workouts.sort_by_key(|w| w.created_at);
        Ok(workouts)
    }

    async fn list_by_trainee_email(&self, email: &str) -> AppResult<Vec<Workout>> {
        let inner = self.inner.read().await;
        let mut workouts: Vec<Workout> = inner
            .workouts
            .values()
            .filter(|w| {
                inner
                    .trainees
                    .get(&w.trainee_id)
                    .is_some_and(|t| t.email.eq_ignore_ascii_case(email))
            })
            .cloned()
            .collect();
        workouts.sort_by_key(|w| w.created_at);
        Ok(workouts)
    }

    async fn create(&self, data: CreateWorkout) -> AppResult<Workout> {
        let mut inner = self.inner.write().await;
        if !inner.trainees.contains_key(&data.trainee_id) {
            return Err(AppError::not_found("Trainee not found"));
        }
        let now = Utc::now();
        let workout = Workout {
            id: Uuid::new_v4(),
            name: data.name,
            notes: data.notes,
            trainee_id: data.trainee_id,
            instructor_id: data.instructor_id,
            created_at: now,
            updated_at: now,
        };
        inner.workouts.insert(workout.id, workout.clone());
        Ok(workout)
    }

    async fn update(&self, id: Uuid, data: UpdateWorkout) -> AppResult<Option<Workout>> {
        let mut inner = self.inner.write().await;
        Ok(inner.workouts.get_mut(&id).map(|workout| {
            workout.name = data.name;
            workout.notes = data.notes;
            workout.updated_at = Utc::now();
            workout.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.workouts.remove(&id).is_some())
    }

    async fn exists_created_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.workouts.get(&id).is_some_and(|w| {
            inner
                .instructors
                .get(&w.instructor_id)
                .is_some_and(|i| i.email.eq_ignore_ascii_case(instructor_email))
        }))
    }

    async fn exists_assigned_to(&self, id: Uuid, trainee_email: &str) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.workouts.get(&id).is_some_and(|w| {
            inner
                .trainees
                .get(&w.trainee_id)
                .is_some_and(|t| t.email.eq_ignore_ascii_case(trainee_email))
        }))
    }
}

#[async_trait]
impl MeasurementStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Measurement>> {
        let inner = self.inner.read().await;
        Ok(inner.measurements.get(&id).cloned())
    }

    async fn list_for_trainee(
        &self,
        trainee_id: Uuid,
        newest_first: bool,
    ) -> AppResult<Vec<Measurement>> {
        let inner = self.inner.read().await;
        let mut measurements: Vec<Measurement> = inner
            .measurements
            .values()
            .filter(|m| m.trainee_id == trainee_id)
            .cloned()
            .collect();
        measurements.sort_by_key(|m| m.recorded_on);
        if newest_first {
            measurements.reverse();
        }
        Ok(measurements)
    }

    async fn create(&self, data: CreateMeasurement) -> AppResult<Measurement> {
        let mut inner = self.inner.write().await;
        if !inner.trainees.contains_key(&data.trainee_id) {
            return Err(AppError::not_found("Trainee not found"));
        }
        let measurement = Measurement {
            id: Uuid::new_v4(),
            trainee_id: data.trainee_id,
            recorded_on: data.recorded_on,
            weight_kg: data.weight_kg,
            height_cm: data.height_cm,
            chest_cm: data.chest_cm,
            waist_cm: data.waist_cm,
            hip_cm: data.hip_cm,
            created_at: Utc::now(),
        };
        inner.measurements.insert(measurement.id, measurement.clone());
        Ok(measurement)
    }

    async fn update(&self, id: Uuid, data: UpdateMeasurement) -> AppResult<Option<Measurement>> {
        let mut inner = self.inner.write().await;
        Ok(inner.measurements.get_mut(&id).map(|measurement| {
            measurement.recorded_on = data.recorded_on;
            measurement.weight_kg = data.weight_kg;
            measurement.height_cm = data.height_cm;
            measurement.chest_cm = data.chest_cm;
            measurement.waist_cm = data.waist_cm;
            measurement.hip_cm = data.hip_cm;
            measurement.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.measurements.remove(&id).is_some())
    }

    async fn exists_owned_by(&self, id: Uuid, trainee_email: &str) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.measurements.get(&id).is_some_and(|m| {
            inner
                .trainees
                .get(&m.trainee_id)
                .is_some_and(|t| t.email.eq_ignore_ascii_case(trainee_email))
        }))
    }

    async fn exists_supervised_by(&self, id: Uuid, instructor_email: &str) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.measurements.get(&id).is_some_and(|m| {
            inner
                .supervisor_email(m.trainee_id)
                .is_some_and(|e| e.eq_ignore_ascii_case(instructor_email))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(store: &MemoryStore) -> (Instructor, Trainee) {
        let instructor = InstructorStore::create(
            store,
            CreateInstructor {
                name: "Maria Silva".to_string(),
                email: "maria@studiofit.local".to_string(),
                registration: Some("CREF-12345".to_string()),
            },
        )
        .await
        .unwrap();

        let trainee = TraineeStore::create(
            store,
            CreateTrainee {
                name: "Joao Souza".to_string(),
                email: "joao@studiofit.local".to_string(),
                phone: None,
                instructor_id: instructor.id,
            },
        )
        .await
        .unwrap();

        (instructor, trainee)
    }

    #[tokio::test]
    async fn test_trainee_ownership_predicates() {
        let store = MemoryStore::new();
        let (instructor, trainee) = seed(&store).await;

        assert!(
            TraineeStore::exists_supervised_by(&store, trainee.id, &instructor.email)
                .await
                .unwrap()
        );
        assert!(store
            .exists_with_account(trainee.id, &trainee.email)
            .await
            .unwrap());
        assert!(
            !TraineeStore::exists_supervised_by(&store, trainee.id, "other@studiofit.local")
                .await
                .unwrap()
        );
        assert!(
            !TraineeStore::exists_supervised_by(&store, Uuid::new_v4(), &instructor.email)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_measurement_chain_predicates() {
        let store = MemoryStore::new();
        let (instructor, trainee) = seed(&store).await;

        let measurement = MeasurementStore::create(
            &store,
            CreateMeasurement {
                trainee_id: trainee.id,
                recorded_on: chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                weight_kg: 82.5,
                height_cm: 180.0,
                chest_cm: None,
                waist_cm: None,
                hip_cm: None,
            },
        )
        .await
        .unwrap();

        assert!(
            MeasurementStore::exists_supervised_by(&store, measurement.id, &instructor.email)
                .await
                .unwrap()
        );
        assert!(store
            .exists_owned_by(measurement.id, &trainee.email)
            .await
            .unwrap());
        assert!(!store
            .exists_owned_by(measurement.id, "other@studiofit.local")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_measurement_ordering() {
        let store = MemoryStore::new();
        let (_, trainee) = seed(&store).await;

        for (month, weight) in [(1, 84.0), (2, 83.0), (3, 82.0)] {
            MeasurementStore::create(
                &store,
                CreateMeasurement {
                    trainee_id: trainee.id,
                    recorded_on: chrono::NaiveDate::from_ymd_opt(2026, month, 10).unwrap(),
                    weight_kg: weight,
                    height_cm: 180.0,
                    chest_cm: None,
                    waist_cm: None,
                    hip_cm: None,
                },
            )
            .await
            .unwrap();
        }

        let history = store.list_for_trainee(trainee.id, false).await.unwrap();
        assert_eq!(history.first().unwrap().weight_kg, 84.0);

        let listing = store.list_for_trainee(trainee.id, true).await.unwrap();
        assert_eq!(listing.first().unwrap().weight_kg, 82.0);
    }

    #[tokio::test]
    async fn test_duplicate_principal_email_rejected() {
        let store = MemoryStore::new();
        let data = CreatePrincipal {
            email: "admin@studiofit.local".to_string(),
            password_hash: "hash".to_string(),
            role: studiofit_entity::Role::Admin,
        };
        PrincipalStore::create(&store, data.clone()).await.unwrap();
        assert!(PrincipalStore::create(&store, data).await.is_err());
    }
}
