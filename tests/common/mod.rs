//! Shared test helpers for the end-to-end tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use studiofit_api::{AppState, build_router};
use studiofit_core::config::AppConfig;
use studiofit_database::{
    InstructorStore, MeasurementStore, PrincipalStore, Stores, TraineeStore, WorkoutStore,
};
use studiofit_entity::instructor::CreateInstructor;
use studiofit_entity::measurement::CreateMeasurement;
use studiofit_entity::principal::{CreatePrincipal, Role};
use studiofit_entity::trainee::CreateTrainee;
use studiofit_entity::workout::CreateWorkout;

/// Password shared by every seeded test account.
pub const PASSWORD: &str = "password123";

/// Test application context over the in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state, for direct store access in assertions.
    pub state: AppState,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is empty).
    pub body: Value,
    /// Response headers.
    pub headers: http::HeaderMap,
}

/// Identifiers of the seeded fixture records.
pub struct SeedData {
    /// Trainee supervised by `maria@`.
    pub trainee_joao: Uuid,
    /// Trainee supervised by `carlos@`.
    pub trainee_ana: Uuid,
    /// Workout created by `maria@` for `joao@`.
    pub workout_joao: Uuid,
    /// Measurement of `joao@`.
    pub measurement_joao: Uuid,
}

impl TestApp {
    /// Create a new test application with an empty in-memory store.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.bootstrap = false;

        let state = AppState::build(config, Stores::memory());
        let router = build_router(state.clone());

        Self { router, state }
    }

    /// Create a principal account with the shared test password.
    pub async fn create_account(&self, email: &str, role: Role) {
        let hash = self.state.password_hasher.hash_password(PASSWORD).unwrap();
        self.state
            .stores
            .principals
            .create(CreatePrincipal {
                email: email.to_string(),
                password_hash: hash,
                role,
            })
            .await
            .unwrap();
    }

    /// Seed the standard fixture: two instructors with one trainee each,
    /// plus a workout and a measurement for Maria's trainee.
    pub async fn seed(&self) -> SeedData {
        self.create_account("admin@studiofit.local", Role::Admin).await;
        self.create_account("gestor@studiofit.local", Role::Manager).await;
        self.create_account("maria@studiofit.local", Role::Instructor).await;
        self.create_account("carlos@studiofit.local", Role::Instructor).await;
        self.create_account("joao@studiofit.local", Role::Trainee).await;
        self.create_account("ana@studiofit.local", Role::Trainee).await;

        let maria = self
            .state
            .stores
            .instructors
            .create(CreateInstructor {
                name: "Maria Silva".to_string(),
                email: "maria@studiofit.local".to_string(),
                registration: Some("CREF-12345".to_string()),
            })
            .await
            .unwrap();
        let carlos = self
            .state
            .stores
            .instructors
            .create(CreateInstructor {
                name: "Carlos Lima".to_string(),
                email: "carlos@studiofit.local".to_string(),
                registration: None,
            })
            .await
            .unwrap();

        let joao = self
            .state
            .stores
            .trainees
            .create(CreateTrainee {
                name: "Joao Souza".to_string(),
                email: "joao@studiofit.local".to_string(),
                phone: None,
                instructor_id: maria.id,
            })
            .await
            .unwrap();
        let ana = self
            .state
            .stores
            .trainees
            .create(CreateTrainee {
                name: "Ana Costa".to_string(),
                email: "ana@studiofit.local".to_string(),
                phone: None,
                instructor_id: carlos.id,
            })
            .await
            .unwrap();

        let workout = self
            .state
            .stores
            .workouts
            .create(CreateWorkout {
                name: "Upper body A".to_string(),
                notes: Some("3x12".to_string()),
                trainee_id: joao.id,
                instructor_id: maria.id,
            })
            .await
            .unwrap();

        let measurement = self
            .state
            .stores
            .measurements
            .create(CreateMeasurement {
                trainee_id: joao.id,
                recorded_on: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                weight_kg: 82.0,
                height_cm: 180.0,
                chest_cm: Some(101.0),
                waist_cm: Some(84.0),
                hip_cm: None,
            })
            .await
            .unwrap();

        SeedData {
            trainee_joao: joao.id,
            trainee_ana: ana.id,
            workout_joao: workout.id,
            measurement_joao: measurement.id,
        }
    }

    /// Issue a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    /// Issue a request carrying the token in a cookie header instead of
    /// the authorization header.
    pub async fn request_with_cookie(
        &self,
        method: &str,
        path: &str,
        cookie: &str,
        extra_authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("cookie", cookie);
        if let Some(value) = extra_authorization {
            builder = builder.header("authorization", value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status: parts.status,
            body,
            headers: parts.headers,
        }
    }

    /// Log in and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["data"]["token"].as_str().unwrap().to_string()
    }
}
