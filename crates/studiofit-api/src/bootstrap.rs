//! Bootstrap seeding for an empty principal store.
//!
//! Creates the configured admin account plus a demo instructor and
//! trainee with their linked records, so a fresh development instance is
//! immediately usable. Seeding a low-entropy default password is a policy
//! decision left to the integrating deployment: it only happens while
//! `auth.bootstrap` is enabled, and the built-in default triggers a
//! warning on every startup that uses it.

use tracing::{info, warn};

use studiofit_core::result::AppResult;
use studiofit_database::{InstructorStore, PrincipalStore, TraineeStore};
use studiofit_entity::instructor::CreateInstructor;
use studiofit_entity::principal::{CreatePrincipal, Role};
use studiofit_entity::trainee::CreateTrainee;

use crate::state::AppState;

/// Demo instructor account seeded alongside the admin.
const DEMO_INSTRUCTOR_EMAIL: &str = "maria@studiofit.local";

/// Demo trainee account seeded alongside the admin.
const DEMO_TRAINEE_EMAIL: &str = "joao@studiofit.local";

/// Seed bootstrap accounts if enabled and the principal store is empty.
pub async fn run(state: &AppState) -> AppResult<()> {
    if !state.config.auth.bootstrap {
        return Ok(());
    }

    if state.stores.principals.count().await? > 0 {
        return Ok(());
    }

    if state.config.auth.bootstrap_password_is_default() {
        warn!(
            "Bootstrap accounts use the built-in default password; \
             set auth.bootstrap_password or disable auth.bootstrap before exposing this instance"
        );
    }

    let password_hash = state
        .password_hasher
        .hash_password(&state.config.auth.bootstrap_password)?;

    let admin_email = state.config.auth.bootstrap_admin_email.clone();
    state
        .stores
        .principals
        .create(CreatePrincipal {
            email: admin_email.clone(),
            password_hash: password_hash.clone(),
            role: Role::Admin,
        })
        .await?;
    info!(email = %admin_email, "Bootstrap admin created");

    state
        .stores
        .principals
        .create(CreatePrincipal {
            email: DEMO_INSTRUCTOR_EMAIL.to_string(),
            password_hash: password_hash.clone(),
            role: Role::Instructor,
        })
        .await?;
    let instructor = state
        .stores
        .instructors
        .create(CreateInstructor {
            name: "Maria Silva".to_string(),
            email: DEMO_INSTRUCTOR_EMAIL.to_string(),
            registration: None,
        })
        .await?;
    info!(email = %DEMO_INSTRUCTOR_EMAIL, "Bootstrap instructor created");

    state
        .stores
        .principals
        .create(CreatePrincipal {
            email: DEMO_TRAINEE_EMAIL.to_string(),
            password_hash,
            role: Role::Trainee,
        })
        .await?;
    state
        .stores
        .trainees
        .create(CreateTrainee {
            name: "Joao Souza".to_string(),
            email: DEMO_TRAINEE_EMAIL.to_string(),
            phone: None,
            instructor_id: instructor.id,
        })
        .await?;
    info!(email = %DEMO_TRAINEE_EMAIL, "Bootstrap trainee created");

    Ok(())
}
