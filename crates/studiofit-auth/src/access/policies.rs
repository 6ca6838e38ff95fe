//! Static route rules: which roles may reach a route, and which ownership
//! chain gates it beyond role membership.

use std::collections::HashMap;

use studiofit_entity::principal::Role;

use crate::ownership::ResourceKind;

/// Identifies a guarded route in the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    // Public surface
    /// POST /auth/login
    Login,
    /// GET /auth/logout
    Logout,
    /// GET /health
    Health,
    /// GET / and /home
    Landing,

    // Authenticated self-service
    /// GET /auth/me
    Me,
    /// PUT /api/profile/password
    ChangePassword,

    // Trainee records
    /// GET /api/trainees
    TraineeList,
    /// GET /api/trainees/{id}
    TraineeDetail,

    // Workout plans
    /// POST /api/workouts (resource id: the assigned trainee)
    WorkoutCreate,
    /// GET /api/workouts
    WorkoutList,
    /// GET /api/workouts/{id}
    WorkoutDetail,
    /// PUT /api/workouts/{id}
    WorkoutUpdate,
    /// DELETE /api/workouts/{id}
    WorkoutDelete,

    // Measurements
    /// POST /api/measurements (resource id: the target trainee)
    MeasurementCreate,
    /// GET /api/measurements/trainee/{trainee_id}
    MeasurementListForTrainee,
    /// GET /api/measurements/history/{trainee_id}
    MeasurementHistory,
    /// GET /api/measurements/{id}
    MeasurementDetail,
    /// PUT /api/measurements/{id}
    MeasurementUpdate,
    /// DELETE /api/measurements/{id}
    MeasurementDelete,
}

/// An ownership gate attached to a route rule.
#[derive(Debug, Clone)]
pub struct OwnershipRule {
    /// The resource kind the path id refers to.
    pub kind: ResourceKind,
    /// Roles that may pass through this gate.
    pub eligible_roles: Vec<Role>,
}

/// The static access rule for one route.
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// Public routes are allowed unconditionally.
    pub public: bool,
    /// Roles with unconditional access (no ownership check).
    pub allowed_roles: Vec<Role>,
    /// Optional ownership gate for roles not in `allowed_roles`.
    pub ownership: Option<OwnershipRule>,
}

impl RouteRule {
    /// A public route.
    fn public_route() -> Self {
        Self {
            public: true,
            allowed_roles: Vec::new(),
            ownership: None,
        }
    }

    /// A route gated by role membership only.
    fn roles(allowed: &[Role]) -> Self {
        Self {
            public: false,
            allowed_roles: allowed.to_vec(),
            ownership: None,
        }
    }

    /// Attach an ownership gate for the given eligible roles.
    fn with_ownership(mut self, kind: ResourceKind, eligible: &[Role]) -> Self {
        self.ownership = Some(OwnershipRule {
            kind,
            eligible_roles: eligible.to_vec(),
        });
        self
    }
}

/// The full route → rule table.
#[derive(Debug, Clone)]
pub struct AccessPolicies {
    /// Route → rule.
    rules: HashMap<RouteId, RouteRule>,
}

impl AccessPolicies {
    /// Builds the default rule table.
    ///
    /// Staff roles (Admin, Manager) appear in `allowed_roles` where they
    /// hold unconditional authority over a resource kind; Instructor and
    /// Trainee access to specific resources always goes through an
    /// ownership gate.
    pub fn new() -> Self {
        const ALL: &[Role] = &[Role::Admin, Role::Manager, Role::Instructor, Role::Trainee];
        const STAFF: &[Role] = &[Role::Admin, Role::Manager];
        const OWNERS: &[Role] = &[Role::Instructor, Role::Trainee];
        const INSTRUCTOR: &[Role] = &[Role::Instructor];

        let mut rules = HashMap::new();

        rules.insert(RouteId::Login, RouteRule::public_route());
        rules.insert(RouteId::Logout, RouteRule::public_route());
        rules.insert(RouteId::Health, RouteRule::public_route());
        rules.insert(RouteId::Landing, RouteRule::public_route());

        rules.insert(RouteId::Me, RouteRule::roles(ALL));
        rules.insert(RouteId::ChangePassword, RouteRule::roles(ALL));

        rules.insert(
            RouteId::TraineeList,
            RouteRule::roles(&[Role::Admin, Role::Manager, Role::Instructor]),
        );
        rules.insert(
            RouteId::TraineeDetail,
            RouteRule::roles(STAFF).with_ownership(ResourceKind::Trainee, OWNERS),
        );

        rules.insert(
            RouteId::WorkoutCreate,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Trainee, INSTRUCTOR),
        );
        rules.insert(RouteId::WorkoutList, RouteRule::roles(OWNERS));
        rules.insert(
            RouteId::WorkoutDetail,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Workout, OWNERS),
        );
        rules.insert(
            RouteId::WorkoutUpdate,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Workout, INSTRUCTOR),
        );
        rules.insert(
            RouteId::WorkoutDelete,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Workout, INSTRUCTOR),
        );

        rules.insert(
            RouteId::MeasurementCreate,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Trainee, INSTRUCTOR),
        );
        rules.insert(
            RouteId::MeasurementListForTrainee,
            RouteRule::roles(STAFF).with_ownership(ResourceKind::Trainee, OWNERS),
        );
        rules.insert(
            RouteId::MeasurementHistory,
            RouteRule::roles(STAFF).with_ownership(ResourceKind::Trainee, OWNERS),
        );
        rules.insert(
            RouteId::MeasurementDetail,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Measurement, OWNERS),
        );
        rules.insert(
            RouteId::MeasurementUpdate,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Measurement, INSTRUCTOR),
        );
        rules.insert(
            RouteId::MeasurementDelete,
            RouteRule::roles(&[]).with_ownership(ResourceKind::Measurement, INSTRUCTOR),
        );

        Self { rules }
    }

    /// Look up the rule for a route.
    ///
    /// Every `RouteId` has an entry in the default table; the fallback
    /// rule (deny everyone) only applies to tables built by hand in tests.
    pub fn rule(&self, route: RouteId) -> RouteRule {
        self.rules.get(&route).cloned().unwrap_or(RouteRule {
            public: false,
            allowed_roles: Vec::new(),
            ownership: None,
        })
    }
}

impl Default for AccessPolicies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_a_rule() {
        let policies = AccessPolicies::new();
        let all = [
            RouteId::Login,
            RouteId::Logout,
            RouteId::Health,
            RouteId::Landing,
            RouteId::Me,
            RouteId::ChangePassword,
            RouteId::TraineeList,
            RouteId::TraineeDetail,
            RouteId::WorkoutCreate,
            RouteId::WorkoutList,
            RouteId::WorkoutDetail,
            RouteId::WorkoutUpdate,
            RouteId::WorkoutDelete,
            RouteId::MeasurementCreate,
            RouteId::MeasurementListForTrainee,
            RouteId::MeasurementHistory,
            RouteId::MeasurementDetail,
            RouteId::MeasurementUpdate,
            RouteId::MeasurementDelete,
        ];
        for route in all {
            assert!(policies.rules.contains_key(&route), "missing rule: {route:?}");
        }
    }

    #[test]
    fn test_mutating_routes_have_no_staff_bypass() {
        let policies = AccessPolicies::new();
        for route in [
            RouteId::WorkoutUpdate,
            RouteId::WorkoutDelete,
            RouteId::MeasurementUpdate,
            RouteId::MeasurementDelete,
        ] {
            let rule = policies.rule(route);
            assert!(rule.allowed_roles.is_empty());
            let ownership = rule.ownership.expect("ownership rule required");
            assert_eq!(ownership.eligible_roles, vec![Role::Instructor]);
        }
    }
}
