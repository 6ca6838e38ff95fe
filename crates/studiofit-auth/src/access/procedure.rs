//! The per-request access decision procedure.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use studiofit_core::error::AppError;
use studiofit_core::result::AppResult;

use crate::identity::AuthenticatedIdentity;
use crate::ownership::OwnershipResolver;

use super::policies::{AccessPolicies, RouteId};

/// Terminal outcome of one evaluation. Decided in a single pass, never
/// retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed to the handler.
    Granted,
    /// No identity was attached and the route requires one.
    Unauthenticated,
    /// The identity's role or ownership does not cover the route.
    Forbidden,
}

/// Combines the route rule table with ownership resolution.
///
/// The identity is an explicit parameter: there is no ambient security
/// context, which also makes the procedure directly unit-testable.
#[derive(Clone)]
pub struct AccessDecisionProcedure {
    /// The static route rules.
    policies: AccessPolicies,
    /// Ownership-chain resolution.
    resolver: Arc<OwnershipResolver>,
}

impl std::fmt::Debug for AccessDecisionProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessDecisionProcedure").finish()
    }
}

impl AccessDecisionProcedure {
    /// Creates a procedure over the default rule table.
    pub fn new(resolver: Arc<OwnershipResolver>) -> Self {
        Self {
            policies: AccessPolicies::new(),
            resolver,
        }
    }

    /// Creates a procedure with a custom rule table.
    pub fn with_policies(policies: AccessPolicies, resolver: Arc<OwnershipResolver>) -> Self {
        Self { policies, resolver }
    }

    /// Evaluates the rule for `route` against the request's identity.
    ///
    /// Order: public → unauthenticated → unconditional role → ownership
    /// gate. Roles listed in the rule's `allowed_roles` never reach the
    /// ownership check.
    pub async fn decide(
        &self,
        route: RouteId,
        identity: Option<&AuthenticatedIdentity>,
        resource_id: Option<Uuid>,
    ) -> AppResult<AccessDecision> {
        let rule = self.policies.rule(route);

        if rule.public {
            return Ok(AccessDecision::Granted);
        }

        let Some(identity) = identity else {
            return Ok(AccessDecision::Unauthenticated);
        };

        if rule.allowed_roles.contains(&identity.role) {
            return Ok(AccessDecision::Granted);
        }

        if let Some(ownership) = &rule.ownership {
            if ownership.eligible_roles.contains(&identity.role) {
                let Some(resource_id) = resource_id else {
                    // A declared ownership gate with no id is a routing bug,
                    // not a request condition.
                    return Err(AppError::internal(format!(
                        "Route {route:?} declares an ownership rule but no resource id was supplied"
                    )));
                };
                if self
                    .resolver
                    .owns(identity, ownership.kind, resource_id)
                    .await?
                {
                    return Ok(AccessDecision::Granted);
                }
                debug!(
                    principal = %identity.identifier,
                    kind = %ownership.kind,
                    %resource_id,
                    "Ownership check failed"
                );
            }
        }

        Ok(AccessDecision::Forbidden)
    }

    /// Like [`decide`](Self::decide), mapping denials onto errors:
    /// unauthenticated → authentication error (401), forbidden →
    /// authorization error (403).
    pub async fn authorize(
        &self,
        route: RouteId,
        identity: Option<&AuthenticatedIdentity>,
        resource_id: Option<Uuid>,
    ) -> AppResult<()> {
        match self.decide(route, identity, resource_id).await? {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Unauthenticated => {
                Err(AppError::authentication("Authentication required"))
            }
            AccessDecision::Forbidden => Err(AppError::authorization("Access denied")),
        }
    }
}
