//! Principal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the StudioFit access model.
///
/// Admin and Manager carry studio-wide authority; Instructor and Trainee
/// authority is scoped by ownership chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "principal_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system administrator.
    Admin,
    /// Studio manager: people records, billing oversight.
    Manager,
    /// Instructor supervising a set of trainees.
    Instructor,
    /// Trainee with access to their own records only.
    Trainee,
}

impl Role {
    /// Whether this role carries studio-wide authority over people records.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Instructor => "instructor",
            Self::Trainee => "trainee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = studiofit_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "instructor" => Ok(Self::Instructor),
            "trainee" => Ok(Self::Trainee),
            _ => Err(studiofit_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, manager, instructor, trainee"
            ))),
        }
    }
}
