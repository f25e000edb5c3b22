//! Profile Entity
//!
//! Per-user questionnaire answers and body measurements, stored as one
//! document keyed by user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_object::{
    email::Email,
    profile_field::{
        Accomplishment, Diet, GOAL_SPEED_MAX, GOAL_SPEED_MIN, Gender, Goal, Limitation,
        WorkoutPeriods, YesNo,
    },
    user_id::UserId,
};
use crate::error::{AuthError, AuthResult};

/// Maximum display name length (code points)
pub const NAME_MAX_LENGTH: usize = 100;

/// Profile document body.
///
/// `desired_weight` travels as `desited_weight` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDetails {
    pub name: String,
    #[schema(value_type = String, format = Email)]
    pub email: Email,
    pub gender: Gender,
    pub workout_periods: WorkoutPeriods,
    pub tried_other_tracking_apps: YesNo,
    /// Centimetres
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub age: u32,
    pub goal: Goal,
    #[serde(rename = "desited_weight", alias = "desired_weight")]
    pub desired_weight: f64,
    /// Kilograms per week
    pub goal_speed: f64,
    pub current_limitation: Vec<Limitation>,
    pub following_a_diet: Diet,
    pub accomplishment_goal: Vec<Accomplishment>,
}

impl ProfileDetails {
    pub fn validate(&self) -> AuthResult<()> {
        check_name(&self.name)?;
        check_measure("height", self.height)?;
        check_measure("weight", self.weight)?;
        check_measure("desited_weight", self.desired_weight)?;
        check_goal_speed(self.goal_speed)
    }
}

/// Partial update of a [`ProfileDetails`].
///
/// A field that is absent or `null` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfilePatch {
    pub name: Option<String>,
    #[schema(value_type = Option<String>, format = Email)]
    pub email: Option<Email>,
    pub gender: Option<Gender>,
    pub workout_periods: Option<WorkoutPeriods>,
    pub tried_other_tracking_apps: Option<YesNo>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<u32>,
    pub goal: Option<Goal>,
    #[serde(rename = "desited_weight", alias = "desired_weight")]
    pub desired_weight: Option<f64>,
    pub goal_speed: Option<f64>,
    pub current_limitation: Option<Vec<Limitation>>,
    pub following_a_diet: Option<Diet>,
    pub accomplishment_goal: Option<Vec<Accomplishment>>,
}

impl ProfilePatch {
    pub fn validate(&self) -> AuthResult<()> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        for (field, value) in [
            ("height", self.height),
            ("weight", self.weight),
            ("desited_weight", self.desired_weight),
        ] {
            if let Some(value) = value {
                check_measure(field, value)?;
            }
        }
        if let Some(goal_speed) = self.goal_speed {
            check_goal_speed(goal_speed)?;
        }
        Ok(())
    }

    /// Overwrite every field of `details` that this patch carries.
    pub fn merge_into(self, details: &mut ProfileDetails) {
        if let Some(v) = self.name {
            details.name = v;
        }
        if let Some(v) = self.email {
            details.email = v;
        }
        if let Some(v) = self.gender {
            details.gender = v;
        }
        if let Some(v) = self.workout_periods {
            details.workout_periods = v;
        }
        if let Some(v) = self.tried_other_tracking_apps {
            details.tried_other_tracking_apps = v;
        }
        if let Some(v) = self.height {
            details.height = v;
        }
        if let Some(v) = self.weight {
            details.weight = v;
        }
        if let Some(v) = self.age {
            details.age = v;
        }
        if let Some(v) = self.goal {
            details.goal = v;
        }
        if let Some(v) = self.desired_weight {
            details.desired_weight = v;
        }
        if let Some(v) = self.goal_speed {
            details.goal_speed = v;
        }
        if let Some(v) = self.current_limitation {
            details.current_limitation = v;
        }
        if let Some(v) = self.following_a_diet {
            details.following_a_diet = v;
        }
        if let Some(v) = self.accomplishment_goal {
            details.accomplishment_goal = v;
        }
    }
}

/// Profile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: UserId,
    pub details: ProfileDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: UserId, details: ProfileDetails) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate and merge a patch, refreshing `updated_at`.
    pub fn apply(&mut self, patch: ProfilePatch) -> AuthResult<()> {
        patch.validate()?;
        patch.merge_into(&mut self.details);
        self.updated_at = Utc::now();
        Ok(())
    }
}

// ============================================================================
// Field checks
// ============================================================================

fn check_name(name: &str) -> AuthResult<()> {
    if name.trim().is_empty() {
        return Err(AuthError::Validation("name cannot be empty".to_string()));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(AuthError::Validation(format!(
            "name must be at most {} characters",
            NAME_MAX_LENGTH
        )));
    }
    Ok(())
}

fn check_measure(field: &str, value: f64) -> AuthResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AuthError::Validation(format!(
            "{} must be a positive number",
            field
        )));
    }
    Ok(())
}

fn check_goal_speed(value: f64) -> AuthResult<()> {
    if !(GOAL_SPEED_MIN..=GOAL_SPEED_MAX).contains(&value) {
        return Err(AuthError::Validation(format!(
            "goal_speed must be between {} and {}",
            GOAL_SPEED_MIN, GOAL_SPEED_MAX
        )));
    }
    Ok(())
}
