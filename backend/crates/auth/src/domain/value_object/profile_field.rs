//! Profile Field Value Objects
//!
//! Closed vocabularies of the onboarding questionnaire stored in a profile.
//! Wire names follow what existing mobile clients send, misspellings
//! included; the corrected spellings are accepted as aliases on input.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepted `goal_speed` range (kg per week)
pub const GOAL_SPEED_MIN: f64 = 0.1;
pub const GOAL_SPEED_MAX: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[display("male")]
    Male,
    #[display("female")]
    Female,
    #[display("other")]
    Other,
}

/// Workouts per week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
pub enum WorkoutPeriods {
    #[serde(rename = "0-2")]
    #[display("0-2")]
    ZeroToTwo,
    #[serde(rename = "3-5")]
    #[display("3-5")]
    ThreeToFive,
    #[serde(rename = "6+")]
    #[display("6+")]
    SixOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    #[display("yes")]
    Yes,
    #[display("no")]
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[display("lose_weight")]
    LoseWeight,
    #[display("gain_weight")]
    GainWeight,
    #[serde(rename = "mantain", alias = "maintain")]
    #[display("mantain")]
    Maintain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Limitation {
    #[display("consistency")]
    Consistency,
    #[display("eating_habit")]
    EatingHabit,
    #[display("support")]
    Support,
    #[display("busy")]
    Busy,
    #[serde(rename = "meal_inspiraton", alias = "meal_inspiration")]
    #[display("meal_inspiraton")]
    MealInspiration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    #[display("classic")]
    Classic,
    #[display("pescetarian")]
    Pescetarian,
    #[display("vegan")]
    Vegan,
    #[serde(rename = "vegitarian", alias = "vegetarian")]
    #[display("vegitarian")]
    Vegetarian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Accomplishment {
    #[display("eat_healthier")]
    EatHealthier,
    #[display("boost_mood")]
    BoostMood,
    #[display("stay_motivated")]
    StayMotivated,
    #[display("feel_better")]
    FeelBetter,
}
