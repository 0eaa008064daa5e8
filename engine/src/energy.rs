//! Energy expenditure calculations
//!
//! Provides BMR (Mifflin-St Jeor), TDEE via activity scaling, and the
//! seven-goal calorie table derived from TDEE.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Full Precision**: No rounding here; rounding is a presentation
//!    concern at the display boundary
//! 3. **Type Safety**: Closed enums for sex and activity level; raw
//!    strings never reach this module

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// Biological sex for BMR calculation
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(EngineError::InvalidEnum {
                field: "gender",
                value: other.to_string(),
            }),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = EngineError;

    /// Parse the wire-level category name.
    ///
    /// This is the only place an out-of-enum activity value can exist, so
    /// the defensive `UnknownActivityLevel` error lives here rather than
    /// on the (total) multiplier lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(EngineError::UnknownActivityLevel(other.to_string())),
        }
    }
}

/// Validated biometric data for one calculation
///
/// Created per request by the validator, immutable, discarded with the
/// response. All numeric fields are strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Age in whole years
    pub age: u32,
    /// Biological sex for the BMR formula
    pub sex: Sex,
    /// Weight in kilograms (metric only)
    pub weight_kg: f64,
    /// Height in centimeters (metric only)
    pub height_cm: f64,
    /// Self-reported activity category
    pub activity_level: ActivityLevel,
}

// ============================================================================
// Output Types
// ============================================================================

/// Calorie targets for the seven weight-management goals
///
/// Field declaration order is the display order (loss tiers by ascending
/// severity, then gain tiers by ascending severity) and is preserved in
/// serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalTable {
    pub maintain: f64,
    pub mild_loss: f64,
    pub loss: f64,
    pub extreme_loss: f64,
    pub mild_gain: f64,
    pub gain: f64,
    pub fast_gain: f64,
}

/// Complete energy-expenditure profile for one request
///
/// Field names follow the wire contract consumed by the frontend, which
/// rounds for display; values here carry full floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    #[serde(rename = "BMR")]
    pub bmr: f64,
    #[serde(rename = "TDEE")]
    pub tdee: f64,
    #[serde(rename = "calories")]
    pub goals: GoalTable,
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn compute_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

// ============================================================================
// Goal Table
// ============================================================================

/// Derive the seven calorie targets from TDEE
///
/// Offsets are fixed absolute calorie deltas. No floor is applied: a very
/// low TDEE combined with `extreme_loss` can produce a small or even
/// non-positive target, and clamping that is a presentation-layer
/// decision, not the engine's.
pub fn derive_goals(tdee: f64) -> GoalTable {
    GoalTable {
        maintain: tdee,
        mild_loss: tdee - 250.0,
        loss: tdee - 500.0,
        extreme_loss: tdee - 1000.0,
        mild_gain: tdee + 250.0,
        gain: tdee + 500.0,
        fast_gain: tdee + 1000.0,
    }
}

/// Compose BMR, TDEE, and the goal table into the response profile
///
/// Pure composition; performs no computation or validation of its own.
pub fn aggregate(bmr: f64, tdee: f64, goals: GoalTable) -> EnergyProfile {
    EnergyProfile { bmr, tdee, goals }
}

/// Run the full pipeline over validated input
///
/// BMR → TDEE → goal table → profile. Deterministic: identical input
/// yields bit-identical output.
pub fn evaluate(input: &BiometricInput) -> EnergyProfile {
    let bmr = bmr_mifflin_st_jeor(input.weight_kg, input.height_cm, input.age, input.sex);
    let tdee = compute_tdee(bmr, input.activity_level);
    let goals = derive_goals(tdee);
    aggregate(bmr, tdee, goals)
}
