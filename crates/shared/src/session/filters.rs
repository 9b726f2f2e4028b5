use serde::{Deserialize, Serialize};

use crate::recipe::MealType;

/// Upper bound of the "allow up to N missing" slider.
pub const MAX_MISSING_CEILING: u8 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    /// `None` means no explicit ceiling was chosen; the hard ceiling applies.
    pub max_missing: Option<u8>,
    /// 0 disables the time filter.
    pub max_time_minutes: u32,
    pub dietary_only: bool,
    pub meal_type: Option<MealType>,
    pub limit_by_meal_type: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            max_missing: Some(2),
            max_time_minutes: 60,
            dietary_only: false,
            meal_type: None,
            limit_by_meal_type: false,
        }
    }
}

impl Filters {
    /// Effective missing-count ceiling, clamped to `[0, MAX_MISSING_CEILING]`.
    pub fn missing_ceiling(&self) -> usize {
        self.max_missing
            .unwrap_or(MAX_MISSING_CEILING)
            .min(MAX_MISSING_CEILING) as usize
    }

    pub fn clamped(mut self) -> Self {
        self.max_missing = self.max_missing.map(|m| m.min(MAX_MISSING_CEILING));
        self
    }

    pub fn allows_time(&self, time_minutes: u32) -> bool {
        self.max_time_minutes == 0 || time_minutes <= self.max_time_minutes
    }

    /// Meal-type filter only applies when enabled and a meal type is chosen.
    pub fn allows_meal_type(&self, meal_type: MealType) -> bool {
        match (self.limit_by_meal_type, self.meal_type) {
            (true, Some(wanted)) => wanted == meal_type,
            _ => true,
        }
    }
}
