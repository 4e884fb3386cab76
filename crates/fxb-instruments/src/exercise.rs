//! Option exercise types.
//!
//! An `Exercise` defines *when* an option can be exercised. Only European
//! exercise is priceable by this library; the other variants exist so that
//! trade validation can name what it rejected.

use chrono::NaiveDate;
use std::fmt;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time up to expiry.
    American,
    /// Can be exercised on specific dates.
    Bermudan,
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => write!(f, "European"),
            ExerciseType::American => write!(f, "American"),
            ExerciseType::Bermudan => write!(f, "Bermudan"),
        }
    }
}

/// Exercise specification for an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    exercise_type: ExerciseType,
    dates: Vec<NaiveDate>,
}

impl Exercise {
    /// Create a European exercise (single expiry date).
    pub fn european(expiry: NaiveDate) -> Self {
        Self {
            exercise_type: ExerciseType::European,
            dates: vec![expiry],
        }
    }

    /// The last possible exercise date.
    pub fn last_date(&self) -> NaiveDate {
        *self.dates.last().expect("exercise has at least one date")
    }

    /// All exercise dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The type of exercise.
    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.exercise_type, self.last_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn european_exercise() {
        let expiry = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let ex = Exercise::european(expiry);
        assert_eq!(ex.exercise_type(), ExerciseType::European);
        assert_eq!(ex.last_date(), expiry);
        assert_eq!(ex.dates().len(), 1);
        assert_eq!(ex.to_string(), "European(2026-06-15)");
    }
}
