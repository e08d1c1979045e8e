#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PackageError {
    #[error("Unknown workout type")]
    UnknownWorkoutType(String),
    #[error("{workout_type} expects {expected} values ({actual} given)")]
    ArgumentCount {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must be a non-negative integer ({value} given)")]
    NotAnInteger { field: &'static str, value: f64 },
}
