use derive_more::Display;

/// Summary of a completed workout.
#[derive(Debug, Display, Clone, PartialEq)]
#[display(
    "Workout type: {training_type}; \
     Duration: {duration:.3} h; \
     Distance: {distance:.3} km; \
     Mean speed: {speed:.3} km/h; \
     Calories: {calories:.3}."
)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
