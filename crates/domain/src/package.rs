use std::str::FromStr;

use log::debug;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{PackageError, Running, SportsWalking, Swimming, Workout};

/// Workout codes sent by the sensors.
#[derive(EnumIter, EnumString, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    #[strum(serialize = "SWM")]
    Swimming,
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    SportsWalking,
}

impl WorkoutType {
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Names of the positional values expected in a package of this type.
    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub fn build(self, data: &[f64]) -> Result<Box<dyn Workout>, PackageError> {
        let fields = self.fields();

        if data.len() != fields.len() {
            return Err(PackageError::ArgumentCount {
                workout_type: self.code(),
                expected: fields.len(),
                actual: data.len(),
            });
        }

        let action = integer(fields[0], data[0])?;
        let duration = data[1];
        let weight = data[2];

        let workout: Box<dyn Workout> = match self {
            WorkoutType::Swimming => Box::new(Swimming::new(
                action,
                duration,
                weight,
                integer(fields[3], data[3])?,
                integer(fields[4], data[4])?,
            )),
            WorkoutType::Running => Box::new(Running::new(action, duration, weight)),
            WorkoutType::SportsWalking => Box::new(SportsWalking::new(
                action,
                duration,
                weight,
                integer(fields[3], data[3])?,
            )),
        };

        Ok(workout)
    }
}

/// Build the workout described by a sensor package.
///
/// `data` holds the constructor values of the workout in positional order.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Workout>, PackageError> {
    let workout_type = WorkoutType::from_str(workout_type)
        .map_err(|_| PackageError::UnknownWorkoutType(workout_type.to_string()))?;
    debug!("reading {} package: {data:?}", workout_type.code());
    workout_type.build(data)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integer(field: &'static str, value: f64) -> Result<u32, PackageError> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(PackageError::NotAnInteger { field, value });
    }

    Ok(value as u32)
}
