use crate::InfoMessage;

pub const M_IN_KM: f64 = 1000.;
pub const MIN_IN_H: f64 = 60.;
/// Distance covered by a single step in meters.
pub const LEN_STEP: f64 = 0.65;

/// Readings shared by all workout types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Training {
    /// `duration` is in hours and `weight` in kilograms.
    ///
    /// The duration is expected to be positive. A zero duration is not rejected and leads to
    /// an infinite or undefined mean speed.
    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    #[must_use]
    pub fn action(&self) -> u32 {
        self.action
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn minutes(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

pub trait Workout {
    fn name(&self) -> &'static str;

    fn training(&self) -> &Training;

    /// Distance covered by a single action in meters.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    fn spent_calories(&self) -> f64;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.training().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.training().duration
    }

    #[must_use]
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.name().to_string(),
            duration: self.training().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    training: Training,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.;
    const CALORIES_SPEED_SHIFT: f64 = 20.;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            training: Training::new(action, duration, weight),
        }
    }
}

impl Workout for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn spent_calories(&self) -> f64 {
        let k_speed =
            Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT;
        k_speed * self.training.weight / M_IN_KM * self.training.minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    training: Training,
    height: u32,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// `height` is in centimeters.
    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, height: u32) -> Self {
        Self {
            training: Training::new(action, duration, weight),
            height,
        }
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Workout for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn spent_calories(&self) -> f64 {
        let height = f64::from(self.height);
        // The quotient is floored before scaling back by the height.
        let k_speed = (self.mean_speed().powi(2) / height).floor()
            * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
            * height;
        let k_weight = Self::CALORIES_WEIGHT_MULTIPLIER * self.training.weight;
        (k_weight + k_speed) * self.training.minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    training: Training,
    length_pool: u32,
    count_pool: u32,
}

impl Swimming {
    /// Distance covered by a single stroke in meters.
    const LEN_STEP: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.;

    /// `length_pool` is in meters, `count_pool` is the number of laps.
    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: u32, count_pool: u32) -> Self {
        Self {
            training: Training::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    #[must_use]
    pub fn length_pool(&self) -> u32 {
        self.length_pool
    }

    #[must_use]
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Workout for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        f64::from(self.length_pool) * f64::from(self.count_pool) / M_IN_KM / self.training.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.training.weight
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::sample(15000, 1.0, 75.0, 9.75, 9.75, 699.75)]
    #[case::half_hour(6000, 0.5, 60.0, 3.9, 7.8, 216.72)]
    #[case::slow(1000, 1.0, 80.0, 0.65, 0.65, -39.84)]
    fn test_running(
        #[case] action: u32,
        #[case] duration: f64,
        #[case] weight: f64,
        #[case] distance: f64,
        #[case] mean_speed: f64,
        #[case] calories: f64,
    ) {
        let running = Running::new(action, duration, weight);
        assert_approx_eq!(running.distance(), distance, 1e-9);
        assert_approx_eq!(running.mean_speed(), mean_speed, 1e-9);
        assert_approx_eq!(running.spent_calories(), calories, 1e-9);
    }

    #[rstest]
    #[case::sample(9000, 1.0, 75.0, 180, 5.85, 5.85, 157.5)]
    #[case::quotient_floored_to_two(30000, 1.0, 70.0, 180, 19.5, 19.5, 773.4)]
    #[case::two_hours(9000, 2.0, 75.0, 180, 5.85, 2.925, 315.0)]
    fn test_sports_walking(
        #[case] action: u32,
        #[case] duration: f64,
        #[case] weight: f64,
        #[case] height: u32,
        #[case] distance: f64,
        #[case] mean_speed: f64,
        #[case] calories: f64,
    ) {
        let walking = SportsWalking::new(action, duration, weight, height);
        assert_approx_eq!(walking.distance(), distance, 1e-9);
        assert_approx_eq!(walking.mean_speed(), mean_speed, 1e-9);
        assert_approx_eq!(walking.spent_calories(), calories, 1e-9);
    }

    #[rstest]
    #[case::sample(720, 1.0, 80.0, 25, 40, 0.9936, 1.0, 336.0)]
    #[case::olympic_pool(1000, 0.5, 70.0, 50, 30, 1.38, 3.0, 574.0)]
    fn test_swimming(
        #[case] action: u32,
        #[case] duration: f64,
        #[case] weight: f64,
        #[case] length_pool: u32,
        #[case] count_pool: u32,
        #[case] distance: f64,
        #[case] mean_speed: f64,
        #[case] calories: f64,
    ) {
        let swimming = Swimming::new(action, duration, weight, length_pool, count_pool);
        assert_approx_eq!(swimming.distance(), distance, 1e-9);
        assert_approx_eq!(swimming.mean_speed(), mean_speed, 1e-9);
        assert_approx_eq!(swimming.spent_calories(), calories, 1e-9);
    }

    #[test]
    fn test_swimming_speed_ignores_action() {
        assert_approx_eq!(
            Swimming::new(0, 1.0, 80.0, 25, 40).mean_speed(),
            Swimming::new(5000, 1.0, 80.0, 25, 40).mean_speed(),
            1e-12
        );
    }

    #[test]
    fn test_zero_duration() {
        assert!(Running::new(15000, 0.0, 75.0).mean_speed().is_infinite());
        assert!(Running::new(0, 0.0, 75.0).mean_speed().is_nan());
    }

    #[test]
    fn test_show_training_info() {
        let info = Running::new(15000, 1.0, 75.0).show_training_info();
        assert_eq!(info.training_type, "Running");
        assert_approx_eq!(info.duration, 1.0);
        assert_approx_eq!(info.distance, 9.75);
        assert_approx_eq!(info.speed, 9.75);
        assert_approx_eq!(info.calories, 699.75);
    }

    #[test]
    fn test_training_accessors() {
        let walking = SportsWalking::new(9000, 1.5, 75.0, 180);
        assert_eq!(walking.training().action(), 9000);
        assert_approx_eq!(walking.training().duration(), 1.5);
        assert_approx_eq!(walking.training().weight(), 75.0);
        assert_eq!(walking.height(), 180);

        let swimming = Swimming::new(720, 1.0, 80.0, 25, 40);
        assert_eq!(swimming.length_pool(), 25);
        assert_eq!(swimming.count_pool(), 40);
    }

    #[rstest]
    #[case::running(&Running::new(1000, 1.0, 75.0), 0.65)]
    #[case::walking(&SportsWalking::new(1000, 1.0, 75.0, 180), 0.65)]
    #[case::swimming(&Swimming::new(1000, 1.0, 80.0, 25, 40), 1.38)]
    fn test_len_step(#[case] workout: &dyn Workout, #[case] len_step: f64) {
        assert_approx_eq!(workout.len_step(), len_step, 1e-12);
        assert_approx_eq!(workout.distance(), len_step, 1e-12);
    }
}
