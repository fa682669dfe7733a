use faer::Mat;

use crate::{error::AdvectError, scheme::Stepper, Float};

/// Drives a field from `t` to `end_time` under a fixed step size.
///
/// A step is taken only when it would not carry `t` past `end_time`; the
/// clock still advances on iterations that skip the step, so trailing
/// increments run the counter out without touching the field. No partial or
/// corrective final step is ever taken.
#[derive(Clone, Debug)]
pub struct Integrator {
    t: Float,
    end_time: Float,
    dt: Float,
    steps_taken: usize,
}

impl Integrator {
    pub fn new(t: Float, end_time: Float, dt: Float) -> Result<Self, AdvectError> {
        // a non-positive or non-finite step size would spin forever
        if !(dt.is_finite() && dt > 0.0) || end_time < 0.0 {
            return Err(AdvectError::InvalidTimeParameters { dt, end_time });
        }

        Ok(Self {
            t,
            end_time,
            dt,
            steps_taken: 0,
        })
    }

    /// Runs the loop to completion. There is no cancellation; the integrator
    /// is done exactly when `t >= end_time`.
    pub fn advance(&mut self, stepper: &mut Stepper, a: &mut Mat<Float>) {
        while self.t < self.end_time {
            if self.t + self.dt <= self.end_time {
                stepper.step(a);
                self.steps_taken += 1;
            }
            self.t += self.dt;
        }
    }

    pub fn time(&self) -> Float {
        self.t
    }

    pub fn step_size(&self) -> Float {
        self.dt
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn is_done(&self) -> bool {
        self.t >= self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::Scheme;

    fn stepper() -> Stepper {
        Stepper::new(Scheme::Upwind, 1.0)
    }

    fn small_field() -> Mat<Float> {
        Mat::from_fn(4, 1, |i, _| i as Float)
    }

    #[test]
    fn exact_division_steps_end_to_end() {
        // 0.25 is binary-exact, so the clock lands on end_time precisely
        let mut integrator = Integrator::new(0.0, 1.0, 0.25).unwrap();
        integrator.advance(&mut stepper(), &mut small_field());

        assert_eq!(integrator.steps_taken(), 4);
        assert_eq!(integrator.time(), 1.0);
        assert!(integrator.is_done());
    }

    #[test]
    fn overshooting_increment_fires_without_a_step() {
        let mut integrator = Integrator::new(0.0, 1.0, 0.4).unwrap();
        integrator.advance(&mut stepper(), &mut small_field());

        // steps at t = 0.0 and t = 0.4; the increment from t = 0.8 overshoots
        assert_eq!(integrator.steps_taken(), 2);
        assert!(integrator.time() > 1.0);
        assert!(integrator.is_done());
    }

    #[test]
    fn tenth_of_end_time_takes_ten_steps() {
        // repeated 0.1 increments land just below 1.0 in binary, so the tenth
        // step still satisfies t + dt <= end_time before the loop runs out
        let mut integrator = Integrator::new(0.0, 1.0, 0.1).unwrap();
        integrator.advance(&mut stepper(), &mut small_field());

        assert_eq!(integrator.steps_taken(), 10);
        assert!(integrator.is_done());
    }

    #[test]
    fn zero_end_time_never_enters_the_loop() {
        let mut integrator = Integrator::new(0.0, 0.0, 0.5).unwrap();
        integrator.advance(&mut stepper(), &mut small_field());

        assert_eq!(integrator.steps_taken(), 0);
        assert!(integrator.is_done());
    }

    #[test]
    fn bad_time_parameters_are_rejected() {
        assert!(matches!(
            Integrator::new(0.0, 1.0, 0.0),
            Err(AdvectError::InvalidTimeParameters { .. })
        ));
        assert!(matches!(
            Integrator::new(0.0, 1.0, -0.1),
            Err(AdvectError::InvalidTimeParameters { .. })
        ));
        assert!(matches!(
            Integrator::new(0.0, 1.0, Float::INFINITY),
            Err(AdvectError::InvalidTimeParameters { .. })
        ));
        assert!(matches!(
            Integrator::new(0.0, -1.0, 0.1),
            Err(AdvectError::InvalidTimeParameters { .. })
        ));
    }
}
