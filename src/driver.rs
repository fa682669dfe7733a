use faer::Mat;

use crate::{
    error::AdvectError,
    grid::Grid1D,
    integrator::Integrator,
    profile::Profile,
    scheme::{Scheme, Stepper},
    Float,
};

/// Parameters for one advection run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub points: usize,
    pub profile: Profile,
    pub scheme: Scheme,
    /// Target Courant number, dimensionless and positive.
    pub courant: Float,
    /// Advection speed `u`; may be negative, must be nonzero.
    pub speed: Float,
    pub end_time: Float,
}

/// A finished run: the grid it ran on, the final field and the derived step
/// data, handed back to the caller for reporting.
#[derive(Debug)]
pub struct Run {
    pub grid: Grid1D,
    pub field: Mat<Float>,
    pub cfl: Float,
    pub dt: Float,
    pub time: Float,
    pub steps: usize,
}

/// Builds a fresh grid and initial field, derives the CFL-limited step size
/// and integrates from t = 0 to `end_time`.
///
/// Each call owns its own grid and field, so independent runs may execute in
/// parallel.
pub fn run(config: &RunConfig) -> Result<Run, AdvectError> {
    let grid = Grid1D::from_points(config.points)?;

    // Δt follows from the target Courant number. The advection speed only
    // enters here; the discrete update sees the folded CFL number. A zero
    // speed or non-positive Courant number surfaces as an invalid step size.
    let dt = config.courant * grid.step_size() / config.speed.abs();
    let mut integrator = Integrator::new(0.0, config.end_time, dt)?;

    tracing::event!(
        tracing::Level::INFO,
        "start of advection run (`{}` scheme, `{}` profile, N={}, CFL={}, Δt={:e}, tend={})",
        config.scheme,
        config.profile,
        config.points,
        config.courant,
        dt,
        config.end_time,
    );

    let mut field = config.profile.sample(&grid);
    let mut stepper = Stepper::new(config.scheme, config.courant);
    integrator.advance(&mut stepper, &mut field);

    tracing::event!(
        tracing::Level::INFO,
        "finished advection run at t={} after {} steps",
        integrator.time(),
        integrator.steps_taken(),
    );

    Ok(Run {
        grid,
        field,
        cfl: config.courant,
        dt,
        time: integrator.time(),
        steps: integrator.steps_taken(),
    })
}
