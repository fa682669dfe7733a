pub mod driver;
pub mod error;
pub mod faer_add;
pub mod grid;
pub mod integrator;
pub mod linsolve;
pub mod profile;
pub mod scheme;

pub type Float = f64;

pub use driver::{run, Run, RunConfig};
pub use error::AdvectError;
pub use grid::Grid1D;
pub use integrator::Integrator;
pub use profile::Profile;
pub use scheme::{Scheme, Stepper};
