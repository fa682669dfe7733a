use std::fmt;
use std::str::FromStr;

use faer_core::{zipped, Mat};

use crate::{error::AdvectError, Float};

/// Explicit finite-difference update, selected once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// First-order upwind, differencing towards the left neighbour.
    Upwind,
    /// Forward-time centred-space, with a one-sided wrap at the last point.
    Ftcs,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Upwind => "upwind",
            Scheme::Ftcs => "FTCS",
        }
    }
}

impl FromStr for Scheme {
    type Err = AdvectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upwind" | "upwinding" => Ok(Scheme::Upwind),
            "ftcs" => Ok(Scheme::Ftcs),
            _ => Err(AdvectError::InvalidScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Advances a field one step at a time, reusing a scratch buffer so the inner
/// loop never allocates.
pub struct Stepper {
    scheme: Scheme,
    cfl: Float,
    scratch: Mat<Float>,
}

impl Stepper {
    /// `cfl` is the folded Courant number `u*Δt/Δx`; the caller derives it
    /// together with the step size.
    pub fn new(scheme: Scheme, cfl: Float) -> Self {
        Self {
            scheme,
            cfl,
            scratch: Mat::new(),
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// One explicit time step, in place.
    ///
    /// The first sample is overwritten with the last before anything is read,
    /// so the trailing edge feeds the leading edge each step. The update is
    /// computed into the scratch buffer from the pre-step field and only then
    /// copied back.
    pub fn step(&mut self, a: &mut Mat<Float>) {
        let n = a.nrows();
        debug_assert!(n >= 2, "schemes index at least two neighbours");

        // periodic wrap
        a[(0, 0)] = a[(n - 1, 0)];

        if self.scratch.nrows() != n {
            self.scratch.resize_with(n, 1, |_, _| 0.0);
        }

        let cfl = self.cfl;
        match self.scheme {
            Scheme::Upwind => {
                let v = a.as_ref().submatrix(1, 0, n - 1, 1);
                let vm = a.as_ref().submatrix(0, 0, n - 1, 1);

                zipped!(self.scratch.as_mut().submatrix(1, 0, n - 1, 1), v, vm).for_each(
                    |mut new, v, vm| new.write(v.read() - cfl * (v.read() - vm.read())),
                );
            }
            Scheme::Ftcs => {
                let v = a.as_ref().submatrix(1, 0, n - 2, 1);
                let vm = a.as_ref().submatrix(0, 0, n - 2, 1);
                let vp = a.as_ref().submatrix(2, 0, n - 2, 1);

                zipped!(self.scratch.as_mut().submatrix(1, 0, n - 2, 1), v, vm, vp).for_each(
                    |mut new, v, vm, vp| {
                        new.write(v.read() - 0.5 * cfl * (vp.read() - vm.read()))
                    },
                );

                // the last point wraps through the freshly copied boundary
                // sample instead of a centred difference; kept as-is from the
                // reference scheme
                self.scratch[(n - 1, 0)] = 0.5 * cfl * (a[(0, 0)] - a[(n - 2, 0)]);
            }
        }
        self.scratch[(0, 0)] = a[(0, 0)];

        zipped!(a.as_mut(), self.scratch.as_ref()).for_each(|mut a, new| a.write(new.read()));
    }
}
