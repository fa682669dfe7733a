use std::fmt;
use std::str::FromStr;

use faer::Mat;

use crate::{error::AdvectError, faer_add::apply_func, grid::Grid1D, Float};

/// Analytic initial profile, sampled onto a grid once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// 1.0 on `[0.35, 0.65]`, 0.0 outside.
    TopHat,
    /// Normalised bump centred on the interval, full width at half maximum 0.1.
    Gaussian,
}

impl Profile {
    pub fn sample(&self, grid: &Grid1D) -> Mat<Float> {
        let x = grid.coords();

        match self {
            Profile::TopHat => apply_func(&x, |x| {
                if (0.35..=0.65).contains(&x) {
                    1.0
                } else {
                    0.0
                }
            }),
            Profile::Gaussian => {
                let sigma = 0.1 / (2.0 * (2.0 * (2.0 as Float).ln()).sqrt());
                let mu = 0.5;
                let peak = 1.0 / (sigma * (2.0 * std::f64::consts::PI).sqrt());
                apply_func(&x, |x| {
                    peak * (-(x - mu) * (x - mu) / (2.0 * sigma * sigma)).exp()
                })
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::TopHat => "tophat",
            Profile::Gaussian => "gaussian",
        }
    }
}

impl FromStr for Profile {
    type Err = AdvectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tophat" | "top-hat" => Ok(Profile::TopHat),
            "gaussian" => Ok(Profile::Gaussian),
            _ => Err(AdvectError::InvalidProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
