use faer::Mat;

use crate::{error::AdvectError, faer_add, Float};

// grid[0] <-> 0.0
// grid[i] <-> i * step_size forall i
// grid[points - 1] <-> 1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid1D {
    lower: Float,
    upper: Float,
    points: usize,
    step_size: Float,
}

impl Grid1D {
    /// Equally spaced grid of `points` samples over the closed unit interval.
    pub fn from_points(points: usize) -> Result<Self, AdvectError> {
        if points < 2 {
            return Err(AdvectError::InvalidGridSize(points));
        }

        let (lower, upper) = (0.0, 1.0);
        Ok(Self {
            lower,
            upper,
            points,
            step_size: (upper - lower) / (points - 1) as Float,
        })
    }

    pub fn lower(&self) -> Float {
        self.lower
    }

    pub fn upper(&self) -> Float {
        self.upper
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn step_size(&self) -> Float {
        self.step_size
    }

    pub fn coords(&self) -> Mat<Float> {
        faer_add::linspace(self.lower, self.points, self.step_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_endpoints() {
        let grid = Grid1D::from_points(5).unwrap();
        assert_eq!(grid.points(), 5);
        assert_eq!(grid.step_size(), 0.25);

        let x = grid.coords();
        assert_eq!(x.nrows(), 5);
        assert_eq!(x[(0, 0)], 0.0);
        assert_eq!(x[(4, 0)], 1.0);
    }

    #[test]
    fn two_points_is_the_smallest_grid() {
        let grid = Grid1D::from_points(2).unwrap();
        assert_eq!(grid.step_size(), 1.0);

        assert!(matches!(
            Grid1D::from_points(1),
            Err(AdvectError::InvalidGridSize(1))
        ));
        assert!(matches!(
            Grid1D::from_points(0),
            Err(AdvectError::InvalidGridSize(0))
        ));
    }
}
