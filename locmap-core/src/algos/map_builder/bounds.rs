use crate::{
    error::MapError,
    types::{Bounds, Location},
};

/// Running min/max of the projected coordinates, widened one location at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoundsAccumulator {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    count: usize,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        BoundsAccumulator {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            count: 0,
        }
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, location: &Location) {
        self.min_x = self.min_x.min(location.x);
        self.max_x = self.max_x.max(location.x);
        self.min_y = self.min_y.min(location.y);
        self.max_y = self.max_y.max(location.y);
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Pads the observed extent by `padding` on every side.
    ///
    /// Fails with [MapError::EmptyResult] when nothing was observed, since the
    /// seed values would give an infinite viewport, and with
    /// [MapError::UnboundedViewport] when the extent overflows.
    pub fn finish(self, padding: f64) -> Result<Bounds, MapError> {
        if self.count == 0 {
            return Err(MapError::EmptyResult);
        }

        let bounds = Bounds {
            min_x: self.min_x - padding,
            max_x: self.max_x + padding,
            min_y: self.min_y - padding,
            max_y: self.max_y + padding,
        };

        // Finite corners can still be too far apart for a finite width.
        if !bounds.width().is_finite() || !bounds.height().is_finite() {
            return Err(MapError::UnboundedViewport(bounds));
        }

        Ok(bounds)
    }
}
