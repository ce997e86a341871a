//! Half-open coordinate axes stepped by integer count.

/// Southern edge of the latitude axis.
pub const LAT_START: f64 = -90.0;
/// Exclusive northern bound of the latitude axis.
pub const LAT_END: f64 = 90.0;
/// Western edge of the longitude axis.
pub const LON_START: f64 = -180.0;
/// Exclusive eastern bound of the longitude axis.
pub const LON_END: f64 = 180.0;

/// A half-open sequence `start, start + step, ...` strictly below `end`.
///
/// Values are computed as `start + i * step` rather than by repeated addition,
/// so cell edges are reproducible regardless of how far along the axis they are.
/// The length matches a half-open numeric range: `ceil((end - start) / step)`,
/// settled against the computed values so the last one is always below `end`.
/// When `step` does not divide the span, the last cell extends past `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

impl Axis {
    /// Creates an axis over `[start, end)`. `step` must be positive and finite.
    pub fn half_open(start: f64, end: f64, step: f64) -> Self {
        debug_assert!(step.is_finite() && step > 0.0);
        let mut axis = Self {
            start,
            end,
            step,
            len: ((end - start) / step).ceil().max(0.0) as usize,
        };
        // The quotient can round across an integer when `step` is inexact (180 / (180 / 227)).
        while axis.len > 0 && axis.value(axis.len - 1) >= end {
            axis.len -= 1;
        }
        axis
    }

    /// Latitude axis over `[-90, 90)`.
    pub fn latitude(step: f64) -> Self {
        Self::half_open(LAT_START, LAT_END, step)
    }

    /// Longitude axis over `[-180, 180)`.
    pub fn longitude(step: f64) -> Self {
        Self::half_open(LON_START, LON_END, step)
    }

    /// Number of values on the axis.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `index`-th value (cell edge) on the axis.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    /// Iterates over all values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.value(i))
    }

    /// Returns the index whose value is exactly `value`.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        let i = ((value - self.start) / self.step).round();
        if !(i >= 0.0 && i < self.len as f64) {
            return None;
        }
        let i = i as usize;
        (self.value(i) == value).then_some(i)
    }

    /// Returns the index of the cell `[value(i), value(i) + step)` that holds `value`.
    ///
    /// Values outside `[start, end)` have no cell.
    pub fn bucket_of(&self, value: f64) -> Option<usize> {
        if !(value >= self.start && value < self.end) || self.len == 0 {
            return None;
        }

        let mut i = (((value - self.start) / self.step).floor() as usize).min(self.len - 1);
        // Division can land one bucket off near an edge; settle against the computed edges.
        if i > 0 && self.value(i) > value {
            i -= 1;
        } else if i + 1 < self.len && self.value(i + 1) <= value {
            i += 1;
        }
        Some(i)
    }
}
