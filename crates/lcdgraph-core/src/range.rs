//! Display range and value-to-row mapping
//!
//! Handles transformation between data space (sample values) and glyph
//! space (pixel rows, 0 = top).

use log::{debug, warn};

use crate::constants::{DEFAULT_Y_MAX, DEFAULT_Y_MIN};
use crate::error::{GraphError, GraphResult};
use crate::sample::Sample;
use crate::store::SampleStore;

/// Current `[y_min, y_max]` display range
///
/// The bounds are public so the range can be pinned manually instead of
/// calling [`RangeMapper::rescale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMapper<T: Sample> {
    /// Value drawn on the bottom row
    pub y_min: T,
    /// Value drawn on the top row
    pub y_max: T,
}

impl<T: Sample> Default for RangeMapper<T> {
    fn default() -> Self {
        Self {
            y_min: T::saturating_from(DEFAULT_Y_MIN),
            y_max: T::saturating_from(DEFAULT_Y_MAX),
        }
    }
}

impl<T: Sample> RangeMapper<T> {
    /// Create a mapper with a fixed range
    pub const fn new(y_min: T, y_max: T) -> Self {
        Self { y_min, y_max }
    }

    /// Fit the range to the samples in `store`.
    ///
    /// With `allow_shrink` the scan starts from the oldest sample, so the
    /// range can narrow. Without it the current bounds are the starting
    /// point and the range only ever widens.
    ///
    /// Afterwards zero is pulled into the range when `force_zero` is set or
    /// when every sample is equal, which also keeps the range non-degenerate
    /// for [`RangeMapper::value_to_row`].
    ///
    /// An empty store leaves the range untouched and returns
    /// [`GraphError::NoData`].
    pub fn rescale(
        &mut self,
        store: &SampleStore<T>,
        force_zero: bool,
        allow_shrink: bool,
    ) -> GraphResult<()> {
        let Ok(first) = store.at(0) else {
            warn!("Rescale skipped: no samples");
            return Err(GraphError::NoData);
        };

        if allow_shrink {
            self.y_min = first;
            self.y_max = first;
        }

        for value in store.iter() {
            self.y_min = self.y_min.min(value);
            self.y_max = self.y_max.max(value);
        }

        if force_zero || self.y_min == self.y_max {
            self.y_min = self.y_min.min(T::ZERO);
            self.y_max = self.y_max.max(T::ZERO);
        }

        debug!("Rescaled range to {:?}..={:?}", self.y_min, self.y_max);
        Ok(())
    }

    /// Map a value to a pixel row in `0..pixel_rows`, `y_max` on row 0.
    ///
    /// Integer proportional mapping, truncated toward zero:
    /// `(value - y_max) * (pixel_rows - 1) / (y_min - y_max)`.
    ///
    /// Values outside the range land on rows outside `0..pixel_rows`. A
    /// degenerate range (`y_min == y_max`, only possible when the bounds were
    /// set by hand) maps every value to row 0.
    pub fn value_to_row(&self, value: T, pixel_rows: usize) -> i32 {
        let span = self.y_min.widen() - self.y_max.widen();
        if span == 0 {
            return 0;
        }

        let last_row = pixel_rows.saturating_sub(1) as i128;
        let row = (value.widen() - self.y_max.widen()) * last_row / span;
        row.clamp(i32::MIN as i128, i32::MAX as i128) as i32
    }
}
