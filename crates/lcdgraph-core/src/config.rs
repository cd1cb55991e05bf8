//! Persistent graph configuration
//!
//! Geometry and style of a graph, serializable with `postcard` so an
//! embedding program can keep it in EEPROM or flash next to its other
//! settings.

use core::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WIDTH_GLYPHS, MAX_GLYPH_SLOTS};
use crate::error::{GraphError, GraphResult};
use crate::raster::GraphStyle;

/// Persistent layout and style of one graph
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Width in characters
    pub width: u8,
    /// First custom glyph slot
    pub first_slot: u8,
    /// How samples and axes are drawn
    pub style: GraphStyle,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH_GLYPHS,
            first_slot: 0,
            style: GraphStyle::default(),
        }
    }
}

impl GraphConfig {
    /// Check the graph fits in the display's glyph slots
    pub fn validate(&self) -> GraphResult<()> {
        if self.width == 0 {
            return Err(GraphError::InvalidWidth { width: self.width });
        }

        let end = self.first_slot as usize + self.width as usize;
        if end > MAX_GLYPH_SLOTS {
            return Err(GraphError::SlotRangeExceeded {
                first: self.first_slot,
                end,
                max: MAX_GLYPH_SLOTS,
            });
        }

        Ok(())
    }

    /// Glyph slots used by the graph
    pub fn slot_range(&self) -> Range<usize> {
        self.first_slot as usize..self.first_slot as usize + self.width as usize
    }

    /// Whether two graphs would fight over the same glyph slots
    pub fn overlaps(&self, other: &GraphConfig) -> bool {
        let (a, b) = (self.slot_range(), other.slot_range());
        a.start < b.end && b.start < a.end
    }

    /// Encode into `buf`, returning the used prefix
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> GraphResult<&'a mut [u8]> {
        postcard::to_slice(self, buf).map_err(|_| GraphError::ConfigEncoding)
    }

    /// Decode and validate a configuration written by [`GraphConfig::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> GraphResult<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| GraphError::ConfigEncoding)?;
        config.validate()?;
        Ok(config)
    }
}
