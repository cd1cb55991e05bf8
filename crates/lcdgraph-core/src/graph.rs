//! Scrolling graph drawn with custom glyphs
//!
//! [`LcdGraph`] ties the sample buffer, the display range and the glyph
//! rasterizer together and talks to the display through [`GlyphDisplay`].
//!
//! The graph occupies `width` consecutive glyph slots starting at
//! `first_slot`. Only eight slots exist on a typical controller, so two
//! graphs on the same display must use disjoint slot ranges:
//!
//! ```
//! use lcdgraph_core::graph::LcdGraph;
//! use lcdgraph_core::lcd::CharacterLcd;
//!
//! let mut left = LcdGraph::<i16, CharacterLcd<16, 2>>::new(4, 0).unwrap();
//! let right = LcdGraph::<i16, CharacterLcd<16, 2>>::new(4, 4).unwrap();
//! assert!(LcdGraph::<i16, CharacterLcd<16, 2>>::new(4, 5).is_err());
//! # let _ = (&mut left, right);
//! ```
//!
//! Typical loop: [`LcdGraph::append`] new samples, [`LcdGraph::rescale`],
//! [`LcdGraph::publish`]. [`LcdGraph::draw`] only has to run once while the
//! graph stays in the same place, because redefining a glyph updates every
//! cell that shows it.

use core::ops::Range;

use heapless::Vec;
use log::debug;

use crate::config::GraphConfig;
use crate::constants::{COLUMNS_PER_GLYPH, MAX_GLYPH_SLOTS};
use crate::driver::GlyphDisplay;
use crate::error::{DisplayError, GraphResult};
use crate::range::RangeMapper;
use crate::raster::{Glyph, GraphStyle, rasterize_block};
use crate::sample::Sample;
use crate::store::SampleStore;

/// A one-row graph built from `width` custom glyphs
pub struct LcdGraph<T: Sample, D> {
    /// Samples shown, oldest on the left
    store: SampleStore<T>,
    /// Display range; set the bounds directly to bypass [`LcdGraph::rescale`]
    pub range: RangeMapper<T>,
    /// Fill and axis flags
    pub style: GraphStyle,
    /// Width in characters
    width: u8,
    /// First custom glyph slot used
    first_slot: u8,
    /// Attached display, if any
    display: Option<D>,
}

impl<T: Sample, D: GlyphDisplay> LcdGraph<T, D> {
    /// Create a graph `width` characters wide using glyph slots
    /// `first_slot..first_slot + width`.
    pub fn new(width: u8, first_slot: u8) -> GraphResult<Self> {
        Self::from_config(&GraphConfig {
            width,
            first_slot,
            ..GraphConfig::default()
        })
    }

    /// Create a graph from a stored configuration
    pub fn from_config(config: &GraphConfig) -> GraphResult<Self> {
        config.validate()?;

        Ok(Self {
            store: SampleStore::new(config.width as usize * COLUMNS_PER_GLYPH)?,
            range: RangeMapper::default(),
            style: config.style,
            width: config.width,
            first_slot: config.first_slot,
            display: None,
        })
    }

    /// Attach the display driver. Pass `&mut driver` to keep ownership.
    pub fn begin(&mut self, display: D) {
        self.display = Some(display);
    }

    /// Detach and return the display driver
    pub fn detach(&mut self) -> Option<D> {
        self.display.take()
    }

    /// Whether a display driver is attached
    pub fn is_attached(&self) -> bool {
        self.display.is_some()
    }

    /// Add a sample, dropping the oldest once the graph is full
    pub fn append(&mut self, value: T) {
        self.store.append(value);
    }

    /// Remove all samples
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Fit the display range to the current samples.
    ///
    /// See [`RangeMapper::rescale`].
    pub fn rescale(&mut self, force_zero: bool, allow_shrink: bool) -> GraphResult<()> {
        self.range.rescale(&self.store, force_zero, allow_shrink)
    }

    /// Number of samples currently shown
    pub fn sample_count(&self) -> usize {
        self.store.len()
    }

    /// Sample at a logical position (0 = oldest)
    pub fn sample(&self, index: usize) -> GraphResult<T> {
        self.store.at(index)
    }

    /// Maximum number of samples shown
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Width in characters
    pub fn width(&self) -> u8 {
        self.width
    }

    /// First custom glyph slot used
    pub fn first_slot(&self) -> u8 {
        self.first_slot
    }

    /// Character codes making up the graph, left to right
    pub fn glyph_codes(&self) -> Range<u8> {
        self.first_slot..self.first_slot + self.width
    }

    /// Rasterize every glyph of the graph, left to right.
    ///
    /// The oldest samples end up in the leftmost glyph.
    pub fn render(&self) -> Vec<Glyph, MAX_GLYPH_SLOTS> {
        (0..self.width as usize)
            .map(|block| {
                rasterize_block(
                    &self.store,
                    block * COLUMNS_PER_GLYPH,
                    COLUMNS_PER_GLYPH,
                    &self.range,
                    &self.style,
                )
            })
            .collect()
    }

    /// Send the current glyphs to the display's custom glyph slots.
    ///
    /// Cells already showing the graph update in place.
    pub fn publish(&mut self) -> Result<(), DisplayError<D::Error>> {
        let glyphs = self.render();
        let display = self.display.as_mut().ok_or(DisplayError::Detached)?;

        for (slot, glyph) in (self.first_slot..).zip(glyphs.iter()) {
            display
                .define_glyph(slot, glyph)
                .map_err(DisplayError::Driver)?;
        }

        debug!(
            "Published {} glyphs to slots {}..{} ({} samples)",
            glyphs.len(),
            self.first_slot,
            self.first_slot + self.width,
            self.store.len()
        );
        Ok(())
    }

    /// Place the graph with its left edge at character cell (`col`, `row`)
    pub fn draw(&mut self, col: u8, row: u8) -> Result<(), DisplayError<D::Error>> {
        let codes = self.glyph_codes();
        let display = self.display.as_mut().ok_or(DisplayError::Detached)?;

        display.set_cursor(col, row).map_err(DisplayError::Driver)?;
        for code in codes {
            display.write_glyph(code).map_err(DisplayError::Driver)?;
        }

        debug!("Drew graph at ({}, {})", col, row);
        Ok(())
    }
}

impl<T: Sample, D> core::fmt::Debug for LcdGraph<T, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LcdGraph")
            .field("range", &self.range)
            .field("style", &self.style)
            .field("width", &self.width)
            .field("first_slot", &self.first_slot)
            .field("samples", &self.store.len())
            .field("attached", &self.display.is_some())
            .finish()
    }
}
