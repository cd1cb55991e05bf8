//! Hardware-independent core library for lcdgraph
//!
//! Draws a scrolling time-series on an alphanumeric character LCD by
//! synthesising the display's programmable glyphs from sampled data. The
//! pieces, leaf first:
//!
//! - [`store::SampleStore`]: fixed-capacity circular sample buffer
//! - [`range::RangeMapper`]: display range and value-to-pixel-row mapping
//! - [`raster::rasterize_block`]: builds one 5x8 glyph from a window of samples
//! - [`graph::LcdGraph`]: owns the above and talks to a [`driver::GlyphDisplay`]
//!
//! It is `#![no_std]` so it compiles on both embedded targets and desktop
//! hosts (for the simulator and tests). No allocator is required.
//!
//! # Examples
//!
//! ```
//! use lcdgraph_core::graph::LcdGraph;
//! use lcdgraph_core::lcd::CharacterLcd;
//!
//! let mut lcd = CharacterLcd::<16, 2>::new();
//! let mut graph = LcdGraph::<i16, _>::new(8, 0).unwrap();
//! graph.begin(&mut lcd);
//!
//! for value in [3, 5, -2, 7] {
//!     graph.append(value);
//! }
//! graph.rescale(true, true).unwrap();
//! graph.publish().unwrap();
//! graph.draw(0, 0).unwrap();
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod graph;
pub mod lcd;
pub mod range;
pub mod raster;
pub mod sample;
pub mod shared;
pub mod store;

pub use config::GraphConfig;
pub use driver::GlyphDisplay;
pub use error::{DisplayError, GraphError, GraphResult, LcdError};
pub use graph::LcdGraph;
pub use raster::{Glyph, GraphStyle};
pub use sample::Sample;
