//! Geometry and default constants
//!
//! All magic numbers are defined here with descriptive names and units.
//! The glyph geometry matches the common HD44780 5x8 character cell.

use embedded_graphics::pixelcolor::Rgb565;

/// Pixel columns in one character glyph
pub const COLUMNS_PER_GLYPH: usize = 5;

/// Pixel rows in one character glyph
///
/// Some displays use 5x10 cells; this crate targets the 5x8 layout.
pub const GLYPH_ROWS: usize = 8;

/// Number of programmable glyph slots (CGRAM entries) on the display
///
/// Every graph on screen takes one slot per character of width, so this
/// budget has to be partitioned by the caller.
pub const MAX_GLYPH_SLOTS: usize = 8;

/// Largest sample buffer a single graph can need (all slots, 5 columns each)
pub const MAX_SAMPLES: usize = MAX_GLYPH_SLOTS * COLUMNS_PER_GLYPH;

/// Mask of the bits of a glyph row that map to pixel columns
pub const GLYPH_ROW_MASK: u8 = (1 << COLUMNS_PER_GLYPH) - 1;

/// Lower bound of the display range before the first rescale
pub const DEFAULT_Y_MIN: i128 = 0;

/// Upper bound of the display range before the first rescale
pub const DEFAULT_Y_MAX: i128 = 255;

/// Default graph width in characters (all glyph slots)
pub const DEFAULT_WIDTH_GLYPHS: u8 = MAX_GLYPH_SLOTS as u8;

/// Serialized size upper bound of a [`crate::config::GraphConfig`] in bytes
pub const CONFIG_MAX_ENCODED_LEN: usize = 16;

/// Horizontal distance between the left edges of two LCD cells in pixels
pub const LCD_CELL_PITCH_X_PX: i32 = COLUMNS_PER_GLYPH as i32 + 1;

/// Vertical distance between the top edges of two LCD rows in pixels
pub const LCD_CELL_PITCH_Y_PX: i32 = GLYPH_ROWS as i32 + 1;

/// LCD backlight / unlit pixel colour (yellow-green panel)
pub const LCD_BACKGROUND: Rgb565 = Rgb565::new(18, 50, 2);

/// Colour of a lit LCD pixel
pub const LCD_PIXEL_ON: Rgb565 = Rgb565::new(2, 8, 2);

/// Colour of an unlit pixel inside a character cell
pub const LCD_PIXEL_OFF: Rgb565 = Rgb565::new(16, 46, 2);
