//! Display driver capability
//!
//! The graph needs only three things from a character display. Anything that
//! can redefine a custom glyph, move its cursor and write a character code
//! can host a graph: an HD44780 driver, an I2C backpack, or the in-memory
//! [`crate::lcd::CharacterLcd`].

use crate::raster::Glyph;

/// A character display with programmable glyph slots
pub trait GlyphDisplay {
    /// Error reported by the underlying display
    type Error: core::fmt::Debug;

    /// Redefine the bitmap of custom glyph `slot`.
    ///
    /// Cells already showing that glyph code update immediately.
    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), Self::Error>;

    /// Move the write cursor to character cell (`col`, `row`)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write one character code at the cursor and advance it
    fn write_glyph(&mut self, code: u8) -> Result<(), Self::Error>;
}

impl<D: GlyphDisplay + ?Sized> GlyphDisplay for &mut D {
    type Error = D::Error;

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), Self::Error> {
        (**self).define_glyph(slot, glyph)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        (**self).set_cursor(col, row)
    }

    fn write_glyph(&mut self, code: u8) -> Result<(), Self::Error> {
        (**self).write_glyph(code)
    }
}
