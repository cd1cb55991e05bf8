//! In-memory HD44780-style character LCD
//!
//! Models the parts of a character LCD a graph touches: eight CGRAM glyph
//! slots, a grid of character codes and a write cursor. It implements
//! [`GlyphDisplay`] so graphs can run without hardware, and
//! [`Drawable`] so the panel can be rendered onto any `embedded-graphics`
//! target (a simulator window, an image, a TFT).

use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_5X8};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::constants::{
    COLUMNS_PER_GLYPH, GLYPH_ROWS, LCD_BACKGROUND, LCD_CELL_PITCH_X_PX, LCD_CELL_PITCH_Y_PX,
    LCD_PIXEL_OFF, LCD_PIXEL_ON, MAX_GLYPH_SLOTS,
};
use crate::driver::GlyphDisplay;
use crate::error::LcdError;
use crate::raster::Glyph;

/// Character code of an empty cell
const BLANK_CODE: u8 = b' ';

/// Character codes below this value address CGRAM (codes 8..16 mirror 0..8)
const CGRAM_CODE_END: u8 = 16;

/// Emulated `COLS` x `ROWS` character LCD
#[derive(Debug, Clone)]
pub struct CharacterLcd<const COLS: usize, const ROWS: usize> {
    cgram: [Glyph; MAX_GLYPH_SLOTS],
    ddram: [[u8; COLS]; ROWS],
    cursor: (usize, usize),
    origin: Point,
}

impl<const COLS: usize, const ROWS: usize> Default for CharacterLcd<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> CharacterLcd<COLS, ROWS> {
    /// A blank display with the cursor at the home position
    pub const fn new() -> Self {
        Self {
            cgram: [Glyph::BLANK; MAX_GLYPH_SLOTS],
            ddram: [[BLANK_CODE; COLS]; ROWS],
            cursor: (0, 0),
            origin: Point::zero(),
        }
    }

    /// Set where the panel's top-left pixel is drawn
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Blank every cell and home the cursor. CGRAM is kept.
    pub fn clear(&mut self) {
        self.ddram = [[BLANK_CODE; COLS]; ROWS];
        self.cursor = (0, 0);
    }

    /// Write ASCII text at the cursor
    pub fn write_str(&mut self, text: &str) -> Result<(), LcdError> {
        text.bytes().try_for_each(|code| self.write_glyph(code))
    }

    /// Character code shown in a cell
    pub fn code_at(&self, col: usize, row: usize) -> Option<u8> {
        self.ddram.get(row)?.get(col).copied()
    }

    /// Bitmap currently stored in a CGRAM slot
    pub fn glyph(&self, slot: usize) -> Option<&Glyph> {
        self.cgram.get(slot)
    }

    /// Custom glyph displayed for a character code, if it addresses CGRAM
    fn custom_glyph(&self, code: u8) -> Option<&Glyph> {
        if code < CGRAM_CODE_END {
            self.cgram.get(code as usize % MAX_GLYPH_SLOTS)
        } else {
            None
        }
    }

    /// Whether pixel (`x`, `y`) of a cell showing a custom glyph is lit.
    ///
    /// Cells holding text or out of range report `false`.
    pub fn cell_pixel(&self, col: usize, row: usize, x: usize, y: usize) -> bool {
        self.code_at(col, row)
            .and_then(|code| self.custom_glyph(code))
            .is_some_and(|glyph| glyph.is_lit(x, y))
    }

    /// Pixel size of the whole panel including the gaps between cells
    pub fn size_px(&self) -> Size {
        Size::new(
            (COLS as i32 * LCD_CELL_PITCH_X_PX - 1).max(0) as u32,
            (ROWS as i32 * LCD_CELL_PITCH_Y_PX - 1).max(0) as u32,
        )
    }

    /// Top-left pixel of a character cell
    fn cell_origin(&self, col: usize, row: usize) -> Point {
        self.origin
            + Point::new(
                col as i32 * LCD_CELL_PITCH_X_PX,
                row as i32 * LCD_CELL_PITCH_Y_PX,
            )
    }
}

impl<const COLS: usize, const ROWS: usize> GlyphDisplay for CharacterLcd<COLS, ROWS> {
    type Error = LcdError;

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), Self::Error> {
        let entry = self
            .cgram
            .get_mut(slot as usize)
            .ok_or(LcdError::SlotOutOfRange {
                slot,
                max: MAX_GLYPH_SLOTS,
            })?;
        *entry = *glyph;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        if col as usize >= COLS || row as usize >= ROWS {
            return Err(LcdError::CursorOutOfBounds { col, row });
        }

        self.cursor = (col as usize, row as usize);
        Ok(())
    }

    fn write_glyph(&mut self, code: u8) -> Result<(), Self::Error> {
        let (col, row) = self.cursor;
        let cell = self
            .ddram
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(LcdError::CursorOutOfBounds {
                col: col.min(u8::MAX as usize) as u8,
                row: row.min(u8::MAX as usize) as u8,
            })?;

        *cell = code;
        self.cursor.0 += 1;
        Ok(())
    }
}

impl<const COLS: usize, const ROWS: usize> Drawable for CharacterLcd<COLS, ROWS> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_solid(&Rectangle::new(self.origin, self.size_px()), LCD_BACKGROUND)?;

        let text_style = MonoTextStyle::new(&FONT_5X8, LCD_PIXEL_ON);
        let cell_size = Size::new(COLUMNS_PER_GLYPH as u32, GLYPH_ROWS as u32);

        for (row, codes) in self.ddram.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                let top_left = self.cell_origin(col, row);
                target.fill_solid(&Rectangle::new(top_left, cell_size), LCD_PIXEL_OFF)?;

                if let Some(glyph) = self.custom_glyph(code) {
                    let pixels = (0..GLYPH_ROWS)
                        .flat_map(|y| (0..COLUMNS_PER_GLYPH).map(move |x| (x, y)))
                        .filter(|&(x, y)| glyph.is_lit(x, y))
                        .map(|(x, y)| {
                            Pixel(top_left + Point::new(x as i32, y as i32), LCD_PIXEL_ON)
                        });
                    target.draw_iter(pixels)?;
                } else if code.is_ascii_graphic() {
                    let mut buf = [0u8; 4];
                    let text = char::from(code).encode_utf8(&mut buf);
                    Text::with_baseline(text, top_left, text_style, Baseline::Top).draw(target)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_define_and_write() {
        let mut lcd = CharacterLcd::<4, 2>::new();
        let glyph = Glyph([0b10001; GLYPH_ROWS]);

        lcd.define_glyph(3, &glyph).unwrap();
        lcd.set_cursor(1, 1).unwrap();
        lcd.write_glyph(3).unwrap();
        lcd.write_glyph(4).unwrap();

        assert_eq!(lcd.glyph(3), Some(&glyph));
        assert_eq!(lcd.code_at(1, 1), Some(3));
        assert_eq!(lcd.code_at(2, 1), Some(4));
        assert_eq!(lcd.code_at(0, 0), Some(BLANK_CODE));
        assert!(lcd.cell_pixel(1, 1, 0, 0));
        assert!(!lcd.cell_pixel(1, 1, 1, 0));
        assert!(lcd.cell_pixel(1, 1, 4, 7));
    }

    #[test]
    fn test_bad_slot_and_cursor() {
        let mut lcd = CharacterLcd::<4, 2>::new();
        assert_eq!(
            lcd.define_glyph(8, &Glyph::BLANK),
            Err(LcdError::SlotOutOfRange { slot: 8, max: 8 })
        );
        assert_eq!(
            lcd.set_cursor(4, 0),
            Err(LcdError::CursorOutOfBounds { col: 4, row: 0 })
        );
        assert!(lcd.set_cursor(0, 2).is_err());
    }

    #[test]
    fn test_write_past_end_of_row() {
        let mut lcd = CharacterLcd::<2, 1>::new();
        lcd.write_str("ab").unwrap();
        assert_eq!(
            lcd.write_glyph(b'c'),
            Err(LcdError::CursorOutOfBounds { col: 2, row: 0 })
        );
    }

    #[test]
    fn test_cgram_mirror_codes() {
        let mut lcd = CharacterLcd::<2, 1>::new();
        lcd.define_glyph(1, &Glyph([0b11111; GLYPH_ROWS])).unwrap();
        lcd.write_glyph(9).unwrap();
        assert!(lcd.cell_pixel(0, 0, 2, 2));
    }

    #[test]
    fn test_clear_keeps_cgram() {
        let mut lcd = CharacterLcd::<2, 1>::new();
        let glyph = Glyph([0b00100; GLYPH_ROWS]);
        lcd.define_glyph(0, &glyph).unwrap();
        lcd.write_glyph(0).unwrap();
        lcd.clear();

        assert_eq!(lcd.code_at(0, 0), Some(BLANK_CODE));
        assert_eq!(lcd.glyph(0), Some(&glyph));
    }

    #[test]
    fn test_draw_custom_glyph() {
        let mut lcd = CharacterLcd::<8, 2>::new();
        let mut rows = [0; GLYPH_ROWS];
        rows[0] = 0b10000;
        lcd.define_glyph(0, &Glyph(rows)).unwrap();
        lcd.set_cursor(1, 0).unwrap();
        lcd.write_glyph(0).unwrap();

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        lcd.draw(&mut display).unwrap();

        // cell (1, 0) starts at x = 6
        assert_eq!(display.get_pixel(Point::new(6, 0)), Some(LCD_PIXEL_ON));
        assert_eq!(display.get_pixel(Point::new(7, 0)), Some(LCD_PIXEL_OFF));
        assert_eq!(display.get_pixel(Point::new(5, 0)), Some(LCD_BACKGROUND));
        assert_eq!(display.get_pixel(Point::new(46, 16)), Some(LCD_PIXEL_OFF));
        assert_eq!(display.get_pixel(Point::new(47, 0)), None);
    }

    #[test]
    fn test_size_px() {
        let lcd = CharacterLcd::<16, 2>::new();
        assert_eq!(lcd.size_px(), Size::new(95, 17));
    }
}
