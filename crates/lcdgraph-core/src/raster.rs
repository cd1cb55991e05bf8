//! Glyph synthesis
//!
//! Turns a window of up to [`COLUMNS_PER_GLYPH`] samples into one 5x8
//! character bitmap. Each pixel combines up to four elements:
//!
//! 1. the x-axis, a full lit row at the row of value zero
//! 2. the y-axis, the leftmost pixel column of the leftmost glyph
//! 3. the data point of each column
//! 4. fill shading between each point and the x-axis
//!
//! A point landing on a lit x-axis pixel is either inverted (drawn as a gap,
//! [`GraphStyle::mark_intercepts`]) or merged into the axis. Fill and y-axis
//! pixels are only ever OR-ed in.

use serde::{Deserialize, Serialize};

use crate::constants::{COLUMNS_PER_GLYPH, GLYPH_ROW_MASK, GLYPH_ROWS};
use crate::range::RangeMapper;
use crate::sample::Sample;
use crate::store::SampleStore;

/// Visual style flags for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStyle {
    /// Shade the pixels between each point and the x-axis
    pub filled: bool,
    /// Draw the row of value zero
    pub show_x_axis: bool,
    /// Draw the leftmost pixel column of the graph
    pub show_y_axis: bool,
    /// Draw points that land on the lit x-axis as a gap instead of hiding them
    pub mark_intercepts: bool,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            filled: true,
            show_x_axis: true,
            show_y_axis: true,
            mark_intercepts: false,
        }
    }
}

/// Bitmap of one custom character
///
/// One byte per pixel row, top row first. Only the low
/// [`COLUMNS_PER_GLYPH`] bits are used; bit 4 is the leftmost column, which
/// is the layout HD44780-style controllers expect in CGRAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph(pub [u8; GLYPH_ROWS]);

impl Glyph {
    /// An all-dark glyph
    pub const BLANK: Self = Self([0; GLYPH_ROWS]);

    /// Raw row bytes, top row first
    pub fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.0
    }

    /// Whether the pixel at (`column`, `row`) is lit
    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        row < GLYPH_ROWS && column < COLUMNS_PER_GLYPH && self.0[row] & column_bit(column) != 0
    }
}

/// Row bit of a pixel column, column 0 being the most significant used bit
#[inline]
pub const fn column_bit(column: usize) -> u8 {
    1 << (COLUMNS_PER_GLYPH - 1 - column)
}

/// Whether `row` lies strictly between `a` and `b`
#[inline]
fn strictly_between(row: i32, a: i32, b: i32) -> bool {
    (row > a && row < b) || (row < a && row > b)
}

/// Build the glyph for the samples at logical positions
/// `start..start + columns` of `store`.
///
/// Columns without a sample (past the end of the data) draw nothing but the
/// axes. The y-axis is drawn only in the leftmost glyph, i.e. the window that
/// starts at logical position 0.
pub fn rasterize_block<T: Sample>(
    store: &SampleStore<T>,
    start: usize,
    columns: usize,
    mapper: &RangeMapper<T>,
    style: &GraphStyle,
) -> Glyph {
    let mut points = [None; COLUMNS_PER_GLYPH];
    for (column, point) in points.iter_mut().enumerate().take(columns) {
        *point = store
            .at(start + column)
            .ok()
            .map(|value| mapper.value_to_row(value, GLYPH_ROWS));
    }

    let x_axis = mapper.value_to_row(T::ZERO, GLYPH_ROWS);
    let leftmost = start == 0;

    let mut glyph = Glyph::BLANK;
    for (row, bits) in glyph.0.iter_mut().enumerate() {
        let row = row as i32;

        if style.show_x_axis && row == x_axis {
            *bits = GLYPH_ROW_MASK;
        }

        for (column, point) in points.iter().enumerate() {
            let Some(point) = *point else {
                continue;
            };
            let bit = column_bit(column);

            if point == row {
                if style.mark_intercepts {
                    *bits ^= bit;
                } else {
                    *bits |= bit;
                }
            } else if style.filled && strictly_between(row, point, x_axis) {
                *bits |= bit;
            }
        }

        if style.show_y_axis && leftmost {
            *bits |= column_bit(0);
        }
    }

    glyph
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: GraphStyle = GraphStyle {
        filled: false,
        show_x_axis: false,
        show_y_axis: false,
        mark_intercepts: false,
    };

    fn store_of(capacity: usize, values: &[i16]) -> SampleStore<i16> {
        let mut store = SampleStore::new(capacity).unwrap();
        for &value in values {
            store.append(value);
        }
        store
    }

    #[test]
    fn test_column_bits() {
        assert_eq!(column_bit(0), 0b10000);
        assert_eq!(column_bit(4), 0b00001);
    }

    #[test]
    fn test_points_only() {
        let store = store_of(5, &[1, 2, 3, 4, 5]);
        let mut mapper = RangeMapper::default();
        mapper.rescale(&store, false, true).unwrap();

        let glyph = rasterize_block(&store, 0, 5, &mapper, &PLAIN);
        // rows: 1 -> 7, 2 -> 5, 3 -> 3, 4 -> 1, 5 -> 0
        assert_eq!(
            glyph,
            Glyph([
                0b00001, 0b00010, 0b00000, 0b00100, 0b00000, 0b01000, 0b00000, 0b10000,
            ])
        );
    }

    #[test]
    fn test_missing_columns_draw_nothing() {
        let store = store_of(10, &[5, 5, 5, 5, 5, 5]);
        let mapper = RangeMapper::new(0, 5);

        let glyph = rasterize_block(&store, 5, 5, &mapper, &PLAIN);
        assert_eq!(glyph.rows()[0], 0b10000);
        assert!(glyph.rows()[1..].iter().all(|&row| row == 0));
    }

    #[test]
    fn test_x_axis_row_is_full() {
        let store = store_of(5, &[]);
        let mapper = RangeMapper::new(-7, 7);
        let style = GraphStyle {
            show_x_axis: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        // (0 - 7) * 7 / -14 = 3
        assert_eq!(glyph.rows()[3], GLYPH_ROW_MASK);
        assert_eq!(glyph.rows().iter().filter(|&&row| row != 0).count(), 1);
    }

    #[test]
    fn test_x_axis_outside_range_not_drawn() {
        let store = store_of(5, &[10, 20]);
        let mapper = RangeMapper::new(10, 20);
        let style = GraphStyle {
            show_x_axis: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        assert_eq!(glyph.rows()[0], 0b01000);
        assert_eq!(glyph.rows()[7], 0b10000);
        assert_eq!(glyph.rows().iter().filter(|&&row| row != 0).count(), 2);
    }

    #[test]
    fn test_intercept_marked_as_gap() {
        let store = store_of(5, &[0, 7, 0]);
        let mapper = RangeMapper::new(-7, 7);
        let style = GraphStyle {
            show_x_axis: true,
            mark_intercepts: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        assert_eq!(glyph.rows()[3], 0b01011);
        assert!(!glyph.is_lit(0, 3));
        assert!(glyph.is_lit(1, 3));
        assert!(!glyph.is_lit(2, 3));
        assert!(glyph.is_lit(1, 0));
    }

    #[test]
    fn test_intercept_hidden() {
        let store = store_of(5, &[0, 7, 0]);
        let mapper = RangeMapper::new(-7, 7);
        let style = GraphStyle {
            show_x_axis: true,
            mark_intercepts: false,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        assert_eq!(glyph.rows()[3], GLYPH_ROW_MASK);
    }

    #[test]
    fn test_marked_point_off_axis_is_lit() {
        let store = store_of(5, &[7]);
        let mapper = RangeMapper::new(-7, 7);
        let style = GraphStyle {
            mark_intercepts: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        assert!(glyph.is_lit(0, 0));
    }

    #[test]
    fn test_fill_positive_value() {
        // x-axis at row 7, value 7 at row 0
        let store = store_of(5, &[7]);
        let mapper = RangeMapper::new(0, 7);
        let style = GraphStyle {
            filled: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        assert!(glyph.is_lit(0, 0));
        for row in 1..7 {
            assert!(glyph.is_lit(0, row), "row {row} should be filled");
        }
        assert!(!glyph.is_lit(0, 7), "axis row must not be filled");
    }

    #[test]
    fn test_fill_negative_value() {
        // x-axis at row 3, value -7 at row 7
        let store = store_of(5, &[0, -7]);
        let mapper = RangeMapper::new(-7, 7);
        let style = GraphStyle {
            filled: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        let column: Vec<bool> = (0..GLYPH_ROWS).map(|row| glyph.is_lit(1, row)).collect();
        assert_eq!(
            column,
            vec![false, false, false, false, true, true, true, true]
        );
    }

    #[test]
    fn test_fill_never_passes_point() {
        // value 2 -> row (2 - 7) * 7 / -7 = 5, axis at row 7
        let store = store_of(5, &[2]);
        let mapper = RangeMapper::new(0, 7);
        let style = GraphStyle {
            filled: true,
            show_x_axis: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        let column: Vec<bool> = (0..GLYPH_ROWS).map(|row| glyph.is_lit(0, row)).collect();
        assert_eq!(
            column,
            vec![false, false, false, false, false, true, true, true]
        );
    }

    #[test]
    fn test_fill_clips_value_above_range() {
        // value 20 maps above the glyph; fill runs from the top to the axis
        let store = store_of(5, &[20]);
        let mapper = RangeMapper::new(0, 7);
        let style = GraphStyle {
            filled: true,
            ..PLAIN
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        for row in 0..7 {
            assert!(glyph.is_lit(0, row));
        }
        assert!(!glyph.is_lit(0, 7));
    }

    #[test]
    fn test_y_axis_only_in_leftmost_block() {
        let store = store_of(10, &[]);
        let mapper = RangeMapper::new(0, 7);
        let style = GraphStyle {
            show_y_axis: true,
            ..PLAIN
        };

        let first = rasterize_block(&store, 0, 5, &mapper, &style);
        assert!(first.rows().iter().all(|&row| row == column_bit(0)));

        let second = rasterize_block(&store, 5, 5, &mapper, &style);
        assert_eq!(second, Glyph::BLANK);
    }

    #[test]
    fn test_y_axis_survives_marked_intercept() {
        let store = store_of(5, &[0]);
        let mapper = RangeMapper::new(-7, 7);
        let style = GraphStyle {
            show_x_axis: true,
            show_y_axis: true,
            mark_intercepts: true,
            filled: false,
        };

        let glyph = rasterize_block(&store, 0, 5, &mapper, &style);
        assert!(glyph.is_lit(0, 3));
        assert!(glyph.rows().iter().all(|&row| row & column_bit(0) != 0));
    }
}
