//! Desktop simulator for lcdgraph.
//!
//! Drives two graphs on an emulated 16x2 character LCD, the way a sketch on
//! a microcontroller would: both graphs share the display's eight custom
//! glyph slots (four each) and are refreshed once per synthetic sample.
//!
//! Every frame is logged as ASCII art at `debug` level, the final frame at
//! `info`. The final frame is also rendered through `embedded-graphics` and
//! saved as a PNG.
//!
//! # Usage
//!
//! ```text
//! lcdgraph-simulator [FRAMES] [OUTPUT.png]
//! RUST_LOG=debug lcdgraph-simulator 60 graph.png
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::{debug, error, info};
use thiserror_no_std::Error;

use lcdgraph_core::constants::{COLUMNS_PER_GLYPH, GLYPH_ROWS};
use lcdgraph_core::lcd::CharacterLcd;
use lcdgraph_core::range::RangeMapper;
use lcdgraph_core::shared::SharedGraph;
use lcdgraph_core::{DisplayError, Glyph, GlyphDisplay, GraphError, GraphStyle, LcdError, LcdGraph};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Character columns of the emulated LCD.
const LCD_COLS: usize = 16;

/// Character rows of the emulated LCD.
const LCD_ROWS: usize = 2;

/// Pixel scale factor for the PNG output.
const IMAGE_SCALE: u32 = 4;

/// Frames simulated when no count is given.
const DEFAULT_FRAMES: usize = 48;

/// PNG written when no path is given.
const DEFAULT_OUTPUT: &str = "lcdgraph.png";

/// Width of each graph in characters.
const GRAPH_WIDTH: u8 = 4;

type Lcd = CharacterLcd<LCD_COLS, LCD_ROWS>;

// ---------------------------------------------------------------------------
// Shared display handle
// ---------------------------------------------------------------------------

/// Lets several graphs drive the one LCD, like sharing a `LiquidCrystal`
/// object between graphs on an Arduino.
#[derive(Clone, Copy)]
struct SharedLcd<'a>(&'a RefCell<Lcd>);

impl GlyphDisplay for SharedLcd<'_> {
    type Error = LcdError;

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), Self::Error> {
        self.0.borrow_mut().define_glyph(slot, glyph)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        self.0.borrow_mut().set_cursor(col, row)
    }

    fn write_glyph(&mut self, code: u8) -> Result<(), Self::Error> {
        self.0.borrow_mut().write_glyph(code)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
enum SimError {
    #[error("graph: {0}")]
    Graph(#[from] GraphError),

    #[error("display: {0}")]
    Display(#[from] DisplayError<LcdError>),

    #[error("lcd: {0}")]
    Lcd(#[from] LcdError),

    #[error("image: {0}")]
    Image(String),
}

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Generates synthetic readings that vary over time.
struct MockSignalGenerator {
    /// Sample counter used as the time base.
    tick: u32,
}

impl MockSignalGenerator {
    fn new() -> Self {
        Self { tick: 0 }
    }

    /// Advance one tick and return a signed and an unsigned reading.
    fn next_sample(&mut self) -> (i16, u8) {
        self.tick += 1;
        let t = self.tick as f64;

        // Signed wave crossing zero so the x-axis and intercepts show up
        let wave = 60.0 * (t / 6.0).sin() + 20.0 * (t / 2.3).cos();

        // Unsigned sawtooth that slowly climbs
        let ramp = 20 + (self.tick * 7) % 180 + self.tick / 4;

        (wave as i16, ramp.min(u8::MAX as u32) as u8)
    }
}

// ---------------------------------------------------------------------------
// Frame output
// ---------------------------------------------------------------------------

/// Render the LCD as ASCII art, one text line per pixel row.
///
/// Custom glyph cells show their pixels as `#`/`.`, text cells show the
/// character on their first pixel row.
fn ascii_frame(lcd: &Lcd) -> String {
    let mut out = String::new();
    for row in 0..LCD_ROWS {
        for y in 0..GLYPH_ROWS {
            for col in 0..LCD_COLS {
                let code = lcd.code_at(col, row).unwrap_or(b' ');
                for x in 0..COLUMNS_PER_GLYPH {
                    let ch = if code < 16 {
                        if lcd.cell_pixel(col, row, x, y) { '#' } else { '.' }
                    } else if y == 0 && x == 0 && code.is_ascii_graphic() {
                        char::from(code)
                    } else {
                        ' '
                    };
                    out.push(ch);
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Render the LCD through `embedded-graphics` and save it as a PNG.
fn save_png(lcd: &Lcd, path: &Path) -> Result<(), SimError> {
    let mut display = SimulatorDisplay::<Rgb565>::new(lcd.size_px());
    let Ok(()) = lcd.draw(&mut display);

    let output_settings = OutputSettingsBuilder::new().scale(IMAGE_SCALE).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(path)
        .map_err(|e| SimError::Image(e.to_string()))
}

/// Write a right-aligned reading into a 4 character field.
fn write_reading(lcd: &RefCell<Lcd>, col: u8, row: u8, value: i64) -> Result<(), LcdError> {
    let text = format!("{value:>4}");
    let field = &text[text.len().saturating_sub(4)..];
    let mut lcd = lcd.borrow_mut();
    lcd.set_cursor(col, row)?;
    lcd.write_str(field)
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Run `frames` samples through both graphs and return the final LCD state.
fn simulate(frames: usize) -> Result<Lcd, SimError> {
    let lcd = RefCell::new(Lcd::new());

    // Signed wave: filled, axes on, intercepts drawn as gaps. Driven through
    // the critical-section wrapper, as an interrupt-fed graph would be.
    let mut wave_graph = LcdGraph::<i16, SharedLcd>::new(GRAPH_WIDTH, 0)?;
    wave_graph.style = GraphStyle {
        mark_intercepts: true,
        ..GraphStyle::default()
    };
    wave_graph.begin(SharedLcd(&lcd));
    let wave = SharedGraph::new(wave_graph);

    // Unsigned ramp: points only, range only ever widens
    let mut ramp = LcdGraph::<u8, SharedLcd>::new(GRAPH_WIDTH, GRAPH_WIDTH)?;
    ramp.style = GraphStyle {
        filled: false,
        show_x_axis: false,
        ..GraphStyle::default()
    };
    ramp.begin(SharedLcd(&lcd));

    // Glyph codes only need placing once; publishing refreshes them in place
    wave.with(|graph| graph.draw(0, 0))?;
    ramp.draw(8, 0)?;
    {
        let mut lcd = lcd.borrow_mut();
        lcd.set_cursor(0, 1)?;
        lcd.write_str("wave")?;
        lcd.set_cursor(8, 1)?;
        lcd.write_str("ramp")?;
    }

    let mut generator = MockSignalGenerator::new();
    for frame in 0..frames {
        let (wave_value, ramp_value) = generator.next_sample();

        wave.append(wave_value);
        wave.rescale(true, true)?;
        wave.publish()?;

        ramp.append(ramp_value);
        if frame == 0 {
            ramp.range = RangeMapper::new(ramp_value, ramp_value);
        }
        ramp.rescale(false, false)?;
        ramp.publish()?;

        write_reading(&lcd, 4, 0, wave_value as i64)?;
        write_reading(&lcd, 12, 0, ramp_value as i64)?;

        debug!("Frame {}:\n{}", frame, ascii_frame(&lcd.borrow()));
    }

    let (wave_min, wave_max) = wave.with(|graph| (graph.range.y_min, graph.range.y_max));
    info!(
        "Wave range {:?}..={:?}, ramp range {:?}..={:?}",
        wave_min, wave_max, ramp.range.y_min, ramp.range.y_max
    );

    // Release the graphs' borrows of the LCD before handing it back
    drop(wave);
    drop(ramp);
    Ok(lcd.into_inner())
}

fn run(frames: usize, output: &Path) -> Result<(), SimError> {
    let lcd = simulate(frames)?;
    info!("Final frame:\n{}", ascii_frame(&lcd));

    save_png(&lcd, output)?;
    info!("Saved {}", output.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let frames = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    info!("Starting lcdgraph simulator");
    info!("Display: {}x{} characters, {} frames", LCD_COLS, LCD_ROWS, frames);

    if let Err(e) = run(frames, &output) {
        error!("Simulation failed: {}", e);
        std::process::exit(1);
    }

    info!("Simulator exiting");
}
