//! SSD1306 status display wrapper
//!
//! 128x64 OLED on I2C, address 0x3D. Shows the coarse session lifecycle
//! only; it renders nothing per-tick.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Text origin used by all screens
const PADDING_LEFT: i32 = 10;
const PADDING_TOP: i32 = 24;

/// Concrete display driver, generic over the HAL's I2C peripheral
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 and clear the screen
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, 0x3d);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn draw_line<I2C>(display: &mut Display<I2C>, text: &str, y: i32)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(text, Point::new(PADDING_LEFT, y), text_style()).draw(display);
}

/// Render the discovery screen
pub fn draw_scanning<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    draw_line(display, "Scanning...", PADDING_TOP);
    let _ = display.flush();
}

/// Render the connected screen with the toy's name
pub fn draw_connected<I2C>(display: &mut Display<I2C>, name: &str)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    draw_line(display, "connected to", PADDING_TOP);
    let _ = Text::new(
        name,
        Point::new(PADDING_LEFT, PADDING_TOP + 14),
        text_style(),
    )
    .draw(display);
    let _ = display.flush();
}

/// Render the no-toy-found screen
pub fn draw_not_found<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    draw_line(display, "No toy found", PADDING_TOP);
    draw_line(display, "retrying...", PADDING_TOP + 14);
    let _ = display.flush();
}

/// Render the session-over screen
pub fn draw_terminated<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = Text::new("Terminated", Point::new(0, 10), text_style()).draw(display);
    let _ = display.flush();
}
