//! Rollpad firmware entry point
//!
//! Initializes peripherals and spawns the control and display tasks.
//!
//! Wiring:
//! - Buttons (active-low, internal pull-ups): forward GPIO20, backward
//!   GPIO26, rotate CW GPIO16, rotate CCW GPIO21, dash GPIO6
//! - UART0 (GPIO0/GPIO1): BLE bridge module that owns the toy radio
//! - I2C1 (SDA GPIO14, SCL GPIO15): SSD1306 status display

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::buttons::GpioButtons;
use crate::link::ToyLink;

mod buttons;
mod channels;
mod display;
mod link;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rollpad firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Pad buttons, pressed pulls the pin low
    let buttons = GpioButtons::new(
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_26, Pull::Up),
        Input::new(p.PIN_16, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
        Input::new(p.PIN_6, Pull::Up),
    );

    // UART0 to the BLE bridge module
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let link = ToyLink::new(uart);

    info!("UART initialized for bridge communication");

    // I2C1 to the SSD1306 status display
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c::Config::default());

    spawner.spawn(tasks::display_task(i2c)).unwrap();
    spawner.spawn(tasks::control_task(buttons, link)).unwrap();

    info!("All tasks spawned, firmware running");
}
