//! UART link to the toy bridge
//!
//! The BLE radio and the toy protocol proper live on a bridge module wired
//! to UART0. The firmware sends it small framed commands and reads
//! discovery replies; everything past the UART is the bridge's problem.
//!
//! Frame format:
//! - START (1 byte): 0xA5 synchronization byte
//! - OPCODE (1 byte)
//! - LENGTH (1 byte): payload length
//! - PAYLOAD (LENGTH bytes)
//! - CHECKSUM (1 byte): XOR of OPCODE, LENGTH, and all PAYLOAD bytes

use embassy_time::{with_timeout, Duration, TimeoutError};
use embedded_io_async::{Read, Write};
use heapless::String;

use rollpad_core::state::events::MAX_NAME_LEN;
use rollpad_core::traits::MotionActuator;

/// Frame synchronization byte
const FRAME_START: u8 = 0xA5;

/// Maximum payload in either direction
const MAX_PAYLOAD: usize = 6 + MAX_NAME_LEN;

/// Command opcodes toward the bridge
mod opcode {
    pub const SCAN: u8 = 0x01;
    pub const WAKE: u8 = 0x02;
    pub const MAIN_LED: u8 = 0x03;
    pub const BACK_LED: u8 = 0x04;
    pub const ROLL_START: u8 = 0x05;
    pub const ROLL_STOP: u8 = 0x06;
}

/// Reply opcodes from the bridge
mod reply {
    /// Payload: 6-byte address followed by the toy name
    pub const TOY_FOUND: u8 = 0x81;
    /// Scan window elapsed without a toy
    pub const SCAN_EMPTY: u8 = 0x82;
}

/// Link failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// UART transfer failed
    Io,
    /// Discovery finished without finding a toy
    NotFound,
    /// Malformed or unexpected reply from the bridge
    Protocol,
}

impl From<TimeoutError> for LinkError {
    fn from(_: TimeoutError) -> Self {
        // A silent bridge during discovery counts as no toy
        LinkError::NotFound
    }
}

/// Identity of the connected toy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToyInfo {
    pub name: String<MAX_NAME_LEN>,
    pub address: [u8; 6],
}

/// Command link to the toy bridge
pub struct ToyLink<U> {
    uart: U,
}

impl<U: Read + Write> ToyLink<U> {
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    async fn send(&mut self, opcode: u8, payload: &[u8]) -> Result<(), LinkError> {
        debug_assert!(payload.len() <= MAX_PAYLOAD);

        let mut frame = [0u8; 4 + MAX_PAYLOAD];
        frame[0] = FRAME_START;
        frame[1] = opcode;
        frame[2] = payload.len() as u8;
        frame[3..3 + payload.len()].copy_from_slice(payload);

        let mut checksum = opcode ^ payload.len() as u8;
        for &byte in payload {
            checksum ^= byte;
        }
        frame[3 + payload.len()] = checksum;

        self.uart
            .write_all(&frame[..4 + payload.len()])
            .await
            .map_err(|_| LinkError::Io)
    }

    /// Read one reply frame, verifying sync and checksum
    async fn read_reply(&mut self, payload: &mut [u8; MAX_PAYLOAD]) -> Result<(u8, usize), LinkError> {
        let mut header = [0u8; 3];
        self.uart
            .read_exact(&mut header)
            .await
            .map_err(|_| LinkError::Io)?;

        if header[0] != FRAME_START {
            return Err(LinkError::Protocol);
        }
        let opcode = header[1];
        let len = header[2] as usize;
        if len > MAX_PAYLOAD {
            return Err(LinkError::Protocol);
        }

        self.uart
            .read_exact(&mut payload[..len])
            .await
            .map_err(|_| LinkError::Io)?;

        let mut checksum = [0u8; 1];
        self.uart
            .read_exact(&mut checksum)
            .await
            .map_err(|_| LinkError::Io)?;

        let mut expected = opcode ^ len as u8;
        for &byte in &payload[..len] {
            expected ^= byte;
        }
        if checksum[0] != expected {
            return Err(LinkError::Protocol);
        }

        Ok((opcode, len))
    }

    /// Ask the bridge to scan for a toy and connect to the first one found
    ///
    /// `NotFound` is an expected outcome distinct from an I/O failure; the
    /// caller may retry discovery.
    pub async fn discover(&mut self, timeout: Duration) -> Result<ToyInfo, LinkError> {
        self.send(opcode::SCAN, &[]).await?;

        let mut payload = [0u8; MAX_PAYLOAD];
        let (opcode, len) = with_timeout(timeout, self.read_reply(&mut payload)).await??;

        match opcode {
            reply::TOY_FOUND if len >= 6 => {
                let mut address = [0u8; 6];
                address.copy_from_slice(&payload[..6]);

                let mut name: String<MAX_NAME_LEN> = String::new();
                for &byte in &payload[6..len] {
                    let _ = name.push(byte as char);
                }

                Ok(ToyInfo { name, address })
            }
            reply::SCAN_EMPTY => Err(LinkError::NotFound),
            _ => Err(LinkError::Protocol),
        }
    }

    /// Wake the toy out of soft sleep
    pub async fn wake(&mut self) -> Result<(), LinkError> {
        self.send(opcode::WAKE, &[]).await
    }

    /// Set the main LED color
    pub async fn set_main_led(&mut self, r: u8, g: u8, b: u8) -> Result<(), LinkError> {
        self.send(opcode::MAIN_LED, &[r, g, b]).await
    }

    /// Set the aim/back LED brightness
    pub async fn set_back_led(&mut self, brightness: u8) -> Result<(), LinkError> {
        self.send(opcode::BACK_LED, &[brightness]).await
    }
}

impl<U: Read + Write> MotionActuator for ToyLink<U> {
    type Error = LinkError;

    async fn start_roll(&mut self, heading: u16, speed: u8) -> Result<(), LinkError> {
        let [hi, lo] = heading.to_be_bytes();
        self.send(opcode::ROLL_START, &[hi, lo, speed]).await
    }

    async fn stop_roll(&mut self, heading: u16, reverse: bool) -> Result<(), LinkError> {
        let [hi, lo] = heading.to_be_bytes();
        self.send(opcode::ROLL_STOP, &[hi, lo, reverse as u8]).await
    }
}
