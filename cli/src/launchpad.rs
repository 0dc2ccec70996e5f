//! Launchpad (original/S/mini) MIDI layout.
//!
//! The 8x8 grid sends and receives note messages, note `16 * row + column`.
//! The round buttons along the top send control changes 104..=111 and sit at
//! physical row 0, so grid rows start at physical row 1. The round buttons on
//! the right are column 8 of each grid row.
#![cfg_attr(not(feature = "launchpad"), allow(dead_code))]

use lightspad_core::{Color, PadEvent, PhysicalPos};

#[cfg(feature = "launchpad")]
pub use device::LaunchpadSurface;

#[cfg(feature = "launchpad")]
mod device;

const NOTE_ON: u8 = 0x90;
const NOTE_OFF: u8 = 0x80;
const CONTROL_CHANGE: u8 = 0xB0;
const TOP_ROW_FIRST_CC: u8 = 104;
const ROW_STRIDE: u8 = 16;
const COLUMNS: i16 = 9;
const GRID_ROWS: i16 = 8;

/// Copy and clear flags, so the LED takes the color right away.
const VELOCITY_FLAGS: u8 = 12;

/// Turns every LED off.
pub const RESET: [u8; 3] = [CONTROL_CHANGE, 0, 0];

pub fn velocity(color: Color) -> u8 {
    let color = color.clamped();
    ROW_STRIDE * color.green + color.red + VELOCITY_FLAGS
}

/// Message lighting `pos`, `None` when the device has no button there.
pub fn light_message((x, y): PhysicalPos, color: Color) -> Option<[u8; 3]> {
    let velocity = velocity(color);
    if y == 0 && (0..8).contains(&x) {
        Some([CONTROL_CHANGE, TOP_ROW_FIRST_CC + x as u8, velocity])
    } else if (1..=GRID_ROWS).contains(&y) && (0..COLUMNS).contains(&x) {
        let note = ROW_STRIDE * (y - 1) as u8 + x as u8;
        Some([NOTE_ON, note, velocity])
    } else {
        None
    }
}

pub fn decode(message: &[u8]) -> Option<PadEvent> {
    let &[status, data, value] = message else {
        return None;
    };

    match status & 0xF0 {
        NOTE_ON | NOTE_OFF => {
            let pos = (
                i16::from(data % ROW_STRIDE),
                i16::from(data / ROW_STRIDE) + 1,
            );
            let pressed = status & 0xF0 == NOTE_ON && value > 0;
            Some(PadEvent { pos, pressed })
        }
        CONTROL_CHANGE if (TOP_ROW_FIRST_CC..TOP_ROW_FIRST_CC + 8).contains(&data) => {
            let pos = (i16::from(data - TOP_ROW_FIRST_CC), 0);
            Some(PadEvent {
                pos,
                pressed: value > 0,
            })
        }
        _ => None,
    }
}
