use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::*;

/// Two-channel LED intensity, each channel `0..=Color::MAX`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
}

impl Color {
    pub const MAX: u8 = 3;

    pub const OFF: Color = Color::new(0, 0);
    pub const RED: Color = Color::new(Self::MAX, 0);
    pub const GREEN: Color = Color::new(0, Self::MAX);
    pub const AMBER: Color = Color::new(Self::MAX, Self::MAX);

    pub const fn new(red: u8, green: u8) -> Self {
        Self { red, green }
    }

    /// Clamps both channels into the supported range.
    pub fn clamped(self) -> Self {
        Self {
            red: self.red.min(Self::MAX),
            green: self.green.min(Self::MAX),
        }
    }

    pub const fn is_off(self) -> bool {
        self.red == 0 && self.green == 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub on: Color,
    pub off: Color,
    pub border: Color,
    pub flash: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            on: Color::GREEN,
            off: Color::OFF,
            border: Color::RED,
            flash: Color::AMBER,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadEvent {
    pub pos: PhysicalPos,
    pub pressed: bool,
}

impl PadEvent {
    pub const fn press(pos: PhysicalPos) -> Self {
        Self { pos, pressed: true }
    }

    pub const fn release(pos: PhysicalPos) -> Self {
        Self {
            pos,
            pressed: false,
        }
    }
}

/// Button grid with individually lit buttons.
pub trait LightSurface {
    /// Next pending button event, without blocking.
    fn poll(&mut self) -> core::result::Result<Option<PadEvent>, SurfaceError>;

    fn light(&mut self, pos: PhysicalPos, color: Color) -> core::result::Result<(), SurfaceError>;
}

/// In-memory surface fed from a scripted queue. Remembers every light command.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: VecDeque<PadEvent>,
    commands: Vec<(PhysicalPos, Color)>,
    lights: BTreeMap<PhysicalPos, Color>,
    lights_left: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: PadEvent) {
        self.events.push_back(event);
    }

    /// Queues a press followed by its release.
    pub fn push_tap(&mut self, pos: PhysicalPos) {
        self.push_event(PadEvent::press(pos));
        self.push_event(PadEvent::release(pos));
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn commands(&self) -> &[(PhysicalPos, Color)] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Last color sent to `pos`, if any.
    pub fn color_at(&self, pos: PhysicalPos) -> Option<Color> {
        self.lights.get(&pos).copied()
    }

    /// Makes every light command after the next `count` fail.
    pub fn fail_lights_after(&mut self, count: usize) {
        self.lights_left = Some(count);
    }
}

impl LightSurface for RecordingSurface {
    fn poll(&mut self) -> core::result::Result<Option<PadEvent>, SurfaceError> {
        Ok(self.events.pop_front())
    }

    fn light(&mut self, pos: PhysicalPos, color: Color) -> core::result::Result<(), SurfaceError> {
        if let Some(left) = self.lights_left.as_mut() {
            if *left == 0 {
                return Err(SurfaceError::Send("scripted failure".into()));
            }
            *left -= 1;
        }

        self.commands.push((pos, color));
        self.lights.insert(pos, color);
        Ok(())
    }
}
