use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use lightspad_core::{Color, LightSurface, PadEvent, Palette, PhysicalPos, SurfaceError};

/// Matches the 9x9 button layout of a Launchpad.
const WIDTH: usize = 9;
const HEIGHT: usize = 9;

/// Plays on stdin/stdout. Each input line `x y` is a tap at that physical position.
pub struct TerminalSurface {
    palette: Palette,
    lights: [[Color; WIDTH]; HEIGHT],
    dirty: bool,
    events: Receiver<PadEvent>,
}

impl TerminalSurface {
    pub fn spawn(palette: Palette) -> Self {
        let (sender, events) = mpsc::channel();

        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let Some(pos) = parse_tap(&line) else {
                    if !line.trim().is_empty() {
                        log::warn!("Expected \"x y\", got {:?}", line);
                    }
                    continue;
                };
                let sent = sender
                    .send(PadEvent::press(pos))
                    .and_then(|()| sender.send(PadEvent::release(pos)));
                if sent.is_err() {
                    break;
                }
            }
            log::debug!("stdin closed");
        });

        Self {
            palette,
            lights: [[Color::OFF; WIDTH]; HEIGHT],
            dirty: false,
            events,
        }
    }

    fn symbol(&self, color: Color) -> char {
        if color == self.palette.on {
            'O'
        } else if color == self.palette.border {
            '#'
        } else if color == self.palette.flash {
            '*'
        } else if color.is_off() {
            '.'
        } else {
            '?'
        }
    }

    fn draw(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out)?;
        for row in &self.lights {
            let line: String = row.iter().map(|&color| self.symbol(color)).collect();
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

fn parse_tap(line: &str) -> Option<PhysicalPos> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((x, y))
}

impl LightSurface for TerminalSurface {
    fn poll(&mut self) -> Result<Option<PadEvent>, SurfaceError> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => {
                if self.dirty {
                    self.draw()
                        .map_err(|err| SurfaceError::Send(err.to_string()))?;
                    self.dirty = false;
                }
                Ok(None)
            }
            Err(TryRecvError::Disconnected) => Err(SurfaceError::Disconnected),
        }
    }

    fn light(&mut self, (x, y): PhysicalPos, color: Color) -> Result<(), SurfaceError> {
        let (Ok(column), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return Ok(());
        };
        if let Some(cell) = self.lights.get_mut(row).and_then(|row| row.get_mut(column)) {
            self.dirty |= *cell != color;
            *cell = color;
        }
        Ok(())
    }
}
