use std::sync::mpsc::{self, Receiver, TryRecvError};

use lightspad_core::{Color, LightSurface, PadEvent, PhysicalPos, SurfaceError};
use midir::{MidiInput, MidiInputConnection, MidiOutput, MidiOutputConnection};

use super::{RESET, decode, light_message};

const CLIENT_NAME: &str = "lightspad";

/// Launchpad attached over MIDI. Input is queued from the MIDI callback thread.
pub struct LaunchpadSurface {
    output: MidiOutputConnection,
    _input: MidiInputConnection<()>,
    events: Receiver<PadEvent>,
}

impl LaunchpadSurface {
    /// Connects to the first input and output port whose name contains `needle`.
    pub fn connect(needle: &str) -> Result<Self, SurfaceError> {
        let input =
            MidiInput::new(CLIENT_NAME).map_err(|err| SurfaceError::Init(err.to_string()))?;
        let output =
            MidiOutput::new(CLIENT_NAME).map_err(|err| SurfaceError::Init(err.to_string()))?;

        let (in_port, in_name) =
            find_port(input.ports(), |port| input.port_name(port).ok(), needle)?;
        let (out_port, out_name) =
            find_port(output.ports(), |port| output.port_name(port).ok(), needle)?;
        log::info!("Using MIDI input {:?} and output {:?}", in_name, out_name);

        let (sender, events) = mpsc::channel();
        let input = input
            .connect(
                &in_port,
                "lightspad-in",
                move |_stamp, message, _| {
                    log::trace!("MIDI in {:02x?}", message);
                    if let Some(event) = decode(message) {
                        // the receiver only goes away with the surface itself
                        let _ = sender.send(event);
                    }
                },
                (),
            )
            .map_err(|err| SurfaceError::Connect(err.to_string()))?;
        let mut output = output
            .connect(&out_port, "lightspad-out")
            .map_err(|err| SurfaceError::Connect(err.to_string()))?;

        output
            .send(&RESET)
            .map_err(|err| SurfaceError::Send(err.to_string()))?;

        Ok(Self {
            output,
            _input: input,
            events,
        })
    }
}

fn find_port<P>(
    ports: Vec<P>,
    name_of: impl Fn(&P) -> Option<String>,
    needle: &str,
) -> Result<(P, String), SurfaceError> {
    let mut matching: Vec<(P, String)> = ports
        .into_iter()
        .filter_map(|port| {
            let name = name_of(&port)?;
            name.contains(needle).then_some((port, name))
        })
        .collect();

    if matching.len() > 1 {
        log::warn!(
            "{} MIDI ports match {:?}, using the first one",
            matching.len(),
            needle
        );
    }

    if matching.is_empty() {
        Err(SurfaceError::DeviceNotFound(needle.to_string()))
    } else {
        Ok(matching.swap_remove(0))
    }
}

impl LightSurface for LaunchpadSurface {
    fn poll(&mut self) -> Result<Option<PadEvent>, SurfaceError> {
        match self.events.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SurfaceError::Disconnected),
        }
    }

    fn light(&mut self, pos: PhysicalPos, color: Color) -> Result<(), SurfaceError> {
        let Some(message) = light_message(pos, color) else {
            log::warn!("No button at {:?}, not lighting it", pos);
            return Ok(());
        };
        self.output
            .send(&message)
            .map_err(|err| SurfaceError::Send(err.to_string()))
    }
}

impl Drop for LaunchpadSurface {
    fn drop(&mut self) {
        if let Err(err) = self.output.send(&RESET) {
            log::debug!("Could not clear the pad on exit: {}", err);
        }
    }
}
