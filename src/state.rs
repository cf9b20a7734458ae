// state.rs
// Shared state between the simulation loop and the host render/input layer

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use crate::particle::Particle;

pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));
pub static UPDATE_LOCK: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(false));
/// Snapshot of the population published once per tick for drawing
pub static BODIES: Lazy<Mutex<Vec<Particle>>> = Lazy::new(|| Mutex::new(Vec::new()));

// Simulation commands
// Sent by the host's input handlers to the simulation thread; applied
// between ticks, so a tick never observes a half-applied input.
pub enum SimCommand {
    PointerMoved { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
    StepOnce,
    Reset,
}

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));
