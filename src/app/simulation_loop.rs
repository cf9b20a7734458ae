use crate::config;
use crate::simulation::Simulation;
use crate::state::{SimCommand, BODIES, PAUSED, UPDATE_LOCK};
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use super::command_loop;

/// Publish the pre-step population for the render side. Drawing the
/// previous state and then moving matches the original draw-then-update
/// ordering.
pub fn publish(simulation: &Simulation) {
    let mut lock = UPDATE_LOCK.lock();
    {
        let mut bodies = BODIES.lock();
        bodies.clear();
        bodies.extend_from_slice(&simulation.bodies);
    }
    *lock |= true;
}

pub fn run_simulation_loop(rx: std::sync::mpsc::Receiver<SimCommand>, mut simulation: Simulation) {
    let tick = Duration::from_secs_f32(1.0 / config::TICK_HZ);
    loop {
        let started = Instant::now();

        // Handle commands
        while let Ok(cmd) = rx.try_recv() {
            command_loop::handle_command(cmd, &mut simulation);
        }

        if PAUSED.load(Ordering::Relaxed) {
            std::thread::yield_now();
        } else {
            publish(&simulation);
            simulation.step();

            if simulation.frame % config::STATS_LOG_INTERVAL == 0 {
                log::debug!(
                    "frame {}: {} particles, pointer at ({:.0}, {:.0})",
                    simulation.frame,
                    simulation.bodies.len(),
                    simulation.pointer.x,
                    simulation.pointer.y
                );
            }
        }

        if let Some(remaining) = tick.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
