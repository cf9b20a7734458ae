use crate::simulation::Simulation;
use crate::state::SimCommand;

use super::simulation_loop;

pub fn handle_command(cmd: SimCommand, simulation: &mut Simulation) {
    match cmd {
        SimCommand::PointerMoved { x, y } => {
            simulation.set_pointer(x, y);
        }
        SimCommand::Resize { width, height } => {
            simulation.set_bounds(width, height);
            log::debug!("domain resized to {}x{}", width, height);
        }
        SimCommand::StepOnce => {
            simulation_loop::publish(simulation);
            simulation.step();
        }
        SimCommand::Reset => match simulation.reset() {
            Ok(()) => log::info!("population reset, {} particles", simulation.bodies.len()),
            Err(err) => log::error!("reset failed, keeping current population: {}", err),
        },
    }
}
