use crate::init_config::{InitConfig, INIT_CONFIG_PATH};
use crate::simulation::Simulation;
use crate::state::SIM_COMMAND_SENDER;
use std::path::Path;
use std::sync::mpsc::channel;

pub mod command_loop;
pub mod simulation_loop;

pub fn run() {
    let init = if Path::new(INIT_CONFIG_PATH).exists() {
        match InitConfig::load_default() {
            Ok(init) => init,
            Err(err) => {
                log::error!("failed to load {}: {}", INIT_CONFIG_PATH, err);
                return;
            }
        }
    } else {
        log::warn!("{} not found, using the built-in scenario", INIT_CONFIG_PATH);
        InitConfig::default()
    };

    let palette = match init.palette_colors() {
        Ok(palette) => palette,
        Err(err) => {
            log::error!("invalid palette in {}: {}", INIT_CONFIG_PATH, err);
            return;
        }
    };

    let scenario = init.simulation.unwrap_or_default();
    let particles = init.particles.unwrap_or_default();
    let (width, height) = scenario.domain_size();

    let simulation = match Simulation::new(
        particles.count(),
        particles.radius(),
        &palette,
        width,
        height,
    ) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };
    log::info!(
        "placed {} particles of radius {} in a {}x{} domain",
        simulation.bodies.len(),
        particles.radius(),
        width,
        height
    );

    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);

    simulation_loop::run_simulation_loop(rx, simulation);
}
