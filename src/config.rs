// Centralized configuration for simulation parameters

// ====================
// Population
// ====================
pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const DEFAULT_PARTICLE_RADIUS: f32 = 30.0;
/// Rejection-sampling attempts per particle before placement gives up
pub const PLACEMENT_ATTEMPTS: usize = 10_000;

// ====================
// Domain
// ====================
pub const DEFAULT_DOMAIN_WIDTH: f32 = 1920.0;
pub const DEFAULT_DOMAIN_HEIGHT: f32 = 1080.0;

// ====================
// Pointer Proximity Fade
// ====================
/// Pointer distance below which particles fade in
pub const PROXIMITY_RADIUS: f32 = 150.0;
/// Opacity added per frame while the pointer is near
pub const OPACITY_GAIN: f32 = 0.05;
/// Opacity removed per frame while the pointer is away
pub const OPACITY_DECAY: f32 = 0.03;
/// Upper opacity bound on the fade-in branch
pub const OPACITY_CEILING: f32 = 0.3;

// ====================
// Simulation Loop
// ====================
/// Target tick rate for the self-paced loop (one tick = one frame)
pub const TICK_HZ: f32 = 60.0;
/// Frames between debug stat lines from the simulation loop
pub const STATS_LOG_INTERVAL: usize = 600;

// ====================
// Palette
// ====================
/// Fallback fill/stroke colors (RGBA) used when no palette is configured
pub const DEFAULT_PALETTE: [[u8; 4]; 8] = [
    [0x42, 0x85, 0xf4, 0xff],
    [0x34, 0xa8, 0x53, 0xff],
    [0xfb, 0xbc, 0x05, 0xff],
    [0xea, 0x43, 0x35, 0xff],
    [0x6f, 0x2d, 0xbd, 0xff],
    [0xff, 0x6d, 0x00, 0xff],
    [0x00, 0x96, 0x88, 0xff],
    [0x79, 0x55, 0x48, 0xff],
];

use serde::{Deserialize, Serialize};

/// Runtime-tunable simulation parameters. Synced into the simulation at the
/// start of every step so an embedding UI can adjust them live.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub proximity_radius: f32,
    pub opacity_gain: f32,
    pub opacity_decay: f32,
    pub opacity_ceiling: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            proximity_radius: PROXIMITY_RADIUS,
            opacity_gain: OPACITY_GAIN,
            opacity_decay: OPACITY_DECAY,
            opacity_ceiling: OPACITY_CEILING,
        }
    }
}

use once_cell::sync::Lazy;
use parking_lot::Mutex;

pub static SIM_CONFIG: Lazy<Mutex<SimConfig>> = Lazy::new(|| Mutex::new(SimConfig::default()));
