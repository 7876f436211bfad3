// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::math::EulerOrder;
use crate::traits::LogicalAction;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-controls")]
#[command(about = "Headless free-flight controller simulation", long_about = None)]
pub struct Cli {
    /// JSON controller config; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 60)]
    pub ticks: u32,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f64,

    /// Action held for every tick (repeatable)
    #[arg(long = "hold", value_enum)]
    pub hold: Vec<LogicalAction>,

    /// Keep moving forward unless back is held
    #[arg(long)]
    pub auto_forward: bool,

    #[arg(long)]
    pub movement_speed: Option<f64>,

    #[arg(long)]
    pub roll_speed: Option<f64>,

    /// Order for the reported Euler angles
    #[arg(long, value_enum)]
    pub euler_order: Option<EulerOrder>,

    /// Print the final pose as JSON
    #[arg(long)]
    pub json: bool,
}
