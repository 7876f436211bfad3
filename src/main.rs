use anyhow::Result;
use clap::Parser;
use std::collections::HashSet;

use fly_controls::cli::Cli;
use fly_controls::{ControllerConfig, FlyControls, LogicalAction, Object3D};

fn build_config(cli: &Cli) -> Result<ControllerConfig> {
    let mut config = match &cli.config {
        Some(path) => ControllerConfig::from_json_file(path)?,
        None => ControllerConfig::default(),
    };

    if cli.auto_forward {
        config.auto_forward = true;
    }
    if let Some(speed) = cli.movement_speed {
        config.movement_speed = speed;
    }
    if let Some(speed) = cli.roll_speed {
        config.roll_speed = speed;
    }
    if let Some(order) = cli.euler_order {
        config.euler_order = order;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.dt < 0.0 || !cli.dt.is_finite() {
        anyhow::bail!("--dt must be finite and >= 0, got {}", cli.dt);
    }

    let config = build_config(&cli)?;
    let held: HashSet<LogicalAction> = cli.hold.iter().copied().collect();

    log::info!(
        "Simulating {} ticks of {:.4}s holding {:?} ({:?})",
        cli.ticks,
        cli.dt,
        held,
        config
    );

    let mut controls = FlyControls::with_config(Object3D::new(), config);
    for _ in 0..cli.ticks {
        controls.tick(cli.dt, &held);
    }

    let pose = controls.object().pose();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&pose)?);
    } else {
        let q = pose.orientation;
        let e = pose.euler;
        println!(
            "position:    ({:.4}, {:.4}, {:.4})",
            pose.position.x, pose.position.y, pose.position.z
        );
        println!("orientation: ({:.4}, {:.4}, {:.4}, {:.4})", q.x, q.y, q.z, q.w);
        println!(
            "euler {:?}:   ({:.4}, {:.4}, {:.4})",
            e.order, e.x, e.y, e.z
        );
    }

    Ok(())
}
