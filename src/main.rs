//! Space Dodge entry point

use anyhow::Context;
use winit::event_loop::{ControlFlow, EventLoop};

use space_dodge::Settings;
use space_dodge::launcher::Launcher;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Space Dodge starting...");

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut launcher = Launcher::new(Settings::default());
    event_loop.run_app(&mut launcher).context("event loop error")?;

    log::info!("Goodbye");
    Ok(())
}
