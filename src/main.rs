use anyhow::Result;
use log::info;

mod animation;
mod demo;
mod director;
mod engine;
mod host;
mod model;
mod scene;
mod time;
mod transform;

use demo::{OrbitScene, PulseScene};
use director::Director;
use engine::RunConfig;
use host::HeadlessHost;
use time::SystemTimeSource;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut host = HeadlessHost::new();
    let mut director = Director::new();
    director.register_scene(Box::new(PulseScene::new("demo")))?;
    director.register_scene(Box::new(OrbitScene::new("orbit")))?;

    let config = RunConfig::default();
    let mut ticks = SystemTimeSource::new();

    director.activate("demo", &mut host, 0.0)?;
    let time = engine::run(&mut director, &mut ticks, &config, 3.0);

    director.activate("orbit", &mut host, time)?;
    engine::run(&mut director, &mut ticks, &config, 14.0);

    info!("winding down from scene {:?}", director.active_scene());
    director.deactivate();
    info!("run complete, {} scenes registered", director.scene_count());
    Ok(())
}
