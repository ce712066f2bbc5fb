#![no_std]
#![no_main]

// Mod
mod tasks;
mod resources;
mod control;

// Resources
use crate::resources::AssignedResources;
use crate::resources::MicResources;
use crate::resources::AlertResources;
use crate::resources::HeartbeatResources;
use crate::resources::TelemetryResources;
use crate::resources::global_resources::NOISE_LEVEL;

// Tasks
use crate::tasks::sampler::SoundSensor;
use crate::tasks::sampler::AlertOutput;
use crate::tasks::sampler::sampler_task;
use crate::tasks::telemetry::broker_link;
use crate::tasks::telemetry::telemetry_task;
use crate::tasks::heartbeat::heartbeat_task;

// Library
use defmt_rtt as _;
use panic_probe as _;
use embassy_executor::Spawner;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let ph = embassy_rp::init(Default::default());
    let p = split_resources!(ph);

    let sensor = SoundSensor::new(p.mic);
    let alert = AlertOutput::new(p.alert);
    let link = broker_link(p.telemetry);

    // The single mailbox consumer; claimed here so a second telemetry
    // task cannot be spawned by mistake.
    let noise_rx = NOISE_LEVEL.receiver().unwrap();

    defmt::info!("noise monitor up");

    spawner.must_spawn(sampler_task(sensor, alert));
    spawner.must_spawn(telemetry_task(link, noise_rx));
    spawner.must_spawn(heartbeat_task(p.heartbeat));
}
