/*
* Heartbeat Task
*/

// Resources
use crate::resources::HeartbeatResources;

// Library
use defmt_rtt as _;
use panic_probe as _;
use embassy_rp::gpio::Level;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

#[embassy_executor::task]
pub async fn heartbeat_task(r: HeartbeatResources) {
    let mut led = Output::new(r.LED_PIN, Level::Low);
    loop {
        led.toggle();
        Timer::after_secs(1).await;
    }
}
