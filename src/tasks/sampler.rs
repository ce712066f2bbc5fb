/*
* Sampler Task
*  - Fast loop: microphone sample -> moving average -> loudness check
*  - Owns the filter state; only the finished average leaves this task
*/

// Resources
use crate::resources::Irqs;
use crate::resources::MicResources;
use crate::resources::AlertResources;
use crate::resources::SAMPLE_WINDOW;
use crate::resources::SAMPLING_PERIOD_MS;
use crate::resources::ADC_BIAS_MIDPOINT;
use crate::resources::LOUD_THRESHOLD;
use crate::resources::ALERT_PULSE_MS;
use crate::resources::global_resources::NOISE_LEVEL;

// Control
use crate::control::MovingAverage;
use crate::control::Loudness;
use crate::control::evaluate;

// Library
use defmt_rtt as _;
use panic_probe as _;
use embassy_rp::adc;
use embassy_rp::adc::Adc;
use embassy_rp::adc::Async;
use embassy_rp::adc::Channel;
use embassy_rp::gpio::Level;
use embassy_rp::gpio::Output;
use embassy_rp::gpio::Pull;
use embassy_time::Ticker;
use embassy_time::Timer;
use embassy_time::Duration;

/* --------------------------- Sound Sensor -------------------------- */
pub struct SoundSensor<'d> {
    adc: Adc<'d, Async>,
    mic: Channel<'d>,
}

impl SoundSensor<'static> {
    pub fn new(r: MicResources) -> Self {
        Self {
            adc: Adc::new(r.ADC, Irqs, adc::Config::default()),
            mic: Channel::new_pin(r.MIC_PIN, Pull::None),
        }
    }
}

impl<'d> SoundSensor<'d> {
    /// One raw 12-bit sample, bias-corrected to the unsigned magnitude
    /// around the electrical midpoint (0..=2048).
    pub async fn read(&mut self) -> Result<u16, adc::Error> {
        let raw = self.adc.read(&mut self.mic).await?;
        Ok(raw.abs_diff(ADC_BIAS_MIDPOINT))
    }
}

/* --------------------------- Alert Output -------------------------- */
pub struct AlertOutput<'d> {
    pin: Output<'d>,
}

impl AlertOutput<'static> {
    pub fn new(r: AlertResources) -> Self {
        Self {
            pin: Output::new(r.BUZZER_PIN, Level::Low),
        }
    }
}

impl<'d> AlertOutput<'d> {
    /// One fixed-width pulse per detected loud event.
    pub async fn pulse(&mut self) {
        self.pin.set_high();
        Timer::after_millis(ALERT_PULSE_MS).await;
        self.pin.set_low();
    }
}

/* --------------------------- Task -------------------------- */
#[embassy_executor::task]
pub async fn sampler_task(mut sensor: SoundSensor<'static>, mut alert: AlertOutput<'static>) {
    let mut filter = MovingAverage::<SAMPLE_WINDOW>::new();
    let noise = NOISE_LEVEL.sender();
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLING_PERIOD_MS));

    loop {
        match sensor.read().await {
            Ok(magnitude) => {
                let average = filter.push(magnitude);
                noise.send(average);

                // Pulse then wipe as one step: no sample may land between
                // the alert and the reset, or the still-elevated window
                // would fire again on its slow decay.
                if evaluate(average, LOUD_THRESHOLD) == Loudness::Alert {
                    defmt::info!("loud event: average {} over threshold {}", average, LOUD_THRESHOLD);
                    alert.pulse().await;
                    filter.reset();
                    noise.send(filter.average());
                }
            }
            Err(e) => {
                // Skip the cycle instead of pushing a zero: a transient
                // driver fault must not drag the average down. The next
                // tick retries on its own.
                defmt::warn!("adc read failed, skipping sample: {}", e);
            }
        }

        ticker.next().await;
    }
}
