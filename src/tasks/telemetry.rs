/*
* Telemetry Task
*  - Slow loop: publish the smoothed level to the MQTT broker
*  - The broker TCP session is terminated by a serial-to-TCP bridge on
*    UART0; station bring-up and credentials live on the bridge
*/

// Resources
use crate::resources::Irqs;
use crate::resources::TelemetryResources;
use crate::resources::TELEMETRY_PERIOD_MS;
use crate::resources::MQTT_TOPIC;
use crate::resources::MQTT_CLIENT_ID;
use crate::resources::MQTT_KEEP_ALIVE_SECS;
use crate::resources::MQTT_BUFFER_SIZE;
use crate::resources::LINK_BAUD_RATE;
use crate::resources::LINK_BUFFER_SIZE;
use crate::resources::global_resources::NOISE_LEVEL;
use crate::resources::global_resources::NOISE_CONSUMERS;

// Library
use defmt_rtt as _;
use panic_probe as _;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart;
use embassy_rp::uart::BufferedUart;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::Receiver;
use embassy_time::Ticker;
use embassy_time::Duration;
use embedded_io_async::Read;
use embedded_io_async::Write;
use static_cell::StaticCell;
use rust_mqtt::client::client::MqttClient;
use rust_mqtt::client::client_config::ClientConfig;
use rust_mqtt::client::client_config::MqttVersion;
use rust_mqtt::packet::v5::publish_packet::QualityOfService;
use rust_mqtt::packet::v5::reason_codes::ReasonCode;
use rust_mqtt::utils::rng_generator::CountingRng;

pub type NoiseReceiver = Receiver<'static, CriticalSectionRawMutex, u16, NOISE_CONSUMERS>;

/* --------------------------- Broker Link -------------------------- */
static LINK_TX_BUF: StaticCell<[u8; LINK_BUFFER_SIZE]> = StaticCell::new();
static LINK_RX_BUF: StaticCell<[u8; LINK_BUFFER_SIZE]> = StaticCell::new();

pub fn broker_link(r: TelemetryResources) -> BufferedUart<'static, UART0> {
    let mut config = uart::Config::default();
    config.baudrate = LINK_BAUD_RATE;

    BufferedUart::new(
        r.UART,
        Irqs,
        r.TX_PIN,
        r.RX_PIN,
        LINK_TX_BUF.init([0; LINK_BUFFER_SIZE]),
        LINK_RX_BUF.init([0; LINK_BUFFER_SIZE]),
        config,
    )
}

/* --------------------------- Wire Format -------------------------- */
/// Payload expected by the collector: two raw bytes, little-endian
/// unsigned average. No envelope, no timestamp, the topic is the only
/// addressing.
pub fn encode_level(average: u16) -> [u8; 2] {
    average.to_le_bytes()
}

/* --------------------------- Publisher -------------------------- */
pub struct NoisePublisher<'a, T: Read + Write> {
    client: MqttClient<'a, T, 5, CountingRng>,
    connected: bool,
}

impl<'a, T: Read + Write> NoisePublisher<'a, T> {
    pub fn new(transport: T, write_buffer: &'a mut [u8], recv_buffer: &'a mut [u8]) -> Self {
        let mut config: ClientConfig<'a, 5, CountingRng> =
            ClientConfig::new(MqttVersion::MQTTv5, CountingRng(20000));
        config.add_client_id(MQTT_CLIENT_ID);
        config.keep_alive = MQTT_KEEP_ALIVE_SECS;
        config.max_packet_size = MQTT_BUFFER_SIZE as u32;

        Self {
            client: MqttClient::new(
                transport,
                write_buffer,
                MQTT_BUFFER_SIZE,
                recv_buffer,
                MQTT_BUFFER_SIZE,
                config,
            ),
            connected: false,
        }
    }

    /// Best-effort publish at QoS 1, no retain. A failure drops the
    /// value and closes the session; the next scheduled publish opens a
    /// fresh one and supersedes it.
    pub async fn publish(&mut self, average: u16) -> Result<(), ReasonCode> {
        if !self.connected {
            self.client.connect_to_broker().await?;
            self.connected = true;
            defmt::info!("mqtt session open as {}", MQTT_CLIENT_ID);
        }

        let payload = encode_level(average);
        let sent = self
            .client
            .send_message(MQTT_TOPIC, &payload, QualityOfService::QoS1, false)
            .await;

        if sent.is_err() {
            self.connected = false;
        }

        sent
    }
}

/* --------------------------- Task -------------------------- */
#[embassy_executor::task]
pub async fn telemetry_task(link: BufferedUart<'static, UART0>, mut noise: NoiseReceiver) {
    let mut write_buffer = [0u8; MQTT_BUFFER_SIZE];
    let mut recv_buffer = [0u8; MQTT_BUFFER_SIZE];
    let mut publisher = NoisePublisher::new(link, &mut write_buffer, &mut recv_buffer);

    let mut ticker = Ticker::every(Duration::from_millis(TELEMETRY_PERIOD_MS));

    loop {
        ticker.next().await;

        // Whatever is in the mailbox right now; nothing sampled yet is
        // not worth a publish.
        let Some(average) = noise.try_get() else {
            continue;
        };

        match publisher.publish(average).await {
            Ok(()) => defmt::debug!("published noise level {}", average),
            Err(e) => defmt::warn!(
                "publish failed, value {} dropped: {}",
                average,
                defmt::Debug2Format(&e)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_two_bytes_little_endian() {
        assert_eq!(encode_level(0), [0x00, 0x00]);
        assert_eq!(encode_level(10), [0x0A, 0x00]);
        assert_eq!(encode_level(0x0102), [0x02, 0x01]);
        assert_eq!(encode_level(2048), [0x00, 0x08]);
    }
}
