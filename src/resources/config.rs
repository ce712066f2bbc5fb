/*
*  Default Firmware Config
*
*  Microphone Front-End
*  - 12-bit ADC, raw range 0..4095
*  - Electret module biased around mid-scale, so the magnitude of
*    (raw - midpoint) is the sound level
*/

/* --------------------------- Sampling -------------------------- */
pub const SAMPLE_WINDOW: usize = 10;
pub const SAMPLING_PERIOD_MS: u64 = 50;
pub const ADC_BIAS_MIDPOINT: u16 = 2048;

/* --------------------------- Alerting -------------------------- */
pub const LOUD_THRESHOLD: u16 = 600; // Smoothed magnitude, range 0..2048
pub const ALERT_PULSE_MS: u64 = 100;

/* --------------------------- Telemetry -------------------------- */
pub const TELEMETRY_PERIOD_MS: u64 = 1000;
pub const MQTT_TOPIC: &str = "esp32/noise"; // Topic the collector subscribes to
pub const MQTT_CLIENT_ID: &str = "noise-monitor";
pub const MQTT_KEEP_ALIVE_SECS: u16 = 60;
pub const MQTT_BUFFER_SIZE: usize = 128;

/* --------------------------- Broker Link -------------------------- */
pub const LINK_BAUD_RATE: u32 = 115_200;
pub const LINK_BUFFER_SIZE: usize = 256;
