pub mod sampler;
pub mod telemetry;
pub mod heartbeat;
