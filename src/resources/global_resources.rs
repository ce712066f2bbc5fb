/*
* Global Resources
*/

// Library
use defmt_rtt as _;
use panic_probe as _;
use embassy_sync::watch::Watch;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/* --------------------------- Variables -------------------------- */
pub const NOISE_CONSUMERS: usize = 1;

/* --------------------------- Mailbox -------------------------- */
// Latest smoothed noise level, sampler task -> telemetry task.
// Single-slot, overwrite on send: the telemetry task reads whatever
// value is current at its own period, missed updates are never queued.
// The filter state itself stays owned by the sampler task, so only this
// finished u16 ever crosses tasks.
pub static NOISE_LEVEL: Watch<CriticalSectionRawMutex, u16, NOISE_CONSUMERS> = Watch::new();
