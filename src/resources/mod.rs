/*
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use defmt_rtt as _;
use panic_probe as _;
use assign_resources::assign_resources;

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::uart::BufferedInterruptHandler;

/* --------------------------- Declare Modules -------------------------- */
pub mod gpio_list;
pub mod global_resources;
pub mod config;

pub use gpio_list::*;
pub use config::*;
