
use defmt_rtt as _;
use panic_probe as _;

pub mod moving_average;
pub mod detector;

pub use moving_average::*;
pub use detector::*;
