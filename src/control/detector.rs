/*
    Loudness Detector
*/

#[derive(Clone, Copy, PartialEq, Debug, defmt::Format)]
pub enum Loudness {
    Quiet,
    Alert,
}

/// Strict comparison: an average exactly at the threshold stays quiet.
/// The caller owns the alert side effects (pulse the output, then wipe
/// the filter) and must run them before sampling again.
pub fn evaluate(average: u16, threshold: u16) -> Loudness {
    if average > threshold {
        Loudness::Alert
    } else {
        Loudness::Quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_above_threshold() {
        assert_eq!(evaluate(51, 50), Loudness::Alert);
        assert_eq!(evaluate(50, 50), Loudness::Quiet);
        assert_eq!(evaluate(49, 50), Loudness::Quiet);
    }

    #[test]
    fn single_spike_below_threshold_stays_quiet() {
        let mut filter = crate::control::MovingAverage::<10>::new();

        for _ in 0..9 {
            filter.push(0);
        }
        let average = filter.push(100);

        assert_eq!(average, 10);
        assert_eq!(evaluate(average, 50), Loudness::Quiet);
    }

    #[test]
    fn sustained_loudness_fires_and_reset_clears() {
        let mut filter = crate::control::MovingAverage::<10>::new();

        let mut average = 0;
        for _ in 0..10 {
            average = filter.push(60);
        }

        assert_eq!(average, 60);
        assert_eq!(evaluate(average, 50), Loudness::Alert);

        filter.reset();
        assert_eq!(filter.average(), 0);
        assert_eq!(evaluate(filter.average(), 50), Loudness::Quiet);
    }
}
