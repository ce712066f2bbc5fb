/*
    Moving Average Filter
*/

pub struct MovingAverage<const N: usize> {
    buffer: [u16; N],
    index: usize,
    sum: u32,
    average: u16,
}

impl<const N: usize> MovingAverage<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            index: 0,
            sum: 0,
            average: 0,
        }
    }

    /// Pushes one reading and returns the new average. Slots that have
    /// not been written yet count as zero, so the divisor is always N
    /// and the result is the truncating integer mean of the window.
    pub fn push(&mut self, reading: u16) -> u16 {
        self.sum -= self.buffer[self.index] as u32;
        self.buffer[self.index] = reading;
        self.sum += reading as u32;

        self.index = (self.index + 1) % N;
        self.average = (self.sum / N as u32) as u16;

        debug_assert!(self.sum == self.buffer.iter().map(|&v| v as u32).sum::<u32>());

        self.average
    }

    pub fn average(&self) -> u16 {
        self.average
    }

    /// Wipes the whole window. Called after an alert fires so the
    /// still-elevated average cannot re-trigger while it decays.
    pub fn reset(&mut self) {
        self.buffer = [0; N];
        self.index = 0;
        self.sum = 0;
        self.average = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_slots_count_as_zero() {
        let mut filter = MovingAverage::<10>::new();

        for _ in 0..9 {
            filter.push(0);
        }
        let average = filter.push(100);

        assert_eq!(average, 10);
    }

    #[test]
    fn partial_window_divides_by_n() {
        let mut filter = MovingAverage::<10>::new();

        filter.push(7);
        filter.push(8);
        let average = filter.push(9);

        // floor((7 + 8 + 9) / 10)
        assert_eq!(average, 2);
    }

    #[test]
    fn converges_after_n_constant_pushes() {
        let mut filter = MovingAverage::<10>::new();

        let mut average = 0;
        for _ in 0..10 {
            average = filter.push(60);
        }

        assert_eq!(average, 60);
    }

    #[test]
    fn wraps_around_and_drops_oldest() {
        let mut filter = MovingAverage::<4>::new();

        for value in [10, 20, 30, 40, 50, 60] {
            filter.push(value);
        }

        // Window now holds [50, 60, 30, 40]
        assert_eq!(filter.average(), 45);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut filter = MovingAverage::<10>::new();

        for _ in 0..10 {
            filter.push(2048);
        }
        filter.reset();

        assert_eq!(filter.average(), 0);

        let mut average = 0;
        for _ in 0..10 {
            average = filter.push(0);
        }
        assert_eq!(average, 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut filter = MovingAverage::<10>::new();

        filter.push(500);
        filter.reset();
        filter.reset();

        assert_eq!(filter.average(), 0);
        assert_eq!(filter.push(100), 10);
    }

    #[test]
    fn max_magnitude_does_not_overflow_sum() {
        let mut filter = MovingAverage::<10>::new();

        let mut average = 0;
        for _ in 0..10 {
            average = filter.push(2048);
        }

        assert_eq!(average, 2048);
    }
}
