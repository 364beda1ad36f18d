use std::collections::VecDeque;

/// Samples kept per chart when nothing else is configured.
pub const DEFAULT_RETAIN: usize = 1024;

/// Rolling history of percentage samples for one chart.
///
/// Samples are kept in arrival order.  Once more than `retain` samples are
/// held the oldest are evicted, so memory stays bounded however long the
/// dashboard runs.  `retain` only ever grows: a chart that is resized
/// narrower and back wider still finds its history.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    values:   VecDeque<f64>,
    /// Total number of samples ever appended.
    position: u64,
    retain:   usize,
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_RETAIN)
    }
}

impl SampleBuffer {
    pub fn new(retain: usize) -> Self {
        let retain = retain.max(1);
        Self {
            values: VecDeque::with_capacity(retain.min(DEFAULT_RETAIN)),
            position: 0,
            retain,
        }
    }

    /// Record one sample at the next position.  Non-finite values are
    /// recorded as zero.
    pub fn append(&mut self, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        if self.values.len() == self.retain {
            self.values.pop_front();
        }
        self.values.push_back(value);
        self.position += 1;
    }

    /// The last `n` samples, oldest first.  Yields fewer when the history is
    /// shorter and nothing at all for `n <= 0`.
    pub fn tail(&self, n: i64) -> std::collections::vec_deque::Iter<'_, f64> {
        let len = self.values.len();
        let n = n.clamp(0, len as i64) as usize;
        self.values.range(len - n..)
    }

    /// Make sure a window of `width` samples can always be served.
    pub fn retain_at_least(&mut self, width: i64) {
        if width > self.retain as i64 {
            self.retain = width as usize;
        }
    }

    /// Number of samples appended over the buffer's lifetime.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The most recent sample.
    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn retain(&self) -> usize {
        self.retain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[f64]) -> SampleBuffer {
        let mut buf = SampleBuffer::new(16);
        for v in values {
            buf.append(*v);
        }
        buf
    }

    #[test]
    fn tail_returns_most_recent_in_order() {
        let buf = filled(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buf.tail(2).copied().collect::<Vec<_>>(), vec![3.0, 4.0]);
        assert_eq!(buf.tail(10).count(), 4);
    }

    #[test]
    fn negative_or_zero_width_is_empty() {
        let buf = filled(&[1.0, 2.0]);
        assert_eq!(buf.tail(0).count(), 0);
        assert_eq!(buf.tail(-6).count(), 0);
    }

    #[test]
    fn position_counts_every_append() {
        let mut buf = SampleBuffer::new(2);
        for v in 0..5 {
            buf.append(v as f64);
        }
        assert_eq!(buf.position(), 5);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.tail(2).copied().collect::<Vec<_>>(), vec![3.0, 4.0]);
    }

    #[test]
    fn non_finite_samples_become_zero() {
        let buf = filled(&[f64::NAN, f64::INFINITY]);
        assert_eq!(buf.tail(2).copied().collect::<Vec<_>>(), vec![0.0, 0.0]);
    }

    #[test]
    fn retention_only_grows() {
        let mut buf = SampleBuffer::new(4);
        buf.retain_at_least(10);
        assert_eq!(buf.retain(), 10);
        buf.retain_at_least(2);
        buf.retain_at_least(-3);
        assert_eq!(buf.retain(), 10);
        for v in 0..10 {
            buf.append(v as f64);
        }
        assert_eq!(buf.len(), 10);
        assert_eq!(buf.latest(), Some(9.0));
    }
}
