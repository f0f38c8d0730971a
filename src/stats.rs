/// Running statistics over a stream of scalar observations, e.g. the loss of
/// each batch within an epoch.
///
/// Owned by a single training loop; no synchronization is provided.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageMeter {
    val: f32,
    sum: f32,
    count: usize,
}

impl AverageMeter {
    /// Returns a zeroed `AverageMeter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes the current value, the cumulative sum and the sample count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records `val` with weight `n` (typically the batch size).
    ///
    /// # Arguments
    /// * `val` - The observed value.
    /// * `n` - How many samples the observation stands for.
    pub fn update(&mut self, val: f32, n: usize) {
        self.val = val;
        self.sum += val * n as f32;
        self.count += n;
    }

    /// Returns the last recorded value.
    pub fn val(&self) -> f32 {
        self.val
    }

    /// Returns the weighted sum of all recorded values.
    pub fn sum(&self) -> f32 {
        self.sum
    }

    /// Returns the total sample count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the running average, `sum / count`.
    ///
    /// Before the first `update` (and right after a `reset`) the count is
    /// zero and this yields NaN.
    pub fn avg(&self) -> f32 {
        self.sum / self.count as f32
    }
}
