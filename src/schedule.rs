/// A learning rate schedule tracking one rate per optimizer parameter group.
pub trait LrSchedule {
    /// Returns the current learning rate for every tracked parameter group.
    fn lrs(&self) -> Vec<f32>;

    /// Advances the schedule by one iteration.
    fn step(&mut self);
}

/// Exponentially increasing learning rate, used for learning-rate-range
/// search: each group's rate starts at its base rate and reaches `max_lr`
/// after `total_iters` steps. Not meant as a training schedule.
///
/// Base rates must be strictly positive; a zero base makes the growth ratio
/// undefined.
pub struct FindLr {
    base_lrs: Vec<f32>,
    max_lr: f32,
    total_iters: usize,
    step: usize,
}

impl FindLr {
    /// Returns a new `FindLr`.
    ///
    /// # Arguments
    /// * `base_lrs` - The starting learning rate of each parameter group.
    /// * `max_lr` - The rate every group sweeps toward.
    /// * `total_iters` - The number of steps the sweep takes to reach `max_lr`.
    pub fn new<I>(base_lrs: I, max_lr: f32, total_iters: usize) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        Self {
            base_lrs: base_lrs.into_iter().collect(),
            max_lr,
            total_iters,
            step: 0,
        }
    }

    /// Returns the number of steps applied so far.
    pub fn current_step(&self) -> usize {
        self.step
    }
}

impl LrSchedule for FindLr {
    /// Computes `base * (max_lr / base) ^ (step / total_iters)` per group.
    ///
    /// A zero iteration budget degenerates the sweep to `max_lr` for every
    /// group, no epsilon tricks on the divisor.
    fn lrs(&self) -> Vec<f32> {
        if self.total_iters == 0 {
            return vec![self.max_lr; self.base_lrs.len()];
        }

        let progress = self.step as f32 / self.total_iters as f32;

        self.base_lrs
            .iter()
            .map(|&base| base * (self.max_lr / base).powf(progress))
            .collect()
    }

    fn step(&mut self) {
        self.step += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_base_rates() {
        let sched = FindLr::new([1e-4, 1e-3], 10.0, 100);
        let lrs = sched.lrs();

        assert!((lrs[0] - 1e-4).abs() < 1e-9);
        assert!((lrs[1] - 1e-3).abs() < 1e-8);
    }

    #[test]
    fn reaches_max_lr_at_budget() {
        let mut sched = FindLr::new([1e-4], 10.0, 50);

        for _ in 0..50 {
            sched.step();
        }

        assert!((sched.lrs()[0] - 10.0).abs() < 1e-3);
    }

    #[test]
    fn monotonically_increasing_within_bounds() {
        let mut sched = FindLr::new([1e-4], 10.0, 100);
        let mut prev = sched.lrs()[0];

        for _ in 0..100 {
            sched.step();
            let lr = sched.lrs()[0];

            assert!(lr >= prev, "lr regressed: {lr} < {prev}");
            assert!((1e-4..=10.0 + 1e-3).contains(&lr));
            prev = lr;
        }
    }

    #[test]
    fn zero_budget_degenerates_to_max() {
        let sched = FindLr::new([1e-4, 1e-2], 5.0, 0);

        assert_eq!(sched.lrs(), vec![5.0, 5.0]);
    }
}
