use rand::Rng;

/// Source of uniformly distributed level indices.
pub trait RandomSource {
    /// A value in `[0, n)`; `n` is always at least 1.
    fn uniform_int(&mut self, n: usize) -> usize;
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

/// Picks the next level, never repeating `previous` when there is any other choice.
/// Draws from one fewer slot and skips over `previous`, so the rest stay equally likely.
pub fn select_next(
    template_count: usize,
    previous: Option<usize>,
    rng: &mut impl RandomSource,
) -> usize {
    assert!(template_count > 0, "cannot select from an empty catalog");
    if template_count == 1 {
        return 0;
    }

    let Some(previous) = previous else {
        return rng.uniform_int(template_count);
    };

    let index = rng.uniform_int(template_count - 1);
    if index >= previous {
        index + 1
    } else {
        index
    }
}
