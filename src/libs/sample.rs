use rand::Rng;

/// Options of the rejection sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleConfig {
    /// Forbid repeated indices within one draw
    pub distinct: bool,
    /// Give up after this many rejected draws. `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl SampleConfig {
    pub fn distinct() -> Self {
        Self {
            distinct: true,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

/// Draws `count` indices from `0..max`.
///
/// With `distinct` a repeated value is drawn again, so `count` must not exceed
/// `max`; the caller checks that.
///
/// ```
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let draw = parsel::libs::sample::random_indices(&mut rng, 5, 5, true);
/// let mut sorted = draw.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
/// ```
pub fn random_indices<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max: usize,
    distinct: bool,
) -> Vec<usize> {
    let mut drawn: Vec<usize> = Vec::with_capacity(count);
    if max == 0 {
        return drawn;
    }

    while drawn.len() < count {
        let value = rng.gen_range(0..max);
        if distinct && drawn.contains(&value) {
            continue;
        }
        drawn.push(value);
    }

    drawn
}
