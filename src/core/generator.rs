//! Secret code generation
//!
//! Defines the [`CodeGenerator`] trait and its implementations.

use super::code::{CODE_LENGTH, Code};
use super::color::{PALETTE, PALETTE_SIZE};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of secret codes
///
/// Called once per round start; implementations must not cache the result.
pub trait CodeGenerator {
    fn generate(&mut self) -> Code;
}

/// Uniform random secrets: each slot drawn independently from the palette,
/// with replacement
pub struct RandomCodeGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomCodeGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomCodeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomCodeGenerator<StdRng> {
    /// Reproducible generator for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from `seed` if given, otherwise from OS entropy
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(
            || Self {
                rng: StdRng::from_os_rng(),
            },
            Self::seeded,
        )
    }
}

impl<R: Rng> RandomCodeGenerator<R> {
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CodeGenerator for RandomCodeGenerator<R> {
    fn generate(&mut self) -> Code {
        Code::new(std::array::from_fn::<_, CODE_LENGTH, _>(|_| {
            PALETTE[self.rng.random_range(0..PALETTE_SIZE)]
        }))
    }
}

/// Replays a fixed list of secrets in order, cycling when exhausted
///
/// Useful for demos and tests where the secret must be known up front.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, CodeGenerator, FixedCodeGenerator};
///
/// let first: Code = "rrgg".parse().unwrap();
/// let second: Code = "bbyy".parse().unwrap();
/// let mut generator = FixedCodeGenerator::new(first).then(second);
///
/// assert_eq!(generator.generate(), first);
/// assert_eq!(generator.generate(), second);
/// assert_eq!(generator.generate(), first);
/// ```
#[derive(Debug, Clone)]
pub struct FixedCodeGenerator {
    codes: Vec<Code>,
    next: usize,
}

impl FixedCodeGenerator {
    #[must_use]
    pub fn new(code: Code) -> Self {
        Self {
            codes: vec![code],
            next: 0,
        }
    }

    /// Append another secret to the replay list
    #[must_use]
    pub fn then(mut self, code: Code) -> Self {
        self.codes.push(code);
        self
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&mut self) -> Code {
        let code = self.codes[self.next % self.codes.len()];
        self.next += 1;
        code
    }
}
