use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Species the stub classifier can "identify".
pub const SPECIES: [&str; 10] = [
    "Monstera Deliciosa",
    "Peace Lily",
    "Snake Plant",
    "Fiddle Leaf Fig",
    "Pothos",
    "Rubber Plant",
    "ZZ Plant",
    "Philodendron",
    "Spider Plant",
    "Aloe Vera",
];

/// Default simulated inference latency.
pub const DEFAULT_INFERENCE_DELAY: Duration = Duration::from_millis(100);

/// Result of one simulated classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Identification {
    pub plant_name: String,
    /// Uniform in [0.6, 1.0).
    pub confidence: f64,
}

/// Stand-in for a real plant classifier.
///
/// Sleeps for a configurable delay to mimic inference latency, then picks a
/// species uniformly at random. The frame payload is never inspected. The
/// RNG is owned by the classifier so tests can seed it for deterministic
/// output.
pub struct Classifier {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl Classifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic classifier for tests.
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Simulate classifying one frame payload.
    ///
    /// Only the calling session waits out the delay; the lock is taken
    /// after the sleep and never held across an await.
    pub async fn classify(&self, _frame: &str) -> Identification {
        tokio::time::sleep(self.delay).await;

        let mut rng = self.rng.lock();
        let plant_name = SPECIES[rng.gen_range(0..SPECIES.len())].to_owned();
        let confidence = rng.gen_range(0.6..1.0);

        Identification {
            plant_name,
            confidence,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_INFERENCE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn picks_a_known_species() {
        let classifier = Classifier::default();
        let id = classifier.classify("frame-bytes").await;
        assert!(SPECIES.contains(&id.plant_name.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn confidence_stays_in_range() {
        let classifier = Classifier::default();
        for _ in 0..100 {
            let id = classifier.classify("x").await;
            assert!((0.6..1.0).contains(&id.confidence), "got {}", id.confidence);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_classifiers_agree() {
        let a = Classifier::seeded(Duration::ZERO, 42);
        let b = Classifier::seeded(Duration::ZERO, 42);
        for _ in 0..10 {
            assert_eq!(a.classify("x").await, b.classify("x").await);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn different_seeds_diverge() {
        let a = Classifier::seeded(Duration::ZERO, 1);
        let b = Classifier::seeded(Duration::ZERO, 2);
        let runs_a: Vec<Identification> = {
            let mut v = Vec::new();
            for _ in 0..10 {
                v.push(a.classify("x").await);
            }
            v
        };
        let runs_b: Vec<Identification> = {
            let mut v = Vec::new();
            for _ in 0..10 {
                v.push(b.classify("x").await);
            }
            v
        };
        assert_ne!(runs_a, runs_b);
    }

    #[tokio::test(start_paused = true)]
    async fn payload_is_not_inspected() {
        // Same seed, wildly different payloads: identical outputs.
        let a = Classifier::seeded(Duration::ZERO, 7);
        let b = Classifier::seeded(Duration::ZERO, 7);
        let from_empty = a.classify("").await;
        let from_garbage = b.classify("\u{0}\u{1}not-an-image").await;
        assert_eq!(from_empty, from_garbage);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_elapses_before_returning() {
        let classifier = Classifier::seeded(Duration::from_millis(100), 0);
        let start = tokio::time::Instant::now();
        let _ = classifier.classify("x").await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
