//! Synthetic sample generation for the no-match fallback

use crate::instrument::DebtInstrumentRecord;

/// Number of records the fallback always produces.
pub const SAMPLE_NOTE_COUNT: usize = 15;

/// Small deterministic xorshift64* generator.
///
/// Injected into the extractor so fallback output is reproducible:
/// the same seed always yields the same sample portfolio.
#[derive(Debug, Clone)]
pub struct SampleRng {
    state: u64,
}

impl SampleRng {
    /// Create a generator from a seed. Zero is remapped since the
    /// xorshift state must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E3779B97F4A7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in [low, high).
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// Uniform integer in [low, high).
    pub fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low < high);
        let span = (high - low) as u64;
        low + (self.next_u64() % span) as i32
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Generate the fixed-size sample portfolio used when no real
/// identifiers were extracted: monotonically increasing amounts with
/// small jitter on rate and due year.
pub fn generate_sample_notes(current_year: i32, rng: &mut SampleRng) -> Vec<DebtInstrumentRecord> {
    let mut notes = Vec::with_capacity(SAMPLE_NOTE_COUNT);

    for i in 1..=SAMPLE_NOTE_COUNT as i32 {
        let due_year = current_year + rng.range_i32(1, 8);
        let rate = round3(1.5 + i as f64 * 0.15 + rng.uniform(-0.1, 0.1));
        let amount = (75 + i * 12) as f64;
        let name = format!("Note A{}.{}", i, rate.to_string().replace('.', ""));

        let record = DebtInstrumentRecord::new(
            name,
            rate,
            due_year,
            amount,
            "Various Financial Institutions",
        )
        .expect("sample constants satisfy the record invariants");

        notes.push(record);
    }

    notes
}
