use jiff::Timestamp;

/// Produces the numeric seed encoded into each short code.
///
/// Distinct seeds across calls are what give distinct codes for the same
/// URL, so production sources should effectively never repeat.
pub trait SeedSource: Send + Sync + 'static {
    fn next_seed(&self) -> i64;
}

/// Seeds from the wall clock in nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClockSeed;

impl SeedSource for SystemClockSeed {
    fn next_seed(&self) -> i64 {
        // i64 nanoseconds overflow in 2262
        i64::try_from(Timestamp::now().as_nanosecond()).unwrap_or(i64::MAX)
    }
}

/// Always returns the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub i64);

impl SeedSource for FixedSeed {
    fn next_seed(&self) -> i64 {
        self.0
    }
}

impl<F> SeedSource for F
where
    F: Fn() -> i64 + Send + Sync + 'static,
{
    fn next_seed(&self) -> i64 {
        self()
    }
}
