use crate::seed::{SeedSource, SystemClockSeed};
use burrow_core::{HashError, Hasher, ShortCode};
use harsh::Harsh;
use typed_builder::TypedBuilder;

/// Minimum length of a generated short code unless configured otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Configures a [`HashidsGenerator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct HashidsSettings {
    /// Shorter outputs are padded up to this length. Large seeds produce
    /// longer codes regardless.
    #[builder(default = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,
    /// Custom encoding alphabet. `None` uses the hashids default.
    #[builder(default, setter(strip_option, into))]
    pub alphabet: Option<String>,
}

impl Default for HashidsSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Generates short codes by hashids-encoding a numeric seed.
///
/// The original URL is only used as the salt for the alphabet shuffle, so
/// the same URL hashed with two different seeds gives two different codes.
/// An encoder is built per call, which keeps the generator free of shared
/// mutable state.
#[derive(Debug, Clone)]
pub struct HashidsGenerator<S = SystemClockSeed> {
    settings: HashidsSettings,
    seed_source: S,
}

impl HashidsGenerator<SystemClockSeed> {
    /// Creates a generator seeded by the wall clock.
    pub fn new(settings: HashidsSettings) -> Self {
        Self::with_seed_source(settings, SystemClockSeed)
    }
}

impl Default for HashidsGenerator<SystemClockSeed> {
    fn default() -> Self {
        Self::new(HashidsSettings::default())
    }
}

impl<S: SeedSource> HashidsGenerator<S> {
    pub fn with_seed_source(settings: HashidsSettings, seed_source: S) -> Self {
        Self {
            settings,
            seed_source,
        }
    }

    pub fn settings(&self) -> &HashidsSettings {
        &self.settings
    }

    /// Encodes an explicit seed using `original_url` as the salt.
    pub fn encode_seed(&self, original_url: &str, seed: i64) -> Result<ShortCode, HashError> {
        let encoder = self.encoder(original_url)?;

        let value = u64::try_from(seed).map_err(|_| HashError::Encoding {
            seed,
            reason: "only non-negative seeds can be encoded".to_string(),
        })?;

        // the magnitude of the seed drives the length of the output
        Ok(ShortCode::new(encoder.encode(&[value])))
    }

    /// Recovers the seed from a code generated for `original_url`.
    pub fn decode_seed(&self, original_url: &str, code: &ShortCode) -> Result<i64, HashError> {
        let encoder = self.encoder(original_url)?;

        let values = encoder
            .decode(code.as_str())
            .map_err(|e| HashError::Decoding(e.to_string()))?;

        match values.as_slice() {
            [value] => i64::try_from(*value)
                .map_err(|_| HashError::Decoding(format!("seed {} is out of range", value))),
            other => Err(HashError::Decoding(format!(
                "expected a single seed, got {}",
                other.len()
            ))),
        }
    }

    fn encoder(&self, salt: &str) -> Result<Harsh, HashError> {
        let mut builder = Harsh::builder()
            .salt(salt)
            .length(self.settings.min_length);

        if let Some(alphabet) = &self.settings.alphabet {
            builder = builder.alphabet(alphabet.as_str());
        }

        builder
            .build()
            .map_err(|e| HashError::EncoderInit(e.to_string()))
    }
}

impl<S: SeedSource> Hasher for HashidsGenerator<S> {
    fn hash(&self, original_url: &str) -> Result<ShortCode, HashError> {
        self.encode_seed(original_url, self.seed_source.next_seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::FixedSeed;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    fn fixed(seed: i64) -> HashidsGenerator<FixedSeed> {
        HashidsGenerator::with_seed_source(HashidsSettings::default(), FixedSeed(seed))
    }

    #[test]
    fn fixed_seed_gives_known_codes() {
        let cases = [
            (1_000_000_000_000_000_000, "test", "1p8Znm3qNwBX"),
            (2_000_000_000_000_000_000, "test", "1eljm8OwNQ0xo"),
            (3_000_000_000_000_000_000, "http://jemgunay.co.uk", "5zxqVAkdbvaAp"),
            (
                4_000_000_000_000_000_000,
                "http://jemgunay.co.uk/this/is/a?test=123456789",
                "GP3Po1BrkVmnq",
            ),
        ];

        for (seed, url, expected) in cases {
            let generator = fixed(seed);

            assert_eq!(generator.hash(url).unwrap().as_str(), expected, "seed {seed}");
            // a second call and a fresh generator agree
            assert_eq!(generator.hash(url).unwrap().as_str(), expected);
            assert_eq!(fixed(seed).hash(url).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn small_seeds_are_padded_to_min_length() {
        for seed in [0, 1, 7, 42, 1_000] {
            let code = fixed(seed).hash("https://example.com").unwrap();
            assert_eq!(code.len(), DEFAULT_MIN_LENGTH, "seed {seed}");
        }
    }

    #[test]
    fn custom_min_length_is_honoured() {
        let settings = HashidsSettings::builder().min_length(20).build();
        let generator = HashidsGenerator::with_seed_source(settings, FixedSeed(1));

        assert_eq!(generator.hash("https://example.com").unwrap().len(), 20);
    }

    #[test]
    fn clock_seeded_codes_meet_min_length() {
        let generator = HashidsGenerator::default();

        for url in ["", "a", "https://example.com", "https://example.com/a/b?c=d"] {
            assert!(generator.hash(url).unwrap().len() >= DEFAULT_MIN_LENGTH);
        }
    }

    #[test]
    fn distinct_seeds_give_distinct_codes() {
        let counter = AtomicI64::new(1_700_000_000_000_000_000);
        let generator = HashidsGenerator::with_seed_source(HashidsSettings::default(), move || {
            counter.fetch_add(1, Ordering::SeqCst)
        });

        let codes: HashSet<_> = (0..1_000)
            .map(|_| generator.hash("https://example.com").unwrap())
            .collect();

        assert_eq!(codes.len(), 1_000);
    }

    #[test]
    fn same_url_shortened_twice_gets_fresh_code() {
        let generator = HashidsGenerator::default();

        let first = generator.hash("https://example.com").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = generator.hash("https://example.com").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn url_salts_the_output() {
        let generator = fixed(1_000_000_000_000_000_000);

        let a = generator.hash("https://a.example").unwrap();
        let b = generator.hash("https://b.example").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn only_the_seed_is_encoded() {
        let seed = 1_234_567_890_123_456_789;
        let generator = fixed(seed);

        let code = generator.hash("https://example.com").unwrap();

        assert_eq!(
            generator.decode_seed("https://example.com", &code).unwrap(),
            seed
        );
    }

    #[test]
    fn decode_with_wrong_salt_fails() {
        let generator = fixed(1_234_567_890);
        let code = generator.hash("https://example.com").unwrap();

        let err = generator
            .decode_seed("https://other.example", &code)
            .unwrap_err();
        assert!(matches!(err, HashError::Decoding(_)));
    }

    #[test]
    fn negative_seed_is_an_encoding_error() {
        let err = fixed(-1).hash("https://example.com").unwrap_err();

        assert!(matches!(err, HashError::Encoding { seed: -1, .. }));
    }

    #[test]
    fn invalid_alphabet_is_an_encoder_init_error() {
        let settings = HashidsSettings::builder().alphabet("abc").build();
        let generator = HashidsGenerator::with_seed_source(settings, FixedSeed(1));

        let err = generator.hash("https://example.com").unwrap_err();
        assert!(matches!(err, HashError::EncoderInit(_)));
    }

    #[test]
    fn custom_alphabet_restricts_output() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz";
        let settings = HashidsSettings::builder().alphabet(alphabet).build();
        let generator =
            HashidsGenerator::with_seed_source(settings, FixedSeed(1_000_000_000_000_000_000));

        let code = generator.hash("https://example.com").unwrap();
        assert!(code.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn concurrent_hashing() {
        let counter = AtomicI64::new(1);
        let generator = Arc::new(HashidsGenerator::with_seed_source(
            HashidsSettings::default(),
            move || counter.fetch_add(1, Ordering::SeqCst),
        ));

        let codes: Vec<ShortCode> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let generator = Arc::clone(&generator);
                    scope.spawn(move || {
                        (0..100)
                            .map(|_| generator.hash("https://example.com").unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), 800);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HashidsGenerator>();
        assert_send_sync::<HashidsGenerator<FixedSeed>>();
    }
}
