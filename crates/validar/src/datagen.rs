//! Deterministic test-data generation.
//!
//! Entity names, labels and descriptions are generated rather than
//! hard-coded so that suites can run repeatedly against the same
//! deployment without colliding. Generation is seeded and reproducible:
//! a failing test can be re-run with the seed it logged.

/// Deterministic seed for reproducible data generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Seed(u64);

impl Seed {
    /// Create a seed from a u64 value
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw seed value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Simple xorshift64 PRNG for deterministic generation
#[derive(Debug, Clone)]
struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const fn new(seed: Seed) -> Self {
        // Ensure non-zero state
        let state = if seed.0 == 0 { 1 } else { seed.0 };
        Self { state }
    }

    const fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    const fn next_range(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        min + (self.next() % (max - min))
    }
}

/// The kinds of strings the product must accept (or reject) as names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    /// ASCII letters only
    Alpha,
    /// ASCII letters and digits
    Alphanumeric,
    /// ASCII digits only
    Numeric,
    /// Accented Latin-1 letters
    Latin1,
    /// Mixed multi-byte UTF-8 letters
    Utf8,
    /// CJK ideographs
    Cjk,
    /// An alpha string wrapped in markup
    Html,
}

impl StringKind {
    /// All kinds exercised by data-driven positive tests
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Alpha,
            Self::Alphanumeric,
            Self::Numeric,
            Self::Latin1,
            Self::Utf8,
            Self::Cjk,
            Self::Html,
        ]
    }
}

const ALPHA: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const LATIN1: &[char] = &[
    'à', 'á', 'â', 'ã', 'ä', 'å', 'æ', 'ç', 'è', 'é', 'ê', 'ë', 'ì', 'í', 'î', 'ï', 'ñ', 'ò',
    'ó', 'ô', 'õ', 'ö', 'ø', 'ù', 'ú', 'û', 'ü', 'ý',
];

const GREEK: &[char] = &[
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'λ', 'μ', 'ν', 'ξ', 'π', 'ρ', 'σ', 'τ', 'φ', 'χ',
    'ψ', 'ω',
];

/// Generator for test entity names, labels, paths and descriptions.
#[derive(Debug, Clone)]
pub struct DataFactory {
    rng: Xorshift64,
    seed: Seed,
    generated: u64,
}

impl DataFactory {
    /// Create a factory with the given seed
    #[must_use]
    pub const fn new(seed: Seed) -> Self {
        Self {
            rng: Xorshift64::new(seed),
            seed,
            generated: 0,
        }
    }

    /// Create a factory seeded from the clock and process id.
    ///
    /// Suites against a live server want fresh names on every run; the
    /// chosen seed is logged so a failure is still reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        let seed = Seed::from_u64(nanos ^ (u64::from(std::process::id()) << 32));
        tracing::debug!(seed = seed.value(), "data factory seeded from entropy");
        Self::new(seed)
    }

    /// The seed this factory was created with
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Number of strings generated so far
    #[must_use]
    pub const fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate a string of `len` characters of the given kind.
    ///
    /// `len` counts characters, not bytes; multi-byte kinds produce
    /// longer byte sequences. `Html` wraps an alpha string of `len`
    /// characters in a `<b>` element.
    #[must_use]
    pub fn string(&mut self, kind: StringKind, len: usize) -> String {
        self.generated += 1;
        match kind {
            StringKind::Alpha => self.from_charset(ALPHA, len),
            StringKind::Alphanumeric => {
                let mut charset = Vec::with_capacity(ALPHA.len() + DIGITS.len());
                charset.extend_from_slice(ALPHA);
                charset.extend_from_slice(DIGITS);
                self.from_charset(&charset, len)
            }
            StringKind::Numeric => self.from_charset(DIGITS, len),
            StringKind::Latin1 => self.from_charset(LATIN1, len),
            StringKind::Utf8 => {
                let mut charset = Vec::with_capacity(ALPHA.len() + LATIN1.len() + GREEK.len());
                charset.extend_from_slice(ALPHA);
                charset.extend_from_slice(LATIN1);
                charset.extend_from_slice(GREEK);
                self.from_charset(&charset, len)
            }
            StringKind::Cjk => {
                // CJK Unified Ideographs block
                (0..len)
                    .filter_map(|_| char::from_u32(0x4E00 + self.rng.next_range(0, 0x9FA5 - 0x4E00) as u32))
                    .collect()
            }
            StringKind::Html => {
                let inner = self.from_charset(ALPHA, len);
                format!("<b>{inner}</b>")
            }
        }
    }

    /// Shorthand for an alpha string
    #[must_use]
    pub fn alpha(&mut self, len: usize) -> String {
        self.string(StringKind::Alpha, len)
    }

    /// Shorthand for an alphanumeric string
    #[must_use]
    pub fn alphanumeric(&mut self, len: usize) -> String {
        self.string(StringKind::Alphanumeric, len)
    }

    /// Shorthand for a numeric string
    #[must_use]
    pub fn numeric(&mut self, len: usize) -> String {
        self.string(StringKind::Numeric, len)
    }

    /// A name that is unique within this factory's lifetime:
    /// `prefix-<alpha8>-<counter>`.
    #[must_use]
    pub fn unique_name(&mut self, prefix: &str) -> String {
        let tag = self.alpha(8);
        format!("{prefix}-{tag}-{}", self.generated)
    }

    /// A plausible HTTP URL for repository and media paths
    #[must_use]
    pub fn url(&mut self) -> String {
        let host = self.alpha(8).to_lowercase();
        format!("http://{host}.example.com/pub")
    }

    /// Pick one element of a slice
    #[must_use]
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.rng.next_range(0, items.len() as u64) as usize;
        &items[idx]
    }

    fn from_charset(&mut self, charset: &[char], len: usize) -> String {
        (0..len)
            .map(|_| charset[self.rng.next_range(0, charset.len() as u64) as usize])
            .collect()
    }
}

/// One valid name per string kind, for data-driven positive tests.
#[must_use]
pub fn valid_data_list(factory: &mut DataFactory) -> Vec<String> {
    StringKind::all()
        .iter()
        .map(|kind| factory.string(*kind, 10))
        .collect()
}

/// Names the product must reject: blank, whitespace-only, and
/// over-length values.
#[must_use]
pub fn invalid_values_list(factory: &mut DataFactory) -> Vec<String> {
    vec![
        String::new(),
        "  ".to_string(),
        "\t".to_string(),
        factory.alpha(256),
    ]
}
