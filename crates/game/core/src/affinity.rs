//! Elemental affinities and the attacker/defender damage-multiplier chart.
//!
//! The chart is sparse and asymmetric: `Water -> Fire` is 2x while
//! `Fire -> Water` is 0x. Pairs not listed in the chart are neutral (1x).
//! Multipliers are kept as exact rationals so stacking against several
//! defender affinities never drifts through floating point.

use core::fmt;

/// Elemental type tag carried by monsters and moves.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Affinity {
    #[default]
    None = 0,
    Water = 1,
    Ghost = 2,
    Fire = 3,
    Electric = 4,
    Plant = 5,
    Rock = 6,
}

impl Affinity {
    /// Number of affinities (chart dimension).
    pub const COUNT: usize = 7;

    /// All affinities in chart order.
    pub const ALL: [Affinity; Self::COUNT] = [
        Affinity::None,
        Affinity::Water,
        Affinity::Ghost,
        Affinity::Fire,
        Affinity::Electric,
        Affinity::Plant,
        Affinity::Rock,
    ];

    /// Chart index for this affinity.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Multiplier applied when a move of this affinity hits `defender`.
    #[inline]
    pub const fn multiplier(self, defender: Affinity) -> Multiplier {
        MULTIPLIER_CHART[self.index()][defender.index()]
    }

    /// Combined multiplier against every affinity of a defender.
    ///
    /// The per-affinity multipliers are multiplied together, so a single 0x
    /// entry makes the whole hit deal nothing.
    pub fn multiplier_against(self, defenders: &[Affinity]) -> Multiplier {
        defenders
            .iter()
            .fold(Multiplier::NEUTRAL, |acc, &defender| {
                acc.compound(self.multiplier(defender))
            })
    }
}

/// Non-negative rational damage multiplier.
///
/// Always stored in lowest terms, so derived equality compares values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiplier {
    numerator: u32,
    denominator: u32,
}

impl Multiplier {
    pub const IMMUNE: Multiplier = Multiplier::new(0, 1);
    pub const HALF: Multiplier = Multiplier::new(1, 2);
    pub const NEUTRAL: Multiplier = Multiplier::new(1, 1);
    pub const DOUBLE: Multiplier = Multiplier::new(2, 1);
    pub const TRIPLE: Multiplier = Multiplier::new(3, 1);

    /// Creates a multiplier `numerator / denominator` reduced to lowest terms.
    ///
    /// A zero denominator is treated as 1.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        let denominator = if denominator == 0 { 1 } else { denominator };
        if numerator == 0 {
            return Self {
                numerator: 0,
                denominator: 1,
            };
        }
        let divisor = gcd(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    pub const fn numerator(self) -> u32 {
        self.numerator
    }

    pub const fn denominator(self) -> u32 {
        self.denominator
    }

    pub const fn is_immune(self) -> bool {
        self.numerator == 0
    }

    /// Product of two multipliers.
    pub const fn compound(self, other: Multiplier) -> Multiplier {
        let numerator = self.numerator as u64 * other.numerator as u64;
        let denominator = self.denominator as u64 * other.denominator as u64;
        let divisor = gcd_u64(numerator, denominator);
        let (numerator, denominator) = if numerator == 0 {
            (0, 1)
        } else {
            (numerator / divisor, denominator / divisor)
        };
        Multiplier {
            numerator: saturate(numerator),
            denominator: saturate(denominator),
        }
    }

    /// Scales `amount`, truncating any fractional part toward zero.
    pub const fn apply(self, amount: u32) -> u32 {
        let scaled = amount as u64 * self.numerator as u64 / self.denominator as u64;
        saturate(scaled)
    }

    /// Approximate value for display purposes.
    pub fn as_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a == 0 { 1 } else { a }
}

const fn saturate(value: u64) -> u32 {
    if value > u32::MAX as u64 {
        u32::MAX
    } else {
        value as u32
    }
}

const N: Multiplier = Multiplier::NEUTRAL;
const Z: Multiplier = Multiplier::IMMUNE;
const H: Multiplier = Multiplier::HALF;
const D: Multiplier = Multiplier::DOUBLE;
const T: Multiplier = Multiplier::TRIPLE;

/// Attacker-major chart: `MULTIPLIER_CHART[attacker][defender]`.
///
/// Columns: None, Water, Ghost, Fire, Electric, Plant, Rock.
pub const MULTIPLIER_CHART: [[Multiplier; Affinity::COUNT]; Affinity::COUNT] = [
    /* None     */ [N, N, N, N, N, N, N],
    /* Water    */ [N, N, N, D, Z, H, N],
    /* Ghost    */ [N, H, H, N, D, N, N],
    /* Fire     */ [N, Z, D, N, N, D, Z],
    /* Electric */ [N, T, N, Z, N, N, N],
    /* Plant    */ [N, N, N, N, H, N, D],
    /* Rock     */ [N, N, D, N, N, N, N],
];
