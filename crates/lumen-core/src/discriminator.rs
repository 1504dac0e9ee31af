//! Commissioning discriminator generation.
//!
//! Emulated devices advertise a 12-bit discriminator. Generated values are
//! drawn from `0x3E8..=0xFFF` so they stay clear of the low values commonly
//! used by example firmware. Seeding with the host name gives each machine
//! a stable value across runs.

use std::fs;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use lumen_types::protocol::{DISCRIMINATOR_MAX, DISCRIMINATOR_MIN};

use crate::error::{Error, Result};

const HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";

/// A discriminator in `0x3E8..=0xFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Discriminator(u16);

impl Discriminator {
    /// Wrap a raw value, rejecting anything outside of the window.
    pub fn new(value: u16) -> Result<Self> {
        if (DISCRIMINATOR_MIN..=DISCRIMINATOR_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidDiscriminator(value))
        }
    }

    /// The raw value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Derive a discriminator from a seed string.
    ///
    /// The same seed always yields the same discriminator.
    ///
    /// ```
    /// use lumen_core::Discriminator;
    ///
    /// let a = Discriminator::from_seed("lab-host-01");
    /// let b = Discriminator::from_seed("lab-host-01");
    /// assert_eq!(a, b);
    /// ```
    pub fn from_seed(seed: &str) -> Self {
        // ChaCha8 and a plain modulo keep the mapping fixed across rand
        // releases; the bias over a 64-bit draw is negligible.
        let mut rng = ChaCha8Rng::seed_from_u64(fnv1a(seed.as_bytes()));
        let span = u64::from(DISCRIMINATOR_MAX - DISCRIMINATOR_MIN) + 1;
        let offset = rng.next_u64() % span;
        // offset < span <= u16::MAX, and MIN + offset <= MAX.
        Self(DISCRIMINATOR_MIN + offset as u16)
    }

    /// Draw a discriminator from the thread RNG.
    pub fn random() -> Self {
        Self(rand::rng().random_range(DISCRIMINATOR_MIN..=DISCRIMINATOR_MAX))
    }

    /// Derive a discriminator from the host name, or draw one at random when
    /// the host name is unavailable.
    pub fn for_host() -> Self {
        match host_name() {
            Some(name) => {
                debug!("Seeding discriminator from host name '{}'", name);
                Self::from_seed(&name)
            }
            None => {
                debug!("Host name unavailable, using random discriminator");
                Self::random()
            }
        }
    }
}

impl TryFrom<u16> for Discriminator {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Discriminator> for u16 {
    fn from(value: Discriminator) -> Self {
        value.0
    }
}

impl std::fmt::Display for Discriminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn host_name() -> Option<String> {
    std::env::var("HOSTNAME")
        .ok()
        .or_else(|| fs::read_to_string(HOSTNAME_PATH).ok())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

// 64-bit FNV-1a; stable across platforms and Rust releases, unlike
// `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}
