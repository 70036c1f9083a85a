//! String-keyed deterministic generators for round shuffles.
//!
//! Two algorithms are provided:
//!
//! - [`Arc4Rng`]: bit-exact reproduction of the `seedrandom` default
//!   generator (RC4 keystream, first 256 bytes dropped, 52-bit doubles).
//!   Links created by the browser app shuffle identically here.
//! - [`ChaChaUnit`]: ChaCha20 keyed from the string. Deterministic per key,
//!   but its permutations differ from the browser app's.
//!
//! ```
//! use cardroom_engine::rng::{Arc4Rng, UnitRandom};
//!
//! let mut rng = Arc4Rng::from_key("hello.");
//! assert_eq!(rng.next_unit(), 0.9282578795792454);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of uniformly distributed doubles in `[0, 1)`.
pub trait UnitRandom {
    fn next_unit(&mut self) -> f64;
}

const KEYSTREAM_DROP: usize = 256;
const UNIT_CHUNKS: usize = 6;
const SIGNIFICANCE: u64 = 1 << 52;
const OVERFLOW: u64 = 1 << 53;

/// ARC4 keystream generator compatible with `seedrandom(key)`.
#[derive(Clone)]
pub struct Arc4Rng {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl fmt::Debug for Arc4Rng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arc4Rng")
            .field("i", &self.i)
            .field("j", &self.j)
            .finish_non_exhaustive()
    }
}

impl Arc4Rng {
    pub fn from_key(key: &str) -> Self {
        let key = mix_key(key);
        let mut s = [0u8; 256];
        for (idx, slot) in s.iter_mut().enumerate() {
            *slot = idx as u8;
        }
        let mut j: u8 = 0;
        for i in 0..s.len() {
            let t = s[i];
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(t);
            s[i] = s[j as usize];
            s[j as usize] = t;
        }
        let mut rng = Self { s, i: 0, j: 0 };
        for _ in 0..KEYSTREAM_DROP {
            rng.next_byte();
        }
        rng
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[self.i as usize];
        self.j = self.j.wrapping_add(t);
        self.s[self.i as usize] = self.s[self.j as usize];
        self.s[self.j as usize] = t;
        self.s[self.s[self.i as usize].wrapping_add(t) as usize]
    }

    /// Next `count` keystream bytes as one big-endian number.
    fn next_bytes(&mut self, count: usize) -> u64 {
        (0..count).fold(0u64, |acc, _| (acc << 8) | u64::from(self.next_byte()))
    }
}

impl UnitRandom for Arc4Rng {
    fn next_unit(&mut self) -> f64 {
        // numerator n over denominator 2^exp, widened until 52 bits are significant
        let mut n = self.next_bytes(UNIT_CHUNKS);
        let mut exp: i32 = 8 * UNIT_CHUNKS as i32;
        let mut x: u64 = 0;
        while n < SIGNIFICANCE {
            n = (n + x) << 8;
            exp += 8;
            x = self.next_bytes(1);
        }
        while n >= OVERFLOW {
            n >>= 1;
            exp -= 1;
            x >>= 1;
        }
        (n + x) as f64 / 2f64.powi(exp)
    }
}

impl RngCore for Arc4Rng {
    fn next_u32(&mut self) -> u32 {
        self.next_bytes(4) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_bytes(8)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = self.next_byte();
        }
    }
}

/// seedrandom's key schedule input: UTF-16 units smeared into at most 256 bytes.
fn mix_key(key: &str) -> Vec<u8> {
    let mut mixed: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;
    for (j, unit) in key.encode_utf16().enumerate() {
        let slot = j & 0xff;
        smear ^= u32::from(mixed.get(slot).copied().unwrap_or(0)) * 19;
        let value = ((smear + u32::from(unit)) & 0xff) as u8;
        if slot < mixed.len() {
            mixed[slot] = value;
        } else {
            mixed.push(value);
        }
    }
    if mixed.is_empty() {
        mixed.push(0);
    }
    mixed
}

/// ChaCha20 stream keyed by a string.
#[derive(Debug, Clone)]
pub struct ChaChaUnit(ChaCha20Rng);

impl ChaChaUnit {
    pub fn from_key(key: &str) -> Self {
        ChaChaUnit(ChaCha20Rng::from_seed(fold_key(key)))
    }
}

impl UnitRandom for ChaChaUnit {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

fn fold_key(key: &str) -> [u8; 32] {
    let mut seed = [0u8; 32];
    for (idx, byte) in key.bytes().enumerate() {
        let slot = &mut seed[idx % 32];
        *slot = slot.rotate_left(3) ^ byte;
    }
    // keys that fold to the same bytes still differ by length
    for (slot, len_byte) in seed.iter_mut().zip((key.len() as u64).to_le_bytes()) {
        *slot ^= len_byte;
    }
    seed
}

/// Generator used to derive round shuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleAlgorithm {
    /// seedrandom-compatible ARC4; interoperates with links from the web app.
    #[default]
    Arc4,
    /// ChaCha20 keyed by the round key.
    ChaCha20,
}

impl ShuffleAlgorithm {
    pub fn generator(self, key: &str) -> Box<dyn UnitRandom> {
        match self {
            ShuffleAlgorithm::Arc4 => Box::new(Arc4Rng::from_key(key)),
            ShuffleAlgorithm::ChaCha20 => Box::new(ChaChaUnit::from_key(key)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShuffleAlgorithm::Arc4 => "arc4",
            ShuffleAlgorithm::ChaCha20 => "chacha20",
        }
    }
}

impl fmt::Display for ShuffleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShuffleAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arc4" | "seedrandom" => Ok(ShuffleAlgorithm::Arc4),
            "chacha20" | "chacha" => Ok(ShuffleAlgorithm::ChaCha20),
            other => Err(format!("unknown shuffle algorithm: {}", other)),
        }
    }
}

const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base-36 room seed.
pub fn generate_seed(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| SEED_ALPHABET[rng.random_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}
