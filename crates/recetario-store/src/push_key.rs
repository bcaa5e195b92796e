//! Store-assigned child key generation.
//!
//! Keys are generated client-side, the way the Realtime Database SDKs
//! do it: 20 characters over a 64-symbol alphabet whose symbols sort by
//! ASCII value. The first 8 characters encode the creation timestamp in
//! milliseconds, so keys sort lexicographically in creation order; the
//! remaining 12 are random. Keys minted within the same millisecond
//! increment the previous random tail instead of redrawing it, which
//! keeps creation order even at sub-millisecond rates.

use parking_lot::Mutex;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// 64 symbols in ascending ASCII order, so base-64 encoded timestamps
/// compare the same as the timestamps themselves.
const ALPHABET: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const TIMESTAMP_CHARS: usize = 8;
const RANDOM_CHARS: usize = 12;

/// Total length of a generated key.
pub const KEY_LEN: usize = TIMESTAMP_CHARS + RANDOM_CHARS;

struct GeneratorState {
    last_millis: u64,
    last_random: [usize; RANDOM_CHARS],
}

static STATE: Mutex<GeneratorState> = Mutex::new(GeneratorState {
    last_millis: 0,
    last_random: [0; RANDOM_CHARS],
});

/// Generates a fresh child key.
///
/// Keys are unique within the process and sort in creation order.
///
/// # Example
///
/// ```
/// use recetario_store::push_key;
///
/// let a = push_key();
/// let b = push_key();
/// assert_eq!(a.len(), 20);
/// assert_ne!(a, b);
/// assert!(a < b);
/// ```
#[must_use]
pub fn push_key() -> String {
    let mut state = STATE.lock();

    // Clamp to the last used timestamp so keys stay ordered even if
    // the wall clock steps backwards.
    let millis = now_millis().max(state.last_millis);

    if millis == state.last_millis {
        increment(&mut state.last_random);
    } else {
        state.last_millis = millis;
        let mut rng = rand::thread_rng();
        for slot in &mut state.last_random {
            *slot = rng.gen_range(0..ALPHABET.len());
        }
    }

    let mut key = String::with_capacity(KEY_LEN);
    let mut ts = millis;
    let mut ts_chars = [0usize; TIMESTAMP_CHARS];
    for slot in ts_chars.iter_mut().rev() {
        *slot = (ts % ALPHABET.len() as u64) as usize;
        ts /= ALPHABET.len() as u64;
    }
    for idx in ts_chars {
        key.push(ALPHABET[idx] as char);
    }
    for idx in state.last_random {
        key.push(ALPHABET[idx] as char);
    }
    key
}

/// Increments the random tail as a base-64 number, rightmost digit
/// first. Wrapping all 12 digits would require 64^12 keys in one
/// millisecond.
fn increment(random: &mut [usize; RANDOM_CHARS]) {
    for slot in random.iter_mut().rev() {
        if *slot + 1 < ALPHABET.len() {
            *slot += 1;
            return;
        }
        *slot = 0;
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
