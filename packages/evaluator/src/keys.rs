//! Identity key generation
//!
//! Generated keys are a prefixed base-36 counter. A fresh key on every
//! resolution forces the UI layer to re-render; page authors who want a
//! subtree to stay mounted pin their own `key` attribute instead.

use std::sync::atomic::{AtomicU32, Ordering};

/// Prefix that separates generated keys from author-supplied ones
pub const KEY_PREFIX: &str = "A-";

/// The counter wraps back to zero here to keep keys short
pub const KEY_WRAP: u32 = 2_000_000_000;

#[derive(Debug, Default)]
pub struct KeyGenerator {
    next: AtomicU32,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `start` (taken modulo the wrap bound)
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start % KEY_WRAP),
        }
    }

    pub fn next_key(&self) -> String {
        let id = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(if n + 1 >= KEY_WRAP { 0 } else { n + 1 })
            })
            .unwrap_or_else(|n| n);
        format!("{KEY_PREFIX}{}", to_base36(id))
    }
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}
