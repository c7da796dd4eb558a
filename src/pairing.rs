//! Simulated QR pairing for the "link a device" screen. Purely local: a
//! session token with a countdown, refreshed when it expires. No scanning or
//! authentication actually happens.

use std::time::{Duration, Instant};
use tracing::debug;

/// Alphabet for session tokens (no 0/O/1/I to avoid confusion)
const TOKEN_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";
const TOKEN_LENGTH: usize = 16;
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStatus {
    Active,
    Expired,
}

pub struct PairingSession {
    token: String,
    issued_at: Instant,
    ttl: Duration,
}

impl Default for PairingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingSession {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            token: generate_token(),
            issued_at: Instant::now(),
            ttl,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The string a companion app would scan, unique per token.
    pub fn qr_payload(&self) -> String {
        format!("chatfront-session:{}", self.token)
    }

    pub fn status(&self) -> PairingStatus {
        if self.is_expired() {
            PairingStatus::Expired
        } else {
            PairingStatus::Active
        }
    }

    pub fn is_expired(&self) -> bool {
        self.issued_at.elapsed() >= self.ttl
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.ttl.saturating_sub(self.issued_at.elapsed()).as_secs()
    }

    /// Issue a fresh token and restart the countdown.
    pub fn refresh(&mut self) {
        debug!("refreshing pairing token");
        self.token = generate_token();
        self.issued_at = Instant::now();
    }
}

fn generate_token() -> String {
    let mut token = String::with_capacity(TOKEN_LENGTH);
    for _ in 0..TOKEN_LENGTH {
        let idx = fastrand::usize(0..TOKEN_ALPHABET.len());
        token.push(TOKEN_ALPHABET[idx] as char);
    }
    token
}

#[cfg(test)]
mod tests;
