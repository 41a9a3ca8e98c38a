//! # Identifier Generation
//!
//! New entries get an opaque string id made of two base-36 parts:
//!
//! ```text
//! lq2x7k0a  9f3h1c2k5d7e
//! ^^^^^^^^  ^^^^^^^^^^^^
//! millis    random
//! ```
//!
//! The time part never decreases within a generator's lifetime (a clock step
//! backwards reuses the last value), and the random part comes from a v4 UUID.
//! No registry of issued ids is kept: uniqueness is probabilistic, which is
//! what lets ids be minted without persisting a counter.

use crate::model::EntryId;
use chrono::Utc;
use uuid::Uuid;

/// Source of ids for new entries.
pub trait IdGenerator {
    fn next_id(&mut self) -> EntryId;
}

/// Production generator: monotonic millis + random entropy.
#[derive(Debug, Default)]
pub struct TimeRandomIds {
    last_millis: u64,
}

impl TimeRandomIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_millis = self.last_millis.max(now);
        self.last_millis
    }
}

impl IdGenerator for TimeRandomIds {
    fn next_id(&mut self) -> EntryId {
        let millis = self.tick();
        let entropy = Uuid::new_v4().as_u128() as u64;
        EntryId::new(format!("{}{}", to_base36(millis), to_base36(entropy)))
    }
}

/// Deterministic `prefix-N` ids, for tests and fixtures.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("entry")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        let id = EntryId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub(crate) fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
