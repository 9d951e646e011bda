use log::warn;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(not(feature = "seq-cst"))]
const ORDERING: Ordering = Ordering::AcqRel;
#[cfg(feature = "seq-cst")]
const ORDERING: Ordering = Ordering::SeqCst;

/// the counter behind `next()` and the exported C symbols
/// only ever touched through `IdentifierGenerator::next`
static GLOBAL: IdentifierGenerator = IdentifierGenerator::new();

/// hands out strictly increasing `u64` identifiers
///
/// every call is a single atomic fetch-and-increment, so any number of
/// threads can share one generator without further synchronisation.
/// after `u64::MAX` the counter wraps around to 0.
#[derive(Debug)]
pub struct IdentifierGenerator {
    counter: AtomicU64,
}

impl IdentifierGenerator {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// the first call to `next` returns `first`
    pub const fn starting_at(first: u64) -> Self {
        Self {
            counter: AtomicU64::new(first),
        }
    }

    /// return the current value and advance the counter by one
    #[inline]
    pub fn next(&self) -> u64 {
        let id = self.counter.fetch_add(1, ORDERING);

        if id == u64::MAX {
            warn!("identifier counter exhausted, the next identifier wraps to 0");
        }

        id
    }
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// next identifier from the process-wide generator
#[inline]
pub fn next() -> u64 {
    GLOBAL.next()
}
