//! Fixed tables and defaults shared across crates.

use crate::types::{Clock, Slot};

/// Standard class periods, 1-indexed by convention (slot 1 is `PERIOD_TABLE[0]`).
pub const PERIOD_TABLE: [Slot; 5] = [
    Slot::new(Clock::new(9, 30), Clock::new(11, 0)),
    Slot::new(Clock::new(11, 10), Clock::new(12, 40)),
    Slot::new(Clock::new(13, 30), Clock::new(15, 0)),
    Slot::new(Clock::new(15, 10), Clock::new(16, 40)),
    Slot::new(Clock::new(16, 50), Clock::new(18, 20)),
];

pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_PRODID: &str =
    const_str::concat!("-//termcal//termcal ", env!("CARGO_PKG_VERSION"), "//EN");
