use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Reads `SystemTime::now()` on every call.
///
/// Wall-clock time can step backwards (NTP adjustments, manual changes). The
/// generator handles that by refusing to issue IDs until the clock catches up
/// with the last issued timestamp.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        u64::try_from(millis).unwrap_or(u64::MAX)
    }
}
