//! Core role graph types
//!
//! Time is a signed nanosecond counter since the Unix epoch. Hosts that carry
//! the legacy decimal-string rendering can parse it with `str::parse`.

use crate::error::{Result, RoleGraphError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Unique role (or actor) identifier
pub type RoleName = String;

/// Instant on the role graph's timeline, in nanoseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from a raw nanosecond counter
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Raw nanosecond counter
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Convert back to a UTC date-time
    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_nanos(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        // Out of range only past the year 2262; clamp rather than wrap.
        let nanos = dt.timestamp_nanos_opt().unwrap_or(if dt.timestamp() < 0 {
            i64::MIN
        } else {
            i64::MAX
        });
        Self(nanos)
    }
}

impl FromStr for Timestamp {
    type Err = RoleGraphError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|e| RoleGraphError::InvalidTimestamp(format!("'{}': {}", trimmed, e)))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        match rhs.num_nanoseconds() {
            Some(nanos) => Self(self.0.saturating_add(nanos)),
            None if rhs < Duration::zero() => Self(i64::MIN),
            None => Self(i64::MAX),
        }
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: Duration) -> Self::Output {
        match rhs.num_nanoseconds() {
            Some(nanos) => Self(self.0.saturating_sub(nanos)),
            None if rhs < Duration::zero() => Self(i64::MAX),
            None => Self(i64::MIN),
        }
    }
}

/// Validity of a single role assignment edge
///
/// Both bounds are exclusive: an edge bounded by `[from, to)` in the host's
/// notation is active only for instants strictly between `from` and `to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidityWindow {
    /// Edge added without any time bounds. Never active for a timed query.
    #[default]
    Untimed,

    /// Edge with optional bounds; `None` leaves that side open-ended
    Bounded {
        valid_from: Option<Timestamp>,
        valid_to: Option<Timestamp>,
    },
}

impl ValidityWindow {
    /// Window from optional bounds, as passed to `AddLink`
    ///
    /// No bounds at all yields [`ValidityWindow::Untimed`]. A lone lower bound
    /// leaves the upper side unbounded.
    pub fn from_bounds(valid_from: Option<Timestamp>, valid_to: Option<Timestamp>) -> Self {
        match (valid_from, valid_to) {
            (None, None) => Self::Untimed,
            (valid_from, valid_to) => Self::Bounded {
                valid_from,
                valid_to,
            },
        }
    }

    /// Window strictly between two instants
    pub fn between(valid_from: Timestamp, valid_to: Timestamp) -> Self {
        Self::from_bounds(Some(valid_from), Some(valid_to))
    }

    /// Window opening after `valid_from` and never closing
    pub fn starting(valid_from: Timestamp) -> Self {
        Self::from_bounds(Some(valid_from), None)
    }

    /// Window open since the beginning of time, closing at `valid_to`
    pub fn until(valid_to: Timestamp) -> Self {
        Self::from_bounds(None, Some(valid_to))
    }

    /// Whether an edge with this window may be followed at `at`
    pub fn is_active_at(&self, at: Timestamp) -> bool {
        match self {
            Self::Untimed => false,
            Self::Bounded {
                valid_from,
                valid_to,
            } => {
                valid_from.map_or(true, |from| from < at) && valid_to.map_or(true, |to| at < to)
            }
        }
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untimed => write!(f, "untimed"),
            Self::Bounded {
                valid_from,
                valid_to,
            } => {
                match valid_from {
                    Some(from) => write!(f, "({}", from)?,
                    None => write!(f, "(-inf")?,
                }
                match valid_to {
                    Some(to) => write!(f, ", {})", to),
                    None => write!(f, ", +inf)"),
                }
            }
        }
    }
}

/// Directed inheritance edge: `from` inherits `to` while `window` is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEdge {
    /// Inheriting role or actor
    pub from: RoleName,

    /// Inherited role
    pub to: RoleName,

    /// Validity of this particular assignment
    pub window: ValidityWindow,
}

impl TimeEdge {
    /// Create a new edge
    pub fn new(from: impl Into<RoleName>, to: impl Into<RoleName>, window: ValidityWindow) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            window,
        }
    }

    /// Whether this edge may be followed at `at`
    pub fn is_active_at(&self, at: Timestamp) -> bool {
        self.window.is_active_at(at)
    }
}

impl fmt::Display for TimeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} < {} {}", self.from, self.to, self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(n: i64) -> Timestamp {
        Timestamp::from_nanos(n)
    }

    #[test]
    fn test_timestamp_parsing() {
        let t: Timestamp = "1508503308708903372".parse().unwrap();
        assert_eq!(t.as_nanos(), 1_508_503_308_708_903_372);
        assert_eq!(t.to_string(), "1508503308708903372");

        let padded: Timestamp = " 05 ".parse().unwrap();
        assert_eq!(padded, ts(5));
    }

    #[test]
    fn test_timestamp_parsing_errors() {
        assert!(matches!(
            "".parse::<Timestamp>(),
            Err(RoleGraphError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            "noon".parse::<Timestamp>(),
            Err(RoleGraphError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            "99999999999999999999".parse::<Timestamp>(),
            Err(RoleGraphError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_timestamp_arithmetic_saturates() {
        assert_eq!(ts(10) + Duration::nanoseconds(5), ts(15));
        assert_eq!(ts(10) - Duration::nanoseconds(5), ts(5));
        assert_eq!(ts(i64::MAX) + Duration::hours(1), ts(i64::MAX));
        assert_eq!(ts(i64::MIN) - Duration::hours(1), ts(i64::MIN));
    }

    #[test]
    fn test_timestamp_datetime_conversion() {
        let now = Utc::now();
        let t = Timestamp::from(now);
        assert_eq!(t.to_datetime(), now);
        assert!(Timestamp::now() >= t);
    }

    #[test]
    fn test_window_from_bounds() {
        assert_eq!(ValidityWindow::from_bounds(None, None), ValidityWindow::Untimed);
        assert_eq!(
            ValidityWindow::starting(ts(3)),
            ValidityWindow::Bounded {
                valid_from: Some(ts(3)),
                valid_to: None
            }
        );
    }

    #[test]
    fn test_window_is_exclusive_at_both_ends() {
        let window = ValidityWindow::between(ts(10), ts(20));
        assert!(!window.is_active_at(ts(10)));
        assert!(window.is_active_at(ts(11)));
        assert!(window.is_active_at(ts(19)));
        assert!(!window.is_active_at(ts(20)));
    }

    #[test]
    fn test_window_open_ends() {
        let starting = ValidityWindow::starting(ts(10));
        assert!(!starting.is_active_at(ts(10)));
        assert!(starting.is_active_at(ts(i64::MAX)));

        let until = ValidityWindow::until(ts(10));
        assert!(until.is_active_at(ts(i64::MIN)));
        assert!(!until.is_active_at(ts(10)));
    }

    #[test]
    fn test_untimed_and_inverted_windows_never_match() {
        let untimed = ValidityWindow::Untimed;
        let inverted = ValidityWindow::between(ts(20), ts(10));
        for t in [i64::MIN, 0, 10, 15, 20, i64::MAX] {
            assert!(!untimed.is_active_at(ts(t)));
            assert!(!inverted.is_active_at(ts(t)));
        }
    }

    #[test]
    fn test_edge_display() {
        let edge = TimeEdge::new("alpha", "bravo", ValidityWindow::starting(ts(5)));
        assert_eq!(edge.to_string(), "alpha < bravo (5, +inf)");
        assert_eq!(
            TimeEdge::new("a", "b", ValidityWindow::Untimed).to_string(),
            "a < b untimed"
        );
    }
}
