use std::fmt;

use serde::{Deserialize, Serialize};

/// A video identifier together with the input line it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub id: String,
    pub source_line: String,
}

impl VideoRef {
    pub fn new(id: impl Into<String>, source_line: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_line: source_line.into(),
        }
    }
}

/// Why a video was rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    NotFound,
    Unavailable,
    TooShort,
    TooLong,
    Private,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::NotFound => "not found",
            RejectReason::Unavailable => "unavailable or restricted",
            RejectReason::TooShort => "shorter than the minimum duration",
            RejectReason::TooLong => "longer than the maximum duration",
            RejectReason::Private => "private",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictOutcome {
    Accepted,
    Rejected(RejectReason),
}

/// The classification assigned to one video reference after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub video: VideoRef,
    pub outcome: VerdictOutcome,
}

impl Verdict {
    pub fn accepted(video: VideoRef) -> Self {
        Self {
            video,
            outcome: VerdictOutcome::Accepted,
        }
    }

    pub fn rejected(video: VideoRef, reason: RejectReason) -> Self {
        Self {
            video,
            outcome: VerdictOutcome::Rejected(reason),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == VerdictOutcome::Accepted
    }
}

/// One of the authenticated user's playlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub title: String,
    pub item_count: u64,
}

/// Caller-supplied acceptable video length, in seconds.
///
/// An absent bound leaves that side unconstrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationBounds {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl DurationBounds {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// The first bound violated by `seconds`, if any.
    pub fn check(&self, seconds: u64) -> Option<RejectReason> {
        if let Some(min) = self.min {
            if seconds < min {
                return Some(RejectReason::TooShort);
            }
        }
        if let Some(max) = self.max {
            if seconds > max {
                return Some(RejectReason::TooLong);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_check_reports_first_violation() {
        let bounds = DurationBounds::new(Some(60), Some(600));
        assert_eq!(bounds.check(30), Some(RejectReason::TooShort));
        assert_eq!(bounds.check(601), Some(RejectReason::TooLong));
        assert_eq!(bounds.check(60), None);
        assert_eq!(bounds.check(600), None);
    }

    #[test]
    fn unset_bounds_accept_everything() {
        let bounds = DurationBounds::default();
        assert_eq!(bounds.check(0), None);
        assert_eq!(bounds.check(u64::MAX), None);
    }
}
