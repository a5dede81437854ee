//! Participant lifecycle states.

use std::fmt;

/// Where a project is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Status {
    /// Accruing material, not yet trading.
    #[default]
    Passive,
    /// Trading every tick.
    Active,
    /// One tick left: final business action, then wrap-up if needed.
    LifespanAlert,
    /// Target met without fallback at the end.
    Finished,
    /// Target only met through the wrap-up fallback.
    Incomplete,
}

impl Status {
    /// `true` for states that never change again.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Finished | Status::Incomplete)
    }

    /// Human-readable label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Passive       => "passive",
            Status::Active        => "active",
            Status::LifespanAlert => "lifespan alert",
            Status::Finished      => "finished",
            Status::Incomplete    => "incomplete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
