//! ==============================================================================
//! submit.rs - per-form submission lifecycle
//! ==============================================================================
//!
//! each form owns one `Phase` value. it flips to `InFlight` when a submit
//! handler fires and back to `Idle` once the request resolves, success or
//! failure. forms never share this state, so one tab's request can never
//! re-enable (or disable) another tab's button.
//!
//! ==============================================================================

/// where a form's current submission attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InFlight,
}

impl Phase {
    pub fn begin(self) -> Phase {
        Phase::InFlight
    }

    pub fn finish(self) -> Phase {
        Phase::Idle
    }

    pub fn is_busy(self) -> bool {
        self == Phase::InFlight
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_starts_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
        assert!(!Phase::default().is_busy());
    }

    #[test]
    fn test_phase_lifecycle() {
        let phase = Phase::default();
        let in_flight = phase.begin();
        assert!(in_flight.is_busy());
        // finish applies on both success and failure paths
        assert_eq!(in_flight.finish(), Phase::Idle);
        assert!(!in_flight.finish().is_busy());
    }
}
