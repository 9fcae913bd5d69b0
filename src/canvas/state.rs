/// Session lifecycle. Replaces the original scattering of independent
/// mutable flags (drawing-active, request-outstanding) with one explicit
/// state object and a transition contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Stroking,
    Evaluating,
}

impl SessionPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Evaluating)
    }
}

pub fn can_transition(from: SessionPhase, to: SessionPhase) -> bool {
    matches!(
        (from, to),
        (SessionPhase::Idle, SessionPhase::Stroking)
            | (SessionPhase::Stroking, SessionPhase::Idle)
            | (SessionPhase::Idle, SessionPhase::Evaluating)
            | (SessionPhase::Evaluating, SessionPhase::Idle)
    ) || from == to
}

#[cfg(test)]
mod tests {
    use super::{can_transition, SessionPhase};

    #[test]
    fn stroking_and_evaluating_are_mutually_exclusive() {
        let cases = [
            (SessionPhase::Stroking, SessionPhase::Evaluating),
            (SessionPhase::Evaluating, SessionPhase::Stroking),
        ];
        for (from, to) in cases {
            assert!(
                !can_transition(from, to),
                "unexpected transition {from:?} -> {to:?}"
            );
        }
    }

    #[test]
    fn every_phase_returns_to_idle() {
        for phase in [SessionPhase::Stroking, SessionPhase::Evaluating] {
            assert!(can_transition(phase, SessionPhase::Idle));
        }
    }

    #[test]
    fn only_evaluating_counts_as_busy() {
        assert!(SessionPhase::Evaluating.is_busy());
        assert!(!SessionPhase::Idle.is_busy());
        assert!(!SessionPhase::Stroking.is_busy());
    }
}
