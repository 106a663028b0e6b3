use serde::Serialize;

/// Enter flow. Monotonic: never goes back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EnterPhase {
    /// Circle floating, waiting for a click or Enter.
    #[default]
    Idle,
    /// Enter timeline running; the float is frozen.
    Animating,
    /// Cards revealed; the idle loop is halted for good.
    Transitioned,
}

/// Card flow. Cycles Browsing → Inserting → Inserted → Returning → Browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CardPhase {
    #[default]
    Browsing,
    /// Insert timeline running; back is not accepted yet.
    Inserting,
    Inserted,
    Returning,
}

/// The single owner of landing phase state. Every transition is a guarded
/// method that reports whether it was accepted; rejected transitions leave
/// the state untouched.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PhaseMachine {
    enter: EnterPhase,
    card: CardPhase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&self) -> EnterPhase {
        self.enter
    }

    pub fn card(&self) -> CardPhase {
        self.card
    }

    // -- Enter flow --

    /// Idle → Animating.
    pub fn begin_enter(&mut self) -> bool {
        if self.enter != EnterPhase::Idle {
            return false;
        }
        self.enter = EnterPhase::Animating;
        true
    }

    /// Animating → Transitioned. Accepted exactly once.
    pub fn complete_enter(&mut self) -> bool {
        if self.enter != EnterPhase::Animating {
            return false;
        }
        self.enter = EnterPhase::Transitioned;
        true
    }

    // -- Card flow --

    /// Browsing → Inserting.
    pub fn begin_insert(&mut self) -> bool {
        if self.card != CardPhase::Browsing {
            return false;
        }
        self.card = CardPhase::Inserting;
        true
    }

    /// Inserting → Inserted, once the card has settled in the slot.
    pub fn complete_insert(&mut self) -> bool {
        if self.card != CardPhase::Inserting {
            return false;
        }
        self.card = CardPhase::Inserted;
        true
    }

    /// Inserted → Returning.
    pub fn begin_return(&mut self) -> bool {
        if self.card != CardPhase::Inserted {
            return false;
        }
        self.card = CardPhase::Returning;
        true
    }

    /// Returning → Browsing.
    pub fn finish_return(&mut self) -> bool {
        if self.card != CardPhase::Returning {
            return false;
        }
        self.card = CardPhase::Browsing;
        true
    }

    // -- Derived flags --

    pub fn is_animating(&self) -> bool {
        self.enter != EnterPhase::Idle
    }

    pub fn has_transitioned(&self) -> bool {
        self.enter == EnterPhase::Transitioned
    }

    pub fn card_inserted(&self) -> bool {
        self.card != CardPhase::Browsing
    }

    pub fn is_going_back(&self) -> bool {
        self.card == CardPhase::Returning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_flow_is_one_shot() {
        let mut phase = PhaseMachine::new();
        assert!(!phase.complete_enter());
        assert!(phase.begin_enter());
        assert!(!phase.begin_enter());
        assert!(phase.is_animating());
        assert!(!phase.has_transitioned());

        assert!(phase.complete_enter());
        assert!(!phase.complete_enter());
        assert!(!phase.begin_enter());
        assert!(phase.has_transitioned());
        assert!(phase.is_animating());
    }

    #[test]
    fn card_flow_cycles() {
        let mut phase = PhaseMachine::new();
        assert!(!phase.begin_return());
        assert!(phase.begin_insert());
        assert!(!phase.begin_insert());
        assert!(phase.card_inserted());
        assert!(!phase.begin_return());

        assert!(phase.complete_insert());
        assert!(!phase.complete_insert());
        assert!(phase.card_inserted());
        assert!(phase.begin_return());
        assert!(!phase.begin_return());
        assert!(!phase.begin_insert());
        assert!(phase.is_going_back());
        assert!(phase.card_inserted());

        assert!(phase.finish_return());
        assert!(!phase.card_inserted());
        assert!(!phase.is_going_back());
        assert!(phase.begin_insert());
    }

    #[test]
    fn flows_are_independent() {
        let mut phase = PhaseMachine::new();
        assert!(phase.begin_insert());
        assert!(phase.begin_enter());
        assert_eq!(phase.enter(), EnterPhase::Animating);
        assert_eq!(phase.card(), CardPhase::Inserting);
    }
}
