//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for state transitions.
//
// States queue transitions here while they run. The state machine
// applies the queue at the tick boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Transition;

//=== Transition Queue ====================================================

/// FIFO of transitions requested during the current tick.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<Transition>,
}

impl TransitionQueue {
    /// Creates a new empty transition queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition to be applied at the next tick boundary.
    pub fn push(&mut self, transition: Transition) {
        self.queue.push(transition);
    }

    /// Takes all transitions from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
