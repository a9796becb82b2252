//! Guard against applying the result of a superseded request.

use std::cell::Cell;
use std::rc::Rc;

/// Identifies one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter shared by one view.
///
/// Every new request takes a ticket with [`Generation::begin`]; a response
/// may only be applied while its ticket is still the latest one.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn begin(&self) -> Ticket {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.get() == ticket.0
    }
}
