use log::trace;

use crate::control::{EventPropagation, MapEvent, MapEventHandler};
use crate::session::Session;

/// Gives map events to the registered handlers in the order they were added, until one of them
/// stops the propagation.
#[derive(Default)]
pub struct EventProcessor {
    handlers: Vec<Box<dyn MapEventHandler>>,
}

impl EventProcessor {
    /// Adds a handler to the end of the handler list.
    pub fn add_handler(&mut self, handler: impl MapEventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Processes the event. Returns [`EventPropagation::Stop`] if some handler consumed it.
    pub fn handle(&self, event: &MapEvent, session: &mut Session) -> EventPropagation {
        for (index, handler) in self.handlers.iter().enumerate() {
            if handler.handle(event, session) == EventPropagation::Stop {
                trace!("Event {event:?} stopped by handler {index}");
                return EventPropagation::Stop;
            }
        }

        EventPropagation::Propagate
    }
}
