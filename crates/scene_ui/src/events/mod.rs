//! Event system following Game Engine Architecture Ch 16.8
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Queued delivery, in send order

use std::collections::HashMap;

use crate::scene::NodeId;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A widget received focus
    FocusGained,
    /// A widget lost focus
    FocusLost,
    /// Pointer moved while over a node
    MouseMoved,
    /// Pointer entered a node's bounds
    MouseOver,
    /// Pointer left a node's bounds
    MouseOut,
}

/// Variant for type-safe event arguments
/// Uses key-value pairs to avoid order dependency problems
#[derive(Debug, Clone)]
pub enum EventArg {
    /// Scene node the event concerns
    Node(NodeId),
    /// Position coordinates
    Position(f32, f32),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Timestamp when event was created
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type and timestamp
    pub fn new(event_type: EventType, timestamp: f64) -> Self {
        Self {
            event_type,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Create an event about a single node
    pub fn for_node(event_type: EventType, timestamp: f64, node: NodeId) -> Self {
        Self::new(event_type, timestamp).with_arg("node", EventArg::Node(node))
    }

    /// Add an argument to the event (builder pattern)
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get node argument if present
    pub fn get_node(&self) -> Option<NodeId> {
        if let Some(EventArg::Node(node)) = self.get_arg("node") {
            Some(*node)
        } else {
            None
        }
    }

    /// Get position argument if present
    pub fn get_position(&self) -> Option<(f32, f32)> {
        if let Some(EventArg::Position(x, y)) = self.get_arg("position") {
            Some((*x, *y))
        } else {
            None
        }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    queue: Vec<Event>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
    current_time: f64,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            handlers: HashMap::new(),
            current_time: 0.0,
        }
    }

    /// Update current time
    pub fn update_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// Current time, used to stamp events raised outside input handling
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Queue an event for the next dispatch
    pub fn send(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Events waiting for dispatch, oldest first
    pub fn pending(&self) -> &[Event] {
        &self.queue
    }

    /// Dispatch all pending events in send order
    pub fn dispatch(&mut self) {
        let queued = std::mem::take(&mut self.queue);
        for event in queued {
            self.dispatch_event(&event);
        }
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Event) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestHandler {
        received: Rc<RefCell<Vec<EventType>>>,
        consume: bool,
    }

    impl EventHandler for TestHandler {
        fn on_event(&mut self, event: &Event) -> bool {
            self.received.borrow_mut().push(event.event_type);
            self.consume
        }
    }

    #[test]
    fn test_dispatch_in_send_order() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut system = EventSystem::new();
        for event_type in [EventType::FocusLost, EventType::FocusGained] {
            system.register_handler(
                event_type,
                Box::new(TestHandler { received: received.clone(), consume: false }),
            );
        }

        system.send(Event::new(EventType::FocusLost, 0.0));
        system.send(Event::new(EventType::FocusGained, 0.0));
        assert_eq!(system.pending().len(), 2);
        system.dispatch();

        assert!(system.pending().is_empty());
        assert_eq!(*received.borrow(), vec![EventType::FocusLost, EventType::FocusGained]);
    }

    #[test]
    fn test_event_consumption() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut system = EventSystem::new();
        system.register_handler(
            EventType::MouseMoved,
            Box::new(TestHandler { received: first.clone(), consume: true }),
        );
        system.register_handler(
            EventType::MouseMoved,
            Box::new(TestHandler { received: second.clone(), consume: false }),
        );

        system.send(Event::new(EventType::MouseMoved, 0.0));
        system.dispatch();

        assert_eq!(first.borrow().len(), 1);
        assert!(second.borrow().is_empty());
    }

    #[test]
    fn test_node_argument() {
        let mut ids: SlotMap<NodeId, ()> = SlotMap::with_key();
        let id = ids.insert(());
        let event = Event::for_node(EventType::MouseOver, 3.0, id)
            .with_arg("position", EventArg::Position(1.0, 2.0));

        assert_eq!(event.get_node(), Some(id));
        assert_eq!(event.get_position(), Some((1.0, 2.0)));
    }
}
