//! Observer hooks for hosts embedding the editor.
//!
//! Stores are reached only through the engine, so the engine is the single
//! place change notifications fan out from. Hosts register observers to keep
//! their UI (entry lists, settings forms) in sync without polling.

use serde::{Deserialize, Serialize};

use crate::core::{EntryId, Viewport};
use crate::interaction::DragState;

/// Read-only engine snapshot passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorContext {
    pub viewport: Viewport,
    pub entry_count: usize,
    pub drag: DragState,
    pub settings_revision: u64,
    pub entries_revision: u64,
}

/// Event stream emitted by the engine, in mutation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorEvent {
    SettingsUpdated,
    EntryAdded { id: EntryId },
    EntryUpdated { id: EntryId },
    EntryRemoved { id: EntryId },
    DragStarted { id: EntryId },
    DragEnded { id: EntryId },
    Rendered,
}

/// Hook interface for bounded host logic.
///
/// Observers see events and a read-only context; they cannot mutate engine
/// internals from the callback.
pub trait EditorObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: EditorEvent, context: EditorContext);
}

/// Ordered observer collection dispatched to synchronously after mutations.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn EditorObserver>>,
}

impl ObserverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn EditorObserver>) {
        self.observers.push(observer);
    }

    /// Removes the observer with the given id. Silent no-op when absent.
    pub fn unregister(&mut self, id: &str) {
        self.observers.retain(|observer| observer.id() != id);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn dispatch(&mut self, event: EditorEvent, context: EditorContext) {
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorContext, EditorEvent, EditorObserver, ObserverRegistry};
    use crate::core::{EntryId, Viewport};
    use crate::interaction::DragState;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        seen: Rc<RefCell<Vec<EditorEvent>>>,
    }

    impl EditorObserver for Recorder {
        fn id(&self) -> &str {
            "recorder"
        }

        fn on_event(&mut self, event: EditorEvent, _context: EditorContext) {
            self.seen.borrow_mut().push(event);
        }
    }

    fn context() -> EditorContext {
        EditorContext {
            viewport: Viewport::square(100),
            entry_count: 0,
            drag: DragState::Idle,
            settings_revision: 0,
            entries_revision: 0,
        }
    }

    #[test]
    fn dispatch_reaches_registered_observers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.register(Box::new(Recorder { seen: seen.clone() }));

        registry.dispatch(EditorEvent::EntryAdded { id: EntryId::new(1) }, context());
        registry.dispatch(EditorEvent::Rendered, context());

        assert_eq!(
            *seen.borrow(),
            vec![
                EditorEvent::EntryAdded { id: EntryId::new(1) },
                EditorEvent::Rendered
            ]
        );
    }

    #[test]
    fn unregister_by_id() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.register(Box::new(Recorder { seen: seen.clone() }));
        registry.unregister("recorder");

        registry.dispatch(EditorEvent::Rendered, context());
        assert!(seen.borrow().is_empty());
        assert!(registry.is_empty());
    }
}
