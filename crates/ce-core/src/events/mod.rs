//! Notifications about the dataset and the resolved selection

use std::any::{Any, TypeId};
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

type HandlerMap = AHashMap<TypeId, Vec<Box<dyn EventHandler>>>;

/// Synchronous publish/subscribe bus keyed by notification type
pub struct EventBus {
    handlers: Arc<Mutex<HandlerMap>>,
}

/// Implemented by every notification that can travel on the bus
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    /// Short name used in log lines
    fn name(&self) -> &'static str;
}

pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

pub mod events {
    use super::Event;
    use crate::interaction::TriggerSource;
    use crate::selection::ResolutionRule;

    /// Dataset finished loading
    #[derive(Debug, Clone)]
    pub struct DatasetLoaded {
        pub source_name: String,
        pub row_count: usize,
        pub region_count: usize,
    }

    /// An update resolved an active subset
    #[derive(Debug, Clone)]
    pub struct SelectionResolved {
        pub trigger: TriggerSource,
        pub rule: ResolutionRule,
        pub base_rows: usize,
        pub active_rows: usize,
    }

    /// A reset returned the session to idle
    #[derive(Debug, Clone)]
    pub struct SelectionCleared;

    macro_rules! notification {
        ($($t:ident),* $(,)?) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }

                    fn name(&self) -> &'static str {
                        stringify!($t)
                    }
                }
            )*
        }
    }

    notification!(DatasetLoaded, SelectionResolved, SelectionCleared);
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(HandlerMap::default())),
        }
    }

    /// Register a type-erased handler for notifications of type `E`
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        self.handlers
            .lock()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(handler);
    }

    /// Register a closure that receives `E` already downcast
    pub fn on<E, F>(&self, mut f: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        self.subscribe::<E>(handler_from_fn(move |event| {
            if let Some(event) = event.as_any().downcast_ref::<E>() {
                f(event);
            }
        }));
    }

    /// Deliver `event` to every handler registered for its type, in
    /// subscription order
    pub fn publish<E: Event>(&self, event: E) {
        let mut handlers = self.handlers.lock();
        let Some(subscribed) = handlers.get_mut(&TypeId::of::<E>()) else {
            tracing::trace!("No subscribers for {}", event.name());
            return;
        };
        for handler in subscribed.iter_mut() {
            handler.handle(&event);
        }
    }

    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.handlers
            .lock()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

struct FnHandler<F>(F);

impl<F> EventHandler for FnHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.0)(event);
    }
}

/// Wrap a closure over any notification as a handler
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(FnHandler(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::events::{DatasetLoaded, SelectionCleared};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_matching_subscribers_only() {
        let bus = EventBus::new();
        let loaded = Arc::new(AtomicUsize::new(0));
        let counter = loaded.clone();

        bus.on::<DatasetLoaded, _>(move |event| {
            counter.fetch_add(event.row_count, Ordering::SeqCst);
        });

        bus.publish(DatasetLoaded {
            source_name: "countries.csv".to_string(),
            row_count: 5,
            region_count: 2,
        });
        bus.publish(SelectionCleared);

        assert_eq!(loaded.load(Ordering::SeqCst), 5);
        assert_eq!(bus.subscriber_count::<DatasetLoaded>(), 1);
        assert_eq!(bus.subscriber_count::<SelectionCleared>(), 0);
    }

    #[test]
    fn test_erased_handler_sees_name() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let names = seen.clone();

        bus.subscribe::<SelectionCleared>(handler_from_fn(move |event| {
            names.lock().push(event.name());
        }));
        bus.publish(SelectionCleared);

        assert_eq!(*seen.lock(), vec!["SelectionCleared"]);
    }
}
