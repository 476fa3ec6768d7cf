//! Event bus: synchronous subscribers, a broadcast channel for async
//! consumers and an optional journal of recent events.
//!
//! The bus is an ordinary value owned by the host; there is no global instance.

use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};
use crate::types::ThreadSafeRwMap;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Which events a subscriber wants.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventFilter {
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
    /// Draw events of a single annotation group.
    Group(u64),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match (self, event) {
            (EventFilter::All, _) => true,
            (EventFilter::Categories(categories), event) => {
                categories.contains(&event.category())
            }
            (EventFilter::Group(id), AppEvent::Draw(draw)) => draw.group_id == *id,
            (EventFilter::Group(_), AppEvent::View(_)) => false,
        }
    }
}

type Handler = Box<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscriber {
    filter: EventFilter,
    handler: Handler,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBusConfig {
    /// Broadcast channel capacity; slow async receivers lag past this.
    pub channel_capacity: usize,
    /// Number of published events kept in the journal; 0 disables it.
    pub journal_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            journal_size: 0,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// Nobody received the event: no matching subscriber and no receiver.
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Who received a published event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Sequence number assigned to the event, starting at 1.
    pub sequence: u64,
    /// Synchronous subscribers whose filter matched.
    pub handlers: usize,
    /// Async receivers the event was queued for.
    pub receivers: usize,
}

/// A journaled event with its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub sequence: u64,
    pub event: AppEvent,
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    subscribers: ThreadSafeRwMap<SubscriptionId, Subscriber>,
    journal: Arc<Mutex<VecDeque<JournalEntry>>>,
    sequence: AtomicU64,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            journal: Arc::new(Mutex::new(VecDeque::new())),
            sequence: AtomicU64::new(0),
            config,
        }
    }

    /// Deliver `event` to matching subscribers, then to async receivers.
    ///
    /// The event is journaled even when nobody receives it.
    pub fn publish(&self, event: AppEvent) -> Result<Delivery, EventBusError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!("Publishing #{} {}", sequence, event.description());
        self.record(sequence, &event);

        let mut handlers = 0;
        for subscriber in self.subscribers.read().values() {
            if subscriber.filter.matches(&event) {
                (subscriber.handler)(&event);
                handlers += 1;
            }
        }
        let receivers = self.sender.send(event).unwrap_or(0);

        if handlers == 0 && receivers == 0 {
            return Err(EventBusError::NoSubscribers);
        }
        Ok(Delivery {
            sequence,
            handlers,
            receivers,
        })
    }

    /// Register a handler run on the publishing thread.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        tracing::debug!("Subscription {} added ({:?})", id, filter);
        self.subscribers.write().insert(
            id,
            Subscriber {
                filter,
                handler: Box::new(handler),
            },
        );
        id
    }

    /// Receiver for async consumers; sees events published after this call.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Journaled events with a sequence number above `after`, oldest first.
    pub fn journal(&self, after: u64) -> Vec<JournalEntry> {
        self.journal
            .lock()
            .iter()
            .filter(|entry| entry.sequence > after)
            .cloned()
            .collect()
    }

    pub fn clear_journal(&self) {
        self.journal.lock().clear();
    }

    /// Sequence number of the last published event (0 before any).
    pub fn last_sequence(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, sequence: u64, event: &AppEvent) {
        if self.config.journal_size == 0 {
            return;
        }
        let mut journal = self.journal.lock();
        journal.push_back(JournalEntry {
            sequence,
            event: event.clone(),
        });
        while journal.len() > self.config.journal_size {
            journal.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("last_sequence", &self.last_sequence())
            .field("config", &self.config)
            .finish()
    }
}
