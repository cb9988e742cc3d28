/**
 * Notification Hub
 *
 * Per-topic fan-out of push events to live subscribers. The hub keeps no
 * queue and no history: an event reaches exactly the subscribers registered
 * at the moment it is published, once each, and is lost for everyone else.
 *
 * # Topics
 *
 * - `post:<post_id>` - comments of a single post (see [`post_topic`])
 * - `system` - global notices (see [`GLOBAL_TOPIC`])
 *
 * # Locking
 *
 * One mutex guards the whole registry. Fan-out runs while it is held, which
 * gives every subscriber the events of a topic in publish order and makes
 * `unsubscribe` effective for every later publish. Closures passed to
 * [`NotificationHub::subscribe_with_snapshot`] and
 * [`NotificationHub::publish_with`] also run under it, so they may take a
 * collaborator lock (hub first, collaborator second) but must never touch
 * the hub themselves.
 *
 * # Failure Handling
 *
 * A subscriber whose delivery fails is removed in the same critical section.
 * The publisher only sees how many deliveries succeeded.
 */

use crate::backend::realtime::deliver::Deliver;
use crate::shared::RealtimeEvent;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Topic that carries system-wide notifications
pub const GLOBAL_TOPIC: &str = "system";

/// Topic name for the comments of a post
pub fn post_topic(post_id: &str) -> String {
    format!("post:{}", post_id)
}

/// Identifier of a subscription, unique for the lifetime of a hub
pub type SubscriberId = u64;

/// Ticket returned by `subscribe`, needed to unsubscribe
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    topic: String,
    id: SubscriberId,
}

impl SubscriptionHandle {
    /// Topic this subscription is registered on
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Subscriber ID within the hub
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

/// Subscribers of one topic, ordered by registration
type Subscribers = BTreeMap<SubscriberId, Box<dyn Deliver>>;

#[derive(Default)]
struct Registry {
    next_id: SubscriberId,
    topics: HashMap<String, Subscribers>,
}

impl Registry {
    fn insert(&mut self, topic: &str, deliver: Box<dyn Deliver>) -> SubscriptionHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.topics
            .entry(topic.to_string())
            .or_default()
            .insert(id, deliver);
        SubscriptionHandle {
            topic: topic.to_string(),
            id,
        }
    }

    fn remove(&mut self, handle: &SubscriptionHandle) -> bool {
        let Some(subscribers) = self.topics.get_mut(&handle.topic) else {
            return false;
        };
        let removed = subscribers.remove(&handle.id).is_some();
        if subscribers.is_empty() {
            self.topics.remove(&handle.topic);
        }
        removed
    }

    fn fan_out(&mut self, topic: &str, event: &RealtimeEvent) -> usize {
        let Some(subscribers) = self.topics.get_mut(topic) else {
            return 0;
        };

        let mut delivered = 0;
        subscribers.retain(|id, deliver| match deliver.deliver(event.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(e) => {
                tracing::debug!("[Hub] Dropping subscriber {} on {}: {}", id, topic, e);
                false
            }
        });

        if subscribers.is_empty() {
            self.topics.remove(topic);
        }
        tracing::debug!(
            "[Hub] {} event on {} delivered to {} subscribers",
            event.event_type.as_str(),
            topic,
            delivered
        );
        delivered
    }
}

/// Shared handle to the topic registry
///
/// Cloning is cheap; all clones see the same subscribers. Construct one at
/// startup and hand it to whoever needs to publish or subscribe.
#[derive(Clone, Default)]
pub struct NotificationHub {
    registry: Arc<Mutex<Registry>>,
}

impl NotificationHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    // Registry mutations are single map operations, so a panic inside a
    // delivery callback cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a subscriber on `topic`
    ///
    /// Creates the topic on first use. Never fails.
    pub fn subscribe<D: Deliver>(&self, topic: &str, deliver: D) -> SubscriptionHandle {
        let handle = self.lock().insert(topic, Box::new(deliver));
        tracing::debug!("[Hub] Subscriber {} joined {}", handle.id, topic);
        handle
    }

    /// Register a subscriber after handing it a snapshot event
    ///
    /// `snapshot` runs with the registry locked, then its event is delivered
    /// and the subscriber registered before the lock is released. A
    /// concurrent `publish_with` on the same topic therefore lands either in
    /// the snapshot or as a live event, never both and never neither.
    ///
    /// # Returns
    ///
    /// `None` if the snapshot could not be delivered; nothing is registered
    /// in that case.
    pub fn subscribe_with_snapshot<D, F>(
        &self,
        topic: &str,
        deliver: D,
        snapshot: F,
    ) -> Option<SubscriptionHandle>
    where
        D: Deliver,
        F: FnOnce() -> RealtimeEvent,
    {
        let mut registry = self.lock();
        if let Err(e) = deliver.deliver(snapshot()) {
            tracing::debug!("[Hub] Snapshot delivery on {} failed: {}", topic, e);
            return None;
        }
        let handle = registry.insert(topic, Box::new(deliver));
        tracing::debug!("[Hub] Subscriber {} joined {} with snapshot", handle.id, topic);
        Some(handle)
    }

    /// Remove a subscription
    ///
    /// Idempotent: unknown or already removed handles are ignored. Once this
    /// returns, no later publish reaches the subscriber.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) {
        if self.lock().remove(handle) {
            tracing::debug!("[Hub] Subscriber {} left {}", handle.id, handle.topic);
        }
    }

    /// Deliver `event` to every current subscriber of `topic`
    ///
    /// # Returns
    ///
    /// Number of subscribers that accepted the event. Publishing to a topic
    /// without subscribers is a no-op returning 0.
    pub fn publish(&self, topic: &str, event: RealtimeEvent) -> usize {
        self.publish_with(topic, move || event)
    }

    /// Run a write and publish its event atomically
    ///
    /// `write` runs with the registry locked (typically storing a record and
    /// building the event that announces it), then the event is fanned out
    /// before the lock is released. Pairs with `subscribe_with_snapshot`.
    pub fn publish_with<F>(&self, topic: &str, write: F) -> usize
    where
        F: FnOnce() -> RealtimeEvent,
    {
        let mut registry = self.lock();
        let event = write();
        registry.fan_out(topic, &event)
    }

    /// Drop every subscription on every topic
    ///
    /// Called at shutdown. Each subscriber's delivery sink is dropped, which
    /// ends the SSE streams reading from it. Guards that unsubscribe later
    /// find nothing to remove.
    ///
    /// # Returns
    ///
    /// Number of subscriptions removed
    pub fn close_all(&self) -> usize {
        let topics = std::mem::take(&mut self.lock().topics);
        let closed: usize = topics.values().map(BTreeMap::len).sum();
        drop(topics);
        tracing::info!("[Hub] Closed {} subscriptions", closed);
        closed
    }

    /// Subscribe to the global notification topic
    pub fn subscribe_global<D: Deliver>(&self, deliver: D) -> SubscriptionHandle {
        self.subscribe(GLOBAL_TOPIC, deliver)
    }

    /// Publish on the global notification topic
    pub fn publish_global(&self, event: RealtimeEvent) -> usize {
        self.publish(GLOBAL_TOPIC, event)
    }

    /// Number of live subscribers on `topic`
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.lock().topics.get(topic).map_or(0, |s| s.len())
    }

    /// Number of topics with at least one subscriber
    pub fn topic_count(&self) -> usize {
        self.lock().topics.len()
    }
}
