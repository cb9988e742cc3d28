//! Property-based tests for the notification hub

use inkpress::backend::realtime::{deliver_fn, DeliveryFailure, NotificationHub};
use inkpress::shared::RealtimeEvent;
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

proptest! {
    #[test]
    fn test_failed_subscribers_are_removed(outcomes in prop::collection::vec(any::<bool>(), 0..16)) {
        let hub = NotificationHub::new();
        for &healthy in &outcomes {
            hub.subscribe("post:p", deliver_fn(move |_| {
                if healthy { Ok(()) } else { Err(DeliveryFailure::Closed) }
            }));
        }
        let healthy = outcomes.iter().filter(|&&ok| ok).count();

        let delivered = hub.publish("post:p", RealtimeEvent::notification("t", "m"));

        prop_assert_eq!(delivered, healthy);
        prop_assert_eq!(hub.subscriber_count("post:p"), healthy);
        prop_assert_eq!(hub.topic_count(), usize::from(healthy > 0));
    }

    #[test]
    fn test_events_arrive_in_publish_order(titles in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let hub = NotificationHub::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        hub.subscribe_global(deliver_fn(move |event: RealtimeEvent| {
            sink.lock().unwrap().push(event.payload["title"].as_str().unwrap().to_string());
            Ok(())
        }));

        for title in &titles {
            hub.publish_global(RealtimeEvent::notification(title.clone(), "m"));
        }

        prop_assert_eq!(&*seen.lock().unwrap(), &titles);
    }

    #[test]
    fn test_unsubscribe_is_exact(count in 1usize..12, victim in 0usize..12) {
        let victim = victim % count;
        let hub = NotificationHub::new();
        let handles: Vec<_> = (0..count)
            .map(|_| hub.subscribe("post:p", deliver_fn(|_| Ok(()))))
            .collect();

        hub.unsubscribe(&handles[victim]);
        hub.unsubscribe(&handles[victim]);

        prop_assert_eq!(hub.subscriber_count("post:p"), count - 1);
        prop_assert_eq!(hub.publish("post:p", RealtimeEvent::notification("t", "m")), count - 1);
    }
}
