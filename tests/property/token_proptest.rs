//! Property-based tests for the reset token store

use inkpress::backend::tokens::{ManualClock, TokenStore};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn identity() -> impl Strategy<Value = String> {
    "[a-z]{1,12}@[a-z]{1,8}\\.com"
}

proptest! {
    #[test]
    fn test_token_validates_exactly_once(email in identity(), ttl_secs in 1u64..1_000_000) {
        let store = TokenStore::new();
        let token = store.issue(&email, Duration::from_secs(ttl_secs)).unwrap();

        prop_assert_eq!(token.len(), 64);
        prop_assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert_eq!(store.validate(&token).unwrap(), Some(email));
        prop_assert_eq!(store.validate(&token).unwrap(), None);
        prop_assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_token_dies_at_ttl(email in identity(), ttl_secs in 2i64..100_000) {
        let clock = ManualClock::default();
        let store = TokenStore::with_clock(Arc::new(clock.clone()));
        let ttl = Duration::from_secs(ttl_secs as u64);

        let live = store.issue(&email, ttl).unwrap();
        let other = format!("other.{}", email);
        let expired = store.issue(&other, ttl).unwrap();

        clock.advance(chrono::Duration::seconds(ttl_secs - 1));
        prop_assert_eq!(store.validate(&live).unwrap(), Some(email));

        clock.advance(chrono::Duration::seconds(1));
        prop_assert_eq!(store.validate(&expired).unwrap(), None);
        prop_assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_tokens_are_distinct(emails in prop::collection::hash_set(identity(), 1..20)) {
        let store = TokenStore::new();
        let tokens: HashSet<String> = emails
            .iter()
            .map(|email| store.issue(email, Duration::from_secs(60)).unwrap())
            .collect();

        prop_assert_eq!(tokens.len(), emails.len());
        prop_assert_eq!(store.len().unwrap(), emails.len());
    }

    #[test]
    fn test_only_latest_token_survives(email in identity(), reissues in 1usize..8) {
        let store = TokenStore::new();
        let mut tokens = Vec::new();
        for _ in 0..=reissues {
            tokens.push(store.issue(&email, Duration::from_secs(60)).unwrap());
        }

        prop_assert_eq!(store.len().unwrap(), 1);
        let latest = tokens.pop().unwrap();
        for stale in &tokens {
            prop_assert_eq!(store.validate(stale).unwrap(), None);
        }
        prop_assert_eq!(store.validate(&latest).unwrap(), Some(email));
    }

    #[test]
    fn test_garbage_never_validates(email in identity(), garbage in ".{0,80}") {
        let store = TokenStore::new();
        let token = store.issue(&email, Duration::from_secs(60)).unwrap();
        prop_assume!(garbage != token);

        prop_assert_eq!(store.validate(&garbage).unwrap(), None);
        prop_assert_eq!(store.len().unwrap(), 1);
    }
}
