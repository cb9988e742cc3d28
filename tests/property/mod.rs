//! Property-based tests

mod hub_proptest;
mod token_proptest;
