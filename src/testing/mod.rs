//! Test doubles for downstream consumers (feature = "testing").

mod mock_provider;

pub use mock_provider::{MockBehaviour, MockProvider};
