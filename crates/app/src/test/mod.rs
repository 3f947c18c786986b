//! Shared test infrastructure for service-level integration tests.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
