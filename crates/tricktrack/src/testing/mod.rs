//! Testing infrastructure (mock seams, delays, etc.).

pub(crate) mod mock;

pub(crate) use mock::{MockDelay, MockReporter, MockSource, ScriptedOperator};
