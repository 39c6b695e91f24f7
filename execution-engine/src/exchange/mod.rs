//! In-process trading sessions used to exercise the engine without a broker.

pub mod mock;
