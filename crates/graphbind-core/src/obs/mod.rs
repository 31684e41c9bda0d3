//! Observability: codec events, the sink they flow through, and the
//! process-local counters the default sink maintains.

pub mod metrics;
pub mod sink;

pub use metrics::{CodecMetrics, CodecOps, TypeCounters};
pub use sink::{CodecEvent, CodecSink, with_sink};
