use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// CodecMetrics
/// Ephemeral, in-memory counters for codec activity on this thread.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct CodecMetrics {
    pub ops: CodecOps,
    pub types: BTreeMap<String, TypeCounters>,
    pub decode_errors_by_kind: BTreeMap<String, u64>,
    pub encode_errors_by_kind: BTreeMap<String, u64>,
}

///
/// CodecOps
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct CodecOps {
    // Model objects walked
    pub decodes: u64,
    pub encodes: u64,

    // Top-level failures
    pub decode_errors: u64,
    pub encode_errors: u64,

    // Lenient-path observations
    pub unknown_fields: u64,
    pub unknown_enum_tokens: u64,
    pub discriminator_fallbacks: u64,
}

///
/// TypeCounters
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct TypeCounters {
    pub decodes: u64,
    pub encodes: u64,
    pub fields_read: u64,
    pub unknown_fields: u64,
}

thread_local! {
    static CODEC_METRICS: RefCell<CodecMetrics> = RefCell::new(CodecMetrics::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&CodecMetrics) -> R) -> R {
    CODEC_METRICS.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut CodecMetrics) -> R) -> R {
    CODEC_METRICS.with(|m| f(&mut m.borrow_mut()))
}

/// Copy of the current counters.
#[must_use]
pub fn snapshot() -> CodecMetrics {
    with_state(Clone::clone)
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_state_mut(|m| *m = CodecMetrics::default());
}
