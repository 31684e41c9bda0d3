//! Codec event boundary.
//!
//! Walk and codec code MUST NOT touch `obs::metrics` directly.
//! Every observation flows through `CodecEvent` and `record`.

use crate::{
    error::{DecodeErrorKind, EncodeErrorKind},
    obs::metrics,
};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn CodecSink>>> = RefCell::new(None);
}

///
/// CodecEvent
///

#[derive(Clone, Copy, Debug)]
pub enum CodecEvent<'a> {
    ModelDecoded {
        type_name: &'static str,
        fields: u64,
    },
    ModelEncoded {
        type_name: &'static str,
    },
    DecodeFailed {
        kind: DecodeErrorKind,
    },
    EncodeFailed {
        kind: EncodeErrorKind,
    },
    UnknownField {
        type_name: &'static str,
        field: &'a str,
        preserved: bool,
    },
    UnknownEnumToken {
        enum_path: &'static str,
        token: &'a str,
    },
    DiscriminatorFallback {
        family: &'static str,
        tag: &'a str,
    },
}

///
/// CodecSink
///

pub trait CodecSink {
    fn record(&self, event: &CodecEvent<'_>);
}

/// GlobalCodecSink
/// Default sink: bumps process-local counters and emits `tracing` events.
/// Installing a scoped override replaces it entirely.

pub(crate) struct GlobalCodecSink;

impl CodecSink for GlobalCodecSink {
    fn record(&self, event: &CodecEvent<'_>) {
        match *event {
            CodecEvent::ModelDecoded { type_name, fields } => {
                metrics::with_state_mut(|m| {
                    m.ops.decodes = m.ops.decodes.saturating_add(1);
                    let entry = m.types.entry(type_name.to_string()).or_default();
                    entry.decodes = entry.decodes.saturating_add(1);
                    entry.fields_read = entry.fields_read.saturating_add(fields);
                });
            }

            CodecEvent::ModelEncoded { type_name } => {
                metrics::with_state_mut(|m| {
                    m.ops.encodes = m.ops.encodes.saturating_add(1);
                    let entry = m.types.entry(type_name.to_string()).or_default();
                    entry.encodes = entry.encodes.saturating_add(1);
                });
            }

            CodecEvent::DecodeFailed { kind } => {
                metrics::with_state_mut(|m| {
                    m.ops.decode_errors = m.ops.decode_errors.saturating_add(1);
                    *m.decode_errors_by_kind
                        .entry(kind.as_str().to_string())
                        .or_default() += 1;
                });
            }

            CodecEvent::EncodeFailed { kind } => {
                metrics::with_state_mut(|m| {
                    m.ops.encode_errors = m.ops.encode_errors.saturating_add(1);
                    *m.encode_errors_by_kind
                        .entry(kind.as_str().to_string())
                        .or_default() += 1;
                });
            }

            CodecEvent::UnknownField {
                type_name,
                field,
                preserved,
            } => {
                tracing::debug!(type_name, field, preserved, "unrecognized field");
                metrics::with_state_mut(|m| {
                    m.ops.unknown_fields = m.ops.unknown_fields.saturating_add(1);
                    let entry = m.types.entry(type_name.to_string()).or_default();
                    entry.unknown_fields = entry.unknown_fields.saturating_add(1);
                });
            }

            CodecEvent::UnknownEnumToken { enum_path, token } => {
                tracing::debug!(enum_path, token, "unrecognized enum token left unset");
                metrics::with_state_mut(|m| {
                    m.ops.unknown_enum_tokens = m.ops.unknown_enum_tokens.saturating_add(1);
                });
            }

            CodecEvent::DiscriminatorFallback { family, tag } => {
                tracing::warn!(family, tag, "unrecognized discriminator, using base type");
                metrics::with_state_mut(|m| {
                    m.ops.discriminator_fallbacks =
                        m.ops.discriminator_fallbacks.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_CODEC_SINK: GlobalCodecSink = GlobalCodecSink;

pub(crate) fn record(event: CodecEvent<'_>) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(&event),
        None => GLOBAL_CODEC_SINK.record(&event),
    }
}

/// Run a closure with a scoped sink override on this thread.
///
/// The previous sink is restored on every exit path, including unwinding.
pub fn with_sink<T>(sink: Rc<dyn CodecSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn CodecSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let previous = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = previous;
            });
        }
    }

    let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(previous);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting(Cell<u32>);

    impl CodecSink for Counting {
        fn record(&self, _: &CodecEvent<'_>) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn override_replaces_global_sink() {
        metrics::reset();
        let sink = Rc::new(Counting::default());

        with_sink(sink.clone(), || {
            record(CodecEvent::ModelEncoded { type_name: "Probe" });
        });

        assert_eq!(sink.0.get(), 1);
        assert_eq!(metrics::snapshot().ops.encodes, 0);
    }

    #[test]
    fn override_is_restored_after_panic() {
        metrics::reset();
        let sink = Rc::new(Counting::default());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_sink(sink.clone(), || panic!("boom"));
        }));
        assert!(result.is_err());

        record(CodecEvent::ModelEncoded { type_name: "Probe" });
        assert_eq!(sink.0.get(), 0);
        assert_eq!(metrics::snapshot().ops.encodes, 1);
    }

    #[test]
    fn nested_overrides_unwind_in_order() {
        let outer = Rc::new(Counting::default());
        let inner = Rc::new(Counting::default());

        with_sink(outer.clone(), || {
            with_sink(inner.clone(), || {
                record(CodecEvent::UnknownEnumToken {
                    enum_path: "Probe",
                    token: "x",
                });
            });
            record(CodecEvent::UnknownEnumToken {
                enum_path: "Probe",
                token: "y",
            });
        });

        assert_eq!((outer.0.get(), inner.0.get()), (1, 1));
    }

    #[test]
    fn global_sink_counts_by_type() {
        metrics::reset();

        record(CodecEvent::ModelDecoded {
            type_name: "AccessPackage",
            fields: 3,
        });
        record(CodecEvent::UnknownField {
            type_name: "AccessPackage",
            field: "extra",
            preserved: true,
        });
        record(CodecEvent::DecodeFailed {
            kind: DecodeErrorKind::TypeMismatch,
        });

        let snapshot = metrics::snapshot();
        let counters = &snapshot.types["AccessPackage"];
        assert_eq!(snapshot.ops.decodes, 1);
        assert_eq!(snapshot.ops.unknown_fields, 1);
        assert_eq!(snapshot.ops.decode_errors, 1);
        assert_eq!(snapshot.decode_errors_by_kind["type_mismatch"], 1);
        assert_eq!(
            (counters.decodes, counters.fields_read, counters.unknown_fields),
            (1, 3, 1)
        );
    }
}
