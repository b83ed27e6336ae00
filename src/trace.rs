//! Feature-gated tracing macros.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it they
//! expand to nothing, so call sites need no `cfg` attributes.

/// Info-level span around a search or cut.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Info-level event with key/value fields.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Evaluated and discarded so the fields do not warn as unused
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

/// Warn-level event for searches that did not produce a usable result.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::warn!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;
pub(crate) use trace_warn;

/// Stand-in span guard when tracing is disabled.
///
/// Lets `let _span = trace_span!(...).entered();` compile either way.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
