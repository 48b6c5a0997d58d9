/// Emits a `tracing` trace event when the `tracing` feature is enabled.
///
/// Accepts the same arguments as `tracing::trace!`. Without the feature the
/// invocation expands to an empty block and the arguments are not evaluated.
///
/// ```ignore
/// trace_event!(slot = pos, len = self.len, "inserted at head");
/// ```
macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "static_chain", $($arg)*);
        }
    }};
}
