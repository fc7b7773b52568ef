//! Span definitions per run stage: library, component, rule.
//!
//! Expanded in the calling crate, which must depend on `tracing`.

/// Create a library span.
#[macro_export]
macro_rules! library_span {
    ($library:expr) => {
        tracing::info_span!("schlint.library", library = %$library)
    };
}

/// Create a component span.
#[macro_export]
macro_rules! component_span {
    ($component:expr) => {
        tracing::debug_span!("schlint.component", component = %$component)
    };
}

/// Create a rule span.
#[macro_export]
macro_rules! rule_span {
    ($rule:expr) => {
        tracing::trace_span!("schlint.rule", rule = %$rule)
    };
}

