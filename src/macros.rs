// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Info-level event, forwarded to `tracing`.
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => { ::tracing::info!($($arg)*) };
}

/// Debug-level event.
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

/// Warn-level event.
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

/// Error-level event.
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => { ::tracing::error!($($arg)*) };
}
