/// Browser console logging with a millisecond timestamp prefix.
///
/// These wrap gloo_console and only work in the browser; library code that
/// also runs natively logs through `tracing` instead.
#[doc(hidden)]
#[macro_export]
macro_rules! console_at {
    ($level:ident, $fmt:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($level:ident, $fmt:expr, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::console_at!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console_at!(warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console_at!(error, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::console_at!(debug, $($arg)*)
    };
}
