/// Target carried by events emitted through [`success!`](crate::success).
///
/// Formatters render events with this target under a `SUCCESS` label.
pub const SUCCESS_TARGET: &str = "netfind::success";

/// Logs a positive outcome at INFO level under [`SUCCESS_TARGET`].
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}
