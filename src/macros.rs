// Forwards to `log::trace!` when the `log` feature is on, expands to nothing otherwise.
#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!(target: "sapling", $($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {{}};
}
