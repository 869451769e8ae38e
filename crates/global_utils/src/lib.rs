pub const DEBUG_ENV: &str = "ROSTER_DEBUG";

/// Debug output is on for debug builds, or when `ROSTER_DEBUG` is set
pub fn is_debug() -> bool {
    cfg!(debug_assertions) || std::env::var(DEBUG_ENV).ok().is_some()
}

#[macro_export]
macro_rules! print_dbg {
    ( $( $x:expr ),* ) => {
        $(
            if $crate::is_debug() {
                dbg!($x);
            }
        )*
    };
}

#[macro_export]
macro_rules! is_debug {
    () => {
        $crate::is_debug()
    };
}
