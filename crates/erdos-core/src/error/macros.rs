//! Error macros for erdos

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::ErdosError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid graph errors
#[macro_export]
macro_rules! bail_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::ErdosError::invalid_graph(format!($($arg)*)))
    };
}
