//! CLI commands for erdos

pub mod dispatch;
pub mod distance;
pub mod paths;
