//! Presentation helpers over analysis output.
pub mod dot;
pub mod report;

pub use dot::to_dot;
pub use report::format_report;
