//! Read-only analyses over a finished relation graph.
pub mod connectivity;
pub mod report;

pub use connectivity::analyze_connectivity;
pub use report::{ComponentSummary, ConnectivityReport};
