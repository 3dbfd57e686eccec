//! Maps parsed expressions onto the relation graph.
pub mod builder;
pub mod mapper;

pub use builder::GraphBuilder;
pub use mapper::RelationMapper;
