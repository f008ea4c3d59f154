pub mod aggregate;

pub use aggregate::CategoryAggregate;
