pub mod collector;
pub mod critical;
pub mod hypergraph;
pub mod io;
pub mod rs;

// Re-exports to flatten the crate.
pub use hypergraph::Hypergraph as Hypergraph;
pub use rs::transversal;
