//! Undirected social graph model.
//!
//! # Overview
//!
//! [`SocialGraph`] is the mutable, petgraph-backed store: nodes keyed by an
//! arbitrary ordered identifier, undirected simple edges (self-loops and
//! parallel edges are dropped on insertion). It answers the structural
//! queries every analysis needs: degree, neighbors, node removal and
//! connected components.
//!
//! [`Adjacency`] is a compact read-only snapshot with dense positions
//! `0..n` in ascending identifier order. All metric algorithms run on it so
//! their floating-point accumulation order never depends on insertion order.
//!
//! ```text
//! edge list ──► SocialGraph<N> ──► Adjacency<N> ──► metrics / ranking
//!                    │
//!                    └──(clone)──► attack simulation (private copy)
//! ```

pub mod adjacency;
pub mod social;

pub use adjacency::Adjacency;
pub use social::{NodeId, SocialGraph};
