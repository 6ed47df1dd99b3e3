//! Robustness of a graph under node removal.
//!
//! A targeted attack removes the currently best-connected node, step after
//! step; a random failure removes a uniformly random surviving node. After
//! every removal the size of the largest connected component is recorded,
//! producing a fragmentation curve.

pub mod attack;

pub use attack::{AttackSimulator, AttackStrategy, FragmentationTrace, removal_count};
