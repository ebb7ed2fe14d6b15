//! Spatial rules applied to agents each tick.
//!
//! Rules are stateless functions over agent geometry. Their only side
//! effects are on the positions and health of the agents passed in.

pub mod borders;
pub mod collision;
pub mod separation;
pub mod zones;
