//! Zone restriction rules: the walkable band of the playfield plus the
//! blocked corner areas near the top of the screen.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ArenaError, Result};
use crate::types::Position;

/// Which side of the playfield a corner block sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerSide {
    Left,
    Right,
}

/// A blocked rectangle anchored to the top of the playfield.
///
/// A left block covers `x < edge, y < bottom`; a right block covers
/// `x > edge, y < bottom`. An agent inside the block within `snap_margin`
/// of the vertical edge is pushed out sideways onto the edge, otherwise it
/// is pushed down onto `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerZone {
    pub side: CornerSide,
    /// x coordinate of the block's inner vertical edge.
    pub edge: i32,
    /// y coordinate of the block's lower edge.
    pub bottom: i32,
    pub snap_margin: i32,
}

impl CornerZone {
    pub fn top_left() -> Self {
        Self {
            side: CornerSide::Left,
            edge: TOP_LEFT_ZONE_EDGE,
            bottom: TOP_LEFT_ZONE_BOTTOM,
            snap_margin: ZONE_SNAP_MARGIN,
        }
    }

    pub fn top_right() -> Self {
        Self {
            side: CornerSide::Right,
            edge: TOP_RIGHT_ZONE_EDGE,
            bottom: TOP_RIGHT_ZONE_BOTTOM,
            snap_margin: ZONE_SNAP_MARGIN,
        }
    }

    /// Whether a top-left corner lies inside the blocked area.
    pub fn contains(&self, p: Position) -> bool {
        if p.y >= self.bottom {
            return false;
        }
        match self.side {
            CornerSide::Left => p.x < self.edge,
            CornerSide::Right => p.x > self.edge,
        }
    }

    /// Whether a blocked point is close enough to the vertical edge to be
    /// pushed out sideways.
    pub fn in_snap_band(&self, p: Position) -> bool {
        match self.side {
            CornerSide::Left => p.x >= self.edge - self.snap_margin,
            CornerSide::Right => p.x <= self.edge + self.snap_margin,
        }
    }
}

/// Static navigation constraints applied to agents each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRules {
    pub upper_limit: i32,
    pub lower_limit: i32,
    pub left_limit: i32,
    pub right_limit: i32,
    pub top_left: CornerZone,
    pub top_right: CornerZone,
}

impl Default for ZoneRules {
    fn default() -> Self {
        Self {
            upper_limit: ZONE_UPPER_LIMIT,
            lower_limit: ZONE_LOWER_LIMIT,
            left_limit: ZONE_LEFT_LIMIT,
            right_limit: ZONE_RIGHT_LIMIT,
            top_left: CornerZone::top_left(),
            top_right: CornerZone::top_right(),
        }
    }
}

impl ZoneRules {
    pub fn validate(&self) -> Result<()> {
        if self.upper_limit > self.lower_limit {
            return Err(ArenaError::InvalidConfig(format!(
                "zone upper_limit {} is greater than lower_limit {}",
                self.upper_limit, self.lower_limit
            )));
        }
        if self.left_limit > self.right_limit {
            return Err(ArenaError::InvalidConfig(format!(
                "zone left_limit {} is right of right_limit {}",
                self.left_limit, self.right_limit
            )));
        }
        for corner in [&self.top_left, &self.top_right] {
            if corner.snap_margin < 0 {
                return Err(ArenaError::InvalidConfig(
                    "corner zone snap_margin must be non-negative".into(),
                ));
            }
        }
        Ok(())
    }
}
