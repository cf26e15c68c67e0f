use std::collections::{HashMap, HashSet};

use crate::error::SolveError;
use crate::position::Position;

/// Which line a group's members share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Members share an x coordinate and converge along y.
    Column,
    /// Members share a y coordinate and converge along x.
    Row,
}

impl Axis {
    /// The coordinate every member holds in common.
    pub fn aligned(self, pos: Position) -> i32 {
        match self {
            Axis::Column => pos.x,
            Axis::Row => pos.y,
        }
    }

    /// The coordinate along which members still differ and converge.
    pub fn cross(self, pos: Position) -> i32 {
        match self {
            Axis::Column => pos.y,
            Axis::Row => pos.x,
        }
    }
}

/// Robots sharing a row or column that the solver will squeeze into each
/// other. Members stay sorted by their cross-axis coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub axis: Axis,
    pub members: Vec<Position>,
}

impl Group {
    pub fn line(&self) -> i32 {
        self.axis.aligned(self.members[0])
    }
}

/// Partitions robots into convergence groups, or explains why no such
/// partition exists.
///
/// Repeated passes walk the ungrouped robots: one alone on both its row and
/// column can never be wrecked; one with company on both axes is skipped in
/// the hope that a later group frees it. Otherwise the robot seeds a group
/// along the axis where it has company. Candidate members still holding
/// company on their own other line are left behind when the seed's line has
/// more than two robots on it. A pass that groups nothing ends the search;
/// any robots still ungrouped then make the partition ambiguous.
pub fn find_groups(player: Position, robots: &[Position]) -> Result<Vec<Group>, SolveError> {
    let mut by_col: HashMap<i32, Vec<Position>> = HashMap::new();
    let mut by_row: HashMap<i32, Vec<Position>> = HashMap::new();
    for &robot in robots {
        by_col.entry(robot.x).or_default().push(robot);
        by_row.entry(robot.y).or_default().push(robot);
    }

    let mut groups: Vec<Group> = Vec::new();
    let mut grouped: HashSet<Position> = HashSet::new();
    let mut progress = true;
    while progress {
        progress = false;
        for &seed in robots {
            if grouped.contains(&seed) {
                continue;
            }
            let col_peers = by_col[&seed.x].len();
            let row_peers = by_row[&seed.y].len();
            if col_peers == 1 && row_peers == 1 {
                return Err(SolveError::IsolatedRobot { at: seed });
            }
            if col_peers > 1 && row_peers > 1 {
                // Entangled both ways; another group may take its company.
                continue;
            }
            let axis = if col_peers == 1 { Axis::Row } else { Axis::Column };
            if axis.aligned(seed) == axis.aligned(player) {
                return Err(SolveError::OnPlayerLine { at: seed });
            }
            let peers: Vec<Position> = match axis {
                Axis::Column => by_col[&seed.x].clone(),
                Axis::Row => by_row[&seed.y].clone(),
            };
            let mut members = vec![seed];
            for &other in &peers {
                if other == seed {
                    continue;
                }
                let other_cross_company = match axis {
                    Axis::Column => by_row[&other.y].len(),
                    Axis::Row => by_col[&other.x].len(),
                };
                if peers.len() > 2 && other_cross_company > 1 {
                    // It still has company of its own; leave it for later.
                    continue;
                }
                members.push(other);
            }
            if members.len() == 1 {
                continue;
            }
            progress = true;
            members.sort_by_key(|&m| axis.cross(m));
            for &m in &members {
                grouped.insert(m);
                by_col.get_mut(&m.x).unwrap().retain(|&p| p != m);
                by_row.get_mut(&m.y).unwrap().retain(|&p| p != m);
            }
            log::debug!(
                "grouped {} robots on {:?} line {}",
                members.len(),
                axis,
                axis.aligned(seed)
            );
            groups.push(Group { axis, members });
        }
    }
    if grouped.len() != robots.len() {
        return Err(SolveError::AmbiguousGrouping);
    }
    Ok(groups)
}
