use std::collections::HashMap;

use crate::direction::Move;
use crate::error::SolveError;
use crate::game::{Game, Outcome};
use crate::position::Position;

mod groups;

pub use groups::{Axis, Group, find_groups};

/// Computes a move sequence that wrecks every robot without losing, by
/// steering each convergence group onto a single cell.
///
/// Runs on a private copy of the game. Each turn the four moves are scored
/// against every live group and the best admissible one is played; the
/// tracked groups are then reconciled with what the game actually did.
/// Returns the moves in play order, empty when there is nothing to wreck.
pub fn solve(player: Position, robots: &[Position]) -> Result<Vec<Move>, SolveError> {
    if robots.is_empty() {
        return Ok(Vec::new());
    }
    let mut groups = find_groups(player, robots)?;
    let mut game = Game::new(player, robots.to_vec());
    let mut moves = Vec::new();
    while !groups.is_empty() {
        let (best, score) = pick_move(&game, &groups).ok_or(SolveError::NoMoveAvailable)?;
        log::debug!("playing {best:?} (score {score}), {} groups live", groups.len());
        moves.push(best);
        if let Outcome::Lost(reason) = game.step(best) {
            return Err(SolveError::Inconsistency(format!(
                "chosen move lost the game: {reason}"
            )));
        }
        drop_merged(&mut groups)?;
        advance_tracked(&mut groups, &game)?;
    }
    Ok(moves)
}

/// Best admissible move with its score. Considers moves in `u`, `d`, `l`,
/// `r` order and only replaces the front-runner on a strictly higher score.
fn pick_move(game: &Game, groups: &[Group]) -> Option<(Move, i32)> {
    let player = game.player();
    let closest = groups
        .iter()
        .map(|g| (g.line() - g.axis.aligned(player)).abs())
        .min()
        .unwrap_or(i32::MAX);
    let mut best: Option<(Move, i32)> = None;
    for m in Move::all() {
        let moved = player + m.delta();
        let Some(score) = score_move(player, moved, groups, closest) else {
            continue;
        };
        log::trace!("{m:?} scores {score}");
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((m, score)),
        }
    }
    best
}

/// Scores a candidate destination, or None when it would put the player
/// within one cell of some group's line, merged or not.
///
/// Contributions, folded in with max: 3 for standing on a three-robot
/// group's convergence target once its span is at most 3; 2 or 1 for
/// closing on that target from the wrong or right side of the middle robot;
/// 1 for entering another group's span from outside; 1 for backing away
/// from the closest group line.
fn score_move(player: Position, moved: Position, groups: &[Group], closest: i32) -> Option<i32> {
    let mut score = 0;
    for g in groups {
        let line = g.line();
        if (g.axis.aligned(moved) - line).abs() < 2 {
            return None;
        }
        let vals: Vec<i32> = g.members.iter().map(|&m| g.axis.cross(m)).collect();
        let (lo, hi) = (vals[0], vals[vals.len() - 1]);
        if lo == hi {
            // Fully converged; the wreck happens on its own next step.
            continue;
        }
        let cur = g.axis.cross(player);
        let stepped = g.axis.cross(moved);
        if vals.len() == 3 {
            let span = hi - lo;
            let mut target = (lo + hi) / 2;
            if span == 3 {
                // No cell is equidistant from both ends; aim next to the
                // middle robot so the ends close in step.
                target = if vals[1] == lo + 1 { hi } else { lo };
            }
            if span <= 3 {
                // Reaching the target exactly is all that matters now.
                if stepped == target {
                    score = score.max(3);
                }
            } else if (stepped - target).abs() < (cur - target).abs() {
                let wrong_side = (target >= vals[1]) != (cur >= vals[1]);
                score = score.max(if wrong_side { 2 } else { 1 });
            }
        } else if (cur < lo && stepped > cur) || (cur > hi && stepped < cur) {
            score = score.max(1);
        }
        let dist = (g.axis.aligned(player) - line).abs();
        if dist == closest && (g.axis.aligned(moved) - line).abs() > dist {
            score = score.max(1);
        }
    }
    Some(score)
}

/// Reconciles tracked groups with the wrecks the last step caused. Members
/// now sharing a cross coordinate just crashed: a group collapsed onto one
/// cell disappears, otherwise only still-solitary members survive. A single
/// survivor can never be wrecked, so the plan has failed.
fn drop_merged(groups: &mut Vec<Group>) -> Result<(), SolveError> {
    let mut kept = Vec::with_capacity(groups.len());
    for g in std::mem::take(groups) {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for &m in &g.members {
            *counts.entry(g.axis.cross(m)).or_default() += 1;
        }
        if counts.len() == 1 {
            continue;
        }
        if counts.len() == g.members.len() {
            kept.push(g);
            continue;
        }
        let survivors: Vec<Position> = g
            .members
            .iter()
            .copied()
            .filter(|&m| counts[&g.axis.cross(m)] == 1)
            .collect();
        match survivors.len() {
            0 => {}
            1 => return Err(SolveError::IncompleteMerge { at: survivors[0] }),
            _ => kept.push(Group {
                axis: g.axis,
                members: survivors,
            }),
        }
    }
    *groups = kept;
    Ok(())
}

/// Moves every tracked member one step toward the player and checks the
/// projection still matches the game: every tracked position is a live
/// robot and nothing is live untracked.
fn advance_tracked(groups: &mut [Group], game: &Game) -> Result<(), SolveError> {
    let player = game.player();
    let mut tracked = 0;
    for g in groups.iter_mut() {
        tracked += g.members.len();
        for m in g.members.iter_mut() {
            *m = m.step_toward(player);
            if !game.robots().contains(m) {
                return Err(SolveError::Inconsistency(format!(
                    "no robot at {m} where one was tracked"
                )));
            }
        }
    }
    if tracked != game.robots().len() {
        return Err(SolveError::Inconsistency(format!(
            "tracking {tracked} robots but {} are alive",
            game.robots().len()
        )));
    }
    Ok(())
}
