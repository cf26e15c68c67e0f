use super::*;
use crate::board::Board;

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn game(player: (i32, i32), robots: &[(i32, i32)]) -> Game {
    let robots = robots.iter().map(|&(x, y)| p(x, y)).collect();
    Game::new(p(player.0, player.1), robots)
}

fn alive(crash: &str) -> Outcome {
    Outcome::Alive {
        crash: crash.to_string(),
    }
}

#[test]
fn player_moves_exactly_one_cell() {
    let mut g = game((0, 0), &[]);
    assert_eq!(g.step(Move::Up), alive(""));
    assert_eq!(g.player(), p(0, 1));
    g.step(Move::Right);
    assert_eq!(g.player(), p(1, 1));
    g.step(Move::Down);
    g.step(Move::Left);
    assert_eq!(g.player(), p(0, 0));
    assert!(!g.is_lost());
}

#[test]
fn moving_onto_robot_loses_and_robots_hold_still() {
    let mut g = game((0, 0), &[(1, 0), (5, 5)]);
    let outcome = g.step(Move::Right);
    assert_eq!(
        outcome,
        Outcome::Lost(LossReason::MovedIntoRobot { at: p(1, 0) })
    );
    assert!(g.is_lost());
    // Nothing else happens that turn.
    assert_eq!(g.robots(), vec![p(1, 0), p(5, 5)]);
}

#[test]
fn moving_onto_stacked_robots_still_loses() {
    // Two robots waiting to wreck each other do not make the cell safe.
    let mut g = game((0, 0), &[(0, 1), (0, 1)]);
    let outcome = g.step(Move::Up);
    assert_eq!(
        outcome,
        Outcome::Lost(LossReason::MovedIntoRobot { at: p(0, 1) })
    );
    assert_eq!(g.robots(), vec![p(0, 1), p(0, 1)]);
}

#[test]
fn robots_close_one_cell_on_each_axis() {
    let mut g = game((0, 0), &[(5, 5), (5, 0), (0, -5)]);
    assert_eq!(g.step(Move::Up), alive(""));
    // Player ended at (0, 1); every robot took one clamped step toward it.
    assert_eq!(g.robots(), vec![p(4, 4), p(4, 1), p(0, -4)]);
}

#[test]
fn sideways_dodge_does_not_disturb_y_convergence() {
    let mut g = game((0, 0), &[(0, 4), (0, -4)]);
    assert_eq!(g.step(Move::Left), alive(""));
    assert_eq!(g.robots(), vec![p(-1, 3), p(-1, -3)]);
}

#[test]
fn robot_reaching_player_reports_its_starting_cell() {
    let mut g = game((0, 0), &[(2, 1), (9, 9)]);
    let outcome = g.step(Move::Right);
    assert_eq!(
        outcome,
        Outcome::Lost(LossReason::KilledByRobot { from: p(2, 1) })
    );
    // The rest of the step still happened: the far robot moved too.
    assert_eq!(g.robots(), vec![p(1, 0), p(8, 8)]);
}

#[test]
fn diagonal_robot_lands_exactly_on_player() {
    let mut g = game((0, 0), &[(1, 1)]);
    let outcome = g.step(Move::Up);
    assert_eq!(
        outcome,
        Outcome::Lost(LossReason::KilledByRobot { from: p(1, 1) })
    );
}

#[test]
fn coincident_robots_wreck_before_anyone_moves() {
    let mut g = game((0, 0), &[(4, 0), (4, 0)]);
    assert_eq!(g.step(Move::Up), alive("crash at (4, 0)"));
    assert!(g.robots().is_empty());
    assert!(!g.is_lost());
}

#[test]
fn triple_pileup_wrecks_all_three() {
    let mut g = game((0, 0), &[(4, 2), (4, 2), (4, 2)]);
    assert_eq!(g.step(Move::Down), alive("crash at (4, 2)"));
    assert!(g.robots().is_empty());
}

#[test]
fn crash_cells_listed_in_first_encounter_order() {
    let mut g = game((0, 0), &[(5, 5), (2, 2), (5, 5), (2, 2), (9, 0)]);
    let outcome = g.step(Move::Up);
    assert_eq!(outcome, alive("crash at (5, 5) and (2, 2)"));
    // The lone survivor still took its step.
    assert_eq!(g.robots(), vec![p(8, 1)]);
}

#[test]
fn robots_merging_after_moving_survive_until_next_step() {
    // (3, 1) and (3, -1) both land on (2, 0) this step; the wreck is only
    // detected at the start of the following one.
    let mut g = game((0, 0), &[(3, 1), (3, -1)]);
    assert_eq!(g.step(Move::Left), alive(""));
    assert_eq!(g.robots(), vec![p(2, 0), p(2, 0)]);

    assert_eq!(g.step(Move::Left), alive("crash at (2, 0)"));
    assert!(g.robots().is_empty());
}

#[test]
fn loss_reasons_render_for_display() {
    let moved = LossReason::MovedIntoRobot { at: p(2, 0) };
    assert_eq!(moved.to_string(), "moved into robot at (2, 0)");
    let killed = LossReason::KilledByRobot { from: p(-2, 11) };
    assert_eq!(killed.to_string(), "robot at (-2, 11) killed us");
}

#[test]
fn state_line_round_trips_through_the_parser() {
    let g = game((5, 6), &[(3, 4), (-1, 2)]);
    let line = g.state_line();
    assert_eq!(line, "3 4 -1 2 5 6");
    let board: Board = line.parse().unwrap();
    assert_eq!(board.player, p(5, 6));
    assert_eq!(board.robots, vec![p(3, 4), p(-1, 2)]);
}

#[test]
fn state_line_appends_crash_text_after_a_separator() {
    let mut g = game((0, 0), &[(5, 5), (5, 5)]);
    assert_eq!(g.step(Move::Up), alive("crash at (5, 5)"));
    assert_eq!(g.state_line_with("crash at (5, 5)"), "0 1 -- crash at (5, 5)");
    assert_eq!(g.state_line_with(""), "0 1");
}

#[test]
fn play_all_stops_at_the_first_loss() {
    let mut g = game((0, 0), &[(3, 0)]);
    // r: player (1,0), robot (2,0). rr: player steps onto it. The trailing
    // moves never run.
    let outcome = g.play_all(&crate::direction::parse_moves("rrulld").unwrap());
    assert_eq!(
        outcome,
        Outcome::Lost(LossReason::MovedIntoRobot { at: p(2, 0) })
    );
    assert_eq!(g.player(), p(2, 0));
}

#[test]
fn play_all_of_nothing_is_a_quiet_survival() {
    let mut g = game((0, 0), &[(7, 7)]);
    assert_eq!(g.play_all(&[]), alive(""));
    assert_eq!(g.robots(), vec![p(7, 7)]);
}
