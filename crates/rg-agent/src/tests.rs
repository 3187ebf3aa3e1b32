//! Unit tests for rg-agent.

use rg_core::{AgentId, Command, HeadingId};
use rg_grid::{Grid, GridBounds};

use crate::{Agent, AgentController, AgentError, ControllerState, FinalState};

// ── Helpers ───────────────────────────────────────────────────────────────────

const N: HeadingId = HeadingId(0);
const E: HeadingId = HeadingId(1);
const S: HeadingId = HeadingId(2);
const W: HeadingId = HeadingId(3);

fn grid(max_x: u32, max_y: u32) -> Grid {
    Grid::compass(GridBounds::new(max_x, max_y)).unwrap()
}

/// Place a fresh controller, run `symbols`, and return its report.
fn run(g: &Grid, x: u32, y: u32, heading: &str, symbols: &str) -> FinalState {
    let mut c = AgentController::new(AgentId(0));
    c.place_named(g, x, y, heading).unwrap();
    c.execute_symbols(g, symbols).unwrap();
    c.report(g).unwrap()
}

fn state(x: u32, y: u32, heading: &str) -> FinalState {
    FinalState { x, y, heading: heading.to_owned() }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use rg_core::Rotation;

    use super::*;

    #[test]
    fn rotate_right_cycles_compass() {
        let g = grid(2, 2);
        let mut a = Agent::new(g.node_at(1, 1).unwrap(), N);
        let mut seen = vec![];
        for _ in 0..4 {
            a.rotate(Rotation::Right, g.directions());
            seen.push(a.heading());
        }
        assert_eq!(seen, [E, S, W, N]);
    }

    #[test]
    fn rotate_left_from_north_wraps_to_west() {
        let g = grid(2, 2);
        let mut a = Agent::new(g.node_at(1, 1).unwrap(), N);
        a.rotate(Rotation::Left, g.directions());
        assert_eq!(a.heading(), W);
    }

    #[test]
    fn rotate_does_not_move() {
        let g = grid(2, 2);
        let start = g.node_at(1, 1).unwrap();
        let mut a = Agent::new(start, N);
        a.rotate(Rotation::Left, g.directions());
        a.rotate(Rotation::Left, g.directions());
        assert_eq!(a.position(), start);
    }

    #[test]
    fn advance_follows_heading() {
        let g = grid(3, 3);
        let mut a = Agent::new(g.node_at(1, 1).unwrap(), E);
        assert!(a.advance(&g));
        let pose = a.current_state(&g);
        assert_eq!((pose.x, pose.y, pose.heading), (2, 1, E));
    }

    #[test]
    fn advance_at_edge_is_noop() {
        let g = grid(3, 3);
        let start = g.node_at(0, 3).unwrap();
        let mut a = Agent::new(start, N);
        assert!(!a.advance(&g));
        assert_eq!(a.position(), start);
        let mut a = Agent::new(start, W);
        assert!(!a.advance(&g));
        assert_eq!(a.position(), start);
        assert_eq!(a.heading(), W);
    }
}

// ── Controller state machine ──────────────────────────────────────────────────

#[cfg(test)]
mod controller {
    use super::*;

    #[test]
    fn new_controller_is_unplaced() {
        let c = AgentController::new(AgentId(4));
        assert_eq!(c.state(), ControllerState::Unplaced);
        assert!(c.agent().is_none());
        assert_eq!(c.id(), AgentId(4));
    }

    #[test]
    fn place_then_report() {
        let g = grid(5, 5);
        let mut c = AgentController::new(AgentId(0));
        c.place(&g, 1, 2, N).unwrap();
        assert_eq!(c.state(), ControllerState::Placed);
        assert_eq!(c.report(&g).unwrap(), state(1, 2, "N"));
    }

    #[test]
    fn double_place_fails() {
        let g = grid(5, 5);
        let mut c = AgentController::new(AgentId(2));
        c.place(&g, 0, 0, N).unwrap();
        let err = c.place(&g, 1, 1, S).unwrap_err();
        assert_eq!(err, AgentError::AlreadyPlaced(AgentId(2)));
        // First placement is untouched.
        assert_eq!(c.report(&g).unwrap(), state(0, 0, "N"));
    }

    #[test]
    fn execute_before_place_fails() {
        let g = grid(5, 5);
        let mut c = AgentController::new(AgentId(1));
        assert_eq!(
            c.execute(&g, &[Command::Advance]).unwrap_err(),
            AgentError::NotPlaced(AgentId(1))
        );
        assert_eq!(
            c.execute_symbols(&g, "M").unwrap_err(),
            AgentError::NotPlaced(AgentId(1))
        );
    }

    #[test]
    fn report_before_place_fails() {
        let g = grid(5, 5);
        let c = AgentController::new(AgentId(3));
        assert_eq!(c.report(&g).unwrap_err(), AgentError::NotPlaced(AgentId(3)));
    }

    #[test]
    fn place_outside_grid_fails() {
        let g = grid(2, 2);
        let mut c = AgentController::new(AgentId(0));
        assert!(matches!(c.place(&g, 3, 0, N), Err(AgentError::Grid(_))));
        assert_eq!(c.state(), ControllerState::Unplaced);
    }

    #[test]
    fn place_with_unknown_heading_fails() {
        let g = grid(2, 2);
        let mut c = AgentController::new(AgentId(0));
        assert!(matches!(c.place(&g, 0, 0, HeadingId(7)), Err(AgentError::Core(_))));
        assert!(matches!(c.place_named(&g, 0, 0, "Q"), Err(AgentError::Core(_))));
        assert_eq!(c.state(), ControllerState::Unplaced);
    }

    #[test]
    fn typed_commands_reach_done() {
        let g = grid(5, 5);
        let mut c = AgentController::new(AgentId(0));
        c.place(&g, 0, 0, N).unwrap();
        c.execute(&g, &[Command::Advance, Command::Right, Command::Advance]).unwrap();
        assert_eq!(c.state(), ControllerState::Done);
        assert_eq!(c.report(&g).unwrap(), state(1, 1, "E"));
    }

    #[test]
    fn execute_after_done_keeps_applying() {
        let g = grid(5, 5);
        let mut c = AgentController::new(AgentId(0));
        c.place(&g, 0, 0, N).unwrap();
        c.execute_symbols(&g, "M").unwrap();
        c.execute_symbols(&g, "M").unwrap();
        assert_eq!(c.state(), ControllerState::Done);
        assert_eq!(c.report(&g).unwrap(), state(0, 2, "N"));
    }

    #[test]
    fn other_grid_is_rejected() {
        let placed_on = grid(5, 5);
        let other = grid(2, 7);
        let mut c = AgentController::new(AgentId(6));
        c.place(&placed_on, 4, 4, E).unwrap();

        let expected = AgentError::WrongGrid {
            agent:  AgentId(6),
            placed: GridBounds::new(5, 5),
            given:  GridBounds::new(2, 7),
        };
        assert_eq!(c.execute_symbols(&other, "M").unwrap_err(), expected);
        assert_eq!(c.execute(&other, &[Command::Advance]).unwrap_err(), expected);
        assert_eq!(c.report(&other).unwrap_err(), expected);

        // Nothing moved; the original grid still works.
        assert_eq!(c.state(), ControllerState::Placed);
        assert_eq!(c.report(&placed_on).unwrap(), state(4, 4, "E"));
    }

    #[test]
    fn empty_command_stream() {
        let g = grid(5, 5);
        assert_eq!(run(&g, 4, 4, "W", ""), state(4, 4, "W"));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn scenario_a() {
        let g = grid(5, 5);
        assert_eq!(run(&g, 1, 2, "N", "LMLMLMLMM"), state(1, 3, "N"));
    }

    #[test]
    fn scenario_b() {
        let g = grid(5, 5);
        assert_eq!(run(&g, 3, 3, "E", "MMRMMRMRRM"), state(5, 1, "E"));
    }

    #[test]
    fn boundary_clamp() {
        let g = grid(1, 1);
        assert_eq!(run(&g, 0, 0, "S", "M"), state(0, 0, "S"));
    }

    #[test]
    fn runs_along_edge_and_stops() {
        let g = grid(3, 0);
        assert_eq!(run(&g, 0, 0, "E", "MMMMMMM"), state(3, 0, "E"));
    }

    #[test]
    fn malformed_command_keeps_prior_state() {
        let g = grid(5, 5);
        let mut c = AgentController::new(AgentId(7));
        c.place_named(&g, 1, 1, "N").unwrap();
        let err = c.execute_symbols(&g, "MMRXM").unwrap_err();
        assert_eq!(
            err,
            AgentError::MalformedCommand { agent: AgentId(7), symbol: 'X', position: 3 }
        );
        // "MMR" applied, trailing "M" not.
        assert_eq!(c.report(&g).unwrap(), state(1, 3, "E"));
        assert_eq!(c.state(), ControllerState::Placed);
    }

    #[test]
    fn two_agents_share_a_grid_independently() {
        let g = grid(5, 5);
        let mut a = AgentController::new(AgentId(0));
        let mut b = AgentController::new(AgentId(1));
        a.place_named(&g, 2, 2, "N").unwrap();
        b.place_named(&g, 2, 2, "S").unwrap();
        a.execute_symbols(&g, "MM").unwrap();
        assert_eq!(b.report(&g).unwrap(), state(2, 2, "S"));
        b.execute_symbols(&g, "M").unwrap();
        assert_eq!(a.report(&g).unwrap(), state(2, 4, "N"));
        assert_eq!(b.report(&g).unwrap(), state(2, 1, "S"));
    }

    #[test]
    fn final_state_display() {
        assert_eq!(state(5, 1, "E").to_string(), "5 1 E");
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![Just(Command::Left), Just(Command::Right), Just(Command::Advance)]
    }

    proptest! {
        #[test]
        fn agent_never_leaves_grid(
            max_x in 0u32..6,
            max_y in 0u32..6,
            commands in proptest::collection::vec(command(), 0..80),
        ) {
            let g = grid(max_x, max_y);
            let mut c = AgentController::new(AgentId(0));
            c.place(&g, 0, 0, N).unwrap();
            c.execute(&g, &commands).unwrap();
            let s = c.report(&g).unwrap();
            prop_assert!(s.x <= max_x && s.y <= max_y);
        }

        #[test]
        fn typed_and_symbol_streams_agree(commands in proptest::collection::vec(command(), 0..40)) {
            let g = grid(4, 4);
            let symbols: String = commands.iter().map(|c| c.symbol()).collect();

            let mut typed = AgentController::new(AgentId(0));
            typed.place(&g, 2, 2, N).unwrap();
            typed.execute(&g, &commands).unwrap();

            let mut lettered = AgentController::new(AgentId(1));
            lettered.place(&g, 2, 2, N).unwrap();
            lettered.execute_symbols(&g, &symbols).unwrap();

            prop_assert_eq!(typed.report(&g).unwrap(), lettered.report(&g).unwrap());
        }
    }
}
