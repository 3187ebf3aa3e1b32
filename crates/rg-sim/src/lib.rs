//! `rg-sim`: run orchestrator for the rover_grid simulator.
//!
//! # Run loop
//!
//! ```text
//! build: DirectionSet → Grid(bounds, directions)
//! run:   for agent in input order:
//!          ① on_agent_start
//!          ② place     : controller puts the agent on the shared grid
//!          ③ execute   : command letters applied left to right
//!          ④ report    : final (x, y, heading name)
//!          ⑤ on_agent_end
//!          on failure: Abort   → return the error, later agents never run
//!                      Isolate → record the failure, continue
//! ```
//!
//! Agents run strictly one after another.  The grid is read-only once built,
//! so agents never see each other.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rg_input::parse_mission;
//! use rg_sim::{NoopObserver, SimBuilder};
//!
//! let mission = parse_mission("5 5\n1 2 N\nLMLMLMLMM\n")?;
//! let mut sim = SimBuilder::from_mission(mission).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! for state in report.final_states() {
//!     println!("{state}");
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{FailurePolicy, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{AgentOutcome, SimReport, Simulation};
