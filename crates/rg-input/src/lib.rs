//! `rg-input`: turns mission files into typed records.
//!
//! Nothing here knows about grids-as-graphs or agents; the output is plain
//! data ([`MissionInput`], [`AgentRecord`]) that `rg-sim` consumes.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`record`] | `MissionInput`, `AgentRecord`                         |
//! | [`text`]   | `load_mission`, `load_mission_reader`, `parse_mission`|
//! | [`csv`]    | `load_agents_csv`, `load_agents_reader`               |
//! | [`error`]  | `InputError`, `InputResult<T>`                        |

pub mod csv;
pub mod error;
pub mod record;
pub mod text;

mod validate;


pub use crate::csv::{load_agents_csv, load_agents_reader};
pub use error::{InputError, InputResult};
pub use record::{AgentRecord, MissionInput};
pub use text::{load_mission, load_mission_reader, parse_mission};
