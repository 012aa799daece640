//! Intent-based instruction building.
//!
//! An intent is a plain JSON object naming a command and its arguments, so
//! the front-end can describe a call without constructing typed values.
//!
//! # Usage from TypeScript
//!
//! ```typescript
//! const ix = InstructionNamespace.buildFromIntent(programId, {
//!   command: 'joinLeague',
//!   root, bank, owner,
//!   leagueId: 7,
//! });
//! // ix.programId, ix.keys, ix.data
//! ```

mod build;
mod types;

pub use build::{build_from_intent, parse_intent, parse_players};
pub use types::*;
