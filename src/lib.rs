//! wasm-sfs: instruction encoding for the Solana Fantasy Sports program.
//!
//! Turns typed calls ("create a league", "pick a player") into the exact
//! instruction bytes and account lists the on-chain program expects. Nothing
//! here signs, sends or waits; the resulting `Instruction` is handed to
//! whatever assembles and signs the transaction.
//!
//! # Architecture
//!
//! 1. **Layout primitives** (`layout`) - fixed-width little-endian encoders
//! 2. **Instruction builders** (`instruction`) - one builder per command
//! 3. **Intents** (`intent`) - JSON-shaped input from JavaScript
//! 4. **WASM bindings** (`wasm/`) - thin wrappers that expose the builders to JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_sfs::{create_join_league_instruction, Command, Pubkey};
//!
//! let program_id = Pubkey::from([1u8; 32]);
//! let root = Pubkey::from([2u8; 32]);
//! let bank = Pubkey::from([3u8; 32]);
//! let owner = Pubkey::from([4u8; 32]);
//!
//! let ix = create_join_league_instruction(&program_id, &root, &bank, 7, &owner);
//! assert_eq!(ix.data, vec![Command::JoinLeague.ordinal(), 7, 0]);
//! ```

pub mod command;
pub mod constants;
mod error;
pub mod instruction;
pub mod intent;
pub mod layout;
pub mod pubkey;
pub mod state;
pub mod wasm;

// Re-export core types at crate root
pub use command::Command;
pub use error::{SfsError, ShapeViolation};
pub use instruction::{
    create_add_players_instruction, create_create_league_instruction,
    create_initialize_root_instruction, create_join_league_instruction,
    create_pick_player_instruction, create_seed_draft_selection_instruction,
    create_update_player_score_instruction, SfsInstruction,
};
pub use pubkey::{Pubkey, PubkeyExt};
pub use solana_sdk::instruction::{AccountMeta, Instruction};
pub use state::{Player, Position};

// Re-export WASM types
pub use wasm::InstructionNamespace;
