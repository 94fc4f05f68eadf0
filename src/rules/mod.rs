//! Game rules evaluated over the board.
//!
//! - `EliminationRules`: Life, poison and single-source commander damage
//! - `GameResult`: Winner or draw once at most one player remains
//!
//! Nothing here mutates state or enforces anything. Rules only flag players;
//! every counter stays editable.

pub mod elimination;
pub mod outcome;

pub use elimination::{EliminationCause, EliminationCauses, EliminationRules};
pub use outcome::GameResult;
