//! Log Shipping Unifier
//!
//! Combines "Transaction Log Shipping Status" Excel exports from one directory
//! into a single dated workbook.
//!
//! This library provides:
//! - `selector`: finding the exports in a directory
//! - `loader`: reading the composite and database-pair columns of one export
//! - `merger`: concatenating exports and deriving the integer ordering column
//! - `writer`: writing the stamped result workbook
//! - `pipeline`: the unify action tying the stages together
//! - `outcome`: the user-facing result of a run and the window's dialog state
//!
//! Binaries:
//! - `logship-ui`: desktop window with a directory field and a unify button
//! - `logship-union`: the same action from the command line

pub mod config;
pub mod error;
pub mod loader;
pub mod merger;
pub mod outcome;
pub mod pipeline;
pub mod selector;
pub mod table;
pub mod writer;

pub use config::UnifyConfig;
pub use error::UnifyError;
pub use outcome::{Acknowledgment, DialogLevel, Outcome, Session};
pub use pipeline::{unify, unify_at};
