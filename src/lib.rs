//! Drover: Account-File Work Queue with Randomized Template Content
//!
//! Drives a pool of throwaway ledger accounts through one action each. A flat
//! directory holds one credential file per account; the queue snapshots the
//! directory, extracts a posting key from each file, performs the bound action
//! through a ledger client, and removes the file. Content-producing actions
//! draw their text from a mad-libs template engine or an external content API.

pub mod account;
pub mod actions;
pub mod config;
pub mod content;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod queue;
pub mod template;
