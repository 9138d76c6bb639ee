// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod engine;
pub mod error;
pub mod events;
pub mod format;
pub mod info;
pub mod input;
pub mod laps;
pub mod manager_msg;
pub mod stopwatch;
pub mod utils;
