// Author: Dustin Pilgrim
// License: MIT

pub mod command;
pub mod foreground;
pub mod platform;
