// Author: Dustin Pilgrim
// License: MIT

pub mod keyboard;
pub mod presenter;
pub mod ticker;
