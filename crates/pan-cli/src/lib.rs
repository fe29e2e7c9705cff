//! Library components of the PAN validator CLI.

pub mod check;
pub mod logging;
pub mod pipeline;
