pub mod context;
pub mod coords;
pub mod interaction;
pub mod markers;
pub mod projection;
