pub mod dynamics;
pub mod gravity;
pub mod ground;
pub mod thrust;
