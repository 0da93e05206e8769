//! 2D animated mobile crane.
//!
//! Five rigid parts: chassis body, wheels, turret platform, boom, and
//! cable+hook. The chassis group shares one matrix; the boom group hangs
//! off a pivot on the rotating chassis.

pub mod input;
pub mod parts;
pub mod pose;
pub mod state;
