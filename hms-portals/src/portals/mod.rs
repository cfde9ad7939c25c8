//! The portals reachable from the main menu.
//!
//! Menu-driven portals (`reception`, `patient`, `doctor`, `lab`) loop until
//! their Back entry; `feedback` and the `info` screens run once.

pub mod doctor;
pub mod feedback;
pub mod info;
pub mod lab;
pub mod patient;
pub mod reception;
