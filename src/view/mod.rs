// src/view/mod.rs

//! View-state machines shared by every page: the load lifecycle, the
//! carousel cursor with its timer, and the visibility gate.

mod carousel;
mod load;
mod visibility;

pub use carousel::{AutoAdvance, Carousel};
pub use load::{DataView, FetchTicket, LoadState, ViewPhase};
pub use visibility::{GatePolicy, VisibilityGate, VisibilitySubscription};
