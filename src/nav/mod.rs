pub mod exchange;
pub mod lookup;
pub mod sexp;

pub use exchange::exchange_point_and_mark;
pub use lookup::{character_after, character_before};
pub use sexp::{MovePlan, Navigation, backward_sexp, forward_sexp, navigate_sexp};
