pub use crate::app::App;
pub use costcalc_types::prelude::*;

// vim: ts=4
