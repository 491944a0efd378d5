pub use costcalc_types::prelude::*;

// vim: ts=4
