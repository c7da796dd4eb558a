#![warn(clippy::pedantic)]
// Noisy doc/signature lints — would require annotating most pub functions
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
// Style preference — keeping format!("{}", x) over format!("{x}") for readability with complex exprs
#![allow(clippy::uninlined_format_args)]
// Module structure — our store module has store::ChatStore pattern by design
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod composer;
pub mod config;
pub mod errors;
pub mod model;
pub mod pairing;
pub mod seed;
pub mod session;
pub mod store;
pub mod transport;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOGO: &str = "💬";
