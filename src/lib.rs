pub mod errors;
pub mod alphabet;
pub mod aligner;
pub mod io;
