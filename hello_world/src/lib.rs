mod program;

pub use program::GREETING;
pub use program::main;
pub use program::run;
