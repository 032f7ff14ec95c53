pub mod console;
pub mod file_ops;
pub mod hash;
pub mod picker;
pub mod xdelta;
