pub mod counter;
pub mod log_once;
pub mod timer;
