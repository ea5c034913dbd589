pub mod escape_time;
pub mod seeds;
