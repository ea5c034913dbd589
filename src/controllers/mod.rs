pub mod cli;
pub mod compositor;
pub mod interactive;
pub mod ports;
