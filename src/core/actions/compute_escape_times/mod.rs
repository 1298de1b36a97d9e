pub mod compute_escape_times;
pub mod ports;
