pub mod cancellation;
pub mod colourize;
pub mod compute_escape_times;
pub mod compute_image;
pub mod next_viewport;
