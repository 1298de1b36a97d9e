pub mod colour;
pub mod complex;
pub mod grid_point;
pub mod iteration_grid;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
