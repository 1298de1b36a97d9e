pub mod build_complex_grid;
pub mod lerp;
pub mod screen_to_plane;
