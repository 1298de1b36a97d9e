pub mod colour_map;
pub mod formula;
pub mod mandelbrot_config;
