use crate::core::data::colour::Colour;

/// Maps one iteration-grid value to a colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, value: u32) -> Colour;

    fn display_name(&self) -> &str;
}
