use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Banded palette driven by modular byte arithmetic.
///
/// `shade = (255 - 7v) mod 256`, then each channel is `k * shade` in byte
/// arithmetic (mod 256) reduced mod 255, with `k` = 1, 2, 3. Values wrap
/// instead of saturating, which is what produces the repeating bands.
#[derive(Debug, Copy, Clone, Default)]
pub struct ModularShadeColourMap;

impl ModularShadeColourMap {
    #[must_use]
    pub fn shade(value: u32) -> u8 {
        // truncating to u8 first is exact: 256 divides 2^32
        255u8.wrapping_sub((value as u8).wrapping_mul(7))
    }
}

impl ColourMap for ModularShadeColourMap {
    fn map(&self, value: u32) -> Colour {
        let shade = Self::shade(value);

        Colour {
            r: shade % 255,
            g: shade.wrapping_mul(2) % 255,
            b: shade.wrapping_mul(3) % 255,
        }
    }

    fn display_name(&self) -> &str {
        "Modular shade"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_wraps_modulo_256() {
        assert_eq!(ModularShadeColourMap::shade(0), 255);
        assert_eq!(ModularShadeColourMap::shade(1), 248);
        // 255 - 707 = -452 = 60 (mod 256)
        assert_eq!(ModularShadeColourMap::shade(101), 60);
        // 255 - 1057 = -802 = 222 (mod 256)
        assert_eq!(ModularShadeColourMap::shade(151), 222);
    }

    #[test]
    fn test_shade_matches_wide_arithmetic() {
        for value in [0u32, 5, 36, 37, 255, 256, 1000, 70_000, u32::MAX] {
            let wide = (255i64 - 7 * i64::from(value)).rem_euclid(256) as u8;

            assert_eq!(ModularShadeColourMap::shade(value), wide, "value {}", value);
        }
    }

    #[test]
    fn test_map_first_iteration() {
        let colour = ModularShadeColourMap.map(1);

        // 496 = 240 and 744 = 232 (mod 256)
        assert_eq!(colour, Colour { r: 248, g: 240, b: 232 });
    }

    #[test]
    fn test_map_legacy_inside_value() {
        let colour = ModularShadeColourMap.map(101);

        assert_eq!(colour, Colour { r: 60, g: 120, b: 180 });
    }

    #[test]
    fn test_channels_wrap_to_a_byte_before_reducing() {
        // shade 222: 444 = 188 and 666 = 154 (mod 256)
        let colour = ModularShadeColourMap.map(151);

        assert_eq!(colour, Colour { r: 222, g: 188, b: 154 });
    }

    #[test]
    fn test_full_shade_only_clears_red() {
        // 255 % 255 = 0, while 510 = 254 and 765 = 253 (mod 256)
        assert_eq!(ModularShadeColourMap.map(0), Colour { r: 0, g: 254, b: 253 });
    }

    #[test]
    fn test_map_is_deterministic() {
        for value in 0..300 {
            assert_eq!(ModularShadeColourMap.map(value), ModularShadeColourMap.map(value));
        }
    }
}
