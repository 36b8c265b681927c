//! Compiled-in Minecraft map colors.
//!
//! Entry order is significant: lookups scan front to back and keep the
//! first hit. Every abbreviation is the placeholder `"ABBR."`, which is
//! kept as-is so abbreviated output stays stable for existing users.

use super::palette::PaletteEntry;
use crate::color::Rgb;

/// Placeholder abbreviation carried by every block entry.
const PLACEHOLDER: &str = "ABBR.";

/// Fallback entry displayed when exact matching finds nothing.
pub const UNKNOWN: PaletteEntry = PaletteEntry::new("UNKN.", 0, "UNKNOWN", Rgb::new(0, 0, 0));

const fn block(id: u8, name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry::new(PLACEHOLDER, id, name, Rgb::new(r, g, b))
}

/// The 58 base map colors, ordered by id.
pub const BLOCK_COLORS: [PaletteEntry; 58] = [
    block(1, "GRASS", 127, 178, 56),
    block(2, "SAND", 47, 233, 163),
    block(3, "WOOL", 199, 199, 199),
    block(4, "FIRE", 255, 0, 0),
    block(5, "ICE", 160, 160, 255),
    block(6, "METAL", 167, 167, 167),
    block(7, "PLANT", 0, 124, 0),
    block(8, "SNOW", 255, 255, 255),
    block(9, "CLAY", 164, 168, 184),
    block(10, "DIRT", 151, 109, 77),
    block(11, "STONE", 112, 112, 112),
    block(12, "WATER", 64, 64, 255),
    block(13, "WOOD", 143, 119, 72),
    block(14, "QUARTZ", 255, 252, 245),
    block(15, "COLOR_ORANGE", 216, 127, 51),
    block(16, "COLOR_MAGENTA", 178, 76, 216),
    block(17, "COLOR_LIGHT_BLUE", 102, 153, 216),
    block(18, "COLOR_YELLOW", 229, 229, 51),
    block(19, "COLOR_LIGHT_GREEN", 127, 204, 25),
    block(20, "COLOR_PINK", 242, 127, 165),
    block(21, "COLOR_GRAY", 76, 76, 76),
    block(22, "COLOR_LIGHT_GRAY", 153, 153, 153),
    block(23, "COLOR_CYAN", 76, 127, 153),
    block(24, "COLOR_PURPLE", 127, 63, 178),
    block(25, "COLOR_BLUE", 51, 76, 178),
    block(26, "COLOR_BROWN", 102, 76, 51),
    block(27, "COLOR_GREEN", 102, 127, 51),
    block(28, "COLOR_RED", 153, 51, 51),
    block(29, "COLOR_BLACK", 25, 25, 25),
    block(30, "GOLD", 250, 238, 77),
    block(31, "DIAMOND", 92, 219, 213),
    block(32, "LAPIS", 74, 128, 255),
    block(33, "EMERALD", 0, 217, 58),
    block(34, "PODZOL", 129, 86, 49),
    block(35, "NETHER", 112, 2, 0),
    block(36, "TERRACOTTA_WHITE", 209, 177, 161),
    block(37, "TERRACOTTA_ORANGE", 159, 82, 36),
    block(38, "TERRACOTTA_MAGENTA", 149, 87, 108),
    block(39, "TERRACOTTA_LIGHT_BLUE", 112, 108, 138),
    block(40, "TERRACOTTA_YELLOW", 186, 133, 36),
    block(41, "TERRACOTTA_LIGHT_GREEN", 103, 117, 53),
    block(42, "TERRACOTTA_PINK", 160, 77, 78),
    block(43, "TERRACOTTA_GRAY", 57, 41, 35),
    block(44, "TERRACOTTA_LIGHT_GRAY", 135, 107, 98),
    block(45, "TERRACOTTA_CYAN", 87, 92, 92),
    block(46, "TERRACOTTA_PURPLE", 122, 73, 88),
    block(47, "TERRACOTTA_BLUE", 76, 62, 92),
    block(48, "TERRACOTTA_BROWN", 76, 50, 35),
    block(49, "TERRACOTTA_GREEN", 76, 82, 42),
    block(50, "TERRACOTTA_RED", 142, 60, 46),
    block(51, "TERRACOTTA_BLACK", 37, 22, 16),
    block(52, "CRIMSON_NYLIUM", 189, 48, 49),
    block(53, "CRIMSON_STEM", 148, 63, 97),
    block(54, "CRIMSON_HYPHAE", 92, 25, 29),
    block(55, "WARPED_NYLIUM", 22, 126, 134),
    block(56, "WARPED_STEM", 58, 142, 140),
    block(57, "WARPED_HYPHAE", 86, 44, 62),
    block(58, "WARPED_WART_BLOCK", 20, 180, 133),
];
