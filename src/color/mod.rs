mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use utils::{BLACK, lerp_colors, parse_hex, rgb_from_u32, wheel};

pub type Rgb = RGB8;
pub type Hsv = HSV;
