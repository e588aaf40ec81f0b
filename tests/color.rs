mod tests {
    use myrtio_light_scene::color::{BLACK, Rgb, lerp_colors, parse_hex, rgb_from_u32, wheel};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(rgb_from_u32(0x0000FF), BLUE);
        assert_eq!(
            rgb_from_u32(0x123456),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff0000"), Some(RED));
        assert_eq!(parse_hex("0000FF"), Some(BLUE));
        assert_eq!(parse_hex("  #FFFFFF "), Some(WHITE));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex("#ff00001"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#+12345"), None);
        assert_eq!(parse_hex("+fffff"), None);
        assert_eq!(parse_hex("-fffff"), None);
    }

    #[test]
    fn test_lerp_colors() {
        assert_eq!(lerp_colors(RED, BLUE, 0, 10), RED);
        assert_eq!(lerp_colors(RED, BLUE, 10, 10), BLUE);
        assert_eq!(
            lerp_colors(BLACK, WHITE, 5, 10),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn test_wheel() {
        let red = wheel(0);
        assert!(red.r > red.g && red.r > red.b);
        assert_ne!(wheel(0), wheel(128));
    }
}
