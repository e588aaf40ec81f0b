mod tests {
    use myrtio_light_scene::math8::{lerp8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        assert_eq!(scale8(255, 255), 255);
    }

    #[test]
    fn test_lerp8() {
        assert_eq!(lerp8(0, 100, 0, 10), 0);
        assert_eq!(lerp8(0, 100, 5, 10), 50);
        assert_eq!(lerp8(0, 100, 10, 10), 100);
        assert_eq!(lerp8(200, 100, 5, 10), 150);
        assert_eq!(lerp8(255, 0, 1, 3), 170);
        assert_eq!(lerp8(10, 20, 0, 0), 20);
        assert_eq!(lerp8(10, 20, 12, 10), 20);
    }
}
