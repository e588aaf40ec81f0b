mod tests {
    use myrtio_light_scene::command::{AdminCommand, Command, SceneCommand, WireColor};
    use myrtio_light_scene::error::IngressError;
    use myrtio_light_scene::ingress::{DEFAULT_SCENE_BRIGHTNESS, decode};

    fn scene(line: &str) -> SceneCommand {
        match decode(line).unwrap() {
            Command::Scene(scene) => scene,
            Command::Admin(admin) => panic!("expected a scene, got {admin:?}"),
        }
    }

    #[test]
    fn test_decode_animated_scene() {
        let scene = scene(
            r##"{"id": "sunset", "animated": true, "animation": "Fade", "colors": ["#ff5500", [0, 0, 64]], "defaultBrightness": 180}"##,
        );

        assert_eq!(scene.id, "sunset");
        assert!(scene.animated);
        assert_eq!(scene.animation.as_deref(), Some("Fade"));
        assert_eq!(
            scene.colors,
            vec![WireColor::Hex("#ff5500".to_string()), WireColor::Rgb([0, 0, 64])]
        );
        assert_eq!(scene.default_brightness, 180);
    }

    #[test]
    fn test_decode_scene_defaults() {
        let scene = scene(r##"{"Id": "plain", "colors": ["00ff00"], "animation": ""}"##);

        assert_eq!(scene.id, "plain");
        assert!(!scene.animated);
        assert_eq!(scene.animation, None);
        assert_eq!(scene.default_brightness, DEFAULT_SCENE_BRIGHTNESS);
    }

    #[test]
    fn test_decode_brightness_as_text() {
        let scene = scene(r##"{"id": "a", "colors": ["#000000"], "defaultBrightness": " 42 "}"##);
        assert_eq!(scene.default_brightness, 42);

        let result = decode(r##"{"id": "a", "colors": [], "defaultBrightness": 300}"##);
        assert!(matches!(result, Err(IngressError::BadBrightness(_))));

        let result = decode(r##"{"id": "a", "colors": [], "defaultBrightness": "bright"}"##);
        assert!(matches!(result, Err(IngressError::BadBrightness(_))));
    }

    #[test]
    fn test_decode_admin_commands() {
        assert_eq!(
            decode(r#"{"functionCall": "off"}"#).unwrap(),
            Command::Admin(AdminCommand::Off)
        );
        assert_eq!(
            decode(r#"{"functionCall": "update_brightness", "value": "96"}"#).unwrap(),
            Command::Admin(AdminCommand::UpdateBrightness(96))
        );
        assert_eq!(
            decode(r#"{"functionCall": "update_brightness", "value": 7}"#).unwrap(),
            Command::Admin(AdminCommand::UpdateBrightness(7))
        );
    }

    #[test]
    fn test_function_call_wins_over_scene_fields() {
        assert_eq!(
            decode(r##"{"id": "a", "colors": ["#ffffff"], "functionCall": "off"}"##).unwrap(),
            Command::Admin(AdminCommand::Off)
        );
    }

    #[test]
    fn test_decode_rejects_malformed_messages() {
        assert!(matches!(decode("not json"), Err(IngressError::Json(_))));
        assert!(matches!(
            decode(r##"{"colors": ["#ffffff"]}"##),
            Err(IngressError::Message(_))
        ));
        assert!(matches!(
            decode(r#"{"id": "", "colors": []}"#),
            Err(IngressError::Message(_))
        ));
        assert!(matches!(
            decode(r#"{"functionCall": "update_brightness"}"#),
            Err(IngressError::Message(_))
        ));
        assert!(matches!(
            decode(r#"{"functionCall": "reboot"}"#),
            Err(IngressError::Message(_))
        ));
    }

    #[test]
    fn test_wire_color_normalization() {
        assert_eq!(
            WireColor::from("#102030").to_rgb(),
            Some(myrtio_light_scene::Rgb { r: 0x10, g: 0x20, b: 0x30 })
        );
        assert_eq!(WireColor::from("#10203").to_rgb(), None);
        assert_eq!(
            WireColor::Rgb([1, 2, 3]).to_rgb(),
            Some(myrtio_light_scene::Rgb { r: 1, g: 2, b: 3 })
        );
    }
}
