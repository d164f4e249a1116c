#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{InputEvent, MouseButton};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::BindingError;
    use crate::state::BindingScreenView;
    use crate::types::{Rect, Transform};

    #[test]
    fn test_fire_mode_toggle_is_involution() {
        for mode in [FireMode::FireAll, FireMode::RippleFire] {
            assert_ne!(mode, mode.toggled());
            assert_eq!(mode, mode.toggled().toggled());
        }
        assert_eq!(FireMode::default(), FireMode::FireAll);
    }

    #[test]
    fn test_fire_mode_texts() {
        assert_eq!(FireMode::FireAll.subtext(), "Fire All");
        assert_eq!(FireMode::RippleFire.subtext(), "Ripple Fire");
        assert!(FireMode::RippleFire.hint().starts_with("Ripple Fire alternates"));
    }

    #[test]
    fn test_ai_behavior_flag_round_trip() {
        for behavior in AiBehavior::ALL {
            assert_eq!(AiBehavior::from_flags(behavior.flag()), behavior);
        }
    }

    #[test]
    fn test_ai_behavior_ignores_unrelated_flags() {
        let flags = CommandFlags::AUTO_FIRE | CommandFlags::REMOTE | CommandFlags::ALWAYS_KITE;
        assert_eq!(AiBehavior::from_flags(flags), AiBehavior::Kite);
        assert_eq!(
            AiBehavior::from_flags(CommandFlags::AUTO_FIRE),
            AiBehavior::Dynamic
        );
    }

    #[test]
    fn test_weapon_features() {
        assert!(BlockFeatures::WEAPON.contains(BlockFeatures::CANNON));
        assert!(BlockFeatures::WEAPON.contains(BlockFeatures::LASER));
        assert!(BlockFeatures::WEAPON.contains(BlockFeatures::LAUNCHER));
        assert!(!BlockFeatures::WEAPON.intersects(BlockFeatures::COMMAND | BlockFeatures::ARMOR));
        let turret = BlockFeatures::CANNON | BlockFeatures::POINT_DEFENSE;
        assert!(turret.intersects(BlockFeatures::WEAPON));
    }

    #[test]
    fn test_group_constants_consistent() {
        assert!(FG_AUTO < FG_COUNT);
        assert!(FG_DEFENSE > FG_AUTO, "point defense must have no fire mode");
        assert_eq!(FIRE_MODE_GROUPS, FG_AUTO + 1);
        assert_eq!(DEFAULT_DEFENSE_BINDING as usize, FG_DEFENSE + 1);
        assert!(FIRE_KEY_COUNT <= FG_COUNT);
    }

    /// Input events arrive as tagged JSON objects in the host's input feed.
    #[test]
    fn test_input_event_json_shape() {
        let json = r#"{"type":"MouseDown","button":"Primary","pos":[10.0,20.0],"time_secs":1.5}"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            InputEvent::MouseDown {
                button: MouseButton::Primary,
                pos: Vec2::new(10.0, 20.0),
                time_secs: 1.5,
            }
        );
        assert!(event.is_press());
        assert_eq!(event.position(), Some(Vec2::new(10.0, 20.0)));

        let escape: InputEvent = serde_json::from_str(r#"{"type":"Escape"}"#).unwrap();
        assert!(escape.is_escape());
        assert_eq!(escape.position(), None);
    }

    #[test]
    fn test_transform_apply() {
        let t = Transform::new(Vec2::new(10.0, 0.0), std::f32::consts::FRAC_PI_2);
        let p = t.apply(Vec2::new(1.0, 0.0));
        assert!((p - Vec2::new(10.0, 1.0)).length() < 1e-5, "got {p:?}");
        assert_eq!(Transform::IDENTITY.apply(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert!(r.contains(Vec2::new(50.0, 50.0)));
        assert!(r.contains(Vec2::new(60.0, 55.0)));
        assert!(!r.contains(Vec2::new(61.0, 50.0)));
        assert!(!r.contains(Vec2::new(50.0, 56.0)));
        assert_eq!(r.min(), Vec2::new(40.0, 45.0));

        // Unlaid-out buttons must not catch clicks at the origin.
        assert!(!Rect::default().contains(Vec2::ZERO));
        assert!(!Rect::new(Vec2::ZERO, Vec2::new(-4.0, 4.0)).contains(Vec2::ZERO));
    }

    #[test]
    fn test_empty_view_serde() {
        let view = BindingScreenView::default();
        let json = serde_json::to_string(&view).unwrap();
        let back: BindingScreenView = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, ScreenPhase::Inactive);
        assert!(!back.dirty);
        assert!(
            json.len() < 512,
            "Empty view should be <512 bytes, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_binding_error_messages() {
        let err = BindingError::FireModeOutOfRange {
            index: 5,
            last: FG_AUTO,
        };
        assert_eq!(
            err.to_string(),
            "fire group 5 has no fire mode (modes end at group 4)"
        );
        assert_eq!(
            BindingError::BindingOutOfRange {
                binding_id: 0,
                count: 6
            }
            .to_string(),
            "binding id 0 names no fire group (valid ids are 1..=6)"
        );
    }
}
