#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::Vec2;
    use crate::metrics::*;
    use crate::style::{Border, Modifier, PaddingValues};

    #[test]
    fn test_scale_identity_at_reference_width() {
        // No locals installed: default metrics are reference-sized.
        assert_eq!(scale(300.0), 300.0);
        assert_eq!(font_scale(16.0), 16.0);
    }

    #[test]
    fn test_scale_proportional() {
        let narrow = ScreenMetrics {
            width: 337.5,
            height: 812.0,
        };
        with_screen_metrics(narrow, || {
            assert!((scale(150.0) - 135.0).abs() < 1e-4);
            assert!((scale(0.0)).abs() < 1e-4);
            // negative values pass straight through the mapping
            assert!((scale(-10.0) + 9.0).abs() < 1e-4);
        });
    }

    #[test]
    fn test_font_scale_applies_user_preference() {
        let narrow = ScreenMetrics {
            width: 337.5,
            height: 812.0,
        };
        with_screen_metrics(narrow, || {
            with_font_scale(FontScale(1.1), || {
                assert!((font_scale(20.0) - 19.8).abs() < 1e-4);
                // plain scale is unaffected by the font preference
                assert!((scale(20.0) - 18.0).abs() < 1e-4);
            });
        });
    }

    #[test]
    fn test_locals_nest_and_restore() {
        let outer = ScreenMetrics {
            width: 750.0,
            height: 1334.0,
        };
        let inner = ScreenMetrics {
            width: 375.0,
            height: 812.0,
        };
        with_screen_metrics(outer, || {
            assert_eq!(scale(100.0), 200.0);
            with_screen_metrics(inner, || {
                assert_eq!(scale(100.0), 100.0);
            });
            // outer frame wins again once the inner scope pops
            assert_eq!(scale(100.0), 200.0);
        });
        assert_eq!(scale(100.0), 100.0);
    }

    #[test]
    fn test_du_to_px() {
        with_screen_metrics(
            ScreenMetrics {
                width: 750.0,
                height: 1334.0,
            },
            || {
                assert_eq!(Du(15.0).to_px(), 30.0);
                assert_eq!(du_to_px(15.0), 30.0);
            },
        );
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
        // shorthand expands per digit
        assert_eq!(Color::from_hex("#333"), Color(51, 51, 51, 255));
        assert_eq!(Color::from_hex("#ddd"), Color(221, 221, 221, 255));
        // malformed falls back to opaque black
        assert_eq!(Color::from_hex("#zz5733"), Color::BLACK);
    }

    #[test]
    fn test_color_parse_named_and_fallback() {
        assert_eq!(Color::try_parse("white").unwrap(), Color::WHITE);
        assert_eq!(Color::try_parse(" White ").unwrap(), Color::WHITE);
        assert_eq!(Color::try_parse("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(Color::try_parse("#333").unwrap(), Color(51, 51, 51, 255));
        assert!(Color::try_parse("chartreuse-ish").is_err());
        assert_eq!(Color::parse_or("not-a-color", Color::WHITE), Color::WHITE);
        assert_eq!(Color::parse_or("#ddd", Color::WHITE), Color(221, 221, 221, 255));
    }

    #[test]
    fn test_modifier_over_replaces_set_fields_only() {
        let base = Modifier::new()
            .size(300.0, 50.0)
            .background(Color::WHITE)
            .border(1.0, Color::from_hex("#ddd"), 8.0);
        let over = Modifier::new().background(Color::from_hex("#f0f0f0"));

        let merged = base.clone().over(over);
        assert_eq!(merged.background, Some(Color::from_hex("#f0f0f0")));
        // untouched fields keep the base layer
        assert_eq!(merged.width, Some(300.0));
        assert_eq!(
            merged.border,
            Some(Border {
                width: 1.0,
                color: Color::from_hex("#ddd"),
                radius: 8.0,
            })
        );

        // empty overlay is a no-op
        assert_eq!(base.clone().over(Modifier::new()), base);
    }

    #[test]
    fn test_modifier_padding_horizontal_keeps_vertical() {
        let m = Modifier::new()
            .padding_values(PaddingValues {
                top: 4.0,
                bottom: 4.0,
                ..Default::default()
            })
            .padding_horizontal(15.0);
        let pv = m.padding_values.unwrap();
        assert_eq!((pv.left, pv.right), (15.0, 15.0));
        assert_eq!((pv.top, pv.bottom), (4.0, 4.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }
}
