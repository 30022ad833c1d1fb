//! Integration tests for visual-state derivation.

use magic_button::prelude::*;
use magic_button::style::{ButtonPalette, OutlineRenderer, Path, Rect, ShapeRenderer};
use magic_button::TITLE_MIN_WIDTH;
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_auto_size_clamps_to_small() {
    let mut button = MagicButton::new(ButtonConfiguration::builder().size(ButtonSize::Auto).build());
    button.set_measured_container_size(20.0);

    let render = button.render();
    assert_eq!(render.metrics.horizontal_padding, 16.0);
    assert_eq!(
        Some(render.edge_length),
        ButtonSize::Small.metrics().edge_length
    );
}

#[test]
fn test_title_visibility() {
    let config = ButtonConfiguration::builder().icon("hand.wave").label("Hi").build();
    let mut button = MagicButton::new(config.clone());

    button.set_measured_container_size(60.0);
    assert!(button.render().title.is_none());

    button.set_measured_container_size(90.0);
    assert_eq!(button.render().title.as_deref(), Some("Hi"));

    let mut label_only = MagicButton::new(ButtonConfiguration::builder().label("Hi").build());
    label_only.set_measured_container_size(60.0);
    let render = label_only.render();
    assert_eq!(render.title.as_deref(), Some("Hi"));
    assert!(render.icon.is_none());
}

#[test]
fn test_title_threshold_is_exclusive() {
    let mut button = MagicButton::new(
        ButtonConfiguration::builder().icon("star").label("Star").build(),
    );
    button.set_measured_container_size(TITLE_MIN_WIDTH);
    assert!(button.render().title.is_none());
}

#[test]
fn test_disabled_is_muted_regardless_of_hover() {
    let palette = ButtonPalette::light();
    for style in [VisualStyle::Primary, VisualStyle::Danger, VisualStyle::Neutral] {
        let mut button = MagicButton::new(
            ButtonConfiguration::builder()
                .style(style)
                .disabled("Unavailable")
                .build(),
        );
        for hovering in [false, true] {
            button.set_hover(hovering);
            let render = button.render();
            assert_eq!(render.colors.foreground, palette.muted_foreground);
            assert_eq!(render.colors.background, palette.muted_background);
            assert!(render.colors.shadow.is_none());
        }
    }
}

#[test]
fn test_hover_changes_colors_when_enabled() {
    let mut button = MagicButton::new(ButtonConfiguration::builder().style(VisualStyle::Info).build());
    let rest = button.render().colors;
    button.set_hover(true);
    let hover = button.render().colors;
    assert_ne!(rest.background, hover.background);
    assert!(hover.shadow.is_some());
}

struct ClosingRenderer;

impl ShapeRenderer for ClosingRenderer {
    fn outline(&self, shape: &ButtonShape, bounds: Rect) -> Path {
        let mut path = OutlineRenderer.outline(shape, bounds);
        path.close();
        path
    }
}

#[test]
fn test_custom_shape_renderer() {
    let mut button = MagicButton::new(
        ButtonConfiguration::builder()
            .shape(ButtonShape::Circle)
            .size(ButtonSize::Large)
            .build(),
    )
    .with_shape_renderer(ClosingRenderer);

    let render = button.render();
    let outline = render.outline.unwrap();
    assert!(outline.curve_count() > 0);
    assert_eq!(render.edge_length, 44.0);
    assert_eq!(render.icon_pixel_size, 22.0);
}

#[test]
fn test_custom_size_icon_scale() {
    let mut button = MagicButton::new(
        ButtonConfiguration::builder()
            .size(ButtonSize::Custom(60.0))
            .build(),
    );
    let render = button.render();
    assert_eq!(render.edge_length, 60.0);
    assert_eq!(render.icon_pixel_size, 24.0);
}

#[test]
fn test_indicator_follows_guard_while_loading() {
    let parked = Arc::new(Mutex::new(Vec::new()));
    let sink = parked.clone();
    let config = ButtonConfiguration::builder()
        .id("sync")
        .loading_indicator(LoadingIndicatorStyle::Spinner)
        .action(ButtonAction::new(move |done| sink.lock().push(done)))
        .build();
    let mut button = MagicButton::new(config.clone());
    button.handle_tap();

    let guarded = button.render();
    assert!(guarded.muted);
    assert_eq!(guarded.loading_indicator, Some(LoadingIndicatorStyle::Spinner));

    // Dropping the guard mid-flight leaves the state loading but unmuted.
    button.update(config.to_builder().debounce_guard(false).build());
    let unguarded = button.render();
    assert!(button.state().unwrap().is_loading());
    assert!(!unguarded.muted);
    assert!(unguarded.loading_indicator.is_none());

    parked.lock()[0].complete();
    button.update(config);
    assert!(button.render().loading_indicator.is_none());
}
