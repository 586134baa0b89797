use bevy::prelude::*;

use crate::engine::loading::tracker::LoadTracker;
use constants::scene_settings::BACKGROUND_COLOUR;

const BAR_TRACK_COLOUR: Color = Color::srgb(0.25, 0.26, 0.30);
const BAR_FILL_COLOUR: Color = Color::srgb(0.92, 0.92, 0.94);
const NOTICE_COLOUR: Color = Color::srgb(0.90, 0.35, 0.35);

#[derive(Component)]
pub struct LoadingOverlay;

#[derive(Component)]
pub struct ProgressBarFill;

#[derive(Component)]
pub struct ProgressLabel;

pub fn spawn_loading_overlay(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOUR),
            LoadingOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("0%"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(BAR_FILL_COLOUR),
                ProgressLabel,
            ));
            parent
                .spawn((
                    Node {
                        width: Val::Percent(40.0),
                        height: Val::Px(6.0),
                        ..default()
                    },
                    BackgroundColor(BAR_TRACK_COLOUR),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(BAR_FILL_COLOUR),
                        ProgressBarFill,
                    ));
                });
        });
}

// Mirror the aggregate onto the bar and label on every update.
pub fn update_loading_overlay(
    tracker: Res<LoadTracker>,
    mut fills: Query<&mut Node, With<ProgressBarFill>>,
    mut labels: Query<&mut Text, With<ProgressLabel>>,
) {
    let percent = tracker.aggregate_percent();

    for mut node in &mut fills {
        node.width = Val::Percent(percent);
    }
    for mut text in &mut labels {
        text.0 = format!("{percent:.0}%");
    }
}

// Terminal hide: the overlay never comes back once the scene is live.
pub fn despawn_loading_overlay(
    mut commands: Commands,
    overlays: Query<Entity, With<LoadingOverlay>>,
) {
    for overlay in &overlays {
        commands.entity(overlay).despawn();
    }
}

// Blocking notice raised only for the environment asset; a model failure
// stays log-only.
pub fn spawn_environment_failure_notice(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("The environment light could not be loaded."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(NOTICE_COLOUR),
            ));
        });
}
