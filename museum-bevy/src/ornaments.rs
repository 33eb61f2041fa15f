//! Landing-screen ornaments: a field of twinkling gold stars behind the
//! entry screen.

use bevy::prelude::*;
use rand::Rng;

use museum_core::Section;

use crate::state::MuseumState;

/// Number of stars scattered over the landing screen.
pub const STAR_COUNT: usize = 60;

const GOLD: Color = Color::srgb(0.788, 0.659, 0.298);

/// Component for a single twinkling star.
#[derive(Component)]
pub struct StarOrnament {
    /// Phase offset so the stars do not pulse in lockstep.
    pub phase: f32,
    /// Twinkle speed in radians per second.
    pub speed: f32,
    /// Vertical bob amplitude in pixels.
    pub bob: f32,
    /// Resting position.
    pub origin: Vec2,
}

/// Scatter the star field. Stars live for the whole session; they are
/// only visible while the landing section is shown.
pub fn spawn_stars(commands: &mut Commands) {
    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        let origin = Vec2::new(rng.gen_range(-640.0..640.0), rng.gen_range(-400.0..400.0));
        let size = rng.gen_range(1.0..3.0);
        commands.spawn((
            StarOrnament {
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                speed: rng.gen_range(0.8..2.4),
                bob: rng.gen_range(1.0..4.0),
                origin,
            },
            Sprite::from_color(GOLD.with_alpha(0.0), Vec2::splat(size)),
            Transform::from_translation(origin.extend(-1.0)),
        ));
    }
}

/// System to twinkle and bob the stars while the landing screen is shown,
/// and hide them everywhere else.
pub fn animate_stars(
    time: Res<Time>,
    state: Res<MuseumState>,
    mut query: Query<(&StarOrnament, &mut Sprite, &mut Transform)>,
) {
    let on_landing = state.navigator.current() == Section::Landing;
    let t = time.elapsed_secs();

    for (star, mut sprite, mut transform) in query.iter_mut() {
        let alpha = if on_landing {
            let twinkle = 0.5 + 0.5 * (t * star.speed + star.phase).sin();
            0.15 + 0.75 * twinkle
        } else {
            0.0
        };
        sprite.color = sprite.color.with_alpha(alpha);

        let bob = (t * star.speed * 0.5 + star.phase).cos() * star.bob;
        transform.translation.y = star.origin.y + bob;
    }
}
