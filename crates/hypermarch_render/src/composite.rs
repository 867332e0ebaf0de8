//! Alpha compositing of depth samples

use hypermarch_core::Color;

/// Blended alpha below this is treated as fully transparent
pub const ALPHA_EPSILON: f32 = 1e-6;

/// Porter-Duff "over": `fg` composited on top of `bg`
///
/// Two fully transparent inputs give [`Color::TRANSPARENT`] instead of
/// dividing by a zero alpha.
pub fn blend_colors(bg: Color, fg: Color) -> Color {
    let alpha = 1.0 - (1.0 - fg.a) * (1.0 - bg.a);
    if alpha < ALPHA_EPSILON {
        return Color::TRANSPARENT;
    }

    let mix = |f: f32, b: f32| (f * fg.a + b * bg.a * (1.0 - fg.a)) / alpha;
    Color::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b), alpha)
}

/// Composite per-sample colors onto opaque white
///
/// `samples[0]` is nearest the camera. Samples are blended farthest first so
/// nearer hits end up on top.
pub fn composite_samples(samples: &[Color]) -> Color {
    samples
        .iter()
        .rev()
        .fold(Color::WHITE, |acc, &sample| blend_colors(acc, sample))
}
