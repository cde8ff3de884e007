//! A fake (but plausible-looking) frequency spectrum for the composite screenshot's analyser.
//! The curve is a fixed function of frequency, so every render draws the same plot.

use itertools::Itertools;

pub const MIN_FREQ: f32 = 20.0;
pub const MAX_FREQ: f32 = 20_000.0;
pub const MIN_DB: f32 = -72.0;
pub const MAX_DB: f32 = 0.0;

/// Frequencies which get a vertical grid line, along with their labels
pub const GRID_FREQS: [(f32, &str); 3] = [(100.0, "100"), (1000.0, "1k"), (10_000.0, "10k")];
/// Levels which get a horizontal grid line
pub const GRID_DBS: [f32; 5] = [-12.0, -24.0, -36.0, -48.0, -60.0];

/// The level (in dB) of the fake spectrum at `freq` Hz
pub fn magnitude_db(freq: f32) -> f32 {
    let octave_pos = freq.max(1.0).log10();
    // Gently falling slope, like pink-ish program material
    let tilt = -20.0 - 7.0 * (octave_pos - 2.0);
    let bumps = 12.0 * bump(octave_pos, 1.9, 0.22) // kick drum
        + 7.0 * bump(octave_pos, 2.4, 0.3) // bass
        + 6.0 * bump(octave_pos, 3.1, 0.25) // vocals
        + 3.5 * bump(octave_pos, 3.7, 0.15); // presence
    let ripple = 1.5 * (octave_pos * 23.0).sin() + 0.8 * (octave_pos * 57.0).sin();
    let rolloff = -30.0 * (octave_pos - 4.1).max(0.0);
    tilt + bumps + ripple + rolloff
}

/// A gaussian bump centred on `centre` (in decades)
fn bump(x: f32, centre: f32, width: f32) -> f32 {
    let d = (x - centre) / width;
    (-0.5 * d * d).exp()
}

/// The horizontal position of `freq` on a logarithmic axis, from `0` (at [`MIN_FREQ`]) to `1` (at
/// [`MAX_FREQ`])
pub fn freq_position(freq: f32) -> f32 {
    (freq / MIN_FREQ).log10() / (MAX_FREQ / MIN_FREQ).log10()
}

/// The frequency at a horizontal position; the inverse of [`freq_position`]
pub fn freq_at(position: f32) -> f32 {
    MIN_FREQ * (MAX_FREQ / MIN_FREQ).powf(position)
}

/// The vertical position of a level, from `0` (at [`MIN_DB`]) to `1` (at [`MAX_DB`])
pub fn db_position(db: f32) -> f32 {
    (db - MIN_DB) / (MAX_DB - MIN_DB)
}

/// Samples the curve at `num_samples` evenly spaced (logarithmic) positions, returning heights in
/// `0..=1`
pub fn curve(num_samples: usize) -> Vec<f32> {
    let denom = num_samples.saturating_sub(1).max(1) as f32;
    (0..num_samples)
        .map(|i| {
            let freq = freq_at(i as f32 / denom);
            db_position(magnitude_db(freq)).clamp(0.0, 1.0)
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_endpoints() {
        assert!(freq_position(MIN_FREQ).abs() < 1e-6);
        assert!((freq_position(MAX_FREQ) - 1.0).abs() < 1e-6);
        assert!((freq_at(0.5) - 632.4555).abs() < 0.01);
        assert_eq!(db_position(MIN_DB), 0.0);
        assert_eq!(db_position(MAX_DB), 1.0);
    }

    #[test]
    fn curve_is_bounded_and_repeatable() {
        let a = curve(300);
        assert_eq!(a.len(), 300);
        assert!(a.iter().all(|h| (0.0..=1.0).contains(h)));
        assert_eq!(a, curve(300));
    }

    #[test]
    fn curve_falls_off_at_the_top() {
        assert!(magnitude_db(80.0) > magnitude_db(18_000.0));
        assert!(magnitude_db(80.0) > magnitude_db(1000.0));
    }

    #[test]
    fn tiny_sample_counts() {
        assert!(curve(0).is_empty());
        assert_eq!(curve(1).len(), 1);
    }
}
