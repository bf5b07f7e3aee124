//! Sound clips and track resolution.
//!
//! A clip is a family of recordings sharing a file-name template with one `{}`
//! slot for the 1-based track number. Resolution turns an optional, untrusted
//! track request into a concrete file name.

use rand::Rng;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

/// Substitution slot in clip templates.
pub const TRACK_SLOT: &str = "{}";

/// A playable clip family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundClip {
    /// Command name the clip is bound to
    pub name: &'static str,
    /// Short description shown in help
    pub description: &'static str,
    /// File name template with one [`TRACK_SLOT`]
    pub file_template: &'static str,
    /// Number of recorded tracks
    pub max_tracks: u32,
}

impl SoundClip {
    /// Resolves the clip to a file inside `sounds_dir`.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        sounds_dir: &Path,
        requested: Option<&str>,
        rng: &mut R,
    ) -> PathBuf {
        sounds_dir.join(resolve_sound_path(
            self.file_template,
            requested,
            self.max_tracks,
            rng,
        ))
    }
}

/// Seeeeeeee, ten takes.
pub const SEEE: SoundClip = SoundClip {
    name: "seee",
    description: "Seeeeeeee",
    file_template: "See{}.mp3",
    max_tracks: 10,
};

/// "A me non m'interessa".
pub const AME: SoundClip = SoundClip {
    name: "ame",
    description: "A me non m'interessa",
    file_template: "NonInteressa{}.mp3",
    max_tracks: 2,
};

/// Hollywood.
pub const CHT: SoundClip = SoundClip {
    name: "cht",
    description: "Hollywood",
    file_template: "cht{}.mp3",
    max_tracks: 3,
};

/// Inni democratici.
pub const DEMO: SoundClip = SoundClip {
    name: "demo",
    description: "Inni Democratici",
    file_template: "Demo{}.mp3",
    max_tracks: 4,
};

/// Modalità estinzione.
pub const ESS: SoundClip = SoundClip {
    name: "ess",
    description: "Modalità Estinzione",
    file_template: "Estinguermi{}.mp3",
    max_tracks: 1,
};

/// La spranga.
pub const SPRANGA: SoundClip = SoundClip {
    name: "spranga",
    description: "Ecco come risolvere qualsiasi problema",
    file_template: "spranga{}.mp3",
    max_tracks: 3,
};

/// Warzonata.
pub const WAR: SoundClip = SoundClip {
    name: "war",
    description: "Warzonata",
    file_template: "warzonata{}.mp3",
    max_tracks: 1,
};

/// Salvini and the cassa integrazione.
pub const CASSA: SoundClip = SoundClip {
    name: "cassa",
    description: "Salvini e la cassa integrazione",
    file_template: "cassa{}.mp3",
    max_tracks: 5,
};

/// Every clip the bot knows about.
pub const CLIPS: [SoundClip; 8] = [SEEE, AME, CHT, DEMO, ESS, SPRANGA, WAR, CASSA];

/// Looks a clip up by command name.
#[must_use]
pub fn find_clip(name: &str) -> Option<&'static SoundClip> {
    CLIPS.iter().find(|clip| clip.name == name)
}

/// Picks the track number for a request.
///
/// - no request, or a request that is not an integer: uniform in `[1, max_track]`
/// - an integer in `[1, max_track]`: that integer
/// - any other integer: `1`
pub fn pick_track<R: Rng + ?Sized>(requested: Option<&str>, max_track: u32, rng: &mut R) -> u32 {
    let max_track = max_track.max(1);

    let Some(requested) = requested else {
        return rng.gen_range(1..=max_track);
    };

    match requested.trim().parse::<i64>() {
        Ok(track) if track >= 1 && track <= i64::from(max_track) => {
            // In range, so it fits in u32
            u32::try_from(track).unwrap_or(1)
        }
        Ok(_) => 1,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => 1,
        Err(_) => rng.gen_range(1..=max_track),
    }
}

/// Fills the template's slot with the picked track number.
pub fn resolve_sound_path<R: Rng + ?Sized>(
    template: &str,
    requested: Option<&str>,
    max_track: u32,
    rng: &mut R,
) -> String {
    let track = pick_track(requested, max_track, rng);
    template.replacen(TRACK_SLOT, &track.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_rng;
    use std::collections::HashSet;

    const TEMPLATE: &str = "data/sounds/See{}.mp3";

    fn slot_value(path: &str) -> u32 {
        path.trim_start_matches("data/sounds/See")
            .trim_end_matches(".mp3")
            .parse()
            .unwrap_or(0)
    }

    #[test]
    fn test_absent_request_is_random_in_range() {
        let mut rng = seeded_rng();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let value = slot_value(&resolve_sound_path(TEMPLATE, None, 5, &mut rng));
            assert!((1..=5).contains(&value));
            seen.insert(value);
        }
        assert_eq!(seen.len(), 5, "every track should come up eventually");
    }

    #[test]
    fn test_in_range_request_is_used_verbatim() {
        let mut rng = seeded_rng();
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("3"), 5, &mut rng),
            "data/sounds/See3.mp3"
        );
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("5"), 5, &mut rng),
            "data/sounds/See5.mp3"
        );
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("1"), 5, &mut rng),
            "data/sounds/See1.mp3"
        );
    }

    #[test]
    fn test_out_of_range_request_clamps_low() {
        let mut rng = seeded_rng();
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("7"), 5, &mut rng),
            "data/sounds/See1.mp3"
        );
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("0"), 5, &mut rng),
            "data/sounds/See1.mp3"
        );
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("-2"), 5, &mut rng),
            "data/sounds/See1.mp3"
        );
        assert_eq!(
            resolve_sound_path(TEMPLATE, Some("99999999999999999999999"), 5, &mut rng),
            "data/sounds/See1.mp3"
        );
    }

    #[test]
    fn test_non_integer_request_is_random_in_range() {
        let mut rng = seeded_rng();
        for request in ["x", "2.5", "", "tre"] {
            let value = slot_value(&resolve_sound_path(TEMPLATE, Some(request), 5, &mut rng));
            assert!((1..=5).contains(&value), "{request:?} gave {value}");
        }
    }

    #[test]
    fn test_request_whitespace_is_ignored() {
        let mut rng = seeded_rng();
        assert_eq!(pick_track(Some(" 2 "), 5, &mut rng), 2);
    }

    #[test]
    fn test_zero_max_track_behaves_like_one() {
        let mut rng = seeded_rng();
        assert_eq!(pick_track(None, 0, &mut rng), 1);
    }

    #[test]
    fn test_clip_resolves_inside_sounds_dir() {
        let mut rng = seeded_rng();
        let path = AME.resolve(Path::new("data/sounds"), Some("2"), &mut rng);
        assert_eq!(path, Path::new("data/sounds").join("NonInteressa2.mp3"));
    }

    #[test]
    fn test_clip_table() {
        let names: HashSet<_> = CLIPS.iter().map(|clip| clip.name).collect();
        assert_eq!(names.len(), CLIPS.len(), "clip names must be unique");
        for clip in &CLIPS {
            assert_eq!(clip.file_template.matches(TRACK_SLOT).count(), 1);
            assert!(clip.max_tracks >= 1);
        }
        assert_eq!(find_clip("seee"), Some(&SEEE));
        assert_eq!(find_clip("cassa").map(|c| c.max_tracks), Some(5));
        assert!(find_clip("nope").is_none());
    }
}
