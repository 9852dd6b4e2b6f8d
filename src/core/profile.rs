//! Presentation data derived from a result: spectrum bars, radar chart axes,
//! candidate matches and share links.
//!
//! Only `left_right` follows from the score. The other spectrum axes are
//! random decoration drawn at render time; they are not quiz output and must
//! never be stored or compared.

use rand::Rng;
use serde::Serialize;

use crate::types::{PositionLabel, STATEMENT_COUNT};
use crate::SCALE_MAX;

/// Largest possible absolute score
pub const MAX_ABS_SCORE: i32 = STATEMENT_COUNT as i32 * SCALE_MAX as i32;

/// Score mapped onto 0-100 (0 = far left, 50 = center, 100 = far right)
pub fn left_right_percent(score: i32) -> f64 {
    let pct = (score + MAX_ABS_SCORE) as f64 / (2 * MAX_ABS_SCORE) as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

// =============================================================================
// SPECTRUM
// =============================================================================

/// The five spectrum bars. Every axis except `left_right` is random.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorativeSpectrum {
    pub left_right: f64,
    pub nationalist_globalist: f64,
    pub capitalist_socialist: f64,
    pub liberal_conservative: f64,
    pub authoritarian_libertarian: f64,
    /// Always true; carried into JSON so consumers can tell
    pub decorative: bool,
}

/// Which bar an axis value belongs to, for picking marker icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumAxis {
    LeftRight,
    NationalistGlobalist,
    CapitalistSocialist,
    LiberalConservative,
    AuthoritarianLibertarian,
}

impl SpectrumAxis {
    /// (left pole, right pole) labels
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Self::LeftRight => ("Esquerda", "Direita"),
            Self::NationalistGlobalist => ("Nacionalista", "Globalista"),
            Self::CapitalistSocialist => ("Capitalista", "Socialista"),
            Self::LiberalConservative => ("Liberal", "Conservador"),
            Self::AuthoritarianLibertarian => ("Autoritário", "Libertário"),
        }
    }

    /// Marker icon: pole icon below 30 / above 70, target otherwise
    pub fn marker(&self, percent: f64) -> &'static str {
        let (low, high) = match self {
            Self::LeftRight => ("👈", "👉"),
            Self::NationalistGlobalist => ("🇧🇷", "🌍"),
            Self::CapitalistSocialist => ("🏭", "⚖️"),
            Self::LiberalConservative => ("🌈", "⛪"),
            Self::AuthoritarianLibertarian => ("🏛️", "🗽"),
        };
        if percent < 30.0 {
            low
        } else if percent > 70.0 {
            high
        } else {
            "🎯"
        }
    }
}

impl DecorativeSpectrum {
    pub fn generate<R: Rng + ?Sized>(score: i32, rng: &mut R) -> Self {
        let left_right = left_right_percent(score);
        Self {
            left_right,
            nationalist_globalist: rng.gen_range(30.0..70.0),
            capitalist_socialist: (left_right + rng.gen_range(-10.0..10.0)).clamp(0.0, 100.0),
            liberal_conservative: rng.gen_range(30.0..70.0),
            authoritarian_libertarian: rng.gen_range(40.0..80.0),
            decorative: true,
        }
    }

    pub fn axes(&self) -> [(SpectrumAxis, f64); 5] {
        [
            (SpectrumAxis::LeftRight, self.left_right),
            (SpectrumAxis::NationalistGlobalist, self.nationalist_globalist),
            (SpectrumAxis::CapitalistSocialist, self.capitalist_socialist),
            (SpectrumAxis::LiberalConservative, self.liberal_conservative),
            (SpectrumAxis::AuthoritarianLibertarian, self.authoritarian_libertarian),
        ]
    }

    /// Radar chart points, 0-100 each. The environmental axis is fixed at 50.
    pub fn radar(&self) -> [(&'static str, f64); 5] {
        [
            ("Econômico", self.left_right),
            ("Social", self.liberal_conservative),
            ("Diplomático", self.nationalist_globalist),
            ("Segurança", self.authoritarian_libertarian),
            ("Ambiental", 50.0),
        ]
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub name: &'static str,
    pub party: &'static str,
    pub emoji: &'static str,
    /// Compatibility percentage
    pub match_percent: u8,
}

const fn candidate(name: &'static str, party: &'static str, emoji: &'static str, match_percent: u8) -> CandidateMatch {
    CandidateMatch { name, party, emoji, match_percent }
}

/// Suggested candidates for a position, best match first
pub fn candidate_matches(position: PositionLabel) -> [CandidateMatch; 2] {
    match position {
        PositionLabel::RadicalLeft => [
            candidate("Guilherme Boulos", "PSOL", "👨🏼", 85),
            candidate("Lula", "PT", "👨🏾", 75),
        ],
        PositionLabel::Left => [
            candidate("Lula", "PT", "👨🏾", 90),
            candidate("Ciro Gomes", "PDT", "👨🏽", 70),
        ],
        PositionLabel::CenterLeft => [
            candidate("Ciro Gomes", "PDT", "👨🏽", 80),
            candidate("Simone Tebet", "MDB", "👩", 75),
        ],
        PositionLabel::Center => [
            candidate("Simone Tebet", "MDB", "👩", 85),
            candidate("Marina Silva", "REDE", "👩🏾", 75),
        ],
        PositionLabel::CenterRight => [
            candidate("João Amoêdo", "NOVO", "👨🏻", 80),
            candidate("Bolsonaro", "PL", "👨", 65),
        ],
        PositionLabel::Right => [
            candidate("Bolsonaro", "PL", "👨", 85),
            candidate("Tarcísio de Freitas", "Republicanos", "👨🏽", 75),
        ],
        PositionLabel::ConservativeRight => [
            candidate("Bolsonaro", "PL", "👨", 90),
            candidate("Michele Bolsonaro", "PL", "👩", 80),
        ],
    }
}

// =============================================================================
// SHARING
// =============================================================================

/// Share message; the invitation line is only added when a quiz URL is known
pub fn share_text(position: PositionLabel, total_score: i32, quiz_url: Option<&str>) -> String {
    let mut text = format!("Meu perfil político: {} ({} pontos)", position, total_score);
    if let Some(url) = quiz_url {
        text.push_str(&format!("\n\nFaça você também: {}", url));
    }
    text
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub facebook: Option<String>,
    pub twitter: String,
}

/// Share links for a message; Facebook only shares URLs so it needs `quiz_url`
pub fn share_links(text: &str, quiz_url: Option<&str>) -> ShareLinks {
    let encoded_text = urlencoding::encode(text);
    let twitter = match quiz_url {
        Some(url) => format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encoded_text,
            urlencoding::encode(url)
        ),
        None => format!("https://twitter.com/intent/tweet?text={}", encoded_text),
    };
    ShareLinks {
        whatsapp: format!("https://wa.me/?text={}", encoded_text),
        facebook: quiz_url.map(|url| {
            format!("https://www.facebook.com/sharer/sharer.php?u={}", urlencoding::encode(url))
        }),
        twitter,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_left_right_percent() {
        assert!((left_right_percent(-60) - 0.0).abs() < 1e-9);
        assert!((left_right_percent(0) - 50.0).abs() < 1e-9);
        assert!((left_right_percent(60) - 100.0).abs() < 1e-9);
        assert!((left_right_percent(500) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_spectrum_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for score in [-60, -20, 0, 33, 60] {
            let s = DecorativeSpectrum::generate(score, &mut rng);
            assert!(s.decorative);
            assert!((30.0..70.0).contains(&s.nationalist_globalist));
            assert!((30.0..70.0).contains(&s.liberal_conservative));
            assert!((40.0..80.0).contains(&s.authoritarian_libertarian));
            assert!((0.0..=100.0).contains(&s.capitalist_socialist));
            assert!((s.capitalist_socialist - s.left_right).abs() <= 10.0);
        }
    }

    #[test]
    fn test_markers() {
        assert_eq!(SpectrumAxis::LeftRight.marker(10.0), "👈");
        assert_eq!(SpectrumAxis::LeftRight.marker(50.0), "🎯");
        assert_eq!(SpectrumAxis::LeftRight.marker(90.0), "👉");
        assert_eq!(SpectrumAxis::LiberalConservative.marker(75.0), "⛪");
    }

    #[test]
    fn test_every_position_has_candidates() {
        for position in PositionLabel::ALL {
            let matches = candidate_matches(position);
            assert!(matches[0].match_percent >= matches[1].match_percent);
        }
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text(PositionLabel::Center, 3, None),
            "Meu perfil político: Centro (3 pontos)"
        );
        let with_url = share_text(PositionLabel::Right, 20, Some("https://example.org"));
        assert!(with_url.ends_with("Faça você também: https://example.org"));
    }
}
