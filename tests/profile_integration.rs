//! Integration tests for the result profile
//!
//! Tests classifier output flowing into spectrum, candidates and share links

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use politicometro::core::classifier::{self, FALLBACK_DESCRIPTION};
use politicometro::core::profile::{left_right_percent, MAX_ABS_SCORE};
use politicometro::core::{candidate_matches, share_links, share_text, DecorativeSpectrum};
use politicometro::types::PositionLabel;

#[test]
fn test_max_score_matches_statement_list() {
    assert_eq!(MAX_ABS_SCORE, 60);
    assert_eq!(left_right_percent(-MAX_ABS_SCORE), 0.0);
    assert_eq!(left_right_percent(MAX_ABS_SCORE), 100.0);
}

#[test]
fn test_every_integer_score_has_exactly_one_band() {
    let mut last = classifier::classify(-200);
    let mut changes = 0;
    for score in -199..=200 {
        let position = classifier::classify(score);
        assert!(position >= last, "bands must not go backwards at {}", score);
        if position != last {
            changes += 1;
            assert_eq!(position.lower_bound(), Some(score));
        }
        last = position;
    }
    assert_eq!(changes, 6);
}

#[test]
fn test_descriptions_cover_every_label() {
    for position in PositionLabel::ALL {
        assert_ne!(classifier::describe(position), FALLBACK_DESCRIPTION);
        assert_eq!(classifier::describe_label(position.label()), classifier::describe(position));
    }
}

#[test]
fn test_decoration_is_not_stable_but_left_right_is() {
    let a = DecorativeSpectrum::generate(12, &mut StdRng::seed_from_u64(1));
    let b = DecorativeSpectrum::generate(12, &mut StdRng::seed_from_u64(2));
    assert_eq!(a.left_right, b.left_right);
    assert_eq!(a.left_right, left_right_percent(12));
    assert_ne!(a.nationalist_globalist, b.nationalist_globalist);
}

#[test]
fn test_radar_axes() {
    let spectrum = DecorativeSpectrum::generate(-30, &mut StdRng::seed_from_u64(3));
    let radar = spectrum.radar();
    assert_eq!(radar[0], ("Econômico", spectrum.left_right));
    assert_eq!(radar[1], ("Social", spectrum.liberal_conservative));
    assert_eq!(radar[4], ("Ambiental", 50.0));
}

#[test]
fn test_candidates_follow_position() {
    let position = classifier::classify(-45);
    let matches = candidate_matches(position);
    assert_eq!(matches[0].name, "Guilherme Boulos");
    assert_eq!(matches[0].party, "PSOL");

    let matches = candidate_matches(classifier::classify(0));
    assert_eq!(matches[0].name, "Simone Tebet");
}

#[test]
fn test_share_links_are_encoded() {
    let text = share_text(PositionLabel::CenterRight, 7, Some("https://quiz.example/?a=1"));
    let links = share_links(&text, Some("https://quiz.example/?a=1"));

    assert!(links.whatsapp.starts_with("https://wa.me/?text=Meu%20perfil%20pol%C3%ADtico"));
    assert!(!links.whatsapp.contains(' '));
    assert_eq!(
        links.facebook.as_deref(),
        Some("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fquiz.example%2F%3Fa%3D1")
    );
    assert!(links.twitter.ends_with("&url=https%3A%2F%2Fquiz.example%2F%3Fa%3D1"));
}

#[test]
fn test_share_without_url() {
    let text = share_text(PositionLabel::Left, -20, None);
    let links = share_links(&text, None);
    assert_eq!(text, "Meu perfil político: Esquerda (-20 pontos)");
    assert_eq!(links.facebook, None);
    assert!(!links.twitter.contains("&url="));
}
