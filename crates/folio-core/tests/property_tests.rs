//! Property-based tests for gallery filtering, playback and paging
//!
//! Uses proptest to verify the invariants the pages rely on.

use folio_core::playback::{click_fraction, seek_position};
use folio_core::{gallery_cards, CategoryFilter, PlaybackCommand, PlaybackGroup, Project, SliderNav, SliderState};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const CATEGORIES: &[&str] = &["music", "design", "web", "video"];

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(CATEGORIES).prop_map(str::to_string)
}

fn project_strategy() -> impl Strategy<Value = (String, bool, bool)> {
    (category_strategy(), any::<bool>(), any::<bool>())
}

/// Generate a project list with unique ids
fn projects_strategy() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(project_strategy(), 0..30).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (category, highlight, has_audio))| Project {
                id: format!("p{i}"),
                title: format!("Project {i}"),
                description: String::new(),
                full_description: None,
                category,
                image: None,
                images: vec![],
                video_urls: vec![],
                technologies: vec![],
                features: None,
                projects: None,
                audio_url: has_audio.then(|| format!("audio/{i}.mp3")),
                live_url: None,
                github_url: None,
                highlight,
            })
            .collect()
    })
}

fn filter_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        1 => Just(CategoryFilter::Highlights),
        3 => category_strategy().prop_map(CategoryFilter::Category),
        1 => Just(CategoryFilter::Category("unknown".to_string())),
    ]
}

/// Clicks on play buttons: (player index, element reported paused)
fn clicks_strategy() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0..6usize, any::<bool>()), 0..50)
}

fn nav_strategy() -> impl Strategy<Value = SliderNav> {
    prop_oneof![
        Just(SliderNav::Prev),
        Just(SliderNav::Next),
        (0..20usize).prop_map(SliderNav::GoTo),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Card count equals the number of projects matching the predicate
    #[test]
    fn card_count_matches_predicate(projects in projects_strategy(), filter in filter_strategy()) {
        let cards = gallery_cards(&projects, &filter);
        let expected = projects.iter().filter(|p| filter.matches(p)).count();
        prop_assert_eq!(cards.len(), expected);
    }

    /// No card is rendered for a project violating the predicate
    #[test]
    fn cards_satisfy_predicate(projects in projects_strategy(), filter in filter_strategy()) {
        for card in gallery_cards(&projects, &filter) {
            let project = projects.iter().find(|p| p.id == card.project_id).unwrap();
            prop_assert!(filter.matches(project));
            prop_assert_eq!(card.label.is_some(), filter == CategoryFilter::Highlights);
        }
    }

    /// Rendering the same selection twice yields the same cards
    #[test]
    fn rendering_is_idempotent(projects in projects_strategy(), filter in filter_strategy()) {
        prop_assert_eq!(gallery_cards(&projects, &filter), gallery_cards(&projects, &filter));
    }

    /// At most one player is playing after any sequence of clicks
    #[test]
    fn at_most_one_player_plays(clicks in clicks_strategy()) {
        let keys: Vec<String> = (0..6).map(|i| format!("p{i}")).collect();
        let mut group = PlaybackGroup::new();
        group.sync_members(keys.clone());

        for (idx, paused) in clicks {
            let key = &keys[idx];
            if let PlaybackCommand::Play { pause } = group.toggle(key, paused) {
                prop_assert!(!pause.contains(key));
                prop_assert_eq!(pause.len(), keys.len() - 1);
                // Siblings report their pause events.
                for other in &pause {
                    group.mark_paused(other);
                }
            }
            let playing = keys.iter().filter(|k| group.is_playing(k)).count();
            prop_assert!(playing <= 1);
        }
    }

    /// Slider index stays within bounds for any navigation sequence
    #[test]
    fn slider_index_in_bounds(count in 1..10usize, navs in prop::collection::vec(nav_strategy(), 0..60)) {
        let mut slider = SliderState::new(count);
        for nav in navs {
            slider.apply(nav);
            prop_assert!(slider.index() < slider.count());
        }
    }

    /// Next from the last slide wraps to 0, prev from 0 wraps to the last
    #[test]
    fn slider_wraps_at_boundaries(count in 1..10usize) {
        let mut slider = SliderState::new(count);
        slider.prev();
        prop_assert_eq!(slider.index(), count - 1);
        slider.next();
        prop_assert_eq!(slider.index(), 0);
    }

    /// Seeking at fraction f lands on f * duration
    #[test]
    fn seek_scales_with_fraction(f in 0.0..=1.0f64, duration in 0.1..3600.0f64) {
        let position = seek_position(f, duration).unwrap();
        prop_assert!((position - f * duration).abs() < 1e-9);
    }

    /// A click inside the bar maps back to its fraction
    #[test]
    fn click_fraction_inverts_position(f in 0.0..=1.0f64, left in -500.0..500.0f64, width in 1.0..2000.0f64) {
        let fraction = click_fraction(left + f * width, left, width);
        prop_assert!((fraction - f).abs() < 1e-9);
    }
}
