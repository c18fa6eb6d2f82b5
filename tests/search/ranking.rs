//! Tiered ordering of search results.
//!
//! Each test pins one rung of the comparator: an earlier tier always beats
//! every later one, and the date only matters once everything else ties.

use super::common::{ids, make_post, tier_ladder, titled_post, LADDER_TIERS};
use quire::{rank, rank_with, Tier, WordMatcher};

// ============================================================================
// FULL LADDER
// ============================================================================

#[test]
fn test_ladder_sorts_best_first_from_any_input_order() {
    let mut posts = tier_ladder();
    posts.reverse();
    assert_eq!(ids(&rank(&posts, "design")), (1..=9).collect::<Vec<_>>());

    // Interleave: odd ids first, then even.
    let mut shuffled = tier_ladder();
    shuffled.sort_by_key(|p| (p.id % 2 == 0, p.id));
    assert_eq!(ids(&rank(&shuffled, "design")), (1..=9).collect::<Vec<_>>());
}

#[test]
fn test_ladder_pairs_are_decided_by_expected_tier() {
    let posts = tier_ladder();
    let matcher = WordMatcher::new("design").unwrap();
    let ranked = rank_with(&posts, &matcher);

    let decided: Vec<u8> = ranked
        .windows(2)
        .map(|pair| pair[0].decided_against(&pair[1]).map_or(0, Tier::number))
        .collect();
    assert_eq!(decided, LADDER_TIERS.to_vec());
}

// ============================================================================
// INDIVIDUAL TIERS
// ============================================================================

#[test]
fn test_exact_title_beats_prefix_regardless_of_date() {
    // "Foobar" needs a body hit to survive the filter at all.
    let posts = vec![
        make_post(1, "Foo", "", "2024-01-01"),
        make_post(2, "Foobar", "foo inside", "2024-01-02"),
    ];
    assert_eq!(ids(&rank(&posts, "foo")), vec![1, 2]);
}

#[test]
fn test_exact_title_ignores_case() {
    let posts = vec![
        titled_post(1, "Habits and more", "2024-01-01"),
        titled_post(2, "HABITS", "2020-01-01"),
    ];
    assert_eq!(ids(&rank(&posts, "habits")), vec![2, 1]);
}

#[test]
fn test_title_word_beats_many_body_hits() {
    let posts = vec![
        make_post(1, "Routines", "habits habits habits habits", "2024-01-01"),
        titled_post(2, "On habits", "2019-01-01"),
    ];
    assert_eq!(ids(&rank(&posts, "habits")), vec![2, 1]);
}

#[test]
fn test_body_word_separates_title_hits() {
    let posts = vec![
        make_post(1, "Design ideas", "", "2024-01-01"),
        make_post(2, "Design notes", "on design", "2020-01-01"),
    ];
    let matcher = WordMatcher::new("design").unwrap();
    let ranked = rank_with(&posts, &matcher);
    assert_eq!(ranked[0].post.id, 2);
    assert_eq!(ranked[0].decided_against(&ranked[1]), Some(Tier::BodyWord));
}

#[test]
fn test_newer_post_wins_full_tie() {
    let posts = vec![
        make_post(1, "First", "a shared text", "2024-01-01"),
        make_post(2, "Second", "a shared text", "2024-02-01"),
    ];
    assert_eq!(ids(&rank(&posts, "shared")), vec![2, 1]);
}

#[test]
fn test_same_date_full_tie_keeps_input_order() {
    let posts = vec![
        make_post(3, "C", "same words", "2024-01-01"),
        make_post(1, "A", "same words", "2024-01-01"),
        make_post(2, "B", "same words", "2024-01-01"),
    ];
    assert_eq!(ids(&rank(&posts, "words")), vec![3, 1, 2]);
}

#[test]
fn test_demo_posts_for_no() {
    let posts = super::common::demo();
    // Title hit first, then the body-only hits.
    let ranked = rank(&posts, "no");
    assert_eq!(ranked[0].title, "The Art of Saying No");
    assert!(ranked.iter().all(|p| p.id != 4));
}
