//! Same posts, same query, same order. Every time.

use super::common::{demo, ids, tier_ladder};
use quire::{rank, Reader};

#[test]
fn test_rank_is_idempotent() {
    let posts = demo();
    for query in ["no", "minimalism", "the", "our", "design", ""] {
        let first = ids(&rank(&posts, query));
        for _ in 0..10 {
            assert_eq!(ids(&rank(&posts, query)), first, "query {:?}", query);
        }
    }
}

#[test]
fn test_rank_does_not_touch_posts() {
    let posts = tier_ladder();
    let before = posts.clone();
    let _ = rank(&posts, "design");
    assert_eq!(posts, before);
}

#[test]
fn test_latest_query_supersedes_previous() {
    let mut reader = Reader::new(demo());
    reader.set_query("habits");
    let habits = ids(&reader.results());
    reader.set_query("no");
    reader.set_query("habits");
    assert_eq!(ids(&reader.results()), habits);
}
