//! The reading session: sidebar modes and opened posts.

use super::common::{demo, ids, make_post};
use quire::{Reader, Sidebar};

#[test]
fn test_sidebar_switches_between_archive_and_results() {
    let mut reader = Reader::new(demo());
    assert!(matches!(reader.sidebar(), Sidebar::Archive(_)));

    reader.set_query("habits");
    match reader.sidebar() {
        Sidebar::Results(posts) => assert_eq!(ids(&posts), vec![4]),
        other => panic!("expected results, got {:?}", other),
    }

    reader.set_query("xyz123notfound");
    assert_eq!(reader.sidebar(), Sidebar::Empty);

    reader.clear_query();
    assert!(matches!(reader.sidebar(), Sidebar::Archive(_)));
}

#[test]
fn test_archive_groups_by_year_newest_first() {
    let reader = Reader::new(demo());
    let Sidebar::Archive(groups) = reader.sidebar() else {
        panic!("expected archive");
    };
    let layout: Vec<(i32, Vec<u32>)> = groups.iter().map(|g| (g.year, ids(&g.posts))).collect();
    assert_eq!(layout, vec![(2024, vec![3, 2, 1]), (2023, vec![4, 5])]);
}

#[test]
fn test_opened_post_marks_only_whole_words() {
    let posts = vec![make_post(1, "Noise", "say no to noise", "2024-01-01")];
    let mut reader = Reader::new(posts);
    reader.set_query("NO");
    let opened = reader.open(1).unwrap();
    assert_eq!(opened.html, "say <mark>no</mark> to noise");
    assert_eq!(opened.matches, 1);
    assert_eq!(opened.date_label, "January 1, 2024");
}

#[test]
fn test_open_by_slug() {
    let reader = Reader::new(demo());
    let opened = reader.open_slug("thoughts-on-digital-minimalism").unwrap();
    assert_eq!(opened.id, 3);
    assert!(reader.open_slug("no-such-post").is_none());
}

#[test]
fn test_reader_highlight_is_identity_without_query() {
    let mut reader = Reader::new(demo());
    assert_eq!(reader.highlight("say no"), "say no");
    reader.set_query("no");
    assert_eq!(reader.highlight("say no"), "say <mark>no</mark>");
}
