//! Share-link slugs.

use super::common::{demo, make_post};
use quire::{find_by_slug, slugify};

#[test]
fn test_demo_titles() {
    let slugs: Vec<String> = demo().iter().map(|p| slugify(&p.title)).collect();
    assert_eq!(
        slugs,
        vec![
            "getting-started-with-minimalism",
            "the-power-of-simplicity-in-design",
            "thoughts-on-digital-minimalism",
            "building-better-habits",
            "the-art-of-saying-no",
        ]
    );
}

#[test]
fn test_punctuation_and_spacing() {
    assert_eq!(slugify("  Hello,   World!  "), "hello-world");
    assert_eq!(slugify("Already-slugged -- title"), "already-slugged-title");
    assert_eq!(slugify("Ёлка и Зима 2024"), "ёлка-и-зима-2024");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn test_first_post_wins_on_slug_collision() {
    let posts = vec![
        make_post(1, "Hello, World", "", "2024-01-01"),
        make_post(2, "Hello World!", "", "2024-02-01"),
    ];
    assert_eq!(find_by_slug(&posts, "hello-world").map(|p| p.id), Some(1));
    assert!(find_by_slug(&posts, "").is_none());
}
