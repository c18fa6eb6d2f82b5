// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The year-by-year archive shown when nobody is searching.

use std::collections::BTreeMap;

use crate::types::{Post, YearGroup};

/// Group posts by calendar year: newest year first, newest post first
/// within a year. Posts sharing a date keep their input order.
pub fn group_by_year<'a, I>(posts: I) -> Vec<YearGroup<'a>>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut years: BTreeMap<i32, Vec<&'a Post>> = BTreeMap::new();
    for post in posts {
        years.entry(post.year()).or_default().push(post);
    }

    years
        .into_iter()
        .rev()
        .map(|(year, mut posts)| {
            posts.sort_by(|a, b| b.date.cmp(&a.date));
            YearGroup { year, posts }
        })
        .collect()
}

/// All posts, newest first. This is the archive order flattened.
pub fn chronological(posts: &[Post]) -> Vec<&Post> {
    let mut ordered: Vec<&Post> = posts.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::titled_post;

    #[test]
    fn test_years_descending_posts_descending() {
        let posts = vec![
            titled_post(1, "Getting Started with Minimalism", "2024-01-15"),
            titled_post(4, "Building Better Habits", "2023-11-05"),
            titled_post(2, "The Power of Simplicity in Design", "2024-02-20"),
            titled_post(5, "The Art of Saying No", "2023-09-12"),
        ];
        let groups = group_by_year(&posts);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].year, 2024);
        assert_eq!(
            groups[0].posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(groups[1].year, 2023);
        assert_eq!(
            groups[1].posts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![4, 5]
        );
    }

    #[test]
    fn test_same_day_posts_keep_input_order() {
        let posts = vec![
            titled_post(7, "First", "2024-03-03"),
            titled_post(3, "Second", "2024-03-03"),
        ];
        let ordered = chronological(&posts);
        assert_eq!(ordered[0].id, 7);
        assert_eq!(ordered[1].id, 3);
    }

    #[test]
    fn test_empty_archive() {
        let posts: Vec<Post> = Vec::new();
        assert!(group_by_year(&posts).is_empty());
        assert!(chronological(&posts).is_empty());
    }
}
