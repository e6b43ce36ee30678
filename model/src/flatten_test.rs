use time::Month;

use super::*;

fn today() -> Date {
    Date::from_calendar_date(2026, Month::October, 16).expect("valid date")
}

fn node(id: i64, children: Vec<RawComment>) -> RawComment {
    RawComment {
        comment_id: id,
        content: Some(format!("comment {id}")),
        children,
        ..RawComment::default()
    }
}

fn ids_and_levels(flat: &[CommentView]) -> Vec<(i64, usize)> {
    flat.iter().map(|c| (c.id, c.reply_level)).collect()
}

/// Builds a tree whose pre-order ids are 1..=n and records each id's parent.
fn sample_forest() -> Vec<RawComment> {
    vec![
        node(1, vec![node(2, vec![node(3, vec![]), node(4, vec![node(5, vec![])])]), node(6, vec![])]),
        node(7, vec![]),
        node(8, vec![node(9, vec![node(10, vec![node(11, vec![])])])]),
    ]
}

#[test]
fn flattens_documented_example() {
    let roots = vec![node(1, vec![node(2, vec![])]), node(3, vec![])];
    let flat = flatten_comments(&roots, today());
    assert_eq!(ids_and_levels(&flat), vec![(1, 0), (2, 1), (3, 0)]);
}

#[test]
fn empty_input_flattens_to_empty() {
    assert!(flatten_comments(&[], today()).is_empty());
}

#[test]
fn output_length_equals_node_count() {
    let roots = sample_forest();
    let total: usize = roots.iter().map(RawComment::subtree_len).sum();
    assert_eq!(total, 11);
    assert_eq!(flatten_comments(&roots, today()).len(), total);
}

#[test]
fn output_is_pre_order() {
    let flat = flatten_comments(&sample_forest(), today());
    let ids: Vec<i64> = flat.iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=11).collect::<Vec<_>>());
}

#[test]
fn reply_level_is_parent_level_plus_one() {
    let flat = flatten_comments(&sample_forest(), today());
    assert_eq!(
        ids_and_levels(&flat),
        vec![(1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (6, 1), (7, 0), (8, 0), (9, 1), (10, 2), (11, 3)]
    );
    // In pre-order, a node's parent is the nearest earlier node one level up.
    for (i, comment) in flat.iter().enumerate().filter(|(_, c)| c.reply_level > 0) {
        let parent = flat[..i].iter().rev().find(|p| p.reply_level < comment.reply_level).expect("parent");
        assert_eq!(parent.reply_level + 1, comment.reply_level);
    }
}

#[test]
fn parent_id_is_carried_not_used_for_structure() {
    let mut child = node(2, vec![]);
    child.parent_id = Some(999);
    let flat = flatten_comments(&[node(1, vec![child])], today());
    assert_eq!(flat[1].parent_id, Some(999));
    assert_eq!(flat[1].reply_level, 1);
}

#[test]
fn flattening_is_deterministic() {
    let roots = sample_forest();
    assert_eq!(flatten_comments(&roots, today()), flatten_comments(&roots, today()));
}

#[test]
fn deep_chain_does_not_recurse() {
    let depth = 2_000;
    let mut tree = node(depth, vec![]);
    for id in (0..depth).rev() {
        tree = node(id, vec![tree]);
    }
    let flat = flatten_comments(std::slice::from_ref(&tree), today());
    assert_eq!(flat.len(), usize::try_from(depth + 1).expect("len"));
    assert_eq!(flat.last().map(|c| c.reply_level), Some(2_000));
}

#[test]
fn nodes_are_transformed_with_defaults() {
    let flat = flatten_comments(&[node(1, vec![])], today());
    assert_eq!(flat[0].author, crate::ANONYMOUS_AUTHOR);
    assert_eq!(flat[0].likes, 0);
    assert!(!flat[0].deleted);
    assert_eq!(flat[0].date, "10. 16.");
}
