//! Paging through matched documents.

use crate::common::*;

#[test]
fn find_all() {
    let coll = collection_of("findAll", 3);
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all());

    assert_eq!(matched, 3);
    assert_eq!(string_ids(&ctx), vec!["findAll0", "findAll1", "findAll2"]);
}

#[test]
fn find_one_of_many() {
    let coll = collection_of("findOneOfMany", 3);
    let filter = Filter::eq("_id", "findOneOfMany1");
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all().filter(&filter));

    assert_eq!(matched, 1);
    assert_eq!(string_ids(&ctx), vec!["findOneOfMany1"]);
}

#[test]
fn find_limit() {
    let coll = collection_of("findLimit", 3);
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all().to(1));

    assert_eq!(matched, 3);
    assert_eq!(ctx.len(), 2);
}

#[test]
fn skip_and_limit() {
    let coll = collection_of("findLimit", 20);
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all().from(3).to(9));

    assert_eq!(matched, 20);
    let expected: Vec<String> = (3..=9).map(|i| format!("findLimit{i}")).collect();
    assert_eq!(string_ids(&ctx), expected);
}

#[test]
fn open_ended_window() {
    let coll = collection_of("findLimit", 20);
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().from(12));

    assert_eq!(ctx.len(), 8);
}

#[test]
fn zero_width_window_returns_one() {
    let coll = collection_of("findLimit", 20);
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().from(0).to(0));

    assert_eq!(ctx.len(), 1);
}

#[test]
fn first_page_of_ten() {
    let coll = collection_of("findLimit", 20);
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().from(0).to(9));

    assert_eq!(ctx.len(), 10);
}

#[test]
fn negative_upper_bound_returns_nothing() {
    let coll = collection_of("findLimit", 20);
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all().from(12).to(-8));

    assert_eq!(matched, 20);
    assert!(ctx.is_empty());
}

#[test]
fn upper_bound_below_lower_returns_nothing() {
    let coll = collection_of("findLimit", 20);
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all().from(18).to(8));

    assert_eq!(matched, 20);
    assert!(ctx.is_empty());
}

#[test]
fn sort_descending() {
    let coll = collection_with_ids(&[2, 1, 3]);
    let sort = SortSpec::descending("_id");
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().sort(&sort));

    assert_eq!(int_ids(&ctx), vec![3, 2, 1]);
}

#[test]
fn sort_and_limit() {
    let coll = collection_with_ids(&[2, 1, 3]);
    let sort = SortSpec::descending("_id");
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().sort(&sort).to(1));

    assert_eq!(int_ids(&ctx), vec![3, 2]);
}

#[test]
fn skip_only() {
    let coll = collection_with_ids(&[1, 2, 3]);
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().from(1));

    assert_eq!(int_ids(&ctx), vec![2, 3]);
}

#[test]
fn sort_and_skip() {
    let coll = collection_with_ids(&[2, 1, 3]);
    let sort = SortSpec::descending("_id");
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().sort(&sort).from(1));

    assert_eq!(int_ids(&ctx), vec![2, 1]);
}

#[test]
fn sort_skip_and_limit() {
    let coll = collection_with_ids(&[2, 1, 4, 3]);
    let sort = SortSpec::ascending("_id");
    let (matched, ctx) = run(&finder(), &coll, FindRequest::all().sort(&sort).from(1).to(2));

    assert_eq!(matched, 4);
    assert_eq!(int_ids(&ctx), vec![2, 3]);
}

#[test]
fn multi_key_sort() {
    let coll = MemCollection::new("people");
    coll.insert_many(vec![
        serde_json::json!({"_id": 1, "team": "b", "age": 30}),
        serde_json::json!({"_id": 2, "team": "a", "age": 25}),
        serde_json::json!({"_id": 3, "team": "b", "age": 41}),
        serde_json::json!({"_id": 4, "team": "a", "age": 52}),
    ])
    .unwrap();
    let sort = SortSpec::ascending("team").then_descending("age");
    let (_, ctx) = run(&finder(), &coll, FindRequest::all().sort(&sort));

    assert_eq!(int_ids(&ctx), vec![4, 2, 3, 1]);
}
