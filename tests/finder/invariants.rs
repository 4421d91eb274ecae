//! Properties that hold for every window over every collection size.

use proptest::prelude::*;

use crate::common::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn returns_matched_count_regardless_of_window(
        n in 0usize..25,
        from in proptest::option::of(-30i64..30),
        to in proptest::option::of(-30i64..30),
    ) {
        let coll = collection_of("p", n);
        let request = FindRequest::all().window(docwindow::Window::new(from, to));
        let (matched, ctx) = run(&finder(), &coll, request);

        prop_assert_eq!(matched, n as u64);
        prop_assert!(ctx.len() <= n);
        prop_assert_eq!(coll.cursor_log().open_cursors(), 0);
    }

    #[test]
    fn repeated_finds_are_identical(
        n in 0usize..25,
        from in proptest::option::of(0i64..30),
        to in proptest::option::of(0i64..30),
    ) {
        let coll = collection_of("r", n);
        let finder = finder();
        let request = FindRequest::all().window(docwindow::Window::new(from, to));

        let (a, first) = run(&finder, &coll, request);
        let (b, second) = run(&finder, &coll, request);

        prop_assert_eq!(a, b);
        prop_assert_eq!(string_ids(&first), string_ids(&second));
    }

    #[test]
    fn cap_never_publishes_partial_results(
        n in 1usize..25,
        cap in 1u64..10,
    ) {
        let coll = collection_of("c", n);
        let mut finder = finder();
        finder.set_max_result_set_size(cap);
        let mut ctx = context();

        match finder.find(&mut ctx, &coll, FindRequest::all()) {
            Ok(matched) => {
                prop_assert!(n as u64 <= cap);
                prop_assert_eq!(ctx.len() as u64, matched);
            }
            Err(err) => {
                prop_assert!(err.is_admission_rejection());
                prop_assert!(ctx.is_empty());
                prop_assert_eq!(coll.cursor_log().materialized, 0);
            }
        }
    }
}
