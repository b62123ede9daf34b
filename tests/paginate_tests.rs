#![cfg(feature = "paginate")]
//! Tests for page windows and pagination descriptors.

use proptest::prelude::*;
use rstest::rstest;
use slicekit::paginate::{PageRequest, Pagination, paginate, paginate_by};

/// A request type that carries paging fields next to its own filters.
struct SearchQuery {
    term: &'static str,
    page: i32,
    per_page: i32,
}

impl Pagination for SearchQuery {
    fn page_number(&self) -> i32 {
        self.page
    }

    fn show_number(&self) -> i32 {
        self.per_page
    }
}

#[rstest]
#[case::first(1, 4, vec![1, 2, 3, 4])]
#[case::last_partial(3, 4, vec![9, 10])]
#[case::past_end(4, 4, vec![])]
#[case::zero_page(0, 4, vec![])]
#[case::negative_size(1, -1, vec![])]
#[case::huge_page(i64::MAX, 2, vec![])]
#[case::huge_size(1, i64::MAX, (1..=10).collect())]
fn test_paginate(#[case] page: i64, #[case] size: i64, #[case] expected: Vec<i32>) {
    let values: Vec<i32> = (1..=10).collect();
    assert_eq!(paginate(&values, page, size), expected.as_slice());
}

#[rstest]
fn test_paginate_by_custom_descriptor() {
    let rows = ["r1", "r2", "r3", "r4", "r5"];
    let query = SearchQuery { term: "r", page: 2, per_page: 2 };
    assert!(rows.iter().all(|row| row.starts_with(query.term)));
    assert_eq!(paginate_by(&rows, &query), ["r3", "r4"]);
}

#[rstest]
fn test_paginate_by_reference_descriptor() {
    let request = PageRequest::new(1, 2);
    let borrowed = &request;
    assert_eq!(paginate_by(&[1, 2, 3], &borrowed), [1, 2]);
}

#[rstest]
fn test_default_request_is_empty_page() {
    assert!(paginate_by(&[1, 2, 3], &PageRequest::default()).is_empty());
}

proptest! {
    #[test]
    fn prop_pages_concatenate_to_whole(
        values in prop::collection::vec(any::<u8>(), 0..80),
        size in 1..12_i64
    ) {
        let mut collected = Vec::with_capacity(values.len());
        let mut page = 1;
        loop {
            let window = paginate(&values, page, size);
            if window.is_empty() {
                break;
            }
            prop_assert!(window.len() <= usize::try_from(size).unwrap());
            collected.extend_from_slice(window);
            page += 1;
        }
        prop_assert_eq!(collected, values);
    }
}
