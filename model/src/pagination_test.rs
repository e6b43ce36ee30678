use super::*;

fn page(number: u32, last: bool) -> BoardPage {
    BoardPage { content: Vec::new(), last, number }
}

#[test]
fn last_page_total_is_number_plus_one() {
    assert_eq!(total_pages(&page(0, true)), 1);
    assert_eq!(total_pages(&page(4, true)), 5);
}

#[test]
fn non_last_page_advertises_one_more() {
    assert_eq!(total_pages(&page(0, false)), 2);
    assert_eq!(total_pages(&page(4, false)), 6);
}

#[test]
fn total_saturates_at_u32_max() {
    assert_eq!(total_pages(&page(u32::MAX - 1, false)), u32::MAX);
    assert_eq!(total_pages(&page(u32::MAX, true)), u32::MAX);
}

#[test]
fn request_page_is_zero_based() {
    assert_eq!(to_request_page(1), 0);
    assert_eq!(to_request_page(3), 2);
    assert_eq!(to_request_page(0), 0);
}

#[test]
fn page_numbers_are_one_based() {
    assert_eq!(page_numbers(3), vec![1, 2, 3]);
    assert!(page_numbers(0).is_empty());
}
