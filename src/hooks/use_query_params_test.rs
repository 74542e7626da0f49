use super::*;

#[test]
fn normalize_search_adds_missing_question_mark() {
    assert_eq!(normalize_search("page=2".to_owned()), "?page=2");
    assert_eq!(normalize_search("?page=2".to_owned()), "?page=2");
    assert_eq!(normalize_search(String::new()), "");
}
