use crate::models::menu_item_review::MenuItemReview;

pub fn one_review() -> MenuItemReview {
    MenuItemReview {
        id: 1,
        item_id: 1,
        reviewer_email: "cgaucho@ucsb.edu".into(),
        stars: 5,
        date_reviewed: "2022-01-02T12:00:00".into(),
        comments: "Good".into(),
    }
}

pub fn three_reviews() -> Vec<MenuItemReview> {
    vec![
        MenuItemReview {
            id: 1,
            item_id: 1,
            reviewer_email: "cgaucho1@ucsb.edu".into(),
            stars: 3,
            date_reviewed: "2022-01-02T12:00:00".into(),
            comments: "Not bad".into(),
        },
        MenuItemReview {
            id: 2,
            item_id: 2,
            reviewer_email: "cgaucho2@ucsb.edu".into(),
            stars: 4,
            date_reviewed: "2022-01-02T12:00:00".into(),
            comments: "Good".into(),
        },
        MenuItemReview {
            id: 3,
            item_id: 3,
            reviewer_email: "cgaucho3@ucsb.edu".into(),
            stars: 5,
            date_reviewed: "2022-01-02T12:00:00".into(),
            comments: "Excellent".into(),
        },
    ]
}
