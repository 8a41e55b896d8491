pub const ALL: &str = "All";

pub trait Categorized {
    fn category(&self) -> &str;
}

/// Items whose category equals `selected` exactly (case-sensitive), or all of
/// them for [`ALL`].
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected == ALL || item.category() == selected)
        .collect()
}

pub fn categories<'a, T: Categorized>(items: &'a [T]) -> Vec<&'a str> {
    let mut tabs = vec![ALL];
    for item in items {
        let category = item.category();
        if !tabs.contains(&category) {
            tabs.push(category);
        }
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Post(&'static str);

    impl Categorized for Post {
        fn category(&self) -> &str {
            self.0
        }
    }

    fn posts() -> Vec<Post> {
        vec![Post("AI"), Post("Web"), Post("AI")]
    }

    #[test]
    fn filters_by_exact_category() {
        let posts = posts();
        assert_eq!(filter_by_category(&posts, "AI").len(), 2);
        assert_eq!(filter_by_category(&posts, "All").len(), 3);
        assert_eq!(filter_by_category(&posts, "Design").len(), 0);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let posts = posts();
        assert!(filter_by_category(&posts, "ai").is_empty());
        assert!(filter_by_category(&posts, "all").is_empty());
    }

    #[test]
    fn filtered_items_keep_order() {
        let posts = vec![Post("Web"), Post("AI"), Post("Web")];
        let picked: Vec<*const Post> = filter_by_category(&posts, "Web")
            .into_iter()
            .map(|p| p as *const Post)
            .collect();
        assert_eq!(picked, vec![&posts[0] as *const Post, &posts[2] as *const Post]);
    }

    #[test]
    fn tabs_start_with_all() {
        assert_eq!(categories(&posts()), vec!["All", "AI", "Web"]);
        assert_eq!(categories::<Post>(&[]), vec!["All"]);
    }
}
