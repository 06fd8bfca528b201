use heavyweight_core::{PaginatedResponse, PaginationParams};

use super::model::Name;

pub struct ExampleService;

impl ExampleService {
    /// Filters by the search term, sorts by first then last name when an
    /// order was requested, and cuts out the requested page. Without an
    /// order the seed order is kept.
    pub fn list_names(names: &[Name], params: &PaginationParams) -> PaginatedResponse<Name> {
        let mut matched: Vec<Name> = match params.search() {
            Some(term) => names.iter().filter(|n| n.matches(term)).cloned().collect(),
            None => names.to_vec(),
        };

        if let Some(order) = params.requested_order() {
            order.sort_by_key(&mut matched, |n| {
                (n.first_name.clone(), n.last_name.clone())
            });
        }

        PaginatedResponse::from_slice(&matched, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heavyweight_core::SortOrder;

    fn first_names(response: &PaginatedResponse<Name>) -> Vec<&str> {
        response.data.iter().map(|n| n.first_name.as_str()).collect()
    }

    #[test]
    fn test_default_params_keep_seed_order() {
        let response = ExampleService::list_names(&Name::seeded(), &PaginationParams::default());

        assert_eq!(first_names(&response), vec!["Alice", "Bob", "Charlie", "Dora"]);
        assert_eq!(response.meta.total_no_items, 4);
        assert_eq!(response.meta.total_no_pages, 0);
        assert_eq!(response.meta.count, 4);
    }

    #[test]
    fn test_unsorted_input_kept_without_order() {
        let names = vec![Name::new("Zoe", "Adams"), Name::new("Ann", "Baker")];
        let response = ExampleService::list_names(&names, &PaginationParams::default());

        assert_eq!(first_names(&response), vec!["Zoe", "Ann"]);
    }

    #[test]
    fn test_descending_order() {
        let params = PaginationParams::new(None, 1, 10, SortOrder::Desc);
        let response = ExampleService::list_names(&Name::seeded(), &params);

        assert_eq!(first_names(&response), vec!["Dora", "Charlie", "Bob", "Alice"]);
    }

    #[test]
    fn test_ascending_order() {
        let params = PaginationParams::new(None, 1, 10, SortOrder::Asc);
        let response = ExampleService::list_names(&Name::seeded(), &params);

        assert_eq!(first_names(&response), vec!["Alice", "Bob", "Charlie", "Dora"]);
    }

    #[test]
    fn test_search_matches_last_name_case_insensitively() {
        let params = PaginationParams::new(Some("BUILD".to_string()), 1, 10, SortOrder::Asc);
        let response = ExampleService::list_names(&Name::seeded(), &params);

        assert_eq!(first_names(&response), vec!["Bob"]);
        assert_eq!(response.meta.total_no_items, 1);
    }

    #[test]
    fn test_search_without_match() {
        let params = PaginationParams::new(Some("zelda".to_string()), 1, 10, SortOrder::Asc);
        let response = ExampleService::list_names(&Name::seeded(), &params);

        assert!(response.data.is_empty());
        assert_eq!(response.meta.total_no_items, 0);
        assert!(!response.meta.has_next_page);
    }

    #[test]
    fn test_second_page() {
        let params = PaginationParams::new(None, 2, 2, SortOrder::Asc);
        let response = ExampleService::list_names(&Name::seeded(), &params);

        assert_eq!(first_names(&response), vec!["Charlie", "Dora"]);
        assert_eq!(response.meta.total_no_pages, 2);
        assert!(!response.meta.has_next_page);
        assert!(response.meta.has_prev_page);
    }

    #[test]
    fn test_ties_on_first_name_sorted_by_last_name() {
        let names = vec![
            Name::new("Ada", "Zed"),
            Name::new("Ada", "Byron"),
            Name::new("Ada", "Lovelace"),
        ];
        let params = PaginationParams::new(None, 1, 10, SortOrder::Asc);
        let response = ExampleService::list_names(&names, &params);

        let last: Vec<&str> = response.data.iter().map(|n| n.last_name.as_str()).collect();
        assert_eq!(last, vec!["Byron", "Lovelace", "Zed"]);
    }
}
