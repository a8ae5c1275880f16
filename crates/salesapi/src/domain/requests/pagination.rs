use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// A sortable column of a list endpoint, parsed from the `sortBy` query value.
pub trait SortKey: Copy + Default + std::fmt::Debug + Send + Sync {
    fn from_param(param: &str) -> Option<Self>;

    fn as_param(&self) -> &'static str;
}

/// Query string shared by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindAllQuery {
    #[serde(default = "default_page_number")]
    #[param(example = 1)]
    pub page_number: i32,

    #[serde(default = "default_page_size")]
    #[param(example = 10)]
    pub page_size: i32,

    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde(default = "default_is_ascending")]
    pub is_ascending: bool,
}

fn default_page_number() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

fn default_is_ascending() -> bool {
    true
}

impl Default for FindAllQuery {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            sort_by: None,
            is_ascending: default_is_ascending(),
        }
    }
}

impl FindAllQuery {
    /// Resolves `sortBy` against `S`. A missing value means the default column.
    /// An unknown one falls back to the default column sorted ascending,
    /// whatever `isAscending` says.
    pub fn page_request<S: SortKey>(&self) -> PageRequest<S> {
        let (sort, ascending) = match self.sort_by.as_deref() {
            None => (S::default(), self.is_ascending),
            Some(param) => match S::from_param(param) {
                Some(sort) => (sort, self.is_ascending),
                None => (S::default(), true),
            },
        };

        PageRequest {
            page_number: self.page_number,
            page_size: self.page_size,
            sort,
            ascending,
        }
    }
}

/// A resolved page window with a typed sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<S> {
    pub page_number: i32,
    pub page_size: i32,
    pub sort: S,
    pub ascending: bool,
}

impl<S> PageRequest<S> {
    /// Rows to take. Non-positive page sizes yield an empty page.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size.max(0))
    }

    /// Rows to skip, `(pageNumber - 1) * pageSize`, never negative.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page_number) - 1).max(0) * self.limit()
    }

    pub fn total_pages(&self, total_count: i64) -> i64 {
        let size = self.limit();
        if size == 0 {
            return 0;
        }
        (total_count.max(0) + size - 1) / size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    enum Column {
        #[default]
        Id,
        Name,
    }

    impl SortKey for Column {
        fn from_param(param: &str) -> Option<Self> {
            match param {
                "Id" => Some(Column::Id),
                "Name" => Some(Column::Name),
                _ => None,
            }
        }

        fn as_param(&self) -> &'static str {
            match self {
                Column::Id => "Id",
                Column::Name => "Name",
            }
        }
    }

    fn query(sort_by: Option<&str>, is_ascending: bool) -> FindAllQuery {
        FindAllQuery {
            sort_by: sort_by.map(str::to_string),
            is_ascending,
            ..FindAllQuery::default()
        }
    }

    #[test]
    fn known_column_keeps_requested_direction() {
        let page: PageRequest<Column> = query(Some("Name"), false).page_request();
        assert_eq!(page.sort, Column::Name);
        assert!(!page.ascending);
    }

    #[test]
    fn unknown_column_falls_back_to_default_ascending() {
        let page: PageRequest<Column> = query(Some("Nope"), false).page_request();
        assert_eq!(page.sort, Column::Id);
        assert!(page.ascending);

        let page: PageRequest<Column> = query(Some("name"), false).page_request();
        assert_eq!(page.sort, Column::Id, "column names are case-sensitive");
    }

    #[test]
    fn missing_column_uses_default_in_requested_direction() {
        let page: PageRequest<Column> = query(None, false).page_request();
        assert_eq!(page.sort, Column::Id);
        assert!(!page.ascending);
    }

    #[test]
    fn window_arithmetic() {
        let page = PageRequest {
            page_number: 3,
            page_size: 10,
            sort: Column::Id,
            ascending: true,
        };
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 20);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(20), 2);
        assert_eq!(page.total_pages(21), 3);
    }

    #[test]
    fn out_of_range_windows_are_clamped_not_rejected() {
        let zero_size = PageRequest {
            page_number: 2,
            page_size: 0,
            sort: Column::Id,
            ascending: true,
        };
        assert_eq!(zero_size.limit(), 0);
        assert_eq!(zero_size.offset(), 0);
        assert_eq!(zero_size.total_pages(42), 0);

        let negative = PageRequest {
            page_number: -4,
            page_size: -5,
            sort: Column::Id,
            ascending: true,
        };
        assert_eq!(negative.limit(), 0);
        assert_eq!(negative.offset(), 0);

        let huge = PageRequest {
            page_number: i32::MAX,
            page_size: i32::MAX,
            sort: Column::Id,
            ascending: true,
        };
        assert_eq!(
            huge.offset(),
            (i64::from(i32::MAX) - 1) * i64::from(i32::MAX)
        );
    }

    #[test]
    fn query_defaults_match_the_dashboard() {
        let parsed: FindAllQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.page_number, 1);
        assert_eq!(parsed.page_size, 10);
        assert!(parsed.sort_by.is_none());
        assert!(parsed.is_ascending);

        let parsed: FindAllQuery = serde_json::from_str(
            r#"{"pageNumber":2,"pageSize":5,"sortBy":"Name","isAscending":false}"#,
        )
        .unwrap();
        assert_eq!(parsed.page_number, 2);
        assert_eq!(parsed.page_size, 5);
        assert_eq!(parsed.sort_by.as_deref(), Some("Name"));
        assert!(!parsed.is_ascending);
        assert_eq!(Column::Name.as_param(), "Name");
    }
}
