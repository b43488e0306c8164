/// Launches endpoint of the public SpaceX v3 API.
pub const DEFAULT_ENDPOINT: &str = "https://api.spacexdata.com/v3/launches";

/// One of the four filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Year,
    Success,
    Category,
    Query,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Year,
        FilterField::Success,
        FilterField::Category,
        FilterField::Query,
    ];

    /// Identifier of the matching control on the launches page.
    pub fn element_id(self) -> &'static str {
        match self {
            FilterField::Year => "launchYear",
            FilterField::Success => "launchSuccess",
            FilterField::Category => "searchCategory",
            FilterField::Query => "searchQuery",
        }
    }

    /// Short command-line name.
    pub fn keyword(self) -> &'static str {
        match self {
            FilterField::Year => "year",
            FilterField::Success => "success",
            FilterField::Category => "category",
            FilterField::Query => "query",
        }
    }

    /// Resolves either the keyword or the element id (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            field.keyword().eq_ignore_ascii_case(name)
                || field.element_id().eq_ignore_ascii_case(name)
        })
    }
}

/// Current contents of the filter controls. Values are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    year: String,
    success: String,
    category: String,
    query: String,
}

impl Filters {
    pub fn new(
        year: impl AsRef<str>,
        success: impl AsRef<str>,
        category: impl AsRef<str>,
        query: impl AsRef<str>,
    ) -> Self {
        let mut filters = Self::default();
        filters.set(FilterField::Year, year.as_ref());
        filters.set(FilterField::Success, success.as_ref());
        filters.set(FilterField::Category, category.as_ref());
        filters.set(FilterField::Query, query.as_ref());
        filters
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Year => &self.year,
            FilterField::Success => &self.success,
            FilterField::Category => &self.category,
            FilterField::Query => &self.query,
        }
    }

    pub fn set(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::Year => &mut self.year,
            FilterField::Success => &mut self.success,
            FilterField::Category => &mut self.category,
            FilterField::Query => &mut self.query,
        };
        *slot = value.trim().to_string();
    }
}

/// Builds the request URL for `filters` against `base_url`.
///
/// Segments are appended as `&key=value` in the fixed order year, success,
/// category+query, and only for non-empty fields. The category segment is
/// guarded by the query text alone. Values are not validated or escaped.
pub fn build_query(base_url: &str, filters: &Filters) -> String {
    let mut url = String::from(base_url);
    if !url.contains('?') {
        url.push('?');
    }

    if !filters.year.is_empty() {
        url.push_str("&launch_year=");
        url.push_str(&filters.year);
    }

    if !filters.success.is_empty() {
        url.push_str("&launch_success=");
        url.push_str(&filters.success);
    }

    if !filters.query.is_empty() {
        url.push('&');
        url.push_str(&filters.category);
        url.push('=');
        url.push_str(&filters.query);
    }

    url
}
