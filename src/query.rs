//! Query string construction for the search and filter helpers.
//!
//! Parameters are encoded with `application/x-www-form-urlencoded` rules and
//! appear in insertion order.

use indexmap::IndexMap;
use std::fmt;
use url::form_urlencoded;

/// Filter fields in the order they are added to the query
pub type Filters = IndexMap<String, FilterValue>;

/// A scalar filter value
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Integer(n) => write!(f, "{}", n),
            FilterValue::Float(n) => f.write_str(&number_string(*n)),
        }
    }
}

/// Render a float the way JavaScript's `String(number)` does: `NaN`,
/// `Infinity`, and exponent notation outside `[1e-6, 1e21)`.
fn number_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        // -0 prints as "0"
        format!("{}", n + 0.0)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

/// Sort direction for filtered queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value used for `_order`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorting and pagination options for filtered queries.
///
/// Options that are unset, or set to an empty string or zero, are left out
/// of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Field to sort by (`_sort`)
    pub sort_by: Option<String>,
    /// Sort direction (`_order`)
    pub order: Option<SortOrder>,
    /// Maximum number of results (`_limit`)
    pub limit: Option<u32>,
    /// Offset of the first result (`_start`)
    pub start: Option<u32>,
}

impl FilterOptions {
    /// Create options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field to sort by
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    /// Set the sort direction
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the maximum number of results
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the offset of the first result
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }
}

/// Build the `<field>_like=<term>` query for a simple search.
///
/// Returns `None` when the term is empty, meaning the whole collection.
pub fn search_query(field: &str, term: &str) -> Option<String> {
    if term.is_empty() {
        return None;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(&format!("{}_like", field), term)
        .finish();
    Some(query)
}

/// Build the query for a filtered, sorted and paginated listing.
pub fn filter_query(filters: &Filters, options: &FilterOptions) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (field, value) in filters {
        serializer.append_pair(field, &value.to_string());
    }

    if let Some(sort_by) = options.sort_by.as_deref().filter(|s| !s.is_empty()) {
        serializer.append_pair("_sort", sort_by);
    }
    if let Some(order) = options.order {
        serializer.append_pair("_order", order.as_str());
    }
    if let Some(limit) = options.limit.filter(|&n| n != 0) {
        serializer.append_pair("_limit", &limit.to_string());
    }
    if let Some(start) = options.start.filter(|&n| n != 0) {
        serializer.append_pair("_start", &start.to_string());
    }

    serializer.finish()
}

/// Join a path and a query, leaving out the `?` when the query is empty.
pub(crate) fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(pairs: &[(&str, FilterValue)]) -> Filters {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_search_query_empty_term() {
        assert_eq!(search_query("name", ""), None);
    }

    #[test]
    fn test_search_query_with_term() {
        assert_eq!(search_query("name", "Lea"), Some("name_like=Lea".to_string()));
    }

    #[test]
    fn test_search_query_encodes_term() {
        assert_eq!(
            search_query("name", "Leanne Graham&co"),
            Some("name_like=Leanne+Graham%26co".to_string())
        );
    }

    #[test]
    fn test_filter_query_full() {
        let f = filters(&[("name", "Lea".into())]);
        let options = FilterOptions::new()
            .sort_by("name")
            .order(SortOrder::Asc)
            .limit(5);
        assert_eq!(filter_query(&f, &options), "name=Lea&_sort=name&_order=asc&_limit=5");
    }

    #[test]
    fn test_filter_query_keeps_insertion_order() {
        let f = filters(&[("username", "Bret".into()), ("id", 1i64.into()), ("score", 2.5.into())]);
        assert_eq!(filter_query(&f, &FilterOptions::default()), "username=Bret&id=1&score=2.5");
    }

    #[test]
    fn test_filter_query_zero_limit_and_start_omitted() {
        let options = FilterOptions::new().limit(0).start(0);
        assert_eq!(filter_query(&Filters::new(), &options), "");
    }

    #[test]
    fn test_filter_query_empty_sort_omitted() {
        let options = FilterOptions::new().sort_by("").order(SortOrder::Desc).start(10);
        assert_eq!(filter_query(&Filters::new(), &options), "_order=desc&_start=10");
    }

    #[test]
    fn test_filter_value_display() {
        assert_eq!(FilterValue::from(42i64).to_string(), "42");
        assert_eq!(FilterValue::from(1.0).to_string(), "1");
        assert_eq!(FilterValue::from("x").to_string(), "x");
    }

    #[test]
    fn test_float_filters_match_javascript_strings() {
        let f = filters(&[
            ("big", 1e21.into()),
            ("tiny", 1.5e-7.into()),
            ("inf", f64::INFINITY.into()),
            ("ninf", f64::NEG_INFINITY.into()),
            ("nan", f64::NAN.into()),
            ("negzero", (-0.0).into()),
            ("plain", 123456.789.into()),
        ]);
        assert_eq!(
            filter_query(&f, &FilterOptions::default()),
            "big=1e%2B21&tiny=1.5e-7&inf=Infinity&ninf=-Infinity&nan=NaN&negzero=0&plain=123456.789"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/users", ""), "/users");
        assert_eq!(with_query("/users", "a=1"), "/users?a=1");
    }
}
