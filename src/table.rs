//! Generic table view engine: filtering, sorting and paging.
//!
//! The engine is a pure function of a record slice and a [`ViewState`]
//! snapshot. Every state change is followed by a full call to [`render`];
//! nothing is cached between calls.

use std::cmp::Ordering;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    String(String),
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.partial_cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Trait for table row items.
pub trait TableRow {
    /// Field selector used for sorting.
    type Field: Copy + PartialEq;

    /// Sort key for the specified field.
    fn sort_key(&self, field: Self::Field) -> SortKey;

    /// Check if the row matches a non-empty search term.
    fn matches_filter(&self, term: &str) -> bool;
}

/// Sort direction of the active field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Marker shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// User-controlled view parameters: search, sort and page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<F> {
    pub search_term: String,
    pub sort_field: F,
    pub sort_direction: SortDirection,
    /// 1-based page index.
    pub current_page: usize,
    pub page_size: usize,
}

impl<F: Copy + PartialEq> ViewState<F> {
    pub fn new(sort_field: F, sort_direction: SortDirection) -> Self {
        Self {
            search_term: String::new(),
            sort_field,
            sort_direction,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Page size with zero treated as one.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Replaces the search term and clamps the page to the new result set.
    pub fn set_search_term<T>(&mut self, term: impl Into<String>, records: &[T])
    where
        T: TableRow<Field = F>,
    {
        self.search_term = term.into();
        let count = filter_records(records, &self.search_term).len();
        let pages = total_pages(count, self.page_size);
        self.current_page = clamp_page(self.current_page, pages);
    }

    /// Selects a sort field: a new field starts ascending, the active one flips.
    pub fn toggle_sort(&mut self, field: F) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.reversed();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to_page(self.current_page.saturating_add(1), total_pages);
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.current_page = total_pages.max(1);
    }
}

/// Result of applying a [`ViewState`] to a record set.
#[derive(Debug, Clone)]
pub struct DerivedView<'a, T> {
    /// Rows of the current page, in display order.
    pub visible: Vec<&'a T>,
    pub total_pages: usize,
    /// Page actually shown after clamping.
    pub current_page: usize,
    /// Number of records that passed the filter.
    pub filtered_count: usize,
}

impl<T> DerivedView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Number of pages needed for `count` rows (zero when there are no rows).
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamps a page request into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns rows matching the search term, in input order.
pub fn filter_records<'a, T: TableRow>(records: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|item| item.matches_filter(term))
        .collect()
}

/// Stable sort on a single field. Ties keep their input order.
pub fn sort_records<T: TableRow>(rows: &mut [&T], field: T::Field, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let cmp = a
            .sort_key(field)
            .partial_cmp(&b.sort_key(field))
            .unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Filters, sorts and pages `records` according to `state`.
pub fn render<'a, T: TableRow>(records: &'a [T], state: &ViewState<T::Field>) -> DerivedView<'a, T> {
    let mut rows = filter_records(records, &state.search_term);
    sort_records(&mut rows, state.sort_field, state.sort_direction);

    let page_size = state.effective_page_size();
    let filtered_count = rows.len();
    let pages = total_pages(filtered_count, page_size);
    let current_page = clamp_page(state.current_page, pages);

    let start = ((current_page - 1) * page_size).min(filtered_count);
    let end = (start + page_size).min(filtered_count);
    let visible = rows[start..end].to_vec();

    DerivedView {
        visible,
        total_pages: pages,
        current_page,
        filtered_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        name: String,
        score: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum ItemField {
        Id,
        Name,
        Score,
    }

    impl TableRow for Item {
        type Field = ItemField;

        fn sort_key(&self, field: ItemField) -> SortKey {
            match field {
                ItemField::Id => SortKey::Integer(self.id as i64),
                ItemField::Name => SortKey::String(self.name.clone()),
                ItemField::Score => SortKey::Float(self.score),
            }
        }

        fn matches_filter(&self, term: &str) -> bool {
            self.name.contains(term) || self.id.to_string().contains(term)
        }
    }

    fn items(n: u32) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                name: format!("item-{}", (id * 7) % 13),
                score: ((id * 37) % 11) as f64 / 2.0,
            })
            .collect()
    }

    fn ids(view: &DerivedView<'_, Item>) -> Vec<u32> {
        view.visible.iter().map(|i| i.id).collect()
    }

    fn state(field: ItemField, direction: SortDirection) -> ViewState<ItemField> {
        ViewState::new(field, direction)
    }

    #[test]
    fn arrow_marks_direction() {
        assert_eq!(SortDirection::Ascending.arrow(), "▲");
        assert_eq!(SortDirection::Descending.arrow(), "▼");
        assert_eq!(SortDirection::Ascending.reversed().arrow(), "▼");
    }

    #[test]
    fn sort_key_orders_within_type_only() {
        assert!(SortKey::Integer(1) < SortKey::Integer(2));
        assert!(SortKey::Float(0.5) < SortKey::Float(1.5));
        assert!(SortKey::String("a".into()) < SortKey::String("b".into()));
        assert_eq!(
            SortKey::Integer(1).partial_cmp(&SortKey::String("1".into())),
            None
        );
    }

    #[test]
    fn empty_search_keeps_every_record() {
        for n in [0, 1, 9, 10, 11, 37] {
            let data = items(n);
            assert_eq!(filter_records(&data, "").len(), data.len());
        }
    }

    #[test]
    fn filtered_rows_all_match_term() {
        let data = items(40);
        for term in ["item-1", "3", "item-12", "zzz"] {
            let rows = filter_records(&data, term);
            assert!(rows.iter().all(|r| r.matches_filter(term)));
            let expected = data.iter().filter(|r| r.matches_filter(term)).count();
            assert_eq!(rows.len(), expected);
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let data = items(25);
        let mut once = filter_records(&data, "");
        sort_records(&mut once, ItemField::Score, SortDirection::Ascending);
        let mut twice = once.clone();
        sort_records(&mut twice, ItemField::Score, SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn descending_is_exact_reverse_without_ties() {
        let data = items(25);
        let mut asc = filter_records(&data, "");
        sort_records(&mut asc, ItemField::Id, SortDirection::Ascending);
        let mut desc = filter_records(&data, "");
        sort_records(&mut desc, ItemField::Id, SortDirection::Descending);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let data = vec![
            Item { id: 1, name: "b".into(), score: 1.0 },
            Item { id: 2, name: "a".into(), score: 1.0 },
            Item { id: 3, name: "c".into(), score: 2.0 },
            Item { id: 4, name: "d".into(), score: 1.0 },
        ];
        let asc = render(&data, &state(ItemField::Score, SortDirection::Ascending));
        assert_eq!(ids(&asc), vec![1, 2, 4, 3]);
        let desc = render(&data, &state(ItemField::Score, SortDirection::Descending));
        assert_eq!(ids(&desc), vec![3, 1, 2, 4]);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let data = items(25);
        let mut s = state(ItemField::Id, SortDirection::Ascending);

        s.current_page = 1;
        let first = render(&data, &s);
        s.current_page = 0;
        let zero = render(&data, &s);
        assert_eq!(ids(&first), ids(&zero));
        assert_eq!(zero.current_page, 1);

        s.current_page = first.total_pages;
        let last = render(&data, &s);
        s.current_page = first.total_pages + 5;
        let beyond = render(&data, &s);
        assert_eq!(ids(&last), ids(&beyond));
        assert_eq!(beyond.current_page, 3);
        assert_eq!(ids(&beyond), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let data = items(12);
        let mut s = state(ItemField::Id, SortDirection::Ascending);
        s.search_term = "nothing matches".into();
        let view = render(&data, &s);
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.filtered_count, 0);
    }

    #[test]
    fn second_page_starts_after_first_page() {
        let data = items(25);
        let mut s = state(ItemField::Id, SortDirection::Ascending);
        s.current_page = 2;
        let view = render(&data, &s);
        assert_eq!(view.visible.len(), 10);
        assert_eq!(view.visible[0].id, 11);
    }

    #[test]
    fn search_change_clamps_current_page() {
        let data = items(25);
        let mut s = state(ItemField::Id, SortDirection::Ascending);
        s.current_page = 3;
        s.set_search_term("item-1", &data);
        let pages = total_pages(filter_records(&data, "item-1").len(), 10);
        assert!(s.current_page <= pages.max(1));
        assert!(s.current_page >= 1);

        s.set_search_term("nope", &data);
        assert_eq!(s.current_page, 1);

        s.current_page = 2;
        s.set_search_term("", &data);
        assert_eq!(s.current_page, 2);
    }

    #[test]
    fn toggle_sort_flips_or_resets() {
        let mut s = state(ItemField::Id, SortDirection::Descending);
        s.toggle_sort(ItemField::Id);
        assert_eq!(s.sort_direction, SortDirection::Ascending);
        s.toggle_sort(ItemField::Id);
        assert_eq!(s.sort_direction, SortDirection::Descending);

        s.toggle_sort(ItemField::Name);
        assert_eq!(s.sort_field, ItemField::Name);
        assert_eq!(s.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn page_navigation_stays_in_bounds() {
        let mut s = state(ItemField::Id, SortDirection::Ascending);
        s.prev_page();
        assert_eq!(s.current_page, 1);
        s.next_page(3);
        s.next_page(3);
        s.next_page(3);
        assert_eq!(s.current_page, 3);
        s.go_to_page(0, 3);
        assert_eq!(s.current_page, 1);
        s.last_page(3);
        assert_eq!(s.current_page, 3);
        s.last_page(0);
        assert_eq!(s.current_page, 1);
        s.go_to_page(2, 3);
        s.first_page();
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let data = items(3);
        let s = state(ItemField::Id, SortDirection::Ascending).with_page_size(0);
        let view = render(&data, &s);
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view), vec![1]);
    }
}
