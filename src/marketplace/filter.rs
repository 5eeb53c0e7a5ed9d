//! Generic filter and sort engine shared by every panel.
//!
//! A panel describes what it wants to see as a [`Query`]: a free-text search
//! string, any number of enum selections and an optional descending sort key.
//! [`Query::apply`] turns a sample collection into the ordered subset of
//! records satisfying all active predicates without touching the source.

use std::cmp::Ordering;

/// Token used by every selector for "no constraint".
///
pub const ALL_TOKEN: &str = "all";

/// A closed enumeration whose members can be selected in a filter.
///
pub trait Choice: Copy + PartialEq + 'static {
    /// Every member, in display order.
    const ALL: &'static [Self];

    /// Stable lowercase token of the member.
    fn as_str(&self) -> &'static str;

    /// Parse a token back into a member.
    ///
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == raw)
    }
}

/// Records exposing the text fields a panel searches over.
///
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Selector state for one enum field.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<E> {
    All,
    Only(E),
}

impl<E> Default for Selection<E> {
    fn default() -> Self {
        Selection::All
    }
}

impl<E: Choice> Selection<E> {
    /// Parse a selector token. The `all` sentinel and any unrecognized token
    /// both mean "no constraint".
    ///
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_TOKEN {
            return Selection::All;
        }
        match E::parse(raw) {
            Some(choice) => Selection::Only(choice),
            None => {
                log::debug!("Ignoring unrecognized filter value '{}'", raw);
                Selection::All
            }
        }
    }

    /// Return the token for this selection.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::All => ALL_TOKEN,
            Selection::Only(choice) => choice.as_str(),
        }
    }

    /// Step to the next member, wrapping back to `All` after the last one.
    ///
    pub fn cycle(&self) -> Self {
        match self {
            Selection::All => E::ALL.first().map_or(Selection::All, |c| Selection::Only(*c)),
            Selection::Only(current) => {
                let index = E::ALL.iter().position(|c| c == current).unwrap_or(0);
                match E::ALL.get(index + 1) {
                    Some(next) => Selection::Only(*next),
                    None => Selection::All,
                }
            }
        }
    }

    /// Whether the given value passes this selection.
    ///
    pub fn matches(&self, value: E) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(choice) => *choice == value,
        }
    }
}

/// Selector over a free-text field such as a category name.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFilter {
    value: Option<String>,
}

impl TextFilter {
    /// Parse a selector value; `all` and the empty string clear the filter.
    ///
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_TOKEN {
            TextFilter { value: None }
        } else {
            TextFilter {
                value: Some(raw.to_string()),
            }
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn matches(&self, field: &str) -> bool {
        match &self.value {
            Some(value) => value == field,
            None => true,
        }
    }

    /// Step through `options` in order, then back to "all".
    ///
    pub fn cycle(&self, options: &[&str]) -> Self {
        let next = match &self.value {
            None => options.first(),
            Some(current) => options
                .iter()
                .position(|o| o == current)
                .and_then(|i| options.get(i + 1)),
        };
        TextFilter {
            value: next.map(|s| s.to_string()),
        }
    }
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type SortKey<'a, T> = Box<dyn Fn(&T) -> f64 + 'a>;

/// A set of active criteria over records of type `T`.
///
pub struct Query<'a, T> {
    needle: String,
    predicates: Vec<Predicate<'a, T>>,
    sort_key: Option<SortKey<'a, T>>,
}

impl<'a, T: Searchable> Query<'a, T> {
    /// Start a query from a search string. Matching is a case-insensitive
    /// substring test against the record's search fields; only the empty
    /// string matches everything.
    ///
    pub fn new(search: &str) -> Self {
        Query {
            needle: search.to_lowercase(),
            predicates: vec![],
            sort_key: None,
        }
    }

    /// Require the enum field picked by `field` to pass `selection`.
    ///
    pub fn select<E, F>(mut self, selection: Selection<E>, field: F) -> Self
    where
        E: Choice,
        F: Fn(&T) -> E + 'a,
    {
        if let Selection::Only(_) = selection {
            self.predicates
                .push(Box::new(move |record| selection.matches(field(record))));
        }
        self
    }

    /// Require the text field picked by `field` to pass `filter`.
    ///
    pub fn select_text<F>(mut self, filter: &TextFilter, field: F) -> Self
    where
        F: Fn(&T) -> &str + 'a,
    {
        if filter.value().is_some() {
            let filter = filter.clone();
            self.predicates
                .push(Box::new(move |record| filter.matches(field(record))));
        }
        self
    }

    /// Add an arbitrary predicate.
    ///
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Order the result by `key`, largest first. Ties keep their original
    /// relative order.
    ///
    pub fn sort_desc<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> f64 + 'a,
    {
        self.sort_key = Some(Box::new(key));
        self
    }

    /// Whether a single record passes the search and every predicate.
    ///
    pub fn matches(&self, record: &T) -> bool {
        let found = self.needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle));
        found && self.predicates.iter().all(|predicate| predicate(record))
    }

    /// Produce the derived view of `records`.
    ///
    pub fn apply<'r>(&self, records: &'r [T]) -> Vec<&'r T> {
        let mut result: Vec<&T> = records.iter().filter(|r| self.matches(r)).collect();
        if let Some(key) = &self.sort_key {
            // slice::sort_by is stable
            result.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Dummy, Fake, Faker};
    use rand::Rng;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Colour {
        Red,
        Green,
        Blue,
    }

    impl Choice for Colour {
        const ALL: &'static [Self] = &[Colour::Red, Colour::Green, Colour::Blue];

        fn as_str(&self) -> &'static str {
            match self {
                Colour::Red => "red",
                Colour::Green => "green",
                Colour::Blue => "blue",
            }
        }
    }

    impl Dummy<Faker> for Colour {
        fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
            Colour::ALL[rng.gen_range(0..Colour::ALL.len())]
        }
    }

    #[derive(Clone, Debug, Dummy, PartialEq)]
    struct Item {
        name: String,
        tag: String,
        colour: Colour,
        #[dummy(faker = "0..100")]
        score: u32,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name, &self.tag]
        }
    }

    fn item(name: &str, colour: Colour, score: u32) -> Item {
        Item {
            name: name.to_string(),
            tag: String::new(),
            colour,
            score,
        }
    }

    fn is_ordered_subset(subset: &[&Item], source: &[Item]) -> bool {
        let mut cursor = 0;
        for wanted in subset {
            match source[cursor..].iter().position(|s| std::ptr::eq(s, *wanted)) {
                Some(offset) => cursor += offset + 1,
                None => return false,
            }
        }
        true
    }

    #[test]
    fn selection_parse_treats_all_and_unknown_as_unconstrained() {
        assert_eq!(Selection::<Colour>::parse("all"), Selection::All);
        assert_eq!(Selection::<Colour>::parse("purple"), Selection::All);
        assert_eq!(Selection::<Colour>::parse(""), Selection::All);
        assert_eq!(
            Selection::<Colour>::parse("green"),
            Selection::Only(Colour::Green)
        );
    }

    #[test]
    fn selection_cycle_visits_every_member_then_all() {
        let mut selection = Selection::<Colour>::All;
        let mut seen = vec![];
        for _ in 0..Colour::ALL.len() {
            selection = selection.cycle();
            seen.push(selection);
        }
        assert_eq!(
            seen,
            vec![
                Selection::Only(Colour::Red),
                Selection::Only(Colour::Green),
                Selection::Only(Colour::Blue)
            ]
        );
        assert_eq!(selection.cycle(), Selection::All);
    }

    #[test]
    fn text_filter_cycle_and_match() {
        let options = ["Design", "Web Development"];
        let filter = TextFilter::default();
        assert!(filter.matches("anything"));
        let filter = filter.cycle(&options);
        assert_eq!(filter.value(), Some("Design"));
        assert!(filter.matches("Design"));
        assert!(!filter.matches("Web Development"));
        let filter = filter.cycle(&options).cycle(&options);
        assert_eq!(filter.value(), None);
        assert_eq!(TextFilter::parse("all").value(), None);
    }

    #[test]
    fn empty_search_and_all_selection_is_identity() {
        let items: Vec<Item> = (0..12).map(|_| Faker.fake()).collect();
        let query = Query::new("").select(Selection::All, |i: &Item| i.colour);
        let result = query.apply(&items);
        assert_eq!(result.len(), items.len());
        assert!(result.iter().zip(items.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![
            item("Mike Chen", Colour::Red, 1),
            item("Sarah Johnson", Colour::Red, 2),
            item("CHENNAI office", Colour::Blue, 3),
        ];
        let result = Query::new("chen").apply(&items);
        let names: Vec<&str> = result.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Mike Chen", "CHENNAI office"]);
    }

    #[test]
    fn whitespace_in_search_is_literal() {
        let items = vec![
            item("MikeChen", Colour::Red, 1),
            item("Mike Chen", Colour::Blue, 2),
        ];
        assert!(Query::new("   ").apply(&items).is_empty());
        assert!(Query::new("chen ").apply(&items).is_empty());

        let result = Query::new(" chen").apply(&items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Mike Chen");
    }

    #[test]
    fn all_predicates_must_hold() {
        let items = vec![
            item("a", Colour::Red, 1),
            item("ab", Colour::Blue, 2),
            item("abc", Colour::Red, 3),
        ];
        let result = Query::new("ab")
            .select(Selection::Only(Colour::Red), |i: &Item| i.colour)
            .apply(&items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "abc");
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let items = vec![
            item("first", Colour::Red, 5),
            item("second", Colour::Red, 9),
            item("third", Colour::Red, 5),
            item("fourth", Colour::Red, 1),
        ];
        let result = Query::new("")
            .sort_desc(|i: &Item| i.score as f64)
            .apply(&items);
        let names: Vec<&str> = result.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first", "third", "fourth"]);
    }

    #[test]
    fn random_queries_yield_ordered_idempotent_subsets() {
        for _ in 0..50 {
            let items: Vec<Item> = (0..(0..20).fake::<usize>()).map(|_| Faker.fake()).collect();
            let needle: String = (0..2).fake::<String>();
            let selection: Selection<Colour> = if (0..2).fake::<u8>() == 0 {
                Selection::All
            } else {
                Selection::Only(Faker.fake())
            };
            let query = Query::new(&needle).select(selection, |i: &Item| i.colour);

            let before = items.clone();
            let first = query.apply(&items);
            let second = query.apply(&items);

            assert_eq!(items, before);
            assert_eq!(first, second);
            assert!(is_ordered_subset(&first, &items));
            assert!(first.iter().all(|i| selection.matches(i.colour)));
        }
    }
}
