//! Search and Sort
//!
//! Derives the visible rows of a table from its collection: filter by a
//! case-insensitive substring query, then sort a copy. The source is never touched.

use std::cmp::Ordering;

/// Records that can be matched by the search box
pub trait Searchable {
    /// Fields the query is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// Records that can be sorted by a column of type `F`
pub trait SortKey<F> {
    fn sort_key(&self, field: F) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F) -> Self {
        Self { field, order: SortOrder::Asc }
    }

    /// Column header click: same column flips direction, another column starts ascending
    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.order = self.order.reversed();
        } else {
            self.field = field;
            self.order = SortOrder::Asc;
        }
    }

    pub fn is_active(&self, field: F) -> bool {
        self.field == field
    }
}

/// Case-insensitive substring match against any search field. An empty query matches everything.
pub fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_records<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| matches_query(*record, query))
        .cloned()
        .collect()
}

pub fn sort_records<T: SortKey<F>, F: Copy>(records: &mut [T], sort: SortState<F>) {
    sort_records_by(records, sort, locale_compare);
}

/// Sort with a caller-supplied string collation, e.g. the browser's own
pub fn sort_records_by<T, F, C>(records: &mut [T], sort: SortState<F>, compare: C)
where
    T: SortKey<F>,
    F: Copy,
    C: Fn(&str, &str) -> Ordering,
{
    records.sort_by(|a, b| {
        let ordering = compare(a.sort_key(sort.field), b.sort_key(sort.field));
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Visible rows: filter first, then sort the filtered copy
pub fn filter_and_sort<T, F>(records: &[T], query: &str, sort: SortState<F>) -> Vec<T>
where
    T: Searchable + SortKey<F> + Clone,
    F: Copy,
{
    filter_and_sort_by(records, query, sort, locale_compare)
}

pub fn filter_and_sort_by<T, F, C>(records: &[T], query: &str, sort: SortState<F>, compare: C) -> Vec<T>
where
    T: Searchable + SortKey<F> + Clone,
    F: Copy,
    C: Fn(&str, &str) -> Ordering,
{
    let mut visible = filter_records(records, query);
    sort_records_by(&mut visible, sort, compare);
    visible
}

/// Collation close to ICU root order, the default of a browser's `localeCompare`:
/// case and common Latin accents are ignored first; whitespace sorts before
/// punctuation and symbols, which sort before digits, then letters. Ties fall back
/// to accent, then case.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(collation_key)
        .cmp(b.chars().map(collation_key))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// ASCII punctuation and symbols in ICU root order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Rank after every ASCII entry, for punctuation with no ASCII counterpart
const OTHER_PUNCTUATION: u16 = 100;

fn collation_key(c: char) -> (u8, u16, char) {
    if c.is_whitespace() {
        return (0, 0, c);
    }
    if let Some(rank) = punctuation_rank(c) {
        return (1, rank, c);
    }
    let class = if c.is_numeric() { 2 } else { 3 };
    (class, 0, fold_accent(c.to_lowercase().next().unwrap_or(c)))
}

/// Position among punctuation; typographic variants share their ASCII neighbour's rank
fn punctuation_rank(c: char) -> Option<u16> {
    let ascii = match c {
        '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
        '\u{2018}'..='\u{201B}' | '\u{2032}' => '\'',
        '\u{201C}'..='\u{201F}' | '\u{00AB}' | '\u{00BB}' | '\u{2033}' => '"',
        '\u{2026}' | '\u{00B7}' | '\u{2022}' => '.',
        '\u{00A1}' => '!',
        '\u{00BF}' => '?',
        other => other,
    };
    if let Some(pos) = PUNCTUATION_ORDER.find(ascii) {
        return Some(pos as u16);
    }
    is_other_punctuation(c).then_some(OTHER_PUNCTUATION)
}

/// Non-ASCII punctuation and symbol blocks
fn is_other_punctuation(c: char) -> bool {
    matches!(c,
        '\u{00A2}'..='\u{00A9}' | '\u{00AC}'..='\u{00B1}' | '\u{00B4}' | '\u{00B6}' | '\u{00D7}' | '\u{00F7}'
        | '\u{2016}'..='\u{2027}' | '\u{2030}'..='\u{205E}'
        | '\u{20A0}'..='\u{20CF}'
        | '\u{2190}'..='\u{23FF}'
        | '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}'
    )
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
