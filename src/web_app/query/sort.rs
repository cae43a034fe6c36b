// web_app/query/sort.rs - Second pipeline stage
//
// Uses the standard library's stable sort, so products that compare equal
// keep their filtered (dataset) order under every sort key.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::web_app::model::{Product, SortOption};

pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::Default => {}
        SortOption::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::NameAsc => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOption::NameDesc => products.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
}

/// Human-oriented name ordering.
///
/// Names are compared in canonical decomposition (NFD), one base character
/// plus its combining marks at a time. Primary level: base characters
/// compared case-insensitively, with whitespace before punctuation before
/// digits before letters. Secondary level: unaccented before accented.
/// Tertiary level: at the first position where only case differs, lowercase
/// sorts first. Code-point order decides whatever is left.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_units, b_units) = (units(a), units(b));

    let primary = a_units.iter().map(|u| collation_key(u.0)).cmp(b_units.iter().map(|u| collation_key(u.0)));
    let secondary = || a_units.iter().map(|u| &u.1).cmp(b_units.iter().map(|u| &u.1));
    let tertiary = || a_units.iter().map(|u| u.0.is_uppercase()).cmp(b_units.iter().map(|u| u.0.is_uppercase()));
    primary.then_with(secondary).then_with(tertiary).then_with(|| a.cmp(b))
}

/// Splits a name into base characters, each with the marks that follow it.
fn units(name: &str) -> Vec<(char, Vec<char>)> {
    let mut units: Vec<(char, Vec<char>)> = Vec::new();
    for c in name.nfd() {
        match units.last_mut() {
            Some((_, marks)) if is_combining_mark(c) => marks.push(c),
            _ => units.push((c, Vec::new())),
        }
    }
    units
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if !c.is_alphanumeric() {
        1
    } else if c.is_numeric() {
        2
    } else {
        3
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}
