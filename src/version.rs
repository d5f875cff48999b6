// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version ordering for Bedrock server builds
//!
//! Versions are dotted numeric strings such as "1.16.210.51", compared segment
//! by segment as integers. Strings with a different number of segments are
//! accepted by every function here.

use std::cmp::Ordering;

/// Report whether `a` sorts before `b`
///
/// The string with more segments is compared against the other one. Once the
/// shorter string runs out of segments the result is `true`, and a differing
/// segment yields whether the longer string's segment is the smaller one.
/// Both results refer to the longer string, not to `a`, so for strings of
/// different lengths `version_less(a, b) == version_less(b, a)`. Segments that
/// are not integers are skipped.
#[must_use]
pub fn version_less(a: &str, b: &str) -> bool {
    let mut long: Vec<&str> = a.split('.').collect();
    let mut short: Vec<&str> = b.split('.').collect();

    if short.len() > long.len() {
        std::mem::swap(&mut long, &mut short);
    }

    for (i, long_part) in long.iter().enumerate() {
        let Some(short_part) = short.get(i) else {
            return true;
        };

        let (Ok(l), Ok(s)) = (long_part.parse::<i64>(), short_part.parse::<i64>()) else {
            continue;
        };

        if l != s {
            return l < s;
        }
    }

    false
}

/// One dot-separated part of a version, numbers ordered before text
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Segment<'a> {
    Number(i64),
    Text(&'a str),
}

fn segments(version: &str) -> Vec<Segment<'_>> {
    version
        .split('.')
        .map(|part| part.parse().map_or(Segment::Text(part), Segment::Number))
        .collect()
}

/// Compare two version strings as a total order
///
/// Segments are compared in turn, integers numerically and before any
/// non-numeric segment. A version that is a prefix of another sorts first.
/// For versions with the same number of integer segments this agrees with
/// [`version_less`].
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use bedrock_versions::version::compare_versions;
/// assert_eq!(compare_versions("1.16.210.4", "1.16.210.51"), Ordering::Less);
/// assert_eq!(compare_versions("1.16.210.51", "1.16.0.68"), Ordering::Greater);
/// assert_eq!(compare_versions("1.2.3", "1.2.3.0"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    segments(a).cmp(&segments(b))
}

/// Sort versions in ascending order of [`version_less`]
///
/// The predicate is not a total order across segment counts, so this uses an
/// insertion sort that never relies on transitivity. Scrape results are a few
/// hundred entries at most.
pub fn sort_versions(versions: &mut [String]) {
    for i in 1..versions.len() {
        let mut j = i;
        while j > 0 && version_less(&versions[j], &versions[j - 1]) {
            versions.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_compared_numerically() {
        assert!(version_less("1.16.210.4", "1.16.210.51"));
        assert!(!version_less("1.16.210.51", "1.16.210.4"));
    }

    #[test]
    fn equal_versions_are_not_less() {
        assert!(!version_less("1.2.3.4", "1.2.3.4"));
    }

    #[test]
    fn non_numeric_segments_are_skipped() {
        assert!(version_less("1.x.3", "1.y.4"));
        assert!(!version_less("1.x.3", "1.y.3"));
    }

    #[test]
    fn compare_orders_numbers_before_text() {
        assert_eq!(compare_versions("1.2.3", "1.beta.0"), Ordering::Less);
        assert_eq!(compare_versions("1.alpha", "1.beta"), Ordering::Less);
    }

    #[test]
    fn sort_keeps_single_and_empty_lists() {
        let mut empty: Vec<String> = Vec::new();
        sort_versions(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec!["1.2.3.4".to_string()];
        sort_versions(&mut one);
        assert_eq!(one, ["1.2.3.4"]);
    }
}
