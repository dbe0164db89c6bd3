use hashbrown::HashMap;

/// Count every distinct value, keeping the order in which values first appear.
pub fn value_counts<'a, I>(values: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for v in values {
        match position.get(v) {
            Some(&p) => counts[p].1 += 1,
            None => {
                position.insert(v, counts.len());
                counts.push((v, 1));
            }
        }
    }
    counts
}

/// Most frequent entry of a [`value_counts`] result, earliest wins ties.
pub fn most_frequent<'a>(counts: &[(&'a str, usize)]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for &(v, c) in counts {
        match best {
            Some((_, b)) if b >= c => {}
            _ => best = Some((v, c)),
        }
    }
    best.map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_order() {
        let v = vec!["b", "a", "b", "c", "a", "b"];
        assert_eq!(value_counts(v), vec![("b", 3), ("a", 2), ("c", 1)]);
        assert!(value_counts(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_most_frequent() {
        assert_eq!(most_frequent(&value_counts(vec!["no", "yes", "yes", "yes"])), Some("yes"));
        assert_eq!(most_frequent(&[]), None);
    }

    #[test]
    fn test_most_frequent_tie_first_seen() {
        assert_eq!(most_frequent(&value_counts(vec!["no", "yes"])), Some("no"));
        assert_eq!(most_frequent(&value_counts(vec!["yes", "no", "no", "yes"])), Some("yes"));
        assert_eq!(most_frequent(&value_counts(vec!["c", "a", "b", "b", "a"])), Some("a"));
    }
}
