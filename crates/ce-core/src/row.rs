//! Row identity and cluster labels

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable synthetic row identifier.
///
/// Assigned once at load as the row's position in the source file. It is the
/// only key the rendering layer echoes back with interaction events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub usize);

impl RowId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RowId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Anything that can be correlated back to a dataset row
pub trait Identified {
    fn row_id(&self) -> RowId;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn row_id(&self) -> RowId {
        (**self).row_id()
    }
}

/// Categorical cluster assignment produced by the offline clustering pipeline.
///
/// Integer labels sort first, numerically, so that "10" sorts after "9".
/// Non-integer labels follow in lexical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterLabel(String);

impl ClusterLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl Ord for ClusterLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ClusterLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClusterLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u32> for ClusterLabel {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numeric_labels_sort_numerically() {
        let mut labels: Vec<ClusterLabel> =
            ["10", "2", "0", "9"].into_iter().map(ClusterLabel::from).collect();
        labels.sort();
        let sorted: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(sorted, vec!["0", "2", "9", "10"]);
    }

    #[test]
    fn test_text_labels_sort_lexically() {
        let mut labels: Vec<ClusterLabel> =
            ["beta", "alpha", "3"].into_iter().map(ClusterLabel::from).collect();
        labels.sort();
        assert_eq!(labels[0].as_str(), "3");
        assert_eq!(labels[1].as_str(), "alpha");
    }

    #[test]
    fn test_mixed_labels_integers_first() {
        let mut labels: Vec<ClusterLabel> = ["1x", "10", "9", "b", "1x", "9"]
            .into_iter()
            .map(ClusterLabel::from)
            .collect();
        labels.sort();
        labels.dedup();
        let sorted: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(sorted, vec!["9", "10", "1x", "b"]);
    }

    fn label() -> impl Strategy<Value = ClusterLabel> {
        prop_oneof![
            (0u32..20).prop_map(ClusterLabel::from),
            "[0-9]{1,2}[a-z]?".prop_map(ClusterLabel::new),
            "[a-z]{1,3}".prop_map(ClusterLabel::new),
        ]
    }

    proptest! {
        #[test]
        fn prop_label_order_is_total(a in label(), b in label(), c in label()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }
    }

    #[test]
    fn test_row_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&RowId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
