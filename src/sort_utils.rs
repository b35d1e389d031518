use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{FieldAccess, FieldValue};

/// Sort direction for table columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// Which column a report table is ordered by. `field: None` keeps the
/// records in the order they arrived.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        Self {
            field: Some(field.to_string()),
            direction,
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// State after the user clicks the header of `requested_field`.
///
/// A new column starts ascending, a second click flips to descending, and a
/// third click falls back to `default_field` ascending.
pub fn next_sort_state(
    requested_field: &str,
    current: &SortState,
    default_field: Option<&str>,
) -> SortState {
    if !current.is_active(requested_field) {
        return SortState::new(requested_field, SortDirection::Asc);
    }

    match current.direction {
        SortDirection::Asc => SortState::new(requested_field, SortDirection::Desc),
        SortDirection::Desc => SortState {
            field: default_field.map(str::to_string),
            direction: SortDirection::Asc,
        },
    }
}

/// Per-view sort state driven by header clicks.
#[derive(Debug, Clone)]
pub struct ReportSort {
    initial: SortState,
    default_field: Option<String>,
    state: SortState,
}

impl ReportSort {
    /// Start unsorted; a third click on any column returns to `default_field`.
    pub fn new(default_field: Option<&str>) -> Self {
        let initial = SortState {
            field: default_field.map(str::to_string),
            direction: SortDirection::Asc,
        };
        Self::with_initial(initial, default_field)
    }

    /// Start from a view-specific state, e.g. amount descending.
    pub fn with_initial(initial: SortState, default_field: Option<&str>) -> Self {
        Self {
            state: initial.clone(),
            initial,
            default_field: default_field.map(str::to_string),
        }
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    pub fn toggle(&mut self, field: &str) -> &SortState {
        self.state = next_sort_state(field, &self.state, self.default_field.as_deref());
        tracing::debug!(
            "Sort toggled on '{}': now {:?} {}",
            field,
            self.state.field,
            self.state.direction.as_str()
        );
        &self.state
    }

    /// Restore the state the view opened with.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.state.is_active(field)
    }

    /// Get sort indicator for a column header ("▲", "▼", or "").
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.is_active(field) {
            match self.state.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            }
        } else {
            ""
        }
    }

    /// Order `records` by the current state.
    pub fn apply<T: FieldAccess + Clone>(&self, records: &[T]) -> Vec<T> {
        match &self.state.field {
            Some(field) => sort_records(records, field, self.state.direction),
            None => records.to_vec(),
        }
    }
}

/// Comparable form of a field value. Numbers order before text so that
/// columns mixing both still have a total order.
#[derive(Debug)]
enum SortKey {
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn from_value(value: &FieldValue) -> Self {
        if value.is_null() {
            return Self::Missing;
        }
        match value.as_number() {
            // -0.0 + 0.0 is 0.0, so signed zeros tie
            Some(n) => Self::Number(n + 0.0),
            None => Self::Text(value.as_text().to_lowercase()),
        }
    }
}

fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        // Missing values go last whichever way the column is sorted
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => direction.apply(x.total_cmp(y)),
        (SortKey::Text(x), SortKey::Text(y)) => direction.apply(x.cmp(y)),
        (SortKey::Number(_), SortKey::Text(_)) => direction.apply(Ordering::Less),
        (SortKey::Text(_), SortKey::Number(_)) => direction.apply(Ordering::Greater),
    }
}

/// Stable sort of report rows by a named field.
pub fn sort_records<T: FieldAccess + Clone>(
    records: &[T],
    field: &str,
    direction: SortDirection,
) -> Vec<T> {
    sort_records_by(records, field, direction, |record, field| {
        record.field_value(field)
    })
}

/// Stable sort using `accessor` to read the field, for rows that are not
/// maps (structs, tuples) or whose displayed value is derived.
pub fn sort_records_by<T, F>(
    records: &[T],
    field: &str,
    direction: SortDirection,
    accessor: F,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &str) -> FieldValue,
{
    let mut keyed: Vec<(SortKey, &T)> = records
        .iter()
        .map(|record| (SortKey::from_value(&accessor(record, field)), record))
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, direction));

    tracing::debug!(
        "Sorted {} records by '{}' {}",
        records.len(),
        field,
        direction.as_str()
    );

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}
