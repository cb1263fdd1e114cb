use crate::domain::model::{ColorRecord, Criteria};

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalized criterion, or `None` when it imposes no constraint.
fn active(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .map(normalize)
        .filter(|normalized| !normalized.is_empty())
}

/// Prepared form of [`Criteria`], normalized once per search.
#[derive(Debug, Clone, Default)]
struct Predicates {
    name: Option<String>,
    hex: Option<String>,
    comp_name: Option<String>,
    comp_hex: Option<String>,
}

impl Predicates {
    fn from_criteria(criteria: &Criteria) -> Self {
        Self {
            name: active(&criteria.name),
            hex: active(&criteria.hex),
            comp_name: active(&criteria.comp_name),
            comp_hex: active(&criteria.comp_hex),
        }
    }

    fn matches_name(&self, record: &ColorRecord) -> bool {
        self.name
            .as_ref()
            .map_or(true, |name| normalize(&record.name) == *name)
    }

    fn matches_hex(&self, record: &ColorRecord) -> bool {
        self.hex
            .as_ref()
            .map_or(true, |hex| normalize(&record.hex) == *hex)
    }

    // 互補色名稱採部分比對 (contains)，比名稱/色碼寬鬆
    fn matches_comp_name(&self, record: &ColorRecord) -> bool {
        self.comp_name.as_ref().map_or(true, |needle| {
            record
                .comp
                .iter()
                .any(|comp| normalize(&comp.name).contains(needle.as_str()))
        })
    }

    fn matches_comp_hex(&self, record: &ColorRecord) -> bool {
        self.comp_hex.as_ref().map_or(true, |hex| {
            record
                .comp
                .iter()
                .any(|comp| normalize(&comp.hex) == *hex)
        })
    }

    fn matches(&self, record: &ColorRecord) -> bool {
        self.matches_name(record)
            && self.matches_hex(record)
            && self.matches_comp_name(record)
            && self.matches_comp_hex(record)
    }
}

/// Returns the records satisfying all supplied criteria, in input order.
pub fn matches(records: &[ColorRecord], criteria: &Criteria) -> Vec<ColorRecord> {
    let predicates = Predicates::from_criteria(criteria);
    records
        .iter()
        .filter(|record| predicates.matches(record))
        .cloned()
        .collect()
}

/// Owning variant of [`matches`]; avoids cloning the surviving records.
pub fn filter_colors(records: Vec<ColorRecord>, criteria: &Criteria) -> Vec<ColorRecord> {
    let predicates = Predicates::from_criteria(criteria);
    records
        .into_iter()
        .filter(|record| predicates.matches(record))
        .collect()
}
