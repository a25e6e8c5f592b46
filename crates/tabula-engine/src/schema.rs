use indexmap::IndexMap;
use tabula_types::{Collection, Field, FieldKind, ID_FIELD};
use tracing::debug;

use crate::error::{Error, Result};

/// Per-field tally of value kinds, in the order the kinds were first observed.
#[derive(Debug, Default)]
struct KindVotes {
    seen: Vec<(FieldKind, usize)>,
}

impl KindVotes {
    fn record(&mut self, kind: Option<FieldKind>) {
        let Some(kind) = kind else {
            return;
        };
        match self.seen.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, count)) => *count += 1,
            None => self.seen.push((kind, 1)),
        }
    }

    /// Majority kind; ties go to the kind observed first.
    /// A field that only ever held absent values is categorical.
    fn decide(&self) -> FieldKind {
        let mut best: Option<(FieldKind, usize)> = None;
        for &(kind, count) in &self.seen {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((kind, count)),
            }
        }
        best.map(|(kind, _)| kind).unwrap_or(FieldKind::Categorical)
    }

    fn is_mixed(&self) -> bool {
        self.seen.len() > 1
    }
}

/// Discover the displayable fields of a collection.
///
/// Returns the union of keys across all records in first-seen order,
/// without the `id` field. Each field's kind is the majority kind of its
/// non-absent values, so a field with no numeric values is never numeric.
pub fn infer_schema(collection: &Collection) -> Vec<Field> {
    let mut votes: IndexMap<&str, KindVotes> = IndexMap::new();

    for record in collection {
        for (name, value) in record.iter() {
            if name == ID_FIELD {
                continue;
            }
            votes.entry(name).or_default().record(value.kind());
        }
    }

    votes
        .into_iter()
        .map(|(name, tally)| {
            let kind = tally.decide();
            let mixed = tally.is_mixed();
            if mixed {
                debug!(field = name, kind = %kind, votes = ?tally.seen, "mixed value kinds, using majority");
            }
            Field {
                name: name.to_string(),
                kind,
                mixed,
            }
        })
        .collect()
}

pub fn numeric_fields(fields: &[Field]) -> impl Iterator<Item = &Field> {
    fields.iter().filter(|f| f.is_numeric())
}

pub fn find_field<'a>(fields: &'a [Field], name: &str) -> Result<&'a Field> {
    fields
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| Error::UnknownField(name.to_string()))
}
