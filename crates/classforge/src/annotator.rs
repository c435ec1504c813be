//! Relationship trailer
//!
//! Every emitted document ends with a comment block listing all
//! relationships whose endpoints resolve, in input order. Dangling
//! relationships are left out; nothing is deduplicated or reordered.

use crate::core::{CodeWriter, Target};
use crate::model::{ClassDef, ClassModel, RelationshipDef};

/// Header line of the trailer, without the comment token
pub const TRAILER_HEADER: &str = "Relationships:";

/// Describe one relationship as `<from> <type> <to> (Multiplicity: <m>)`
pub fn describe(rel: &RelationshipDef, from: &ClassDef, to: &ClassDef) -> String {
    let mut line = format!("{} {} {}", from.name, rel.kind, to.name);
    if let Some(multiplicity) = rel.multiplicity() {
        line.push_str(&format!(" (Multiplicity: {})", multiplicity));
    }
    line
}

/// Trailer lines for `target`, header first
pub fn trailer_lines(model: &ClassModel, target: Target) -> Vec<String> {
    let comment = target.comment_token();
    std::iter::once(format!("{} {}", comment, TRAILER_HEADER))
        .chain(
            model
                .resolved_relationships()
                .map(|(rel, from, to)| format!("{} {}", comment, describe(rel, from, to))),
        )
        .collect()
}

/// Append the trailer to an emitter's output
pub fn write_trailer(model: &ClassModel, target: Target, out: &mut CodeWriter) {
    for line in trailer_lines(model, target) {
        out.line(line);
    }
}
