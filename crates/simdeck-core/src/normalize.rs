//! Canonicalization of description trees.
//!
//! Combinators build descriptions mechanically, so the raw tree is full of
//! single-child wrappers and nested sequences. Normalizing collapses those
//! into the minimal equivalent tree before rendering. The pass is
//! idempotent: a normalized tree normalizes to itself.

use crate::Description;

impl Description {
    /// Produce the canonical form of this tree.
    ///
    /// - single-child sequences and choices collapse to that child
    /// - a sequence's sequence children (and a choice's choice children) are
    ///   spliced into the parent, in order
    /// - empty sequences and choices are preserved
    /// - an optional one-or-more repetition becomes a zero-or-more repetition
    /// - a choice keeps its `expanded` flag
    pub fn normalize(&self) -> Description {
        match self {
            Description::Primitive { .. }
            | Description::Flag { .. }
            | Description::Command { .. } => self.clone(),
            Description::Section {
                tag,
                name,
                doc,
                child,
            } => Description::Section {
                tag: tag.clone(),
                name: name.clone(),
                doc: doc.clone(),
                child: Box::new(child.normalize()),
            },
            Description::AtLeast {
                lower_bound,
                child,
                separator,
            } => Description::AtLeast {
                lower_bound: *lower_bound,
                child: Box::new(child.normalize()),
                separator: separator.as_ref().map(|sep| Box::new(sep.normalize())),
            },
            Description::Optional { child } => match child.normalize() {
                Description::AtLeast {
                    lower_bound: 1,
                    child,
                    separator,
                } => Description::AtLeast {
                    lower_bound: 0,
                    child,
                    separator,
                },
                normalized => Description::Optional {
                    child: Box::new(normalized),
                },
            },
            Description::Sequence { children } => {
                let mut spliced = splice_sequences(children);
                if spliced.len() == 1 {
                    spliced.remove(0)
                } else {
                    Description::Sequence { children: spliced }
                }
            }
            Description::Choice { children, expanded } => {
                let mut spliced = splice_choices(children);
                if spliced.len() == 1 {
                    spliced.remove(0)
                } else {
                    Description::Choice {
                        children: spliced,
                        expanded: *expanded,
                    }
                }
            }
        }
    }
}

// After normalization a sequence contains no sequence children, so splicing
// one level deep is transitive.
fn splice_sequences(children: &[Description]) -> Vec<Description> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child.normalize() {
            Description::Sequence { children } => out.extend(children),
            other => out.push(other),
        }
    }
    out
}

fn splice_choices(children: &[Description]) -> Vec<Description> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child.normalize() {
            Description::Choice { children, .. } => out.extend(children),
            other => out.push(other),
        }
    }
    out
}
