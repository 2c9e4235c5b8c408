//! The grammar description tree and its summaries.

use serde::{Deserialize, Serialize};

/// Declarative description of what a token parser consumes.
///
/// Built alongside the parser it describes, never derived from it. Recursive
/// variants box their children so the tree stays cheap to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Description {
    /// A value placeholder, rendered as `<name>`.
    Primitive { name: String, doc: String },
    /// A `--name` switch.
    Flag { name: String, doc: String },
    /// An exact literal keyword.
    Command { text: String },
    /// Consecutive parts, all required, in order.
    Sequence { children: Vec<Description> },
    /// Ordered candidates, first match wins.
    Choice {
        children: Vec<Description>,
        /// Render candidates one per line instead of `a | b`.
        expanded: bool,
    },
    /// Repetition with a minimum count and an optional separator.
    AtLeast {
        lower_bound: usize,
        child: Box<Description>,
        separator: Option<Box<Description>>,
    },
    /// Zero-or-one occurrence.
    Optional { child: Box<Description> },
    /// A named help section grouping part of the grammar.
    ///
    /// Tags are unique per top-level grammar; when two sections share a tag
    /// the renderer keeps the first definition it encounters.
    Section {
        tag: String,
        name: String,
        doc: String,
        child: Box<Description>,
    },
}

impl Description {
    pub fn primitive(name: impl Into<String>, doc: impl Into<String>) -> Description {
        Description::Primitive {
            name: name.into(),
            doc: doc.into(),
        }
    }

    pub fn flag(name: impl Into<String>, doc: impl Into<String>) -> Description {
        Description::Flag {
            name: name.into(),
            doc: doc.into(),
        }
    }

    pub fn command(text: impl Into<String>) -> Description {
        Description::Command { text: text.into() }
    }

    pub fn sequence(children: Vec<Description>) -> Description {
        Description::Sequence { children }
    }

    pub fn choice(children: Vec<Description>) -> Description {
        Description::Choice {
            children,
            expanded: false,
        }
    }

    pub fn at_least(lower_bound: usize, child: Description) -> Description {
        Description::AtLeast {
            lower_bound,
            child: Box::new(child),
            separator: None,
        }
    }

    pub fn at_least_sep(
        lower_bound: usize,
        child: Description,
        separator: Description,
    ) -> Description {
        Description::AtLeast {
            lower_bound,
            child: Box::new(child),
            separator: Some(Box::new(separator)),
        }
    }

    pub fn optional(child: Description) -> Description {
        Description::Optional {
            child: Box::new(child),
        }
    }

    pub fn section(
        tag: impl Into<String>,
        name: impl Into<String>,
        doc: impl Into<String>,
        child: Description,
    ) -> Description {
        Description::Section {
            tag: tag.into(),
            name: name.into(),
            doc: doc.into(),
            child: Box::new(child),
        }
    }

    /// One-line rendering of the grammar shape.
    pub fn summary(&self) -> String {
        match self {
            Description::Primitive { name, .. } => format!("<{name}>"),
            Description::Flag { name, .. } => format!("--{name}"),
            Description::Command { text } => text.clone(),
            Description::Section { tag, .. } => format!("[{tag}]"),
            Description::Optional { child } => format!("{}?", child.delimited_summary()),
            Description::AtLeast {
                lower_bound,
                child,
                separator,
            } => {
                let suffix = match lower_bound {
                    0 => "*".to_string(),
                    1 => "+".to_string(),
                    n => format!("{{{n}+}}"),
                };
                let part = child.delimited_summary();
                match separator.as_deref().map(Description::summary) {
                    Some(sep) if !sep.is_empty() => {
                        format!("{}{suffix}", delimit(&format!("{part} ... {sep} {part}")))
                    }
                    _ => format!("{part}{suffix}"),
                }
            }
            Description::Sequence { children } => match children.as_slice() {
                [only] => only.summary(),
                _ => children
                    .iter()
                    .map(Description::delimited_summary)
                    .collect::<Vec<_>>()
                    .join(" "),
            },
            Description::Choice { children, expanded } => match children.as_slice() {
                [only] => only.summary(),
                _ => {
                    let joiner = if *expanded { "\nOR\t" } else { " | " };
                    children
                        .iter()
                        .map(Description::summary)
                        .collect::<Vec<_>>()
                        .join(joiner)
                }
            },
        }
    }

    /// Whether the summary stays unambiguous when embedded in a larger one.
    ///
    /// Only multi-part sequences and choices need delimiting; everything else
    /// reads as a single unit.
    pub fn is_delimited(&self) -> bool {
        match self {
            Description::Sequence { children } | Description::Choice { children, .. } => {
                matches!(children.as_slice(), [only] if only.is_delimited())
            }
            _ => true,
        }
    }

    /// The summary, wrapped in `{{ ... }}` when it needs delimiting.
    pub fn delimited_summary(&self) -> String {
        if self.is_delimited() {
            self.summary()
        } else {
            delimit(&self.summary())
        }
    }

    /// Immediate children; an `AtLeast` separator counts as a child.
    pub fn children(&self) -> Vec<&Description> {
        match self {
            Description::Primitive { .. }
            | Description::Flag { .. }
            | Description::Command { .. } => Vec::new(),
            Description::Sequence { children } | Description::Choice { children, .. } => {
                children.iter().collect()
            }
            Description::AtLeast {
                child, separator, ..
            } => {
                let mut out = vec![child.as_ref()];
                if let Some(sep) = separator {
                    out.push(sep.as_ref());
                }
                out
            }
            Description::Optional { child } | Description::Section { child, .. } => {
                vec![child.as_ref()]
            }
        }
    }

    /// Every `Primitive` descendant, in pre-order, not descending past
    /// sections. The receiver itself is never included.
    pub fn find_primitives(&self) -> Vec<&Description> {
        self.find_descendants(|d| matches!(d, Description::Primitive { .. }))
    }

    /// Every `Flag` descendant, with the same traversal rules as
    /// [`Description::find_primitives`].
    pub fn find_flags(&self) -> Vec<&Description> {
        self.find_descendants(|d| matches!(d, Description::Flag { .. }))
    }

    /// Every `Section` descendant; nested sections are found, but their
    /// interiors are left to their own rendering pass.
    pub fn find_sections(&self) -> Vec<&Description> {
        self.find_descendants(|d| matches!(d, Description::Section { .. }))
    }

    fn find_descendants(&self, pred: fn(&Description) -> bool) -> Vec<&Description> {
        let mut out = Vec::new();
        self.collect_descendants(pred, &mut out);
        out
    }

    fn collect_descendants<'d>(
        &'d self,
        pred: fn(&Description) -> bool,
        out: &mut Vec<&'d Description>,
    ) {
        for child in self.children() {
            if pred(child) {
                out.push(child);
            }
            // A section's interior belongs to that section's own block.
            if !matches!(child, Description::Section { .. }) {
                child.collect_descendants(pred, out);
            }
        }
    }
}

pub(crate) fn delimit(summary: &str) -> String {
    format!("{{{{ {summary} }}}}")
}
