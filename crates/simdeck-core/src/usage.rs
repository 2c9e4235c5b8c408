//! Usage text assembly.
//!
//! Rendering walks a normalized tree: the top-level description first, then
//! one block per reachable section (sorted by tag), then the definitions of
//! every primitive collected along the way. Sections discovered inside other
//! sections queue up behind them, and the first definition of a tag wins.

use std::collections::VecDeque;
use std::fmt;

use indexmap::IndexMap;

use crate::Description;

const SUMMARY_COLUMN: usize = 25;

impl Description {
    /// The `\t<summary>\t<doc>` line used for flags and primitives.
    pub fn definition_line(&self) -> String {
        let doc = match self {
            Description::Primitive { doc, .. } | Description::Flag { doc, .. } => doc.as_str(),
            _ => "",
        };
        format!("\t{:<width$}\t{}", self.summary(), doc, width = SUMMARY_COLUMN)
    }

    /// Render the full usage text for this grammar.
    ///
    /// The tree is normalized first, so callers hand over the raw
    /// combinator-built description.
    pub fn usage(&self) -> String {
        let normalized = self.normalize();

        let mut worklist: VecDeque<&Description> = normalized.find_sections().into();
        let mut primitives: IndexMap<String, String> = IndexMap::new();
        collect_primitives(&normalized, &mut primitives);

        let mut blocks: IndexMap<String, String> = IndexMap::new();
        while let Some(section) = worklist.pop_front() {
            let Description::Section { tag, .. } = section else {
                continue;
            };
            if blocks.contains_key(tag) {
                continue;
            }
            blocks.insert(tag.clone(), section.block());
            for nested in section.find_sections() {
                worklist.push_back(nested);
            }
            collect_primitives(section, &mut primitives);
        }
        blocks.sort_keys();
        primitives.sort_keys();

        let mut parts = vec![normalized.to_string()];
        parts.push(blocks.values().cloned().collect::<Vec<_>>().join("\n\n\n"));
        if !primitives.is_empty() {
            let lines = primitives.values().cloned().collect::<Vec<_>>().join("\n");
            parts.push(format!("Primitives:\n\n{lines}"));
        }
        parts.retain(|part| !part.is_empty());
        parts.join("\n\n\n")
    }

    /// The help block for a section: title, underline, shape, doc, and the
    /// flags defined inside it (deduplicated, sorted).
    fn block(&self) -> String {
        let Description::Section {
            tag,
            name,
            doc,
            child,
        } = self
        else {
            return self.summary();
        };

        let title = format!("[{tag}] {name}");
        let underline = "=".repeat(title.chars().count());

        let mut flags: IndexMap<String, String> = IndexMap::new();
        for flag in self.find_flags() {
            flags
                .entry(flag.summary())
                .or_insert_with(|| flag.definition_line());
        }
        flags.sort_keys();

        let mut parts = vec![
            format!("{title}\n{underline}"),
            format!("\t{}", child.summary()),
            doc.clone(),
            flags.values().cloned().collect::<Vec<_>>().join("\n"),
        ];
        parts.retain(|part| !part.is_empty());
        parts.join("\n\n")
    }
}

fn collect_primitives(node: &Description, out: &mut IndexMap<String, String>) {
    for primitive in node.find_primitives() {
        let Description::Primitive { name, .. } = primitive else {
            continue;
        };
        out.entry(name.clone())
            .or_insert_with(|| primitive.definition_line());
    }
}

/// Flags and primitives display as definition lines, sections as their help
/// block, and everything else as its summary.
impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Primitive { .. } | Description::Flag { .. } => {
                write!(f, "{}", self.definition_line())
            }
            Description::Section { .. } => write!(f, "{}", self.block()),
            _ => write!(f, "{}", self.summary()),
        }
    }
}
