#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar description algebra for simdeck.
//!
//! A [`Description`] is a declarative tree mirroring the shape of a token
//! parser: which literals, flags and value placeholders it consumes, how they
//! repeat, and which named help section they belong to. The tree is built
//! hand-in-hand with the parser that consumes the tokens; this crate never
//! sees a token itself.
//!
//! Three layers:
//! - **Tree**: the variants, one-line summaries, and boundary-aware
//!   descendant finders
//! - **Normalizer**: collapses singleton wrappers and flattens nested
//!   sequences/choices into a canonical minimal tree
//! - **Renderer**: assembles definition lines, section blocks, and the full
//!   usage text

mod description;
mod normalize;
mod usage;


pub use description::Description;
