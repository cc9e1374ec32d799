// src/extract/mod.rs
// =============================================================================
// This module extracts things from parsed HTML documents.
//
// Submodules:
// - links: finds every anchor's href in document order
// - title: resolves a human-readable title for one anchor
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod links;
mod title;

// Re-export public items from submodules
// This lets users write `extract::link_candidates()` instead of
// `extract::links::link_candidates()`
pub use links::{link_candidates, LinkCandidate};
pub use title::resolve_title;
