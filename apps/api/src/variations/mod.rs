//! Variation engine: derives a reproducible style configuration from a
//! résumé document and an optional explicit seed.
//!
//! The contract, end to end: identical document content (or an identical
//! explicit seed string) always produces the identical `StyleConfig`, on any
//! platform, while different seeds spread across visually distinct but still
//! ATS-safe parameter combinations. `compute_style` is the only entry point
//! the themes call.

pub mod rng;
pub mod style;

pub use style::{default_variations, generate_variations, StyleConfig};

use crate::models::resume::{canonical_json, ResumeSchema};

/// Rolling multiply-31 hash with signed 32-bit wraparound, absolute value on
/// return. Iterates UTF-16 code units so the result matches char-code hashing
/// regardless of how the host encodes strings.
///
/// Not cryptographic; it only needs to be deterministic and well-spread.
pub fn hash_string(text: &str) -> u32 {
    let mut acc: i32 = 0;
    for unit in text.encode_utf16() {
        // (acc << 5) - acc == acc * 31, modulo 2^32.
        acc = acc.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    acc.unsigned_abs()
}

/// Derives the integer seed for one document: an explicit non-empty
/// `variationSeed` wins, otherwise the canonical serialization of the whole
/// document is hashed. Seed collisions between different documents are
/// acceptable; the seed only drives cosmetic choices.
pub fn derive_seed(resume: &ResumeSchema) -> u32 {
    if let Some(seed) = resume.variation_seed.as_deref() {
        if !seed.is_empty() {
            return hash_string(seed);
        }
    }
    hash_string(&canonical_json(resume))
}

/// Top-level entry point: falsy `enableVariations` returns the fixed default
/// configuration; otherwise the seeded engine runs. Pure and infallible.
pub fn compute_style(resume: &ResumeSchema) -> StyleConfig {
    if !resume.enable_variations.unwrap_or(false) {
        return default_variations();
    }
    generate_variations(derive_seed(resume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Basics, ResumeSchema};

    fn resume_named(name: &str) -> ResumeSchema {
        ResumeSchema {
            basics: Some(Basics {
                name: Some(name.to_string()),
                ..Basics::default()
            }),
            ..ResumeSchema::default()
        }
    }

    #[test]
    fn test_hash_empty_string_is_zero() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string(""), hash_string(""));
    }

    #[test]
    fn test_hash_abc_known_value() {
        // 97*31^2 + 98*31 + 99 = 96354
        assert_eq!(hash_string("abc"), 96354);
        assert_eq!(hash_string("abc"), hash_string("abc"));
    }

    #[test]
    fn test_hash_is_nonnegative_for_wrapping_inputs() {
        // Long inputs wrap the 32-bit accumulator negative; unsigned_abs must
        // still return a valid non-negative value.
        let long = "x".repeat(10_000);
        let h = hash_string(&long);
        assert_eq!(h, hash_string(&long));
    }

    #[test]
    fn test_hash_handles_non_ascii() {
        assert_eq!(hash_string("résumé • naïve"), hash_string("résumé • naïve"));
        assert_ne!(hash_string("résumé"), hash_string("resume"));
    }

    #[test]
    fn test_explicit_seed_ignores_document_content() {
        let mut a = resume_named("Ada Lovelace");
        let mut b = resume_named("Charles Babbage");
        a.variation_seed = Some("abc".to_string());
        b.variation_seed = Some("abc".to_string());
        assert_eq!(derive_seed(&a), derive_seed(&b));
    }

    #[test]
    fn test_empty_seed_falls_back_to_content() {
        let mut a = resume_named("Ada Lovelace");
        a.variation_seed = Some(String::new());
        let b = resume_named("Ada Lovelace");
        assert_eq!(derive_seed(&a), hash_string(&canonical_json(&a)));
        // Same content apart from the empty seed marker hashes differently
        // only because the marker itself serializes; both are deterministic.
        assert_eq!(derive_seed(&b), derive_seed(&b));
    }

    #[test]
    fn test_identical_content_derives_identical_seed() {
        let a = resume_named("Grace Hopper");
        let b = resume_named("Grace Hopper");
        assert_eq!(derive_seed(&a), derive_seed(&b));
    }

    #[test]
    fn test_compute_style_defaults_when_variations_absent() {
        let a = resume_named("Ada Lovelace");
        let b = resume_named("Katherine Johnson");
        assert_eq!(compute_style(&a), default_variations());
        assert_eq!(compute_style(&b), default_variations());
    }

    #[test]
    fn test_compute_style_defaults_when_variations_false() {
        let mut resume = resume_named("Ada Lovelace");
        resume.enable_variations = Some(false);
        resume.variation_seed = Some("ignored".to_string());
        assert_eq!(compute_style(&resume), default_variations());
    }

    #[test]
    fn test_compute_style_is_content_deterministic() {
        let mut a = resume_named("Grace Hopper");
        let mut b = resume_named("Grace Hopper");
        a.enable_variations = Some(true);
        b.enable_variations = Some(true);
        assert_eq!(compute_style(&a), compute_style(&b));
    }

    #[test]
    fn test_seed_override_shields_against_content_changes() {
        let mut a = resume_named("Grace Hopper");
        let mut b = resume_named("Margaret Hamilton");
        for r in [&mut a, &mut b] {
            r.enable_variations = Some(true);
            r.variation_seed = Some("abc".to_string());
        }
        assert_eq!(compute_style(&a), compute_style(&b));
    }

    #[test]
    fn test_named_seed_selects_same_style_ten_times() {
        let configs: Vec<StyleConfig> = (0..10)
            .map(|_| generate_variations(hash_string("test-seed-1")))
            .collect();
        for c in &configs[1..] {
            assert_eq!(*c, configs[0]);
        }
    }

    #[test]
    fn test_distinct_seeds_produce_distinct_styles() {
        // Not guaranteed universally (collisions are permitted); asserted
        // for this representative pair.
        let a = generate_variations(hash_string("seed-A"));
        let b = generate_variations(hash_string("seed-B"));
        assert_ne!(a, b);
    }
}
