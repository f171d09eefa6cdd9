//! Property-based invariant tests for geometry primitives.
//!
//! These tests verify algebraic invariants that must hold for any valid
//! inputs:
//!
//! 1. Union is commutative.
//! 2. Union is idempotent (A ∪ A = A).
//! 3. Union contains both inputs.
//! 4. Right/bottom edges are consistent with x+width, y+height.
//! 5. Proposal resolution never yields non-finite dimensions.

use proptest::prelude::*;
use wrapflow_core::geometry::{Point, ProposedSize, Rect};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -500.0f32..500.0,
        -500.0f32..500.0,
        0.0f32..500.0,
        0.0f32..500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// Union reconstructs width from rounded edge sums, so containment and
// idempotence hold up to float rounding, not bit-exactly.
const EPS: f32 = 1e-3;

fn contains_rect(outer: &Rect, inner: &Rect) -> bool {
    outer.left() <= inner.left() + EPS
        && outer.top() <= inner.top() + EPS
        && outer.right() >= inner.right() - EPS
        && outer.bottom() >= inner.bottom() - EPS
}

fn approx_eq(a: &Rect, b: &Rect) -> bool {
    (a.x - b.x).abs() < EPS
        && (a.y - b.y).abs() < EPS
        && (a.width - b.width).abs() < EPS
        && (a.height - b.height).abs() < EPS
}

proptest! {
    #[test]
    fn union_commutative(a in rect_strategy(), b in rect_strategy()) {
        // min/max are symmetric, so this one is exact.
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_idempotent(a in rect_strategy()) {
        let u = a.union(&a);
        prop_assert!(approx_eq(&u, &a), "A ∪ A should equal A: {:?} vs {:?}", u, a);
    }

    #[test]
    fn union_contains_both(a in rect_strategy(), b in rect_strategy()) {
        let u = a.union(&b);
        prop_assert!(contains_rect(&u, &a), "union must contain a: {:?} vs {:?}", u, a);
        prop_assert!(contains_rect(&u, &b), "union must contain b: {:?} vs {:?}", u, b);
    }

    #[test]
    fn edges_consistent(a in rect_strategy()) {
        prop_assert_eq!(a.right(), a.x + a.width);
        prop_assert_eq!(a.bottom(), a.y + a.height);
        prop_assert_eq!(a.origin(), Point::new(a.x, a.y));
    }

    #[test]
    fn proposal_resolution_is_finite(
        w in proptest::option::of(-1000.0f32..1000.0),
        h in proptest::option::of(-1000.0f32..1000.0),
    ) {
        let resolved = ProposedSize { width: w, height: h }.resolve_or_zero();
        prop_assert!(resolved.width.is_finite());
        prop_assert!(resolved.height.is_finite());
        prop_assert_eq!(resolved.width, w.unwrap_or(0.0));
        prop_assert_eq!(resolved.height, h.unwrap_or(0.0));
    }
}
