// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Heap-repair passes over the flat paired-node buffer.
//!
//! The buffer interleaves two binary heaps sharing one array: even
//! offsets form a min-heap over the low items, odd offsets a max-heap
//! over the high items, with node `i`'s children at nodes `2i + 1` and
//! `2i + 2`. When the element count is odd the last node has no high
//! item and its low item stands in for it on the max side; that pending
//! slot is the source of every special case below.

use compare::Compare;

/// Buffer index of node `node`'s low item.
#[inline]
pub(crate) fn low(node: usize) -> usize {
    node * 2
}

/// Buffer index of node `node`'s high item.
#[inline]
pub(crate) fn high(node: usize) -> usize {
    node * 2 + 1
}

/// Parent of a non-root node.
#[inline]
pub(crate) fn parent(node: usize) -> usize {
    debug_assert!(node > 0);
    (node - 1) / 2
}

/// Index of the last occupied node of a non-empty buffer.
#[inline]
pub(crate) fn last_node(len: usize) -> usize {
    debug_assert!(len > 0);
    (len - 1) / 2
}

/// Number of occupied nodes.
#[inline]
pub(crate) fn node_count(len: usize) -> usize {
    (len + 1) / 2
}

/// True when the last node holds only its low item.
#[inline]
pub(crate) fn has_pending(len: usize) -> bool {
    len % 2 == 1
}

/// Moves the last node's low item toward the root until the min-heap
/// property across low items is restored.
pub(crate) fn float_up_min<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let mut node = last_node(v.len());
    while node > 0 {
        let par = parent(node);
        if cmp.compares_ge(&v[low(node)], &v[low(par)]) {
            break;
        }
        v.swap(low(node), low(par));
        node = par;
    }
}

/// Moves the last node's high item toward the root until the max-heap
/// property across high items is restored.
///
/// A pending last node has no high item, so its low item is compared
/// against the parent's high item and swapped into that slot instead.
pub(crate) fn float_up_max<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let last = last_node(v.len());
    let pending = has_pending(v.len());
    let mut node = last;
    while node > 0 {
        let par = parent(node);
        let slot = if pending && node == last {
            low(node)
        } else {
            high(node)
        };
        if cmp.compares_lt(&v[slot], &v[high(par)]) {
            break;
        }
        v.swap(slot, high(par));
        node = par;
    }
}

/// Pushes the root's low item toward the leaves until the min-heap
/// property across low items is restored.
pub(crate) fn float_down_min<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let nodes = node_count(v.len());
    let pending = has_pending(v.len());
    let mut node = 0;
    loop {
        let left = node * 2 + 1;
        if left >= nodes {
            break;
        }
        let right = left + 1;
        // Descend toward the child with the smaller low item.
        let child = if right >= nodes || cmp.compares_lt(&v[low(left)], &v[low(right)]) {
            left
        } else {
            right
        };
        if !cmp.compares_lt(&v[low(child)], &v[low(node)]) {
            break;
        }
        v.swap(low(node), low(child));
        // The swap can invert the child's own interval; the pending node
        // has a single item and nothing to restore.
        if !(pending && child == nodes - 1) && cmp.compares_gt(&v[low(child)], &v[high(child)]) {
            v.swap(low(child), high(child));
        }
        node = child;
    }
}

/// Pushes the root's high item toward the leaves until the max-heap
/// property across high items is restored.
///
/// A pending child's low item stands in for its missing high item, both
/// when picking the larger child and when swapping.
pub(crate) fn float_down_max<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let nodes = node_count(v.len());
    let pending = has_pending(v.len());
    let top = |node: usize| {
        if pending && node == nodes - 1 {
            low(node)
        } else {
            high(node)
        }
    };
    let mut node = 0;
    loop {
        let left = node * 2 + 1;
        if left >= nodes {
            break;
        }
        let right = left + 1;
        // Descend toward the child with the greater high item.
        let child = if right >= nodes || cmp.compares_gt(&v[top(left)], &v[top(right)]) {
            left
        } else {
            right
        };
        let slot = top(child);
        if !cmp.compares_gt(&v[slot], &v[high(node)]) {
            break;
        }
        v.swap(slot, high(node));
        if slot == high(child) && cmp.compares_gt(&v[low(child)], &v[high(child)]) {
            v.swap(low(child), high(child));
        }
        node = child;
    }
}
