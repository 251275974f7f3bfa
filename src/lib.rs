//! Bidirectional ordered map for Rust.
//!
//! This crate provides [`BiMap`], a set of `(L, R)` pairs that can be searched, walked and edited
//! by either component in O(log n) expected time. Neither side may repeat a value: inserting a
//! pair whose left or right value is already present is rejected.
//!
//! - [`find_left`](BiMap::find_left) / [`find_right`](BiMap::find_right) - Locate a pair by one side
//! - [`flip`](LeftCursor::flip) - Move from a position in one ordering to the same pair in the other, in O(1)
//! - [`lower_bound_left`](BiMap::lower_bound_left) and friends - Ordered searches on both sides
//! - [`at_left_or_default`](BiMap::at_left_or_default) - Lookup that inserts a default pairing on a miss
//!
//! # Example
//!
//! ```
//! use treap_bimap::{BiMap, Error};
//!
//! let mut ports = BiMap::new();
//! ports.insert("http", 80);
//! ports.insert("https", 443);
//! ports.insert("ssh", 22);
//!
//! // Both directions are first-class.
//! assert_eq!(ports.at_left(&"ssh"), Ok(&22));
//! assert_eq!(ports.at_right(&443), Ok(&"https"));
//! assert_eq!(ports.at_right(&21), Err(Error::RightNotFound));
//!
//! // Each side has its own sorted order.
//! let by_port: Vec<_> = ports.iter_right().map(|(name, _)| *name).collect();
//! assert_eq!(by_port, ["ssh", "http", "https"]);
//!
//! // A cursor found on one side can be flipped to the other.
//! let cursor = ports.find_left(&"http");
//! assert_eq!(ports.right_key(cursor.flip()), Some(&80));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc` when the default `std` feature is disabled
//! - **Custom orders** - Each side takes its own [`TotalOrder`], including plain closures
//! - **Reproducible shapes** - [`BiMap::with_seed`] fixes the priority sequence
//!
//! # Implementation
//!
//! Each pair lives in one arena slot that carries a tree node for each side. The two orderings are
//! treaps, binary search trees kept balanced in expectation by random heap priorities, linked
//! through the same slots, so a pair is stored once and a position on one side names it on the
//! other.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order;
mod raw;

pub mod bimap;

pub use bimap::{BiMap, LeftCursor, RightCursor};
pub use error::Error;
pub use order::{Natural, Reverse, TotalOrder};
