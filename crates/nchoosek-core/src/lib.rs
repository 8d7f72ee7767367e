//! Binomial coefficients and lazy enumeration of k-combinations.
//!
//! This crate answers two questions about choosing `k` elements from a
//! finite set of `n` distinct elements: *how many ways are there?* and
//! *what are they?* — the second one without ever materializing the full
//! collection of subsets.
//!
//! # Overview
//!
//! The crate is organized around three pieces:
//!
//! 1. **Counting** — [`binomial`]: the [`choose`] function, a multiplicative
//!    binomial coefficient computation whose intermediate values stay exact
//!    in plain integer arithmetic.
//! 2. **Viewing** — [`combinations`]: the [`Combinations`] view, a read-only
//!    set of all k-subsets of a ground set. It reports its size via
//!    [`choose`], answers membership queries through a lazily built lookup
//!    table, and hands out any number of independent enumeration passes.
//! 3. **Enumerating** — [`Combinadic`], the iterator behind each pass. It
//!    steps through strictly increasing index tuples in lexicographic order
//!    (the combinatorial number system), visiting every k-subset exactly
//!    once.
//!
//! Produced subsets are [`Combination`] values: immutable, insertion-ordered
//! sets with order-insensitive equality and hashing.
//!
//! # Examples
//!
//! ```
//! use nchoosek_core::{Combinations, choose};
//!
//! assert_eq!(choose(2, 4), 6);
//!
//! let view = Combinations::new(2, ["a", "b", "c"]);
//! assert_eq!(view.len(), 3);
//!
//! let rendered: Vec<String> = view.iter().map(|c| c.to_string()).collect();
//! assert_eq!(rendered, ["{a, b}", "{a, c}", "{b, c}"]);
//! ```

pub mod binomial;
pub mod combination;
pub mod combinations;

// Re-export the whole public surface.
pub use self::{
    binomial::choose,
    combination::Combination,
    combinations::{Combinadic, Combinations, Exhausted},
};
