//! Sorting strategies, one `impl SortContext` block per algorithm.
//!
//! Every runner takes the working buffer built by
//! [`SortContext::execute`](super::SortContext::execute), sorts it by value,
//! and mirrors visible changes into the store through the context helpers.

pub mod bubble;
pub mod bucket;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
