//! The operator vocabulary, one module per operator.

pub mod average;
pub mod box_it;
pub mod catch;
pub mod collect;
pub mod concat;
pub mod count;
pub mod debounce;
pub mod distinct;
pub mod element_at;
pub mod filter;
pub mod first;
pub mod flat_map;
pub mod fork;
pub mod ignore_elements;
pub mod last;
pub mod map;
pub mod merge;
pub mod merge_delay_error;
pub mod minmax;
pub mod reduce;
pub mod replay;
pub mod retry;
pub mod sample;
pub mod scan;
pub mod skip_last;
pub mod subscribe;
pub mod sum;
pub mod take;
pub mod take_last;
pub mod tap;
pub mod timeout;
