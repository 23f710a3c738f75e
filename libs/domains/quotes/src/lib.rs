//! Quote estimation domain.
//!
//! The pipeline for pricing a custom 3D-printed part: load the machine
//! catalog and historical orders, pick a production machine, derive its
//! depreciation cost per hour, ask the AI estimator for a base cost and
//! production time, and fold everything into a price range. The operator
//! notification at the end is best-effort and never blocks the quote.

pub mod calculator;
pub mod catalog;
pub mod cost;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod models;
pub mod selector;
pub mod service;

pub use error::{QuoteError, QuoteResult};
pub use models::{AiEstimate, HistoricalOrder, Machine, Quote, QuoteRequest, QuoteResponse};
pub use service::{MachineSummary, QuoteNotifier, QuoteService};
