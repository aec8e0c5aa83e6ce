//! Budgeto - monthly budget builder
//!
//! This library provides the core functionality for the Budgeto budgeting
//! application. A budget is entered over a five step wizard (income, fixed
//! expenses, variable expenses, savings goals, summary) and then assessed
//! against an allocation rule, by default 50/30/20.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Budget items, categories, wizard steps, rules and recommendations
//! - `store`: Immutable budget state, derived totals and the snapshot format
//! - `storage`: The persistence slot holding the snapshot
//! - `services`: Input validation, persistence and the recommendation engine
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgeto::config::{BudgetoPaths, Settings};
//! use budgeto::services::BudgetService;
//! use budgeto::storage::FileSnapshotSurface;
//!
//! let paths = BudgetoPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let surface = FileSnapshotSurface::from_paths(&paths);
//! let service = BudgetService::open(&surface)?;
//! println!("{:?}", service.recommendation(&settings.rules));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{BudgetoError, BudgetoResult};
