//! # Stall Map
//!
//! Interactive floor-plan map for a stall leasing office: which stall is where, which are
//! free, and who leases the rest.
//!
//! ## Features
//!
//! - Ground, second and third floor plans with ~140 authored stall outlines
//! - Click hit-testing against scaled floor plans (rectangles and polygons)
//! - Occupancy overlays kept in sync with a live data provider
//! - Directory mode (view details) and picker mode (select a stall for assignment)
//!
//! ## Example
//!
//! ```
//! use stall_map::hit_test::{resolve_click, ImageBox, Pointer};
//! use stall_map::model::Floor;
//! use stall_map::registry::floor_plan;
//!
//! let plan = floor_plan(Floor::Second);
//! // The plan drawn at half size with its top-left corner at (100, 50).
//! let image = ImageBox::new(100.0, 50.0, plan.width / 2.0, plan.height / 2.0);
//! let code = resolve_click(Pointer::new(100.0 + 180.0, 50.0 + 50.0), &image, plan);
//! assert_eq!(code, Some("c1"));
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod model;
pub mod overlay;
pub mod provider;
pub mod registry;
pub mod telemetry;
pub mod ui;
