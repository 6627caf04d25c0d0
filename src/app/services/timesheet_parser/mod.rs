//! Timesheet parser for employee time-tracking files
//!
//! A timesheet file names one employee and lists booked time per day:
//!
//! ```text
//! EMP-ID: 4711
//! EMP-NAME: Rainer Stropek
//! TIMESHEETS: 2025-10-01
//! 08:00;08:15;"Daily Standup Meeting";ADMIN
//! 08:15;09:00;"Work";ACCOUNTING
//! ```
//!
//! ## Architecture
//!
//! - [`parser`] - Line scanner and state machine driving the parse
//! - [`header`] - `EMP-ID` / `EMP-NAME` header validation
//! - [`entry`] - Section date and time entry field validation
//! - [`resolver`] - Employee and project resolution without mutating inputs
//! - [`lines`] - Logical line splitting and whitespace checks
//! - [`error`] - Closed set of error kinds
//!
//! ## Usage
//!
//! ```rust
//! use typed_import::app::services::timesheet_parser::TimesheetParser;
//!
//! let text = "EMP-ID: 4711\nEMP-NAME: Rainer Stropek\nTIMESHEETS: 2025-10-01\n08:00;08:15;\"Standup\";ADMIN";
//! let parsed = TimesheetParser::new().parse(text, &[], &[]).unwrap();
//! assert_eq!(parsed.entries.len(), 1);
//! ```

pub mod entry;
pub mod error;
pub mod header;
pub mod lines;
pub mod parser;
pub mod resolver;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use error::TimesheetParseError;
pub use header::{EmployeeHeader, EmployeeHeaderBuilder};
pub use parser::{ParsedTimesheet, TimesheetParser};
pub use resolver::{EmployeeResolution, ProjectCache};
