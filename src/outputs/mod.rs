//! Output generation: the daily Markdown file and reading it back.
//!
//! # Submodules
//!
//! - [`markdown`]: Renders news items and appends them to the day's file
//! - [`archive`]: Parses written files back for browsing and search
//!
//! # Output Structure
//!
//! ```text
//! data/current-affairs/
//! ├── 2025/
//! │   ├── April/
//! │   │   └── 2025-04-30.md
//! │   └── May/
//! │       ├── 2025-05-05.md
//! │       └── 2025-05-06.md
//! ```

pub mod archive;
pub mod markdown;
