//! Prelude module for waitlist
//!
//! Re-exports the types most code working with the store needs.
//!
//! # Usage
//!
//! ```rust
//! use waitlist::prelude::*;
//! ```

pub use crate::config::Config;
pub use crate::database::{Database, EntryOrder, Session, WaitList, WaitListEntry};
pub use crate::error::{Error, Result};
pub use crate::types::{Approval, EntryId, ListId};

pub use chrono::{DateTime, Utc};
