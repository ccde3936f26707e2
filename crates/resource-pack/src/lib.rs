//! # Resource Pack
//!
//! Resolve namespaced resource ids to files inside resource packs.
//!
//! A [`PackStack`] is an ordered list of pack roots. Lookups try the target pack
//! first and fall back to later packs; writes always go to the target pack.
//!
//! ## Example
//!
//! ```no_run
//! use resource_pack::{PackStack, ResourceId, ResourceKind};
//!
//! let packs = PackStack::new("my_pack").with_fallback("vanilla");
//! let id = ResourceId::parse("minecraft:default").unwrap();
//! let (path, data) = packs.read(&id, ResourceKind::FontDefinition).unwrap();
//! println!("{} ({} bytes)", path.display(), data.len());
//! ```

mod error;
mod id;
mod pack;

pub use error::{Error, Result};
pub use id::{DEFAULT_NAMESPACE, ResourceId};
pub use pack::{PackStack, ResourceKind};
