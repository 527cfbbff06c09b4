//! High-level operations on a project's npm configuration
//!
//! The operations coordinate:
//! - npm: Configuration dump and settings (from npm module)
//! - Auth: Registry credentials (from auth module)
//! - npmrc: Transformation and type restriction (from npmrc module)
//! - Backup: Restore on error or when done (from backup module)

pub mod rewrite;

pub use rewrite::{
    RewriteContext, restore_original_config, rewrite_config, with_override,
};
