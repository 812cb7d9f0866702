/*!
 * Core Module
 * Fundamental types shared by every strategy
 */

pub mod types;

pub use types::*;
