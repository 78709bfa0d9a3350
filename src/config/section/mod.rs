//! Configuration section definitions.
//!
//! Each module corresponds to a section in `nobg.toml`:
//!
//! | Module       | TOML Section     | Purpose                           |
//! |--------------|------------------|-----------------------------------|
//! | `classifier` | `[classifier]`   | Background classifier tuning      |

mod classifier;

pub use classifier::ClassifierConfig;
