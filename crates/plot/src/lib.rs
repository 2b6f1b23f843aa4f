//! Plotting for transient responses.
//!
//! A [`Figure`] is a window holding one or more [`Panel`]s laid out side by
//! side. Each panel has a title, axis labels, an optional grid and legend,
//! and any number of [`Series`] drawn as lines.
//!
//! # Example
//!
//! ```no_run
//! use tau_plot::{Figure, LineStyle, Panel, Series};
//!
//! let rising = Series::new("rising", vec![[0.0, 0.0], [1.0, 0.63], [2.0, 0.86]]);
//! let falling = Series::new("falling", vec![[0.0, 1.0], [1.0, 0.37], [2.0, 0.14]])
//!     .style(LineStyle::Dashed);
//!
//! Figure::new("Example")
//!     .panel(
//!         Panel::new("Responses")
//!             .x_label("Time (ms)")
//!             .grid(true)
//!             .legend()
//!             .series(rising)
//!             .series(falling),
//!     )
//!     .show()
//!     .unwrap();
//! ```

mod error;
mod figure;
mod series;

pub use error::Error;
pub use figure::{Figure, Panel};
pub use series::{LineStyle, Series};
