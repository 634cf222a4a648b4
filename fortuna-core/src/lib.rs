//! Fortuna core is the selection engine behind the decision wheel.
//!
//! Core concepts:
//! - **WheelOption**: one candidate on the wheel, owned by an `OptionSet`
//! - **OptionSet**: the insertion-ordered candidate list; order determines
//!   slice positions and therefore the winner mapping
//! - **SpinEngine**: maps a spin request to a randomized target rotation and
//!   resolves which option it points to once the rotation settles
//! - **Coordinate** / **BoundingBox**: the coordinate math behind the
//!   nearby-place search (haversine distances, viewbox construction)
//!
//! # Example
//!
//! ```
//! use fortuna_core::{OptionSet, SpinEngine};
//!
//! let mut options = OptionSet::new();
//! options.add("ramen");
//! options.add("sushi");
//!
//! let mut engine = SpinEngine::new();
//! engine.begin_spin(&options, 45.0);
//! let winner = engine.settle(&options).unwrap();
//! println!("dinner: {}", winner.text);
//! ```

mod engine;
mod geo;
mod option_set;

pub use engine::{winning_index, SpinEngine, SpinPhase, SPIN_DURATION, SPIN_TURNS_DEG};
pub use geo::{
    format_distance, haversine_distance, maps_search_url, BoundingBox, Coordinate,
    NEARBY_OFFSET_DEG,
};
pub use option_set::{OptionId, OptionSet, WheelOption};
