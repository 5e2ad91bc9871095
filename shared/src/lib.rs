pub mod catalog;
pub mod coords;
pub mod label;
pub mod layers;
pub mod markers;
pub mod route;
pub mod selection;
pub mod url_state;

pub use catalog::{MapCatalog, MapInfo};
pub use coords::{MapBounds, MapPoint};
pub use label::{IconKey, LayerLabel};
pub use layers::{LayerEntry, LayerGroup, LayerId, LayerRegistry, LayerSurface};
pub use markers::{MarkerData, MarkerGroup, MarkerItem, MarkerSpec};
pub use route::Route;
pub use selection::{ClickOutcome, SelectionController};
