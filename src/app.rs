//! Application module: the model that binds key presses to the playback
//! controller and the view model the UI renders from.
//!
//! `App` lives in `app::model`; `NowPlayingView` in `app::view`.

mod model;
mod view;

pub use model::*;
pub use view::NowPlayingView;
