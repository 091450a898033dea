//! Terminal console for the Cuttlefish ticket retrieval backend.
//!
//! The library holds everything the `cuttlefish` binary drives: the
//! interactive [`ui`], the credential store, logging setup and the shared
//! console types. The backend contract itself lives in `cuttlefish-api`.

pub mod app_dirs;
pub mod credentials;
pub mod logging;
pub mod reference;
mod systems;
pub mod types;
pub mod ui;

pub use types::{ConsoleTab, ConsoleVariant, RequestOptions};
pub use ui::{ConsoleOptions, run};
pub use ui::style::{Theme, default_theme};
