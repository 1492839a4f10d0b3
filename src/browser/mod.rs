//! Browser location, session isolation, and timed page-load probing

pub mod locator;
pub mod probe;
pub mod session;

pub use locator::BrowserLocator;
pub use probe::{BrowserFetch, BrowserProbe, ChromeProbe};
pub use session::SessionResources;
