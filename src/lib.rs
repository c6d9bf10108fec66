//! Core library for mcprops, a Minecraft `server.properties` editor.
//! Provides the properties codec, the static field registry, form/property
//! reconciliation and the page controller driving load and save.

pub mod error;
pub mod fields;
pub mod form;
mod gui;
pub mod page;
pub mod properties;
pub mod statics;
pub mod transport;

pub use error::{FormError, LoadError, SaveError, TransportError};
pub use form::{AvailableSet, FieldValue, FormState, FormValues};
pub use gui::{EditorOptions, run_gui};
pub use page::{
    EditMode, Notification, NotificationKind, PageOptions, PageState, PropertiesPage,
    ServerTarget,
};
pub use properties::PropertyMap;
pub use transport::{FileTransport, LocalDirTransport};
