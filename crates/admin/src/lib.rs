//! Admin and presentation-facing orchestration.
//!
//! The layers above the data core: the homepage content admin panel, the
//! multi-step project editor, and the read-only static listings. This is
//! also the catch boundary of the workspace -- store failures are logged
//! and translated into user-visible [`Notice`]s here and never propagate
//! further.

pub mod editor;
pub mod listings;
pub mod notice;
pub mod panel;

pub use editor::ProjectEditor;
pub use listings::Listing;
pub use notice::{Notice, NoticeLevel};
pub use panel::{ContentAdminPanel, ContentForm, PanelMode};
