//! State machine behind the tutor profile screen.
//!
//! Three parts share one [`TutorProfileState`]: the profile store, the
//! view/edit mode controller and the read-only booking history.

pub mod controller;
pub mod history;
pub mod mode;
pub mod mount;
pub mod state;
pub mod store;
pub mod view;

pub use history::HistoryLoader;
pub use mode::{EditMode, EditModeController};
pub use mount::MountGuard;
pub use state::{Notification, NotificationKind, TutorProfileAction, TutorProfileState};
pub use store::ProfileStore;
pub use view::TutorProfileView;
