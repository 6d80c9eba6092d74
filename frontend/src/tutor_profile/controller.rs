//! Async tasks that bridge the backend and the screen state.
//!
//! Each task resolves independently and hands its result to `dispatch`
//! only while the screen is still mounted.

use log::debug;

use super::history::HistoryLoader;
use super::mount::MountGuard;
use super::state::TutorProfileAction;
use super::store::ProfileStore;
use crate::api::TutorApi;

pub async fn load_profile<A, D>(api: &A, guard: &MountGuard, dispatch: D)
where
    A: TutorApi + ?Sized,
    D: FnOnce(TutorProfileAction),
{
    let result = ProfileStore::load(api).await;
    if !guard.run_if_mounted(|| dispatch(TutorProfileAction::ProfileLoaded(result))) {
        debug!("Screen unmounted; dropping profile response");
    }
}

pub async fn load_history<A, D>(api: &A, guard: &MountGuard, dispatch: D)
where
    A: TutorApi + ?Sized,
    D: FnOnce(TutorProfileAction),
{
    let result = HistoryLoader::load(api).await;
    if !guard.run_if_mounted(|| dispatch(TutorProfileAction::HistoryLoaded(result))) {
        debug!("Screen unmounted; dropping booking history response");
    }
}

/// Commits `store` and reports the outcome. The caller dispatches
/// [`TutorProfileAction::SaveStarted`] before spawning this.
pub async fn save_profile<A, D>(api: &A, guard: &MountGuard, store: ProfileStore, dispatch: D)
where
    A: TutorApi + ?Sized,
    D: FnOnce(TutorProfileAction),
{
    let outcome = store.commit(api).await;
    if !guard.run_if_mounted(|| dispatch(TutorProfileAction::SaveFinished(outcome))) {
        debug!("Screen unmounted; dropping save outcome");
    }
}
