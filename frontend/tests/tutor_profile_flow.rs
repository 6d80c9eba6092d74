use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;
use pretty_assertions::assert_eq;
use tutor_frontend::api::TutorApi;
use tutor_frontend::tutor_profile::controller::{load_history, load_profile, save_profile};
use tutor_frontend::tutor_profile::state::SAVE_SUCCESS_MESSAGE;
use tutor_frontend::tutor_profile::{
    EditMode, MountGuard, NotificationKind, TutorProfileAction, TutorProfileState, TutorProfileView,
};
use tutor_shared::{
    FetchError, ProfileField, ProfileRecord, Resource, SaveError, TutorBookingDto, TutorProfileDto,
    UpdateTutorProfileRequest,
};
use yew::functional::Reducible;

/// Backend stand-in with canned answers that records every update body.
struct ScriptedApi {
    profile: Result<TutorProfileDto, FetchError>,
    bookings: Result<Vec<TutorBookingDto>, FetchError>,
    save: Result<(), SaveError>,
    updates: RefCell<Vec<UpdateTutorProfileRequest>>,
}

impl ScriptedApi {
    fn new() -> Self {
        Self {
            profile: Ok(ana_lee()),
            bookings: Ok(vec![booking("1", "Present"), booking("2", "Absent")]),
            save: Ok(()),
            updates: RefCell::new(Vec::new()),
        }
    }

    fn failing_save(mut self) -> Self {
        self.save = Err(SaveError::Network("connection refused".to_string()));
        self
    }
}

#[async_trait(?Send)]
impl TutorApi for ScriptedApi {
    async fn fetch_profile(&self) -> Result<TutorProfileDto, FetchError> {
        self.profile.clone()
    }

    async fn fetch_bookings(&self) -> Result<Vec<TutorBookingDto>, FetchError> {
        self.bookings.clone()
    }

    async fn update_profile(&self, request: &UpdateTutorProfileRequest) -> Result<(), SaveError> {
        self.updates.borrow_mut().push(request.clone());
        self.save.clone()
    }
}

/// Holds the screen state the way the component's reducer hook does.
#[derive(Default)]
struct Screen {
    state: RefCell<Rc<TutorProfileState>>,
}

impl Screen {
    fn dispatch(&self, action: TutorProfileAction) {
        let current = self.state.borrow().clone();
        *self.state.borrow_mut() = current.reduce(action);
    }

    fn snapshot(&self) -> TutorProfileState {
        (**self.state.borrow()).clone()
    }
}

fn ana_lee() -> TutorProfileDto {
    TutorProfileDto {
        name: "Ana Lee".to_string(),
        email: "a@x.com".to_string(),
        biography: None,
        courses: Some(vec!["Math".to_string(), "Physics".to_string()]),
    }
}

fn booking(session_id: &str, status: &str) -> TutorBookingDto {
    TutorBookingDto {
        session_id: Some(session_id.to_string()),
        student_id: format!("student-{}", session_id),
        course_id: "MATH101".to_string(),
        feedback: "Reviewed homework".to_string(),
        date: "2024-05-01".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        status: status.to_string(),
    }
}

fn mount(api: &ScriptedApi, screen: &Screen, guard: &MountGuard) {
    block_on(load_profile(api, guard, |a| screen.dispatch(a)));
    block_on(load_history(api, guard, |a| screen.dispatch(a)));
}

fn save(api: &ScriptedApi, screen: &Screen, guard: &MountGuard) {
    screen.dispatch(TutorProfileAction::SaveStarted);
    let store = screen.snapshot().profile;
    block_on(save_profile(api, guard, store, |a| screen.dispatch(a)));
}

#[test]
fn test_mount_maps_profile_without_biography() {
    let api = ScriptedApi::new();
    let screen = Screen::default();
    mount(&api, &screen, &MountGuard::new());

    assert_eq!(
        screen.snapshot().profile.record(),
        &ProfileRecord {
            full_name: "Ana Lee".to_string(),
            biography: String::new(),
            subject_list: "Math Physics".to_string(),
            email: "a@x.com".to_string(),
        }
    );
    assert_eq!(screen.snapshot().history.bookings().len(), 2);
}

#[test]
fn test_edit_then_save_sends_mapped_payload_even_when_save_fails() {
    let api = ScriptedApi::new().failing_save();
    let screen = Screen::default();
    let guard = MountGuard::new();
    mount(&api, &screen, &guard);

    screen.dispatch(TutorProfileAction::BeginEdit);
    screen.dispatch(TutorProfileAction::SetField {
        field: "fullname".parse::<ProfileField>().unwrap(),
        value: "Ana L.".to_string(),
    });
    save(&api, &screen, &guard);

    assert_eq!(
        api.updates.borrow().as_slice(),
        &[UpdateTutorProfileRequest {
            fullname: "Ana L.".to_string(),
            profile: String::new(),
            subject: "Math Physics".to_string(),
            email: "a@x.com".to_string(),
        }]
    );

    let state = screen.snapshot();
    assert_eq!(state.mode.mode(), EditMode::View);
    let notification = state.notification.unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, SAVE_SUCCESS_MESSAGE);
}

#[test]
fn test_save_without_edits_sends_last_loaded_profile() {
    let api = ScriptedApi::new();
    let screen = Screen::default();
    let guard = MountGuard::new();
    mount(&api, &screen, &guard);

    screen.dispatch(TutorProfileAction::BeginEdit);
    save(&api, &screen, &guard);

    let expected = ProfileRecord::from(ana_lee()).to_update_request();
    assert_eq!(api.updates.borrow().as_slice(), &[expected]);
}

#[test]
fn test_set_field_before_edit_is_not_saved() {
    let api = ScriptedApi::new();
    let screen = Screen::default();
    let guard = MountGuard::new();
    mount(&api, &screen, &guard);

    screen.dispatch(TutorProfileAction::SetField {
        field: ProfileField::Email,
        value: "someone@else.com".to_string(),
    });
    screen.dispatch(TutorProfileAction::BeginEdit);
    save(&api, &screen, &guard);

    assert_eq!(api.updates.borrow()[0].email, "a@x.com");
}

#[test]
fn test_empty_history_renders_zero_rows() {
    let mut api = ScriptedApi::new();
    api.bookings = Ok(Vec::new());
    let screen = Screen::default();
    mount(&api, &screen, &MountGuard::new());

    let view = TutorProfileView::project(&screen.snapshot());
    assert!(view.rows.is_empty());
    assert!(!view.history_loading);
}

#[test]
fn test_fetch_failures_leave_defaults() {
    let mut api = ScriptedApi::new();
    api.profile = Err(FetchError::status(Resource::Profile, 401, "Not logged in"));
    api.bookings = Err(FetchError::network(Resource::Bookings, "offline"));
    let screen = Screen::default();
    mount(&api, &screen, &MountGuard::new());

    let state = screen.snapshot();
    assert_eq!(state.profile.record(), &ProfileRecord::default());
    assert!(state.history.is_empty());
    assert!(state.profile_error.is_some());
    assert!(state.history_error.is_some());
    assert_eq!(state.notification, None);
}

#[test]
fn test_completion_order_does_not_matter() {
    let api = ScriptedApi::new();
    let guard = MountGuard::new();

    let forward = Screen::default();
    block_on(load_profile(&api, &guard, |a| forward.dispatch(a)));
    block_on(load_history(&api, &guard, |a| forward.dispatch(a)));

    let reverse = Screen::default();
    block_on(load_history(&api, &guard, |a| reverse.dispatch(a)));
    block_on(load_profile(&api, &guard, |a| reverse.dispatch(a)));

    assert_eq!(forward.snapshot(), reverse.snapshot());
}

#[test]
fn test_response_after_unmount_is_dropped() {
    let api = ScriptedApi::new();
    let screen = Screen::default();
    let guard = MountGuard::new();
    guard.unmount();

    mount(&api, &screen, &guard);

    assert_eq!(screen.snapshot(), TutorProfileState::default());
}

#[test]
fn test_save_outcome_after_unmount_is_dropped() {
    let api = ScriptedApi::new();
    let screen = Screen::default();
    let guard = MountGuard::new();
    mount(&api, &screen, &guard);

    screen.dispatch(TutorProfileAction::BeginEdit);
    screen.dispatch(TutorProfileAction::SaveStarted);
    let before = screen.snapshot();
    guard.unmount();

    block_on(save_profile(&api, &guard, before.profile.clone(), |a| screen.dispatch(a)));

    assert_eq!(api.updates.borrow().len(), 1);
    assert_eq!(screen.snapshot(), before);
    assert!(before.mode.is_saving());
    assert_eq!(before.notification, None);
}

/// Profile endpoint that answers only when the test says so.
struct SlowProfileApi {
    profile_rx: RefCell<Option<oneshot::Receiver<TutorProfileDto>>>,
}

#[async_trait(?Send)]
impl TutorApi for SlowProfileApi {
    async fn fetch_profile(&self) -> Result<TutorProfileDto, FetchError> {
        let rx = self.profile_rx.borrow_mut().take();
        match rx {
            Some(rx) => rx
                .await
                .map_err(|_| FetchError::network(Resource::Profile, "cancelled")),
            None => Err(FetchError::network(Resource::Profile, "already fetched")),
        }
    }

    async fn fetch_bookings(&self) -> Result<Vec<TutorBookingDto>, FetchError> {
        Ok(vec![booking("1", "Present")])
    }

    async fn update_profile(&self, _request: &UpdateTutorProfileRequest) -> Result<(), SaveError> {
        Ok(())
    }
}

#[test]
fn test_slow_profile_does_not_block_history() {
    let (profile_tx, profile_rx) = oneshot::channel();
    let api = Rc::new(SlowProfileApi {
        profile_rx: RefCell::new(Some(profile_rx)),
    });
    let screen = Rc::new(Screen::default());
    let guard = MountGuard::new();

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    {
        let (api, screen, guard) = (api.clone(), screen.clone(), guard.clone());
        spawner
            .spawn_local(async move {
                load_profile(&*api, &guard, |a| screen.dispatch(a)).await;
            })
            .unwrap();
    }
    {
        let (api, screen, guard) = (api.clone(), screen.clone(), guard.clone());
        spawner
            .spawn_local(async move {
                load_history(&*api, &guard, |a| screen.dispatch(a)).await;
            })
            .unwrap();
    }

    pool.run_until_stalled();
    let partial = screen.snapshot();
    assert!(partial.history_loaded);
    assert!(!partial.profile_loaded);
    assert_eq!(partial.history.bookings().len(), 1);

    profile_tx.send(ana_lee()).unwrap();
    pool.run_until_stalled();
    let complete = screen.snapshot();
    assert!(complete.profile_loaded);
    assert_eq!(complete.profile.record().full_name, "Ana Lee");
}

#[test]
fn test_late_profile_after_unmount_is_ignored() {
    let (profile_tx, profile_rx) = oneshot::channel();
    let api = Rc::new(SlowProfileApi {
        profile_rx: RefCell::new(Some(profile_rx)),
    });
    let screen = Rc::new(Screen::default());
    let guard = MountGuard::new();

    let mut pool = LocalPool::new();
    {
        let (api, screen, guard) = (api.clone(), screen.clone(), guard.clone());
        pool.spawner()
            .spawn_local(async move {
                load_profile(&*api, &guard, |a| screen.dispatch(a)).await;
            })
            .unwrap();
    }
    pool.run_until_stalled();

    guard.unmount();
    profile_tx.send(ana_lee()).unwrap();
    pool.run_until_stalled();

    assert_eq!(screen.snapshot(), TutorProfileState::default());
}
