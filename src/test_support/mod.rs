//! Test doubles shared across crate-level unit tests.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::object::{Attributes, ParseObject};
use crate::query::{ObservationMode, Query};
use crate::sdk::{ParseOptions, ParseSdk};
use crate::subscription::{
    CurrentUserRefresh, LocalSubscriptions, QueryCallbacks, SubscriptionHandle,
    SubscriptionManager,
};
use crate::user::{AuthOptions, LinkOptions, ParseUser, UserBackend};
use crate::util::errors::{ParseError, ParseResult};

/// Ordered record of collaborator calls.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub enum Outcome {
    Succeed,
    Fail(ParseError),
}

/// Base authentication backend that records calls and resolves with a
/// fixed user, or fails with the configured error.
pub struct RecordingUserBackend {
    log: EventLog,
    outcome: Outcome,
}

impl RecordingUserBackend {
    pub fn new(log: EventLog) -> Self {
        Self::with_outcome(log, Outcome::Succeed)
    }

    pub fn with_outcome(log: EventLog, outcome: Outcome) -> Self {
        Self { log, outcome }
    }

    pub fn resolved_user(&self) -> ParseUser {
        let mut user = ParseUser::with_credentials("ada");
        user.object_mut().set_object_id("u1");
        user.set_session_token("r:session");
        user
    }

    fn settle<T>(&self, event: String, value: T) -> ParseResult<T> {
        self.log.push(event);
        match &self.outcome {
            Outcome::Succeed => Ok(value),
            Outcome::Fail(error) => Err(error.clone()),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl UserBackend for RecordingUserBackend {
    async fn sign_up(
        &self,
        _user: &ParseUser,
        _attributes: Attributes,
        _options: AuthOptions,
    ) -> ParseResult<ParseUser> {
        self.settle("signUp".into(), self.resolved_user())
    }

    async fn log_in(&self, _user: &ParseUser, _options: AuthOptions) -> ParseResult<ParseUser> {
        self.settle("logIn".into(), self.resolved_user())
    }

    async fn link_with(
        &self,
        _user: &ParseUser,
        provider: &str,
        _options: LinkOptions,
    ) -> ParseResult<ParseUser> {
        self.settle(format!("linkWith:{provider}"), self.resolved_user())
    }

    async fn log_out(&self) -> ParseResult<()> {
        self.settle("logOut".into(), ())
    }
}

pub struct CountingRefresher {
    log: EventLog,
    count: AtomicUsize,
}

impl CountingRefresher {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            count: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl CurrentUserRefresh for CountingRefresher {
    fn update(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.log.push("refresh");
    }
}

/// Subscription manager that remembers what was enrolled.
#[derive(Default)]
pub struct RecordingSubscriptionManager {
    next_id: AtomicU64,
    enrolled: Mutex<Vec<(String, ObservationMode)>>,
    failure: Option<ParseError>,
}

impl RecordingSubscriptionManager {
    pub fn failing(error: ParseError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn enrolled(&self) -> Vec<(String, ObservationMode)> {
        self.enrolled.lock().unwrap().clone()
    }
}

impl SubscriptionManager for RecordingSubscriptionManager {
    fn subscribe_to_query(
        &self,
        query: &Query,
        _callbacks: QueryCallbacks,
    ) -> ParseResult<SubscriptionHandle> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.enrolled
            .lock()
            .unwrap()
            .push((query.class_name().to_string(), query.observation_mode()));
        Ok(SubscriptionHandle::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        ))
    }
}

/// Collaborators wired into an SDK built by [`sdk_with`].
pub struct Fixture {
    pub log: EventLog,
    pub backend: Arc<RecordingUserBackend>,
    pub refresher: Arc<CountingRefresher>,
    pub subscriptions: Arc<RecordingSubscriptionManager>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_backend_outcome(Outcome::Succeed)
    }

    pub fn with_backend_outcome(outcome: Outcome) -> Self {
        let log = EventLog::default();
        Self {
            backend: Arc::new(RecordingUserBackend::with_outcome(log.clone(), outcome)),
            refresher: Arc::new(CountingRefresher::new(log.clone())),
            subscriptions: Arc::new(RecordingSubscriptionManager::default()),
            log,
        }
    }
}

pub fn sdk_with(fixture: &Fixture) -> ParseSdk {
    ParseSdk::builder(test_options())
        .with_user_backend(Arc::clone(&fixture.backend) as Arc<dyn UserBackend>)
        .with_subscription_manager(Arc::clone(&fixture.subscriptions) as Arc<dyn SubscriptionManager>)
        .with_local_subscriptions(LocalSubscriptions::new(
            Arc::clone(&fixture.refresher) as Arc<dyn CurrentUserRefresh>,
        ))
        .build()
        .expect("test sdk")
}

pub fn unpatched_sdk() -> ParseSdk {
    sdk_with(&Fixture::new())
}

pub fn test_options() -> ParseOptions {
    ParseOptions {
        application_id: "test-app".into(),
        server_url: Some("http://localhost:1337/parse".into()),
        ..Default::default()
    }
}

pub fn saved_object(class_name: &str, object_id: &str) -> ParseObject {
    ParseObject::with_object_id(class_name, object_id)
}
