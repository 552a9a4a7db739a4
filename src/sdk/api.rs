use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::object::{Attributes, DefaultFlattener, Flatten, ParseObject, PlainObject};
use crate::query::{self, ComparisonFn, ComparisonOp, EnrollFn, ObserveCountFn, ObserveOneFn, Query};
use crate::subscription::{LocalSubscriptions, SubscriptionManager};
use crate::user::{AuthOptions, LinkOptions, ParseUser, RefreshingUserBackend, UserBackend};
use crate::util::errors::{invalid_argument, unsupported, ParseResult};

use super::config::{ParseOptions, ParseSdkSettings};
use super::registry::{install_if_absent, MethodTable, PatchPoint, ToPlainObjectFn};

/// Handle on the client SDK with its extension methods.
///
/// Cloning is cheap and every clone shares the same method table, so patches
/// applied through one clone are visible through all of them.
#[derive(Clone)]
pub struct ParseSdk {
    inner: Arc<ParseSdkInner>,
}

struct ParseSdkInner {
    options: ParseOptions,
    settings: ParseSdkSettings,
    flattener: Arc<dyn Flatten>,
    subscriptions: Arc<dyn SubscriptionManager>,
    local: LocalSubscriptions,
    methods: RwLock<MethodTable>,
    patched: AtomicBool,
}

impl ParseSdk {
    pub fn builder(options: ParseOptions) -> ParseSdkBuilder {
        ParseSdkBuilder::new(options)
    }

    pub fn name(&self) -> &str {
        &self.inner.settings.name
    }

    pub fn options(&self) -> &ParseOptions {
        &self.inner.options
    }

    pub fn local_subscriptions(&self) -> &LocalSubscriptions {
        &self.inner.local
    }

    pub fn query(&self, class_name: impl Into<String>) -> Query {
        Query::new(self.clone(), class_name)
    }

    pub(crate) fn methods(&self) -> RwLockReadGuard<'_, MethodTable> {
        self.inner
            .methods
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn methods_mut(&self) -> RwLockWriteGuard<'_, MethodTable> {
        self.inner
            .methods
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Comparison builder currently bound for `op`.
    pub fn comparison(&self, op: ComparisonOp) -> ComparisonFn {
        self.methods().comparison(op)
    }

    /// Authentication backend currently bound on the user type.
    pub fn user_backend(&self) -> Arc<dyn UserBackend> {
        Arc::clone(&self.methods().users)
    }

    pub fn is_defined(&self, point: PatchPoint) -> bool {
        self.methods().is_defined(point)
    }

    pub fn is_patched(&self) -> bool {
        self.inner.patched.load(Ordering::SeqCst)
    }

    /// Binds a caller-provided `toPlainObject`. Patching never replaces it.
    pub fn define_to_plain_object<F>(&self, method: F)
    where
        F: Fn(&ParseObject) -> ParseResult<PlainObject> + Send + Sync + 'static,
    {
        self.methods_mut().to_plain_object = Some(Arc::new(method));
    }

    pub fn define_enroll(&self, method: EnrollFn) {
        self.methods_mut().enroll = Some(method);
    }

    pub fn define_observe_one(&self, method: ObserveOneFn) {
        self.methods_mut().observe_one = Some(method);
    }

    pub fn define_observe_count(&self, method: ObserveCountFn) {
        self.methods_mut().observe_count = Some(method);
    }

    /// Replaces the comparison builder bound for `op`. After patching, the
    /// replacement is wrapped like the base builder would have been.
    pub fn override_comparison(&self, op: ComparisonOp, method: ComparisonFn) {
        let mut methods = self.methods_mut();
        let method = if self.is_patched() {
            query::rewrite_pointers(method)
        } else {
            method
        };
        methods.comparisons.insert(op, method);
    }

    /// Installs the extension methods and wraps the comparison builders and
    /// authentication entry points.
    ///
    /// Only the first call has an effect. Additive methods that are already
    /// defined are kept.
    pub fn apply_patches(&self) {
        let mut methods = self.methods_mut();
        if self.inner.patched.swap(true, Ordering::SeqCst) {
            log::debug!("patches already applied to {}", self.name());
            return;
        }

        let flattener = Arc::clone(&self.inner.flattener);
        install_if_absent(&mut methods.to_plain_object, PatchPoint::ToPlainObject, || {
            Arc::new(move |object: &ParseObject| flattener.flatten(object)) as ToPlainObjectFn
        });
        let subscriptions = Arc::clone(&self.inner.subscriptions);
        install_if_absent(&mut methods.enroll, PatchPoint::Enroll, || {
            query::enroll_with(subscriptions)
        });
        install_if_absent(&mut methods.observe_one, PatchPoint::ObserveOne, query::observe_one);
        install_if_absent(&mut methods.observe_count, PatchPoint::ObserveCount, query::observe_count);

        for op in ComparisonOp::ALL {
            let original = methods.comparison(op);
            methods.comparisons.insert(op, query::rewrite_pointers(original));
            log::debug!("wrapped {op} with pointer rewriting");
        }

        let original = Arc::clone(&methods.users);
        methods.users = Arc::new(RefreshingUserBackend::new(original, self.inner.local.clone()));
        log::debug!("wrapped signUp, logIn, linkWith and logOut with current user refresh");
    }

    /// Flattens `object` through the bound `toPlainObject`.
    pub fn to_plain_object(&self, object: &ParseObject) -> ParseResult<PlainObject> {
        let method = self
            .methods()
            .to_plain_object
            .clone()
            .ok_or_else(|| unsupported("Object.toPlainObject is not installed"))?;
        method(object)
    }

    pub async fn sign_up(
        &self,
        user: &ParseUser,
        attributes: Attributes,
        options: AuthOptions,
    ) -> ParseResult<ParseUser> {
        let backend = self.user_backend();
        backend.sign_up(user, attributes, options).await
    }

    pub async fn log_in(&self, user: &ParseUser, options: AuthOptions) -> ParseResult<ParseUser> {
        let backend = self.user_backend();
        backend.log_in(user, options).await
    }

    pub async fn link_with(
        &self,
        user: &ParseUser,
        provider: &str,
        options: LinkOptions,
    ) -> ParseResult<ParseUser> {
        let backend = self.user_backend();
        backend.link_with(user, provider, options).await
    }

    pub async fn log_out(&self) -> ParseResult<()> {
        let backend = self.user_backend();
        backend.log_out().await
    }
}

impl fmt::Debug for ParseSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseSdk")
            .field("name", &self.name())
            .field("application_id", &self.inner.options.application_id)
            .field("patched", &self.is_patched())
            .finish()
    }
}

pub struct ParseSdkBuilder {
    options: ParseOptions,
    settings: ParseSdkSettings,
    flattener: Option<Arc<dyn Flatten>>,
    subscriptions: Option<Arc<dyn SubscriptionManager>>,
    local: Option<LocalSubscriptions>,
    users: Option<Arc<dyn UserBackend>>,
}

impl ParseSdkBuilder {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            settings: ParseSdkSettings::default(),
            flattener: None,
            subscriptions: None,
            local: None,
            users: None,
        }
    }

    pub fn with_settings(mut self, settings: ParseSdkSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_flattener(mut self, flattener: Arc<dyn Flatten>) -> Self {
        self.flattener = Some(flattener);
        self
    }

    pub fn with_subscription_manager(mut self, manager: Arc<dyn SubscriptionManager>) -> Self {
        self.subscriptions = Some(manager);
        self
    }

    pub fn with_local_subscriptions(mut self, local: LocalSubscriptions) -> Self {
        self.local = Some(local);
        self
    }

    pub fn with_user_backend(mut self, backend: Arc<dyn UserBackend>) -> Self {
        self.users = Some(backend);
        self
    }

    pub fn build(self) -> ParseResult<ParseSdk> {
        self.options.validate()?;
        let users = self
            .users
            .ok_or_else(|| invalid_argument("a user backend is required"))?;
        let subscriptions = self
            .subscriptions
            .ok_or_else(|| invalid_argument("a subscription manager is required"))?;
        let local = self
            .local
            .ok_or_else(|| invalid_argument("local subscriptions are required"))?;
        let flattener = self
            .flattener
            .unwrap_or_else(|| Arc::new(DefaultFlattener) as Arc<dyn Flatten>);

        Ok(ParseSdk {
            inner: Arc::new(ParseSdkInner {
                options: self.options,
                settings: self.settings,
                flattener,
                subscriptions,
                local,
                methods: RwLock::new(MethodTable::new(users)),
                patched: AtomicBool::new(false),
            }),
        })
    }
}
