use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::object::{ParseObject, PlainObject};
use crate::query::{ComparisonFn, ComparisonOp, EnrollFn, ObserveCountFn, ObserveOneFn, Query, QueryValue};
use crate::user::UserBackend;
use crate::util::errors::ParseResult;

pub type ToPlainObjectFn = Arc<dyn Fn(&ParseObject) -> ParseResult<PlainObject> + Send + Sync>;

/// Every extension point the installer touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatchPoint {
    ToPlainObject,
    Enroll,
    ObserveOne,
    ObserveCount,
    Comparison(ComparisonOp),
    SignUp,
    LogIn,
    LinkWith,
    LogOut,
}

impl PatchPoint {
    pub fn name(&self) -> &'static str {
        match self {
            PatchPoint::ToPlainObject => "toPlainObject",
            PatchPoint::Enroll => "enroll",
            PatchPoint::ObserveOne => "observeOne",
            PatchPoint::ObserveCount => "observeCount",
            PatchPoint::Comparison(op) => op.method_name(),
            PatchPoint::SignUp => "signUp",
            PatchPoint::LogIn => "logIn",
            PatchPoint::LinkWith => "linkWith",
            PatchPoint::LogOut => "logOut",
        }
    }
}

impl fmt::Display for PatchPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Methods currently bound on the SDK's object, query and user types.
pub(crate) struct MethodTable {
    pub(crate) to_plain_object: Option<ToPlainObjectFn>,
    pub(crate) enroll: Option<EnrollFn>,
    pub(crate) observe_one: Option<ObserveOneFn>,
    pub(crate) observe_count: Option<ObserveCountFn>,
    pub(crate) comparisons: BTreeMap<ComparisonOp, ComparisonFn>,
    pub(crate) users: Arc<dyn UserBackend>,
}

impl MethodTable {
    pub(crate) fn new(users: Arc<dyn UserBackend>) -> Self {
        let comparisons = ComparisonOp::ALL
            .into_iter()
            .map(|op| (op, base_comparison(op)))
            .collect();
        Self {
            to_plain_object: None,
            enroll: None,
            observe_one: None,
            observe_count: None,
            comparisons,
            users,
        }
    }

    pub(crate) fn comparison(&self, op: ComparisonOp) -> ComparisonFn {
        match self.comparisons.get(&op) {
            Some(method) => Arc::clone(method),
            None => base_comparison(op),
        }
    }

    pub(crate) fn is_defined(&self, point: PatchPoint) -> bool {
        match point {
            PatchPoint::ToPlainObject => self.to_plain_object.is_some(),
            PatchPoint::Enroll => self.enroll.is_some(),
            PatchPoint::ObserveOne => self.observe_one.is_some(),
            PatchPoint::ObserveCount => self.observe_count.is_some(),
            PatchPoint::Comparison(op) => self.comparisons.contains_key(&op),
            PatchPoint::SignUp | PatchPoint::LogIn | PatchPoint::LinkWith | PatchPoint::LogOut => true,
        }
    }
}

fn base_comparison(op: ComparisonOp) -> ComparisonFn {
    Arc::new(move |query: Query, attribute: &str, value: QueryValue| {
        query.apply_comparison(op, attribute, value)
    })
}

/// Installs `make()` into an empty slot; an occupied slot is left alone.
pub(crate) fn install_if_absent<F>(slot: &mut Option<F>, point: PatchPoint, make: impl FnOnce() -> F) {
    if slot.is_some() {
        log::debug!("{point} already defined, keeping existing method");
        return;
    }
    *slot = Some(make());
    log::debug!("installed {point}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Fixture, RecordingUserBackend};

    fn table() -> MethodTable {
        let fixture = Fixture::new();
        MethodTable::new(Arc::new(RecordingUserBackend::new(fixture.log)))
    }

    #[test]
    fn new_table_has_only_base_methods() {
        let table = table();
        assert!(!table.is_defined(PatchPoint::ToPlainObject));
        assert!(!table.is_defined(PatchPoint::Enroll));
        assert!(!table.is_defined(PatchPoint::ObserveOne));
        assert!(!table.is_defined(PatchPoint::ObserveCount));
        for op in ComparisonOp::ALL {
            assert!(table.is_defined(PatchPoint::Comparison(op)));
        }
        assert!(table.is_defined(PatchPoint::LogOut));
    }

    #[test]
    fn install_if_absent_keeps_existing_slot() {
        let mut slot = Some(1);
        install_if_absent(&mut slot, PatchPoint::Enroll, || 2);
        assert_eq!(slot, Some(1));

        let mut empty = None;
        install_if_absent(&mut empty, PatchPoint::Enroll, || 2);
        assert_eq!(empty, Some(2));
    }

    #[test]
    fn patch_point_names() {
        assert_eq!(PatchPoint::ToPlainObject.to_string(), "toPlainObject");
        assert_eq!(
            PatchPoint::Comparison(ComparisonOp::NotContainedIn).to_string(),
            "notContainedIn"
        );
        assert_eq!(PatchPoint::LinkWith.name(), "linkWith");
    }
}
