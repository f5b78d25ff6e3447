//! Reactive session context for the component tree.
//!
//! [`SessionProvider`] owns the one [`SessionStore`] for the page,
//! restores any persisted session before the first guarded view
//! renders, and hands the tree a copyable [`SessionContext`]. The
//! context pairs the session signal with the router's navigation
//! function, so session transitions that imply navigation (logging
//! out, guard redirects) go through one place.

use ecocycle_access::{
    AccessDecision, Credential, Principal, Role, Session, SessionStore, evaluate,
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::routes;
use crate::storage::BrowserStorage;

/// Copyable handle to the session state and the navigation effect.
///
/// The store lives in a single signal, so every consumer observes the
/// same session state at the same instant; there is no per-consumer
/// copy to fall out of sync.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    navigator: StoredValue<Box<dyn Fn(&str, NavigateOptions)>, LocalStorage>,
}

impl SessionContext {
    /// Establishes a session for a freshly authenticated principal.
    ///
    /// State only; the login view decides where to navigate because the
    /// destination depends on the principal's role.
    pub fn login(&self, principal: Principal, credential: Credential) {
        self.store.update(|store| store.login(principal, credential));
    }

    /// Clears the session and returns to the login view.
    ///
    /// The navigation replaces the current history entry, so the view
    /// the user logged out of is not one Back press away.
    pub fn logout(&self) {
        self.store.update(|store| store.logout());
        self.redirect(routes::LOGIN);
    }

    /// Navigates to `path`, pushing a history entry.
    pub fn navigate(&self, path: &str) {
        self.navigator
            .with_value(|navigate| navigate(path, NavigateOptions::default()));
    }

    /// Navigates to `path`, replacing the current history entry.
    pub fn redirect(&self, path: &str) {
        self.navigator.with_value(|navigate| {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    }

    /// Evaluates the access guard against the current session.
    ///
    /// Reads the session signal, so callers in a reactive context
    /// re-evaluate on every session change.
    #[must_use]
    pub fn decide(&self, allowed: &[Role]) -> AccessDecision {
        self.store.with(|store| evaluate(store.session(), allowed))
    }

    /// Returns a snapshot of the current session state.
    #[must_use]
    pub fn session(&self) -> Session {
        self.store.with(|store| store.session().clone())
    }

    /// Returns the authenticated principal, if present.
    #[must_use]
    pub fn principal(&self) -> Option<Principal> {
        self.store.with(|store| store.current_principal().cloned())
    }

    /// Returns the bearer credential, if present.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.store.with(|store| store.credential().cloned())
    }

    /// Returns true while startup restoration is incomplete.
    #[must_use]
    pub fn is_restoring(&self) -> bool {
        self.store.with(|store| store.is_restoring())
    }
}

/// Provides the [`SessionContext`] to its children.
///
/// Must render inside the router, since the context captures the
/// navigation function. Restoration runs synchronously here, before any
/// child renders, so a cold load settles into `Anonymous` or
/// `Authenticated` without a visible loading flash.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let mut store = SessionStore::new(BrowserStorage::new());
    store.restore();

    let navigate = use_navigate();
    let navigator: Box<dyn Fn(&str, NavigateOptions)> = Box::new(navigate);
    provide_context(SessionContext {
        store: RwSignal::new(store),
        navigator: StoredValue::new_local(navigator),
    });

    children()
}

/// Returns the session context provided by [`SessionProvider`].
///
/// Panics if called outside a `SessionProvider` subtree.
#[must_use]
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
