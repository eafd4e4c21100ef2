use dioxus::prelude::*;

use crate::client::{components::Loader, router::Route, store::use_session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Only signed-in customers may see the page
    Protected,
    /// Only anonymous visitors may see the page
    OnlyUnauthenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    Render,
    Redirect(Route),
}

pub fn guard_outcome(kind: GuardKind, signed_in: bool) -> GuardOutcome {
    match (kind, signed_in) {
        (GuardKind::Protected, false) => GuardOutcome::Redirect(Route::SignIn {}),
        (GuardKind::OnlyUnauthenticated, true) => GuardOutcome::Redirect(Route::Dashboard {}),
        _ => GuardOutcome::Render,
    }
}

#[component]
fn RouteGuard(kind: GuardKind, children: Element) -> Element {
    let session = use_session();

    use_effect(move || {
        if let GuardOutcome::Redirect(to) = guard_outcome(kind, session.read().is_signed_in()) {
            navigator().replace(to);
        }
    });

    let signed_in = session.read().is_signed_in();
    match guard_outcome(kind, signed_in) {
        GuardOutcome::Render => rsx! { {children} },
        GuardOutcome::Redirect(_) => rsx! { Loader {} },
    }
}

#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    rsx! {
        RouteGuard { kind: GuardKind::Protected, {children} }
    }
}

#[component]
pub fn OnlyUnauthenticatedRoute(children: Element) -> Element {
    rsx! {
        RouteGuard { kind: GuardKind::OnlyUnauthenticated, {children} }
    }
}
