use super::*;

const PROTECTED_PATHS: [&str; 7] = [
    "/dashboard",
    "/wallet/fund",
    "/wallet/transfer",
    "/wallet/withdraw",
    "/settings",
    "/",
    "/no/such/page",
];

// =============================================================
// classify
// =============================================================

#[test]
fn login_and_register_are_auth_only() {
    assert_eq!(classify("/login"), RouteAccess::AuthOnly);
    assert_eq!(classify("/register"), RouteAccess::AuthOnly);
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert_eq!(classify("/login/"), RouteAccess::AuthOnly);
    assert_eq!(classify("/register?next=%2Fdashboard"), RouteAccess::AuthOnly);
    assert_eq!(classify("/dashboard/#top"), RouteAccess::Protected);
}

#[test]
fn everything_else_is_protected() {
    for path in PROTECTED_PATHS {
        assert_eq!(classify(path), RouteAccess::Protected, "path {path}");
    }
    assert_eq!(classify("/login-help"), RouteAccess::Protected);
}

// =============================================================
// decide
// =============================================================

#[test]
fn unknown_session_never_renders_protected_content() {
    for path in PROTECTED_PATHS {
        assert_eq!(decide_for_path(path, SessionValidity::Unknown), GateDecision::Pending, "path {path}");
    }
}

#[test]
fn unknown_session_holds_auth_only_pages_too() {
    assert_eq!(decide_for_path("/login", SessionValidity::Unknown), GateDecision::Pending);
}

#[test]
fn invalid_session_redirects_protected_paths_to_login() {
    for path in PROTECTED_PATHS {
        let decision = decide_for_path(path, SessionValidity::Invalid);
        assert_eq!(decision, GateDecision::RedirectToLogin, "path {path}");
        assert_eq!(decision.redirect_target(), Some("/login"));
    }
}

#[test]
fn invalid_session_renders_login_and_register() {
    assert_eq!(decide_for_path("/login", SessionValidity::Invalid), GateDecision::Render);
    assert_eq!(decide_for_path("/register", SessionValidity::Invalid), GateDecision::Render);
}

#[test]
fn valid_session_redirects_login_to_dashboard() {
    let decision = decide_for_path("/login", SessionValidity::Valid);
    assert_eq!(decision, GateDecision::RedirectToDashboard);
    assert_eq!(decision.redirect_target(), Some("/dashboard"));
    assert_eq!(decide_for_path("/register", SessionValidity::Valid), GateDecision::RedirectToDashboard);
}

#[test]
fn valid_session_renders_protected_paths() {
    for path in PROTECTED_PATHS {
        assert_eq!(decide_for_path(path, SessionValidity::Valid), GateDecision::Render, "path {path}");
    }
}

#[test]
fn render_and_pending_do_not_redirect() {
    assert_eq!(GateDecision::Render.redirect_target(), None);
    assert_eq!(GateDecision::Pending.redirect_target(), None);
}
