//! Routes and Guard
//!
//! Two-state guard: unauthenticated visitors only see the landing and login
//! pages; authenticated visitors are bounced from login into the dashboard.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Overview,
    Users,
    Projects,
    NotFound,
}

/// Outcome of running the guard on a requested route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded {
    Render(Route),
    Redirect(Route),
}

impl Guarded {
    /// The route that ends up on screen
    pub fn route(self) -> Route {
        match self {
            Guarded::Render(route) | Guarded::Redirect(route) => route,
        }
    }
}

impl Route {
    /// Sidebar entries, in display order
    pub const DASHBOARD: [Route; 3] = [Route::Overview, Route::Users, Route::Projects];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing | Route::NotFound => "/",
            Route::Login => "/login",
            Route::Overview => "/dashboard",
            Route::Users => "/dashboard/users",
            Route::Projects => "/dashboard/projects",
        }
    }

    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/login" => Route::Login,
            "/dashboard" => Route::Overview,
            "/dashboard/users" => Route::Users,
            "/dashboard/projects" => Route::Projects,
            _ => Route::NotFound,
        }
    }

    /// Routes under the dashboard shell
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Overview | Route::Users | Route::Projects)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Login => "Login",
            Route::Overview => "Dashboard",
            Route::Users => "Users",
            Route::Projects => "Projects",
            Route::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Decide what to show for `requested` given the session state
pub fn guard(requested: Route, authenticated: bool) -> Guarded {
    match requested {
        route if route.is_protected() && !authenticated => Guarded::Redirect(Route::Login),
        Route::Login if authenticated => Guarded::Redirect(Route::Overview),
        Route::NotFound => Guarded::Redirect(Route::Landing),
        route => Guarded::Render(route),
    }
}

/// Where the landing page sends the visitor once its splash delay ends
pub fn landing_target(authenticated: bool) -> Route {
    if authenticated {
        Route::Overview
    } else {
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Landing, Route::Login, Route::Overview, Route::Users, Route::Projects] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/dashboard/users/"), Route::Users);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn test_protected_routes_redirect_to_login() {
        for route in Route::DASHBOARD {
            assert_eq!(guard(route, false), Guarded::Redirect(Route::Login));
            assert_eq!(guard(route, true), Guarded::Render(route));
        }
    }

    #[test]
    fn test_login_redirects_when_authenticated() {
        assert_eq!(guard(Route::Login, false), Guarded::Render(Route::Login));
        assert_eq!(guard(Route::Login, true), Guarded::Redirect(Route::Overview));
    }

    #[test]
    fn test_landing_and_unknown_routes() {
        assert_eq!(guard(Route::Landing, false), Guarded::Render(Route::Landing));
        assert_eq!(guard(Route::Landing, true), Guarded::Render(Route::Landing));
        assert_eq!(guard(Route::NotFound, true).route(), Route::Landing);
        assert_eq!(landing_target(true), Route::Overview);
        assert_eq!(landing_target(false), Route::Login);
    }
}
