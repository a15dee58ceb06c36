//! Static pages and scripts.
//!
//! Only the paths in [`STATIC_ROUTES`] are served; anything else falls
//! through to the router's default 404.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

/// Route path → file name under the static directory.
pub const STATIC_ROUTES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/chat.html", "chat.html"),
    ("/logs.html", "logs.html"),
    ("/security.js", "security.js"),
];

/// Mounts every entry of [`STATIC_ROUTES`] onto `router`.
pub fn mount<S>(router: Router<S>, static_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    STATIC_ROUTES.iter().fold(router, |router, (route, file)| {
        router.route_service(route, ServeFile::new(static_dir.join(file)))
    })
}
