//! Page handlers

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::auth::Claims;
use crate::api::server::SharedState;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - AlgoForge</title>
    <link rel="stylesheet" href="/assets/site.css">
</head>
<body>
    <main class="container">
{}
    </main>
</body>
</html>"#,
        title, body
    ))
}

/// Public landing page
pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let courses = state.store.list_courses(true).await;

    let course_list: String = courses
        .iter()
        .map(|c| {
            format!(
                r#"        <li><a href="/api/courses/{}">{}</a> - {}</li>"#,
                c.slug, c.title, c.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    page(
        "Home",
        &format!(
            r#"        <h1>AlgoForge</h1>
        <p>Learn algorithms the way they are actually used.</p>
        <h2>Courses</h2>
        <ul>
{}
        </ul>
        <p><a href="/login">Sign in</a></p>"#,
            course_list
        ),
    )
}

/// Login page; role-gate redirects land here
pub async fn login_page() -> Html<String> {
    page(
        "Sign in",
        r#"        <h1>Sign in</h1>
        <form method="post" action="/api/auth" id="login-form">
            <label>Username or email <input name="username" required></label>
            <label>Password <input name="password" type="password" required></label>
            <label>Role
                <select name="role">
                    <option value="student">Student</option>
                    <option value="admin">Admin</option>
                    <option value="super-admin">Super admin</option>
                </select>
            </label>
            <button type="submit">Sign in</button>
        </form>"#,
    )
}

/// Admin dashboard shell
pub async fn admin_dashboard(Extension(claims): Extension<Claims>) -> Html<String> {
    page(
        "Admin",
        &format!(
            r#"        <h1>Admin dashboard</h1>
        <p>Signed in as {} ({})</p>
        <ul>
            <li><a href="/api/admin/leads">Leads</a></li>
            <li><a href="/api/admin/careers">Career applications</a></li>
            <li><a href="/api/admin/courses">Courses</a></li>
            <li><a href="/api/admin/blog">Blog posts</a></li>
            <li><a href="/api/admin/users">Users</a></li>
        </ul>"#,
            claims.name, claims.role
        ),
    )
}

/// Super-admin dashboard shell
pub async fn super_admin_dashboard(Extension(claims): Extension<Claims>) -> Html<String> {
    page(
        "Super admin",
        &format!(
            r#"        <h1>Super-admin dashboard</h1>
        <p>Signed in as {}</p>
        <ul>
            <li><a href="/analytics/overview">Analytics</a></li>
            <li><a href="/api/admin/users">User management</a></li>
        </ul>"#,
            claims.name
        ),
    )
}

/// Student area shell
pub async fn student_dashboard(Extension(claims): Extension<Claims>) -> Html<String> {
    page(
        "My courses",
        &format!(
            r#"        <h1>Welcome back, {}</h1>
        <p><a href="/api/courses">Browse courses</a></p>"#,
            claims.name
        ),
    )
}

/// The response every route serves while maintenance mode is active
pub fn maintenance_response(path: &str, since: Option<String>) -> Response {
    if path.starts_with("/api/") {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "success": false,
                "message": "AlgoForge is temporarily unavailable for maintenance",
            })),
        )
            .into_response();
    }

    let since_line = since
        .map(|s| format!("        <p>Down since {}</p>", s))
        .unwrap_or_default();

    (
        StatusCode::SERVICE_UNAVAILABLE,
        page(
            "Maintenance",
            &format!(
                r#"        <h1>We&rsquo;ll be right back</h1>
        <p>AlgoForge is temporarily unavailable while we perform maintenance.</p>
{}"#,
                since_line
            ),
        ),
    )
        .into_response()
}
