//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::auth::models::{Role, User};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print a table of user accounts
pub fn print_user_table(users: &[User]) {
    if users.is_empty() {
        info("No users found. Run 'algoforge seed' to create the first account");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Username").fg(Color::Cyan),
            Cell::new("Email").fg(Color::Cyan),
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Active").fg(Color::Cyan),
            Cell::new("Last login").fg(Color::Cyan),
        ]);

    for user in users {
        let role_color = match user.role {
            Role::SuperAdmin => Color::Red,
            Role::Admin => Color::Yellow,
            Role::Student => Color::Green,
        };

        table.add_row(vec![
            Cell::new(&user.username),
            Cell::new(&user.email),
            Cell::new(user.role.to_string()).fg(role_color),
            Cell::new(if user.is_active { "yes" } else { "no" }),
            Cell::new(
                user.last_login
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }

    println!("{table}");
}
