//! Interactive first-run seeding
//!
//! Creates the super-admin account and, optionally, demo catalog data so the
//! dashboards have something to show.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::auth::models::{Role, User};
use crate::auth::password::hash_password;
use crate::cli::{info, success, warn};
use crate::config;
use crate::error::Error;
use crate::store::{ContentType, NewContent, NewCourse, NewModule, NewPost, Store};

/// Run the seeding flow
pub async fn run_seed(quick: bool) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    let config = config::load_config()?;
    let store = Store::open(&config.storage.data_file).await?;

    let _ = term.clear_screen();
    print_welcome();

    if quick {
        return quick_seed(&store).await;
    }

    println!();
    println!("{}", "Let's create the super-admin account.".bold());
    println!();

    let username: String = Input::with_theme(&theme)
        .with_prompt("Username")
        .default("algoforge".to_string())
        .interact_text()?;

    let email: String = Input::with_theme(&theme)
        .with_prompt("Email")
        .validate_with(|input: &String| {
            if input.contains('@') {
                Ok(())
            } else {
                Err("A valid email is required")
            }
        })
        .interact_text()?;

    let name: String = Input::with_theme(&theme)
        .with_prompt("Display name")
        .default("AlgoForge Operator".to_string())
        .interact_text()?;

    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .validate_with(|input: &String| {
            if input.len() >= 8 {
                Ok(())
            } else {
                Err("Password must be at least 8 characters")
            }
        })
        .interact()?;

    let user = User::new(
        username.clone(),
        email,
        name,
        hash_password(&password)?,
        Role::SuperAdmin,
    );

    match store.insert_user(user).await {
        Ok(_) => success(&format!("Created super-admin '{}'", username)),
        Err(Error::Conflict { field }) => {
            warn(&format!("A user with this {} already exists, skipping", field));
        }
        Err(e) => return Err(e.into()),
    }

    println!();
    let create_demo = Confirm::with_theme(&theme)
        .with_prompt("Seed demo catalog data (one course, sample blog post)?")
        .default(true)
        .interact()?;

    if create_demo {
        seed_demo_data(&store).await?;
    }

    println!();
    success("Seeding complete");
    info("Start the server with 'algoforge serve'");

    Ok(())
}

/// Non-interactive path: demo data only, no accounts
async fn quick_seed(store: &Store) -> Result<()> {
    seed_demo_data(store).await?;
    success("Seeded demo data");
    warn("No super-admin was created; run 'algoforge seed' without --quick");
    Ok(())
}

fn print_welcome() {
    println!();
    println!("{}", "AlgoForge first-run seeding".bold().underline());
    println!();
    println!("This will prepare the document store with the initial accounts.");
}

async fn seed_demo_data(store: &Store) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(80));

    pb.set_message("Creating demo course...");
    let course = match store
        .create_course(NewCourse {
            title: "Algorithms I".to_string(),
            slug: "algorithms-1".to_string(),
            description: "Sorting, searching and complexity from first principles".to_string(),
            published: true,
        })
        .await
    {
        Ok(course) => course,
        Err(Error::Conflict { .. }) => {
            pb.finish_and_clear();
            warn("Demo data already present, skipping");
            return Ok(());
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Adding modules...");
    let sorting = store
        .create_module(NewModule {
            course_id: course.id.clone(),
            title: "Sorting".to_string(),
            description: Some("Comparison sorts and their limits".to_string()),
            position: 1,
        })
        .await?;
    let searching = store
        .create_module(NewModule {
            course_id: course.id.clone(),
            title: "Searching".to_string(),
            description: None,
            position: 2,
        })
        .await?;

    pb.set_message("Adding content...");
    store
        .create_content(NewContent {
            module_id: sorting.id.clone(),
            title: "Merge sort".to_string(),
            content_type: ContentType::Video,
            body: "https://videos.algoforge.io/merge-sort".to_string(),
            position: 1,
        })
        .await?;
    store
        .create_content(NewContent {
            module_id: sorting.id,
            title: "Sorting quiz".to_string(),
            content_type: ContentType::Quiz,
            body: "sorting-basics".to_string(),
            position: 2,
        })
        .await?;
    store
        .create_content(NewContent {
            module_id: searching.id,
            title: "Binary search".to_string(),
            content_type: ContentType::Article,
            body: "Halve the haystack until the needle is all that remains.".to_string(),
            position: 1,
        })
        .await?;

    pb.set_message("Adding blog post...");
    store
        .create_post(NewPost {
            title: "Welcome to AlgoForge".to_string(),
            slug: "welcome".to_string(),
            author: "AlgoForge Team".to_string(),
            excerpt: Some("Why we teach algorithms the hard way.".to_string()),
            body: "Our first cohort starts soon. Here is what to expect.".to_string(),
            tags: vec!["announcements".to_string()],
            published: true,
        })
        .await?;

    pb.finish_and_clear();
    success("Demo data created");

    Ok(())
}
