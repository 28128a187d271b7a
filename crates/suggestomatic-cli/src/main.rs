use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use suggestomatic_core::document::ProfileUpdate;
use suggestomatic_infrastructure::{
    AnnouncementService, DocumentService, JsonAnnouncementRepository, JsonDocumentRepository,
};

#[derive(Parser)]
#[command(name = "suggestomatic")]
#[command(about = "Startup Suggest-O-Matic - pitch and rate startup ideas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check credentials and print the matching user id
    SignIn { username: String, password: String },
    /// List all ideas, best average first
    Feed,
    /// Add a startup idea
    AddIdea {
        /// Acting user id (from sign-in)
        #[arg(long)]
        user: String,
        title: String,
        #[arg(default_value = "")]
        description: String,
    },
    /// Rate an idea from 1 to 5 (a repeat rating overwrites your previous one)
    Rate {
        #[arg(long)]
        user: String,
        idea: String,
        score: u8,
    },
    /// Show a user's profile
    Profile {
        #[arg(long)]
        user: String,
    },
    /// Edit profile fields; omitted flags keep their current value
    EditProfile {
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        funny_title: Option<String>,
        #[arg(long)]
        super_power: Option<String>,
    },
    /// Publish the presenter announcement (announcer only)
    Announce {
        #[arg(long)]
        user: String,
        presenter: String,
        /// Defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the current presenter announcement
    Announcement,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let documents = DocumentService::new(Arc::new(JsonDocumentRepository::from_default_path()?));

    match cli.command {
        Commands::SignIn { username, password } => {
            let user_id = documents.sign_in(&username, &password)?;
            println!("Signed in as {user_id}");
        }
        Commands::Feed => {
            for entry in documents.feed() {
                println!(
                    "{:>5}  {}  — by {} ({} votes)  [{}]",
                    entry.idea.display_average(),
                    entry.idea.title,
                    entry.owner_name,
                    entry.idea.ratings.len(),
                    entry.idea.id,
                );
            }
        }
        Commands::AddIdea {
            user,
            title,
            description,
        } => {
            documents.add_idea(&user, &title, &description)?;
            println!("Idea added");
        }
        Commands::Rate { user, idea, score } => {
            documents.rate_idea(&user, &idea, score)?;
            println!("Rated {idea} with {score}");
        }
        Commands::Profile { user } => {
            let found = documents
                .user(&user)
                .ok_or_else(|| anyhow::anyhow!("unknown user '{user}'"))?;
            println!("{} (@{})", found.profile.name, found.username);
            println!("  {}", found.profile.bio);
            println!("  Funny Title: {}", found.profile.funny_title);
            println!("  Super Power: {}", found.profile.super_power);
        }
        Commands::EditProfile {
            user,
            name,
            bio,
            funny_title,
            super_power,
        } => {
            documents.update_profile(
                &user,
                ProfileUpdate {
                    name,
                    bio,
                    funny_title,
                    super_power,
                },
            )?;
            println!("Profile updated");
        }
        Commands::Announce {
            user,
            presenter,
            date,
        } => {
            let announcements = announcement_service()?;
            let date =
                date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            let published = announcements.publish(&user, &presenter, &date)?;
            println!("{} presents on {}", published.presenter, published.date);
        }
        Commands::Announcement => {
            let announcements = announcement_service()?;
            match announcements.current() {
                Some(current) => println!("{} presents on {}", current.presenter, current.date),
                None => println!("No announcement yet"),
            }
        }
    }

    Ok(())
}

fn announcement_service() -> Result<AnnouncementService> {
    Ok(AnnouncementService::new(Arc::new(
        JsonAnnouncementRepository::from_default_path()?,
    )))
}
