use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliofile::catalogue::Catalogue;
use bibliofile::{Book, BookManager, Config, NewBook};

#[derive(Parser)]
#[command(name = "bibliofile")]
#[command(author, version, about = "Browse a book catalogue over its REST backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalogue
    List {
        /// Show only books matching this text (title, author or genre)
        #[arg(short, long, default_value = "")]
        filter: String,
    },

    /// Add a book to the catalogue
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        genre: Option<String>,
    },

    /// Remove a book by id
    Remove { id: i32 },

    /// Interactive session: filter the catalogue and build a reading list
    Browse,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibliofile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let cli = Cli::parse();

    let mut manager = match BookManager::new(&config) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    // One fetch per mount; nothing below re-triggers it implicitly.
    manager.refresh().await;
    report_error(&manager);

    match cli.command {
        Commands::List { filter } => {
            print_books(&bibliofile::catalogue::visible_books(
                manager.books(),
                &filter,
            ));
        }
        Commands::Add {
            title,
            author,
            genre,
        } => {
            let added = manager
                .add(NewBook {
                    title,
                    author,
                    genre,
                })
                .await
                .cloned();
            report_error(&manager);
            if let Some(book) = added {
                println!("added #{}: {} by {}", book.id, book.title, book.author);
            }
        }
        Commands::Remove { id } => {
            let dropped = manager.remove(id).await;
            report_error(&manager);
            if manager.last_error().is_none() {
                if dropped {
                    println!("removed #{}", id);
                } else {
                    println!("no book with id {} in the catalogue", id);
                }
            }
        }
        Commands::Browse => browse(&mut manager).await,
    }
}

/// Line-driven browse loop over one manager and one catalogue session.
/// The reading list lives only as long as the loop.
async fn browse(manager: &mut BookManager) {
    let mut catalogue = Catalogue::new();
    let stdin = std::io::stdin();

    println!("commands: filter <text> | select <id> | list | reading | refresh | quit");
    print_books(&catalogue.visible(manager.books()));

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "filter" => {
                catalogue.set_filter(arg);
                print_books(&catalogue.visible(manager.books()));
            }
            "select" => match arg.parse::<i32>() {
                Ok(id) => {
                    catalogue.select(manager.books(), id);
                    print_books(&catalogue.reading_list().iter().collect::<Vec<_>>());
                }
                Err(_) => println!("usage: select <id>"),
            },
            "list" => print_books(&catalogue.visible(manager.books())),
            "reading" => print_books(&catalogue.reading_list().iter().collect::<Vec<_>>()),
            "refresh" => {
                manager.refresh().await;
                report_error(manager);
                print_books(&catalogue.visible(manager.books()));
            }
            "quit" | "q" => break,
            "" => {}
            other => println!("unknown command: {}", other),
        }
    }
}

fn print_books(books: &[&Book]) {
    if books.is_empty() {
        println!("  (no books)");
        return;
    }
    for book in books {
        match &book.genre {
            Some(genre) => println!(
                "  #{:<4} {} by {} [{}]",
                book.id, book.title, book.author, genre
            ),
            None => println!("  #{:<4} {} by {}", book.id, book.title, book.author),
        }
    }
}

/// A failed call leaves its message in the error slot; show it without
/// discarding whatever collection is still displayed.
fn report_error(manager: &BookManager) {
    if let Some(error) = manager.last_error() {
        eprintln!("error: {}", error);
    }
}
