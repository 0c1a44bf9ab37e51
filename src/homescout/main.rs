use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use homescout::api::{CmdMessage, HomescoutApi, ListingView, MessageLevel};
use homescout::error::{Result, ScoutError};
use homescout::format::{
    bed_bath_text, format_address, format_price, format_short_address, format_sqft, listed_ago,
};
use homescout::gateway::demo::DemoGateway;
use homescout::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FiltersAction};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: HomescoutApi<DemoGateway, FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse {
            query,
            price_min,
            price_max,
            property_type,
            beds,
            baths,
            sqft_min,
            location,
            sort,
        }) => {
            let overrides = collect_overrides([
                ("price-min", price_min),
                ("price-max", price_max),
                ("type", property_type),
                ("beds", beds),
                ("baths", baths),
                ("sqft-min", sqft_min),
                ("location", location),
                ("sort", sort),
            ]);
            handle_browse(&mut ctx, query, overrides)
        }
        Some(Commands::Search { term }) => handle_browse(&mut ctx, Some(term), Vec::new()),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Fav { id }) => handle_fav(&mut ctx, id),
        Some(Commands::Favs) => handle_favs(&ctx),
        Some(Commands::Filters { action }) => handle_filters(&mut ctx, action),
        None => handle_browse(&mut ctx, None, Vec::new()),
    }
}

fn collect_overrides(pairs: [(&str, Option<String>); 8]) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "homescout", "homescout")
                .ok_or_else(|| ScoutError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    // Both services persist under the same root; each owns its own handle.
    let favorites_store = FileStore::new(data_dir.clone());
    let filters_store = FileStore::new(data_dir);
    let api = HomescoutApi::new(DemoGateway::new(), favorites_store, filters_store)?;

    Ok(AppContext { api })
}

fn handle_browse(
    ctx: &mut AppContext,
    query: Option<String>,
    overrides: Vec<(String, String)>,
) -> Result<()> {
    // Flag overrides write through the saved filter state before browsing.
    if !overrides.is_empty() {
        ctx.api.set_filters(&overrides)?;
    }
    let result = ctx.api.browse(query.as_deref())?;
    print_listings(&result.listings);
    if let Some(config) = &result.config {
        if config.has_active() {
            println!(
                "{}",
                format!(
                    "{} filter(s) active: {}",
                    config.active_count(),
                    config.active_description().join("; ")
                )
                .dimmed()
            );
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.view(id)?;
    for view in &result.listings {
        print_full_listing(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.toggle_favorite(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favs(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    if !result.listings.is_empty() {
        print_listings(&result.listings);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_filters(ctx: &mut AppContext, action: Option<FiltersAction>) -> Result<()> {
    let result = match action {
        None | Some(FiltersAction::Show) => ctx.api.show_filters()?,
        Some(FiltersAction::Set { assignments }) => {
            let pairs = parse_assignments(&assignments)?;
            ctx.api.set_filters(&pairs)?
        }
        Some(FiltersAction::Reset) => ctx.api.reset_filters()?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn parse_assignments(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|s| {
            s.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    ScoutError::Api(format!("Expected key=value, got \"{}\"", s))
                })
        })
        .collect()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 110;
const PRICE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 15;
const FAV_MARKER: &str = "♥";

fn print_listings(views: &[ListingView]) {
    if views.is_empty() {
        println!("No listings found.");
        return;
    }

    for view in views {
        let listing = &view.listing;

        let left_prefix = if view.favorite {
            format!("  {} ", FAV_MARKER)
        } else {
            "    ".to_string()
        };
        let id_str = format!("{}. ", listing.id);

        let price = format!("{:>width$}", format_price(listing.price), width = PRICE_WIDTH);
        let summary = format!(
            "{} · {}",
            bed_bath_text(listing.bedrooms, listing.bathrooms),
            format_short_address(listing)
        );
        let time_ago = format!("{:>width$}", listed_ago(listing.listing_date), width = TIME_WIDTH);

        let fixed_width =
            left_prefix.width() + id_str.width() + PRICE_WIDTH + summary.width() + TIME_WIDTH + 4;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&listing.title, available);
        let padding = available.saturating_sub(title_display.width());

        let marker_colored = if view.favorite {
            left_prefix.red()
        } else {
            left_prefix.normal()
        };

        println!(
            "{}{}{}{}{}  {}  {}",
            marker_colored,
            id_str,
            title_display,
            " ".repeat(padding),
            price.bold(),
            summary,
            time_ago.dimmed()
        );
    }
}

fn print_full_listing(view: &ListingView) {
    let listing = &view.listing;

    let marker = if view.favorite {
        format!(" {}", FAV_MARKER.red())
    } else {
        String::new()
    };
    println!("{}{}", listing.title.bold(), marker);
    println!("--------------------------------");
    println!("{}", format_address(listing));
    println!(
        "{}  {}  {}",
        format_price(listing.price).bold(),
        bed_bath_text(listing.bedrooms, listing.bathrooms),
        format_sqft(listing.sqft)
    );
    println!("Type: {}", listing.property_type.label());
    if let Some(year) = listing.year_built {
        println!("Built: {}", year);
    }
    if let Some(lot) = listing.lot_size {
        println!("Lot: {} sqft", homescout::format::format_number(lot));
    }
    println!("Status: {}", listing.status);
    let ago = listed_ago(listing.listing_date);
    if !ago.is_empty() {
        println!("Listed: {}", ago.dimmed());
    }
    if let Some(description) = &listing.description {
        println!("\n{}", description);
    }
    if !listing.amenities.is_empty() {
        println!("\nAmenities: {}", listing.amenities.join(", "));
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
