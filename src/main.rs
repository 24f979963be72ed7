use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use estate_showcase::config::Config;
use estate_showcase::dashboard::summarize;
use estate_showcase::format::{format_carpet_area, format_price_range, format_unit_configuration};
use estate_showcase::logging::init_tracing;
use estate_showcase::models::{GroupMember, InquirySource, InquiryStatus, Property};
use estate_showcase::search::{
    by_category, filter_inquiries, filter_properties, paginate, price_range_options,
    rank_trending, search_members, search_or_all, sort_by_price, FilterState, InquiryFilter,
    PriceOrder, ARTICLES_PAGE_SIZE, GROUP_PAGE_SIZE, SEARCH_PAGE_SIZE, TRENDING_LIMIT,
};
use estate_showcase::showcase::{
    featured_articles, featured_properties, hero_banner, FEATURED_ARTICLES_LIMIT,
};
use estate_showcase::sources::{
    ensure_default_categories, load_or_empty, set_inquiry_status, shared_catalog, Catalog,
};

#[derive(Debug, Parser)]
#[command(name = "estate-showcase", version, about = "Search and rank a property catalog")]
struct Cli {
    /// Also write the command's result to this file as pretty JSON
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Faceted property search
    Search {
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long = "type", default_value = "")]
        property_type: String,
        /// Price range label as shown in the dropdown, or its raw token
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        sort: Option<SortArg>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Top trending properties
    Trending {
        #[arg(long, default_value_t = TRENDING_LIMIT)]
        limit: usize,
    },
    /// Landing page: hero banner and featured strips
    Home,
    /// Properties of one category
    Category {
        name: String,
        #[arg(long)]
        sort: Option<SortArg>,
    },
    /// Blog index
    Articles {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Group pages and their members
    Groups {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Admin inquiry list
    Inquiries {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, value_parser = parse_status)]
        status: Option<InquiryStatus>,
        #[arg(long, value_parser = parse_source)]
        source: Option<InquirySource>,
    },
    /// Move an inquiry to a new status
    MarkInquiry {
        id: String,
        #[arg(value_parser = parse_status)]
        status: InquiryStatus,
    },
    /// Dashboard numbers
    Stats,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for PriceOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => PriceOrder::Ascending,
            SortArg::Desc => PriceOrder::Descending,
        }
    }
}

fn parse_status(raw: &str) -> Result<InquiryStatus, String> {
    serde_json::from_value(json!(raw.to_lowercase()))
        .map_err(|_| format!("unknown status '{raw}'"))
}

fn parse_source(raw: &str) -> Result<InquirySource, String> {
    serde_json::from_value(json!(raw.to_lowercase()))
        .map_err(|_| format!("unknown source '{raw}'"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    info!("🏠 Estate Showcase");

    let catalog = shared_catalog()
        .get_or_try_init(|| Catalog::connect(&config))
        .await
        .context("Failed to open catalog")?;

    let result = run(&catalog, cli.command).await?;

    if let Some(path) = &cli.output {
        write_output(path, &result).await?;
    }

    shared_catalog().teardown().await;
    Ok(())
}

async fn run(catalog: &Catalog, command: Command) -> anyhow::Result<serde_json::Value> {
    let value = match command {
        Command::Search {
            location,
            property_type,
            price,
            status,
            tags,
            sort,
            page,
        } => {
            let properties = load_or_empty(catalog.properties.as_ref()).await;

            // Accept either the dropdown label or the token behind it.
            let token = price_range_options(&properties)
                .into_iter()
                .find(|option| option.label == price)
                .map(|option| option.token)
                .unwrap_or(price);

            let mut state = FilterState::default()
                .with_location(location)
                .with_property_type(property_type)
                .with_price_token(token)
                .with_status(status);
            for tag in tags {
                state = state.with_tag(tag);
            }

            let matched = filter_properties(&properties, &state);
            let ordered = sort_by_price(matched, sort.map(PriceOrder::from).unwrap_or_default());
            let page = paginate(&ordered, page, SEARCH_PAGE_SIZE);

            info!(
                "Found {} properties, showing page {} of {}",
                page.total_items, page.page, page.total_pages
            );
            print_properties(page.items);
            serde_json::to_value(&page)?
        }
        Command::Trending { limit } => {
            let properties = load_or_empty(catalog.properties.as_ref()).await;
            let trending = rank_trending(&properties, limit);
            info!("📈 {} trending properties", trending.len());
            print_properties(&trending);
            serde_json::to_value(&trending)?
        }
        Command::Home => {
            let properties = load_or_empty(catalog.properties.as_ref()).await;
            let articles = load_or_empty(catalog.articles.as_ref()).await;

            let hero = hero_banner(&properties);
            let featured = featured_properties(&properties);
            let stories = featured_articles(&articles, FEATURED_ARTICLES_LIMIT);

            println!("{}", hero.title);
            println!("   {}", hero.tagline);
            for chip in &hero.info_chips {
                println!("   • {}", chip.text);
            }
            println!();
            println!("Featured projects:");
            print_properties(&featured);
            println!("Featured articles:");
            for (i, article) in stories.iter().enumerate() {
                println!("{}. {} ({})", i + 1, article.title, article.date);
            }

            json!({
                "hero": hero,
                "featuredProperties": featured,
                "featuredArticles": stories,
                "trending": rank_trending(&properties, TRENDING_LIMIT),
            })
        }
        Command::Category { name, sort } => {
            let properties = load_or_empty(catalog.properties.as_ref()).await;
            let matched = by_category(&properties, &name);
            let ordered = sort_by_price(matched, sort.map(PriceOrder::from).unwrap_or_default());
            info!("{} {} properties", ordered.len(), name.trim());
            print_properties(&ordered);
            serde_json::to_value(&ordered)?
        }
        Command::Articles { query, page } => {
            let articles = load_or_empty(catalog.articles.as_ref()).await;
            let matched = search_or_all(&articles, &query);
            let page = paginate(&matched, page, ARTICLES_PAGE_SIZE);

            info!(
                "Found {} articles, showing page {} of {}",
                page.total_items, page.page, page.total_pages
            );
            for (i, article) in page.items.iter().enumerate() {
                println!("{}. {}", i + 1, article.title);
                println!("   {} · {} · {}", article.author, article.date, article.read_time);
            }
            serde_json::to_value(&page)?
        }
        Command::Groups { query } => {
            let properties = load_or_empty(catalog.properties.as_ref()).await;
            let groups = load_or_empty(catalog.groups.as_ref()).await;

            let mut report = Vec::with_capacity(groups.len());
            for group in &groups {
                let members = resolve_members(&group.properties, &properties);
                let matched = search_members(members, &query);
                let page = paginate(&matched, 1, GROUP_PAGE_SIZE);

                println!(
                    "{} ({} of {} properties)",
                    group.name,
                    page.total_items,
                    group.properties.len()
                );
                print_properties(page.items);
                report.push(json!({ "group": group.name, "id": group.id, "page": page }));
            }
            serde_json::to_value(report)?
        }
        Command::Inquiries {
            query,
            status,
            source,
        } => {
            let inquiries = load_or_empty(catalog.inquiries.as_ref()).await;
            let filter = InquiryFilter {
                query,
                status,
                source,
            };
            let matched = filter_inquiries(&inquiries, &filter);
            info!("{} matching inquiries", matched.len());
            for (i, inquiry) in matched.iter().enumerate() {
                println!(
                    "{}. {} <{}> {}",
                    i + 1,
                    inquiry.full_name,
                    inquiry.email,
                    inquiry.phone
                );
                println!("   {:?} · {}", inquiry.status, inquiry.property_name);
            }
            serde_json::to_value(&matched)?
        }
        Command::MarkInquiry { id, status } => {
            let updated = set_inquiry_status(catalog.inquiries.as_ref(), &id, status)
                .await
                .with_context(|| format!("Failed to update inquiry {id}"))?;
            println!("{} is now {:?}", updated.full_name, updated.status);
            serde_json::to_value(&updated)?
        }
        Command::Stats => {
            let properties = load_or_empty(catalog.properties.as_ref()).await;
            let categories = ensure_default_categories(catalog.categories.as_ref())
                .await
                .context("Failed to load categories")?;
            let summary = summarize(&properties);

            println!("Total properties: {}", summary.total_properties);
            println!("Featured: {}", summary.featured_properties);
            println!("Most common type: {}", summary.most_common_type);
            println!(
                "Categories: {}",
                categories
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("Recently added:");
            for (i, recent) in summary.recent.iter().enumerate() {
                println!("{}. {} ({})", i + 1, recent.name, recent.price);
            }
            json!({ "summary": summary, "categories": categories })
        }
    };
    Ok(value)
}

/// Populated members as they are, references looked up in the property list.
fn resolve_members<'a>(members: &'a [GroupMember], all: &'a [Property]) -> Vec<&'a Property> {
    members
        .iter()
        .filter_map(|member| match member {
            GroupMember::Populated(property) => Some(property.as_ref()),
            GroupMember::Reference(id) => all.iter().find(|p| p.id.as_deref() == Some(id)),
        })
        .collect()
}

fn print_properties(properties: &[&Property]) {
    for (i, property) in properties.iter().enumerate() {
        let mut price = format_price_range(property.price_range.as_ref());
        if price.is_empty() {
            price = "Price on request".to_string();
        }
        println!("{}. {} ({})", i + 1, property.name, price);
        println!("   {} · {}", property.property_type, property.location);
        println!(
            "   {} · {}",
            format_unit_configuration(&property.key_highlights.unit_configuration),
            format_carpet_area(property.key_highlights.carpet_area.as_ref())
        );
        if let Some(score) = property.trending_score {
            println!("   Trending: #{}", score);
        }
        if let Some(id) = &property.id {
            println!("   ID: {}", id);
        }
        println!();
    }
}

async fn write_output(path: &Path, value: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("💾 Saved result to {}", path.display());
    Ok(())
}
