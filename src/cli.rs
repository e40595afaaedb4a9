use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "accesschain", version, about = "AccessChain accessibility directory CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (catalog.json file or a directory containing .accesschain/catalog.json)"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Search {
        query: Option<String>,
        #[arg(long, value_enum)]
        category: Option<PlaceCategory>,
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
    },
    Show {
        place: String,
    },
    Review {
        #[arg(long, help = "Id of an existing catalog place to review")]
        place: Option<u64>,
        #[arg(long, default_value_t = false, help = "Review a place not yet in the catalog")]
        new_place: bool,
        #[arg(long, help = "New place name")]
        name: Option<String>,
        #[arg(long, value_enum, help = "New place type")]
        place_type: Option<PlaceCategory>,
        #[arg(long, help = "New place address")]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long, default_value_t = 0, help = "Overall rating, 1-5 stars")]
        rating: u8,
        #[arg(long, default_value = "", help = "Review text")]
        text: String,
        #[arg(long, default_value_t = 0, help = "Mobility access rating, 0-5 (0 = not rated)")]
        mobility: u8,
        #[arg(long, default_value_t = 0, help = "Vision support rating, 0-5 (0 = not rated)")]
        vision: u8,
        #[arg(long, default_value_t = 0, help = "Hearing support rating, 0-5 (0 = not rated)")]
        hearing: u8,
        #[arg(long, default_value_t = 0, help = "Cognitive support rating, 0-5 (0 = not rated)")]
        cognitive: u8,
        #[arg(long = "feature", help = "Accessibility feature present at the place (repeatable)")]
        features: Vec<String>,
        #[arg(long, value_enum)]
        recommend: Option<Recommend>,
        #[arg(long, help = "Visit date, e.g. 2026-08-30")]
        visit_date: Option<String>,
    },
    Reviews {
        #[arg(long, help = "Only reviews for this catalog place id")]
        place: Option<u64>,
    },
    Categories,
    Features,
    Validate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceCategory {
    Restaurant,
    Library,
    ShoppingCenter,
    Recreation,
    Healthcare,
    GroceryStore,
    Government,
    Transportation,
    Other,
}

impl PlaceCategory {
    pub fn all() -> &'static [PlaceCategory] {
        &[
            PlaceCategory::Restaurant,
            PlaceCategory::Library,
            PlaceCategory::ShoppingCenter,
            PlaceCategory::Recreation,
            PlaceCategory::Healthcare,
            PlaceCategory::GroceryStore,
            PlaceCategory::Government,
            PlaceCategory::Transportation,
            PlaceCategory::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "Restaurant",
            PlaceCategory::Library => "Library",
            PlaceCategory::ShoppingCenter => "Shopping Center",
            PlaceCategory::Recreation => "Recreation",
            PlaceCategory::Healthcare => "Healthcare",
            PlaceCategory::GroceryStore => "Grocery Store",
            PlaceCategory::Government => "Government",
            PlaceCategory::Transportation => "Transportation",
            PlaceCategory::Other => "Other",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Rating,
    Accessibility,
    Distance,
    Reviews,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Recommend {
    Yes,
    Maybe,
    No,
}
