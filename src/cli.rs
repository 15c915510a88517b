use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::criteria::CriteriaUpdate;
use crate::error::SelectionError;

/// Lunch Decider - can't choose what to eat? Let the dice decide.
#[derive(Parser, Debug)]
#[command(name = "lunch-decider")]
#[command(about = "Pick a random lunch, filtered by diet, food type and cuisine")]
#[command(version)]
pub struct Cli {
    /// Settings file (JSON) with reveal cadence, catalog path and default filters
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (JSON) to use instead of the built-in menu
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Filter flags shared by `pick` and `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Dietary preference (vegetarian, non-vegetarian, vegan)
    #[arg(short, long)]
    pub diet: Option<String>,

    /// Food type (healthy, comfort)
    #[arg(short = 't', long)]
    pub food_type: Option<String>,

    /// Cuisine, matched case-insensitively against the catalog
    #[arg(short = 'C', long)]
    pub cuisine: Option<String>,
}

impl FilterArgs {
    pub fn is_empty(&self) -> bool {
        self.diet.is_none() && self.food_type.is_none() && self.cuisine.is_none()
    }

    /// A food type only narrows the pool together with a diet
    pub fn food_type_without_diet(&self) -> bool {
        self.food_type.is_some() && self.diet.is_none()
    }

    /// Parse the flags into a criteria update against `catalog`
    pub fn to_update(&self, catalog: &Catalog) -> Result<CriteriaUpdate, SelectionError> {
        CriteriaUpdate::parse(
            catalog,
            self.diet.as_deref(),
            self.food_type.as_deref(),
            self.cuisine.as_deref(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal UI (default)
    Tui,
    /// Pick a lunch without the UI
    Pick {
        #[command(flatten)]
        filters: FilterArgs,

        /// Seed the random generator for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the spinning reveal and print only the final pick
        #[arg(long)]
        instant: bool,

        /// Print the pick as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the options that match the filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the cuisines in the catalog
    Cuisines {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a settings file
    Validate {
        /// Path to settings file to validate
        config: PathBuf,
    },
    /// Write the active catalog as JSON (a template for custom catalogs)
    ExportCatalog {
        /// Destination file
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
