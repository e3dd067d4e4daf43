use clap::{Args, Parser, Subcommand};
use papershelf::filter::{FilterSelection, Selection};
use papershelf::model::Facet;
use papershelf::view::ViewMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "papershelf", bin_name = "papershelf", version)]
#[command(
    about = "Browse a catalog of origami and kirigami engineering papers",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load (overrides config)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Result view: card or table (overrides config)
    #[arg(long, global = true, value_name = "MODE", help_heading = "Options")]
    pub view: Option<ViewMode>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the papers matching the filters
    #[command(alias = "ls", display_order = 1)]
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the values each filter offers
    #[command(display_order = 2)]
    Facets {
        /// Only this facet (origami, material, manufacturing, input, output, function)
        facet: Option<Facet>,
    },

    /// Open a paper's DOI link in the browser
    #[command(alias = "o", display_order = 3)]
    Open {
        /// Position of the paper in the filtered view (e.g. 3 or #3)
        index: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the link instead of launching the browser
        #[arg(long)]
        print: bool,
    },

    /// Write the filtered view as a static HTML page
    #[command(display_order = 4)]
    Export {
        /// Output file
        #[arg(short, long, value_name = "PATH")]
        out: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Browse interactively, one command per line
    #[command(alias = "sh", display_order = 5)]
    Shell,

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Key (catalog, view, default-image)
        key: Option<String>,
        /// Value to store
        value: Option<String>,
    },
}

/// One optional value per facet. Omitted facets, and the value "all", impose
/// no constraint.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Origami or Kirigami
    #[arg(long, value_name = "VALUE", help_heading = "Filters")]
    pub origami: Option<String>,

    #[arg(long, value_name = "VALUE", help_heading = "Filters")]
    pub material: Option<String>,

    #[arg(long, value_name = "VALUE", help_heading = "Filters")]
    pub manufacturing: Option<String>,

    /// Actuation input (e.g. Heat)
    #[arg(long, value_name = "VALUE", help_heading = "Filters")]
    pub input: Option<String>,

    #[arg(long, value_name = "VALUE", help_heading = "Filters")]
    pub output: Option<String>,

    #[arg(long, value_name = "VALUE", help_heading = "Filters")]
    pub function: Option<String>,
}

impl FilterArgs {
    pub fn value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::OrigamiOrKirigami => self.origami.as_deref(),
            Facet::Material => self.material.as_deref(),
            Facet::Manufacturing => self.manufacturing.as_deref(),
            Facet::Input => self.input.as_deref(),
            Facet::Output => self.output.as_deref(),
            Facet::Function => self.function.as_deref(),
        }
    }

    pub fn selection(&self) -> FilterSelection {
        Facet::ALL
            .iter()
            .fold(FilterSelection::new(), |selection, &facet| {
                match self.value(facet) {
                    Some(value) => selection.with(facet, Selection::parse(value)),
                    None => selection,
                }
            })
    }
}
