//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --site, --data-dir, --verbose) are inherited by all subcommands
//! - Register edits take flags rather than prompts so they can be scripted

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::{LiftingItemUpdate, NewLiftingItem, NewPlant, PlantUpdate, StaticSafetyRecord};
use crate::domain::value_objects::{ColourCode, FormId, FormType, LiftingStatus, Role, SiteId};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// plantsafe - site plant inspection register and compliance checker
#[derive(Parser, Debug)]
#[command(name = "plantsafe")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'plantsafe init --demo' to try it with sample data.")]
pub struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Site to work on (overrides config and PLANTSAFE_SITE)
    #[arg(long, global = true)]
    pub site: Option<SiteId>,

    /// Data directory (overrides config and PLANTSAFE_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up the site: form templates, PINs and the site directory entry
    Init {
        /// Load the sample register into an empty site
        #[arg(long)]
        demo: bool,

        /// Display name for the site
        #[arg(long)]
        name: Option<String>,
    },

    /// Sign in with a role PIN
    Login {
        role: Role,

        /// Name recorded against submissions (defaults to the role name)
        #[arg(long)]
        name: Option<String>,

        /// PIN (prompted for when omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in role
    Whoami,

    /// Register totals and the compliance summary
    Dashboard,

    /// Change role PINs
    #[command(subcommand)]
    Pin(PinCommand),

    /// Manage the site directory
    #[command(subcommand)]
    Site(SiteCommand),

    /// Manage the plant register
    #[command(subcommand)]
    Plant(PlantCommand),

    /// Manage GA1 static safety records
    #[command(subcommand)]
    Ga1(Ga1Command),

    /// Manage the lifting equipment register
    #[command(subcommand)]
    Lifting(LiftingCommand),

    /// List checklist templates
    Forms {
        /// Only the forms that apply to this plant
        #[arg(long)]
        plant: Option<String>,

        /// Print the checklist items of one form
        #[arg(long)]
        show: Option<FormId>,
    },

    /// Record a completed checklist
    Submit {
        /// Plant id (e.g. PLT-003)
        #[arg(long)]
        plant: String,

        /// Form id (e.g. GA3, GA2-CRANE)
        #[arg(long)]
        form: FormId,

        /// JSON file of checklist answers ('-' for stdin)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Failed item, optionally with a note: "Brakes=spongy pedal"
        #[arg(long = "fail", value_name = "ITEM[=NOTE]")]
        failed: Vec<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List recorded submissions, newest first
    Submissions {
        #[arg(long)]
        plant: Option<String>,

        /// Only the last N days
        #[arg(long)]
        days: Option<i64>,
    },

    /// Evaluate compliance for the site
    Compliance {
        /// Post a notification for every danger issue
        #[arg(long)]
        notify: bool,
    },

    /// Show the colour tag required this quarter
    Colour,

    /// Track defects
    #[command(subcommand)]
    Defect(DefectCommand),

    /// Show the notification feed
    Notifications {
        /// Mark every notification as read
        #[arg(long)]
        mark_read: bool,
    },

    /// Push queued submissions to the outbox
    Sync,

    /// Delete every register of the current site
    Reset {
        /// Skip the confirmation check
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PinCommand {
    /// Change the PIN of the signed-in role
    Change {
        #[arg(long)]
        old: Option<String>,

        #[arg(long)]
        new: Option<String>,
    },

    /// Set another role's PIN (admin and project manager only)
    Set {
        role: Role,

        #[arg(long)]
        pin: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SiteCommand {
    /// List known sites
    List,

    /// Add a site to the directory
    Add {
        id: SiteId,

        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlantCommand {
    /// List registered plant
    List,

    /// Show one plant with its GA1 record and recent activity
    Show { id: String },

    /// Register a plant
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        location: String,

        /// Category shown on the register (e.g. Crane, Generator)
        #[arg(long = "type", default_value = "")]
        category: String,

        /// Daily pre-start family (e.g. GA2-CRANE)
        #[arg(long)]
        form_type: Option<FormType>,
    },

    /// Edit plant details
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long = "type")]
        category: Option<String>,

        #[arg(long, conflicts_with = "clear_form_type")]
        form_type: Option<FormType>,

        /// Fall back to the generic GA2 pre-start
        #[arg(long)]
        clear_form_type: bool,
    },

    /// Remove a plant from the register
    Remove { id: String },

    /// Take a plant out of service
    Oos {
        id: String,

        #[arg(long)]
        reason: String,
    },

    /// Return a plant to service
    Return { id: String },
}

#[derive(Subcommand, Debug)]
pub enum Ga1Command {
    /// List GA1 records
    List,

    /// Show the GA1 record of a plant
    Show { plant_id: String },

    /// Create or update the GA1 record of a plant
    Set {
        plant_id: String,

        #[command(flatten)]
        fields: Ga1Fields,
    },

    /// Delete the GA1 record of a plant
    Remove { plant_id: String },
}

/// GA1 fields; dates are `YYYY-MM-DD`
#[derive(Args, Debug, Default)]
pub struct Ga1Fields {
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub serial_no: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub last_inspection: Option<String>,
    #[arg(long)]
    pub next_due: Option<String>,
    #[arg(long)]
    pub inspector: Option<String>,
    #[arg(long)]
    pub insurance_expiry: Option<String>,
    #[arg(long)]
    pub cert_expiry: Option<String>,
    #[arg(long)]
    pub cert_ref: Option<String>,
    #[arg(long)]
    pub risk_assessment_ref: Option<String>,
    #[arg(long)]
    pub licence_required: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl Ga1Fields {
    pub fn into_record(self, plant_id: String, saved_by: Option<String>) -> StaticSafetyRecord {
        StaticSafetyRecord {
            make: self.make,
            model: self.model,
            serial_no: self.serial_no,
            year_of_manufacture: self.year,
            last_inspection_date: self.last_inspection,
            next_inspection_due: self.next_due,
            inspector_name: self.inspector,
            insurance_expiry: self.insurance_expiry,
            cert_expiry: self.cert_expiry,
            cert_ref: self.cert_ref,
            risk_assessment_ref: self.risk_assessment_ref,
            licence_required: self.licence_required,
            notes: self.notes,
            saved_by,
            ..StaticSafetyRecord::new(plant_id, String::new())
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum LiftingCommand {
    /// List lifting equipment
    List,

    /// Register a lifting item
    Add(LiftingAddArgs),

    /// Edit a lifting item
    Update {
        id: String,

        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        last_exam: Option<String>,
        #[arg(long)]
        next_exam: Option<String>,
        #[arg(long)]
        colour: Option<ColourCode>,
        #[arg(long)]
        status: Option<LiftingStatus>,
        #[arg(long)]
        cert_ref: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a lifting item
    Remove { id: String },
}

#[derive(Args, Debug)]
pub struct LiftingAddArgs {
    /// Category (e.g. Chain Sling, Shackle)
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
    /// Safe working load
    #[arg(long)]
    pub swl: Option<f64>,
    #[arg(long, default_value = "kg")]
    pub swl_unit: String,
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub serial_no: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub last_exam: Option<String>,
    #[arg(long)]
    pub next_exam: Option<String>,
    /// Tag colour (defaults to the current quarter's)
    #[arg(long)]
    pub colour: Option<ColourCode>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub cert_ref: Option<String>,
}

impl LiftingAddArgs {
    pub fn into_new_item(self, default_colour: ColourCode) -> NewLiftingItem {
        NewLiftingItem {
            category: self.category,
            description: self.description,
            swl: self.swl,
            swl_unit: Some(self.swl_unit),
            make: self.make,
            model: self.model,
            serial_no: self.serial_no,
            year_of_manufacture: self.year,
            last_thorough_exam: self.last_exam,
            next_thorough_exam: self.next_exam,
            colour_code: self.colour.unwrap_or(default_colour),
            location: self.location,
            cert_ref: self.cert_ref,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DefectCommand {
    /// List defects, newest first
    List {
        #[arg(long)]
        plant: Option<String>,

        /// Only unresolved defects
        #[arg(long)]
        open: bool,
    },

    /// Report a defect found outside a checklist
    Add {
        #[arg(long)]
        plant: String,

        #[arg(long)]
        description: String,
    },

    /// Mark a defect resolved
    Resolve {
        id: String,

        #[arg(long)]
        notes: Option<String>,
    },
}

/// Builds a [`NewPlant`] from `plant add` flags
pub fn new_plant(name: String, location: String, category: String, form_type: Option<FormType>) -> NewPlant {
    NewPlant {
        name,
        location,
        category,
        form_type,
    }
}

/// Builds a [`PlantUpdate`] from `plant update` flags
pub fn plant_update(
    name: Option<String>,
    location: Option<String>,
    category: Option<String>,
    form_type: Option<FormType>,
    clear_form_type: bool,
) -> PlantUpdate {
    PlantUpdate {
        name,
        location,
        category,
        form_type: if clear_form_type {
            Some(None)
        } else {
            form_type.map(Some)
        },
    }
}

#[allow(clippy::too_many_arguments)]
pub fn lifting_update(
    description: Option<String>,
    location: Option<String>,
    last_exam: Option<String>,
    next_exam: Option<String>,
    colour: Option<ColourCode>,
    status: Option<LiftingStatus>,
    cert_ref: Option<String>,
    notes: Option<String>,
) -> LiftingItemUpdate {
    LiftingItemUpdate {
        description,
        location,
        last_thorough_exam: last_exam,
        next_thorough_exam: next_exam,
        colour_code: colour,
        status,
        cert_ref,
        notes,
    }
}
