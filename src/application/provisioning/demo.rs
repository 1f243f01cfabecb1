//! Demonstration register for a fresh site

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{LiftingItem, NewLiftingItem, NewPlant, Plant, StaticSafetyRecord};
use crate::domain::services::current_quarter_colour;
use crate::domain::value_objects::{ColourCode, FormType};

/// Plants, GA1 records and lifting gear dated relative to `now`
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFixture {
    pub plants: Vec<Plant>,
    pub static_records: Vec<StaticSafetyRecord>,
    pub lifting_items: Vec<LiftingItem>,
}

fn date_from(now: DateTime<Utc>, days: i64) -> Option<String> {
    Some((now + Duration::days(days)).format("%Y-%m-%d").to_string())
}

fn plant(id: &str, name: &str, location: &str, category: &str, form_type: FormType) -> Plant {
    Plant::register(
        id.to_string(),
        NewPlant {
            name: name.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            form_type: Some(form_type),
        },
    )
}

struct Gear<'a> {
    id: &'a str,
    category: &'a str,
    description: &'a str,
    make: &'a str,
    swl: f64,
    next_exam_in: i64,
    colour: ColourCode,
    notes: Option<&'a str>,
}

fn lifting(now: DateTime<Utc>, gear: Gear<'_>) -> LiftingItem {
    let mut item = LiftingItem::register(
        gear.id.to_string(),
        NewLiftingItem {
            category: gear.category.to_string(),
            description: gear.description.to_string(),
            swl: Some(gear.swl),
            swl_unit: Some("kg".to_string()),
            make: Some(gear.make.to_string()),
            model: None,
            serial_no: None,
            year_of_manufacture: None,
            last_thorough_exam: date_from(now, gear.next_exam_in - 182),
            next_thorough_exam: date_from(now, gear.next_exam_in),
            colour_code: gear.colour,
            location: None,
            cert_ref: None,
        },
        now,
    );
    item.notes = gear.notes.map(str::to_string);
    item
}

pub fn demo_fixture(now: DateTime<Utc>) -> DemoFixture {
    let plants = vec![
        plant("PLT-001", "Diesel Generator A", "Building 1 - Basement", "Generator", FormType::Generator),
        plant("PLT-002", "Air Compressor Unit", "Workshop Bay 2", "Compressor", FormType::Compressor),
        plant("PLT-003", "Overhead Crane #1", "Main Hall", "Crane", FormType::Crane),
        plant("PLT-004", "Telehandler TH-07", "Yard", "Telehandler", FormType::Telehandler),
        plant("PLT-005", "Excavator EX-05", "South Compound", "Excavator", FormType::Excavator),
        plant("PLT-006", "Scissor Lift SL-02", "Yard", "MEWP", FormType::Mewp),
    ];

    let static_records = vec![
        StaticSafetyRecord {
            make: Some("Caterpillar".to_string()),
            model: Some("C3.3B".to_string()),
            last_inspection_date: date_from(now, -76),
            next_inspection_due: date_from(now, 14),
            inspector_name: Some("J. Harris".to_string()),
            cert_expiry: date_from(now, 90),
            insurance_expiry: date_from(now, 120),
            cert_ref: Some("CERT-GEN-001".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
            ..StaticSafetyRecord::new("PLT-001", "Diesel Generator A")
        },
        StaticSafetyRecord {
            make: Some("Atlas Copco".to_string()),
            model: Some("GA11".to_string()),
            last_inspection_date: date_from(now, -92),
            next_inspection_due: date_from(now, 90),
            inspector_name: Some("M. Patel".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
            ..StaticSafetyRecord::new("PLT-002", "Air Compressor Unit")
        },
        StaticSafetyRecord {
            make: Some("Demag".to_string()),
            model: Some("EKKE 5000".to_string()),
            last_inspection_date: date_from(now, -187),
            next_inspection_due: date_from(now, -5),
            inspector_name: Some("J. Harris".to_string()),
            cert_expiry: date_from(now, -5),
            cert_ref: Some("LOLER-CRN-003".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
            ..StaticSafetyRecord::new("PLT-003", "Overhead Crane #1")
        },
    ];

    let current = current_quarter_colour(now).colour;
    let lifting_items = vec![
        lifting(now, Gear {
            id: "LFT-001",
            category: "Crane / Hoist",
            description: "Overhead Crane 5T",
            make: "Demag",
            swl: 5000.0,
            next_exam_in: 155,
            colour: current,
            notes: None,
        }),
        lifting(now, Gear {
            id: "LFT-002",
            category: "Chain Sling",
            description: "2-Leg Chain Sling 2T",
            make: "Pewag",
            swl: 2000.0,
            next_exam_in: 170,
            colour: current,
            notes: None,
        }),
        lifting(now, Gear {
            id: "LFT-003",
            category: "Shackle",
            description: "Bow Shackle 3.25T",
            make: "Crosby G-209",
            swl: 3250.0,
            next_exam_in: -5,
            colour: current.previous(),
            notes: Some("EXAM OVERDUE"),
        }),
        lifting(now, Gear {
            id: "LFT-004",
            category: "Webbing Sling",
            description: "Single Leg Webbing 2T×3m",
            make: "Spanset",
            swl: 2000.0,
            next_exam_in: 155,
            colour: current,
            notes: None,
        }),
        lifting(now, Gear {
            id: "LFT-005",
            category: "Hook",
            description: "Safety Hook 5T",
            make: "Gunnebo",
            swl: 5000.0,
            next_exam_in: 155,
            colour: current,
            notes: None,
        }),
        lifting(now, Gear {
            id: "LFT-006",
            category: "Chain Block",
            description: "Chain Block 1T",
            make: "Kito",
            swl: 1000.0,
            next_exam_in: 25,
            colour: current,
            notes: Some("Due soon"),
        }),
    ];

    DemoFixture {
        plants,
        static_records,
        lifting_items,
    }
}
