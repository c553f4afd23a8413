use std::path::Path;

use crate::cards::tables::MANDATORY_FIELDS;
use crate::formats::RulesDatabase;
use crate::formats::rules::{audit_duplicate_field, audit_missing_field};
use crate::paths;

pub fn execute(database: Option<&Path>) -> anyhow::Result<()> {
    let db_path = paths::locate_database(database)?;
    let db = RulesDatabase::load(&db_path)?;

    let mut defects = 0usize;
    for field in MANDATORY_FIELDS {
        for element in audit_missing_field(&db, "Power", field) {
            println!("Power without a {field}: {}", element.name);
            defects += 1;
        }
        for element in audit_duplicate_field(&db, "Power", field) {
            println!("Power with more than one {field}: {}", element.name);
            defects += 1;
        }
    }

    let total = db.elements_of_kind("Power").count();
    if defects == 0 {
        println!("No defects in {total} powers.");
    } else {
        println!("{defects} defect(s) across {total} powers.");
    }
    Ok(())
}
