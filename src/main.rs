use std::env;
use std::error::Error;
use std::process::ExitCode;

use welqo_scan::{is_currently_valid, scan_image, ScanOutcome};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: welqo-scan <image>");
        return Ok(ExitCode::from(2));
    };

    let img = image::open(&path)?;
    match scan_image(&img)? {
        ScanOutcome::Identifier(id) => {
            println!("access identifier: {id}");
        }
        ScanOutcome::Record(record) => {
            println!(
                "offline pass: visitor {} / resident {} ({})",
                record.visitor.name, record.resident.name, record.resident.apartment
            );
            println!("expires {}", record.expires_at);
            println!("window open: {}", is_currently_valid(&record.expires_at));
        }
        ScanOutcome::NotFound => {
            println!("no recognizable access code in {path}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
