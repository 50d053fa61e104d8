//! Periods command handler

use studyboard::core::periods::{self, parse_clock, time_to_period};
use studyboard::debug;

/// List the catalog, or map one clock time to its period
pub fn run(time: Option<&str>) -> Result<(), String> {
    let Some(time) = time else {
        println!("\n=== Periods ===");
        for period in periods::catalog() {
            println!("{:>2}  {}", period.index, period.time_label());
        }
        return Ok(());
    };

    let (hour, minute) = parse_clock(time)
        .ok_or_else(|| format!("✗ Unreadable time '{time}'. Use HH:MM, e.g. 09:15"))?;
    let index = time_to_period(hour, minute);
    debug!("{hour:02}:{minute:02} maps to period {index}");
    println!(
        "{hour:02}:{minute:02} → period {index} ({})",
        periods::period_to_time_label(index)
    );
    Ok(())
}
