use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use clinic_insight::{
    ClinicInsightConfig, analysis, best_area, ingest,
};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("Usage: clinic-insight <patient-records.csv|.xlsx|.xls>");
    };
    let path = Path::new(&path);

    let start = Instant::now();
    let records = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => ingest::read_csv_file(path),
        Some("xlsx" | "xls") => ingest::read_excel_file(path),
        _ => bail!("Unsupported file type: {}", path.display()),
    }
    .with_context(|| format!("Failed to ingest {}", path.display()))?;
    info!("Loaded {} records in {:?}", records.len(), start.elapsed());

    let config = ClinicInsightConfig::default();

    // Area distribution, count-descending for display
    let mut counts = analysis::area_counts(&records);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    info!("Patients by area:");
    for count in &counts {
        info!("  {}: {}", count.area, count.count);
    }

    // Clinic-siting recommendation
    match best_area(&counts) {
        Some(best) => info!(
            "Recommended clinic area: {} ({} patients)",
            best.area, best.count
        ),
        None => warn!("No records, no recommendation"),
    }

    // Growth forecast for the first observed area
    let series = analysis::time_series(&records, &config.date_format_config);
    if let Some(area) = analysis::unique_areas(&series).first() {
        let projected = analysis::forecast_with(
            &series,
            area,
            config.forecast_horizon,
            config.growth_rate,
        );
        info!("Projected patients for {area}:");
        for point in &projected {
            info!("  {}: {}", point.month_key, point.predicted_count);
        }
    }

    Ok(())
}
