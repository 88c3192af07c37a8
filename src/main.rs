use clap::Parser;
use tracing_subscriber::EnvFilter;

use wattwise::cli::{Cli, Command, DayArg};
use wattwise::config::Config;
use wattwise::datasources::{CarbonIntensityClient, OpenMeteoClient, PostcodeClient};
use wattwise::error::{Result, WattWiseError};
use wattwise::logic::{
    extract_weather_snapshot, generate_recommendations, DayContext, RulesEngine, SystemClock,
};
use wattwise::models::{GridSnapshot, Recommendation, TimeStatus, WeatherSnapshot};

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v flags raise the default level, RUST_LOG wins
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Command::Rules) = cli.command {
        print_rule_catalog();
        return Ok(());
    }

    if cli.postcode.is_none() {
        return Err(WattWiseError::Config(
            "A UK postcode is required, e.g. wattwise \"SW1A 1AA\"".to_string(),
        ));
    }

    let config = Config::load(cli.config.clone())?;
    let prefs = cli.preferences()?;
    let clock = SystemClock;

    let coords = PostcodeClient::with_base_url(&config.api.postcodes_base_url)
        .lookup(&prefs.postcode)
        .await?;
    tracing::info!(
        postcode = %prefs.postcode,
        latitude = coords.latitude,
        longitude = coords.longitude,
        "resolved postcode"
    );

    let forecast = OpenMeteoClient::with_base_url(&config.api.openmeteo_base_url)
        .fetch_forecast(coords.latitude, coords.longitude, config.forecast.days)
        .await?;

    let (day_index, day) = match cli.day {
        DayArg::Today => (0, DayContext::today()),
        DayArg::Tomorrow => (1, DayContext::tomorrow()),
    };
    let forecast_day = forecast.days.get(day_index).ok_or_else(|| {
        WattWiseError::DataSourceUnavailable(format!(
            "Forecast has no data for {}",
            day.label
        ))
    })?;

    let snapshot = extract_weather_snapshot(
        &forecast_day.hourly,
        &forecast_day.aggregates,
        forecast_day.aggregates.date,
        day.is_today,
        &clock,
    );

    // Live generation mix only applies to same-day tips
    let grid = if day.is_today {
        match CarbonIntensityClient::with_base_url(&config.api.carbonintensity_base_url)
            .fetch_snapshot()
            .await
        {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("Grid data unavailable, continuing without it: {}", e);
                None
            }
        }
    } else {
        None
    };

    let recommendations =
        generate_recommendations(&snapshot, &prefs, day, grid.as_ref(), &clock);

    if cli.json {
        print_json(&snapshot, grid.as_ref(), &recommendations)?;
    } else {
        print_report(&snapshot, day, grid.as_ref(), &recommendations);
    }

    Ok(())
}

fn print_rule_catalog() {
    let engine = RulesEngine::new();
    for (id, name) in engine.list_rules() {
        println!("{:<26} {}", id, name);
    }
}

fn print_json(
    weather: &WeatherSnapshot,
    grid: Option<&GridSnapshot>,
    recommendations: &[Recommendation],
) -> Result<()> {
    let payload = serde_json::json!({
        "weather": weather,
        "grid": grid,
        "recommendations": recommendations,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_report(
    weather: &WeatherSnapshot,
    day: DayContext,
    grid: Option<&GridSnapshot>,
    recommendations: &[Recommendation],
) {
    let conditions = weather
        .conditions_range
        .as_deref()
        .unwrap_or(&weather.conditions);
    println!(
        "Forecast for {} ({}): {}, {:.0}-{:.0}°C",
        day.label, weather.date, conditions, weather.temp_low, weather.temp_high
    );
    if let Some(grid) = grid {
        println!(
            "Grid right now: {:.0}% renewable, {:.0} gCO2/kWh ({})",
            grid.renewable_percent, grid.carbon_intensity, grid.carbon_index
        );
    }
    println!();

    if recommendations.is_empty() {
        println!("No tips for {} - nothing in the forecast worth acting on.", day.label);
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        let passed = if rec.time_status == Some(TimeStatus::Passed) {
            " (window passed)"
        } else {
            ""
        };
        println!("{}. [{}] {}{}", i + 1, rec.priority, rec.title, passed);
        println!("   {}", rec.description);
        if !rec.reasoning.is_empty() {
            println!("   Why: {}", rec.reasoning);
        }
        if let Some(savings) = &rec.savings_estimate {
            println!("   Savings: {}", savings);
        }
        println!();
    }
}
