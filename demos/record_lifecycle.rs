// # Cloudflare Record Lifecycle Validation Tool
//
// Drives a single record through the full resource lifecycle against the
// real Cloudflare API.
//
// ## Usage
//
// ```bash
// # Dry-run mode (default - only resolves the zone)
// CLOUDFLARE_API_TOKEN=your_token \
// DNSREC_DOMAIN=example.com \
// DNSREC_SUBDOMAIN=dnsrec-test \
// DNSREC_TYPE=A \
// DNSREC_VALUE=192.0.2.1 \
// cargo run -p dnsrec-demos --bin record_lifecycle
//
// # Live mode (creates, updates and deletes a record!)
// DNSREC_MODE=live DNSREC_UPDATED_VALUE=192.0.2.2 ... \
// cargo run -p dnsrec-demos --bin record_lifecycle
//
// # Import an existing record, then read it
// DNSREC_MODE=live DNSREC_IMPORT='www|example.com|A' ... \
// cargo run -p dnsrec-demos --bin record_lifecycle
// ```
//
// ## Environment Variables
//
// Credentials: see `ProviderConfig::from_env`.
//
// Required:
// - `DNSREC_DOMAIN`: Zone name (e.g., "example.com")
// - `DNSREC_VALUE`: Record content
//
// Optional:
// - `DNSREC_SUBDOMAIN`: Relative name (default: apex)
// - `DNSREC_TYPE`: Record type (default: A)
// - `DNSREC_TTL`: TTL in seconds (default: left to Cloudflare)
// - `DNSREC_UPDATED_VALUE`: Content for the update step (default: unchanged)
// - `DNSREC_IMPORT`: Import identifier; switches to import mode
// - `DNSREC_MODE`: "dry-run" or "live" (default: dry-run)
// - `DNSREC_LOG`: Log level (default: info)

use anyhow::Context;
use dnsrec_core::{
    DnsApi, ProviderConfig, RecordData, create_record, delete_record, import_record, read_record,
    update_record,
};
use dnsrec_provider_cloudflare::CloudflareClient;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = env::var("DNSREC_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!("=== Cloudflare Record Lifecycle Validation ===");

    let config = ProviderConfig::from_env().context("Failed to load Cloudflare credentials")?;
    tracing::info!("Credentials loaded: {:?}", config.credentials);

    let client = CloudflareClient::new(&config)?;

    let mode = env::var("DNSREC_MODE").unwrap_or_else(|_| "dry-run".to_string());
    let dry_run = mode.to_lowercase() != "live";

    if dry_run {
        tracing::warn!("Running in DRY-RUN mode - no changes will be made");
    } else {
        tracing::warn!("Running in LIVE mode - will make actual DNS changes!");
    }

    if let Ok(import_id) = env::var("DNSREC_IMPORT") {
        return run_import(&client, &import_id, dry_run).await;
    }

    let mut data = record_from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  Record: {}", data.full_name());
    tracing::info!("  Type: {}", data.record_type);
    tracing::info!("  Value: {}", data.value);
    tracing::info!("  Mode: {}", mode);

    tracing::info!("--- Step 1: Resolving Zone ---");
    let zone_id = client.zone_id_by_name(&data.domain).await?;
    tracing::info!("✓ Zone {} resolved to {}", data.domain, zone_id);

    if dry_run {
        tracing::info!("Dry run complete; set DNSREC_MODE=live to run the lifecycle");
        return Ok(());
    }

    tracing::info!("--- Step 2: Create ---");
    create_record(&client, &mut data).await?;
    tracing::info!("✓ Created record {} (ttl {:?})", data.id, data.ttl);

    tracing::info!("--- Step 3: Read ---");
    read_record(&client, &mut data).await?;
    anyhow::ensure!(data.is_present(), "record vanished right after create");
    tracing::info!("✓ Read back {} = {}", data.full_name(), data.value);

    tracing::info!("--- Step 4: Update ---");
    if let Ok(updated) = env::var("DNSREC_UPDATED_VALUE") {
        data.value = updated;
    }
    update_record(&client, &mut data).await?;
    tracing::info!("✓ Updated {} = {}", data.full_name(), data.value);

    tracing::info!("--- Step 5: Delete ---");
    delete_record(&client, &mut data).await?;
    anyhow::ensure!(!data.is_present(), "record id kept after delete");
    tracing::info!("✓ Deleted record");

    tracing::info!("=== Lifecycle validation complete ===");
    Ok(())
}

fn record_from_env() -> anyhow::Result<RecordData> {
    let domain = env::var("DNSREC_DOMAIN").context("DNSREC_DOMAIN is required")?;
    let value = env::var("DNSREC_VALUE").context("DNSREC_VALUE is required")?;
    let record_type = env::var("DNSREC_TYPE").unwrap_or_else(|_| "A".to_string());

    let mut data = RecordData::new(domain, record_type, value)
        .with_subdomain(env::var("DNSREC_SUBDOMAIN").unwrap_or_default());

    if let Ok(ttl) = env::var("DNSREC_TTL") {
        data = data.with_ttl(ttl.parse().context("DNSREC_TTL must be a number")?);
    }

    Ok(data)
}

async fn run_import(client: &CloudflareClient, import_id: &str, dry_run: bool) -> anyhow::Result<()> {
    tracing::info!("--- Import: {} ---", import_id);

    let parsed: dnsrec_core::ImportId = import_id.parse()?;
    let zone_id = client.zone_id_by_name(&parsed.domain).await?;
    tracing::info!("✓ Zone {} resolved to {}", parsed.domain, zone_id);

    if dry_run {
        tracing::info!("Dry run complete; set DNSREC_MODE=live to import");
        return Ok(());
    }

    let data = import_record(client, import_id).await?;
    tracing::info!("✓ Imported record {}", data.id);
    tracing::info!("  Name: {}", data.full_name());
    tracing::info!("  Type: {}", data.record_type);
    tracing::info!("  Value: {}", data.value);
    tracing::info!("  TTL: {:?}", data.ttl);
    tracing::info!("  Proxied: {:?}", data.proxied);

    Ok(())
}
