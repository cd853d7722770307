//! `vollab` - CLI for the volunteer lab coordination service
//!
//! Each invocation builds a fresh mock service from configuration and runs
//! one command against it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use vollab::cli::{Cli, Command, ConfigCommand, LabsCommand, LoginCommand, RoleArg};
use vollab::dashboard::RegionBrowser;
use vollab::screens::{AuthScreen, LabForm, LoginForm, Tab};
use vollab::service::{LabService, LoginRequest, MockService};
use vollab::{init_logging, App, Config, Identity, Lab, LabStatus, Role};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Labs(cmd) => handle_labs(&config, &cmd).await,
        Command::Login(cmd) => handle_login(&config, &cmd).await,
        Command::Status(cmd) => handle_status(&config, cmd.json).await,
        Command::Demo(cmd) => handle_demo(&config, cmd.role).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

async fn handle_labs(config: &Config, cmd: &LabsCommand) -> Result<()> {
    let service = MockService::from_config(config);
    let labs: Vec<Lab> = service
        .get_labs()
        .await?
        .into_iter()
        .filter(|lab| cmd.region.map_or(true, |region| lab.matches_region(region)))
        .filter(|lab| cmd.status.map_or(true, |status| lab.status == status))
        .collect();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&labs)?);
        return Ok(());
    }

    if labs.is_empty() {
        println!("No labs found.");
        return Ok(());
    }
    for lab in &labs {
        print_lab_line(lab);
    }
    println!();
    println!("{} lab(s)", labs.len());
    Ok(())
}

async fn handle_login(config: &Config, cmd: &LoginCommand) -> Result<()> {
    let service = MockService::from_config(config);
    let identity = match cmd.role {
        Some(role) => {
            let mut app = App::new(service).with_locale(config.display.default_locale);
            let form = LoginForm::new(&cmd.identifier, &cmd.secret, role.into());
            let identity = app.login(&form).await?.clone();
            identity
        }
        None => {
            service
                .login(&LoginRequest::legacy(&cmd.identifier, &cmd.secret))
                .await?
        }
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
    } else {
        print_identity(&identity);
    }
    Ok(())
}

async fn handle_status(config: &Config, json: bool) -> Result<()> {
    let service = MockService::from_config(config);
    let stats = service.store().read().await.stats();

    if json {
        let status = serde_json::json!({
            "total_labs": stats.total_labs,
            "total_reports": stats.total_reports,
            "by_status": LabStatus::ALL
                .iter()
                .map(|status| {
                    (
                        status.to_string(),
                        serde_json::Value::from(stats.count(*status)),
                    )
                })
                .collect::<serde_json::Map<_, _>>(),
            "latency_ms": config.service.latency_ms,
            "auth_latency_ms": config.service.auth_latency_ms,
            "signup_latency_ms": config.service.signup_latency_ms,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("vollab status");
        println!("-------------");
        println!("Labs:           {}", stats.total_labs);
        println!("Reports:        {}", stats.total_reports);
        for status in LabStatus::ALL {
            println!("  {:<14}{}", format!("{status}:"), stats.count(status));
        }
        println!("Data latency:   {} ms", config.service.latency_ms);
        println!("Login latency:  {} ms", config.service.auth_latency_ms);
        println!("Signup latency: {} ms", config.service.signup_latency_ms);
    }
    Ok(())
}

async fn handle_demo(config: &Config, role: RoleArg) -> Result<()> {
    let mut app =
        App::new(MockService::from_config(config)).with_locale(config.display.default_locale);
    match Role::from(role) {
        Role::Volunteer => volunteer_walkthrough(&mut app).await?,
        Role::Admin => admin_walkthrough(&mut app, config).await?,
    }
    app.logout()?;
    println!("Logged out.");
    Ok(())
}

async fn volunteer_walkthrough(app: &mut App<MockService>) -> Result<()> {
    let mut screen = AuthScreen::new();
    screen.login_mut().identifier = "9876500000".to_string();
    screen.login_mut().secret = "demo".to_string();
    let identity = app.authenticate(&screen).await?;
    println!("Signed in as {} ({})", identity.name(), identity.role());

    let dashboard = app
        .dashboard()
        .and_then(|dash| dash.as_volunteer())
        .context("volunteer dashboard missing")?;
    println!("{}", dashboard.count_line());
    let first = dashboard.labs_in_region().first().map(|lab| lab.id.clone());
    for lab in dashboard.labs_in_region() {
        print_lab_line(lab);
    }

    let Some(id) = first else {
        return Ok(());
    };
    app.open_lab(&id)?;
    if let Some(detail) = app.lab_detail_mut() {
        detail.select_tab(Tab::Status);
        println!("Opened {} on the {:?} tab", detail.lab().name, detail.tab());
    }

    let next = match app.lab_detail().map(|detail| detail.lab().status) {
        Some(LabStatus::InProgress) => LabStatus::Completed,
        _ => LabStatus::InProgress,
    };
    app.change_status(next).await?;
    println!("Status changed to {next}");

    app.back().await?;
    if let Some(dashboard) = app.dashboard().and_then(|dash| dash.as_volunteer()) {
        println!("Back on the dashboard: {}", dashboard.count_line());
    }
    Ok(())
}

async fn admin_walkthrough(app: &mut App<MockService>, config: &Config) -> Result<()> {
    let identity = app
        .login(&LoginForm::new(
            "admin",
            &config.service.admin_secret,
            Role::Admin,
        ))
        .await?;
    println!("Signed in as {} ({})", identity.name(), identity.role());

    let service = app.service().clone();
    let region = config.volunteer.default_region;
    let admin = app
        .dashboard_mut()
        .and_then(|dash| dash.as_admin_mut())
        .context("admin dashboard missing")?;

    admin.select_region(Some(region));
    println!("{} lab(s) in {}", admin.labs_in_region().len(), region);

    admin.open_new()?;
    if let Some(fields) = admin.fields_mut() {
        *fields = LabForm {
            name: "Demo Diagnostics".to_string(),
            district: "Demo District".to_string(),
            address: "1 Demo Road".to_string(),
            contact_person: "Demo Contact".to_string(),
            contact_number: "+91 9000000000".to_string(),
            email: "demo@example.com".to_string(),
            notes: String::new(),
        };
    }
    let created = admin.submit(&service).await?;
    println!("Added {} ({})", created.name, created.id);

    admin.open_edit(&created.id)?;
    if let Some(fields) = admin.fields_mut() {
        fields.notes = "Visited during the walkthrough.".to_string();
    }
    let edited = admin.submit(&service).await?;
    println!(
        "Edited {}: notes = {}",
        edited.name,
        edited.notes.as_deref().unwrap_or("-")
    );

    admin.request_delete(&created.id)?;
    admin.confirm_delete(&service).await?;
    println!(
        "Deleted {}; {} lab(s) in {}",
        created.id,
        admin.labs_in_region().len(),
        region
    );
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Service]");
                println!("  Data latency (ms):   {}", config.service.latency_ms);
                println!("  Login latency (ms):  {}", config.service.auth_latency_ms);
                println!("  Signup latency (ms): {}", config.service.signup_latency_ms);
                println!("  Seed demo labs:      {}", config.service.seed_demo_labs);
                println!();
                println!("[Volunteer]");
                println!("  Default region:      {}", config.volunteer.default_region);
                println!();
                println!("[Display]");
                println!("  Default locale:      {}", config.display.default_locale);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_existing(path) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_lab_line(lab: &Lab) {
    println!(
        "{:<10} {:<26} {:<16} {:<12} {}",
        lab.id, lab.name, lab.region, lab.district, lab.status
    );
}

fn print_identity(identity: &Identity) {
    println!("Name:    {}", identity.name());
    println!("Role:    {}", identity.role());
    println!("Id:      {}", identity.id());
    println!("Email:   {}", identity.email());
    println!("Mobile:  {}", identity.mobile());
    if let Some(region) = identity.region() {
        println!("Region:  {region}");
    }
}
