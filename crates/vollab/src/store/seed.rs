//! Demo lab records loaded into a fresh store.

use chrono::NaiveDate;

use crate::model::{Lab, LabStatus, Region, Report};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn report(id: &str, day: NaiveDate, summary: &str) -> Report {
    Report {
        id: id.to_string(),
        date: day,
        summary: summary.to_string(),
        url: "#".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn lab(
    id: &str,
    name: &str,
    region: Region,
    district: &str,
    status: LabStatus,
    address: &str,
    contact_person: &str,
    contact_number: &str,
    email: &str,
) -> Lab {
    Lab {
        id: id.to_string(),
        name: name.to_string(),
        region,
        district: district.to_string(),
        status,
        address: address.to_string(),
        contact_person: contact_person.to_string(),
        contact_number: contact_number.to_string(),
        email: email.to_string(),
        last_visit: None,
        notes: None,
        reports: Vec::new(),
    }
}

/// The five labs every new session starts with.
#[must_use]
pub fn demo_labs() -> Vec<Lab> {
    let mut city = lab(
        "l1",
        "City Pathology Lab",
        Region::Maharashtra,
        "Mumbai",
        LabStatus::Completed,
        "123 Marine Drive, Mumbai, MH",
        "Dr. Sharma",
        "+91 9876543210",
        "citypath@example.com",
    );
    city.last_visit = date(2023, 10, 15);
    city.reports.extend(
        city.last_visit
            .map(|day| report("r1", day, "Quarterly Audit")),
    );

    let mut green_cross = lab(
        "l2",
        "Green Cross Diagnostics",
        Region::Maharashtra,
        "Pune",
        LabStatus::InProgress,
        "45 FC Road, Pune, MH",
        "Mr. Patil",
        "+91 9876543211",
        "greencross@example.com",
    );
    green_cross.last_visit = date(2023, 10, 20);

    let tech_health = lab(
        "l3",
        "TechHealth Labs",
        Region::Karnataka,
        "Bangalore",
        LabStatus::Pending,
        "88 MG Road, Bangalore, KA",
        "Ms. Reddy",
        "+91 9876543212",
        "techhealth@example.com",
    );

    let mut capital = lab(
        "l4",
        "Capital Care Lab",
        Region::Delhi,
        "New Delhi",
        LabStatus::IssueReported,
        "Connaught Place, Delhi",
        "Dr. Singh",
        "+91 9876543213",
        "capital@example.com",
    );
    capital.last_visit = date(2023, 9, 1);
    capital.notes = Some("Equipment malfunction reported.".to_string());
    capital.reports.extend(
        capital
            .last_visit
            .map(|day| report("r2", day, "Incident Report")),
    );

    let sunrise = lab(
        "l5",
        "Sunrise Diagnostics",
        Region::Gujarat,
        "Ahmedabad",
        LabStatus::Completed,
        "Navrangpura, Ahmedabad, GJ",
        "Mr. Patel",
        "+91 9876543214",
        "sunrise@example.com",
    );

    vec![city, green_cross, tech_health, capital, sunrise]
}
