//! The hand-authored customer base the dashboard ships with. Seventeen
//! accounts across the ANZ patch with their adoption counts and open
//! pipeline, used as the session's starting store and by the summary tests.

use crate::schema::{Confidence, Customer, Opportunity, Stakeholder};
use crate::store::CustomerBook;

fn opportunity(
    id: &str,
    seats: u32,
    description: &str,
    notes: &str,
    close_date: &str,
    confidence: Confidence,
    partner: &str,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        seats,
        description: description.to_string(),
        notes: notes.to_string(),
        close_date: close_date.to_string(),
        confidence,
        partner: partner.to_string(),
    }
}

fn stakeholder(name: &str, role: &str) -> Stakeholder {
    Stakeholder {
        name: name.to_string(),
        role: role.to_string(),
    }
}

fn customer(
    id: &str,
    name: &str,
    total_seats: u32,
    adopted_seats: u32,
    opportunities: Vec<Opportunity>,
    stakeholders: Vec<Stakeholder>,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        total_seats,
        adopted_seats,
        opportunities,
        stakeholders,
    }
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        customer(
            "1",
            "Datacom",
            5000,
            3200,
            vec![
                opportunity(
                    "OPP-001",
                    800,
                    "Cloud Services Division",
                    "Initial deployment successful, planning expansion to other divisions",
                    "Q4 FY25",
                    Confidence::Committed,
                    "Engage Squared",
                ),
                opportunity(
                    "OPP-002",
                    600,
                    "Managed Services Team",
                    "Customer has approved budget for Q4 deployment, training scheduled",
                    "Q1 FY26",
                    Confidence::CommitWithRisk,
                    "Increment",
                ),
                opportunity(
                    "OPP-003",
                    400,
                    "Security Operations Center",
                    "Pilot program completed with 95% satisfaction rate",
                    "Q2 FY26",
                    Confidence::Upside,
                    "Data #3",
                ),
            ],
            vec![
                stakeholder("Sophie Turner", "IT Director"),
                stakeholder("James Lee", "Head of Operations"),
            ],
        ),
        customer(
            "2",
            "Tourism Holdings Limited",
            1200,
            450,
            vec![
                opportunity(
                    "OPP-002",
                    300,
                    "Customer Service Team",
                    "Pilot program completed, awaiting budget approval for full rollout",
                    "Q4 FY25",
                    Confidence::CommitWithRisk,
                    "Telstra",
                ),
                opportunity(
                    "OPP-004",
                    200,
                    "Rental Operations",
                    "Initial deployment planned for Q4, team training scheduled",
                    "Q3 FY26",
                    Confidence::Upside,
                    "Avanade",
                ),
            ],
            vec![stakeholder("Olivia Chen", "Digital Transformation Lead")],
        ),
        customer(
            "3",
            "NZME",
            800,
            600,
            vec![opportunity(
                "OPP-003",
                150,
                "Digital Media Team",
                "Deployment in progress, team feedback positive",
                "Q4 FY25",
                Confidence::Committed,
                "Microsoft Direct",
            )],
            vec![
                stakeholder("Liam Patel", "CIO"),
                stakeholder("Emma Wilson", "Business Analyst"),
            ],
        ),
        customer(
            "4",
            "Arnott's",
            2500,
            1800,
            vec![opportunity(
                "OPP-004",
                400,
                "Manufacturing Operations",
                "Testing phase complete, ready for production deployment",
                "Q1 FY26",
                Confidence::CommitWithRisk,
                "Generation-e",
            )],
            vec![stakeholder("Lucas Brown", "IT Manager")],
        ),
        customer(
            "5",
            "TNA Solutions",
            600,
            400,
            vec![opportunity(
                "OPP-005",
                150,
                "Engineering Team",
                "Initial deployment successful, planning phase 2",
                "Q2 FY26",
                Confidence::Upside,
                "Engage Squared",
            )],
            vec![
                stakeholder("Mia Robinson", "Head of Engineering"),
                stakeholder("Noah Smith", "Project Manager"),
            ],
        ),
        customer(
            "6",
            "Forestry Corp of NSW",
            1500,
            900,
            vec![opportunity(
                "OPP-006",
                300,
                "Field Operations",
                "Pilot program in progress, early results promising",
                "Q4 FY25",
                Confidence::CommitWithRisk,
                "Increment",
            )],
            vec![stakeholder("Ava Martin", "Operations Lead")],
        ),
        customer(
            "7",
            "Waste Management",
            3000,
            2200,
            vec![opportunity(
                "OPP-007",
                500,
                "Operations Team",
                "Deployment scheduled for Q3",
                "Q3 FY26",
                Confidence::Upside,
                "Data #3",
            )],
            vec![
                stakeholder("Ethan Clark", "Sustainability Officer"),
                stakeholder("Grace Evans", "IT Business Partner"),
            ],
        ),
        customer(
            "8",
            "2Degrees",
            2000,
            1500,
            vec![opportunity(
                "OPP-008",
                300,
                "Customer Support",
                "Initial feedback positive, planning expansion",
                "Q1 FY26",
                Confidence::Upside,
                "Telstra",
            )],
            vec![stakeholder("Benjamin Scott", "Head of Customer Service")],
        ),
        customer(
            "9",
            "Contact Energy",
            1800,
            1200,
            vec![opportunity(
                "OPP-009",
                400,
                "Energy Trading",
                "Deployment in progress, team training scheduled",
                "Q2 FY26",
                Confidence::CommitWithRisk,
                "Avanade",
            )],
            vec![],
        ),
        customer(
            "10",
            "Sky TV",
            1000,
            700,
            vec![opportunity(
                "OPP-010",
                200,
                "Content Production",
                "Pilot program completed, awaiting final approval",
                "Q3 FY26",
                Confidence::Upside,
                "Microsoft Direct",
            )],
            vec![],
        ),
        customer(
            "11",
            "Inghams",
            4000,
            2800,
            vec![
                opportunity(
                    "OPP-011",
                    800,
                    "Processing Plants",
                    "Initial deployment successful, planning next phase",
                    "Q1 FY26",
                    Confidence::Committed,
                    "Generation-e",
                ),
                opportunity(
                    "OPP-012",
                    500,
                    "Supply Chain Operations",
                    "Deployment scheduled for Q3, team training in progress",
                    "Q2 FY26",
                    Confidence::CommitWithRisk,
                    "Engage Squared",
                ),
                opportunity(
                    "OPP-013",
                    300,
                    "Quality Assurance",
                    "Pilot program completed, awaiting final approval",
                    "Q3 FY26",
                    Confidence::Upside,
                    "Increment",
                ),
            ],
            vec![],
        ),
        customer(
            "12",
            "Teys",
            3500,
            2500,
            vec![
                opportunity(
                    "OPP-012",
                    600,
                    "Processing Operations",
                    "Deployment in progress, team feedback positive",
                    "Q1 FY26",
                    Confidence::Committed,
                    "Data #3",
                ),
                opportunity(
                    "OPP-014",
                    400,
                    "Logistics Team",
                    "Initial deployment successful, planning expansion",
                    "Q2 FY26",
                    Confidence::NonCommit,
                    "Telstra",
                ),
            ],
            vec![],
        ),
        customer(
            "13",
            "BORG Manufacturing",
            800,
            500,
            vec![opportunity(
                "OPP-013",
                200,
                "Engineering Team",
                "Pilot program in progress, early results promising",
                "Q3 FY26",
                Confidence::Upside,
                "Avanade",
            )],
            vec![],
        ),
        customer(
            "14",
            "MAAS Group",
            1200,
            800,
            vec![opportunity(
                "OPP-014",
                250,
                "Construction Teams",
                "Initial deployment successful, planning expansion",
                "Q1 FY26",
                Confidence::Upside,
                "Microsoft Direct",
            )],
            vec![],
        ),
        customer(
            "15",
            "HW Richardson",
            2500,
            1800,
            vec![
                opportunity(
                    "OPP-015",
                    400,
                    "Transport Operations",
                    "Deployment scheduled for Q3",
                    "Q2 FY26",
                    Confidence::Committed,
                    "Generation-e",
                ),
                opportunity(
                    "OPP-016",
                    300,
                    "Fleet Management",
                    "Pilot program completed, awaiting budget approval",
                    "Q3 FY26",
                    Confidence::CommitWithRisk,
                    "Engage Squared",
                ),
                opportunity(
                    "OPP-017",
                    200,
                    "Maintenance Teams",
                    "Initial deployment successful, planning next phase",
                    "Q4 FY26",
                    Confidence::Upside,
                    "Increment",
                ),
            ],
            vec![],
        ),
        customer(
            "16",
            "Unison",
            900,
            600,
            vec![opportunity(
                "OPP-016",
                200,
                "Network Operations",
                "Pilot program completed, awaiting final approval",
                "Q4 FY26",
                Confidence::Upside,
                "Data #3",
            )],
            vec![],
        ),
        customer(
            "17",
            "Clarus",
            700,
            450,
            vec![opportunity(
                "OPP-017",
                150,
                "Software Development",
                "Initial deployment successful, planning next phase",
                "Q4 FY26",
                Confidence::Upside,
                "Telstra",
            )],
            vec![],
        ),
    ]
}

pub fn sample_book() -> CustomerBook {
    CustomerBook::from_customers(sample_customers())
}
