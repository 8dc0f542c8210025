use seat_pipeline::*;

fn state(group_by: GroupBy, partner: PartnerFilter, sort: SortConfig) -> ViewState {
    ViewState {
        sort,
        group_by,
        partner,
        theme: Theme::Light,
    }
}

fn sort_by(field: SortField, direction: SortDirection) -> SortConfig {
    SortConfig { field, direction }
}

fn grouped(view: DashboardView) -> indexmap::IndexMap<String, Vec<Customer>> {
    match view.groups {
        CustomerGroups::Grouped(buckets) => buckets,
        CustomerGroups::Ungrouped(_) => panic!("expected the grouped shape"),
    }
}

fn ungrouped(view: DashboardView) -> Vec<Customer> {
    match view.groups {
        CustomerGroups::Ungrouped(customers) => customers,
        CustomerGroups::Grouped(_) => panic!("expected the flat shape"),
    }
}

#[test]
fn test_executive_summary_current_quarter() {
    let book = sample_book();
    let view = build_dashboard(&book, &ViewState::default()).unwrap();
    let summary = view.summary;

    // Q4 FY25 pipeline: Datacom 800, Tourism Holdings 300, NZME 150 and
    // Forestry Corp 300 seats.
    assert_eq!(summary.total_seats, 1550);
    assert_eq!(summary.total_arr, 558_000);

    let top: Vec<(&str, u32)> = summary
        .top_deals
        .iter()
        .map(|deal| (deal.id.as_str(), deal.seats))
        .collect();
    assert_eq!(
        top,
        vec![
            ("OPP-001", 800),
            ("OPP-002", 300), // Tourism Holdings; ties keep customer order
            ("OPP-006", 300), // Forestry Corp
            ("OPP-003", 150), // NZME
        ]
    );

    let partners: Vec<&str> = summary.partner_data.keys().map(String::as_str).collect();
    assert_eq!(
        partners,
        vec!["Engage Squared", "Telstra", "Microsoft Direct", "Increment"]
    );
    assert_eq!(summary.partner_data["Engage Squared"], 288_000);
    assert_eq!(summary.partner_data["Telstra"], 108_000);
    assert_eq!(summary.partner_data["Microsoft Direct"], 54_000);
    assert_eq!(summary.partner_data["Increment"], 108_000);
}

#[test]
fn test_quarter_grouping_full_dataset() {
    let book = sample_book();
    let view = build_dashboard(&book, &ViewState::default()).unwrap();
    let buckets = grouped(view);

    let labels: Vec<&str> = buckets.keys().map(String::as_str).collect();
    assert_eq!(
        labels,
        vec!["Q4 FY25", "Q1 FY26", "Q2 FY26", "Q3 FY26", "Q4 FY26"]
    );

    let q4_fy25: Vec<&str> = buckets["Q4 FY25"].iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        q4_fy25,
        vec!["Datacom", "Forestry Corp of NSW", "NZME", "Tourism Holdings Limited"]
    );

    let q4_fy26: Vec<&str> = buckets["Q4 FY26"].iter().map(|c| c.name.as_str()).collect();
    assert_eq!(q4_fy26, vec!["Clarus", "HW Richardson", "Unison"]);

    // The bucket header figure agrees with the summary for the same quarter.
    assert_eq!(quarter_arr(&buckets["Q4 FY25"], "Q4 FY25"), 558_000);
}

#[test]
fn test_quarter_partner_breakdown() {
    let book = sample_book();
    let view = build_dashboard(
        &book,
        &state(GroupBy::QuarterPartner, PartnerFilter::All, SortConfig::default()),
    )
    .unwrap();
    let buckets = grouped(view);

    // No chronological reorder in this mode: buckets appear as encountered
    // walking the name-sorted customer list.
    let labels: Vec<&str> = buckets.keys().map(String::as_str).collect();
    assert_eq!(
        labels,
        vec!["Q1 FY26", "Q3 FY26", "Q4 FY26", "Q2 FY26", "Q4 FY25"]
    );

    let members = &buckets["Q4 FY25"];
    assert_eq!(
        partners_in_quarter(members, "Q4 FY25"),
        vec!["Engage Squared", "Increment", "Microsoft Direct", "Telstra"]
    );
    assert_eq!(
        quarter_partner_arr(members, "Q4 FY25", "Engage Squared"),
        288_000
    );

    let deals = quarter_partner_opportunities(members, "Q4 FY25", "Increment");
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].id, "OPP-006");
    assert_eq!(deals[0].seats, 300);
}

#[test]
fn test_partner_grouping_full_dataset() {
    let book = sample_book();
    let view = build_dashboard(
        &book,
        &state(GroupBy::Partner, PartnerFilter::All, SortConfig::default()),
    )
    .unwrap();
    let buckets = grouped(view);

    let labels: Vec<&str> = buckets.keys().map(String::as_str).collect();
    assert_eq!(
        labels,
        vec![
            "Telstra",
            "Generation-e",
            "Avanade",
            "Engage Squared",
            "Increment",
            "Data #3",
            "Microsoft Direct",
        ]
    );

    let telstra: Vec<&str> = buckets["Telstra"].iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        telstra,
        vec!["2Degrees", "Clarus", "Teys", "Tourism Holdings Limited"]
    );

    // 300 + 150 + 400 + 300 Telstra seats across those four accounts.
    assert_eq!(partner_arr(&buckets["Telstra"], "Telstra"), 414_000);

    // Datacom holds deals with exactly three partners and must appear in
    // exactly those three buckets.
    let datacom_buckets: Vec<&str> = buckets
        .iter()
        .filter(|(_, members)| members.iter().any(|c| c.name == "Datacom"))
        .map(|(label, _)| label.as_str())
        .collect();
    assert_eq!(datacom_buckets, vec!["Engage Squared", "Increment", "Data #3"]);
}

#[test]
fn test_partner_filter_restricts_customers() {
    let book = sample_book();
    let view = build_dashboard(
        &book,
        &state(
            GroupBy::None,
            PartnerFilter::named("Telstra"),
            SortConfig::default(),
        ),
    )
    .unwrap();
    let customers = ungrouped(view);

    let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["2Degrees", "Clarus", "Teys", "Tourism Holdings Limited"]
    );

    // Filtering selects customers, not opportunities: Tourism keeps its
    // Avanade deal alongside the Telstra one.
    let tourism = customers
        .iter()
        .find(|c| c.name == "Tourism Holdings Limited")
        .unwrap();
    assert_eq!(tourism.opportunities.len(), 2);
}

#[test]
fn test_name_sort_round_trip() {
    let book = sample_book();

    let asc = ungrouped(
        build_dashboard(
            &book,
            &state(
                GroupBy::None,
                PartnerFilter::All,
                sort_by(SortField::Name, SortDirection::Asc),
            ),
        )
        .unwrap(),
    );
    let desc = ungrouped(
        build_dashboard(
            &book,
            &state(
                GroupBy::None,
                PartnerFilter::All,
                sort_by(SortField::Name, SortDirection::Desc),
            ),
        )
        .unwrap(),
    );

    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(reversed, desc);

    assert_eq!(asc[0].name, "2Degrees");
    assert_eq!(asc.last().unwrap().name, "Waste Management");
}

#[test]
fn test_opportunity_arr_sort() {
    let book = sample_book();

    let descending = ungrouped(
        build_dashboard(
            &book,
            &state(
                GroupBy::None,
                PartnerFilter::All,
                sort_by(SortField::OpportunityArr, SortDirection::Desc),
            ),
        )
        .unwrap(),
    );

    // Datacom carries the largest pipeline (1800 seats), Inghams the second
    // (1600); the 150-seat accounts trail in book order.
    assert_eq!(descending[0].name, "Datacom");
    assert_eq!(descending[1].name, "Inghams");
    let tail: Vec<&str> = descending[14..].iter().map(|c| c.name.as_str()).collect();
    assert_eq!(tail, vec!["NZME", "TNA Solutions", "Clarus"]);
}

#[test]
fn test_edit_session_flow() {
    let mut book = sample_book();

    // Add a fresh account and fill it in.
    let mut draft = book.add_customer();
    assert_eq!(book.len(), 18);
    draft.name = "Fonterra".to_string();
    draft.total_seats = 6000;
    draft.adopted_seats = 1500;
    book.update_customer(draft.clone());
    assert_eq!(book.get(&draft.id).unwrap().name, "Fonterra");

    // Attach a deal through the template -> save path.
    let mut deal = book.add_opportunity(&draft.id).unwrap();
    assert_eq!(deal.confidence, Confidence::Medium);
    deal.seats = 1000;
    deal.description = "Global Supply Chain".to_string();
    deal.close_date = "Q1 FY26".to_string();
    deal.confidence = Confidence::Upside;
    deal.partner = "Engage Squared".to_string();
    book.upsert_opportunity(&draft.id, deal.clone());
    assert_eq!(book.get(&draft.id).unwrap().opportunities.len(), 1);

    // Saving the same deal again replaces rather than duplicates.
    deal.seats = 1200;
    book.upsert_opportunity(&draft.id, deal);
    let saved = &book.get(&draft.id).unwrap().opportunities;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].seats, 1200);

    // The new pipeline shows up in the Q1 FY26 summary.
    let view = build_dashboard_for_quarter(&book, &ViewState::default(), "Q1 FY26").unwrap();
    assert_eq!(view.summary.total_seats, 2950 + 1200);

    // And deleting the account cascades its deals out of every view.
    book.delete_customer(&draft.id);
    assert_eq!(book.len(), 17);
    let view = build_dashboard_for_quarter(&book, &ViewState::default(), "Q1 FY26").unwrap();
    assert_eq!(view.summary.total_seats, 2950);
}

#[test]
fn test_opportunity_cap_on_a_real_account() {
    let mut book = sample_book();

    // Datacom starts at three deals; one more is allowed.
    let template = book.add_opportunity("1").unwrap();
    book.upsert_opportunity("1", template);
    assert_eq!(book.get("1").unwrap().opportunities.len(), 4);

    // The fifth is silently rejected and the account is untouched.
    assert!(book.add_opportunity("1").is_none());
    assert_eq!(book.get("1").unwrap().opportunities.len(), 4);
}

#[test]
fn test_book_json_round_trip() {
    let book = sample_book();
    let json = book.to_json().unwrap();
    let parsed = CustomerBook::from_json(&json).unwrap();
    assert_eq!(parsed, book);

    // The confidence labels serialize as their display strings.
    assert!(json.contains("\"Commit with risk\""));
    assert!(json.contains("\"Non Commit\""));

    let schema = CustomerBook::schema_as_json().unwrap();
    assert!(schema.contains("adopted_seats"));
    assert!(schema.contains("close_date"));
}

#[test]
fn test_grouping_under_partner_filter() {
    let book = sample_book();
    let view = build_dashboard(
        &book,
        &state(
            GroupBy::Quarter,
            PartnerFilter::named("Engage Squared"),
            SortConfig::default(),
        ),
    )
    .unwrap();
    let buckets = grouped(view);

    // Only quarters with an Engage Squared deal survive: Datacom Q4 FY25,
    // TNA + Inghams Q2 FY26, HW Richardson Q3 FY26.
    let labels: Vec<&str> = buckets.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["Q4 FY25", "Q2 FY26", "Q3 FY26"]);

    let q2: Vec<&str> = buckets["Q2 FY26"].iter().map(|c| c.name.as_str()).collect();
    assert_eq!(q2, vec!["Inghams", "TNA Solutions"]);
}
