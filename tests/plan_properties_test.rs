use labelgen::core::{grouper, plan};
use labelgen::{LabelPlan, LabelRecord};

fn record(model: &str, serial: &str) -> LabelRecord {
    LabelRecord {
        model: model.to_string(),
        gtin: format!("gtin-{serial}"),
        production_date: "2024-01".to_string(),
        serial: serial.to_string(),
    }
}

#[test]
fn test_grouping_is_an_order_preserving_partition() {
    let input = vec![
        record("B", "1"),
        record("A", "2"),
        record("B", "3"),
        record("C", "4"),
        record("A", "5"),
        record("B", "6"),
    ];

    let groups = grouper::group(input.clone());

    // Every record appears exactly once.
    let regrouped: Vec<LabelRecord> = groups.iter().flat_map(|g| g.items.clone()).collect();
    assert_eq!(regrouped.len(), input.len());
    for r in &input {
        assert_eq!(regrouped.iter().filter(|x| *x == r).count(), 1);
    }

    // Within-group relative order matches the input.
    for group in &groups {
        let expected: Vec<&LabelRecord> =
            input.iter().filter(|r| r.model == group.key).collect();
        let actual: Vec<&LabelRecord> = group.items.iter().collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_plan_count_is_records_plus_groups() {
    let input = vec![
        record("B", "1"),
        record("A", "2"),
        record("B", "3"),
        record("C", "4"),
    ];
    let groups = grouper::group(input);
    let plans = plan::build(&groups, "https://x");

    assert_eq!(plans.len(), 4 + 3);
    let summaries = plans
        .iter()
        .filter(|p| matches!(p, LabelPlan::Summary { .. }))
        .count();
    assert_eq!(summaries, 3);
}

#[test]
fn test_groups_never_interleave() {
    let groups = grouper::group(vec![
        record("B", "1"),
        record("A", "2"),
        record("B", "3"),
    ]);
    let plans = plan::build(&groups, "https://x");

    let models: Vec<&str> = plans
        .iter()
        .map(|p| match p {
            LabelPlan::Summary { model_name, .. } => model_name.as_str(),
            LabelPlan::Detail { model_name, .. } => model_name.as_str(),
        })
        .collect();

    assert_eq!(models, vec!["B", "B", "B", "A", "A"]);
}
