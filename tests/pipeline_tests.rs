//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → filter → sort → export pipeline,
//! absent-dataset behavior, and the command handlers with real files.

use std::path::Path;
use workboard::loader::{load_dashboard, try_load};
use workboard::model::{DatasetKind, DatasetState, Table};
use workboard::reports::{table_to_csv, SummaryReport};
use workboard::view::{
    filter_options, transform, RecruitmentSort, SortKey, ViewRequest, SALARY_TOP_N,
};

// ============================================================================
// Test Fixtures
// ============================================================================

const RECRUITMENT_CSV: &str = "\
employee_source,retention_weighted_index,median_tenure_years,avg_perf,retention_rate
Referral,0.82,4.1,3.9,0.81
Job Board,0.55,2.0,3.2,0.48
Agency,0.61,2.7,3.5,0.52
Campus,0.61,1.9,3.8,0.37
";

const MANAGER_CSV: &str = "\
manager_name,mei,retention_rate
Kim,0.91,0.84
Alvarez,0.66,0.37
Osei,0.74,0.22
";

const TURNOVER_CSV: &str = "\
department,turnover_rate
Sales,0.41
Engineering,0.12
Support,0.27
Sales Ops,n/a
";

const SALARY_CSV: &str = "\
title,band,base_salary
Analyst,B1,\"$50,000\"
Contractor,X0,abc
Director,D2,\"$70,000\"
Engineer,B3,\"$65,500\"
Manager,C1,\"$62,000\"
Specialist,B2,\"$54,250\"
Lead,B4,\"$68,000\"
Intern,A0,\"$31,000\"
";

fn write_all_fixtures(dir: &Path) {
    std::fs::write(dir.join(DatasetKind::Recruitment.file_name()), RECRUITMENT_CSV).unwrap();
    std::fs::write(dir.join(DatasetKind::Managers.file_name()), MANAGER_CSV).unwrap();
    std::fs::write(dir.join(DatasetKind::Turnover.file_name()), TURNOVER_CSV).unwrap();
    std::fs::write(dir.join(DatasetKind::Salary.file_name()), SALARY_CSV).unwrap();
}

fn table(kind: DatasetKind, dir: &Path) -> Table {
    match load_dashboard(dir).state(kind) {
        DatasetState::Present(t) => t.clone(),
        DatasetState::Absent => panic!("fixture for {kind} should load"),
    }
}

// ============================================================================
// Load Stage
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn missing_files_yield_absent_everywhere() {
        let dir = tempfile::tempdir().unwrap();
        let dash = load_dashboard(dir.path());
        for kind in DatasetKind::ALL {
            assert_eq!(dash.state(kind), &DatasetState::Absent);
            assert_eq!(dash.counter(kind), None);
        }
        assert!(dash.is_empty());
    }

    #[test]
    fn malformed_file_is_absent_not_partial() {
        let dir = tempfile::tempdir().unwrap();
        // Rows 1-2 are fine, row 3 is ragged: the whole dataset is absent
        std::fs::write(
            dir.path().join(DatasetKind::Turnover.file_name()),
            "department,turnover_rate\nSales,0.41\nEngineering,0.12\nSupport,0.27,extra\n",
        )
        .unwrap();
        let state = try_load(&dir.path().join(DatasetKind::Turnover.file_name()));
        assert_eq!(state, DatasetState::Absent);
    }

    #[test]
    fn full_directory_loads_all_four() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let dash = load_dashboard(dir.path());
        assert_eq!(dash.counter(DatasetKind::Recruitment), Some(4));
        assert_eq!(dash.counter(DatasetKind::Managers), Some(3));
        // distinct departments, not rows
        assert_eq!(dash.counter(DatasetKind::Turnover), Some(4));
        assert_eq!(dash.counter(DatasetKind::Salary), Some(8));
    }

    #[test]
    fn one_bad_file_does_not_affect_the_others() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        std::fs::write(
            dir.path().join(DatasetKind::Managers.file_name()),
            b"manager_name,mei\n\xff\xfe,0.5\n",
        )
        .unwrap();

        let dash = load_dashboard(dir.path());
        assert_eq!(dash.counter(DatasetKind::Managers), None);
        assert!(dash.state(DatasetKind::Recruitment).is_present());
        assert!(dash.state(DatasetKind::Salary).is_present());
    }
}

// ============================================================================
// Transform Stage
// ============================================================================

mod transform_stage {
    use super::*;

    #[test]
    fn empty_selection_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Turnover, dir.path());

        let unsorted_request = ViewRequest {
            selection: Vec::new(),
            sort: SortKey::Column("turnover_rate".into()),
        };
        let out = transform(&t, DatasetKind::Turnover, &unsorted_request);
        assert_eq!(out.row_count(), t.row_count());

        let mut original: Vec<Vec<String>> = t.rows.clone();
        let mut transformed = out.rows.clone();
        original.sort();
        transformed.sort();
        assert_eq!(original, transformed);
    }

    #[test]
    fn selection_produces_exact_membership_subset() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Managers, dir.path());

        let request = ViewRequest::for_kind(DatasetKind::Managers)
            .with_selection(vec!["Kim".into(), "Osei".into(), "Nobody".into()]);
        let out = transform(&t, DatasetKind::Managers, &request);
        let names: Vec<&str> = out.column_values("manager_name").collect();
        assert_eq!(names, ["Kim", "Osei"]);
    }

    #[test]
    fn descending_sort_with_non_numeric_last() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Turnover, dir.path());

        let out = transform(&t, DatasetKind::Turnover, &ViewRequest::for_kind(DatasetKind::Turnover));
        let depts: Vec<&str> = out.column_values("department").collect();
        // "Sales Ops" has turnover_rate n/a and sinks to the bottom
        assert_eq!(depts, ["Sales", "Support", "Engineering", "Sales Ops"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Recruitment, dir.path());

        let out = transform(&t, DatasetKind::Recruitment, &ViewRequest::for_kind(DatasetKind::Recruitment));
        let sources: Vec<&str> = out.column_values("employee_source").collect();
        // Agency and Campus tie at 0.61; Agency precedes Campus in the file
        assert_eq!(sources, ["Referral", "Agency", "Campus", "Job Board"]);
    }

    #[test]
    fn salary_sort_and_top_five() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Salary, dir.path());

        let sorted = transform(&t, DatasetKind::Salary, &ViewRequest::for_kind(DatasetKind::Salary));
        let titles: Vec<&str> = sorted.column_values("title").collect();
        assert_eq!(
            titles,
            ["Director", "Lead", "Engineer", "Manager", "Specialist", "Analyst", "Intern", "Contractor"]
        );

        let top = sorted.head(SALARY_TOP_N);
        assert_eq!(top.row_count(), 5);
        assert_eq!(top.rows, sorted.rows[..5].to_vec());
    }

    #[test]
    fn top_five_with_fewer_rows_shows_all() {
        let t = Table::new(
            vec!["title".into(), "base_salary".into()],
            vec![
                vec!["a".into(), "1".into()],
                vec!["b".into(), "3".into()],
                vec!["c".into(), "2".into()],
            ],
        );
        let sorted = transform(&t, DatasetKind::Salary, &ViewRequest::for_kind(DatasetKind::Salary));
        assert_eq!(sorted.head(SALARY_TOP_N).row_count(), 3);
    }

    #[test]
    fn filter_options_track_the_current_load() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Turnover, dir.path());
        let options = filter_options(&t, "department");
        let values: Vec<&str> = options.iter().map(String::as_str).collect();
        assert_eq!(values, ["Sales", "Engineering", "Support", "Sales Ops"]);
    }
}

// ============================================================================
// Export Stage
// ============================================================================

mod export_stage {
    use super::*;

    #[test]
    fn export_bytes_match_displayed_view_for_every_tab() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let dash = load_dashboard(dir.path());

        for kind in DatasetKind::ALL {
            let t = dash.state(kind).table().unwrap();
            let view = transform(t, kind, &ViewRequest::for_kind(kind));
            let csv = table_to_csv(&view);

            let mut expected = view.headers.join(",");
            expected.push('\n');
            for row in &view.rows {
                let cells: Vec<String> = row
                    .iter()
                    .map(|c| {
                        if c.contains(',') {
                            format!("\"{c}\"")
                        } else {
                            c.clone()
                        }
                    })
                    .collect();
                expected.push_str(&cells.join(","));
                expected.push('\n');
            }
            assert_eq!(csv, expected, "export must mirror the view for {kind}");
        }
    }

    #[test]
    fn export_reflects_filter_and_sort_not_raw_load() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let t = table(DatasetKind::Recruitment, dir.path());

        let request = ViewRequest {
            selection: vec!["Job Board".into(), "Referral".into()],
            sort: SortKey::Column(RecruitmentSort::MedianTenure.column().to_string()),
        };
        let view = transform(&t, DatasetKind::Recruitment, &request);
        let csv = table_to_csv(&view);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Referral,"));
        assert!(lines[2].starts_with("Job Board,"));
    }

    #[test]
    fn fixed_export_names_per_tab() {
        assert_eq!(DatasetKind::Recruitment.export_file_name(), "recruitment.csv");
        assert_eq!(DatasetKind::Managers.export_file_name(), "manager_summary.csv");
        assert_eq!(DatasetKind::Turnover.export_file_name(), "turnover.csv");
        assert_eq!(DatasetKind::Salary.export_file_name(), "salary_grid.csv");
    }
}

// ============================================================================
// Summary Stage
// ============================================================================

mod summary_stage {
    use super::*;

    #[test]
    fn summary_counters_with_partial_data() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DatasetKind::Turnover.file_name()), TURNOVER_CSV).unwrap();

        let dash = load_dashboard(dir.path());
        let report = SummaryReport::from_dashboard(&dash);
        let text = report.to_text();

        assert!(text.contains("Departments"));
        assert!(text.contains('4'));
        // three absent datasets show N/A
        assert_eq!(text.matches("N/A").count(), 3);
    }

    #[test]
    fn summary_json_is_machine_readable() {
        let dir = tempfile::tempdir().unwrap();
        write_all_fixtures(dir.path());
        let dash = load_dashboard(dir.path());
        let json = SummaryReport::from_dashboard(&dash).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["counters"].as_array().unwrap().len(), 4);
    }
}
